//! Sequential command-stream driver.
//!
//! A [`Session`] owns one [`OrderBook`] and applies commands to completion,
//! one at a time; no partial application is ever observable. It can be
//! driven command-by-command via [`Session::apply`] or over a whole line
//! stream via [`Session::run`].

use std::io::{BufRead, Write};

use tracing::warn;

use crate::config::Config;
use crate::orderbook::{Depth, OrderBook};
use crate::protocol::parse_line;
use crate::types::{Command, Trade};
use crate::Result;

/// What one command produced: zero or more trades, and a depth snapshot if
/// the command asked for one.
#[derive(Debug, Clone, Default)]
pub struct Response {
    /// Trades emitted by the command, in execution order.
    pub trades: Vec<Trade>,
    /// Depth snapshot, present for [`Command::Snapshot`].
    pub depth: Option<Depth>,
}

/// A single-instrument engine plus its configuration.
#[derive(Debug)]
pub struct Session {
    book: OrderBook,
    config: Config,
}

impl Session {
    /// Create a session with an empty book.
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self {
            book: OrderBook::new(),
            config,
        }
    }

    /// Read access to the underlying book.
    #[must_use]
    pub fn book(&self) -> &OrderBook {
        &self.book
    }

    /// Apply one command to completion.
    ///
    /// # Errors
    ///
    /// Fails only on malformed field values; silent no-op conditions
    /// (duplicate id, unknown id) return an empty [`Response`].
    pub fn apply(&mut self, command: Command) -> Result<Response> {
        let mut response = Response::default();
        match command {
            Command::New {
                side,
                time_in_force,
                price,
                quantity,
                id,
            } => {
                response.trades = self.book.submit(side, time_in_force, price, quantity, &id)?;
            }
            Command::Cancel { id } => self.book.cancel(&id),
            Command::Modify {
                id,
                side,
                price,
                quantity,
            } => {
                response.trades = self.book.modify(&id, side, price, quantity)?;
            }
            Command::Snapshot => {
                response.depth = Some(self.book.depth(self.config.snapshot_depth()));
            }
        }
        Ok(response)
    }

    /// Drive a whole line stream, writing trade lines and snapshots to
    /// `writer` in the reference wire format.
    ///
    /// A blank line ends the feed. Malformed lines are skipped with a
    /// warning unless the configuration is strict.
    ///
    /// # Errors
    ///
    /// Fails on I/O errors, and on malformed lines in strict mode.
    pub fn run<R: BufRead, W: Write>(&mut self, reader: R, writer: &mut W) -> Result<()> {
        for line in reader.lines() {
            let line = line?;
            if line.trim().is_empty() {
                break;
            }

            let command = match parse_line(&line) {
                Ok(Some(command)) => command,
                Ok(None) => continue,
                Err(err) if self.config.strict() => return Err(err.into()),
                Err(err) => {
                    warn!(line = %line, %err, "skipping malformed line");
                    continue;
                }
            };

            let response = self.apply(command)?;
            for trade in &response.trades {
                writeln!(writer, "{trade}")?;
            }
            if let Some(depth) = &response.depth {
                writeln!(writer, "{depth}")?;
            }
        }
        Ok(())
    }
}
