//! Error types for the matchbook crate.
//!
//! Silent conditions from the reference behavior (duplicate id on a new
//! order, cancel/modify of an unknown id) are *not* errors; they are
//! no-ops the engine logs and moves past. Errors here cover malformed
//! values that must never reach the matching loop, protocol parse
//! failures, and I/O from the session driver.

use thiserror::Error;

/// The main error type for this crate.
#[derive(Debug, Error)]
pub enum Error {
    /// Price must be a positive integer.
    #[error("price must be positive")]
    InvalidPrice,

    /// Quantity must be a positive integer.
    #[error("quantity must be positive")]
    InvalidQuantity,

    /// Order ids are non-empty, opaque strings.
    #[error("order id must not be empty")]
    EmptyOrderId,

    /// A protocol line could not be parsed into a command.
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    /// I/O failure while driving a command stream.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

/// Failure to parse a protocol line into a [`Command`](crate::types::Command).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The first token was not a known command verb.
    #[error("unknown command verb `{0}`")]
    UnknownVerb(String),

    /// A token that should be GFD or IOC was something else.
    #[error("unknown time-in-force `{0}`")]
    UnknownTimeInForce(String),

    /// A token that should be BUY or SELL was something else.
    #[error("unknown side `{0}`")]
    UnknownSide(String),

    /// The line ended before all fields of the command were present.
    #[error("missing {0} field")]
    MissingField(&'static str),

    /// A numeric field did not parse or was not positive.
    #[error("invalid {field} `{value}`")]
    InvalidNumber {
        /// Which field failed.
        field: &'static str,
        /// The offending token.
        value: String,
    },

    /// Extra tokens after a complete command.
    #[error("trailing input `{0}`")]
    TrailingInput(String),
}
