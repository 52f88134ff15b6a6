//! # matchbook
//!
//! A single-instrument continuous double-auction matching engine.
//!
//! ## Features
//!
//! - **Price-time priority matching** - Best price first, earliest arrival
//!   breaks ties; partial fills keep their queue position
//! - **Cancel / modify / time-in-force** - GFD residuals rest, IOC
//!   residuals are discarded; modify is a full remove-and-reinsert that
//!   always loses time priority
//! - **Depth snapshots** - Per-price aggregated levels for both sides
//! - **Line protocol** - The classic `BUY/SELL/CANCEL/MODIFY/PRINT` text
//!   stream, with trades reported as `TRADE` lines
//!
//! ## Quick Start
//!
//! ```rust
//! use matchbook::orderbook::OrderBook;
//! use matchbook::types::{Side, TimeInForce};
//!
//! let mut book = OrderBook::new();
//!
//! book.submit(Side::Sell, TimeInForce::GoodForDay, 100, 5, "S1")?;
//! let trades = book.submit(Side::Buy, TimeInForce::GoodForDay, 100, 2, "B1")?;
//!
//! assert_eq!(trades[0].to_string(), "TRADE S1 100 2 B1 100 2");
//! assert_eq!(book.best_ask(), Some((100, 3)));
//! # Ok::<(), matchbook::Error>(())
//! ```
//!
//! Or drive a whole command stream:
//!
//! ```rust
//! use matchbook::{Config, Session};
//!
//! let mut session = Session::new(Config::new());
//! let mut out = Vec::new();
//! session.run("SELL GFD 10 4 S1\nPRINT\n".as_bytes(), &mut out)?;
//!
//! assert_eq!(String::from_utf8(out).unwrap(), "SELL:\n10 4\nBUY:\n");
//! # Ok::<(), matchbook::Error>(())
//! ```
//!
//! ## Architecture
//!
//! - [`types`] - Commands, sides, time-in-force, trade records
//! - [`orderbook`] - The book itself: matching, cancel/modify, snapshots
//! - [`protocol`] - Text protocol parser
//! - [`session`] - Sequential command-stream driver
//! - [`config`] - Session configuration
//! - [`error`] - Error types for the crate
//!
//! ## Performance
//!
//! The engine is designed for low-latency single-threaded operation:
//!
//! - Integer prices and quantities, no floating point
//! - `BTreeMap` price levels: O(log n) insert/remove, O(1) best bid/ask
//! - `FxHashMap` id registry for O(log n) cancel and modify
//! - Matching mutates resting quantity in place on partial fills

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![deny(unsafe_code)]

pub mod config;
pub mod error;
pub mod orderbook;
pub mod protocol;
pub mod session;
pub mod types;

// Re-export main types at crate root for convenience
pub use config::Config;
pub use error::Error;
pub use session::{Response, Session};

/// Result type alias using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;
