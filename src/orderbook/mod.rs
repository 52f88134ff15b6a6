//! Order book engine: matching, cancel/modify, and depth snapshots.
//!
//! [`OrderBook`] is the single-owner state machine; all reference behavior
//! lives there. [`SharedBook`] layers a lock on top for callers with more
//! than one command producer, serializing every mutation through one
//! logical owner so price-time ordering is preserved.
//!
//! # Example
//!
//! ```rust
//! use matchbook::orderbook::OrderBook;
//! use matchbook::types::{Side, TimeInForce};
//!
//! let mut book = OrderBook::new();
//!
//! book.submit(Side::Sell, TimeInForce::GoodForDay, 100, 5, "S1")?;
//! let trades = book.submit(Side::Buy, TimeInForce::GoodForDay, 100, 3, "B1")?;
//!
//! assert_eq!(trades.len(), 1);
//! assert_eq!(book.best_ask(), Some((100, 2)));
//! # Ok::<(), matchbook::Error>(())
//! ```

pub mod book;
pub mod depth;
pub mod level;
pub mod shared;

pub use book::OrderBook;
pub use depth::Depth;
pub use level::PriceLevel;
pub use shared::SharedBook;
