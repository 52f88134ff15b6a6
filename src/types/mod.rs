//! Value types for the matching engine.
//!
//! This module contains the vocabulary the engine speaks:
//!
//! - [`order`] - Order-related types (Side, TimeInForce)
//! - [`command`] - The closed set of commands the engine accepts
//! - [`trade`] - Trade execution records

pub mod command;
pub mod order;
pub mod trade;

pub use command::Command;
pub use order::{Side, TimeInForce};
pub use trade::Trade;

/// Limit price in integer ticks.
///
/// Prices are always positive integers. Using an integer type instead of
/// floating point gives:
///
/// - Exact arithmetic (no floating point errors)
/// - Faster comparisons
/// - Cache efficiency
pub type Price = u64;

/// Order quantity in integer units.
///
/// Always positive for an order that reaches the engine; a resting order
/// whose quantity hits zero is removed, never stored at zero.
pub type Quantity = u64;
