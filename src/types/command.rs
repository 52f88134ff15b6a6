//! The closed set of commands the engine accepts.
//!
//! Commands arrive one at a time from a parser (the bundled one lives in
//! [`crate::protocol`]) and are applied sequentially by a
//! [`Session`](crate::session::Session) or directly against an
//! [`OrderBook`](crate::orderbook::OrderBook).

use serde::{Deserialize, Serialize};

use super::order::{Side, TimeInForce};
use super::{Price, Quantity};

/// A single structured command for the matching engine.
///
/// Price and quantity are positive and ids non-empty by the time a command
/// reaches the engine; the engine still fail-fast rejects malformed values
/// rather than matching with them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "op")]
pub enum Command {
    /// Submit a new limit order.
    New {
        /// Buy or sell.
        side: Side,
        /// What happens to unmatched residual quantity.
        time_in_force: TimeInForce,
        /// Limit price.
        price: Price,
        /// Order quantity.
        quantity: Quantity,
        /// Caller-chosen order identifier, unique among resting orders.
        id: String,
    },
    /// Cancel the resting order with the given id. Unknown ids are ignored.
    Cancel {
        /// Identifier of the order to cancel.
        id: String,
    },
    /// Replace the resting order with the given id. The order is removed and
    /// re-submitted, losing its queue position even when nothing changed.
    Modify {
        /// Identifier of the order to replace.
        id: String,
        /// New side; may differ from the current side.
        side: Side,
        /// New limit price.
        price: Price,
        /// New quantity.
        quantity: Quantity,
    },
    /// Request a depth snapshot of both sides.
    Snapshot,
}
