//! Trade execution records.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{Price, Quantity};

/// A single execution between a resting order and an incoming order.
///
/// Both limit prices are reported verbatim: the resting (passive) half of
/// the record carries the resting order's own price, and the incoming
/// (aggressive) half carries the price the incoming order was submitted
/// with. The two need not be equal when an order crosses through a better
/// price. This asymmetry is part of the output contract, not an artifact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trade {
    /// Identifier of the resting order that was hit.
    pub resting_id: String,
    /// The resting order's own limit price.
    pub resting_price: Price,
    /// Identifier of the incoming order.
    pub incoming_id: String,
    /// The incoming order's submitted limit price.
    pub incoming_price: Price,
    /// Quantity exchanged.
    pub quantity: Quantity,
}

impl fmt::Display for Trade {
    /// Render the reference wire format:
    /// `TRADE <restingId> <restingPrice> <qty> <incomingId> <incomingPrice> <qty>`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "TRADE {} {} {} {} {} {}",
            self.resting_id,
            self.resting_price,
            self.quantity,
            self.incoming_id,
            self.incoming_price,
            self.quantity
        )
    }
}
