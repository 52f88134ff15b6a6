//! Order-related types.
//!
//! An order is fully described by a side, a time-in-force, a limit price,
//! a quantity, and a caller-chosen identifier. The engine stores resting
//! orders inside the book itself (see [`crate::orderbook`]), so there is no
//! standalone resting-order struct in the public API.

use serde::{Deserialize, Serialize};

/// Which side of the book an order belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    /// Buy interest; rests in the bid queue, matches against asks.
    Buy,
    /// Sell interest; rests in the ask queue, matches against bids.
    Sell,
}

impl Side {
    /// Get the opposite side (the side an incoming order matches against).
    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Side::Buy => Side::Sell,
            Side::Sell => Side::Buy,
        }
    }
}

/// How unmatched residual quantity is handled after matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeInForce {
    /// Good-for-day: residual quantity rests in the book.
    GoodForDay,
    /// Immediate-or-cancel: residual quantity is discarded, never rests.
    /// Matching still runs and trades are still emitted for the filled part.
    ImmediateOrCancel,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_side_opposite() {
        assert_eq!(Side::Buy.opposite(), Side::Sell);
        assert_eq!(Side::Sell.opposite(), Side::Buy);
    }

    #[test]
    fn test_serde_side() {
        let json = serde_json::to_string(&Side::Buy).unwrap();
        assert_eq!(json, "\"buy\"");

        let side: Side = serde_json::from_str("\"sell\"").unwrap();
        assert_eq!(side, Side::Sell);
    }

    #[test]
    fn test_serde_time_in_force() {
        let json = serde_json::to_string(&TimeInForce::ImmediateOrCancel).unwrap();
        assert_eq!(json, "\"immediate_or_cancel\"");
    }
}
