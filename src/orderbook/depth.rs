//! Aggregated depth-of-book snapshots.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::types::{Price, Quantity};

/// Per-side price levels aggregated from the book.
///
/// Both sides are strictly descending by price. Printed with asks above
/// bids this puts the best ask immediately above the best bid, visually
/// centered on the spread. Levels with zero quantity never appear; the
/// book physically removes filled and cancelled orders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Depth {
    /// Ask levels, highest price first (worst to best).
    pub asks: Vec<(Price, Quantity)>,
    /// Bid levels, highest price first (best to worst).
    pub bids: Vec<(Price, Quantity)>,
}

impl fmt::Display for Depth {
    /// Render the reference two-section listing:
    ///
    /// ```text
    /// SELL:
    /// <price> <quantity>
    /// BUY:
    /// <price> <quantity>
    /// ```
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SELL:")?;
        for (price, quantity) in &self.asks {
            write!(f, "\n{price} {quantity}")?;
        }
        write!(f, "\nBUY:")?;
        for (price, quantity) in &self.bids {
            write!(f, "\n{price} {quantity}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_both_sides() {
        let depth = Depth {
            asks: vec![(105, 3), (101, 7)],
            bids: vec![(100, 8), (99, 1)],
        };

        assert_eq!(depth.to_string(), "SELL:\n105 3\n101 7\nBUY:\n100 8\n99 1");
    }

    #[test]
    fn test_render_empty_book() {
        let depth = Depth {
            asks: vec![],
            bids: vec![],
        };

        assert_eq!(depth.to_string(), "SELL:\nBUY:");
    }
}
