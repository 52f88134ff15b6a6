//! Core order book and matching algorithm.
//!
//! The book keeps each side as a `BTreeMap` from price to a FIFO
//! [`PriceLevel`], giving:
//!
//! - O(log n) insertion and removal of price levels
//! - O(1) access to the best bid/ask (via `first_key_value` / `last_key_value`)
//! - Ordered iteration for depth snapshots
//!
//! An `FxHashMap` from order id to `(side, price)` serves as the identifier
//! registry, making cancel and modify O(log n) instead of a linear scan of
//! the whole side.

use std::collections::BTreeMap;

use rustc_hash::FxHashMap;
use tracing::{debug, trace};

use crate::error::Error;
use crate::types::{Price, Quantity, Side, TimeInForce, Trade};
use crate::Result;

use super::depth::Depth;
use super::level::PriceLevel;

/// Where a resting order currently lives. The registry holds no order
/// data of its own; the price level owns the order.
#[derive(Debug, Clone, Copy)]
struct OrderRef {
    side: Side,
    price: Price,
}

/// A single-instrument continuous double-auction order book.
///
/// # Ordering Invariants
///
/// - Ask levels are sorted ascending: the best (lowest) ask matches first.
/// - Bid levels are sorted descending: the best (highest) bid matches first.
/// - Within a level, orders match in arrival order (time priority).
/// - After any submission completes, the book is uncrossed: either one side
///   is empty or the best ask price is strictly above the best bid price.
///
/// # Thread Safety
///
/// This struct is `Send` but not internally synchronized; all mutation must
/// go through one logical owner. For multiple producers, wrap it in
/// [`SharedBook`](super::SharedBook).
#[derive(Debug, Clone, Default)]
pub struct OrderBook {
    /// Bid levels: price -> FIFO queue. Best bid = highest = last.
    bids: BTreeMap<Price, PriceLevel>,
    /// Ask levels: price -> FIFO queue. Best ask = lowest = first.
    asks: BTreeMap<Price, PriceLevel>,
    /// Identifier registry: id -> current location of the resting order.
    orders: FxHashMap<String, OrderRef>,
}

impl OrderBook {
    /// Create an empty book.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Submit a new limit order.
    ///
    /// The order first matches against the opposite side in price-time
    /// priority; the returned trades are in execution order. Residual
    /// quantity rests for [`TimeInForce::GoodForDay`] and is discarded for
    /// [`TimeInForce::ImmediateOrCancel`].
    ///
    /// A submission whose id is already registered is dropped whole:
    /// no trades, no state change. This mirrors cancel/modify of an
    /// unknown id being silent no-ops.
    ///
    /// # Errors
    ///
    /// Fails fast on a zero price, zero quantity, or empty id, without
    /// touching the book.
    pub fn submit(
        &mut self,
        side: Side,
        time_in_force: TimeInForce,
        price: Price,
        quantity: Quantity,
        id: &str,
    ) -> Result<Vec<Trade>> {
        validate(price, quantity, id)?;
        Ok(self.submit_inner(side, time_in_force, price, quantity, id, false))
    }

    /// Cancel the resting order with the given id.
    ///
    /// Unknown ids are ignored; cancelling twice is a no-op. An order can
    /// only be cancelled while resting, matching within one `submit` call
    /// is atomic.
    pub fn cancel(&mut self, id: &str) {
        let Some(location) = self.orders.remove(id) else {
            debug!(id, "cancel of unknown id ignored");
            return;
        };
        self.remove_resting(location, id);
    }

    /// Replace the resting order with the given id.
    ///
    /// The order is removed and re-submitted as good-for-day with the new
    /// side, price, and quantity. Time priority is unconditionally lost,
    /// even when every field is unchanged; the re-submitted order may match
    /// immediately, so this can emit trades. The new side may differ from
    /// the current one. Unknown ids are ignored.
    ///
    /// # Errors
    ///
    /// Fails fast on a zero price, zero quantity, or empty id, without
    /// touching the book.
    pub fn modify(
        &mut self,
        id: &str,
        side: Side,
        price: Price,
        quantity: Quantity,
    ) -> Result<Vec<Trade>> {
        validate(price, quantity, id)?;
        let Some(location) = self.orders.remove(id) else {
            debug!(id, "modify of unknown id ignored");
            return Ok(Vec::new());
        };
        // Unregister before re-submitting so a full fill of the replacement
        // cannot leave a stale registry entry behind.
        self.remove_resting(location, id);
        Ok(self.submit_inner(side, TimeInForce::GoodForDay, price, quantity, id, true))
    }

    /// Aggregated depth snapshot of both sides, each strictly descending by
    /// price. `limit` keeps only the best `n` levels per side; the kept ask
    /// levels are still listed worst to best.
    #[must_use]
    pub fn depth(&self, limit: Option<usize>) -> Depth {
        let take = limit.unwrap_or(usize::MAX);

        // Best asks are the lowest prices; collect best-first, then flip
        // into the descending output order.
        let mut asks: Vec<(Price, Quantity)> = self
            .asks
            .iter()
            .take(take)
            .map(|(&p, level)| (p, level.total_quantity()))
            .collect();
        asks.reverse();

        let bids = self
            .bids
            .iter()
            .rev()
            .take(take)
            .map(|(&p, level)| (p, level.total_quantity()))
            .collect();

        Depth { asks, bids }
    }

    /// Best bid as `(price, aggregate_quantity)`, or `None` if no bids.
    #[must_use]
    pub fn best_bid(&self) -> Option<(Price, Quantity)> {
        self.bids
            .last_key_value()
            .map(|(&p, level)| (p, level.total_quantity()))
    }

    /// Best ask as `(price, aggregate_quantity)`, or `None` if no asks.
    #[must_use]
    pub fn best_ask(&self) -> Option<(Price, Quantity)> {
        self.asks
            .first_key_value()
            .map(|(&p, level)| (p, level.total_quantity()))
    }

    /// Whether the given id has resting quantity in the book.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.orders.contains_key(id)
    }

    /// Number of resting orders across both sides.
    #[must_use]
    pub fn order_count(&self) -> usize {
        self.orders.len()
    }

    /// Whether the book holds no resting orders.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    /// Submission shared by new orders and modify-replacements. A replace
    /// skips the duplicate-id check: its id was deliberately re-submitted
    /// and has already been unregistered.
    fn submit_inner(
        &mut self,
        side: Side,
        time_in_force: TimeInForce,
        price: Price,
        quantity: Quantity,
        id: &str,
        replace: bool,
    ) -> Vec<Trade> {
        if !replace && self.orders.contains_key(id) {
            debug!(id, "duplicate order id, dropping submission");
            return Vec::new();
        }

        let (trades, residual) = self.match_incoming(side, price, quantity, id);

        match time_in_force {
            TimeInForce::GoodForDay if residual > 0 => self.rest(side, price, residual, id),
            TimeInForce::GoodForDay => {}
            // IOC residual is discarded without resting and without error.
            TimeInForce::ImmediateOrCancel => {
                if residual > 0 {
                    trace!(id, residual, "discarding immediate-or-cancel residual");
                }
            }
        }

        trades
    }

    /// Walk the opposite side from its best price while the incoming order
    /// still crosses, filling oldest-first within each level. Returns the
    /// trades in execution order plus the unfilled residual.
    fn match_incoming(
        &mut self,
        taker_side: Side,
        limit: Price,
        mut remaining: Quantity,
        taker_id: &str,
    ) -> (Vec<Trade>, Quantity) {
        let mut trades = Vec::new();

        while remaining > 0 {
            let opposite = match taker_side {
                Side::Buy => &mut self.asks,
                Side::Sell => &mut self.bids,
            };

            let best = match taker_side {
                Side::Buy => opposite.keys().next().copied(),
                Side::Sell => opposite.keys().next_back().copied(),
            };
            let Some(price) = best else { break };

            // Equal price always crosses.
            let crosses = match taker_side {
                Side::Buy => price <= limit,
                Side::Sell => price >= limit,
            };
            if !crosses {
                break;
            }

            let Some(level) = opposite.get_mut(&price) else {
                break;
            };

            while remaining > 0 {
                let Some((_, resting_quantity)) = level.front() else {
                    break;
                };

                if resting_quantity <= remaining {
                    // Full fill of the resting order: remove it from its
                    // queue and from the registry.
                    if let Some((resting_id, filled)) = level.pop_front() {
                        self.orders.remove(&resting_id);
                        remaining -= filled;
                        trades.push(Trade {
                            resting_id,
                            resting_price: price,
                            incoming_id: taker_id.to_string(),
                            incoming_price: limit,
                            quantity: filled,
                        });
                    }
                } else {
                    // Partial fill: reduce in place so the resting order
                    // keeps its queue position.
                    if let Some((resting_id, _)) = level.front() {
                        trades.push(Trade {
                            resting_id: resting_id.to_string(),
                            resting_price: price,
                            incoming_id: taker_id.to_string(),
                            incoming_price: limit,
                            quantity: remaining,
                        });
                    }
                    level.reduce_front(remaining);
                    remaining = 0;
                }
            }

            if level.is_empty() {
                opposite.remove(&price);
            }
        }

        if !trades.is_empty() {
            trace!(taker_id, executions = trades.len(), "matched incoming order");
        }
        (trades, remaining)
    }

    /// Rest residual quantity at the back of its price level and register
    /// the id. Better price sorts ahead via the tree; equal price sorts
    /// behind all existing same-price orders via the level's FIFO.
    fn rest(&mut self, side: Side, price: Price, quantity: Quantity, id: &str) {
        let tree = match side {
            Side::Buy => &mut self.bids,
            Side::Sell => &mut self.asks,
        };
        tree.entry(price).or_default().push(id.to_string(), quantity);
        self.orders.insert(id.to_string(), OrderRef { side, price });
    }

    /// Remove a resting order from its level, dropping the level once empty.
    /// The caller has already removed the registry entry.
    fn remove_resting(&mut self, location: OrderRef, id: &str) {
        let tree = match location.side {
            Side::Buy => &mut self.bids,
            Side::Sell => &mut self.asks,
        };
        if let Some(level) = tree.get_mut(&location.price) {
            level.remove(id);
            if level.is_empty() {
                tree.remove(&location.price);
            }
        }
    }
}

fn validate(price: Price, quantity: Quantity, id: &str) -> Result<()> {
    if price == 0 {
        return Err(Error::InvalidPrice);
    }
    if quantity == 0 {
        return Err(Error::InvalidQuantity);
    }
    if id.is_empty() {
        return Err(Error::EmptyOrderId);
    }
    Ok(())
}
