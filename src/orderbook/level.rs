//! A single price level: a FIFO queue of resting orders.
//!
//! Orders at one price are kept in strict arrival order, which is what
//! encodes time priority. A partial fill reduces the front order's quantity
//! in place so the order keeps its queue position; a full fill pops it.

use std::collections::VecDeque;

use crate::types::Quantity;

/// All resting orders at one price on one side, oldest first.
#[derive(Debug, Clone, Default)]
pub struct PriceLevel {
    orders: VecDeque<RestingOrder>,
    total_quantity: Quantity,
}

#[derive(Debug, Clone)]
struct RestingOrder {
    id: String,
    quantity: Quantity,
}

impl PriceLevel {
    /// Create an empty level.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an order at the back of the queue (loses to everything
    /// already resting at this price).
    pub fn push(&mut self, id: String, quantity: Quantity) {
        self.orders.push_back(RestingOrder { id, quantity });
        self.total_quantity += quantity;
    }

    /// Id and quantity of the oldest order, if any.
    #[must_use]
    pub fn front(&self) -> Option<(&str, Quantity)> {
        self.orders.front().map(|o| (o.id.as_str(), o.quantity))
    }

    /// Remove and return the oldest order as `(id, quantity)`.
    pub fn pop_front(&mut self) -> Option<(String, Quantity)> {
        let order = self.orders.pop_front()?;
        self.total_quantity -= order.quantity;
        Some((order.id, order.quantity))
    }

    /// Reduce the front order's quantity in place, preserving its position.
    ///
    /// `by` must be strictly less than the front order's quantity; a fill
    /// that consumes the whole order goes through [`pop_front`] instead.
    ///
    /// [`pop_front`]: PriceLevel::pop_front
    pub fn reduce_front(&mut self, by: Quantity) {
        if let Some(front) = self.orders.front_mut() {
            debug_assert!(by < front.quantity);
            front.quantity -= by;
            self.total_quantity -= by;
        }
    }

    /// Remove the order with the given id, returning its quantity.
    pub fn remove(&mut self, id: &str) -> Option<Quantity> {
        let position = self.orders.iter().position(|o| o.id == id)?;
        let order = self.orders.remove(position)?;
        self.total_quantity -= order.quantity;
        Some(order.quantity)
    }

    /// Whether the level holds no orders.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    /// Aggregate resting quantity across all orders at this price.
    #[must_use]
    pub fn total_quantity(&self) -> Quantity {
        self.total_quantity
    }

    /// Number of orders at this level.
    #[must_use]
    pub fn order_count(&self) -> usize {
        self.orders.len()
    }

    /// Ids in queue order, oldest first.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.orders.iter().map(|o| o.id.as_str())
    }
}
