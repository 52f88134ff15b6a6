//! Thread-safe wrapper serializing all book mutations through one lock.
//!
//! The engine itself is single-owner and fully sequential. When several
//! producers feed one instrument, every mutating call must still go through
//! one logical owner or price-time ordering is lost; [`SharedBook`] makes
//! that owner a `parking_lot::Mutex` around the book.

use std::sync::Arc;

use parking_lot::Mutex;

use crate::types::{Price, Quantity, Side, TimeInForce, Trade};
use crate::Result;

use super::depth::Depth;
use super::OrderBook;

/// A cloneable handle to one order book shared between threads.
///
/// Each operation takes the lock for its full duration, so a submission's
/// matching is atomic: no cancel can interleave with an in-flight match.
///
/// # Example
///
/// ```rust
/// use matchbook::orderbook::SharedBook;
/// use matchbook::types::{Side, TimeInForce};
///
/// let book = SharedBook::new();
/// let handle = book.clone();
///
/// std::thread::spawn(move || {
///     handle.submit(Side::Buy, TimeInForce::GoodForDay, 10, 4, "B1")
/// })
/// .join()
/// .unwrap()?;
///
/// assert_eq!(book.depth(None).bids, vec![(10, 4)]);
/// # Ok::<(), matchbook::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct SharedBook {
    inner: Arc<Mutex<OrderBook>>,
}

impl SharedBook {
    /// Create a handle to a new empty book.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Submit a new limit order. See [`OrderBook::submit`].
    ///
    /// # Errors
    ///
    /// Propagates the book's fail-fast validation errors.
    pub fn submit(
        &self,
        side: Side,
        time_in_force: TimeInForce,
        price: Price,
        quantity: Quantity,
        id: &str,
    ) -> Result<Vec<Trade>> {
        self.inner.lock().submit(side, time_in_force, price, quantity, id)
    }

    /// Cancel a resting order. See [`OrderBook::cancel`].
    pub fn cancel(&self, id: &str) {
        self.inner.lock().cancel(id);
    }

    /// Replace a resting order. See [`OrderBook::modify`].
    ///
    /// # Errors
    ///
    /// Propagates the book's fail-fast validation errors.
    pub fn modify(&self, id: &str, side: Side, price: Price, quantity: Quantity) -> Result<Vec<Trade>> {
        self.inner.lock().modify(id, side, price, quantity)
    }

    /// Aggregated depth snapshot. See [`OrderBook::depth`].
    #[must_use]
    pub fn depth(&self, limit: Option<usize>) -> Depth {
        self.inner.lock().depth(limit)
    }

    /// Number of resting orders.
    #[must_use]
    pub fn order_count(&self) -> usize {
        self.inner.lock().order_count()
    }

    /// Run a closure against the locked book, for compound reads that need
    /// a consistent view across several calls.
    pub fn with_book<R>(&self, f: impl FnOnce(&mut OrderBook) -> R) -> R {
        f(&mut self.inner.lock())
    }
}
