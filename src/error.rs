//! Error types used by the stockvisor core.
//!
//! The error surface is intentionally small: the dispatch path never fails
//! (out-of-scope kinds, unknown machine ids, and double subscribe/unsubscribe
//! are silent no-ops by design). The only typed error is [`StockError`],
//! raised by [`Machine::consume_stock`](crate::Machine::consume_stock) when a
//! sale would take a machine below zero.

use thiserror::Error;

/// # Errors produced by machine stock operations.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum StockError {
    /// A sale asked for more units than the machine currently holds.
    ///
    /// The machine's quantity is left unchanged and no derived event fires.
    #[error("insufficient stock on {machine}: requested {requested}, available {available}")]
    InsufficientStock {
        /// Id of the machine the sale targeted.
        machine: String,
        /// Units the sale asked for.
        requested: u32,
        /// Units actually available.
        available: i64,
    },
}

impl StockError {
    /// Returns a short stable label (snake_case) for use in logs.
    ///
    /// # Example
    /// ```
    /// use stockvisor::StockError;
    ///
    /// let err = StockError::InsufficientStock {
    ///     machine: "vm-1".into(),
    ///     requested: 5,
    ///     available: 2,
    /// };
    /// assert_eq!(err.as_label(), "insufficient_stock");
    /// ```
    pub fn as_label(&self) -> &'static str {
        match self {
            StockError::InsufficientStock { .. } => "insufficient_stock",
        }
    }
}
