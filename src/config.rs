//! # Process-wide stock configuration.
//!
//! [`Config`] centralizes the two knobs the harness supplies at construction
//! time: the low-stock threshold shared by all machines and the default
//! starting quantity for machines built with
//! [`Machine::with_defaults`](crate::Machine::with_defaults).
//!
//! The threshold is injected into each machine at construction; the core never
//! reads it from a static or other process-global state.

/// Construction-time configuration for machines.
///
/// ## Field semantics
/// - `low_stock_threshold`: inclusive upper bound of the "low" band. A machine
///   with `quantity <= low_stock_threshold` is low on stock.
/// - `default_quantity`: starting quantity for machines built from this
///   config.
#[derive(Clone, Debug)]
pub struct Config {
    /// Inclusive upper bound of the low-stock band, shared by all machines.
    pub low_stock_threshold: i64,
    /// Default starting quantity per machine.
    pub default_quantity: i64,
}

impl Default for Config {
    /// Default configuration:
    ///
    /// - `low_stock_threshold = 2` (low band is `[.., 2]`)
    /// - `default_quantity = 10`
    fn default() -> Self {
        Self {
            low_stock_threshold: 2,
            default_quantity: 10,
        }
    }
}
