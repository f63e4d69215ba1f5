//! # Stock events emitted by machines and the surrounding harness.
//!
//! The [`EventKind`] enum is the closed set of event types the bus knows about:
//! - **Input events**: [`EventKind::Sale`] and [`EventKind::Refill`], produced by
//!   the harness and consumed by the stock subscribers.
//! - **Derived events**: [`EventKind::LowStockWarning`] and
//!   [`EventKind::StockLevelOk`], published by a [`Machine`](crate::Machine)
//!   when an adjustment crosses the low-stock threshold.
//!
//! The [`Event`] struct is an immutable value: it carries the kind, the id of
//! the machine it concerns, and an optional quantity (sale/refill amount).
//! Events compare by value and are never mutated after construction. They are
//! serializable so a harness can log or replay a run.
//!
//! ## Example
//! ```rust
//! use stockvisor::{Event, EventKind};
//!
//! let ev = Event::new(EventKind::Sale, "vm-7").with_quantity(3);
//!
//! assert_eq!(ev.kind, EventKind::Sale);
//! assert_eq!(ev.machine, "vm-7");
//! assert_eq!(ev.quantity, Some(3));
//! assert_eq!(ev, Event::sale("vm-7", 3));
//! ```

use serde::{Deserialize, Serialize};

/// Classification of stock events.
///
/// The set is closed: subscribers match on the kind tag instead of inspecting
/// runtime types, and anything outside a subscriber's scope is a silent no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventKind {
    /// Units were sold from a machine.
    ///
    /// Sets:
    /// - `machine`: target machine id
    /// - `quantity`: units sold
    Sale,

    /// Units were added to a machine.
    ///
    /// Sets:
    /// - `machine`: target machine id
    /// - `quantity`: units added
    Refill,

    /// A machine's quantity crossed into the low band (at or below the
    /// configured threshold). Derived, fired at most once per adjustment.
    ///
    /// Sets:
    /// - `machine`: machine id
    LowStockWarning,

    /// A machine's quantity crossed back above the configured threshold.
    /// Derived, fired at most once per adjustment.
    ///
    /// Sets:
    /// - `machine`: machine id
    StockLevelOk,
}

impl EventKind {
    /// Returns a short stable label (snake_case) for use in logs.
    pub fn as_label(&self) -> &'static str {
        match self {
            EventKind::Sale => "sale",
            EventKind::Refill => "refill",
            EventKind::LowStockWarning => "low_stock_warning",
            EventKind::StockLevelOk => "stock_level_ok",
        }
    }
}

impl std::fmt::Display for EventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_label())
    }
}

/// Immutable record of something that happened to one machine.
///
/// - `kind`: event classification
/// - `machine`: id of the machine the event concerns
/// - `quantity`: sale/refill amount, absent on derived events
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    /// Event classification.
    pub kind: EventKind,
    /// Id of the machine this event concerns.
    pub machine: String,
    /// Units sold or added, if applicable.
    pub quantity: Option<u32>,
}

impl Event {
    /// Creates a new event of the given kind for the given machine.
    pub fn new(kind: EventKind, machine: impl Into<String>) -> Self {
        Self {
            kind,
            machine: machine.into(),
            quantity: None,
        }
    }

    /// Attaches a sale/refill amount.
    #[inline]
    pub fn with_quantity(mut self, quantity: u32) -> Self {
        self.quantity = Some(quantity);
        self
    }

    /// Creates a sale event.
    #[inline]
    pub fn sale(machine: impl Into<String>, quantity: u32) -> Self {
        Event::new(EventKind::Sale, machine).with_quantity(quantity)
    }

    /// Creates a refill event.
    #[inline]
    pub fn refill(machine: impl Into<String>, quantity: u32) -> Self {
        Event::new(EventKind::Refill, machine).with_quantity(quantity)
    }

    /// Creates a low-stock warning for the given machine.
    #[inline]
    pub fn low_stock_warning(machine: impl Into<String>) -> Self {
        Event::new(EventKind::LowStockWarning, machine)
    }

    /// Creates a stock-recovered event for the given machine.
    #[inline]
    pub fn stock_level_ok(machine: impl Into<String>) -> Self {
        Event::new(EventKind::StockLevelOk, machine)
    }
}
