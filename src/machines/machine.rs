//! # Vending machine with threshold-crossing detection.
//!
//! [`Machine`] owns one mutable quantity. Every adjustment runs an
//! edge-triggered check against the low-stock threshold and republishes a
//! derived event through the dispatcher when the quantity crosses the
//! boundary:
//!
//! ```text
//! quantity over time:   5 ── 4 ── 2 ── 1 ── 6      (threshold = 2)
//!                            │    │         │
//!                            │    │         └─► StockLevelOk   (crossed up)
//!                            │    └─► LowStockWarning          (crossed down)
//!                            └─► nothing                       (same side)
//! ```
//!
//! ## Rules
//! - Crossing detection compares before/after values of **one** adjustment and
//!   fires at most once per adjustment. An adjustment that starts and ends on
//!   the same side of the threshold never fires, no matter how often it
//!   repeats.
//! - Derived events go through the same queue as everything else: when an
//!   adjustment happens inside a delivery, the derived event is handled before
//!   the outermost `publish` returns.
//! - Sales that ask for more units than available are rejected with
//!   [`StockError::InsufficientStock`]; the quantity never goes negative.

use std::cell::Cell;
use std::rc::Rc;

use crate::config::Config;
use crate::error::StockError;
use crate::events::{Dispatcher, Event};

/// Shared handle to a machine.
///
/// Machines are shared between subscriber instances; the quantity cell keeps
/// them interior-mutable behind the shared handle.
pub type MachineRef = Rc<Machine>;

/// A vending machine: an id, a quantity, and a dispatcher to report to.
///
/// The dispatcher reference and the threshold are set at construction and
/// never change. The quantity is mutated only through
/// [`consume_stock`](Machine::consume_stock) and
/// [`refill_stock`](Machine::refill_stock).
pub struct Machine {
    id: String,
    quantity: Cell<i64>,
    low_stock_threshold: i64,
    dispatcher: Rc<Dispatcher>,
}

impl Machine {
    /// Creates a new machine with an explicit starting quantity and threshold.
    pub fn new(
        id: impl Into<String>,
        quantity: i64,
        low_stock_threshold: i64,
        dispatcher: Rc<Dispatcher>,
    ) -> MachineRef {
        Rc::new(Self {
            id: id.into(),
            quantity: Cell::new(quantity),
            low_stock_threshold,
            dispatcher,
        })
    }

    /// Creates a new machine inheriting quantity and threshold from config.
    pub fn with_defaults(id: impl Into<String>, cfg: &Config, dispatcher: Rc<Dispatcher>) -> MachineRef {
        Machine::new(id, cfg.default_quantity, cfg.low_stock_threshold, dispatcher)
    }

    /// Returns the machine id.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the current quantity.
    pub fn quantity(&self) -> i64 {
        self.quantity.get()
    }

    /// Returns true if the quantity is at or below the low-stock threshold.
    pub fn is_low(&self) -> bool {
        self.quantity.get() <= self.low_stock_threshold
    }

    /// Decreases the quantity by `amount`.
    ///
    /// Rejects the sale with [`StockError::InsufficientStock`] when `amount`
    /// exceeds the current quantity; nothing changes and no event fires.
    /// Crossing into the low band publishes one `LowStockWarning`.
    pub fn consume_stock(&self, amount: u32) -> Result<(), StockError> {
        let available = self.quantity.get();
        let requested = i64::from(amount);
        if requested > available {
            return Err(StockError::InsufficientStock {
                machine: self.id.clone(),
                requested: amount,
                available,
            });
        }
        self.adjust(-requested);
        Ok(())
    }

    /// Increases the quantity by `amount`.
    ///
    /// Crossing out of the low band publishes one `StockLevelOk`.
    pub fn refill_stock(&self, amount: u32) {
        self.adjust(i64::from(amount));
    }

    /// Applies a delta and runs edge-triggered crossing detection.
    fn adjust(&self, delta: i64) {
        if delta == 0 {
            return;
        }
        let old = self.quantity.get();
        let new = old + delta;
        self.quantity.set(new);

        let threshold = self.low_stock_threshold;
        if old <= threshold && new > threshold {
            tracing::debug!(machine = %self.id, quantity = new, "stock recovered above threshold");
            self.dispatcher.publish(Event::stock_level_ok(self.id.as_str()));
        } else if old > threshold && new <= threshold {
            tracing::debug!(machine = %self.id, quantity = new, "stock dropped to threshold");
            self.dispatcher.publish(Event::low_stock_warning(self.id.as_str()));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::EventKind;
    use crate::subscribers::{Recorder, SubscriberRef};

    fn watched_machine(quantity: i64) -> (MachineRef, Rc<Recorder>) {
        let dispatcher = Dispatcher::new();
        let recorder = Recorder::new();
        dispatcher.subscribe(
            EventKind::LowStockWarning,
            Rc::clone(&recorder) as SubscriberRef,
        );
        dispatcher.subscribe(
            EventKind::StockLevelOk,
            Rc::clone(&recorder) as SubscriberRef,
        );
        let machine = Machine::new("x", quantity, 2, dispatcher);
        (machine, recorder)
    }

    #[test]
    fn test_consume_fires_low_stock_warning_once() {
        let (machine, recorder) = watched_machine(5);

        machine.consume_stock(1).expect("stock available");
        assert_eq!(recorder.count_of(EventKind::LowStockWarning), 0);

        machine.consume_stock(2).expect("stock available");
        assert_eq!(machine.quantity(), 2);
        assert_eq!(recorder.count_of(EventKind::LowStockWarning), 1);

        machine.consume_stock(1).expect("stock available");
        assert_eq!(
            recorder.count_of(EventKind::LowStockWarning),
            1,
            "still-low adjustment must not re-fire"
        );
    }

    #[test]
    fn test_refill_fires_stock_level_ok_once() {
        let (machine, recorder) = watched_machine(0);

        machine.refill_stock(1);
        assert_eq!(recorder.count_of(EventKind::StockLevelOk), 0);

        machine.refill_stock(2);
        assert_eq!(machine.quantity(), 3);
        assert_eq!(recorder.count_of(EventKind::StockLevelOk), 1);

        machine.refill_stock(5);
        assert_eq!(
            recorder.count_of(EventKind::StockLevelOk),
            1,
            "still-high adjustment must not re-fire"
        );
    }

    #[test]
    fn test_same_side_adjustments_never_fire() {
        let (machine, recorder) = watched_machine(10);

        machine.consume_stock(1).expect("stock available");
        machine.consume_stock(2).expect("stock available");
        machine.refill_stock(4);
        assert_eq!(machine.quantity(), 11);
        assert!(recorder.events().is_empty());
    }

    #[test]
    fn test_boundary_is_inclusive() {
        // threshold = 2: quantity 2 is low, quantity 3 is not.
        let (machine, recorder) = watched_machine(3);

        machine.consume_stock(1).expect("stock available");
        assert!(machine.is_low());
        assert_eq!(recorder.count_of(EventKind::LowStockWarning), 1);

        machine.refill_stock(1);
        assert!(!machine.is_low());
        assert_eq!(recorder.count_of(EventKind::StockLevelOk), 1);
    }

    #[test]
    fn test_insufficient_stock_is_rejected() {
        let (machine, recorder) = watched_machine(2);

        let err = machine.consume_stock(5).expect_err("oversell must be rejected");
        match err {
            StockError::InsufficientStock {
                requested,
                available,
                ..
            } => {
                assert_eq!(requested, 5);
                assert_eq!(available, 2);
            }
        }
        assert_eq!(machine.quantity(), 2, "rejected sale must not mutate");
        assert!(recorder.events().is_empty(), "rejected sale must not publish");
    }

    #[test]
    fn test_zero_amounts_are_noops() {
        let (machine, recorder) = watched_machine(5);

        machine.consume_stock(0).expect("zero sale is fine");
        machine.refill_stock(0);
        assert_eq!(machine.quantity(), 5);
        assert!(recorder.events().is_empty());
    }

    #[test]
    fn test_with_defaults_inherits_config() {
        let dispatcher = Dispatcher::new();
        let cfg = Config::default();
        let machine = Machine::with_defaults("vm-1", &cfg, dispatcher);

        assert_eq!(machine.quantity(), cfg.default_quantity);
        assert!(!machine.is_low());
        machine
            .consume_stock((cfg.default_quantity - cfg.low_stock_threshold) as u32)
            .expect("stock available");
        assert!(machine.is_low());
    }
}
