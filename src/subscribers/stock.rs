//! # Stock-mutating subscribers.
//!
//! [`SaleSubscriber`] and [`RefillSubscriber`] are the subscribers that turn
//! input events into machine mutations: each holds a shared view of the
//! machine collection, resolves the target machine by id, and applies the
//! event's quantity.
//!
//! ## Rules
//! - Wrong event kind, unknown machine id, or a missing quantity: the event is
//!   silently dropped for this subscriber.
//! - A sale rejected for insufficient stock is logged (warn) and dropped;
//!   nothing propagates out of the dispatch path.

use std::rc::Rc;

use crate::events::{Event, EventKind};
use crate::machines::MachineRef;
use crate::subscribers::Subscribe;

/// Applies sale events to the matching machine.
pub struct SaleSubscriber {
    machines: Rc<[MachineRef]>,
}

impl SaleSubscriber {
    /// Creates a sale subscriber over a shared machine collection.
    pub fn new(machines: Rc<[MachineRef]>) -> Self {
        Self { machines }
    }
}

impl Subscribe for SaleSubscriber {
    fn on_event(&self, event: &Event) {
        if event.kind != EventKind::Sale {
            return;
        }
        let Some(quantity) = event.quantity else {
            return;
        };
        let Some(machine) = self.machines.iter().find(|m| m.id() == event.machine) else {
            return;
        };
        if let Err(err) = machine.consume_stock(quantity) {
            tracing::warn!(
                machine = %event.machine,
                error = %err,
                label = err.as_label(),
                "sale rejected"
            );
        }
    }

    fn name(&self) -> &'static str {
        "sales"
    }
}

/// Applies refill events to the matching machine.
pub struct RefillSubscriber {
    machines: Rc<[MachineRef]>,
}

impl RefillSubscriber {
    /// Creates a refill subscriber over a shared machine collection.
    pub fn new(machines: Rc<[MachineRef]>) -> Self {
        Self { machines }
    }
}

impl Subscribe for RefillSubscriber {
    fn on_event(&self, event: &Event) {
        if event.kind != EventKind::Refill {
            return;
        }
        let Some(quantity) = event.quantity else {
            return;
        };
        let Some(machine) = self.machines.iter().find(|m| m.id() == event.machine) else {
            return;
        };
        machine.refill_stock(quantity);
    }

    fn name(&self) -> &'static str {
        "refills"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::events::Dispatcher;
    use crate::machines::Machine;
    use crate::subscribers::{Recorder, SubscriberRef};

    fn fleet(dispatcher: &Rc<Dispatcher>, quantity: i64) -> Rc<[MachineRef]> {
        vec![
            Machine::new("lobby", quantity, 2, Rc::clone(dispatcher)),
            Machine::new("garage", quantity, 2, Rc::clone(dispatcher)),
        ]
        .into()
    }

    #[test]
    fn test_sale_consumes_from_target_machine() {
        let dispatcher = Dispatcher::new();
        let machines = fleet(&dispatcher, 10);
        dispatcher.subscribe(
            EventKind::Sale,
            Rc::new(SaleSubscriber::new(Rc::clone(&machines))) as SubscriberRef,
        );

        dispatcher.publish(Event::sale("lobby", 4));

        assert_eq!(machines[0].quantity(), 6);
        assert_eq!(machines[1].quantity(), 10, "only the target machine changes");
    }

    #[test]
    fn test_refill_adds_to_target_machine() {
        let dispatcher = Dispatcher::new();
        let machines = fleet(&dispatcher, 1);
        dispatcher.subscribe(
            EventKind::Refill,
            Rc::new(RefillSubscriber::new(Rc::clone(&machines))) as SubscriberRef,
        );

        dispatcher.publish(Event::refill("garage", 4));

        assert_eq!(machines[0].quantity(), 1);
        assert_eq!(machines[1].quantity(), 5);
    }

    #[test]
    fn test_unknown_machine_is_dropped() {
        let dispatcher = Dispatcher::new();
        let machines = fleet(&dispatcher, 10);
        dispatcher.subscribe(
            EventKind::Sale,
            Rc::new(SaleSubscriber::new(Rc::clone(&machines))) as SubscriberRef,
        );

        dispatcher.publish(Event::sale("rooftop", 4));

        assert_eq!(machines[0].quantity(), 10);
        assert_eq!(machines[1].quantity(), 10);
    }

    #[test]
    fn test_missing_quantity_is_dropped() {
        let dispatcher = Dispatcher::new();
        let machines = fleet(&dispatcher, 10);
        dispatcher.subscribe(
            EventKind::Sale,
            Rc::new(SaleSubscriber::new(Rc::clone(&machines))) as SubscriberRef,
        );

        dispatcher.publish(Event::new(EventKind::Sale, "lobby"));

        assert_eq!(machines[0].quantity(), 10);
    }

    #[test]
    fn test_wrong_kind_is_ignored() {
        let dispatcher = Dispatcher::new();
        let machines = fleet(&dispatcher, 10);
        let sales = Rc::new(SaleSubscriber::new(Rc::clone(&machines)));

        // Enrolled for refills by mistake: the subscriber itself still ignores
        // kinds out of its scope.
        dispatcher.subscribe(EventKind::Refill, sales as SubscriberRef);
        dispatcher.publish(Event::refill("lobby", 4));

        assert_eq!(machines[0].quantity(), 10);
    }

    #[test]
    fn test_rejected_sale_leaves_stock_unchanged() {
        let dispatcher = Dispatcher::new();
        let machines = fleet(&dispatcher, 2);
        dispatcher.subscribe(
            EventKind::Sale,
            Rc::new(SaleSubscriber::new(Rc::clone(&machines))) as SubscriberRef,
        );

        dispatcher.publish(Event::sale("lobby", 5));

        assert_eq!(machines[0].quantity(), 2);
    }

    #[test]
    fn test_vending_scenario() {
        // Machine "x" starts at 5 with threshold 2 (low band [0, 2]).
        let cfg = Config {
            low_stock_threshold: 2,
            default_quantity: 5,
        };
        let dispatcher = Dispatcher::new();
        let machines: Rc<[MachineRef]> =
            vec![Machine::with_defaults("x", &cfg, Rc::clone(&dispatcher))].into();

        let recorder = Recorder::new();
        dispatcher.subscribe(
            EventKind::Sale,
            Rc::new(SaleSubscriber::new(Rc::clone(&machines))) as SubscriberRef,
        );
        dispatcher.subscribe(
            EventKind::Refill,
            Rc::new(RefillSubscriber::new(Rc::clone(&machines))) as SubscriberRef,
        );
        dispatcher.subscribe(
            EventKind::LowStockWarning,
            Rc::clone(&recorder) as SubscriberRef,
        );
        dispatcher.subscribe(
            EventKind::StockLevelOk,
            Rc::clone(&recorder) as SubscriberRef,
        );

        // Sale of 3: 5 -> 2, crosses into the low band.
        dispatcher.publish(Event::sale("x", 3));
        assert_eq!(machines[0].quantity(), 2);
        assert_eq!(recorder.count_of(EventKind::LowStockWarning), 1);

        // Sale of 1: 2 -> 1, still low, nothing fires.
        dispatcher.publish(Event::sale("x", 1));
        assert_eq!(machines[0].quantity(), 1);
        assert_eq!(recorder.count_of(EventKind::LowStockWarning), 1);
        assert_eq!(recorder.count_of(EventKind::StockLevelOk), 0);

        // Refill of 5: 1 -> 6, crosses out of the low band.
        dispatcher.publish(Event::refill("x", 5));
        assert_eq!(machines[0].quantity(), 6);
        assert_eq!(recorder.count_of(EventKind::StockLevelOk), 1);
        assert_eq!(recorder.count_of(EventKind::LowStockWarning), 1);
    }
}
