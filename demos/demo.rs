use std::rc::Rc;

use rand::Rng;
use tracing_subscriber::EnvFilter;

use stockvisor::{
    AlertWriter, Config, Dispatcher, Event, EventKind, Machine, MachineRef, RefillSubscriber,
    SaleSubscriber, SubscriberRef,
};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cfg = Config {
        low_stock_threshold: 2,
        default_quantity: 8,
    };
    let dispatcher = Dispatcher::new();

    let ids = ["lobby", "garage", "cafeteria"];
    let machines: Rc<[MachineRef]> = ids
        .iter()
        .map(|id| Machine::with_defaults(*id, &cfg, Rc::clone(&dispatcher)))
        .collect::<Vec<_>>()
        .into();

    dispatcher.subscribe(
        EventKind::Sale,
        Rc::new(SaleSubscriber::new(Rc::clone(&machines))) as SubscriberRef,
    );
    dispatcher.subscribe(
        EventKind::Refill,
        Rc::new(RefillSubscriber::new(Rc::clone(&machines))) as SubscriberRef,
    );
    let alerts = Rc::new(AlertWriter) as SubscriberRef;
    dispatcher.subscribe(EventKind::LowStockWarning, Rc::clone(&alerts));
    dispatcher.subscribe(EventKind::StockLevelOk, Rc::clone(&alerts));

    let mut rng = rand::thread_rng();
    for _ in 0..40 {
        let id = ids[rng.gen_range(0..ids.len())];
        let event = if rng.gen_bool(0.7) {
            Event::sale(id, rng.gen_range(1..=3))
        } else {
            Event::refill(id, rng.gen_range(2..=6))
        };
        dispatcher.publish(event);
    }

    for machine in machines.iter() {
        tracing::info!(
            machine = %machine.id(),
            quantity = machine.quantity(),
            low = machine.is_low(),
            "final stock"
        );
    }
}
