//! # stockvisor
//!
//! **Stockvisor** is an in-process publish/subscribe event bus for simulated
//! vending machines.
//!
//! It mediates between machine state changes and a set of independent
//! subscribers: input events (sales, refills) mutate machines, machines derive
//! threshold-crossing events, and everything flows through one ordered queue
//! drained synchronously on the publisher's thread.
//!
//! ## Architecture
//! ```text
//!     harness / generator                    Machine (on crossing)
//!            │                                      │
//!            └────────── publish(Event) ────────────┘
//!                              ▼
//! ┌───────────────────────────────────────────────────────────────┐
//! │  Dispatcher                                                   │
//! │  - EventQueue (FIFO, nested publishes go to the tail)         │
//! │  - Registry (per-kind enrollments with logical ticks)         │
//! │  - drain loop (runs to empty before publish returns)          │
//! └──────┬──────────────────┬──────────────────┬──────────────────┘
//!        ▼                  ▼                  ▼
//!  SaleSubscriber    RefillSubscriber     AlertWriter
//!        │                  │
//!        └── consume_stock  └── refill_stock
//!                  │                  │
//!                  ▼                  ▼
//!              Machine ── threshold crossing? ── publish(derived event)
//! ```
//!
//! ## Delivery model
//! Single-threaded, cooperative, non-preemptive: `publish` enqueues and then
//! drains the queue to completion on the caller's thread. Handlers may publish
//! again; nested events land at the tail and are delivered before the
//! outermost `publish` returns, in global FIFO order. Subscribers of one kind
//! are invoked in enrollment order, and an event is only delivered to
//! subscribers enrolled at or before the moment its delivery began.
//!
//! ## Features
//! | Area              | Description                                              | Key types / traits                       |
//! |-------------------|----------------------------------------------------------|------------------------------------------|
//! | **Subscriber API**| Hook into stock events (mutation, logging, custom).      | [`Subscribe`], [`SubscriberRef`]         |
//! | **Dispatch**      | Ordered queue, idempotent subscriptions, drain loop.     | [`Dispatcher`], [`EventQueue`]           |
//! | **Machines**      | Quantity state with edge-triggered crossing detection.   | [`Machine`], [`MachineRef`]              |
//! | **Events**        | Closed event taxonomy, immutable payloads.               | [`Event`], [`EventKind`]                 |
//! | **Errors**        | Typed rejection of overselling sales.                    | [`StockError`]                           |
//! | **Configuration** | Threshold and default quantity, injected at build time.  | [`Config`]                               |
//!
//! ## Example
//! ```rust
//! use std::rc::Rc;
//! use stockvisor::{
//!     AlertWriter, Config, Dispatcher, Event, EventKind, Machine, MachineRef,
//!     SaleSubscriber, SubscriberRef,
//! };
//!
//! let cfg = Config::default();
//! let dispatcher = Dispatcher::new();
//!
//! let machines: Rc<[MachineRef]> =
//!     vec![Machine::with_defaults("vm-1", &cfg, Rc::clone(&dispatcher))].into();
//!
//! dispatcher.subscribe(
//!     EventKind::Sale,
//!     Rc::new(SaleSubscriber::new(Rc::clone(&machines))) as SubscriberRef,
//! );
//! dispatcher.subscribe(EventKind::LowStockWarning, Rc::new(AlertWriter) as SubscriberRef);
//!
//! // 10 -> 1 crosses the default threshold (2): the machine publishes a
//! // LowStockWarning that AlertWriter logs before this call returns.
//! dispatcher.publish(Event::sale("vm-1", 9));
//! assert_eq!(machines[0].quantity(), 1);
//! assert!(machines[0].is_low());
//! ```

mod config;
mod error;
mod events;
mod machines;
mod subscribers;

// ---- Public re-exports ----

pub use config::Config;
pub use error::StockError;
pub use events::{Dispatcher, Event, EventKind, EventQueue};
pub use machines::{Machine, MachineRef};
pub use subscribers::{AlertWriter, RefillSubscriber, SaleSubscriber, Subscribe, SubscriberRef};
