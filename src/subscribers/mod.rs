//! # Event subscribers.
//!
//! This module provides the [`Subscribe`] trait and the built-in subscriber
//! implementations delivered by the [`Dispatcher`](crate::Dispatcher).
//!
//! ## Architecture
//! ```text
//! Event flow:
//!   publish(Event) ──► Dispatcher drain loop ──► per-kind enrollment order
//!                                                      │
//!                                    ┌─────────────────┼──────────────────┐
//!                                    ▼                 ▼                  ▼
//!                             SaleSubscriber    RefillSubscriber     AlertWriter
//!                             (consume_stock)   (refill_stock)       (warn/info)
//! ```
//!
//! ## Subscriber types
//! - **Stock subscribers** - resolve the target machine by id and mutate its
//!   quantity ([`SaleSubscriber`], [`RefillSubscriber`])
//! - **Passive subscribers** - observe and react without touching machines
//!   ([`AlertWriter`])

mod log;
mod stock;
mod subscribe;

#[cfg(test)]
mod recorder;

pub use log::AlertWriter;
pub use stock::{RefillSubscriber, SaleSubscriber};
pub use subscribe::{Subscribe, SubscriberRef};

#[cfg(test)]
pub(crate) use recorder::Recorder;
