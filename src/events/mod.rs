//! Stock events: data model, FIFO queue, subscriptions, and dispatch.
//!
//! This module groups everything the bus itself is made of:
//! - [`EventKind`], [`Event`] — event classification and payload
//! - [`EventQueue`] — FIFO buffer of pending events
//! - `Registry` (crate-internal) — subscription bookkeeping with enrollment ticks
//! - [`Dispatcher`] — owns queue and registry, drives the drain loop
//!
//! ## Quick reference
//! - **Publishers**: the harness (input sales/refills) and
//!   [`Machine`](crate::Machine) (derived threshold-crossing events).
//! - **Consumers**: anything implementing [`Subscribe`](crate::Subscribe),
//!   enrolled per [`EventKind`] through [`Dispatcher::subscribe`].

mod dispatcher;
mod event;
mod queue;
mod registry;

pub use dispatcher::Dispatcher;
pub use event::{Event, EventKind};
pub use queue::EventQueue;
