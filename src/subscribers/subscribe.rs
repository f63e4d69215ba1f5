//! # Core subscriber trait
//!
//! `Subscribe` is the extension point for plugging custom event handlers into
//! the bus. Handlers run synchronously on the publishing thread, one event at
//! a time, in enrollment order.
//!
//! ## Contract
//! - An implementation silently ignores event kinds or machine ids it is not
//!   designed to react to; receiving them is not an error.
//! - A handler may mutate machines and may publish further events; anything it
//!   publishes is queued and delivered before the outermost `publish` returns.
//! - Handlers must not panic; a panic is not caught by the dispatcher.
//!
//! ## Example (skeleton)
//! ```rust
//! use stockvisor::{Event, EventKind, Subscribe};
//!
//! struct Audit;
//!
//! impl Subscribe for Audit {
//!     fn on_event(&self, event: &Event) {
//!         if event.kind == EventKind::Sale {
//!             // write audit record...
//!         }
//!     }
//!     fn name(&self) -> &'static str { "audit" }
//! }
//! ```

use std::rc::Rc;

use crate::events::Event;

/// Shared handle to a subscriber.
///
/// Subscriber identity is the allocation behind the handle: cloning a
/// `SubscriberRef` yields the same subscriber, constructing a second value of
/// the same type does not.
pub type SubscriberRef = Rc<dyn Subscribe>;

/// Contract for event subscribers.
///
/// Called synchronously from the dispatcher's drain loop, on the thread that
/// published the event.
pub trait Subscribe: 'static {
    /// Handles a single event.
    ///
    /// Events are delivered in global FIFO order; kinds the subscriber does
    /// not care about should be ignored without failing.
    fn on_event(&self, event: &Event);

    /// Returns the subscriber name used in logs.
    ///
    /// Prefer short, descriptive names (e.g., "sales", "alerts").
    /// The default uses `type_name::<Self>()`, which can be verbose -
    /// override it when possible.
    fn name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}
