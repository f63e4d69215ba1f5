//! # Dispatcher: the publish/subscribe service.
//!
//! [`Dispatcher`] owns the event queue, the subscription registry, and the
//! logical clock that orders enrollments against deliveries. It drives the
//! whole system from a single synchronous drain loop.
//!
//! ## Architecture
//! ```text
//! Publishers (harness, machines):          Subscribers:
//!   publish(event) ──► EventQueue ──► drain loop ──► Registry::eligible(kind, tick)
//!                        (FIFO)       │                      │
//!                                     │                      ▼
//!                                     │              sub1.on_event(&event)
//!                                     │              sub2.on_event(&event)
//!                                     │                      │
//!                                     ◄── nested publish ────┘
//!                                         (enqueued at the tail, handled
//!                                          before the outer publish returns)
//! ```
//!
//! ## Rules
//! - **Synchronous**: delivery happens on the caller's thread; `publish`
//!   returns only once the queue is observably empty.
//! - **Re-entrant**: a subscriber may call `publish` again; the nested call
//!   only enqueues, and the outermost drain loop picks the event up in FIFO
//!   order. One loop, one owned queue, no recursion.
//! - **Snapshot eligibility**: each dequeued event captures a delivery tick;
//!   only subscribers enrolled at or before that tick receive it.
//! - **Deterministic order**: subscribers of one kind are invoked in
//!   enrollment order.
//! - **No failure path**: publishing with zero subscribers is a no-op, and a
//!   panicking subscriber is not caught, retried, or isolated.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::events::registry::Registry;
use crate::events::{Event, EventKind, EventQueue};
use crate::subscribers::SubscriberRef;

/// Publish/subscribe service owning the queue and the registry.
///
/// Shared as `Rc<Dispatcher>`: machines keep a handle for publishing derived
/// events, the harness keeps one for input events and subscription management.
/// Interior mutability is single-threaded (`RefCell`/`Cell`); there is no
/// locking because there is no concurrency.
pub struct Dispatcher {
    queue: RefCell<EventQueue>,
    registry: RefCell<Registry>,
    /// Logical clock ordering enrollments against deliveries.
    clock: Cell<u64>,
    /// True while the drain loop is running further up the call stack.
    draining: Cell<bool>,
}

impl Dispatcher {
    /// Creates a new dispatcher with an empty queue and registry.
    pub fn new() -> Rc<Self> {
        Rc::new(Self {
            queue: RefCell::new(EventQueue::new()),
            registry: RefCell::new(Registry::new()),
            clock: Cell::new(0),
            draining: Cell::new(false),
        })
    }

    /// Publishes an event and drains the queue to completion.
    ///
    /// The event goes to the tail of the queue. If no drain is in progress,
    /// this call dequeues and delivers events until the queue is empty, so
    /// every effect of `event` (including events published by handlers while
    /// handling it) is settled before control returns. If a drain *is* in
    /// progress higher up the stack, the call only enqueues: the outermost
    /// loop delivers the event before its own `publish` returns.
    pub fn publish(&self, event: Event) {
        tracing::trace!(kind = %event.kind, machine = %event.machine, "event enqueued");
        self.queue.borrow_mut().enqueue(event);

        if self.draining.get() {
            return;
        }
        self.draining.set(true);
        self.drain();
        self.draining.set(false);
    }

    /// Enrolls `subscriber` for events of `kind`.
    ///
    /// Idempotent: re-subscribing an already-enrolled subscriber changes
    /// nothing, not even its enrollment tick.
    pub fn subscribe(&self, kind: EventKind, subscriber: SubscriberRef) {
        let tick = self.next_tick();
        let name = subscriber.name();
        if self.registry.borrow_mut().subscribe(kind, subscriber, tick) {
            tracing::debug!(kind = %kind, subscriber = name, "subscription added");
        }
    }

    /// Removes `subscriber` from the set for `kind`.
    ///
    /// Idempotent: unsubscribing an absent subscriber is a no-op, never fails.
    pub fn unsubscribe(&self, kind: EventKind, subscriber: &SubscriberRef) {
        if self.registry.borrow_mut().unsubscribe(kind, subscriber) {
            tracing::debug!(kind = %kind, subscriber = subscriber.name(), "subscription removed");
        }
    }

    /// Returns the number of subscribers enrolled for `kind`.
    pub fn subscriber_count(&self, kind: EventKind) -> usize {
        self.registry.borrow().count(kind)
    }

    /// Dequeues and delivers until the queue is empty.
    ///
    /// The eligible set for each event is captured before any of its handlers
    /// run: subscriptions added while the event is being handled apply to
    /// later events only.
    fn drain(&self) {
        loop {
            let event = self.queue.borrow_mut().dequeue();
            let Some(event) = event else { break };

            let as_of = self.next_tick();
            let eligible = self.registry.borrow().eligible(event.kind, as_of);
            tracing::trace!(
                kind = %event.kind,
                machine = %event.machine,
                subscribers = eligible.len(),
                "delivering event"
            );
            for subscriber in eligible {
                subscriber.on_event(&event);
            }
        }
    }

    /// Advances the logical clock and returns the new tick.
    fn next_tick(&self) -> u64 {
        let tick = self.clock.get() + 1;
        self.clock.set(tick);
        tick
    }
}
