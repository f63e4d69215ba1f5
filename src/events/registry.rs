//! # Subscription registry with enrollment ticks.
//!
//! Tracks which subscribers are enrolled for which [`EventKind`], preserving
//! insertion order so delivery is deterministic, and stamping each enrollment
//! with the logical tick at which it happened.
//!
//! ## Rules
//! - One enrollment per `(kind, subscriber)` pair: re-subscribing is a no-op
//!   and keeps the original tick.
//! - Unsubscribing an absent subscriber is a no-op, never an error.
//! - [`Registry::eligible`] filters by tick: only subscribers enrolled at or
//!   before the given snapshot see the event. This is what keeps a
//!   subscription added mid-drain from retroactively receiving events that
//!   were dequeued before it existed.
//!
//! Subscriber identity is pointer identity: two `Rc` handles to the same
//! allocation are the same subscriber, two allocations of identical type are
//! not.

use std::collections::HashMap;
use std::rc::Rc;

use crate::events::EventKind;
use crate::subscribers::SubscriberRef;

/// A single `(kind, subscriber)` enrollment.
struct Enrollment {
    subscriber: SubscriberRef,
    /// Logical tick at which the subscriber first enrolled for this kind.
    enrolled_at: u64,
}

/// Insertion-ordered subscription bookkeeping, owned by the dispatcher.
#[derive(Default)]
pub(crate) struct Registry {
    enrollments: HashMap<EventKind, Vec<Enrollment>>,
}

impl Registry {
    pub(crate) fn new() -> Self {
        Self {
            enrollments: HashMap::new(),
        }
    }

    /// Enrolls `subscriber` for `kind` at the given tick.
    ///
    /// Idempotent: if the subscriber is already enrolled for this kind, nothing
    /// changes and the original enrollment tick is kept. Returns true only when
    /// a new enrollment was recorded.
    pub(crate) fn subscribe(
        &mut self,
        kind: EventKind,
        subscriber: SubscriberRef,
        tick: u64,
    ) -> bool {
        let entries = self.enrollments.entry(kind).or_default();
        if entries
            .iter()
            .any(|e| Rc::ptr_eq(&e.subscriber, &subscriber))
        {
            return false;
        }
        entries.push(Enrollment {
            subscriber,
            enrolled_at: tick,
        });
        true
    }

    /// Removes `subscriber` from the set for `kind`.
    ///
    /// Idempotent: removing an absent subscriber is a no-op. Returns true only
    /// when an enrollment was actually removed.
    pub(crate) fn unsubscribe(&mut self, kind: EventKind, subscriber: &SubscriberRef) -> bool {
        match self.enrollments.get_mut(&kind) {
            Some(entries) => {
                let before = entries.len();
                entries.retain(|e| !Rc::ptr_eq(&e.subscriber, subscriber));
                entries.len() != before
            }
            None => false,
        }
    }

    /// Returns the subscribers enrolled for `kind` at or before `as_of`,
    /// in enrollment order.
    pub(crate) fn eligible(&self, kind: EventKind, as_of: u64) -> Vec<SubscriberRef> {
        self.enrollments
            .get(&kind)
            .map(|entries| {
                entries
                    .iter()
                    .filter(|e| e.enrolled_at <= as_of)
                    .map(|e| Rc::clone(&e.subscriber))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Returns the number of subscribers enrolled for `kind`.
    pub(crate) fn count(&self, kind: EventKind) -> usize {
        self.enrollments.get(&kind).map_or(0, Vec::len)
    }
}
