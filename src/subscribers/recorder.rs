//! Recording subscriber used by unit tests across the crate.

use std::cell::RefCell;
use std::rc::Rc;

use crate::events::{Event, EventKind};
use crate::subscribers::Subscribe;

/// Accumulates every delivered event, in delivery order.
pub(crate) struct Recorder {
    seen: RefCell<Vec<Event>>,
}

impl Recorder {
    pub(crate) fn new() -> Rc<Self> {
        Rc::new(Self {
            seen: RefCell::new(Vec::new()),
        })
    }

    /// Everything delivered so far, in order.
    pub(crate) fn events(&self) -> Vec<Event> {
        self.seen.borrow().clone()
    }

    /// Machine ids of delivered events, in order.
    pub(crate) fn machines(&self) -> Vec<String> {
        self.seen.borrow().iter().map(|e| e.machine.clone()).collect()
    }

    /// Number of delivered events of the given kind.
    pub(crate) fn count_of(&self, kind: EventKind) -> usize {
        self.seen.borrow().iter().filter(|e| e.kind == kind).count()
    }
}

impl Subscribe for Recorder {
    fn on_event(&self, event: &Event) {
        self.seen.borrow_mut().push(event.clone());
    }

    fn name(&self) -> &'static str {
        "recorder"
    }
}
