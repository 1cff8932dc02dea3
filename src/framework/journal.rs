//! # Event Journal
//!
//! Every observable step of a production run is recorded here as an [`Event`],
//! in order. The journal doubles as the tracing bridge: each recorded event is
//! also emitted as a `debug!` line.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::cell::{Ref, RefCell};
use std::rc::Rc;
use tracing::debug;

use crate::model::DataId;

/// The three roles of the ownership protocol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    Producer,
    Borrower,
    Consumer,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Role::Producer => "PRODUCER",
            Role::Borrower => "BORROWER",
            Role::Consumer => "CONSUMER",
        };
        f.write_str(name)
    }
}

/// An observable event in the life of a resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Event {
    /// A resource was constructed.
    Created { id: DataId, datum: String },
    /// A role read and reported the payload.
    Reported { role: Role, id: DataId, datum: String },
    /// The borrower moved the resource into its own hoard.
    Claimed { id: DataId },
    /// The producer checked its slot after lending.
    OccupancyChecked { occupied: bool },
    /// The producer found its slot empty and did not call the consumer.
    ConsumerSkipped,
    /// A resource was destroyed.
    Destroyed { id: DataId },
}

/// A cheaply cloneable, append-only event log shared by all roles.
///
/// Handles share one log through `Rc`, so a journal (and every [`Data`](crate::model::Data)
/// holding one) stays on the thread that created it.
#[derive(Debug, Clone, Default)]
pub struct Journal {
    events: Rc<RefCell<Vec<Event>>>,
}

impl Journal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an event.
    pub fn record(&self, event: Event) {
        debug!(?event, "Journal");
        self.events.borrow_mut().push(event);
    }

    /// Snapshot of all events recorded so far.
    pub fn events(&self) -> Vec<Event> {
        self.entries().clone()
    }

    /// Events that mention the given resource.
    pub fn events_for(&self, id: DataId) -> Vec<Event> {
        self.entries()
            .iter()
            .filter(|event| event.data_id() == Some(id))
            .cloned()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries().is_empty()
    }

    // Borrows never outlive a single method call, so `record` cannot collide with a reader.
    fn entries(&self) -> Ref<'_, Vec<Event>> {
        self.events.borrow()
    }
}

impl Event {
    /// The resource this event refers to, if any.
    pub fn data_id(&self) -> Option<DataId> {
        match self {
            Event::Created { id, .. }
            | Event::Reported { id, .. }
            | Event::Claimed { id }
            | Event::Destroyed { id } => Some(*id),
            Event::OccupancyChecked { .. } | Event::ConsumerSkipped => None,
        }
    }
}
