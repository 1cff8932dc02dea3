//! The consuming role: takes final ownership and lets the resource go.

use tracing::info;

use crate::framework::{Consumes, Event, Journal, Role};
use crate::model::Data;

#[derive(Debug)]
pub struct Consumer {
    consumed: usize,
    journal: Journal,
}

impl Consumer {
    pub fn new(journal: Journal) -> Self {
        Self {
            consumed: 0,
            journal,
        }
    }

    /// Number of resources consumed so far.
    pub fn consumed(&self) -> usize {
        self.consumed
    }
}

impl Consumes<Data> for Consumer {
    /// Reports the payload. `data` is dropped when this returns.
    fn consume(&mut self, data: Data) {
        info!(role = %Role::Consumer, datum = data.datum(), "got the data");
        self.journal.record(Event::Reported {
            role: Role::Consumer,
            id: data.id(),
            datum: data.datum().to_string(),
        });
        self.consumed += 1;
    }
}
