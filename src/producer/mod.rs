//! The producing role and orchestrator of a production run.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::borrower::Borrower;
use crate::consumer::Consumer;
use crate::framework::{Borrows, Consumes, Event, Journal, OwnershipError, Role, Slot};
use crate::model::{Data, DataId};

/// Payload used when none is configured.
pub const DEFAULT_DATUM: &str = "Hello, World!";

/// How a production run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProductionOutcome {
    /// The slot was still occupied after lending and the consumer took it.
    Consumed(DataId),
    /// The slot was empty after lending; the consumer was skipped.
    Claimed(DataId),
}

impl ProductionOutcome {
    pub fn data_id(&self) -> DataId {
        match self {
            ProductionOutcome::Consumed(id) | ProductionOutcome::Claimed(id) => *id,
        }
    }
}

/// Owns one [`Slot`] and drives it through create, lend, check, consume.
///
/// # State Machine
///
/// ```text
/// Idle (slot empty) --produce()--> Produced (slot occupied) --lend-->
///   occupied --> consume --> Idle
///   empty    --> skip    --> Idle
/// ```
///
/// Whichever branch is taken, the slot is empty when [`Producer::produce`] returns.
///
/// The roles are generic so tests can swap in their own; the defaults are the
/// crate's [`Borrower`] and [`Consumer`].
#[derive(Debug)]
pub struct Producer<B = Borrower, C = Consumer> {
    slot: Slot<Data>,
    borrower: B,
    consumer: C,
    datum: String,
    next_id: u64,
    journal: Journal,
}

impl<B, C> Producer<B, C>
where
    B: Borrows<Data>,
    C: Consumes<Data>,
{
    pub fn new(borrower: B, consumer: C, journal: Journal) -> Self {
        Self {
            slot: Slot::empty(),
            borrower,
            consumer,
            datum: DEFAULT_DATUM.to_string(),
            next_id: 1,
            journal,
        }
    }

    /// Sets the payload for subsequent runs.
    pub fn with_datum(mut self, datum: impl Into<String>) -> Self {
        self.datum = datum.into();
        self
    }

    /// Performs one production run.
    ///
    /// # Errors
    /// Only if the borrower reports [`OwnershipError::VacantSlot`], which cannot
    /// happen with a freshly filled slot unless the borrower misbehaves. The slot
    /// is emptied before the error is returned.
    pub fn produce(&mut self) -> Result<ProductionOutcome, OwnershipError> {
        // No stale value may survive into a new run.
        self.slot.clear();

        info!(role = %Role::Producer, "producing some data...");
        let id = self.allocate_id();
        let data = Data::new(id, self.datum.as_str(), self.journal.clone());
        self.slot.fill(data);

        info!(role = %Role::Producer, "lending the data...");
        if let Err(err) = self.borrower.borrow(&mut self.slot) {
            self.slot.clear();
            return Err(err);
        }

        let occupied = self.slot.is_occupied();
        info!(role = %Role::Producer, occupied, "data should be mine again, checking...");
        self.journal.record(Event::OccupancyChecked { occupied });

        let outcome = match self.slot.take() {
            Some(data) => {
                // The borrower may have swapped the contents; report what was handed over.
                let consumed = data.id();
                self.consumer.consume(data);
                ProductionOutcome::Consumed(consumed)
            }
            None => {
                warn!(
                    role = %Role::Producer,
                    data_id = %id,
                    "what a dishonest borrower! Not handing an empty slot to the consumer"
                );
                self.journal.record(Event::ConsumerSkipped);
                ProductionOutcome::Claimed(id)
            }
        };

        debug_assert!(!self.slot.is_occupied());
        info!(
            role = %Role::Producer,
            empty = !self.slot.is_occupied(),
            "slot should be empty now, checking..."
        );
        debug!(?outcome, "Production run finished");
        Ok(outcome)
    }

    fn allocate_id(&mut self) -> DataId {
        let id = DataId(self.next_id);
        self.next_id += 1;
        id
    }
}

impl<B, C> Producer<B, C> {
    pub fn is_occupied(&self) -> bool {
        self.slot.is_occupied()
    }

    pub fn datum(&self) -> &str {
        &self.datum
    }

    pub fn borrower(&self) -> &B {
        &self.borrower
    }

    /// Mutable access to the borrower, e.g. to change its disposition between runs.
    pub fn borrower_mut(&mut self) -> &mut B {
        &mut self.borrower
    }

    pub fn consumer(&self) -> &C {
        &self.consumer
    }

    /// Dismantles the producer, handing back its roles.
    pub fn into_parts(self) -> (B, C) {
        (self.borrower, self.consumer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A borrower that empties the slot and drops the value on the spot.
    struct Shredder;

    impl Borrows<Data> for Shredder {
        fn borrow(&mut self, slot: &mut Slot<Data>) -> Result<(), OwnershipError> {
            slot.take_checked().map(drop)
        }
    }

    #[test]
    fn produce_skips_consumer_when_slot_was_emptied() {
        let journal = Journal::new();
        let mut producer = Producer::new(Shredder, Consumer::new(journal.clone()), journal.clone());

        let outcome = producer.produce().unwrap();

        assert_eq!(outcome, ProductionOutcome::Claimed(DataId(1)));
        assert_eq!(producer.consumer().consumed(), 0);
        assert!(!producer.is_occupied());
        assert!(journal.events().contains(&Event::ConsumerSkipped));
    }

    #[test]
    fn ids_are_fresh_per_run() {
        let journal = Journal::new();
        let mut producer = Producer::new(
            Borrower::new(journal.clone()),
            Consumer::new(journal.clone()),
            journal,
        )
        .with_datum("payload");

        let first = producer.produce().unwrap();
        let second = producer.produce().unwrap();

        assert_eq!(producer.datum(), "payload");
        assert_eq!(first.data_id(), DataId(1));
        assert_eq!(second.data_id(), DataId(2));
    }
}
