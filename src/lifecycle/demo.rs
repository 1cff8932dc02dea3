use tracing::{info, info_span};

use crate::borrower::Borrower;
use crate::consumer::Consumer;
use crate::framework::{Journal, OwnershipError};
use crate::producer::{ProductionOutcome, Producer};

/// The demonstration orchestrator.
///
/// `OwnershipDemo` is responsible for:
/// - **Wiring**: Creating the [`Borrower`], [`Consumer`] and [`Producer`] around one [`Journal`]
/// - **Sequencing**: Running the honest run, then the claiming run
/// - **Teardown**: Dropping the producer (and the roles it owns) in [`OwnershipDemo::shutdown`]
///
/// # Example
///
/// ```ignore
/// let mut demo = OwnershipDemo::new();
/// let [first, second] = demo.run()?;
/// let journal = demo.shutdown();
/// ```
#[derive(Debug)]
pub struct OwnershipDemo {
    producer: Producer,
    journal: Journal,
}

impl Default for OwnershipDemo {
    fn default() -> Self {
        Self::new()
    }
}

impl OwnershipDemo {
    pub fn new() -> Self {
        let journal = Journal::new();
        let borrower = Borrower::new(journal.clone());
        let consumer = Consumer::new(journal.clone());
        let producer = Producer::new(borrower, consumer, journal.clone());
        Self { producer, journal }
    }

    /// Runs both production runs.
    ///
    /// 1. The borrower returns what it is lent and the consumer takes it.
    /// 2. The borrower is switched to claiming; the producer must skip the consumer.
    ///
    /// The claiming disposition persists after this call.
    pub fn run(&mut self) -> Result<[ProductionOutcome; 2], OwnershipError> {
        let first = info_span!("first_run").in_scope(|| self.producer.produce())?;

        let second = info_span!("second_run").in_scope(|| {
            self.producer.borrower_mut().set_claims_on_receipt(true);
            self.producer.produce()
        })?;

        Ok([first, second])
    }

    pub fn producer(&self) -> &Producer {
        &self.producer
    }

    pub fn producer_mut(&mut self) -> &mut Producer {
        &mut self.producer
    }

    pub fn journal(&self) -> &Journal {
        &self.journal
    }

    /// Tears everything down and returns the journal.
    ///
    /// Resources claimed by the borrower are destroyed here.
    pub fn shutdown(self) -> Journal {
        info!("Shutting down...");
        let Self { producer, journal } = self;
        let (borrower, consumer) = producer.into_parts();
        info!(
            claimed = borrower.hoard().len(),
            consumed = consumer.consumed(),
            "Releasing roles"
        );
        drop(consumer);
        drop(borrower);
        info!("Shutdown complete.");
        journal
    }
}
