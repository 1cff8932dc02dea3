use ownership_recipe::borrower::Borrower;
use ownership_recipe::consumer::Consumer;
use ownership_recipe::framework::mock::ExpectedEvents;
use ownership_recipe::framework::{Borrows, Consumes, Event, Journal, OwnershipError, Role, Slot};
use ownership_recipe::model::{Data, DataId};
use ownership_recipe::producer::{ProductionOutcome, Producer};

fn producer(journal: &Journal) -> Producer {
    Producer::new(
        Borrower::new(journal.clone()),
        Consumer::new(journal.clone()),
        journal.clone(),
    )
}

#[test]
fn test_honest_run_hands_data_to_consumer() {
    let journal = Journal::new();
    let mut producer = producer(&journal);

    let outcome = producer.produce().unwrap();

    assert_eq!(outcome, ProductionOutcome::Consumed(DataId(1)));
    assert!(!producer.is_occupied());

    let mut expected = ExpectedEvents::new();
    expected
        .expect_created("Hello, World!")
        .expect_reported(Role::Borrower, "Hello, World!")
        .expect_occupancy(true)
        .expect_reported(Role::Consumer, "Hello, World!")
        .expect_destroyed();
    expected.verify(&journal);
}

#[test]
fn test_claiming_run_skips_consumer() {
    let journal = Journal::new();
    let mut producer = producer(&journal).with_datum("mine now");
    producer.borrower_mut().set_claims_on_receipt(true);

    let outcome = producer.produce().unwrap();

    assert_eq!(outcome, ProductionOutcome::Claimed(DataId(1)));
    assert!(!producer.is_occupied());
    assert_eq!(producer.consumer().consumed(), 0);

    let mut expected = ExpectedEvents::new();
    expected
        .expect_created("mine now")
        .expect_reported(Role::Borrower, "mine now")
        .expect_claimed()
        .expect_occupancy(false)
        .expect_consumer_skipped();
    expected.verify(&journal);
}

/// Repeated claims accumulate; nothing claimed is destroyed before the borrower.
#[test]
fn test_repeated_claims_are_all_kept() {
    let journal = Journal::new();
    let mut producer = producer(&journal);
    producer.borrower_mut().set_claims_on_receipt(true);

    for _ in 0..3 {
        producer.produce().unwrap();
    }
    assert_eq!(producer.borrower().hoard().len(), 3);
    assert!(!journal
        .events()
        .iter()
        .any(|e| matches!(e, Event::Destroyed { .. })));

    let (borrower, _consumer) = producer.into_parts();
    drop(borrower);
    let destroyed: Vec<_> = journal
        .events()
        .into_iter()
        .filter_map(|e| match e {
            Event::Destroyed { id } => Some(id),
            _ => None,
        })
        .collect();
    assert_eq!(destroyed, vec![DataId(1), DataId(2), DataId(3)]);
}

/// The disposition can flip back; later runs reach the consumer again.
#[test]
fn test_disposition_applies_until_changed() {
    let journal = Journal::new();
    let mut producer = producer(&journal);

    producer.borrower_mut().set_claims_on_receipt(true);
    let claimed = producer.produce().unwrap();
    producer.borrower_mut().set_claims_on_receipt(false);
    let consumed = producer.produce().unwrap();

    assert_eq!(claimed, ProductionOutcome::Claimed(DataId(1)));
    assert_eq!(consumed, ProductionOutcome::Consumed(DataId(2)));
    assert_eq!(producer.consumer().consumed(), 1);
}

// --- Custom roles through the trait seams ---

/// Swaps the lent value for an impostor; the producer must pass on whatever is in its slot.
struct Swapper {
    journal: Journal,
    kept: Vec<Data>,
}

impl Borrows<Data> for Swapper {
    fn borrow(&mut self, slot: &mut Slot<Data>) -> Result<(), OwnershipError> {
        let original = slot.take_checked()?;
        slot.fill(Data::new(DataId(100), "impostor", self.journal.clone()));
        self.kept.push(original);
        Ok(())
    }
}

#[derive(Default)]
struct Collector {
    seen: Vec<String>,
    ids: Vec<DataId>,
}

impl Consumes<Data> for Collector {
    fn consume(&mut self, data: Data) {
        self.seen.push(data.datum().to_string());
        self.ids.push(data.id());
    }
}

#[test]
fn test_producer_consumes_whatever_the_slot_holds() {
    let journal = Journal::new();
    let swapper = Swapper {
        journal: journal.clone(),
        kept: Vec::new(),
    };
    let mut producer = Producer::new(swapper, Collector::default(), journal.clone());

    let outcome = producer.produce().unwrap();

    // The outcome names the resource the consumer actually received
    assert_eq!(outcome, ProductionOutcome::Consumed(DataId(100)));
    assert_eq!(producer.consumer().ids, vec![outcome.data_id()]);
    assert_eq!(producer.consumer().seen, vec!["impostor".to_string()]);
    assert_eq!(producer.borrower().kept[0].datum(), "Hello, World!");
    assert!(journal.events().contains(&Event::Destroyed { id: DataId(100) }));
}

/// A borrower that reports vacancy propagates out of `produce`.
struct Vacator;

impl Borrows<Data> for Vacator {
    fn borrow(&mut self, slot: &mut Slot<Data>) -> Result<(), OwnershipError> {
        slot.clear();
        slot.get().map(|_| ())
    }
}

#[test]
fn test_borrower_error_propagates() {
    let journal = Journal::new();
    let mut producer = Producer::new(Vacator, Collector::default(), journal.clone());

    let result = producer.produce();

    assert!(matches!(result, Err(OwnershipError::VacantSlot { .. })));
    assert!(!producer.is_occupied());
    assert!(producer.consumer().seen.is_empty());
}
