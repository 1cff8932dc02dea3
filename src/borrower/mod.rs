//! The borrowing role.
//!
//! A [`Borrower`] is lent the producer's slot for the duration of one call. It
//! always reports the payload. When configured to claim on receipt, it also
//! moves the value into its own hoard, leaving the lender's slot empty.

use tracing::{info, warn};

use crate::framework::{Borrows, Event, Journal, OwnershipError, Role, Slot};
use crate::model::Data;

#[derive(Debug)]
pub struct Borrower {
    claims_on_receipt: bool,
    hoard: Vec<Data>,
    journal: Journal,
}

impl Borrower {
    /// Creates a borrower that returns what it is lent.
    pub fn new(journal: Journal) -> Self {
        Self {
            claims_on_receipt: false,
            hoard: Vec::new(),
            journal,
        }
    }

    /// Sets the disposition for every subsequent [`Borrows::borrow`] call.
    pub fn set_claims_on_receipt(&mut self, claims: bool) {
        info!(claims, "Borrower disposition changed");
        self.claims_on_receipt = claims;
    }

    pub fn claims_on_receipt(&self) -> bool {
        self.claims_on_receipt
    }

    /// Resources this borrower has claimed. They live as long as the borrower.
    pub fn hoard(&self) -> &[Data] {
        &self.hoard
    }
}

impl Borrows<Data> for Borrower {
    fn borrow(&mut self, slot: &mut Slot<Data>) -> Result<(), OwnershipError> {
        let data = slot.get()?;
        info!(role = %Role::Borrower, datum = data.datum(), "got the data");
        self.journal.record(Event::Reported {
            role: Role::Borrower,
            id: data.id(),
            datum: data.datum().to_string(),
        });

        if self.claims_on_receipt {
            let data = slot.take_checked()?;
            warn!(role = %Role::Borrower, data_id = %data.id(), "Claiming the data");
            self.journal.record(Event::Claimed { id: data.id() });
            self.hoard.push(data);
        }
        Ok(())
    }
}
