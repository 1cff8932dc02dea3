//! # Expectation Framework
//!
//! Utilities for asserting what a production run did.
//!
//! Build an [`ExpectedEvents`] sequence with the fluent `expect_*` helpers,
//! then call [`ExpectedEvents::verify`] against a [`Journal`].
//!
//! ```ignore
//! let mut expected = ExpectedEvents::new();
//! expected
//!     .expect_created("Hello, World!")
//!     .expect_reported(Role::Borrower, "Hello, World!")
//!     .expect_occupancy(true)
//!     .expect_reported(Role::Consumer, "Hello, World!")
//!     .expect_destroyed();
//! expected.verify(&journal);
//! ```

use std::collections::VecDeque;

use crate::framework::{Event, Journal, Role};
use crate::model::DataId;

// =============================================================================
// EXPECTATION BUILDER API
// =============================================================================

/// One expected journal entry.
///
/// Resource ids are not known up front, so every expectation that mentions a
/// resource is bound to "the resource of the most recent `Created`".
#[derive(Debug)]
enum Expectation {
    Created { datum: String },
    Reported { role: Role, datum: String },
    Claimed,
    Occupancy { occupied: bool },
    ConsumerSkipped,
    Destroyed,
}

/// An ordered list of expected events.
#[derive(Debug, Default)]
pub struct ExpectedEvents {
    expectations: VecDeque<Expectation>,
}

impl ExpectedEvents {
    /// Creates an empty expectation list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Expects a resource holding `datum` to be constructed.
    pub fn expect_created(&mut self, datum: impl Into<String>) -> &mut Self {
        self.expectations.push_back(Expectation::Created {
            datum: datum.into(),
        });
        self
    }

    /// Expects `role` to report `datum` from the current resource.
    pub fn expect_reported(&mut self, role: Role, datum: impl Into<String>) -> &mut Self {
        self.expectations.push_back(Expectation::Reported {
            role,
            datum: datum.into(),
        });
        self
    }

    /// Expects the borrower to claim the current resource.
    pub fn expect_claimed(&mut self) -> &mut Self {
        self.expectations.push_back(Expectation::Claimed);
        self
    }

    /// Expects the producer's post-lending occupancy check.
    pub fn expect_occupancy(&mut self, occupied: bool) -> &mut Self {
        self.expectations.push_back(Expectation::Occupancy { occupied });
        self
    }

    /// Expects the producer to skip the consumer.
    pub fn expect_consumer_skipped(&mut self) -> &mut Self {
        self.expectations.push_back(Expectation::ConsumerSkipped);
        self
    }

    /// Expects the current resource to be destroyed.
    pub fn expect_destroyed(&mut self) -> &mut Self {
        self.expectations.push_back(Expectation::Destroyed);
        self
    }

    /// Verifies that the journal contains exactly the expected sequence.
    ///
    /// # Panics
    /// On the first mismatch, or if either side has entries left over.
    pub fn verify(&self, journal: &Journal) {
        let events = journal.events();
        let mut current: Option<DataId> = None;

        for (index, expectation) in self.expectations.iter().enumerate() {
            let event = events.get(index).unwrap_or_else(|| {
                panic!(
                    "Not all expectations were met. {} remaining, next: {:?}",
                    self.expectations.len() - index,
                    expectation
                )
            });

            let matched = match (expectation, event) {
                (Expectation::Created { datum }, Event::Created { id, datum: got }) => {
                    current = Some(*id);
                    datum == got
                }
                (
                    Expectation::Reported { role, datum },
                    Event::Reported { role: got_role, id, datum: got },
                ) => role == got_role && datum == got && current == Some(*id),
                (Expectation::Claimed, Event::Claimed { id }) => current == Some(*id),
                (Expectation::Occupancy { occupied }, Event::OccupancyChecked { occupied: got }) => {
                    occupied == got
                }
                (Expectation::ConsumerSkipped, Event::ConsumerSkipped) => true,
                (Expectation::Destroyed, Event::Destroyed { id }) => current == Some(*id),
                _ => false,
            };

            if !matched {
                panic!(
                    "Unexpected event at position {}: expected {:?}, got {:?}",
                    index, expectation, event
                );
            }
        }

        if events.len() > self.expectations.len() {
            panic!(
                "Unexpected trailing events: {:?}",
                &events[self.expectations.len()..]
            );
        }
    }
}
