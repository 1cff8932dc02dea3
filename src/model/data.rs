use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::info;

use crate::framework::{Event, Journal};

/// Identity of one [`Data`] instance.
///
/// Ids are handed out by the [`Producer`](crate::producer::Producer), one per
/// production run, so construction and destruction of the same instance can be
/// matched up in the [`Journal`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct DataId(pub u64);

impl fmt::Display for DataId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "data_{}", self.0)
    }
}

/// The owned resource: a human-readable datum with an observable lifetime.
///
/// `Data` is not `Clone`. Exactly one owner exists at a time, and
/// dropping that owner is the only way an instance is destroyed.
#[derive(Debug)]
pub struct Data {
    id: DataId,
    datum: String,
    journal: Journal,
}

impl Data {
    /// Constructs a new instance and records its creation.
    pub fn new(id: DataId, datum: impl Into<String>, journal: Journal) -> Self {
        let datum = datum.into();
        info!(data_id = %id, "Data::new()");
        journal.record(Event::Created {
            id,
            datum: datum.clone(),
        });
        Self { id, datum, journal }
    }

    pub fn id(&self) -> DataId {
        self.id
    }

    pub fn datum(&self) -> &str {
        &self.datum
    }
}

impl Drop for Data {
    fn drop(&mut self) {
        info!(data_id = %self.id, "Data::drop()");
        self.journal.record(Event::Destroyed { id: self.id });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn construction_and_drop_are_recorded_once() {
        let journal = Journal::new();
        let data = Data::new(DataId(1), "Hello, World!", journal.clone());
        assert_eq!(data.datum(), "Hello, World!");
        assert_eq!(data.id().to_string(), "data_1");

        let moved = data;
        drop(moved);

        assert_eq!(
            journal.events(),
            vec![
                Event::Created {
                    id: DataId(1),
                    datum: "Hello, World!".to_string()
                },
                Event::Destroyed { id: DataId(1) },
            ]
        );
    }
}
