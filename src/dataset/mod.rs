//! Dataset loading and the in-memory order table.
//!
//! The dataset is loaded once per session and treated as read-only from
//! then on. Filtering and aggregation only ever borrow from it.

mod loader;
mod record;

pub use loader::{load, LoadError, LoadResult};
pub use record::{OrderRecord, REQUIRED_COLUMNS};

use chrono::NaiveDate;

/// The immutable base table of order item rows.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    records: Vec<OrderRecord>,
}

impl Dataset {
    /// Build a dataset from already-parsed records.
    pub fn from_records(records: Vec<OrderRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[OrderRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Earliest and latest `order_date` in the table, for the host's
    /// date-range control. `None` when the table has no rows.
    pub fn date_bounds(&self) -> Option<(NaiveDate, NaiveDate)> {
        let first = self.records.first()?.order_date;
        let bounds = self
            .records
            .iter()
            .fold((first, first), |(min, max), record| {
                (min.min(record.order_date), max.max(record.order_date))
            });
        Some(bounds)
    }
}
