//! Filter stage: date-range and category selection over the base table.
//!
//! Filtering never mutates the dataset; it selects borrowed rows into a
//! fresh [`FilteredView`]. The category universe offered to the user is
//! derived from the date-filtered rows, so narrowing the range also
//! narrows the options.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::Serialize;
use thiserror::Error;

use crate::dataset::{Dataset, OrderRecord};

/// How many categories are pre-selected by default.
pub const DEFAULT_SELECTION_SIZE: usize = 5;

/// Errors raised while building filter parameters.
#[derive(Debug, Error)]
pub enum FilterError {
    #[error("Invalid date range: {start} is after {end}")]
    InvalidDateRange { start: NaiveDate, end: NaiveDate },
}

/// An inclusive range over `order_date`.
///
/// Construction enforces `start <= end`; a single-date selection collapses
/// to a one-day range via [`DateRange::single`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, FilterError> {
        if start > end {
            return Err(FilterError::InvalidDateRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// A range collapsed to one day, both bounds inclusive.
    pub fn single(date: NaiveDate) -> Self {
        Self {
            start: date,
            end: date,
        }
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

/// Current user selections: a date range plus selected categories.
///
/// An empty category set means "no category restriction" — absence of
/// selection is not selection of nothing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterParams {
    pub range: DateRange,
    pub categories: BTreeSet<String>,
}

impl FilterParams {
    pub fn new(range: DateRange) -> Self {
        Self {
            range,
            categories: BTreeSet::new(),
        }
    }

    pub fn with_categories<I, S>(mut self, categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.categories = categories.into_iter().map(Into::into).collect();
        self
    }

    fn matches(&self, record: &OrderRecord) -> bool {
        if !self.range.contains(record.order_date) {
            return false;
        }
        if self.categories.is_empty() {
            return true;
        }
        // A row without a category never matches an active selection.
        record
            .product_category
            .as_deref()
            .is_some_and(|category| self.categories.contains(category))
    }
}

/// A subset of the base table matching the current selections.
///
/// Holds borrowed rows; the dataset stays untouched.
#[derive(Debug)]
pub struct FilteredView<'a> {
    rows: Vec<&'a OrderRecord>,
}

impl<'a> FilteredView<'a> {
    pub fn rows(&self) -> &[&'a OrderRecord] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Callers must short-circuit to a "no data" outcome when this is
    /// true; the aggregation engine expects a non-empty view.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Apply the date and category predicates, selecting rows into a new view.
pub fn apply<'a>(dataset: &'a Dataset, params: &FilterParams) -> FilteredView<'a> {
    let rows = dataset
        .records()
        .iter()
        .filter(|record| params.matches(record))
        .collect();
    FilteredView { rows }
}

/// Distinct categories among rows in the date range, sorted ascending.
///
/// Rows without a category are excluded from the universe offered to the
/// user.
pub fn category_options(dataset: &Dataset, range: &DateRange) -> Vec<String> {
    let distinct: BTreeSet<&str> = dataset
        .records()
        .iter()
        .filter(|record| range.contains(record.order_date))
        .filter_map(|record| record.product_category.as_deref())
        .collect();
    distinct.into_iter().map(String::from).collect()
}

/// Default multi-select state: the first five options in sorted order, or
/// all of them when fewer exist.
pub fn default_selection(options: &[String]) -> BTreeSet<String> {
    options
        .iter()
        .take(DEFAULT_SELECTION_SIZE)
        .cloned()
        .collect()
}
