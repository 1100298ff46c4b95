//! High-level dashboard session: load once, recompute per filter change.
//!
//! ```ignore
//! use vitrine::filter::{DateRange, FilterParams};
//! use vitrine::session::{Dashboard, Snapshot};
//!
//! let mut dashboard = Dashboard::open("dataset/all_data.csv")?;
//! let (min, max) = dashboard.dataset().date_bounds().unwrap();
//! let params = FilterParams::new(DateRange::new(min, max)?);
//! match dashboard.refresh(&params)? {
//!     Snapshot::Ready(snapshot) => println!("{} orders", snapshot.summary.total_orders),
//!     Snapshot::NoData => println!("nothing to show"),
//! }
//! ```

use std::path::Path;
use std::sync::Arc;

use serde::Serialize;
use tracing::debug;

use crate::aggregate::Aggregates;
use crate::cache::{self, MemoCache};
use crate::dataset::{self, Dataset, LoadError};
use crate::filter::{self, DateRange, FilterParams};
use crate::summary::Summary;

// ============================================================================
// Error Types
// ============================================================================

/// Errors that can occur during a session.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("Dataset load failed: {0}")]
    Load(#[from] LoadError),

    #[error("Cache key error: {0}")]
    Fingerprint(#[from] serde_json::Error),
}

pub type SessionResult<T> = Result<T, SessionError>;

// ============================================================================
// Snapshots
// ============================================================================

/// One computed dashboard state, ready to render.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReadySnapshot {
    /// The date bounds the aggregates were computed over.
    pub range: DateRange,
    pub aggregates: Aggregates,
    pub summary: Summary,
}

/// Outcome of a refresh: either there is data to render, or the filters
/// matched nothing and the host shows a warning instead of charts.
#[derive(Debug, Clone)]
pub enum Snapshot {
    /// The filtered view was empty. No aggregates were computed.
    NoData,
    Ready(Arc<ReadySnapshot>),
}

impl Snapshot {
    pub fn is_ready(&self) -> bool {
        matches!(self, Snapshot::Ready(_))
    }
}

// ============================================================================
// Dashboard
// ============================================================================

/// A dashboard session over one immutable dataset.
///
/// The dataset is loaded once and threaded through every filter and
/// aggregation call; there is no ambient global state. Ready snapshots are
/// memoized by filter parameters.
pub struct Dashboard {
    dataset: Dataset,
    cache: MemoCache<Arc<ReadySnapshot>>,
}

impl Dashboard {
    /// Load the dataset from a CSV file and start a session over it.
    ///
    /// A missing or malformed file is fatal; there is no degraded start.
    pub fn open(path: impl AsRef<Path>) -> SessionResult<Self> {
        let dataset = dataset::load(path)?;
        Ok(Self::from_dataset(dataset))
    }

    /// Start a session over an already-loaded dataset.
    pub fn from_dataset(dataset: Dataset) -> Self {
        Self {
            dataset,
            cache: MemoCache::new(),
        }
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    /// Categories available for selection under the given date range.
    pub fn category_options(&self, range: &DateRange) -> Vec<String> {
        filter::category_options(&self.dataset, range)
    }

    /// Recompute the dashboard state for the given selections.
    ///
    /// Returns [`Snapshot::NoData`] without touching the aggregation
    /// engine when the filtered view is empty.
    pub fn refresh(&mut self, params: &FilterParams) -> SessionResult<Snapshot> {
        let key = cache::fingerprint(params)?;
        if let Some(hit) = self.cache.get(&key) {
            debug!(%key, "snapshot cache hit");
            return Ok(Snapshot::Ready(Arc::clone(hit)));
        }

        let view = filter::apply(&self.dataset, params);
        debug!(rows = view.len(), "filter applied");
        if view.is_empty() {
            return Ok(Snapshot::NoData);
        }

        let aggregates = Aggregates::compute(&view);
        let summary = Summary::from_daily(&aggregates.daily_sales);
        let snapshot = Arc::new(ReadySnapshot {
            range: params.range,
            aggregates,
            summary,
        });
        self.cache.insert(key, Arc::clone(&snapshot));
        Ok(Snapshot::Ready(snapshot))
    }

    /// Number of memoized snapshots held by the session.
    pub fn cached_snapshots(&self) -> usize {
        self.cache.len()
    }
}
