//! # Vitrine
//!
//! Order-analytics engine behind an e-commerce dashboard.
//!
//! ## Architecture
//!
//! Vitrine owns the data path of the dashboard; an interactive host
//! (widget toolkit, web frontend, or the bundled CLI) owns the controls
//! and the chart drawing:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │                 Order CSV (flat table)                   │
//! └─────────────────────────────────────────────────────────┘
//!                          │
//!                          ▼ [dataset loader]
//! ┌─────────────────────────────────────────────────────────┐
//! │        Dataset (immutable, loaded once per session)      │
//! └─────────────────────────────────────────────────────────┘
//!                          │
//!                          ▼ [filter stage: date range + categories]
//! ┌─────────────────────────────────────────────────────────┐
//! │             FilteredView (borrowed rows)                 │
//! └─────────────────────────────────────────────────────────┘
//!                          │
//!                          ▼ [aggregation engine]
//! ┌─────────────────────────────────────────────────────────┐
//! │   Seven derived tables + summary metrics (Snapshot)      │
//! └─────────────────────────────────────────────────────────┘
//!                          │
//!                          ▼ [render / host]
//! ┌─────────────────────────────────────────────────────────┐
//! │          Charts, tables, metrics, "no data"              │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! The base table is read-only after load. Every filter change recomputes
//! the filtered view and the aggregates from scratch; ready snapshots are
//! memoized by filter parameters for responsiveness only.

pub mod aggregate;
pub mod cache;
pub mod config;
pub mod dataset;
pub mod filter;
pub mod render;
pub mod session;
pub mod summary;

/// Re-exports for convenient usage.
pub mod prelude {
    pub use crate::aggregate::{
        bottom_categories, bottom_cities, bottom_products, category_sales, city_customers,
        daily_sales, product_sales, top_categories, top_cities, top_products, Aggregates,
        CategoryRow, CityRow, DailySalesRow, ProductRow,
    };
    pub use crate::dataset::{load, Dataset, OrderRecord};
    pub use crate::filter::{
        apply, category_options, default_selection, DateRange, FilterParams, FilteredView,
    };
    pub use crate::render::{DetailView, TextRenderer};
    pub use crate::session::{Dashboard, ReadySnapshot, Snapshot};
    pub use crate::summary::Summary;
}
