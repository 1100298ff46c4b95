//! The aggregation engine: pure group-by/reduce functions over a filtered
//! view.
//!
//! Every function here is deterministic and side-effect-free; each reads
//! the view and returns a fresh table. Ranked tables use an explicit,
//! documented ordering — the count being ranked first (descending for
//! "top", ascending for "bottom"), then the group key ascending — so top-N
//! outputs are reproducible under ties.

mod categories;
mod cities;
mod daily;
mod products;

pub use categories::{bottom_categories, category_sales, top_categories, CategoryRow};
pub use cities::{bottom_cities, city_customers, top_cities, CityRow};
pub use daily::{daily_sales, DailySalesRow};
pub use products::{bottom_products, product_sales, top_products, ProductRow};

use serde::Serialize;

use crate::filter::FilteredView;

/// Group counts each ranked table keeps.
pub const TOP_CITIES: usize = 10;
pub const BOTTOM_CITIES: usize = 5;
pub const TOP_PRODUCTS: usize = 10;
pub const BOTTOM_PRODUCTS: usize = 5;
pub const TOP_CATEGORIES: usize = 10;
pub const BOTTOM_CATEGORIES: usize = 10;

/// All seven derived tables for one filtered view.
///
/// Recomputed on every filter change and discarded after rendering (the
/// session memoizes ready snapshots, nothing here persists).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Aggregates {
    pub daily_sales: Vec<DailySalesRow>,
    pub top_cities: Vec<CityRow>,
    pub bottom_cities: Vec<CityRow>,
    pub top_products: Vec<ProductRow>,
    pub bottom_products: Vec<ProductRow>,
    pub top_categories: Vec<CategoryRow>,
    pub bottom_categories: Vec<CategoryRow>,
}

impl Aggregates {
    /// Compute every derived table from the filtered view.
    ///
    /// The view must be non-empty; callers short-circuit the empty case to
    /// a "no data" outcome before reaching this.
    pub fn compute(view: &FilteredView) -> Self {
        let products = product_sales(view);
        let categories = category_sales(view);

        Self {
            daily_sales: daily_sales(view),
            top_cities: top_cities(view, TOP_CITIES),
            bottom_cities: bottom_cities(view, BOTTOM_CITIES),
            top_products: top_products(&products, TOP_PRODUCTS),
            bottom_products: bottom_products(&products, BOTTOM_PRODUCTS),
            top_categories: top_categories(&categories, TOP_CATEGORIES),
            bottom_categories: bottom_categories(&categories, BOTTOM_CATEGORIES),
        }
    }
}
