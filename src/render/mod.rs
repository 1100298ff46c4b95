//! Presentation helpers: the detail-view selector and a plain-text
//! rendering backend.
//!
//! The crate's obligation to richer hosts ends at well-formed aggregate
//! tables and summary metrics; chart drawing belongs to the host. The text
//! backend here is what the bundled CLI renders with.

mod text;

pub use text::{
    format_count, short_product_id, tick_indices, TextRenderer, DEFAULT_MAX_TICKS, SHORT_ID_LEN,
};

/// On-demand detail views the host can ask for. Exactly three.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailView {
    SalesTrend,
    CityData,
    ProductData,
}

impl DetailView {
    pub fn label(&self) -> &'static str {
        match self {
            DetailView::SalesTrend => "Sales Trend",
            DetailView::CityData => "City Data",
            DetailView::ProductData => "Product Data",
        }
    }
}
