// src/dataset/record.rs
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Columns the source file must carry. Names are case-sensitive and part
/// of the contract.
pub const REQUIRED_COLUMNS: [&str; 8] = [
    "order_id",
    "order_item_id",
    "product_id",
    "product_category_name",
    "customer_id",
    "customer_city",
    "order_purchase_timestamp",
    "price",
];

/// One row of the source table as it appears on disk, before timestamp
/// parsing. An empty `product_category_name` field decodes to `None`.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct RawRecord {
    pub order_id: String,
    pub order_item_id: u32,
    pub product_id: String,
    #[serde(rename = "product_category_name")]
    pub product_category: Option<String>,
    pub customer_id: String,
    pub customer_city: String,
    #[serde(rename = "order_purchase_timestamp")]
    pub purchased_at: String,
    pub price: f64,
}

/// A fully parsed order item row.
///
/// One order spans one row per purchased item; `order_id` and `product_id`
/// therefore repeat across rows.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderRecord {
    pub order_id: String,
    pub order_item_id: u32,
    pub product_id: String,
    /// Absent for uncategorized products; such rows still pass the date
    /// filter but drop out of category-keyed aggregates.
    pub product_category: Option<String>,
    pub customer_id: String,
    pub customer_city: String,
    pub purchased_at: NaiveDateTime,
    /// Calendar date of `purchased_at`. Derived once at load, immutable.
    pub order_date: NaiveDate,
    pub price: f64,
}
