// src/dataset/loader.rs
use std::fs::File;
use std::path::Path;

use chrono::NaiveDateTime;
use thiserror::Error;
use tracing::info;

use super::record::{OrderRecord, RawRecord, REQUIRED_COLUMNS};
use super::Dataset;

/// Result type for dataset loading.
pub type LoadResult<T> = Result<T, LoadError>;

/// Errors raised while loading the dataset.
///
/// Every variant is fatal: there is no partial or degraded load.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Failed to open dataset file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed dataset: {0}")]
    Csv(#[from] csv::Error),

    #[error("Missing required column: {0}")]
    MissingColumn(&'static str),

    #[error("Row {row}: unparseable purchase timestamp '{value}'")]
    BadTimestamp { row: usize, value: String },
}

/// Accepted layouts for `order_purchase_timestamp`, tried in order.
const TIMESTAMP_FORMATS: [&str; 4] = [
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
];

fn parse_timestamp(value: &str) -> Option<NaiveDateTime> {
    TIMESTAMP_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(value, fmt).ok())
}

/// Load the order table from a CSV file.
///
/// Parses `order_purchase_timestamp` and derives `order_date` from it.
/// Any I/O failure, missing column, or unparseable field aborts the load.
pub fn load(path: impl AsRef<Path>) -> LoadResult<Dataset> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let mut reader = csv::Reader::from_reader(file);

    let headers = reader.headers()?.clone();
    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == column) {
            return Err(LoadError::MissingColumn(column));
        }
    }

    let mut records = Vec::new();
    for (idx, result) in reader.deserialize::<RawRecord>().enumerate() {
        let raw = result?;
        // Data rows are numbered from 1; the header is row 0.
        let row = idx + 1;
        let purchased_at =
            parse_timestamp(&raw.purchased_at).ok_or_else(|| LoadError::BadTimestamp {
                row,
                value: raw.purchased_at.clone(),
            })?;

        records.push(OrderRecord {
            order_id: raw.order_id,
            order_item_id: raw.order_item_id,
            product_id: raw.product_id,
            product_category: raw.product_category,
            customer_id: raw.customer_id,
            customer_city: raw.customer_city,
            purchased_at,
            order_date: purchased_at.date(),
            price: raw.price,
        });
    }

    let dataset = Dataset::from_records(records);
    info!(
        rows = dataset.len(),
        bounds = ?dataset.date_bounds(),
        "dataset loaded from {}",
        path.display()
    );
    Ok(dataset)
}
