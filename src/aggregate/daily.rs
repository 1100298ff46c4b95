// src/aggregate/daily.rs
use std::collections::{BTreeMap, HashSet};

use chrono::NaiveDate;
use serde::Serialize;

use crate::filter::FilteredView;

/// One day of the sales trend.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailySalesRow {
    pub date: NaiveDate,
    /// Count of distinct order ids that day, not of item rows.
    pub total_orders: u64,
    pub total_revenue: f64,
}

/// Group by `order_date`: distinct orders and revenue per day, ascending
/// by date.
pub fn daily_sales(view: &FilteredView) -> Vec<DailySalesRow> {
    let mut days: BTreeMap<NaiveDate, (HashSet<&str>, f64)> = BTreeMap::new();
    for row in view.rows() {
        let (orders, revenue) = days.entry(row.order_date).or_default();
        orders.insert(row.order_id.as_str());
        *revenue += row.price;
    }

    days.into_iter()
        .map(|(date, (orders, revenue))| DailySalesRow {
            date,
            total_orders: orders.len() as u64,
            total_revenue: revenue,
        })
        .collect()
}
