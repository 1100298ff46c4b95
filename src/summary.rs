// src/summary.rs
use serde::Serialize;

use crate::aggregate::DailySalesRow;

/// Scalar metrics shown in the dashboard header.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Summary {
    pub total_orders: u64,
    pub total_revenue: f64,
    /// `total_revenue / total_orders`, defined as 0 when there are no
    /// orders.
    pub avg_revenue_per_order: f64,
}

impl Summary {
    /// Derive the metrics by summing the daily sales table.
    pub fn from_daily(daily: &[DailySalesRow]) -> Self {
        let total_orders: u64 = daily.iter().map(|day| day.total_orders).sum();
        let total_revenue: f64 = daily.iter().map(|day| day.total_revenue).sum();
        let avg_revenue_per_order = if total_orders > 0 {
            total_revenue / total_orders as f64
        } else {
            0.0
        };

        Self {
            total_orders,
            total_revenue,
            avg_revenue_per_order,
        }
    }
}
