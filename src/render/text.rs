// src/render/text.rs
use num_format::{Locale, ToFormattedString};

use crate::aggregate::{CategoryRow, CityRow, DailySalesRow, ProductRow};
use crate::session::ReadySnapshot;
use crate::summary::Summary;

use super::DetailView;

/// Product ids are shortened to this many characters for display.
pub const SHORT_ID_LEN: usize = 10;

/// Trend charts thin their axis labels down to roughly this many ticks.
pub const DEFAULT_MAX_TICKS: usize = 10;

/// Format a count with thousands separators.
pub fn format_count(n: u64) -> String {
    n.to_formatted_string(&Locale::en)
}

/// Shorten a product id for display: first [`SHORT_ID_LEN`] characters
/// plus an ellipsis. Ids that already fit are left alone.
pub fn short_product_id(id: &str) -> String {
    if id.chars().count() > SHORT_ID_LEN {
        let head: String = id.chars().take(SHORT_ID_LEN).collect();
        format!("{head}...")
    } else {
        id.to_string()
    }
}

/// Indices of the trend rows that get an axis label.
///
/// Short trends label every point; past twice `max_ticks` points, every
/// `len / max_ticks`-th point is labeled.
pub fn tick_indices(len: usize, max_ticks: usize) -> Vec<usize> {
    if len > 2 * max_ticks {
        let step = (len / max_ticks).max(1);
        (0..len).step_by(step).collect()
    } else {
        (0..len).collect()
    }
}

enum Align {
    Left,
    Right,
}

/// Pad cells into an aligned table. Text columns align left, numeric
/// columns right; lines carry no trailing whitespace.
fn render_table(headers: &[&str], aligns: &[Align], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.len()).collect();
    for row in rows {
        for (idx, cell) in row.iter().enumerate() {
            widths[idx] = widths[idx].max(cell.len());
        }
    }

    let mut lines = Vec::with_capacity(rows.len() + 1);
    let header_cells: Vec<String> = headers.iter().map(|h| h.to_string()).collect();
    for cells in std::iter::once(&header_cells).chain(rows.iter()) {
        let mut line = String::new();
        for (idx, cell) in cells.iter().enumerate() {
            if idx > 0 {
                line.push_str("  ");
            }
            match aligns[idx] {
                Align::Left => line.push_str(&format!("{:<width$}", cell, width = widths[idx])),
                Align::Right => line.push_str(&format!("{:>width$}", cell, width = widths[idx])),
            }
        }
        lines.push(line.trim_end().to_string());
    }
    lines.join("\n")
}

/// Plain-text renderer for snapshots and aggregate tables.
pub struct TextRenderer {
    currency_label: String,
}

impl Default for TextRenderer {
    fn default() -> Self {
        Self::new("Rp")
    }
}

impl TextRenderer {
    pub fn new(currency_label: impl Into<String>) -> Self {
        Self {
            currency_label: currency_label.into(),
        }
    }

    /// Format an amount with thousands separators and two decimals, e.g.
    /// `Rp 1,234,567.89`.
    pub fn format_currency(&self, amount: f64) -> String {
        let sign = if amount < 0.0 { "-" } else { "" };
        let cents = (amount.abs() * 100.0).round() as u64;
        let whole = (cents / 100).to_formatted_string(&Locale::en);
        let frac = cents % 100;
        format!("{} {}{}.{:02}", self.currency_label, sign, whole, frac)
    }

    /// The warning shown instead of charts when the filters match nothing.
    pub fn no_data(&self) -> String {
        "No data for the selected filters. Adjust the date range or categories.".to_string()
    }

    pub fn summary(&self, summary: &Summary) -> String {
        format!(
            "Total orders: {}\nTotal revenue: {}\nAverage revenue per order: {}",
            format_count(summary.total_orders),
            self.format_currency(summary.total_revenue),
            self.format_currency(summary.avg_revenue_per_order),
        )
    }

    pub fn daily_sales(&self, rows: &[DailySalesRow]) -> String {
        let cells: Vec<Vec<String>> = rows
            .iter()
            .map(|row| {
                vec![
                    row.date.to_string(),
                    format_count(row.total_orders),
                    self.format_currency(row.total_revenue),
                ]
            })
            .collect();
        render_table(
            &["date", "total_orders", "total_revenue"],
            &[Align::Left, Align::Right, Align::Right],
            &cells,
        )
    }

    pub fn cities(&self, rows: &[CityRow]) -> String {
        if rows.is_empty() {
            return "No city data for the selected filters.".to_string();
        }
        let cells: Vec<Vec<String>> = rows
            .iter()
            .map(|row| vec![row.city.clone(), format_count(row.customer_count)])
            .collect();
        render_table(
            &["city", "customer_count"],
            &[Align::Left, Align::Right],
            &cells,
        )
    }

    pub fn products(&self, rows: &[ProductRow]) -> String {
        if rows.is_empty() {
            return "No product data for the selected filters.".to_string();
        }
        let cells: Vec<Vec<String>> = rows
            .iter()
            .map(|row| {
                vec![
                    short_product_id(&row.product_id),
                    row.category.clone(),
                    format_count(row.sales),
                    self.format_currency(row.revenue),
                ]
            })
            .collect();
        render_table(
            &["product_id", "category", "sales", "revenue"],
            &[Align::Left, Align::Left, Align::Right, Align::Right],
            &cells,
        )
    }

    pub fn categories(&self, rows: &[CategoryRow]) -> String {
        if rows.is_empty() {
            return "No category data for the selected filters.".to_string();
        }
        let cells: Vec<Vec<String>> = rows
            .iter()
            .map(|row| {
                vec![
                    row.category.clone(),
                    format_count(row.sales),
                    self.format_currency(row.revenue),
                    format_count(row.product_count),
                ]
            })
            .collect();
        render_table(
            &["category", "sales", "revenue", "product_count"],
            &[Align::Left, Align::Right, Align::Right, Align::Right],
            &cells,
        )
    }

    /// Header view: range, summary metrics, and the daily trend.
    pub fn overview(&self, snapshot: &ReadySnapshot) -> String {
        format!(
            "Orders and revenue ({} - {})\n\n{}\n\n{}",
            snapshot.range.start(),
            snapshot.range.end(),
            self.summary(&snapshot.summary),
            self.daily_sales(&snapshot.aggregates.daily_sales),
        )
    }

    /// One of the three on-demand detail views.
    pub fn detail(&self, view: DetailView, snapshot: &ReadySnapshot) -> String {
        match view {
            DetailView::SalesTrend => format!(
                "Daily sales\n{}",
                self.daily_sales(&snapshot.aggregates.daily_sales)
            ),
            DetailView::CityData => format!(
                "Top 10 cities\n{}\n\nBottom 5 cities\n{}",
                self.cities(&snapshot.aggregates.top_cities),
                self.cities(&snapshot.aggregates.bottom_cities),
            ),
            DetailView::ProductData => format!(
                "Best-selling products\n{}\n\nLeast-selling products\n{}",
                self.products(&snapshot.aggregates.top_products),
                self.products(&snapshot.aggregates.bottom_products),
            ),
        }
    }
}
