// src/aggregate/categories.rs
use std::collections::{BTreeMap, HashSet};

use serde::Serialize;

use crate::filter::FilteredView;

/// Sales of one product category.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryRow {
    pub category: String,
    /// Item rows sold across the category.
    pub sales: u64,
    pub revenue: f64,
    /// Count of distinct product ids in the category.
    pub product_count: u64,
}

/// Group by `product_category_name`: item rows, revenue, and distinct
/// products per category, sorted descending by sales.
///
/// Rows without a category are dropped from the grouping.
pub fn category_sales(view: &FilteredView) -> Vec<CategoryRow> {
    let mut groups: BTreeMap<&str, (u64, f64, HashSet<&str>)> = BTreeMap::new();
    for row in view.rows() {
        let Some(category) = row.product_category.as_deref() else {
            continue;
        };
        let (sales, revenue, products) = groups.entry(category).or_default();
        *sales += 1;
        *revenue += row.price;
        products.insert(row.product_id.as_str());
    }

    let mut rows: Vec<CategoryRow> = groups
        .into_iter()
        .map(|(category, (sales, revenue, products))| CategoryRow {
            category: category.to_string(),
            sales,
            revenue,
            product_count: products.len() as u64,
        })
        .collect();
    rows.sort_by(|a, b| b.sales.cmp(&a.sales).then_with(|| a.category.cmp(&b.category)));
    rows
}

/// The `n` best-selling categories. Ties order by category name.
pub fn top_categories(categories: &[CategoryRow], n: usize) -> Vec<CategoryRow> {
    let mut rows = categories.to_vec();
    rows.sort_by(|a, b| b.sales.cmp(&a.sales).then_with(|| a.category.cmp(&b.category)));
    rows.truncate(n);
    rows
}

/// The `n` worst-selling categories. Ties order by category name.
pub fn bottom_categories(categories: &[CategoryRow], n: usize) -> Vec<CategoryRow> {
    let mut rows = categories.to_vec();
    rows.sort_by(|a, b| a.sales.cmp(&b.sales).then_with(|| a.category.cmp(&b.category)));
    rows.truncate(n);
    rows
}
