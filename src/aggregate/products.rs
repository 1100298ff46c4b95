// src/aggregate/products.rs
use std::collections::BTreeMap;

use serde::Serialize;

use crate::filter::FilteredView;

/// Sales of one product within one category.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductRow {
    pub product_id: String,
    pub category: String,
    /// Item rows sold, one per order line.
    pub sales: u64,
    pub revenue: f64,
}

/// Group by `(product_id, product_category_name)`: item rows and revenue
/// per product.
///
/// Rows without a category are dropped, the same way a group-by over an
/// absent key drops them in the source table.
pub fn product_sales(view: &FilteredView) -> Vec<ProductRow> {
    let mut groups: BTreeMap<(&str, &str), (u64, f64)> = BTreeMap::new();
    for row in view.rows() {
        let Some(category) = row.product_category.as_deref() else {
            continue;
        };
        let (sales, revenue) = groups.entry((row.product_id.as_str(), category)).or_default();
        *sales += 1;
        *revenue += row.price;
    }

    groups
        .into_iter()
        .map(|((product_id, category), (sales, revenue))| ProductRow {
            product_id: product_id.to_string(),
            category: category.to_string(),
            sales,
            revenue,
        })
        .collect()
}

/// The `n` best-selling products. Ties order by product id.
pub fn top_products(products: &[ProductRow], n: usize) -> Vec<ProductRow> {
    let mut rows = products.to_vec();
    rows.sort_by(|a, b| {
        b.sales
            .cmp(&a.sales)
            .then_with(|| a.product_id.cmp(&b.product_id))
    });
    rows.truncate(n);
    rows
}

/// The `n` worst-selling products. Ties order by product id.
pub fn bottom_products(products: &[ProductRow], n: usize) -> Vec<ProductRow> {
    let mut rows = products.to_vec();
    rows.sort_by(|a, b| {
        a.sales
            .cmp(&b.sales)
            .then_with(|| a.product_id.cmp(&b.product_id))
    });
    rows.truncate(n);
    rows
}
