// src/aggregate/cities.rs
use std::collections::{BTreeMap, HashSet};

use serde::Serialize;

use crate::filter::FilteredView;

/// Customer reach of one city.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CityRow {
    pub city: String,
    /// Count of distinct customer ids, not of rows.
    pub customer_count: u64,
}

/// Group by `customer_city`: distinct customers per city, city ascending.
pub fn city_customers(view: &FilteredView) -> Vec<CityRow> {
    let mut cities: BTreeMap<&str, HashSet<&str>> = BTreeMap::new();
    for row in view.rows() {
        cities
            .entry(row.customer_city.as_str())
            .or_default()
            .insert(row.customer_id.as_str());
    }

    cities
        .into_iter()
        .map(|(city, customers)| CityRow {
            city: city.to_string(),
            customer_count: customers.len() as u64,
        })
        .collect()
}

/// The `n` cities with the most customers. Ties order by city name.
pub fn top_cities(view: &FilteredView, n: usize) -> Vec<CityRow> {
    let mut rows = city_customers(view);
    rows.sort_by(|a, b| {
        b.customer_count
            .cmp(&a.customer_count)
            .then_with(|| a.city.cmp(&b.city))
    });
    rows.truncate(n);
    rows
}

/// The `n` cities with the fewest customers. Ties order by city name.
pub fn bottom_cities(view: &FilteredView, n: usize) -> Vec<CityRow> {
    let mut rows = city_customers(view);
    rows.sort_by(|a, b| {
        a.customer_count
            .cmp(&b.customer_count)
            .then_with(|| a.city.cmp(&b.city))
    });
    rows.truncate(n);
    rows
}
