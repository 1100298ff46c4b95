#[cfg(test)]
mod tests {
    use chrono::NaiveDateTime;

    use vitrine::aggregate::{bottom_cities, city_customers, top_cities};
    use vitrine::dataset::{Dataset, OrderRecord};
    use vitrine::filter::{apply, DateRange, FilterParams, FilteredView};

    fn record(customer_id: &str, city: &str) -> OrderRecord {
        let purchased_at =
            NaiveDateTime::parse_from_str("2024-01-01 09:00:00", "%Y-%m-%d %H:%M:%S").unwrap();
        OrderRecord {
            order_id: format!("order-{customer_id}"),
            order_item_id: 1,
            product_id: "p1".to_string(),
            product_category: Some("toys".to_string()),
            customer_id: customer_id.to_string(),
            customer_city: city.to_string(),
            purchased_at,
            order_date: purchased_at.date(),
            price: 10.0,
        }
    }

    fn view_over(data: &Dataset) -> FilteredView<'_> {
        let (min, max) = data.date_bounds().unwrap();
        apply(data, &FilterParams::new(DateRange::new(min, max).unwrap()))
    }

    #[test]
    fn test_city_customers_counts_distinct_customers() {
        // c1 appears twice in sao paulo; it counts once.
        let data = Dataset::from_records(vec![
            record("c1", "sao paulo"),
            record("c1", "sao paulo"),
            record("c2", "sao paulo"),
            record("c3", "rio"),
        ]);
        let view = view_over(&data);
        let cities = city_customers(&view);

        assert_eq!(cities.len(), 2);
        assert_eq!(cities[0].city, "rio");
        assert_eq!(cities[0].customer_count, 1);
        assert_eq!(cities[1].city, "sao paulo");
        assert_eq!(cities[1].customer_count, 2);
    }

    #[test]
    fn test_top_and_bottom_are_subsets_of_the_city_set() {
        let data = Dataset::from_records(vec![
            record("c1", "sao paulo"),
            record("c2", "sao paulo"),
            record("c3", "sao paulo"),
            record("c4", "rio"),
            record("c5", "rio"),
            record("c6", "recife"),
        ]);
        let view = view_over(&data);

        let top = top_cities(&view, 10);
        let bottom = bottom_cities(&view, 5);
        let universe: Vec<String> =
            city_customers(&view).into_iter().map(|c| c.city).collect();

        for row in top.iter().chain(bottom.iter()) {
            assert!(universe.contains(&row.city));
        }
    }

    #[test]
    fn test_top_sorts_descending_bottom_ascending() {
        let data = Dataset::from_records(vec![
            record("c1", "sao paulo"),
            record("c2", "sao paulo"),
            record("c3", "sao paulo"),
            record("c4", "rio"),
            record("c5", "rio"),
            record("c6", "recife"),
        ]);
        let view = view_over(&data);

        let top = top_cities(&view, 2);
        assert_eq!(top.len(), 2);
        assert_eq!(top[0].city, "sao paulo");
        assert_eq!(top[0].customer_count, 3);
        assert_eq!(top[1].city, "rio");

        let bottom = bottom_cities(&view, 2);
        assert_eq!(bottom[0].city, "recife");
        assert_eq!(bottom[0].customer_count, 1);
        assert_eq!(bottom[1].city, "rio");
    }

    #[test]
    fn test_ties_break_by_city_name_ascending() {
        let data = Dataset::from_records(vec![
            record("c1", "curitiba"),
            record("c2", "belem"),
            record("c3", "aracaju"),
        ]);
        let view = view_over(&data);

        let top = top_cities(&view, 3);
        let names: Vec<&str> = top.iter().map(|c| c.city.as_str()).collect();
        assert_eq!(names, ["aracaju", "belem", "curitiba"]);

        let bottom = bottom_cities(&view, 3);
        let names: Vec<&str> = bottom.iter().map(|c| c.city.as_str()).collect();
        assert_eq!(names, ["aracaju", "belem", "curitiba"]);
    }

    #[test]
    fn test_fewer_groups_than_n_returns_all() {
        let data = Dataset::from_records(vec![record("c1", "rio")]);
        let view = view_over(&data);

        assert_eq!(top_cities(&view, 10).len(), 1);
        assert_eq!(bottom_cities(&view, 5).len(), 1);
    }
}
