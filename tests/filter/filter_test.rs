#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, NaiveDateTime};

    use vitrine::dataset::{Dataset, OrderRecord};
    use vitrine::filter::{
        apply, category_options, default_selection, DateRange, FilterParams,
    };

    fn ts(s: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").unwrap()
    }

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    fn record(order_id: &str, timestamp: &str, category: Option<&str>, price: f64) -> OrderRecord {
        let purchased_at = ts(timestamp);
        OrderRecord {
            order_id: order_id.to_string(),
            order_item_id: 1,
            product_id: format!("prod-{order_id}"),
            product_category: category.map(String::from),
            customer_id: format!("cust-{order_id}"),
            customer_city: "sao paulo".to_string(),
            purchased_at,
            order_date: purchased_at.date(),
            price,
        }
    }

    fn dataset() -> Dataset {
        Dataset::from_records(vec![
            record("a", "2024-01-01 09:00:00", Some("toys"), 10.0),
            record("b", "2024-01-02 10:00:00", Some("books"), 20.0),
            record("c", "2024-01-03 11:00:00", Some("toys"), 30.0),
            record("d", "2024-01-04 12:00:00", None, 40.0),
            record("e", "2024-02-01 13:00:00", Some("garden"), 50.0),
        ])
    }

    #[test]
    fn test_filter_keeps_only_rows_in_inclusive_range() {
        let data = dataset();
        let range = DateRange::new(date("2024-01-02"), date("2024-01-04")).unwrap();
        let view = apply(&data, &FilterParams::new(range));

        assert_eq!(view.len(), 3);
        for row in view.rows() {
            assert!(range.contains(row.order_date));
        }
    }

    #[test]
    fn test_empty_selection_equals_all_categories_selected() {
        let data = dataset();
        // Jan 1-3 has no category-less rows, so the equivalence is exact.
        let range = DateRange::new(date("2024-01-01"), date("2024-01-03")).unwrap();

        let unrestricted = apply(&data, &FilterParams::new(range));
        let all_known = apply(
            &data,
            &FilterParams::new(range).with_categories(["toys", "books"]),
        );

        let unrestricted_ids: Vec<&str> = unrestricted
            .rows()
            .iter()
            .map(|r| r.order_id.as_str())
            .collect();
        let all_known_ids: Vec<&str> =
            all_known.rows().iter().map(|r| r.order_id.as_str()).collect();
        assert_eq!(unrestricted_ids, all_known_ids);
    }

    #[test]
    fn test_category_selection_excludes_other_rows() {
        let data = dataset();
        let range = DateRange::new(date("2024-01-01"), date("2024-02-28")).unwrap();
        let view = apply(&data, &FilterParams::new(range).with_categories(["toys"]));

        let ids: Vec<&str> = view.rows().iter().map(|r| r.order_id.as_str()).collect();
        assert_eq!(ids, ["a", "c"]);
    }

    #[test]
    fn test_category_selection_drops_uncategorized_rows() {
        let data = dataset();
        let range = DateRange::new(date("2024-01-04"), date("2024-01-04")).unwrap();

        // Row "d" has no category: it passes a pure date filter but never
        // matches an active selection.
        let unrestricted = apply(&data, &FilterParams::new(range));
        assert_eq!(unrestricted.len(), 1);

        let selected = apply(&data, &FilterParams::new(range).with_categories(["toys"]));
        assert!(selected.is_empty());
    }

    #[test]
    fn test_filter_does_not_mutate_dataset() {
        let data = dataset();
        let range = DateRange::single(date("2024-01-01"));
        let before = data.records().len();
        let view = apply(&data, &FilterParams::new(range));

        assert_eq!(view.len(), 1);
        assert_eq!(data.records().len(), before);
    }

    #[test]
    fn test_no_matching_rows_yields_empty_view() {
        let data = dataset();
        let range = DateRange::new(date("2025-01-01"), date("2025-12-31")).unwrap();
        let view = apply(&data, &FilterParams::new(range));
        assert!(view.is_empty());
    }

    #[test]
    fn test_category_options_follow_date_window() {
        let data = dataset();

        let january = DateRange::new(date("2024-01-01"), date("2024-01-31")).unwrap();
        assert_eq!(category_options(&data, &january), ["books", "toys"]);

        let full = DateRange::new(date("2024-01-01"), date("2024-02-28")).unwrap();
        assert_eq!(category_options(&data, &full), ["books", "garden", "toys"]);
    }

    #[test]
    fn test_category_options_exclude_missing_categories() {
        let data = dataset();
        let range = DateRange::single(date("2024-01-04"));
        assert!(category_options(&data, &range).is_empty());
    }

    #[test]
    fn test_default_selection_takes_first_five_sorted() {
        let options: Vec<String> = ["auto", "baby", "books", "garden", "pets", "toys"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let selected = default_selection(&options);
        assert_eq!(selected.len(), 5);
        assert!(selected.contains("auto"));
        assert!(selected.contains("pets"));
        assert!(!selected.contains("toys"));
    }
}
