#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::PathBuf;

    use vitrine::dataset::{self, LoadError};

    const HEADER: &str = "order_id,order_item_id,product_id,product_category_name,customer_id,customer_city,order_purchase_timestamp,price\n";

    fn write_fixture(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!(
            "vitrine_loader_{}_{}.csv",
            std::process::id(),
            name
        ));
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_load_parses_rows_and_derives_dates() {
        let path = write_fixture(
            "ok",
            &format!(
                "{HEADER}\
                 o1,1,p1,toys,c1,sao paulo,2024-01-01 10:56:33,10.5\n\
                 o1,2,p2,books,c1,sao paulo,2024-01-01 10:56:33,5.0\n\
                 o2,1,p1,toys,c2,rio,2024-01-02 08:00:00,20.0\n"
            ),
        );
        let dataset = dataset::load(&path).unwrap();
        fs::remove_file(&path).ok();

        assert_eq!(dataset.len(), 3);
        let first = &dataset.records()[0];
        assert_eq!(first.order_id, "o1");
        assert_eq!(first.order_item_id, 1);
        assert_eq!(first.product_category.as_deref(), Some("toys"));
        assert_eq!(first.order_date.to_string(), "2024-01-01");
        assert_eq!(first.purchased_at.time().to_string(), "10:56:33");
        assert_eq!(first.price, 10.5);

        let (min, max) = dataset.date_bounds().unwrap();
        assert_eq!(min.to_string(), "2024-01-01");
        assert_eq!(max.to_string(), "2024-01-02");
    }

    #[test]
    fn test_load_empty_category_decodes_to_none() {
        let path = write_fixture(
            "nullcat",
            &format!("{HEADER}o1,1,p1,,c1,recife,2024-01-01 00:00:00,9.9\n"),
        );
        let dataset = dataset::load(&path).unwrap();
        fs::remove_file(&path).ok();

        assert_eq!(dataset.records()[0].product_category, None);
    }

    #[test]
    fn test_load_missing_file_is_fatal() {
        let result = dataset::load("/nonexistent/vitrine/all_data.csv");
        assert!(matches!(result, Err(LoadError::Io(_))));
    }

    #[test]
    fn test_load_missing_column_is_fatal() {
        let path = write_fixture(
            "nocol",
            "order_id,order_item_id,product_id,product_category_name,customer_id,customer_city,order_purchase_timestamp\n\
             o1,1,p1,toys,c1,rio,2024-01-01 00:00:00\n",
        );
        let result = dataset::load(&path);
        fs::remove_file(&path).ok();

        assert!(matches!(result, Err(LoadError::MissingColumn("price"))));
    }

    #[test]
    fn test_load_bad_timestamp_is_fatal() {
        let path = write_fixture(
            "badts",
            &format!("{HEADER}o1,1,p1,toys,c1,rio,01/02/2024,10.0\n"),
        );
        let result = dataset::load(&path);
        fs::remove_file(&path).ok();

        match result {
            Err(LoadError::BadTimestamp { row, value }) => {
                assert_eq!(row, 1);
                assert_eq!(value, "01/02/2024");
            }
            other => panic!("expected BadTimestamp, got {:?}", other),
        }
    }

    #[test]
    fn test_load_bad_price_is_fatal() {
        let path = write_fixture(
            "badprice",
            &format!("{HEADER}o1,1,p1,toys,c1,rio,2024-01-01 00:00:00,not-a-price\n"),
        );
        let result = dataset::load(&path);
        fs::remove_file(&path).ok();

        assert!(matches!(result, Err(LoadError::Csv(_))));
    }

    #[test]
    fn test_empty_dataset_has_no_bounds() {
        let path = write_fixture("empty", HEADER);
        let dataset = dataset::load(&path).unwrap();
        fs::remove_file(&path).ok();

        assert!(dataset.is_empty());
        assert_eq!(dataset.date_bounds(), None);
    }
}
