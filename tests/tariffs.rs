#[cfg(test)]
mod tests {
    use std::path::PathBuf;
    use telebill::db::exchange::Exchange;
    use telebill::db::tariffs::Tariff;
    use telebill::libs::error::StoreError;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct TariffTestContext {
        temp_dir: TempDir,
    }

    impl TestContext for TariffTestContext {
        fn setup() -> Self {
            TariffTestContext {
                temp_dir: tempfile::tempdir().unwrap(),
            }
        }
    }

    impl TariffTestContext {
        fn db_path(&self) -> PathBuf {
            self.temp_dir.path().join("billing.db")
        }
    }

    #[test_context(TariffTestContext)]
    #[test]
    fn test_tariff_crud(ctx: &mut TariffTestContext) {
        let mut exchange = Exchange::open(ctx.db_path()).unwrap();
        assert!(exchange.tariffs().is_empty());

        exchange.add_tariff(Tariff::new("Moscow", 2.50, 0.50)).unwrap();
        exchange.add_tariff(Tariff::new("Minsk", 1.80, 0.20)).unwrap();
        assert_eq!(exchange.tariffs().len(), 2);
        assert_eq!(exchange.find_tariff("Moscow").unwrap().price_per_minute, 2.50);

        // Duplicate city fails cleanly and changes nothing.
        let err = exchange.add_tariff(Tariff::new("Moscow", 9.99, 1.0)).unwrap_err();
        assert!(matches!(err, StoreError::Duplicate { entity: "tariff", .. }));
        assert_eq!(exchange.tariffs().len(), 2);
        assert_eq!(exchange.find_tariff("Moscow").unwrap().price_per_minute, 2.50);

        exchange.remove_tariff("Moscow").unwrap();
        assert_eq!(exchange.tariffs().len(), 1);
        assert!(exchange.find_tariff("Moscow").is_none());

        let err = exchange.remove_tariff("Moscow").unwrap_err();
        assert!(matches!(err, StoreError::NotFound { .. }));
    }

    #[test_context(TariffTestContext)]
    #[test]
    fn test_tariff_update_replaces_under_key(ctx: &mut TariffTestContext) {
        let mut exchange = Exchange::open(ctx.db_path()).unwrap();
        exchange.add_tariff(Tariff::new("Moscow", 2.50, 0.50)).unwrap();
        exchange.add_tariff(Tariff::new("Minsk", 1.80, 0.20)).unwrap();

        // Same key, new values; position in the cache is preserved.
        exchange.update_tariff("Moscow", Tariff::new("Moscow", 3.00, 0.75)).unwrap();
        assert_eq!(exchange.tariffs()[0].price_per_minute, 3.00);

        // Key change: the old key is gone, the new one is live.
        exchange.update_tariff("Moscow", Tariff::new("Kazan", 2.10, 0.30)).unwrap();
        assert!(exchange.find_tariff("Moscow").is_none());
        assert_eq!(exchange.find_tariff("Kazan").unwrap().connection_fee, 0.30);

        let err = exchange.update_tariff("Moscow", Tariff::new("Tver", 1.0, 0.1)).unwrap_err();
        assert!(matches!(err, StoreError::NotFound { .. }));
    }

    #[test_context(TariffTestContext)]
    #[test]
    fn test_tariff_update_to_taken_key_rolls_back(ctx: &mut TariffTestContext) {
        let mut exchange = Exchange::open(ctx.db_path()).unwrap();
        exchange.add_tariff(Tariff::new("Moscow", 2.50, 0.50)).unwrap();
        exchange.add_tariff(Tariff::new("Minsk", 1.80, 0.20)).unwrap();

        let err = exchange.update_tariff("Moscow", Tariff::new("Minsk", 9.0, 9.0)).unwrap_err();
        assert!(matches!(err, StoreError::Duplicate { .. }));

        // The delete half of the replace must have rolled back, in the
        // store as well as the cache.
        assert_eq!(exchange.find_tariff("Moscow").unwrap().price_per_minute, 2.50);
        drop(exchange);
        let reopened = Exchange::open(ctx.db_path()).unwrap();
        assert_eq!(reopened.find_tariff("Moscow").unwrap().price_per_minute, 2.50);
        assert_eq!(reopened.find_tariff("Minsk").unwrap().price_per_minute, 1.80);
    }

    #[test_context(TariffTestContext)]
    #[test]
    fn test_tariff_sort_by_price(ctx: &mut TariffTestContext) {
        let mut exchange = Exchange::open(ctx.db_path()).unwrap();
        exchange.add_tariff(Tariff::new("Moscow", 2.50, 0.50)).unwrap();
        exchange.add_tariff(Tariff::new("Minsk", 1.80, 0.20)).unwrap();
        exchange.add_tariff(Tariff::new("Saint Petersburg", 2.30, 0.50)).unwrap();

        exchange.sort_tariffs_by_price(true);
        let prices: Vec<f64> = exchange.tariffs().iter().map(|t| t.price_per_minute).collect();
        assert!(prices.windows(2).all(|w| w[0] <= w[1]));

        exchange.sort_tariffs_by_price(false);
        let prices: Vec<f64> = exchange.tariffs().iter().map(|t| t.price_per_minute).collect();
        assert!(prices.windows(2).all(|w| w[0] >= w[1]));

        // Sorting is never persisted; a fresh load is back in insertion order.
        drop(exchange);
        let reopened = Exchange::open(ctx.db_path()).unwrap();
        let cities: Vec<&str> = reopened.tariffs().iter().map(|t| t.city.as_str()).collect();
        assert_eq!(cities, ["Moscow", "Minsk", "Saint Petersburg"]);
    }
}
