#[cfg(test)]
mod tests {
    use std::path::PathBuf;
    use telebill::db::calls::Call;
    use telebill::db::clients::Client;
    use telebill::db::exchange::Exchange;
    use telebill::db::tariffs::Tariff;
    use telebill::libs::error::StoreError;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct BackupTestContext {
        temp_dir: TempDir,
    }

    impl TestContext for BackupTestContext {
        fn setup() -> Self {
            BackupTestContext {
                temp_dir: tempfile::tempdir().unwrap(),
            }
        }
    }

    impl BackupTestContext {
        fn db_path(&self) -> PathBuf {
            self.temp_dir.path().join("billing.db")
        }

        fn backup_path(&self) -> PathBuf {
            self.temp_dir.path().join("billing-backup.db")
        }
    }

    #[test_context(BackupTestContext)]
    #[test]
    fn test_backup_restore_round_trip(ctx: &mut BackupTestContext) {
        let mut exchange = Exchange::open(ctx.db_path()).unwrap();
        exchange.add_tariff(Tariff::new("Moscow", 2.50, 0.50)).unwrap();
        exchange.add_client(Client::new("Ivanov", "+79001234567", 100.0)).unwrap();
        exchange.add_call(Call::new("Ivanov", "Minsk", 10, 25.0)).unwrap();

        let snapshot: Vec<Call> = exchange.calls().to_vec();
        exchange.backup(&ctx.backup_path()).unwrap();

        // Diverge from the snapshot, then restore it.
        exchange.add_call(Call::new("Ivanov", "Moscow", 2, 5.5)).unwrap();
        exchange.remove_tariff("Moscow").unwrap();
        assert_eq!(exchange.calls().len(), 2);

        exchange.restore(&ctx.backup_path()).unwrap();
        assert!(exchange.is_connected());
        assert_eq!(exchange.calls(), snapshot.as_slice());
        assert_eq!(exchange.tariffs().len(), 1);
        assert_eq!(exchange.total_revenue(), 25.0);

        // The restored state is what a fresh open sees too.
        drop(exchange);
        let reopened = Exchange::open(ctx.db_path()).unwrap();
        assert_eq!(reopened.calls(), snapshot.as_slice());
    }

    #[test_context(BackupTestContext)]
    #[test]
    fn test_backup_overwrites_existing_file(ctx: &mut BackupTestContext) {
        let mut exchange = Exchange::open(ctx.db_path()).unwrap();
        exchange.add_client(Client::new("Ivanov", "+79001234567", 100.0)).unwrap();

        std::fs::write(ctx.backup_path(), b"stale bytes").unwrap();
        let bytes = exchange.backup(&ctx.backup_path()).unwrap();
        assert!(bytes > 11, "backup should be a full store file, not the stale content");

        // The overwritten file is a valid store.
        drop(exchange);
        let mut restored = Exchange::open(ctx.db_path()).unwrap();
        restored.restore(&ctx.backup_path()).unwrap();
        assert_eq!(restored.clients().len(), 1);
    }

    #[test_context(BackupTestContext)]
    #[test]
    fn test_restore_from_missing_source_fails_cleanly(ctx: &mut BackupTestContext) {
        let mut exchange = Exchange::open(ctx.db_path()).unwrap();
        exchange.add_client(Client::new("Ivanov", "+79001234567", 100.0)).unwrap();

        let err = exchange.restore(&ctx.temp_dir.path().join("nope.db")).unwrap_err();
        assert!(matches!(err, StoreError::Restore(_)));

        // Nothing was torn down: same connection, same data, still writable.
        assert!(exchange.is_connected());
        assert_eq!(exchange.clients().len(), 1);
        exchange.add_client(Client::new("Petrov", "+79007654321", 50.0)).unwrap();
        assert_eq!(exchange.clients().len(), 2);
    }

    #[test_context(BackupTestContext)]
    #[test]
    fn test_restore_into_empty_store(ctx: &mut BackupTestContext) {
        let mut exchange = Exchange::open(ctx.db_path()).unwrap();
        exchange.add_tariff(Tariff::new("Minsk", 1.80, 0.20)).unwrap();
        exchange.backup(&ctx.backup_path()).unwrap();
        exchange.clear_all().unwrap();
        assert!(exchange.tariffs().is_empty());

        exchange.restore(&ctx.backup_path()).unwrap();
        assert_eq!(exchange.tariffs().len(), 1);
        assert_eq!(exchange.tariffs()[0].city, "Minsk");
    }
}
