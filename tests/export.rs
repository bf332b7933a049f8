#[cfg(test)]
mod tests {
    use std::path::PathBuf;
    use telebill::db::calls::Call;
    use telebill::db::clients::Client;
    use telebill::db::exchange::Exchange;
    use telebill::db::vip_clients::VipClient;
    use telebill::libs::export::{ExportData, Exporter};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct ExportTestContext {
        temp_dir: TempDir,
    }

    impl TestContext for ExportTestContext {
        fn setup() -> Self {
            ExportTestContext {
                temp_dir: tempfile::tempdir().unwrap(),
            }
        }
    }

    impl ExportTestContext {
        fn db_path(&self) -> PathBuf {
            self.temp_dir.path().join("billing.db")
        }

        fn exchange_with_records(&self) -> Exchange {
            let mut exchange = Exchange::open(self.db_path()).unwrap();
            exchange.add_client(Client::new("Ivanov", "+79001234567", 100.0)).unwrap();
            exchange
                .add_vip_client(VipClient::new("Sidorov", "+79009876543", 500.0, 15.0, "Anna"))
                .unwrap();
            exchange.add_call(Call::new("Ivanov", "Minsk", 10, 25.0)).unwrap();
            exchange.add_call(Call::new("Sidorov", "Moscow", 2, 4.5)).unwrap();
            exchange
        }
    }

    #[test_context(ExportTestContext)]
    #[test]
    fn test_export_call_ledger(ctx: &mut ExportTestContext) {
        let exchange = ctx.exchange_with_records();
        let out = ctx.temp_dir.path().join("calls.csv");

        let written = Exporter::new(Some(out.clone())).export(&exchange, ExportData::Calls).unwrap();
        assert_eq!(written, out);

        let content = std::fs::read_to_string(&out).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        // Header plus one row per call.
        assert_eq!(lines.len(), 3);
        assert!(lines[0].contains("caller_name"));
        assert!(lines[1].contains("Ivanov"));
        assert!(lines[2].contains("Sidorov"));
    }

    #[test_context(ExportTestContext)]
    #[test]
    fn test_export_summary(ctx: &mut ExportTestContext) {
        let exchange = ctx.exchange_with_records();
        let out = ctx.temp_dir.path().join("summary.csv");

        Exporter::new(Some(out.clone())).export(&exchange, ExportData::Summary).unwrap();

        let content = std::fs::read_to_string(&out).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        // Header plus one row per client and VIP client.
        assert_eq!(lines.len(), 3);
        assert!(lines[1].starts_with("Ivanov,false,1,25"));
        assert!(lines[2].starts_with("Sidorov,true,1,4.5"));
    }
}
