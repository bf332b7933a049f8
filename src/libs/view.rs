use crate::db::calls::Call;
use crate::db::clients::Client;
use crate::db::tariffs::Tariff;
use crate::db::vip_clients::VipClient;
use prettytable::{row, Table};

pub struct View {}

impl View {
    pub fn tariffs(tariffs: &[Tariff]) {
        let mut table = Table::new();

        table.add_row(row!["CITY", "PRICE/MIN", "CONNECTION FEE"]);
        for tariff in tariffs {
            table.add_row(row![
                tariff.city,
                format!("{:.2}", tariff.price_per_minute),
                format!("{:.2}", tariff.connection_fee)
            ]);
        }
        table.printstd();
    }

    pub fn clients(clients: &[Client]) {
        let mut table = Table::new();

        table.add_row(row!["NAME", "PHONE", "BALANCE"]);
        for client in clients {
            table.add_row(row![client.name, client.phone, format!("{:.2}", client.balance)]);
        }
        table.printstd();
    }

    pub fn vip_clients(clients: &[VipClient]) {
        let mut table = Table::new();

        table.add_row(row!["NAME", "PHONE", "BALANCE", "DISCOUNT %", "MANAGER"]);
        for client in clients {
            table.add_row(row![
                client.name,
                client.phone,
                format!("{:.2}", client.balance),
                format!("{:.1}", client.discount_percent),
                client.personal_manager
            ]);
        }
        table.printstd();
    }

    pub fn calls(calls: &[Call]) {
        let mut table = Table::new();

        table.add_row(row!["ID", "CALLER", "DESTINATION", "MINUTES", "COST"]);
        for call in calls {
            table.add_row(row![
                call.id.unwrap_or(0),
                call.caller_name,
                call.destination,
                call.duration_minutes,
                format!("{:.2}", call.cost)
            ]);
        }
        table.printstd();
    }

    pub fn client_stats(name: &str, call_count: usize, total_cost: f64) {
        let mut table = Table::new();

        table.add_row(row!["CLIENT", "CALLS", "TOTAL COST"]);
        table.add_row(row![name, call_count, format!("{:.2}", total_cost)]);
        table.printstd();
    }

    pub fn revenue(call_count: usize, total_revenue: f64) {
        let mut table = Table::new();

        table.add_row(row!["CALLS", "TOTAL REVENUE"]);
        table.add_row(row![call_count, format!("{:.2}", total_revenue)]);
        table.printstd();
    }
}
