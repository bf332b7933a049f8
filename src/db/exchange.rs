//! Cache-backed facade over the billing store.
//!
//! `Exchange` is the single entry point the presentation layer talks to. It
//! owns the connection handle and one insertion-ordered in-memory collection
//! per entity. Every successful write updates both the store and the cache,
//! so reads never hit the store; the caches are rebuilt wholesale on open
//! and after a restore.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use telebill::db::exchange::Exchange;
//! use telebill::db::tariffs::Tariff;
//!
//! let mut exchange = Exchange::open("billing.db")?;
//! exchange.add_tariff(Tariff::new("Moscow", 2.50, 0.50))?;
//! for tariff in exchange.tariffs() {
//!     println!("{}: {}/min", tariff.city, tariff.price_per_minute);
//! }
//! # Ok::<(), telebill::libs::error::StoreError>(())
//! ```

use crate::db::calls::{self, Call};
use crate::db::clients::{self, Client};
use crate::db::db::Db;
use crate::db::tariffs::{self, Tariff};
use crate::db::vip_clients::{self, VipClient};
use crate::libs::error::StoreError;
use rusqlite::Connection;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

type Result<T> = std::result::Result<T, StoreError>;

/// The record-keeping core: connection lifecycle, per-entity caches, CRUD,
/// referential checks, statistics, sorting and backup/restore.
///
/// Constructed with [`Exchange::open`] and passed explicitly to whatever
/// needs it. `db` is `None` only while Disconnected (a failed restore);
/// every store operation in that state fails with
/// [`StoreError::Disconnected`].
pub struct Exchange {
    db: Option<Db>,
    path: PathBuf,
    tariffs: Vec<Tariff>,
    clients: Vec<Client>,
    vip_clients: Vec<VipClient>,
    calls: Vec<Call>,
}

impl Exchange {
    /// Opens the backing file, ensures the schema and loads all four
    /// collections into memory.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let db = Db::open(&path).map_err(|err| StoreError::Connection {
            path: path.clone(),
            source: err,
        })?;

        let mut exchange = Exchange {
            db: Some(db),
            path,
            tariffs: Vec::new(),
            clients: Vec::new(),
            vip_clients: Vec::new(),
            calls: Vec::new(),
        };
        exchange.reload()?;
        Ok(exchange)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn is_connected(&self) -> bool {
        self.db.is_some()
    }

    fn conn(&self) -> Result<&Connection> {
        self.db.as_ref().map(|db| &db.conn).ok_or(StoreError::Disconnected)
    }

    /// Rebuilds all four caches from the store, replacing whatever order
    /// in-memory sorting produced with plain insertion order.
    fn reload(&mut self) -> Result<()> {
        let conn = self.conn()?;
        let tariffs = tariffs::load(conn)?;
        let clients = clients::load(conn)?;
        let vip_clients = vip_clients::load(conn)?;
        let calls = calls::load(conn)?;

        self.tariffs = tariffs;
        self.clients = clients;
        self.vip_clients = vip_clients;
        self.calls = calls;
        debug!(
            tariffs = self.tariffs.len(),
            clients = self.clients.len(),
            vip_clients = self.vip_clients.len(),
            calls = self.calls.len(),
            "caches reloaded"
        );
        Ok(())
    }

    fn clear_caches(&mut self) {
        self.tariffs.clear();
        self.clients.clear();
        self.vip_clients.clear();
        self.calls.clear();
    }

    // ----- Tariffs -----

    pub fn tariffs(&self) -> &[Tariff] {
        &self.tariffs
    }

    pub fn find_tariff(&self, city: &str) -> Option<&Tariff> {
        self.tariffs.iter().find(|t| t.city == city)
    }

    pub fn add_tariff(&mut self, tariff: Tariff) -> Result<()> {
        tariffs::insert(self.conn()?, &tariff).map_err(|err| StoreError::on_insert(err, "tariff", &tariff.city))?;
        self.tariffs.push(tariff);
        Ok(())
    }

    pub fn remove_tariff(&mut self, city: &str) -> Result<()> {
        let affected = tariffs::delete(self.conn()?, city)?;
        if affected == 0 {
            return Err(StoreError::not_found("tariff", city));
        }
        self.tariffs.retain(|t| t.city != city);
        Ok(())
    }

    /// Replaces the tariff stored under `city`, possibly under a new key.
    /// Delete and insert run in one transaction, so a failed insert (for
    /// example a duplicate target city) leaves the old row in place.
    pub fn update_tariff(&mut self, city: &str, tariff: Tariff) -> Result<()> {
        let pos = self
            .tariffs
            .iter()
            .position(|t| t.city == city)
            .ok_or_else(|| StoreError::not_found("tariff", city))?;

        let db = self.db.as_mut().ok_or(StoreError::Disconnected)?;
        let tx = db.conn.transaction()?;
        tariffs::delete(&tx, city)?;
        tariffs::insert(&tx, &tariff).map_err(|err| StoreError::on_insert(err, "tariff", &tariff.city))?;
        tx.commit()?;

        self.tariffs[pos] = tariff;
        Ok(())
    }

    // ----- Clients -----

    pub fn clients(&self) -> &[Client] {
        &self.clients
    }

    pub fn add_client(&mut self, client: Client) -> Result<()> {
        clients::insert(self.conn()?, &client).map_err(|err| StoreError::on_insert(err, "client", &client.name))?;
        self.clients.push(client);
        Ok(())
    }

    pub fn remove_client(&mut self, name: &str) -> Result<()> {
        let affected = clients::delete(self.conn()?, name)?;
        if affected == 0 {
            return Err(StoreError::not_found("client", name));
        }
        self.clients.retain(|c| c.name != name);
        Ok(())
    }

    pub fn update_client(&mut self, name: &str, client: Client) -> Result<()> {
        let pos = self
            .clients
            .iter()
            .position(|c| c.name == name)
            .ok_or_else(|| StoreError::not_found("client", name))?;

        let db = self.db.as_mut().ok_or(StoreError::Disconnected)?;
        let tx = db.conn.transaction()?;
        clients::delete(&tx, name)?;
        clients::insert(&tx, &client).map_err(|err| StoreError::on_insert(err, "client", &client.name))?;
        tx.commit()?;

        self.clients[pos] = client;
        Ok(())
    }

    // ----- VIP clients -----

    pub fn vip_clients(&self) -> &[VipClient] {
        &self.vip_clients
    }

    pub fn add_vip_client(&mut self, client: VipClient) -> Result<()> {
        vip_clients::insert(self.conn()?, &client).map_err(|err| StoreError::on_insert(err, "VIP client", &client.name))?;
        self.vip_clients.push(client);
        Ok(())
    }

    pub fn remove_vip_client(&mut self, name: &str) -> Result<()> {
        let affected = vip_clients::delete(self.conn()?, name)?;
        if affected == 0 {
            return Err(StoreError::not_found("VIP client", name));
        }
        self.vip_clients.retain(|c| c.name != name);
        Ok(())
    }

    pub fn update_vip_client(&mut self, name: &str, client: VipClient) -> Result<()> {
        let pos = self
            .vip_clients
            .iter()
            .position(|c| c.name == name)
            .ok_or_else(|| StoreError::not_found("VIP client", name))?;

        let db = self.db.as_mut().ok_or(StoreError::Disconnected)?;
        let tx = db.conn.transaction()?;
        vip_clients::delete(&tx, name)?;
        vip_clients::insert(&tx, &client).map_err(|err| StoreError::on_insert(err, "VIP client", &client.name))?;
        tx.commit()?;

        self.vip_clients[pos] = client;
        Ok(())
    }

    // ----- Calls -----

    pub fn calls(&self) -> &[Call] {
        &self.calls
    }

    /// True when `name` matches a client or VIP client, exact and
    /// case-sensitive. The namespaces are per-table in the schema, so the
    /// same name may legitimately exist in both; such a name is treated as
    /// one logical caller here and in the statistics scans.
    pub fn caller_exists(&self, name: &str) -> bool {
        self.clients.iter().any(|c| c.name == name) || self.vip_clients.iter().any(|v| v.name == name)
    }

    /// Records a call after the referential check passes. Returns the id
    /// the store assigned.
    pub fn add_call(&mut self, mut call: Call) -> Result<i64> {
        if !self.caller_exists(&call.caller_name) {
            return Err(StoreError::UnknownCaller(call.caller_name));
        }

        let id = calls::insert(self.conn()?, &call)?;
        call.id = Some(id);
        self.calls.push(call);
        Ok(id)
    }

    pub fn remove_call(&mut self, id: i64) -> Result<()> {
        let affected = calls::delete(self.conn()?, id)?;
        if affected == 0 {
            return Err(StoreError::not_found("call", id));
        }
        self.calls.retain(|c| c.id != Some(id));
        Ok(())
    }

    // ----- Statistics -----

    /// Sum of cost over this caller's calls. Pure scan of the call cache.
    pub fn total_cost(&self, client_name: &str) -> f64 {
        self.calls.iter().filter(|c| c.caller_name == client_name).map(|c| c.cost).sum()
    }

    pub fn call_count(&self, client_name: &str) -> usize {
        self.calls.iter().filter(|c| c.caller_name == client_name).count()
    }

    pub fn total_revenue(&self) -> f64 {
        self.calls.iter().map(|c| c.cost).sum()
    }

    // ----- Sorting -----
    //
    // In-memory only; the store keeps insertion order and a reload
    // restores it.

    pub fn sort_tariffs_by_price(&mut self, ascending: bool) {
        self.tariffs.sort_unstable_by(|a, b| a.price_per_minute.total_cmp(&b.price_per_minute));
        if !ascending {
            self.tariffs.reverse();
        }
    }

    pub fn sort_clients_by_name(&mut self, ascending: bool) {
        self.clients.sort_unstable_by(|a, b| a.name.cmp(&b.name));
        if !ascending {
            self.clients.reverse();
        }
    }

    pub fn sort_vip_clients_by_discount(&mut self, ascending: bool) {
        self.vip_clients.sort_unstable_by(|a, b| a.discount_percent.total_cmp(&b.discount_percent));
        if !ascending {
            self.vip_clients.reverse();
        }
    }

    pub fn sort_calls_by_duration(&mut self, ascending: bool) {
        self.calls.sort_unstable_by(|a, b| a.duration_minutes.cmp(&b.duration_minutes));
        if !ascending {
            self.calls.reverse();
        }
    }

    // ----- Backup / restore -----

    /// Copies the live backing file to `destination`, replacing any file
    /// already there. The connection stays open for the duration; the copy
    /// can catch a mid-write state, which the single-writer usage accepts.
    pub fn backup(&self, destination: &Path) -> Result<u64> {
        let db = self.db.as_ref().ok_or(StoreError::Disconnected)?;
        if destination.exists() {
            fs::remove_file(destination).map_err(StoreError::Backup)?;
        }
        let bytes = fs::copy(&db.path, destination).map_err(StoreError::Backup)?;
        info!(destination = %destination.display(), bytes, "backup written");
        Ok(bytes)
    }

    /// Replaces the backing file with `source` and reloads the caches.
    ///
    /// The candidate is staged next to the backing file first, then swapped
    /// in with a rename after the connection is closed, so there is no
    /// window with the backing file missing. A failed rename reopens the
    /// original file before the error is reported.
    pub fn restore(&mut self, source: &Path) -> Result<()> {
        if self.db.is_none() {
            return Err(StoreError::Disconnected);
        }

        let staged = self.path.with_extension("restore");
        fs::copy(source, &staged).map_err(StoreError::Restore)?;

        // Teardown: release the file before swapping it out.
        self.db = None;

        if let Err(err) = fs::rename(&staged, &self.path) {
            warn!(source = %source.display(), "restore swap failed, reopening original store");
            let _ = fs::remove_file(&staged);
            self.reopen()?;
            return Err(StoreError::Restore(err));
        }

        self.reopen()?;
        self.reload()?;
        info!(source = %source.display(), "store restored");
        Ok(())
    }

    fn reopen(&mut self) -> Result<()> {
        match Db::open(&self.path) {
            Ok(db) => {
                self.db = Some(db);
                Ok(())
            }
            Err(err) => {
                // Disconnected from here on; reads must see an empty cache.
                self.clear_caches();
                Err(StoreError::Connection {
                    path: self.path.clone(),
                    source: err,
                })
            }
        }
    }

    // ----- Bulk operations -----

    /// Empties all four tables, calls first since they reference client
    /// identity. The deletes are independent statements; a failure partway
    /// leaves the already-cleared tables cleared, with each cache emptied
    /// only once its table committed.
    pub fn clear_all(&mut self) -> Result<()> {
        self.conn()?.execute(calls::CLEAR_CALLS, [])?;
        self.calls.clear();
        self.conn()?.execute(vip_clients::CLEAR_VIP_CLIENTS, [])?;
        self.vip_clients.clear();
        self.conn()?.execute(clients::CLEAR_CLIENTS, [])?;
        self.clients.clear();
        self.conn()?.execute(tariffs::CLEAR_TARIFFS, [])?;
        self.tariffs.clear();
        info!("all tables cleared");
        Ok(())
    }

    /// Wipes the store and seeds it with a small demo data set.
    pub fn seed_demo(&mut self) -> Result<()> {
        self.clear_all()?;

        self.add_tariff(Tariff::new("Moscow", 2.50, 0.50))?;
        self.add_tariff(Tariff::new("Saint Petersburg", 2.30, 0.50))?;
        self.add_tariff(Tariff::new("Minsk", 1.80, 0.20))?;

        self.add_client(Client::new("Ivanov", "+79001234567", 100.0))?;
        self.add_client(Client::new("Petrov", "+79007654321", 50.0))?;

        self.add_vip_client(VipClient::new("Sidorov", "+79009876543", 500.0, 15.0, "Anna"))?;
        Ok(())
    }
}
