//! Register handle: the explicit context every request is handled against.
//!
//! One handle owns one open register file. Every mutation commits together
//! with its row in the internal `log` table, or not at all; storage errors are
//! returned to the caller untouched.

use crate::core::messages::{DailyListing, Notification, Request};
use crate::core::purge;
use crate::core::resolver::{self, FilterRequest};
use crate::db::initialize::init_db;
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::predicate::{Field, Predicate};
use crate::db::queries;
use crate::errors::AppResult;
use crate::models::{Entry, RegisterType, ReturnStatus};
use chrono::Local;
use rusqlite::Connection;

pub struct Register {
    pool: DbPool,
}

impl Register {
    /// Open (creating if needed) the register file at `path`.
    pub fn open(path: &str) -> AppResult<Self> {
        let pool = DbPool::new(path)?;
        Self::from_pool(pool)
    }

    /// Throw-away register, used by tests and dry runs.
    pub fn in_memory() -> AppResult<Self> {
        Self::from_pool(DbPool::in_memory()?)
    }

    fn from_pool(pool: DbPool) -> AppResult<Self> {
        init_db(&pool.conn)?;
        Ok(Self { pool })
    }

    pub fn conn(&self) -> &Connection {
        &self.pool.conn
    }

    /// Handle one request. Only requests the caller has to react to produce a
    /// notification; adds, single deletes, updates and unsupported searches
    /// return `Ok(None)`.
    pub fn handle(&mut self, request: Request) -> AppResult<Option<Notification>> {
        match request {
            Request::LoadListColleagues(listing) => {
                let docs = self.daily_listing(&listing)?;
                Ok(Some(Notification::LoadedColleagues { docs }))
            }
            Request::LoadListVisitors(listing) => {
                let docs = self.daily_listing(&listing)?;
                Ok(Some(Notification::LoadedVisitors { docs }))
            }
            Request::AddItem { item } => {
                self.add(&item)?;
                Ok(None)
            }
            Request::ClearAll => {
                self.clear()?;
                Ok(Some(Notification::Cleared))
            }
            Request::DeleteItem(r) => {
                self.delete(r.item.id)?;
                Ok(None)
            }
            Request::DeleteOld {
                six_ago_formatted_month,
            } => {
                let count = self.purge_month(&six_ago_formatted_month)?;
                Ok(Some(Notification::DeletedOld { count }))
            }
            Request::UpdateItemReturned { item, note_content } => {
                self.replace(&item.with_status(Some(ReturnStatus::Returned), note_content))?;
                Ok(None)
            }
            Request::UpdateItemNotReturned { item, note_content } => {
                self.replace(&item.with_status(Some(ReturnStatus::NotReturned), note_content))?;
                Ok(None)
            }
            Request::UpdateNote {
                item,
                note_value,
                returned_status,
            } => {
                self.replace(&item.with_status(returned_status, note_value))?;
                Ok(None)
            }
            Request::FindItem(filter) => {
                let found = self.find(&filter)?;
                Ok(found.map(|docs| Notification::Found { docs }))
            }
        }
    }

    /// Entries of one register dated today or yesterday.
    pub fn daily_listing(&self, listing: &DailyListing) -> AppResult<Vec<Entry>> {
        let predicate = Predicate::register(listing.register).any_of(
            Field::Date,
            [listing.today.as_str(), listing.yesterday.as_str()],
        );
        queries::find_by(self.conn(), &predicate)
    }

    /// Every entry of one register.
    pub fn all(&self, register: RegisterType) -> AppResult<Vec<Entry>> {
        queries::find_by(self.conn(), &Predicate::register(register))
    }

    pub fn get(&self, id: i64) -> AppResult<Option<Entry>> {
        queries::find_by_id(self.conn(), id)
    }

    pub fn add(&mut self, entry: &Entry) -> AppResult<()> {
        let tx = self.pool.conn.transaction()?;
        queries::insert_entry(&tx, entry)?;
        ttlog(
            &tx,
            "add",
            &entry.id.to_string(),
            &format!("Signed in {} ({})", entry.full_name(), entry.register),
        )?;
        tx.commit()?;
        Ok(())
    }

    /// Full-record replace of the entry carrying `entry.id`. Returns whether a
    /// row was touched.
    pub fn replace(&mut self, entry: &Entry) -> AppResult<bool> {
        let tx = self.pool.conn.transaction()?;
        let changed = queries::update_by_id(&tx, entry.id, entry)?;
        if changed > 0 {
            let status = entry.returned.map(|r| r.to_db_str()).unwrap_or("-");
            ttlog(
                &tx,
                "update",
                &entry.id.to_string(),
                &format!("{} → {}", entry.full_name(), status),
            )?;
        }
        tx.commit()?;
        Ok(changed > 0)
    }

    /// Delete one entry; absent ids are a no-op. Returns whether a row went away.
    pub fn delete(&mut self, id: i64) -> AppResult<bool> {
        let tx = self.pool.conn.transaction()?;
        let removed = queries::delete_by_id(&tx, id)?;
        if removed > 0 {
            ttlog(&tx, "del", &id.to_string(), "Entry deleted")?;
        }
        tx.commit()?;
        Ok(removed > 0)
    }

    pub fn clear(&mut self) -> AppResult<usize> {
        let tx = self.pool.conn.transaction()?;
        let removed = queries::delete_all(&tx)?;
        ttlog(
            &tx,
            "clear",
            "entries",
            &format!("Register cleared ({removed} entries)"),
        )?;
        tx.commit()?;
        Ok(removed)
    }

    /// Delete every entry whose date contains `month`.
    pub fn purge_month(&mut self, month: &str) -> AppResult<usize> {
        let tx = self.pool.conn.transaction()?;
        let removed = purge::purge_month(&tx, month)?;
        ttlog(
            &tx,
            "purge",
            month,
            &format!("Removed {removed} entries dated {month}"),
        )?;
        tx.commit()?;
        Ok(removed)
    }

    /// Run a search. `Ok(None)` for unsupported combinations, which are also
    /// recorded in the internal log.
    pub fn find(&self, filter: &FilterRequest) -> AppResult<Option<Vec<Entry>>> {
        let found = resolver::resolve(self.conn(), filter)?;
        if found.is_none() {
            ttlog(
                self.conn(),
                "find_unsupported",
                filter.register.to_db_str(),
                &format!(
                    "No filter matched: date='{}' month='{}' first='{}' last='{}' card='{}'",
                    filter.search_date,
                    filter.month,
                    filter.first_name,
                    filter.last_name,
                    filter.card
                ),
            )?;
        }
        Ok(found)
    }

    /// Next entry id: current time in ms, bumped past the highest stored id.
    pub fn next_id(&self) -> AppResult<i64> {
        let now = Local::now().timestamp_millis();
        let next = match queries::max_id(self.conn())? {
            Some(max) if max >= now => max + 1,
            _ => now,
        };
        Ok(next)
    }
}
