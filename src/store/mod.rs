//! Entry store collaborator.
//!
//! The lifecycle manager needs exactly three operations: insert a new open
//! entry, close an entry by id, and list a user's entries newest first.
//! Everything else (schema, ordering, ids) is the store's business, which
//! keeps the tracker testable against any implementation.

pub mod sqlite;

use crate::errors::AppResult;
use crate::models::entry::TimeEntry;
use chrono::{NaiveDate, NaiveTime};

pub trait EntryStore {
    /// Insert a new open entry and return the id assigned by the store.
    fn insert_entry(
        &mut self,
        user_id: &str,
        date: NaiveDate,
        clock_in: NaiveTime,
    ) -> AppResult<i64>;

    /// Close an entry: set `clock_out` and `hours` together, by id.
    fn update_entry(&mut self, id: i64, clock_out: NaiveTime, hours: f64) -> AppResult<()>;

    /// All entries for a user, ordered by date descending (and clock-in
    /// descending within a date).
    fn list_entries(&mut self, user_id: &str) -> AppResult<Vec<TimeEntry>>;
}
