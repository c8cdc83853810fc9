//! SQLite-backed entry store.

use crate::errors::{AppError, AppResult};
use crate::models::entry::{DATE_FMT, TIME_FMT, TimeEntry, parse_clock_time, parse_entry_date};
use crate::store::EntryStore;
use chrono::{NaiveDate, NaiveTime};
use rusqlite::{Connection, Row, params};
use std::path::Path;

pub struct SqliteStore {
    pub conn: Connection,
}

impl SqliteStore {
    pub fn open(path: &str) -> AppResult<Self> {
        let conn = Connection::open(Path::new(path))?;
        Ok(Self { conn })
    }

    #[cfg(test)]
    pub fn open_in_memory() -> AppResult<Self> {
        let conn = Connection::open_in_memory()?;
        init_db(&conn)?;
        Ok(Self { conn })
    }
}

/// Create the schema if missing. A single database file holds both the
/// accounts and the time entries.
pub fn init_db(conn: &Connection) -> AppResult<()> {
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS users (
            id TEXT PRIMARY KEY,
            email TEXT NOT NULL UNIQUE,
            password_hash TEXT NOT NULL,
            created_at TEXT NOT NULL
        );
        CREATE TABLE IF NOT EXISTS time_entries (
            id INTEGER PRIMARY KEY,
            user_id TEXT NOT NULL,
            date TEXT NOT NULL,
            clock_in TEXT NOT NULL,
            clock_out TEXT,
            hours REAL
        );
        CREATE INDEX IF NOT EXISTS idx_time_entries_user_date
            ON time_entries (user_id, date);",
    )?;
    Ok(())
}

fn bad_text(err: AppError) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(0, rusqlite::types::Type::Text, Box::new(err))
}

pub fn map_row(row: &Row) -> rusqlite::Result<TimeEntry> {
    let date_str: String = row.get("date")?;
    let date =
        parse_entry_date(&date_str).ok_or_else(|| bad_text(AppError::InvalidDate(date_str)))?;

    let in_str: String = row.get("clock_in")?;
    let clock_in =
        parse_clock_time(&in_str).ok_or_else(|| bad_text(AppError::InvalidTime(in_str)))?;

    let clock_out = match row.get::<_, Option<String>>("clock_out")? {
        Some(s) => {
            Some(parse_clock_time(&s).ok_or_else(|| bad_text(AppError::InvalidTime(s)))?)
        }
        None => None,
    };

    Ok(TimeEntry {
        id: row.get("id")?,
        user_id: row.get("user_id")?,
        date,
        clock_in,
        clock_out,
        hours: row.get("hours")?,
    })
}

impl EntryStore for SqliteStore {
    fn insert_entry(
        &mut self,
        user_id: &str,
        date: NaiveDate,
        clock_in: NaiveTime,
    ) -> AppResult<i64> {
        self.conn
            .execute(
                "INSERT INTO time_entries (user_id, date, clock_in)
                 VALUES (?1, ?2, ?3)",
                params![
                    user_id,
                    date.format(DATE_FMT).to_string(),
                    clock_in.format(TIME_FMT).to_string(),
                ],
            )
            .map_err(|e| AppError::StoreWrite(e.to_string()))?;

        Ok(self.conn.last_insert_rowid())
    }

    fn update_entry(&mut self, id: i64, clock_out: NaiveTime, hours: f64) -> AppResult<()> {
        let changed = self
            .conn
            .execute(
                "UPDATE time_entries SET clock_out = ?1, hours = ?2 WHERE id = ?3",
                params![clock_out.format(TIME_FMT).to_string(), hours, id],
            )
            .map_err(|e| AppError::StoreWrite(e.to_string()))?;

        if changed == 0 {
            return Err(AppError::StoreWrite(format!("no entry with id {}", id)));
        }
        Ok(())
    }

    fn list_entries(&mut self, user_id: &str) -> AppResult<Vec<TimeEntry>> {
        let mut stmt = self
            .conn
            .prepare(
                "SELECT id, user_id, date, clock_in, clock_out, hours
                 FROM time_entries
                 WHERE user_id = ?1
                 ORDER BY date DESC, clock_in DESC",
            )
            .map_err(|e| AppError::StoreRead(e.to_string()))?;

        let rows = stmt
            .query_map([user_id], map_row)
            .map_err(|e| AppError::StoreRead(e.to_string()))?;

        let mut out = Vec::new();
        for r in rows {
            out.push(r.map_err(|e| AppError::StoreRead(e.to_string()))?);
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, DATE_FMT).unwrap()
    }

    fn t(s: &str) -> NaiveTime {
        parse_clock_time(s).unwrap()
    }

    #[test]
    fn insert_creates_an_open_entry() {
        let mut store = SqliteStore::open_in_memory().unwrap();
        let id = store
            .insert_entry("u1", d("2024-01-01"), t("09:00:00"))
            .unwrap();

        let entries = store.list_entries("u1").unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].id, id);
        assert!(entries[0].is_open());
        assert_eq!(entries[0].hours, None);
    }

    #[test]
    fn update_sets_clock_out_and_hours_together() {
        let mut store = SqliteStore::open_in_memory().unwrap();
        let id = store
            .insert_entry("u1", d("2024-01-01"), t("09:00:00"))
            .unwrap();

        store.update_entry(id, t("17:30:00"), 8.5).unwrap();

        let entries = store.list_entries("u1").unwrap();
        assert_eq!(entries[0].clock_out, Some(t("17:30:00")));
        assert_eq!(entries[0].hours, Some(8.5));
        assert!(!entries[0].is_open());
    }

    #[test]
    fn update_of_unknown_id_is_a_store_write_error() {
        let mut store = SqliteStore::open_in_memory().unwrap();
        let err = store.update_entry(99, t("17:00:00"), 8.0).unwrap_err();
        assert!(matches!(err, AppError::StoreWrite(_)));
    }

    #[test]
    fn listing_is_newest_date_first_and_scoped_by_user() {
        let mut store = SqliteStore::open_in_memory().unwrap();
        store
            .insert_entry("u1", d("2024-01-01"), t("09:00:00"))
            .unwrap();
        store
            .insert_entry("u1", d("2024-01-03"), t("08:00:00"))
            .unwrap();
        store
            .insert_entry("u1", d("2024-01-02"), t("10:00:00"))
            .unwrap();
        store
            .insert_entry("someone-else", d("2024-01-04"), t("07:00:00"))
            .unwrap();

        let entries = store.list_entries("u1").unwrap();
        let dates: Vec<String> = entries.iter().map(|e| e.date_str()).collect();
        assert_eq!(dates, vec!["2024-01-03", "2024-01-02", "2024-01-01"]);
    }

    #[test]
    fn same_day_entries_are_ordered_by_clock_in_desc() {
        let mut store = SqliteStore::open_in_memory().unwrap();
        store
            .insert_entry("u1", d("2024-01-01"), t("08:00:00"))
            .unwrap();
        store
            .insert_entry("u1", d("2024-01-01"), t("13:00:00"))
            .unwrap();

        let entries = store.list_entries("u1").unwrap();
        assert_eq!(entries[0].clock_in, t("13:00:00"));
        assert_eq!(entries[1].clock_in, t("08:00:00"));
    }
}
