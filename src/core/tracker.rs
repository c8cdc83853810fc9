//! Time-entry lifecycle manager.
//!
//! Session-scoped controller owning the cached entry list and the derived
//! status. Mutations go through the store and are always followed by a
//! fresh read; there is no optimistic local update, so a rejected write
//! leaves the state exactly as it was.
//!
//! The single-open-entry guard is caller-level only: two concurrent
//! sessions for the same user can both pass it. Known race, inherited from
//! the store contract which enforces nothing.

use crate::core::duration::hours_between;
use crate::errors::{AppError, AppResult};
use crate::models::entry::TimeEntry;
use crate::models::status::TrackingStatus;
use crate::store::EntryStore;
use chrono::NaiveDateTime;

pub struct Tracker<'a, S: EntryStore> {
    store: &'a mut S,
    user_id: String,
    entries: Vec<TimeEntry>,
    active: Option<usize>, // index of the open entry, if any
}

impl<'a, S: EntryStore> Tracker<'a, S> {
    /// Build a tracker for one user and derive the initial state from a
    /// fresh listing.
    pub fn new(store: &'a mut S, user_id: impl Into<String>) -> AppResult<Self> {
        let mut tracker = Self {
            store,
            user_id: user_id.into(),
            entries: Vec::new(),
            active: None,
        };
        tracker.refresh()?;
        Ok(tracker)
    }

    /// Re-derive status from a fresh listing: fetch all entries newest
    /// first and scan for one without a clock-out. Idempotent.
    pub fn refresh(&mut self) -> AppResult<()> {
        let entries = self.store.list_entries(&self.user_id)?;
        self.active = entries.iter().position(|e| e.is_open());
        self.entries = entries;
        Ok(())
    }

    pub fn status(&self) -> TrackingStatus {
        if self.active.is_some() {
            TrackingStatus::ClockedIn
        } else {
            TrackingStatus::Idle
        }
    }

    /// Cached entry list, newest date first.
    pub fn entries(&self) -> &[TimeEntry] {
        &self.entries
    }

    pub fn active_entry(&self) -> Option<&TimeEntry> {
        self.active.map(|i| &self.entries[i])
    }

    /// Clock in: open a new entry at `now`. Rejected while an entry is
    /// already open.
    pub fn time_in(&mut self, now: NaiveDateTime) -> AppResult<&TimeEntry> {
        if let Some(open) = self.active_entry() {
            return Err(AppError::AlreadyClockedIn(open.date_str()));
        }

        let id = self.store.insert_entry(&self.user_id, now.date(), now.time())?;
        self.refresh()?;

        self.entries.iter().find(|e| e.id == id).ok_or_else(|| {
            AppError::StoreRead(format!("inserted entry {} missing from listing", id))
        })
    }

    /// Clock out: close the active entry at `now` and return the derived
    /// hours. The entry keeps its clock-in; `clock_out` and `hours` are
    /// written together.
    pub fn time_out(&mut self, now: NaiveDateTime) -> AppResult<f64> {
        let active = self.active_entry().cloned().ok_or(AppError::NotClockedIn)?;

        let hours = hours_between(active.clock_in, now.time())?;
        self.store.update_entry(active.id, now.time(), hours)?;
        self.refresh()?;

        Ok(hours)
    }
}
