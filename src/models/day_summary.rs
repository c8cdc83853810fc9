use crate::models::entry::TIME_FMT;
use chrono::{NaiveDate, NaiveTime};
use serde::Serialize;

/// Placeholder shown when a day has no clock-in or no clock-out yet.
pub const NO_TIME: &str = "—";

/// Read-only per-date projection of the entry list: earliest clock-in,
/// latest clock-out and the summed hours of the closed entries.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DaySummary {
    pub date: NaiveDate,
    pub first_clock_in: Option<NaiveTime>,
    pub last_clock_out: Option<NaiveTime>,
    pub total_hours: f64,
}

impl DaySummary {
    pub fn empty(date: NaiveDate) -> Self {
        Self {
            date,
            first_clock_in: None,
            last_clock_out: None,
            total_hours: 0.0,
        }
    }

    pub fn first_clock_in_str(&self) -> String {
        match self.first_clock_in {
            Some(t) => t.format(TIME_FMT).to_string(),
            None => NO_TIME.to_string(),
        }
    }

    pub fn last_clock_out_str(&self) -> String {
        match self.last_clock_out {
            Some(t) => t.format(TIME_FMT).to_string(),
            None => NO_TIME.to_string(),
        }
    }

    pub fn total_hours_str(&self) -> String {
        format!("{:.2}", self.total_hours)
    }
}
