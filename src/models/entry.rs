use chrono::{NaiveDate, NaiveTime};
use serde::Serialize;

/// Storage format for dates: "YYYY-MM-DD".
pub const DATE_FMT: &str = "%Y-%m-%d";
/// Storage format for clock times: "HH:MM:SS".
pub const TIME_FMT: &str = "%H:%M:%S";

/// One attendance record for a user. An entry is *open* while `clock_out`
/// is absent; `clock_out` and `hours` are always set together.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimeEntry {
    pub id: i64,
    pub user_id: String,
    pub date: NaiveDate,    // ⇔ time_entries.date (TEXT "YYYY-MM-DD")
    pub clock_in: NaiveTime, // ⇔ time_entries.clock_in (TEXT "HH:MM:SS")
    pub clock_out: Option<NaiveTime>,
    pub hours: Option<f64>, // derived at clock-out, 2 decimals
}

impl TimeEntry {
    pub fn is_open(&self) -> bool {
        self.clock_out.is_none()
    }

    pub fn date_str(&self) -> String {
        self.date.format(DATE_FMT).to_string()
    }

    pub fn clock_in_str(&self) -> String {
        self.clock_in.format(TIME_FMT).to_string()
    }
}

/// Parse a stored clock time. Accepts both "HH:MM:SS" and the shorter
/// "HH:MM" used by older rows.
pub fn parse_clock_time(s: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(s, TIME_FMT)
        .or_else(|_| NaiveTime::parse_from_str(s, "%H:%M"))
        .ok()
}

/// Parse a stored date ("YYYY-MM-DD").
pub fn parse_entry_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, DATE_FMT).ok()
}
