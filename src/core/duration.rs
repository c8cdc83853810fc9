//! Same-day duration derivation for closing an entry.

use crate::errors::{AppError, AppResult};
use crate::models::entry::TIME_FMT;
use chrono::NaiveTime;

/// Hours between two clock times on the same calendar day, rounded to two
/// decimals. A clock-out numerically earlier than the clock-in would mean
/// the session crossed midnight; that is rejected instead of producing a
/// negative duration. Equal times are a valid zero-length session.
pub fn hours_between(clock_in: NaiveTime, clock_out: NaiveTime) -> AppResult<f64> {
    if clock_out < clock_in {
        return Err(AppError::ClockOutBeforeIn {
            clock_in: clock_in.format(TIME_FMT).to_string(),
            clock_out: clock_out.format(TIME_FMT).to_string(),
        });
    }

    let seconds = (clock_out - clock_in).num_seconds();
    Ok(round2(seconds as f64 / 3600.0))
}

/// Round half away from zero at two decimals.
pub fn round2(hours: f64) -> f64 {
    (hours * 100.0).round() / 100.0
}

/// Display form: always two decimals ("8.5" → "8.50").
pub fn format_hours(hours: f64) -> String {
    format!("{:.2}", hours)
}
