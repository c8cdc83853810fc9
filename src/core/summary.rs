//! Per-date aggregation of the entry list.

use crate::core::duration::round2;
use crate::models::day_summary::DaySummary;
use crate::models::entry::TimeEntry;
use chrono::NaiveDate;

/// Collapse an entry list into one row per date: earliest clock-in, latest
/// clock-out, summed hours of the closed entries. First-seen date order is
/// preserved, so a date-descending listing produces newest-first summaries.
/// Open entries contribute their clock-in but no clock-out and no hours.
pub fn summarize(entries: &[TimeEntry]) -> Vec<DaySummary> {
    let mut days: Vec<DaySummary> = Vec::new();

    for entry in entries {
        let idx = match days.iter().position(|d| d.date == entry.date) {
            Some(i) => i,
            None => {
                days.push(DaySummary::empty(entry.date));
                days.len() - 1
            }
        };
        let day = &mut days[idx];

        day.first_clock_in = Some(match day.first_clock_in {
            Some(t) => t.min(entry.clock_in),
            None => entry.clock_in,
        });

        if let Some(out) = entry.clock_out {
            day.last_clock_out = Some(match day.last_clock_out {
                Some(t) => t.max(out),
                None => out,
            });
        }

        if let Some(h) = entry.hours {
            day.total_hours = round2(day.total_hours + h);
        }
    }

    days
}

/// Summary for a single date; an empty row when the date has no entries.
pub fn summarize_date(entries: &[TimeEntry], date: NaiveDate) -> DaySummary {
    summarize(entries)
        .into_iter()
        .find(|d| d.date == date)
        .unwrap_or_else(|| DaySummary::empty(date))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::day_summary::NO_TIME;
    use crate::models::entry::parse_clock_time;
    use chrono::NaiveTime;

    fn d(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn t(s: &str) -> NaiveTime {
        parse_clock_time(s).unwrap()
    }

    fn entry(
        id: i64,
        date: &str,
        clock_in: &str,
        clock_out: Option<&str>,
        hours: Option<f64>,
    ) -> TimeEntry {
        TimeEntry {
            id,
            user_id: "u1".into(),
            date: d(date),
            clock_in: t(clock_in),
            clock_out: clock_out.map(t),
            hours,
        }
    }

    #[test]
    fn two_sessions_on_one_day_aggregate() {
        let entries = vec![
            entry(2, "2024-01-01", "13:00", Some("17:00"), Some(4.0)),
            entry(1, "2024-01-01", "08:00", Some("12:00"), Some(4.0)),
        ];

        let days = summarize(&entries);
        assert_eq!(days.len(), 1);
        assert_eq!(days[0].total_hours_str(), "8.00");
        assert_eq!(days[0].first_clock_in, Some(t("08:00")));
        assert_eq!(days[0].last_clock_out, Some(t("17:00")));
    }

    #[test]
    fn dates_keep_listing_order() {
        let entries = vec![
            entry(3, "2024-01-03", "09:00", Some("17:00"), Some(8.0)),
            entry(2, "2024-01-02", "09:00", Some("17:00"), Some(8.0)),
            entry(1, "2024-01-01", "09:00", Some("17:00"), Some(8.0)),
        ];

        let days = summarize(&entries);
        let dates: Vec<NaiveDate> = days.iter().map(|s| s.date).collect();
        assert_eq!(dates, vec![d("2024-01-03"), d("2024-01-02"), d("2024-01-01")]);
    }

    #[test]
    fn open_entry_has_no_clock_out_and_no_hours() {
        let entries = vec![entry(1, "2024-01-01", "09:00", None, None)];

        let days = summarize(&entries);
        assert_eq!(days[0].first_clock_in, Some(t("09:00")));
        assert_eq!(days[0].last_clock_out, None);
        assert_eq!(days[0].last_clock_out_str(), NO_TIME);
        assert_eq!(days[0].total_hours_str(), "0.00");
    }

    #[test]
    fn fractional_hours_stay_on_two_decimals() {
        let entries = vec![
            entry(1, "2024-01-01", "09:00", Some("09:20"), Some(0.33)),
            entry(2, "2024-01-01", "10:00", Some("10:20"), Some(0.33)),
            entry(3, "2024-01-01", "11:00", Some("11:20"), Some(0.34)),
        ];

        let days = summarize(&entries);
        assert_eq!(days[0].total_hours_str(), "1.00");
    }

    #[test]
    fn summarize_date_falls_back_to_empty() {
        let entries = vec![entry(1, "2024-01-01", "09:00", Some("17:00"), Some(8.0))];

        let missing = summarize_date(&entries, d("2024-02-01"));
        assert_eq!(missing.first_clock_in_str(), NO_TIME);
        assert_eq!(missing.total_hours_str(), "0.00");

        let found = summarize_date(&entries, d("2024-01-01"));
        assert_eq!(found.total_hours_str(), "8.00");
    }
}
