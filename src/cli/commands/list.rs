use crate::cli::commands::{open_store, require_session};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::summary::{summarize, summarize_date};
use crate::core::tracker::Tracker;
use crate::errors::{AppError, AppResult};
use crate::models::day_summary::DaySummary;
use crate::models::entry::parse_entry_date;
use crate::ui::messages::info;
use crate::ui::table::Table;

/// Per-day summary of the signed-in user's entries.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { date, json } = cmd {
        let session = require_session(cfg)?;
        let mut store = open_store(cfg)?;
        let tracker = Tracker::new(&mut store, session.user_id)?;

        let days: Vec<DaySummary> = match date {
            Some(raw) => {
                let d = parse_entry_date(raw)
                    .ok_or_else(|| AppError::InvalidDate(raw.to_string()))?;
                vec![summarize_date(tracker.entries(), d)]
            }
            None => summarize(tracker.entries()),
        };

        if *json {
            println!(
                "{}",
                serde_json::to_string_pretty(&days)
                    .map_err(|e| AppError::Other(e.to_string()))?
            );
            return Ok(());
        }

        if days.is_empty() {
            info("No entries yet. Use `punchclock in` to clock in.");
            return Ok(());
        }

        let mut table = Table::new(vec!["Date", "First In", "Last Out", "Total Hours"]);
        for day in &days {
            table.add_row(vec![
                day.date.format("%Y-%m-%d").to_string(),
                day.first_clock_in_str(),
                day.last_clock_out_str(),
                day.total_hours_str(),
            ]);
        }
        print!("{}", table.render());
    }
    Ok(())
}
