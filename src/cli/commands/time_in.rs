use crate::cli::commands::{open_store, require_session};
use crate::config::Config;
use crate::core::tracker::Tracker;
use crate::errors::AppResult;
use crate::ui::messages::success;
use chrono::Local;

/// Clock in the signed-in user at the current wall-clock time.
pub fn handle(cfg: &Config) -> AppResult<()> {
    let session = require_session(cfg)?;
    let mut store = open_store(cfg)?;

    let mut tracker = Tracker::new(&mut store, session.user_id)?;
    let entry = tracker.time_in(Local::now().naive_local())?;

    success(format!(
        "Clocked in at {} on {}.",
        entry.clock_in_str(),
        entry.date_str()
    ));
    Ok(())
}
