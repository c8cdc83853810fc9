use crate::cli::commands::{open_store, require_session};
use crate::config::Config;
use crate::core::duration::format_hours;
use crate::core::tracker::Tracker;
use crate::errors::AppResult;
use crate::ui::messages::success;
use chrono::Local;

/// Clock out the signed-in user and print the worked hours.
pub fn handle(cfg: &Config) -> AppResult<()> {
    let session = require_session(cfg)?;
    let mut store = open_store(cfg)?;

    let mut tracker = Tracker::new(&mut store, session.user_id)?;
    let hours = tracker.time_out(Local::now().naive_local())?;

    success(format!("Clocked out. Worked {} hours.", format_hours(hours)));
    Ok(())
}
