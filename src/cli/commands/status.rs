use crate::cli::commands::{open_store, require_session};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::clock::ticker;
use crate::core::tracker::Tracker;
use crate::errors::AppResult;
use std::io::{self, Write};
use std::time::Duration;

/// Show the derived tracking status; with `--watch`, keep redrawing the
/// wall clock once per second until interrupted.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Status { watch } = cmd {
        let session = require_session(cfg)?;
        let mut store = open_store(cfg)?;
        let tracker = Tracker::new(&mut store, session.user_id)?;

        let status = tracker.status();
        println!("{} is {}", session.email, status);
        if let Some(entry) = tracker.active_entry() {
            println!(
                "Open entry since {} on {}",
                entry.clock_in_str(),
                entry.date_str()
            );
        }

        if *watch {
            let fmt = if cfg.show_seconds { "%H:%M:%S" } else { "%H:%M" };
            for now in ticker(Duration::from_secs(1)) {
                print!("\r🕒 {}  ({})", now.format(fmt), status);
                io::stdout().flush()?;
            }
        }
    }
    Ok(())
}
