use crate::cli::commands::require_session;
use crate::config::Config;
use crate::errors::AppResult;

pub fn handle(cfg: &Config) -> AppResult<()> {
    let session = require_session(cfg)?;
    println!("{}", session.email);
    Ok(())
}
