use crate::auth::IdentityProvider;
use crate::cli::commands::open_auth;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::success;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Login { email, password } = cmd {
        let mut auth = open_auth(cfg)?;
        let session = auth.sign_in(email, password)?;
        success(format!("Welcome, {}.", session.display_name()));
    }
    Ok(())
}
