use crate::auth::IdentityProvider;
use crate::cli::commands::open_auth;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::success;

/// Create an account and leave it signed in.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Register { email, password } = cmd {
        let mut auth = open_auth(cfg)?;
        let session = auth.sign_up(email, password)?;
        success(format!(
            "Account created. Signed in as {}.",
            session.email
        ));
    }
    Ok(())
}
