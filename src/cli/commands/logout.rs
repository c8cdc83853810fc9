use crate::auth::IdentityProvider;
use crate::cli::commands::open_auth;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

pub fn handle(cfg: &Config) -> AppResult<()> {
    let mut auth = open_auth(cfg)?;

    match auth.current_session()? {
        Some(session) => {
            auth.sign_out()?;
            success(format!("Signed out {}.", session.email));
        }
        None => info("Nobody is signed in."),
    }
    Ok(())
}
