pub mod init;
pub mod list;
pub mod login;
pub mod logout;
pub mod register;
pub mod status;
pub mod time_in;
pub mod time_out;
pub mod whoami;

use crate::auth::IdentityProvider;
use crate::auth::sqlite::SqliteAuth;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::session::Session;
use crate::store::sqlite::{SqliteStore, init_db};

pub(crate) fn open_store(cfg: &Config) -> AppResult<SqliteStore> {
    let store = SqliteStore::open(&cfg.database)?;
    init_db(&store.conn)?;
    Ok(store)
}

pub(crate) fn open_auth(cfg: &Config) -> AppResult<SqliteAuth> {
    SqliteAuth::open(&cfg.database, cfg.session_file())
}

/// The signed-in session, or a friendly error telling the user to log in.
pub(crate) fn require_session(cfg: &Config) -> AppResult<Session> {
    open_auth(cfg)?
        .current_session()?
        .ok_or(AppError::NotLoggedIn)
}
