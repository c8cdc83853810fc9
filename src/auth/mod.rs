//! Identity provider collaborator.
//!
//! The tracker only ever sees an opaque user id; everything about
//! credentials, hashing and session persistence stays behind this trait.

pub mod sqlite;

use crate::errors::AppResult;
use crate::models::session::Session;

pub trait IdentityProvider {
    /// Create an account and sign it in.
    fn sign_up(&mut self, email: &str, password: &str) -> AppResult<Session>;

    /// Check credentials and persist the session.
    fn sign_in(&mut self, email: &str, password: &str) -> AppResult<Session>;

    /// Forget the persisted session. A no-op when nobody is signed in.
    fn sign_out(&mut self) -> AppResult<()>;

    /// The persisted session, if any.
    fn current_session(&self) -> AppResult<Option<Session>>;
}
