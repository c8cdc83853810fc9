//! SQLite-backed identity provider.
//!
//! Accounts live in the `users` table of the main database, passwords are
//! hashed with Argon2id, and the signed-in session is a small JSON file so
//! the CLI stays logged in across invocations. Provider failures surface
//! as friendly messages, never as raw database errors.

use crate::auth::IdentityProvider;
use crate::errors::{AppError, AppResult};
use crate::models::session::Session;
use argon2::Argon2;
use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use chrono::Local;
use rand_core::OsRng;
use rusqlite::{Connection, OptionalExtension, params};
use std::fs;
use std::path::{Path, PathBuf};
use uuid::Uuid;

const BAD_CREDENTIALS: &str = "Invalid email or password";

pub struct SqliteAuth {
    conn: Connection,
    session_file: PathBuf,
}

impl SqliteAuth {
    pub fn open(db_path: &str, session_file: impl Into<PathBuf>) -> AppResult<Self> {
        let conn = Connection::open(Path::new(db_path))?;
        crate::store::sqlite::init_db(&conn)?;
        Ok(Self {
            conn,
            session_file: session_file.into(),
        })
    }

    fn validate(email: &str, password: &str) -> AppResult<()> {
        if email.trim().is_empty() || password.is_empty() {
            return Err(AppError::Auth("Email and password are required".into()));
        }
        if !email.contains('@') {
            return Err(AppError::InvalidEmail(email.to_string()));
        }
        Ok(())
    }

    fn find_by_email(&self, email: &str) -> AppResult<Option<(String, String)>> {
        let row = self
            .conn
            .query_row(
                "SELECT id, password_hash FROM users WHERE email = ?1",
                [email],
                |r| Ok((r.get::<_, String>(0)?, r.get::<_, String>(1)?)),
            )
            .optional()?;
        Ok(row)
    }

    fn write_session(&self, session: &Session) -> AppResult<()> {
        if let Some(dir) = self.session_file.parent() {
            fs::create_dir_all(dir)?;
        }
        let json =
            serde_json::to_string(session).map_err(|e| AppError::Session(e.to_string()))?;
        fs::write(&self.session_file, json)?;
        Ok(())
    }
}

impl IdentityProvider for SqliteAuth {
    fn sign_up(&mut self, email: &str, password: &str) -> AppResult<Session> {
        Self::validate(email, password)?;

        if self.find_by_email(email)?.is_some() {
            return Err(AppError::DuplicateEmail);
        }

        let salt = SaltString::generate(&mut OsRng);
        let hash = Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| AppError::Auth(format!("Could not hash password: {}", e)))?
            .to_string();

        let id = Uuid::now_v7().to_string();
        self.conn.execute(
            "INSERT INTO users (id, email, password_hash, created_at)
             VALUES (?1, ?2, ?3, ?4)",
            params![id, email, hash, Local::now().to_rfc3339()],
        )?;

        let session = Session {
            user_id: id,
            email: email.to_string(),
        };
        self.write_session(&session)?;
        Ok(session)
    }

    fn sign_in(&mut self, email: &str, password: &str) -> AppResult<Session> {
        Self::validate(email, password)?;

        let (id, stored_hash) = self
            .find_by_email(email)?
            .ok_or_else(|| AppError::Auth(BAD_CREDENTIALS.into()))?;

        let parsed = PasswordHash::new(&stored_hash)
            .map_err(|e| AppError::Auth(format!("Stored credentials are corrupt: {}", e)))?;
        Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .map_err(|_| AppError::Auth(BAD_CREDENTIALS.into()))?;

        let session = Session {
            user_id: id,
            email: email.to_string(),
        };
        self.write_session(&session)?;
        Ok(session)
    }

    fn sign_out(&mut self) -> AppResult<()> {
        if self.session_file.exists() {
            fs::remove_file(&self.session_file)?;
        }
        Ok(())
    }

    fn current_session(&self) -> AppResult<Option<Session>> {
        if !self.session_file.exists() {
            return Ok(None);
        }
        let raw = fs::read_to_string(&self.session_file)?;
        let session = serde_json::from_str(&raw).map_err(|e| AppError::Session(e.to_string()))?;
        Ok(Some(session))
    }
}
