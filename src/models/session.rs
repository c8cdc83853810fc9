use serde::{Deserialize, Serialize};

/// Signed-in identity, persisted between invocations as a small JSON file
/// next to the database.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub user_id: String,
    pub email: String,
}

impl Session {
    /// Short display name, the part of the email before the '@'.
    pub fn display_name(&self) -> &str {
        self.email.split('@').next().unwrap_or(&self.email)
    }
}
