use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::Write;
use std::path::PathBuf;

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    pub database: String,
    #[serde(default = "default_show_seconds")]
    pub show_seconds: bool,
}

fn default_show_seconds() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: Self::database_file().to_string_lossy().to_string(),
            show_seconds: default_show_seconds(),
        }
    }
}

impl Config {
    /// Standard configuration directory depending on the platform.
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("punchclock")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".punchclock")
        }
    }

    /// Full path of the config file.
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("punchclock.conf")
    }

    /// Full path of the default SQLite database.
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("punchclock.sqlite")
    }

    /// The session file lives next to the database, so a `--db` override
    /// (used by tests) isolates the session too.
    pub fn session_file(&self) -> PathBuf {
        PathBuf::from(format!("{}.session", self.database))
    }

    /// Load configuration from file, or return defaults if not found.
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)?;
        serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("{}: {}", path.display(), e)))
    }

    /// Initialize configuration and database files. Test mode skips the
    /// config file so test runs never touch the real one.
    pub fn init_all(custom_db: Option<String>, is_test: bool) -> AppResult<()> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        let db_path = match custom_db {
            Some(name) => {
                let p = PathBuf::from(&name);
                if p.is_absolute() { p } else { dir.join(p) }
            }
            None => Self::database_file(),
        };

        let config = Config {
            database: db_path.to_string_lossy().to_string(),
            show_seconds: default_show_seconds(),
        };

        if !is_test {
            let yaml = serde_yaml::to_string(&config)
                .map_err(|e| AppError::Config(e.to_string()))?;
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
        }

        if !db_path.exists() {
            fs::File::create(&db_path)?;
        }

        Ok(())
    }
}
