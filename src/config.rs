//! Runtime and build-time settings.

use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

/// Backend used when nothing was configured at build time.
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:3001";

/// Key the display name is stored under.
pub const NAME_STORAGE_KEY: &str = "userName";

/// How often the leaderboard is refreshed while it is on screen.
pub const LEADERBOARD_POLL_INTERVAL: Duration = Duration::from_secs(3);

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 3001;
pub const DEFAULT_ALLOWED_ORIGIN: &str = "http://localhost:3000";
pub const DEFAULT_PROFILE_FILE: &str = ".daa-quiz.json";

/// Score store base URL baked in at compile time via `DAA_QUIZ_BACKEND_URL`.
pub fn backend_url() -> &'static str {
    option_env!("DAA_QUIZ_BACKEND_URL").unwrap_or(DEFAULT_BACKEND_URL)
}

/// Where the display name is kept unless `--profile` says otherwise.
pub fn default_profile_path() -> PathBuf {
    match std::env::var_os("HOME") {
        Some(home) => PathBuf::from(home).join(DEFAULT_PROFILE_FILE),
        None => PathBuf::from(DEFAULT_PROFILE_FILE),
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum ConfigError {
    Invalid { key: &'static str, value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Invalid { key, value } => write!(f, "invalid value for {}: {:?}", key, value),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Settings for the score store service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Persist scores to this JSON file; in-memory when unset.
    pub data_file: Option<PathBuf>,
    pub allowed_origin: String,
    /// Highest score the store accepts.
    pub max_score: u32,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            data_file: None,
            allowed_origin: DEFAULT_ALLOWED_ORIGIN.to_string(),
            max_score: crate::data::daa_questions().len() as u32,
        }
    }
}

impl ServerConfig {
    /// Read settings from the process environment, loading `.env` first.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read settings through an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(host) = lookup("HOST") {
            config.host = host;
        }
        if let Some(port) = lookup("PORT") {
            config.port = port
                .parse()
                .map_err(|_| ConfigError::Invalid { key: "PORT", value: port })?;
        }
        if let Some(file) = lookup("DAA_QUIZ_DATA_FILE").filter(|f| !f.is_empty()) {
            config.data_file = Some(PathBuf::from(file));
        }
        if let Some(origin) = lookup("DAA_QUIZ_ALLOWED_ORIGIN") {
            config.allowed_origin = origin;
        }
        if let Some(max) = lookup("DAA_QUIZ_MAX_SCORE") {
            config.max_score = max
                .parse()
                .map_err(|_| ConfigError::Invalid { key: "DAA_QUIZ_MAX_SCORE", value: max })?;
        }

        Ok(config)
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
