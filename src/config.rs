use std::env;
use std::path::PathBuf;

use crate::constants::{DEFAULT_MAX_SESSIONS, DEFAULT_SIGNUPS_FILE, DEFAULT_TEAMS_FILE};

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub server_host: String,
    pub server_port: u16,
    /// Directory holding the CSV files (working directory by default)
    pub data_dir: PathBuf,
    pub signups_file: String,
    pub teams_file: String,
    pub environment: String,
    /// Live sessions kept in memory before the least recently seen is dropped
    pub max_sessions: usize,
    /// Enable per-request HTTP tracing
    pub log_requests: bool,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, String> {
        // Load .env file if it exists (development)
        dotenvy::dotenv().ok();

        let server_host = env::var("SERVER_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let server_port = env::var("SERVER_PORT")
            .unwrap_or_else(|_| "8501".to_string())
            .parse()
            .map_err(|_| "Invalid SERVER_PORT")?;

        let data_dir = env::var("DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("."));

        let signups_file =
            env::var("SIGNUPS_FILE").unwrap_or_else(|_| DEFAULT_SIGNUPS_FILE.to_string());
        let teams_file = env::var("TEAMS_FILE").unwrap_or_else(|_| DEFAULT_TEAMS_FILE.to_string());

        let environment = env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string());

        let max_sessions = env::var("MAX_SESSIONS")
            .unwrap_or_else(|_| DEFAULT_MAX_SESSIONS.to_string())
            .parse()
            .map_err(|_| "Invalid MAX_SESSIONS")?;

        let log_requests = env::var("LOG_REQUESTS")
            .map(|v| v.eq_ignore_ascii_case("true") || v == "1")
            .unwrap_or(false);

        Ok(Config {
            server_host,
            server_port,
            data_dir,
            signups_file,
            teams_file,
            environment,
            max_sessions,
            log_requests,
        })
    }

    /// Get server address as string
    pub fn server_address(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }

    pub fn signups_path(&self) -> PathBuf {
        self.data_dir.join(&self.signups_file)
    }

    pub fn teams_path(&self) -> PathBuf {
        self.data_dir.join(&self.teams_file)
    }
}
