use std::{env, path::PathBuf};

use crate::errors::{AppError, AppResult};

#[derive(Clone, Debug)]
pub struct Config {
    pub api_base_url: String,
    pub session_file: PathBuf,
    pub request_timeout_secs: u64,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            api_base_url: env::var("QUIZ_LINK_API_URL")
                .unwrap_or_else(|_| "http://localhost:5000/api".to_string()),
            session_file: env::var("QUIZ_LINK_SESSION_FILE")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(".quiz-link/session.json")),
            request_timeout_secs: env::var("QUIZ_LINK_TIMEOUT_SECS")
                .ok()
                .and_then(|t| t.parse().ok())
                .unwrap_or(30),
        }
    }

    /// Base URL without a trailing slash, ready for `{base}{path}` joins.
    pub fn api_base(&self) -> &str {
        self.api_base_url.trim_end_matches('/')
    }

    /// Rejects settings the HTTP client cannot work with.
    pub fn validate(&self) -> AppResult<()> {
        let base = self.api_base();
        if !(base.starts_with("http://") || base.starts_with("https://")) {
            return Err(AppError::ValidationError(format!(
                "QUIZ_LINK_API_URL must be an http(s) URL, got '{}'",
                self.api_base_url
            )));
        }

        if self.request_timeout_secs == 0 {
            return Err(AppError::ValidationError(
                "QUIZ_LINK_TIMEOUT_SECS must be greater than zero".to_string(),
            ));
        }

        Ok(())
    }

    #[cfg(test)]
    pub fn test_config() -> Self {
        Self {
            api_base_url: "http://127.0.0.1:5000/api/".to_string(),
            session_file: env::temp_dir().join("quiz-link-test-session.json"),
            request_timeout_secs: 5,
        }
    }
}
