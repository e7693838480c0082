//! Executor configuration, built once and handed to the executor at construction.

use std::time::Duration;

/// Reserved parameter name carrying the application key.
pub const APPLICATION_KEY_PARAM: &str = "appkey";

/// Settings shared by every call made through one executor.
///
/// `timeout` defaults to `None`: a call runs until the server answers or the
/// transport fails. Set it to bound each request end to end.
#[derive(Clone, Default)]
pub struct ExecutorConfig {
    /// Client-identifying key sent as the `appkey` parameter on every call.
    pub application_key: Option<String>,
    /// Per-request deadline covering connect, send, and body read.
    pub timeout: Option<Duration>,
    /// Initial Basic-Auth username.
    pub username: Option<String>,
    /// Initial Basic-Auth password.
    pub password: Option<String>,
}

impl ExecutorConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads `MAMBU_APP_KEY`, `MAMBU_USERNAME`, `MAMBU_PASSWORD` and
    /// `MAMBU_TIMEOUT_SECS`. Missing or unparseable values keep the defaults.
    pub fn from_env() -> Self {
        Self {
            application_key: env_string("MAMBU_APP_KEY"),
            timeout: env_u64("MAMBU_TIMEOUT_SECS").map(Duration::from_secs),
            username: env_string("MAMBU_USERNAME"),
            password: env_string("MAMBU_PASSWORD"),
        }
    }

    pub fn with_application_key(mut self, application_key: impl Into<String>) -> Self {
        self.application_key = Some(application_key.into());
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn with_credentials(mut self, username: impl Into<String>, password: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self.password = Some(password.into());
        self
    }
}

impl std::fmt::Debug for ExecutorConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExecutorConfig")
            .field("application_key", &self.application_key.is_some())
            .field("timeout", &self.timeout)
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

fn env_string(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|val| !val.is_empty())
}

fn env_u64(key: &str) -> Option<u64> {
    std::env::var(key).ok().and_then(|val| val.parse::<u64>().ok())
}
