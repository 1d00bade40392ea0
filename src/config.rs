//! Client configuration and API credentials.

use std::fmt;
use std::time::Duration;

use crate::error::{LastfmError, Result};

/// Default API endpoint.
pub const DEFAULT_API_URL: &str = "http://ws.audioscrobbler.com/2.0/";

/// Default page users are sent to when authorizing an application.
pub const DEFAULT_AUTH_URL: &str = "http://www.last.fm/api/auth/";

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Default connection timeout in seconds.
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 5;

/// Environment variable holding the API key.
pub const API_KEY_ENV: &str = "LASTFM_API_KEY";

/// Environment variable holding the shared secret.
pub const SHARED_SECRET_ENV: &str = "LASTFM_SHARED_SECRET";

/// Application credentials issued by Last.fm.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    api_key: String,
    shared_secret: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("api_key", &"[REDACTED]")
            .field("shared_secret", &"[REDACTED]")
            .finish()
    }
}

impl Credentials {
    /// Create credentials from an API key and shared secret.
    ///
    /// # Errors
    /// Returns `LastfmError::InvalidInput` if the API key is empty.
    pub fn new(api_key: impl Into<String>, shared_secret: impl Into<String>) -> Result<Self> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(LastfmError::InvalidInput(
                "API key is required for Last.fm API access".to_string(),
            ));
        }

        Ok(Self {
            api_key,
            shared_secret: shared_secret.into(),
        })
    }

    /// Read credentials from `LASTFM_API_KEY` and `LASTFM_SHARED_SECRET`.
    ///
    /// A missing secret is allowed; signed calls will then be rejected
    /// remotely, but unsigned calls work.
    pub fn from_env() -> Result<Self> {
        let api_key = read_env(API_KEY_ENV)?.unwrap_or_default();
        let shared_secret = read_env(SHARED_SECRET_ENV)?.unwrap_or_default();
        Self::new(api_key, shared_secret)
    }

    /// The public API key.
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// The shared secret used for signing.
    pub fn shared_secret(&self) -> &str {
        &self.shared_secret
    }
}

fn read_env(name: &str) -> Result<Option<String>> {
    match std::env::var(name) {
        Ok(value) => Ok(Some(value)),
        Err(std::env::VarError::NotPresent) => Ok(None),
        Err(std::env::VarError::NotUnicode(_)) => Err(LastfmError::InvalidInput(format!(
            "{} contains invalid UTF-8",
            name
        ))),
    }
}

/// Endpoints and HTTP settings for an [`ApiClient`](crate::ApiClient).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// API endpoint every call goes to.
    pub api_url: String,
    /// Base of the user-facing authorization URL.
    pub auth_url: String,
    /// User agent sent with each request.
    pub user_agent: String,
    /// Overall request timeout.
    pub timeout: Duration,
    /// Connection timeout.
    pub connect_timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            auth_url: DEFAULT_AUTH_URL.to_string(),
            user_agent: concat!("rustfm/", env!("CARGO_PKG_VERSION")).to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            connect_timeout: Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS),
        }
    }
}

impl ClientConfig {
    /// Use a different API endpoint.
    pub fn with_api_url<S: Into<String>>(mut self, url: S) -> Self {
        self.api_url = url.into();
        self
    }

    /// Use a different authorization page.
    pub fn with_auth_url<S: Into<String>>(mut self, url: S) -> Self {
        self.auth_url = url.into();
        self
    }

    /// Set the user agent.
    pub fn with_user_agent<S: Into<String>>(mut self, user_agent: S) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Set the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}
