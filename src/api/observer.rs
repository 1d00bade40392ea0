//! Hooks for watching API calls.
//!
//! An observer is handed to [`ApiClientBuilder`](super::ApiClientBuilder)
//! at construction. The default does nothing.

use serde_json::Value;
use tracing::{debug, warn};

use crate::error::LastfmError;

/// Parameters that must never reach an observer or a log line in clear.
const SECRET_PARAMS: [&str; 5] = ["api_key", "sk", "api_sig", "password", "token"];

/// Receives a callback around every API call.
///
/// All methods have empty default bodies; implement only what you need.
pub trait CallObserver: Send + Sync {
    /// Called before the request is sent. Secret values are redacted.
    fn on_request(&self, _method: &str, _params: &[(String, String)]) {}

    /// Called with the decoded body of a successful call.
    fn on_response(&self, _method: &str, _body: &Value) {}

    /// Called when the call fails for any reason.
    fn on_error(&self, _method: &str, _error: &LastfmError) {}
}

/// Observer that ignores everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl CallObserver for NoopObserver {}

/// Observer that forwards calls to `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl CallObserver for TracingObserver {
    fn on_request(&self, method: &str, params: &[(String, String)]) {
        debug!(method, params = ?params, "Last.fm call");
    }

    fn on_response(&self, method: &str, body: &Value) {
        let keys: Vec<&String> = body
            .as_object()
            .map(|o| o.keys().collect())
            .unwrap_or_default();
        debug!(method, keys = ?keys, "Last.fm response");
    }

    fn on_error(&self, method: &str, error: &LastfmError) {
        warn!(method, error = %error, "Last.fm call failed");
    }
}

/// Copy of `params` with secret values masked.
pub(crate) fn redact(params: &[(String, String)]) -> Vec<(String, String)> {
    params
        .iter()
        .map(|(k, v)| {
            if SECRET_PARAMS.contains(&k.as_str()) {
                (k.clone(), "[REDACTED]".to_string())
            } else {
                (k.clone(), v.clone())
            }
        })
        .collect()
}
