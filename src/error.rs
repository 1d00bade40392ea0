//! Error types for the Last.fm API.

use thiserror::Error;

/// API error code the service uses for "no such artist/album/track/...".
pub const NOT_FOUND_CODE: i32 = 6;

/// Code attached to failures that happen below the API layer.
pub const TECHNICAL_FAILURE_CODE: i32 = 500;

/// Failures raised by an [`HttpClient`](crate::api::HttpClient) or while
/// decoding its response.
#[derive(Debug, Error)]
pub enum TransportError {
    /// HTTP request failed (DNS, connection, TLS, body read).
    #[error("Request error: {0}")]
    Http(#[from] reqwest::Error),

    /// The request did not complete in time.
    #[error("Request timed out")]
    Timeout,

    /// The response body was not valid JSON.
    #[error("Invalid JSON response (status {status}): {source}")]
    Decode {
        status: u16,
        #[source]
        source: serde_json::Error,
    },
}

/// Main error type for all Last.fm operations.
#[derive(Debug, Error)]
pub enum LastfmError {
    /// The requested entity does not exist (API error 6).
    #[error("Not found: {message}")]
    NotFound { message: String },

    /// The service answered with an error payload.
    #[error("API error {code}: {message}")]
    Api { code: i32, message: String },

    /// Something failed below the API layer; carries code 500.
    #[error("Technical failure: {message}")]
    Technical {
        message: String,
        #[source]
        source: TransportError,
    },

    /// Caller-side validation failed before any request was sent.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// A successful response could not be turned into a model.
    #[error("Invalid payload: {0}")]
    InvalidPayload(String),
}

impl LastfmError {
    /// Numeric code of the failure, if it has one.
    ///
    /// API errors report the remote code, transport failures report 500.
    pub fn code(&self) -> Option<i32> {
        match self {
            LastfmError::NotFound { .. } => Some(NOT_FOUND_CODE),
            LastfmError::Api { code, .. } => Some(*code),
            LastfmError::Technical { .. } => Some(TECHNICAL_FAILURE_CODE),
            LastfmError::InvalidInput(_) | LastfmError::InvalidPayload(_) => None,
        }
    }

    /// The remote error code mapped onto the documented set.
    pub fn api_code(&self) -> Option<ApiErrorCode> {
        match self {
            LastfmError::NotFound { .. } | LastfmError::Api { .. } => {
                self.code().and_then(ApiErrorCode::from_code)
            }
            _ => None,
        }
    }

    /// Whether the failure means the credentials or session need attention.
    pub fn is_auth_error(&self) -> bool {
        matches!(
            self.api_code(),
            Some(
                ApiErrorCode::AuthenticationFailed
                    | ApiErrorCode::InvalidSessionKey
                    | ApiErrorCode::InvalidApiKey
                    | ApiErrorCode::InvalidSignature
                    | ApiErrorCode::UnauthorizedToken
                    | ApiErrorCode::TokenExpired
            )
        )
    }

    /// Build the error for a decoded error payload.
    pub(crate) fn from_api_payload(code: i32, message: String) -> Self {
        if code == NOT_FOUND_CODE {
            LastfmError::NotFound { message }
        } else {
            LastfmError::Api { code, message }
        }
    }

    pub(crate) fn technical(source: TransportError) -> Self {
        LastfmError::Technical {
            message: source.to_string(),
            source,
        }
    }
}

impl From<TransportError> for LastfmError {
    fn from(source: TransportError) -> Self {
        LastfmError::technical(source)
    }
}

/// Error codes documented by the Last.fm API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiErrorCode {
    InvalidService,
    InvalidMethod,
    AuthenticationFailed,
    InvalidFormat,
    InvalidParameters,
    InvalidResource,
    OperationFailed,
    InvalidSessionKey,
    InvalidApiKey,
    ServiceOffline,
    InvalidSignature,
    UnauthorizedToken,
    TokenExpired,
    TemporarilyUnavailable,
    SuspendedApiKey,
    RateLimitExceeded,
}

impl ApiErrorCode {
    /// Map a numeric code; unknown codes yield `None`.
    pub fn from_code(code: i32) -> Option<Self> {
        let known = match code {
            2 => ApiErrorCode::InvalidService,
            3 => ApiErrorCode::InvalidMethod,
            4 => ApiErrorCode::AuthenticationFailed,
            5 => ApiErrorCode::InvalidFormat,
            6 => ApiErrorCode::InvalidParameters,
            7 => ApiErrorCode::InvalidResource,
            8 => ApiErrorCode::OperationFailed,
            9 => ApiErrorCode::InvalidSessionKey,
            10 => ApiErrorCode::InvalidApiKey,
            11 => ApiErrorCode::ServiceOffline,
            13 => ApiErrorCode::InvalidSignature,
            14 => ApiErrorCode::UnauthorizedToken,
            15 => ApiErrorCode::TokenExpired,
            16 => ApiErrorCode::TemporarilyUnavailable,
            26 => ApiErrorCode::SuspendedApiKey,
            29 => ApiErrorCode::RateLimitExceeded,
            _ => return None,
        };
        Some(known)
    }
}

/// Result type alias for Last.fm operations.
pub type Result<T> = std::result::Result<T, LastfmError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_code_six_becomes_not_found() {
        let err = LastfmError::from_api_payload(
            6,
            "The artist you supplied could not be found".into(),
        );
        assert!(matches!(err, LastfmError::NotFound { .. }));
        assert_eq!(err.code(), Some(6));
    }

    #[test]
    fn test_other_codes_stay_generic() {
        let err = LastfmError::from_api_payload(10, "Invalid API key".into());
        assert!(matches!(err, LastfmError::Api { code: 10, .. }));
        assert!(err.is_auth_error());
    }

    #[test]
    fn test_technical_failure_chains_source() {
        let err = LastfmError::from(TransportError::Timeout);
        assert_eq!(err.code(), Some(TECHNICAL_FAILURE_CODE));
        let source = err.source().map(|s| s.to_string());
        assert_eq!(source.as_deref(), Some("Request timed out"));
        assert!(!err.is_auth_error());
    }

    #[test]
    fn test_unknown_api_code() {
        assert_eq!(ApiErrorCode::from_code(12), None);
        assert_eq!(ApiErrorCode::from_code(29), Some(ApiErrorCode::RateLimitExceeded));
    }
}
