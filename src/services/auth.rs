//! `auth.*` methods: tokens, sessions and the authorization URL.
//!
//! Web flow:
//! 1. [`get_token`](AuthService::get_token) (optional for web apps that
//!    receive the token on their callback)
//! 2. send the user to [`get_auth_url`](AuthService::get_auth_url)
//! 3. exchange the token with [`get_session`](AuthService::get_session)

use tracing::{debug, info};

use super::required;
use crate::api::{ApiClient, HttpMethod, Params};
use crate::converters::{get_text, require, FromApi};
use crate::error::{LastfmError, Result};
use crate::models::Session;

/// Authentication methods.
#[derive(Debug, Clone, Copy)]
pub struct AuthService<'a> {
    client: &'a ApiClient,
}

impl<'a> AuthService<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// Fetch an unauthorized request token.
    pub async fn get_token(&self) -> Result<String> {
        let body = self
            .client
            .signed_call("auth.getToken", Params::new(), None, HttpMethod::Get)
            .await?;

        get_text(&body, "token")
            .ok_or_else(|| LastfmError::InvalidPayload("response has no token".to_string()))
    }

    /// Exchange an authorized token for a session.
    pub async fn get_session(&self, token: &str) -> Result<Session> {
        let token = required("token", token)?;
        let body = self
            .client
            .signed_call(
                "auth.getSession",
                Params::new().with("token", token),
                None,
                HttpMethod::Get,
            )
            .await?;

        let session = Session::from_api(require(&body, "session")?)?;
        info!(user = %session.name, "Obtained Last.fm session");
        Ok(session)
    }

    /// Create a session from a username and password (mobile flow).
    pub async fn get_mobile_session(&self, username: &str, password: &str) -> Result<Session> {
        let username = required("username", username)?;
        if password.is_empty() {
            return Err(LastfmError::InvalidInput(
                "password cannot be empty".to_string(),
            ));
        }

        let body = self
            .client
            .signed_call(
                "auth.getMobileSession",
                Params::new()
                    .with("username", username)
                    .with("password", password),
                None,
                HttpMethod::Post,
            )
            .await?;

        Session::from_api(require(&body, "session")?)
    }

    /// URL the user must visit to authorize this application.
    ///
    /// The callback is appended as given.
    pub fn get_auth_url(&self, callback_url: &str) -> String {
        let url = format!(
            "{}?api_key={}&cb={}",
            self.client.config().auth_url,
            self.client.credentials().api_key(),
            callback_url
        );
        debug!(callback = callback_url, "Built authorization URL");
        url
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::testing::RecordingHttpClient;
    use crate::services::test_support::client;
    use serde_json::json;
    use std::sync::Arc;

    #[test]
    fn test_auth_url_default_base() {
        let client = client(Arc::new(RecordingHttpClient::json(json!({}))));
        assert_eq!(
            client.auth().get_auth_url("https://example.org"),
            "http://www.last.fm/api/auth/?api_key=api-key&cb=https://example.org"
        );
    }

    #[tokio::test]
    async fn test_get_token_is_signed() {
        let http = Arc::new(RecordingHttpClient::json(json!({"token": "cf45fe5a3e3cebe168480a086d7fe481"})));
        let client = client(http.clone());

        let token = client.auth().get_token().await.unwrap();
        assert_eq!(token, "cf45fe5a3e3cebe168480a086d7fe481");

        let request = http.last_request().unwrap();
        assert_eq!(request.param("method"), Some("auth.getToken"));
        assert!(request.param("api_sig").is_some());
        assert!(request.param("sk").is_none());
    }

    #[tokio::test]
    async fn test_get_session() {
        let http = Arc::new(RecordingHttpClient::json(json!({
            "session": {"name": "MyLastFMUsername", "key": "d580d57f32848f5dcf574d1ce18d78b2", "subscriber": "0"}
        })));
        let client = client(http.clone());

        let session = client.auth().get_session("token").await.unwrap();
        assert_eq!(session.name, "MyLastFMUsername");
        assert_eq!(session.key, "d580d57f32848f5dcf574d1ce18d78b2");
        assert_eq!(session.subscriber, 0);
        assert_eq!(http.last_request().unwrap().param("token"), Some("token"));
    }

    #[tokio::test]
    async fn test_unauthorized_token_error() {
        let http = Arc::new(RecordingHttpClient::json(
            json!({"error": 14, "message": "Unauthorized Token - This token has not been authorized"}),
        ));
        let client = client(http);
        let err = client.auth().get_session("token").await.unwrap_err();
        assert!(matches!(err, LastfmError::Api { code: 14, .. }));
    }

    #[tokio::test]
    async fn test_mobile_session_posts() {
        let http = Arc::new(RecordingHttpClient::json(json!({
            "session": {"name": "rj", "key": "k", "subscriber": 1}
        })));
        let client = client(http.clone());
        let session = client.auth().get_mobile_session("rj", "pw").await.unwrap();
        assert!(session.is_subscriber());
        assert_eq!(http.last_request().unwrap().method, HttpMethod::Post);

        assert!(client.auth().get_mobile_session("rj", "").await.is_err());
        assert_eq!(http.call_count(), 1);
    }
}
