//! HTTP transport for the Last.fm API.
//!
//! The transport only knows how to send a request and decode JSON. It has
//! no idea what an API error looks like; that is left to
//! [`ApiClient`](super::ApiClient). Any type implementing [`HttpClient`]
//! can stand in for the default reqwest-backed client.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use bytes::Bytes;
use reqwest::Client;
use serde_json::Value;
use tracing::{debug, error};

use crate::config::ClientConfig;
use crate::error::TransportError;

/// HTTP verb for a call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HttpMethod {
    /// Parameters go into the query string.
    #[default]
    Get,
    /// Parameters go into a form-encoded body.
    Post,
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HttpMethod::Get => f.write_str("GET"),
            HttpMethod::Post => f.write_str("POST"),
        }
    }
}

/// One outgoing HTTP request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    /// Verb.
    pub method: HttpMethod,
    /// Target URL, without parameters.
    pub url: String,
    /// Parameters, already canonical.
    pub params: Vec<(String, String)>,
}

impl HttpRequest {
    /// Look up a parameter by name.
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

/// A received HTTP response.
#[derive(Debug, Clone, Default)]
pub struct HttpResponse {
    /// Status code.
    pub status: u16,
    /// Response headers, lowercase names.
    pub headers: HashMap<String, String>,
    /// Raw body.
    pub body: Bytes,
}

impl HttpResponse {
    /// Whether the status is below 400.
    pub fn is_success(&self) -> bool {
        self.status < 400
    }

    /// Body as text, replacing invalid UTF-8.
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

/// Something that can send an HTTP request and hand back the response.
#[async_trait]
pub trait HttpClient: Send + Sync {
    /// Perform the request.
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, TransportError>;
}

/// [`HttpClient`] backed by `reqwest`.
#[derive(Debug, Clone)]
pub struct ReqwestHttpClient {
    client: Client,
}

impl ReqwestHttpClient {
    /// Create a client using the timeouts and user agent in `config`.
    pub fn new(config: &ClientConfig) -> Result<Self, TransportError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .pool_idle_timeout(Duration::from_secs(90))
            .user_agent(config.user_agent.clone())
            .build()?;

        Ok(Self { client })
    }

    /// Wrap an already configured reqwest client.
    pub fn from_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl HttpClient for ReqwestHttpClient {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        let builder = match request.method {
            HttpMethod::Get => self.client.get(&request.url).query(&request.params),
            HttpMethod::Post => self.client.post(&request.url).form(&request.params),
        };

        let response = builder.send().await.map_err(request_error)?;

        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .filter_map(|(name, value)| {
                value
                    .to_str()
                    .ok()
                    .map(|v| (name.as_str().to_string(), v.to_string()))
            })
            .collect();
        let body = response.bytes().await.map_err(request_error)?;

        Ok(HttpResponse {
            status,
            headers,
            body,
        })
    }
}

/// Timeouts get their own variant whether they hit the send or the body read.
fn request_error(e: reqwest::Error) -> TransportError {
    if e.is_timeout() {
        TransportError::Timeout
    } else {
        TransportError::Http(e)
    }
}

/// Sends calls through an [`HttpClient`] and decodes the results.
#[derive(Clone)]
pub struct Transport {
    http: Arc<dyn HttpClient>,
}

impl fmt::Debug for Transport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Transport").finish_non_exhaustive()
    }
}

impl Transport {
    /// Create a transport over the given HTTP client.
    pub fn new(http: Arc<dyn HttpClient>) -> Self {
        Self { http }
    }

    /// Perform an API call and decode the JSON body.
    ///
    /// `format=json` is always appended. The body is decoded whatever the
    /// status, since the service reports API errors as JSON with 4xx codes.
    pub async fn call(
        &self,
        url: &str,
        mut params: Vec<(String, String)>,
        method: HttpMethod,
    ) -> Result<Value, TransportError> {
        params.retain(|(k, _)| k != "format");
        params.push(("format".to_string(), "json".to_string()));

        debug!(%method, url, param_count = params.len(), "Sending Last.fm request");

        let response = self
            .http
            .execute(HttpRequest {
                method,
                url: url.to_string(),
                params,
            })
            .await?;

        serde_json::from_slice(&response.body).map_err(|source| {
            let text = response.text();
            let preview: String = text.chars().take(200).collect();
            error!(
                status = response.status,
                body = %preview,
                "Failed to decode Last.fm response"
            );
            TransportError::Decode {
                status: response.status,
                source,
            }
        })
    }

    /// Fetch a page and return its body.
    ///
    /// A status of 400 or above yields `Ok(None)` so callers can treat a
    /// missing page as a normal outcome.
    pub async fn get_page_body(
        &self,
        url: &str,
        params: Vec<(String, String)>,
        method: HttpMethod,
    ) -> Result<Option<String>, TransportError> {
        let response = self
            .http
            .execute(HttpRequest {
                method,
                url: url.to_string(),
                params,
            })
            .await?;

        if !response.is_success() {
            debug!(url, status = response.status, "Page not available");
            return Ok(None);
        }

        Ok(Some(response.text()))
    }
}
