//! Signed and unsigned calls to the Last.fm API.

use std::fmt;
use std::sync::Arc;

use serde_json::Value;
use tracing::{debug, error, instrument, warn};

use super::observer::{redact, CallObserver, NoopObserver};
use super::params::Params;
use super::transport::{HttpClient, HttpMethod, ReqwestHttpClient, Transport};
use crate::config::{ClientConfig, Credentials};
use crate::crypto::{self, SIGNATURE_PARAM};
use crate::error::{LastfmError, Result};
use crate::models::Session;

/// Parameters the client sets itself; caller values for these are dropped.
const RESERVED_PARAMS: [&str; 4] = ["method", "api_key", SIGNATURE_PARAM, "sk"];

/// Last.fm API client.
///
/// Holds the application credentials and nothing else that changes between
/// calls, so one instance can be shared by any number of tasks.
///
/// # Example
///
/// ```rust,no_run
/// use rustfm::{ApiClient, Credentials, HttpMethod, Params};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let client = ApiClient::new(Credentials::new("api-key", "secret")?)?;
///     let body = client
///         .unsigned_call("artist.getInfo", Params::new().with("artist", "Cher"), HttpMethod::Get)
///         .await?;
///     println!("{}", body["artist"]["name"]);
///     Ok(())
/// }
/// ```
#[derive(Clone)]
pub struct ApiClient {
    credentials: Credentials,
    config: ClientConfig,
    transport: Transport,
    observer: Arc<dyn CallObserver>,
}

impl fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiClient")
            .field("credentials", &self.credentials)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

/// Builder for [`ApiClient`].
pub struct ApiClientBuilder {
    credentials: Credentials,
    config: ClientConfig,
    http: Option<Arc<dyn HttpClient>>,
    observer: Option<Arc<dyn CallObserver>>,
}

impl fmt::Debug for ApiClientBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiClientBuilder")
            .field("credentials", &self.credentials)
            .field("config", &self.config)
            .field("custom_http", &self.http.is_some())
            .field("observer", &self.observer.is_some())
            .finish()
    }
}

impl ApiClientBuilder {
    /// Replace the whole configuration.
    pub fn config(mut self, config: ClientConfig) -> Self {
        self.config = config;
        self
    }

    /// Send calls to a different endpoint.
    pub fn api_url<S: Into<String>>(mut self, url: S) -> Self {
        self.config.api_url = url.into();
        self
    }

    /// Use a custom HTTP client instead of reqwest.
    pub fn http_client(mut self, http: Arc<dyn HttpClient>) -> Self {
        self.http = Some(http);
        self
    }

    /// Receive callbacks around every call.
    pub fn observer(mut self, observer: Arc<dyn CallObserver>) -> Self {
        self.observer = Some(observer);
        self
    }

    /// Build the client.
    ///
    /// # Errors
    /// Returns `LastfmError::Technical` if the default HTTP client cannot
    /// be created.
    pub fn build(self) -> Result<ApiClient> {
        let http = match self.http {
            Some(http) => http,
            None => Arc::new(ReqwestHttpClient::new(&self.config)?),
        };

        Ok(ApiClient {
            credentials: self.credentials,
            config: self.config,
            transport: Transport::new(http),
            observer: self.observer.unwrap_or_else(|| Arc::new(NoopObserver)),
        })
    }
}

impl ApiClient {
    /// Create a client with the default configuration.
    pub fn new(credentials: Credentials) -> Result<Self> {
        Self::builder(credentials).build()
    }

    /// Start building a client.
    pub fn builder(credentials: Credentials) -> ApiClientBuilder {
        ApiClientBuilder {
            credentials,
            config: ClientConfig::default(),
            http: None,
            observer: None,
        }
    }

    /// The credentials this client signs with.
    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// The active configuration.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Build the outgoing parameters of a signed call.
    ///
    /// Adds `method`, `api_key` and, with a session, `sk`; then the caller
    /// parameters; then `api_sig` computed over all of them.
    pub fn prepare_signed(
        &self,
        method: &str,
        params: Params,
        session: Option<&Session>,
    ) -> Result<Vec<(String, String)>> {
        let mut call = self.base_params(method)?;
        if let Some(session) = session {
            call.insert("sk", session.key.as_str());
        }
        merge_caller_params(&mut call, params);

        let mut canonical = call.canonicalize();
        let signature = crypto::sign(&canonical, self.credentials.shared_secret());
        canonical.push((SIGNATURE_PARAM.to_string(), signature));
        Ok(canonical)
    }

    /// Build the outgoing parameters of an unsigned call.
    ///
    /// `sk` and `api_sig` never appear, even if the caller passed them.
    pub fn prepare_unsigned(&self, method: &str, params: Params) -> Result<Vec<(String, String)>> {
        let mut call = self.base_params(method)?;
        merge_caller_params(&mut call, params);
        Ok(call.canonicalize())
    }

    fn base_params(&self, method: &str) -> Result<Params> {
        if method.trim().is_empty() {
            return Err(LastfmError::InvalidInput(
                "API method name cannot be empty".to_string(),
            ));
        }
        Ok(Params::new()
            .with("method", method)
            .with("api_key", self.credentials.api_key()))
    }

    /// Perform a signed call.
    ///
    /// # Errors
    /// - `LastfmError::NotFound` - API error 6
    /// - `LastfmError::Api` - any other API error payload
    /// - `LastfmError::Technical` - network, timeout or non-JSON body
    #[instrument(skip(self, params, session))]
    pub async fn signed_call(
        &self,
        method: &str,
        params: Params,
        session: Option<&Session>,
        http_method: HttpMethod,
    ) -> Result<Value> {
        let outgoing = self.prepare_signed(method, params, session)?;
        self.dispatch(method, outgoing, http_method).await
    }

    /// Perform an unsigned call.
    ///
    /// # Errors
    /// Same as [`signed_call`](Self::signed_call).
    #[instrument(skip(self, params))]
    pub async fn unsigned_call(
        &self,
        method: &str,
        params: Params,
        http_method: HttpMethod,
    ) -> Result<Value> {
        let outgoing = self.prepare_unsigned(method, params)?;
        self.dispatch(method, outgoing, http_method).await
    }

    /// Shorthand for an unsigned GET.
    pub async fn call(&self, method: &str, params: Params) -> Result<Value> {
        self.unsigned_call(method, params, HttpMethod::Get).await
    }

    /// Fetch a web page, returning `None` when it does not exist.
    ///
    /// No API parameters are added. Used by page scrapers.
    pub async fn get_page_body(
        &self,
        url: &str,
        params: Params,
        http_method: HttpMethod,
    ) -> Result<Option<String>> {
        self.transport
            .get_page_body(url, params.canonicalize(), http_method)
            .await
            .map_err(|e| {
                error!(url, error = %e, "Page fetch failed");
                LastfmError::technical(e)
            })
    }

    async fn dispatch(
        &self,
        method: &str,
        params: Vec<(String, String)>,
        http_method: HttpMethod,
    ) -> Result<Value> {
        self.observer.on_request(method, &redact(&params));
        debug!(method, param_count = params.len(), "Calling Last.fm");

        let result = match self
            .transport
            .call(&self.config.api_url, params, http_method)
            .await
        {
            Ok(body) => match api_error(&body) {
                Some((code, message)) => {
                    warn!(method, code, message = %message, "Last.fm API error");
                    Err(LastfmError::from_api_payload(code, message))
                }
                None => Ok(body),
            },
            Err(e) => {
                error!(method, error = %e, "Last.fm request failed");
                Err(LastfmError::technical(e))
            }
        };

        match &result {
            Ok(body) => self.observer.on_response(method, body),
            Err(e) => self.observer.on_error(method, e),
        }
        result
    }
}

/// Copy caller parameters, skipping the reserved ones.
fn merge_caller_params(call: &mut Params, params: Params) {
    for (key, value) in params {
        if RESERVED_PARAMS.contains(&key.as_str()) {
            debug!(key = %key, "Dropping reserved parameter");
            continue;
        }
        call.insert(key, value);
    }
}

/// Detect an API error payload: an object with both `error` and `message`.
fn api_error(body: &Value) -> Option<(i32, String)> {
    let error = body.get("error")?;
    let message = body.get("message")?;

    let code = match error {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
    .and_then(|n| i32::try_from(n).ok())
    .unwrap_or_default();

    let message = match message {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    };

    Some((code, message))
}
