//! Request pipeline for the Last.fm API.
//!
//! - [`Params`]: call parameters and their canonical form
//! - [`Transport`]: one HTTP round trip through a pluggable [`HttpClient`]
//! - [`ApiClient`]: signing, dispatch and error classification

pub mod client;
pub mod observer;
pub mod params;
pub mod transport;

#[cfg(test)]
pub(crate) mod testing;

pub use client::{ApiClient, ApiClientBuilder};
pub use observer::{CallObserver, NoopObserver, TracingObserver};
pub use params::{ParamValue, Params};
pub use transport::{
    HttpClient, HttpMethod, HttpRequest, HttpResponse, ReqwestHttpClient, Transport,
};
