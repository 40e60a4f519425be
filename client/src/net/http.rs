//! JSON-over-HTTP transport seam shared by the auth and chat clients.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR) and native tests: `GlooTransport` fails fast, since the
//! remote API is only reachable from the browser. Tests substitute their own
//! `HttpTransport` implementations.
//!
//! ERROR HANDLING
//! ==============
//! Transport problems, non-2xx statuses and malformed bodies are kept apart in
//! `RequestError` so the developer log can tell them apart, even though the
//! user only ever sees one generic message.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "http_test.rs"]
mod http_test;

use std::future::Future;

/// A single JSON `POST`.
#[derive(Clone, Debug, PartialEq)]
pub struct JsonRequest {
    pub url: String,
    pub body: serde_json::Value,
    /// Bearer token for the `Authorization` header, if any.
    pub bearer: Option<String>,
}

/// Status code and raw body of a completed HTTP exchange.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpReply {
    pub status: u16,
    pub body: String,
}

impl HttpReply {
    /// `true` for any 2xx status.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// The request never produced a response (DNS, TLS, CORS, offline, ...).
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("transport failed: {0}")]
pub struct TransportError(pub String);

/// Everything that can go wrong with one API request.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RequestError {
    #[error("failed to encode request body: {0}")]
    Encode(String),
    #[error(transparent)]
    Transport(#[from] TransportError),
    #[error("server responded with status {status}: {body}")]
    Rejected { status: u16, body: String },
    #[error("malformed response body: {0}")]
    Decode(String),
    #[error("response body is missing `{0}`")]
    MissingField(&'static str),
}

/// Sends one JSON request and hands back the raw reply.
pub trait HttpTransport {
    fn post_json(&self, request: JsonRequest) -> impl Future<Output = Result<HttpReply, TransportError>>;
}

/// Browser `fetch` transport backed by `gloo-net`.
#[derive(Clone, Copy, Debug, Default)]
pub struct GlooTransport;

impl HttpTransport for GlooTransport {
    async fn post_json(&self, request: JsonRequest) -> Result<HttpReply, TransportError> {
        #[cfg(feature = "hydrate")]
        {
            let mut builder = gloo_net::http::Request::post(&request.url);
            if let Some(token) = request.bearer.as_deref() {
                builder = builder.header("Authorization", &format!("Bearer {token}"));
            }
            let resp = builder
                .json(&request.body)
                .map_err(|e| TransportError(e.to_string()))?
                .send()
                .await
                .map_err(|e| TransportError(e.to_string()))?;
            let status = resp.status();
            let body = resp.text().await.map_err(|e| TransportError(e.to_string()))?;
            Ok(HttpReply { status, body })
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(TransportError(format!("{} not available on server", request.url)))
        }
    }
}

/// Join the API base URL and an endpoint path without doubling slashes.
pub fn endpoint_url(base_url: &str, path: &str) -> String {
    format!("{}/{}", base_url.trim_end_matches('/'), path.trim_start_matches('/'))
}

/// Parse a JSON reply body into `T`.
///
/// # Errors
///
/// Returns `RequestError::Decode` when the body is not valid JSON for `T`.
pub fn decode_body<T: serde::de::DeserializeOwned>(reply: &HttpReply) -> Result<T, RequestError> {
    serde_json::from_str(&reply.body).map_err(|e| RequestError::Decode(e.to_string()))
}
