//! Back-office API client.
//!
//! All console traffic to the remote back office goes through [`ApiClient`]:
//! collection and single-record fetches, create/update/delete, and the
//! transaction workflow actions (`pagar`, `anular`). Error responses may
//! carry a `mensaje` field which is surfaced verbatim to the user; a 404 is
//! the distinguishing signal for "not found" on single-record lookups.

use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, warn};

use crate::config::ConsoleConfig;

// ---------------------------------------------------------------------------
// Error taxonomy
// ---------------------------------------------------------------------------

/// Failure modes of a back-office request.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server answered 404.
    #[error("resource not found")]
    NotFound,

    /// Non-success HTTP status, with the server's `mensaje` when present.
    #[error("back office rejected the request (HTTP {status})")]
    Server { status: u16, mensaje: Option<String> },

    /// Connection-level failure (unreachable, timed out, bad URL).
    #[error("{0}")]
    Network(String),

    /// The response body was not the JSON shape we expected.
    #[error("invalid JSON from the back office: {0}")]
    Decode(String),
}

impl ApiError {
    /// The server-provided `mensaje`, when the failure carried one.
    pub fn mensaje(&self) -> Option<&str> {
        match self {
            ApiError::Server { mensaje, .. } => mensaje.as_deref(),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::NotFound)
    }
}

/// Convert a `reqwest::Error` into a user-meaningful message.
fn friendly_error(url: &str, err: &reqwest::Error) -> String {
    if err.is_connect() {
        return format!("Cannot reach the back office at {url}");
    }
    if err.is_timeout() {
        return format!("Connection to {url} timed out");
    }
    if err.is_builder() {
        return format!("Invalid back-office URL: {url}");
    }
    format!("Network error communicating with {url}: {err}")
}

/// Map a non-success response to the error taxonomy, extracting `mensaje`
/// from the body when the server included one.
async fn rejection(resp: Response) -> ApiError {
    let status = resp.status();
    if status == StatusCode::NOT_FOUND {
        return ApiError::NotFound;
    }

    let body = resp.text().await.unwrap_or_default();
    let mensaje = serde_json::from_str::<Value>(&body)
        .ok()
        .and_then(|v| v.get("mensaje").and_then(Value::as_str).map(str::to_string));
    warn!(status = status.as_u16(), ?mensaje, "back office rejected request");
    ApiError::Server {
        status: status.as_u16(),
        mensaje,
    }
}

// ---------------------------------------------------------------------------
// Client
// ---------------------------------------------------------------------------

/// HTTP client bound to one back-office base URL.
///
/// No timeout, retry, or in-flight cancellation lives here: every console
/// operation is a single request the user explicitly triggered, and a
/// failure is terminal for that operation.
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    client: Client,
}

impl ApiClient {
    pub fn new(config: &ConsoleConfig) -> Self {
        Self {
            base_url: config.base_url.clone(),
            client: Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `GET /{path}` — the full collection. A body that is valid JSON but
    /// not an array is treated as an empty collection.
    pub async fn fetch_all<T: DeserializeOwned>(&self, path: &str) -> Result<Vec<T>, ApiError> {
        let url = format!("{}/{}", self.base_url, path);
        debug!(%url, "GET collection");

        let resp = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| ApiError::Network(friendly_error(&self.base_url, &e)))?;
        if !resp.status().is_success() {
            return Err(rejection(resp).await);
        }

        let body = resp
            .json::<Value>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))?;
        match body {
            Value::Array(_) => {
                serde_json::from_value(body).map_err(|e| ApiError::Decode(e.to_string()))
            }
            _ => Ok(Vec::new()),
        }
    }

    /// `GET /{path}/{id}` — a single record, or [`ApiError::NotFound`].
    pub async fn fetch_one<T: DeserializeOwned>(&self, path: &str, id: &str) -> Result<T, ApiError> {
        let url = format!("{}/{}/{}", self.base_url, path, id);
        debug!(%url, "GET record");

        let resp = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| ApiError::Network(friendly_error(&self.base_url, &e)))?;
        if !resp.status().is_success() {
            return Err(rejection(resp).await);
        }

        resp.json::<T>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// `POST /{path}` — create a record from `payload`.
    pub async fn create<P: Serialize + ?Sized>(
        &self,
        path: &str,
        payload: &P,
    ) -> Result<(), ApiError> {
        let url = format!("{}/{}", self.base_url, path);
        debug!(%url, "POST create");
        self.send_mutation(self.client.post(&url).json(payload)).await
    }

    /// `PUT /{path}/{id}` — update the record addressed by `id`.
    pub async fn update<P: Serialize + ?Sized>(
        &self,
        path: &str,
        id: &str,
        payload: &P,
    ) -> Result<(), ApiError> {
        let url = format!("{}/{}/{}", self.base_url, path, id);
        debug!(%url, "PUT update");
        self.send_mutation(self.client.put(&url).json(payload)).await
    }

    /// `DELETE /{path}/{id}`.
    pub async fn delete(&self, path: &str, id: &str) -> Result<(), ApiError> {
        let url = format!("{}/{}/{}", self.base_url, path, id);
        debug!(%url, "DELETE record");
        self.send_mutation(self.client.delete(&url)).await
    }

    /// `POST /{path}/{id}/{action}` — a workflow transition such as
    /// `pagar` or `anular`, with an optional JSON body.
    pub async fn post_action(
        &self,
        path: &str,
        id: &str,
        action: &str,
        body: Option<Value>,
    ) -> Result<(), ApiError> {
        let url = format!("{}/{}/{}/{}", self.base_url, path, id, action);
        debug!(%url, "POST action");

        let mut req = self.client.post(&url);
        if let Some(body) = body {
            req = req.json(&body);
        }
        self.send_mutation(req).await
    }

    async fn send_mutation(&self, req: reqwest::RequestBuilder) -> Result<(), ApiError> {
        let resp = req
            .send()
            .await
            .map_err(|e| ApiError::Network(friendly_error(&self.base_url, &e)))?;
        if !resp.status().is_success() {
            return Err(rejection(resp).await);
        }
        // The console ignores mutation response bodies.
        let _ = resp.bytes().await;
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
