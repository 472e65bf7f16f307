//! Portal API transport using reqwest.

use reqwest::StatusCode;
use reqwest::blocking::{Client, RequestBuilder};
use serde_json::Value;
use url::Url;

use crate::domain::{ApiConfig, AppError, Role};
use crate::ports::{ApiRequest, ApiTransport, HttpMethod, SessionStore};

/// HTTP transport for the portal API.
///
/// Attaches the worker session's bearer token when one exists and clears the
/// worker session whenever the server answers 401, whichever role made the
/// call. Each call is a single attempt.
#[derive(Clone)]
pub struct HttpTransport<S: SessionStore> {
    base_url: Url,
    client: Client,
    sessions: S,
}

impl<S: SessionStore> std::fmt::Debug for HttpTransport<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpTransport").field("base_url", &self.base_url.as_str()).finish()
    }
}

impl<S: SessionStore> HttpTransport<S> {
    pub fn new(config: &ApiConfig, sessions: S) -> Result<Self, AppError> {
        let client = Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| AppError::Transport(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self { base_url: config.url()?, client, sessions })
    }

    fn endpoint(&self, request: &ApiRequest) -> Result<Url, AppError> {
        let raw = format!(
            "{}/{}",
            self.base_url.as_str().trim_end_matches('/'),
            request.path.trim_start_matches('/')
        );
        let mut url = Url::parse(&raw).map_err(|e| AppError::parse_error("endpoint URL", e))?;
        if !request.query.is_empty() {
            url.query_pairs_mut().extend_pairs(request.query.iter());
        }
        Ok(url)
    }

    fn bearer_token(&self) -> Option<String> {
        match self.sessions.get_session(Role::Worker) {
            Ok(session) => session.and_then(|s| s.token),
            Err(err) => {
                tracing::warn!(error = %err, "Ignoring unreadable worker session");
                None
            }
        }
    }

    fn drop_worker_session(&self) {
        match self.sessions.clear_session(Role::Worker) {
            Ok(()) => tracing::warn!("Portal API answered 401; worker session cleared"),
            Err(err) => tracing::warn!(error = %err, "Failed to clear worker session after 401"),
        }
    }

    fn builder(&self, method: HttpMethod, url: Url) -> RequestBuilder {
        match method {
            HttpMethod::Get => self.client.get(url),
            HttpMethod::Post => self.client.post(url),
            HttpMethod::Put => self.client.put(url),
        }
    }
}

impl<S: SessionStore> ApiTransport for HttpTransport<S> {
    fn send(&self, request: &ApiRequest) -> Result<Value, AppError> {
        let url = self.endpoint(request)?;
        tracing::debug!(method = %request.method, url = %url, "Sending portal request");

        let mut builder = self.builder(request.method, url);
        if let Some(token) = self.bearer_token() {
            builder = builder.bearer_auth(token);
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response =
            builder.send().map_err(|e| AppError::Transport(format!("{}: {e}", request.path)))?;
        let status = response.status();
        let body_text = response.text().unwrap_or_default();
        tracing::debug!(status = status.as_u16(), path = %request.path, "Portal response");

        if status == StatusCode::UNAUTHORIZED {
            self.drop_worker_session();
        }

        if status.is_success() {
            return serde_json::from_str(&body_text)
                .map_err(|e| AppError::parse_error(format!("response from {}", request.path), e));
        }

        let body = serde_json::from_str::<Value>(&body_text).ok();
        let message = body.as_ref().and_then(extract_error_message);
        Err(AppError::Api { status: status.as_u16(), message, body })
    }
}

fn extract_error_message(body: &Value) -> Option<String> {
    if let Some(msg) = body
        .get("error")
        .and_then(|error| error.get("message"))
        .and_then(|message| message.as_str())
    {
        return Some(msg.to_string());
    }

    body.get("message").and_then(|message| message.as_str()).map(ToOwned::to_owned)
}
