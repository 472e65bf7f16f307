//! Portal API transport port definition.

use std::fmt;

use serde::Serialize;
use serde_json::Value;

use crate::domain::AppError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
}

impl HttpMethod {
    pub fn as_str(self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One call against the portal API. `path` is relative to the base URL.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: HttpMethod,
    pub path: String,
    pub query: Vec<(String, String)>,
    pub body: Option<Value>,
}

impl ApiRequest {
    pub fn get(path: impl Into<String>) -> Self {
        Self { method: HttpMethod::Get, path: path.into(), query: Vec::new(), body: None }
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self { method: HttpMethod::Post, path: path.into(), query: Vec::new(), body: None }
    }

    pub fn put(path: impl Into<String>) -> Self {
        Self { method: HttpMethod::Put, path: path.into(), query: Vec::new(), body: None }
    }

    /// Append a query parameter; empty values are skipped.
    pub fn query(mut self, key: &str, value: Option<&str>) -> Self {
        if let Some(value) = value.filter(|v| !v.is_empty()) {
            self.query.push((key.to_string(), value.to_string()));
        }
        self
    }

    pub fn json<B: Serialize + ?Sized>(mut self, body: &B) -> Result<Self, AppError> {
        self.body = Some(
            serde_json::to_value(body).map_err(|e| AppError::parse_error("request body", e))?,
        );
        Ok(self)
    }

    /// `METHOD /path?query` for logs and test assertions.
    pub fn describe(&self) -> String {
        let mut out = format!("{} {}", self.method, self.path);
        for (i, (k, v)) in self.query.iter().enumerate() {
            out.push(if i == 0 { '?' } else { '&' });
            out.push_str(k);
            out.push('=');
            out.push_str(v);
        }
        out
    }
}

/// Port for sending requests to the portal API.
///
/// Implementations return the decoded JSON body of a 2xx response, map
/// non-2xx responses to [`AppError::Api`] and failures to reach the server to
/// [`AppError::Transport`].
pub trait ApiTransport {
    fn send(&self, request: &ApiRequest) -> Result<Value, AppError>;
}
