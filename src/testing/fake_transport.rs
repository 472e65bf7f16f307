use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};

use serde_json::Value;

use crate::domain::AppError;
use crate::ports::{ApiRequest, ApiTransport, HttpMethod};

/// Canned outcome for one scripted call.
#[derive(Debug, Clone)]
pub enum Reply {
    Ok(Value),
    Status(u16, Value),
    Unreachable,
}

/// Transport answering from a script and recording every request.
///
/// Replies are keyed by method and path (query excluded). Queued replies are
/// consumed in order; the last one repeats.
#[derive(Clone, Default)]
pub struct FakeTransport {
    replies: Arc<Mutex<HashMap<(HttpMethod, String), VecDeque<Reply>>>>,
    pub calls: Arc<Mutex<Vec<ApiRequest>>>,
}

impl FakeTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on(self, method: HttpMethod, path: &str, reply: Reply) -> Self {
        self.replies
            .lock()
            .unwrap()
            .entry((method, path.to_string()))
            .or_default()
            .push_back(reply);
        self
    }

    pub fn on_get(self, path: &str, body: Value) -> Self {
        self.on(HttpMethod::Get, path, Reply::Ok(body))
    }

    pub fn on_post(self, path: &str, body: Value) -> Self {
        self.on(HttpMethod::Post, path, Reply::Ok(body))
    }

    pub fn on_put(self, path: &str, body: Value) -> Self {
        self.on(HttpMethod::Put, path, Reply::Ok(body))
    }

    pub fn get_calls(&self) -> Vec<ApiRequest> {
        self.calls.lock().unwrap().clone()
    }

    /// Number of recorded calls to `method path`, ignoring query strings.
    pub fn count(&self, method: HttpMethod, path: &str) -> usize {
        self.calls.lock().unwrap().iter().filter(|c| c.method == method && c.path == path).count()
    }

    pub fn total_calls(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    pub fn last_call(&self) -> Option<ApiRequest> {
        self.calls.lock().unwrap().last().cloned()
    }
}

impl ApiTransport for FakeTransport {
    fn send(&self, request: &ApiRequest) -> Result<Value, AppError> {
        self.calls.lock().unwrap().push(request.clone());

        let mut replies = self.replies.lock().unwrap();
        let queue = replies.get_mut(&(request.method, request.path.clone()));
        let reply = match queue {
            Some(queue) if queue.len() > 1 => queue.pop_front(),
            Some(queue) => queue.front().cloned(),
            None => None,
        };

        match reply {
            Some(Reply::Ok(body)) => Ok(body),
            Some(Reply::Status(status, body)) => Err(AppError::Api {
                status,
                message: body.get("message").and_then(|m| m.as_str()).map(ToOwned::to_owned),
                body: Some(body),
            }),
            Some(Reply::Unreachable) => Err(AppError::Transport("connection refused".into())),
            None => {
                Err(AppError::Transport(format!("no scripted reply for {}", request.describe())))
            }
        }
    }
}
