//! In-memory [`HttpClient`] used by unit tests.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use bytes::Bytes;
use serde_json::Value;

use super::transport::{HttpClient, HttpRequest, HttpResponse};
use crate::error::TransportError;

enum Reply {
    Response(u16, String),
    Timeout,
}

/// Records every request and answers with a canned reply.
pub(crate) struct RecordingHttpClient {
    replies: Mutex<VecDeque<Reply>>,
    requests: Mutex<Vec<HttpRequest>>,
}

impl RecordingHttpClient {
    pub(crate) fn with_response(status: u16, body: &str) -> Self {
        Self {
            replies: Mutex::new(VecDeque::from([Reply::Response(status, body.to_string())])),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn json(body: Value) -> Self {
        Self::with_response(200, &body.to_string())
    }

    pub(crate) fn timing_out() -> Self {
        Self {
            replies: Mutex::new(VecDeque::from([Reply::Timeout])),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub(crate) fn last_request(&self) -> Option<HttpRequest> {
        self.requests.lock().unwrap().last().cloned()
    }

    pub(crate) fn call_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

#[async_trait]
impl HttpClient for RecordingHttpClient {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        self.requests.lock().unwrap().push(request);

        let mut replies = self.replies.lock().unwrap();
        let reply = if replies.len() > 1 {
            replies.pop_front()
        } else {
            replies.front().map(|r| match r {
                Reply::Response(status, body) => Reply::Response(*status, body.clone()),
                Reply::Timeout => Reply::Timeout,
            })
        };

        match reply {
            Some(Reply::Response(status, body)) => Ok(HttpResponse {
                status,
                headers: Default::default(),
                body: Bytes::from(body),
            }),
            Some(Reply::Timeout) | None => Err(TransportError::Timeout),
        }
    }
}
