//! Mock source for testing purposes.

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::Mutex;

use crate::sources::{JobSource, SourceError};

/// One recorded `fetch_page` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedCall {
    pub query: String,
    pub page: u32,
    pub num_pages: u32,
}

#[derive(Debug)]
enum Reply {
    Body(String),
    Error(SourceError),
}

/// A mock job source that replays scripted response bodies in FIFO order and
/// records every call, so tests can assert the exact number of requests the
/// fallback cascade issued and the query each tier produced.
///
/// When the script is exhausted, further calls return an empty `data` array.
#[derive(Debug, Default)]
pub struct MockSource {
    replies: Mutex<VecDeque<Reply>>,
    calls: Mutex<Vec<RecordedCall>>,
}

impl MockSource {
    /// Create a new mock source with an empty script.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a raw response body for the next unanswered call.
    pub fn push_body(&self, body: impl Into<String>) {
        self.replies
            .lock()
            .unwrap()
            .push_back(Reply::Body(body.into()));
    }

    /// Queue an error for the next unanswered call.
    pub fn push_error(&self, error: SourceError) {
        self.replies.lock().unwrap().push_back(Reply::Error(error));
    }

    /// All calls made so far, in order.
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    /// Number of calls made so far.
    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl JobSource for MockSource {
    fn id(&self) -> &str {
        "mock"
    }

    fn name(&self) -> &str {
        "Mock Source"
    }

    async fn fetch_page(
        &self,
        query: &str,
        page: u32,
        num_pages: u32,
    ) -> Result<String, SourceError> {
        self.calls.lock().unwrap().push(RecordedCall {
            query: query.to_string(),
            page,
            num_pages,
        });

        match self.replies.lock().unwrap().pop_front() {
            Some(Reply::Body(body)) => Ok(body),
            Some(Reply::Error(error)) => Err(error),
            None => Ok(r#"{"data":[]}"#.to_string()),
        }
    }
}

/// Build a raw response body whose `data` array holds one posting per title.
pub fn body_with_titles(titles: &[&str]) -> String {
    let jobs: Vec<serde_json::Value> = titles
        .iter()
        .map(|title| serde_json::json!({ "job_title": title }))
        .collect();
    serde_json::json!({ "data": jobs }).to_string()
}
