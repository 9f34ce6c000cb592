//! A transport double that records every request instead of sending it.

use async_trait::async_trait;
use plural::{ApiRequest, HttpError, HttpErrorKind, PluralResult, Transport};
use serde_json::Value;
use std::sync::Mutex;

/// What the transport answers with.
#[derive(Debug, Clone)]
pub enum MockBehavior {
    /// Every call answers this value.
    Success(Value),
    /// Every call fails with this kind.
    Error(HttpErrorKind),
    /// Calls answer in order; past the end they fail.
    Sequence(Vec<Value>),
}

/// A [`Transport`] that records requests and answers from a script.
#[derive(Debug)]
pub struct RecordingTransport {
    behavior: MockBehavior,
    requests: Mutex<Vec<ApiRequest>>,
}

impl RecordingTransport {
    /// A transport that answers every call with `value`.
    pub fn new_success(value: Value) -> Self {
        Self::new(MockBehavior::Success(value))
    }

    /// A transport that fails every call with `kind`.
    pub fn new_error(kind: HttpErrorKind) -> Self {
        Self::new(MockBehavior::Error(kind))
    }

    /// A transport that answers calls in order.
    pub fn new_sequence(values: Vec<Value>) -> Self {
        Self::new(MockBehavior::Sequence(values))
    }

    fn new(behavior: MockBehavior) -> Self {
        Self {
            behavior,
            requests: Mutex::new(Vec::new()),
        }
    }

    /// How many requests reached the transport.
    pub fn call_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    /// Every request received, in order.
    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// The most recent request, if any.
    pub fn last_request(&self) -> Option<ApiRequest> {
        self.requests.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl Transport for RecordingTransport {
    async fn execute(&self, request: ApiRequest) -> PluralResult<Value> {
        let call = {
            let mut requests = self.requests.lock().unwrap();
            requests.push(request);
            requests.len()
        };
        match &self.behavior {
            MockBehavior::Success(value) => Ok(value.clone()),
            MockBehavior::Error(kind) => Err(HttpError::new(kind.clone()).into()),
            MockBehavior::Sequence(values) => values
                .get(call - 1)
                .cloned()
                .ok_or_else(|| HttpError::request("mock sequence exhausted").into()),
        }
    }
}
