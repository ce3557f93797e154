//! Shared test utilities for CLI tests.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use repo_pulse::github::UpstreamResponse;
use repo_pulse::{ActivityError, UpstreamTransport};
use serde_json::Value;

/// A transport that serves canned bodies per target and records every
/// requested target. Unknown targets answer with `404`.
#[derive(Clone, Default)]
pub struct CapturingTransport {
    responses: HashMap<String, UpstreamResponse>,
    /// Targets requested so far, in request order.
    pub captured: Arc<Mutex<Vec<String>>>,
}

impl CapturingTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serves `body` for `target` without a `Link` header.
    pub fn respond(mut self, target: &str, body: Value) -> Self {
        self.responses
            .insert(target.to_owned(), UpstreamResponse::new(items_of(body), None));
        self
    }

    /// Serves `body` for `target` with the given `Link` header.
    pub fn respond_with_link(mut self, target: &str, body: Value, link: &str) -> Self {
        self.responses.insert(
            target.to_owned(),
            UpstreamResponse::new(items_of(body), Some(link.to_owned())),
        );
        self
    }

    pub fn requested(&self) -> Vec<String> {
        self.captured
            .lock()
            .expect("captured mutex should be available")
            .clone()
    }
}

fn items_of(body: Value) -> Vec<Value> {
    match body {
        Value::Array(items) => items,
        other => vec![other],
    }
}

#[async_trait]
impl UpstreamTransport for CapturingTransport {
    async fn get(&self, target: &str) -> Result<UpstreamResponse, ActivityError> {
        self.captured
            .lock()
            .expect("captured mutex should be available")
            .push(target.to_owned());

        self.responses
            .get(target)
            .cloned()
            .ok_or_else(|| ActivityError::NotFound {
                message: format!("no canned response for {target}"),
            })
    }
}
