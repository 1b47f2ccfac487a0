//! Shared fakes for behavior tests.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use binedge_core::{Client, Credential, HttpClient, HttpError, HttpRequest, HttpResponse};
use serde_json::{json, Value};

pub const TEST_BASE_URL: &str = "https://api.binaryedge.test/v2/";

/// Transport that replays a fixed script of responses and records requests.
///
/// Once the script runs out every further call answers 500.
#[derive(Debug, Default)]
pub struct ScriptedHttpClient {
    script: Mutex<VecDeque<Result<HttpResponse, HttpError>>>,
    requests: Mutex<Vec<HttpRequest>>,
}

impl ScriptedHttpClient {
    pub fn new(script: Vec<Result<HttpResponse, HttpError>>) -> Arc<Self> {
        Arc::new(Self {
            script: Mutex::new(script.into()),
            requests: Mutex::new(Vec::new()),
        })
    }

    pub fn json(bodies: Vec<Value>) -> Arc<Self> {
        Self::new(
            bodies
                .into_iter()
                .map(|body| Ok(HttpResponse::ok_json(body.to_string())))
                .collect(),
        )
    }

    pub fn status(status: u16) -> Arc<Self> {
        Self::new(vec![Ok(HttpResponse::new(status, ""))])
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests
            .lock()
            .expect("request log should not be poisoned")
            .clone()
    }

    pub fn call_count(&self) -> usize {
        self.requests
            .lock()
            .expect("request log should not be poisoned")
            .len()
    }
}

impl HttpClient for ScriptedHttpClient {
    fn execute(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
        self.requests
            .lock()
            .expect("request log should not be poisoned")
            .push(request);
        self.script
            .lock()
            .expect("script should not be poisoned")
            .pop_front()
            .unwrap_or_else(|| Ok(HttpResponse::new(500, "script exhausted")))
    }
}

pub fn client(http: &Arc<ScriptedHttpClient>) -> Client {
    Client::builder(Credential::new("behavior-test-key").expect("valid credential"))
        .base_url(TEST_BASE_URL)
        .http_client(http.clone())
        .build()
        .expect("client should build")
}

/// Event page in the shape the search endpoints return.
pub fn event_page(page: u32, events: usize, total: u64) -> Value {
    let events = (0..events)
        .map(|index| json!({"target": {"ip": format!("10.0.{page}.{index}"), "port": 443}}))
        .collect::<Vec<_>>();
    json!({
        "query": "port:443",
        "page": page,
        "pagesize": 5,
        "total": total,
        "events": events,
    })
}

pub fn page_param(request: &HttpRequest) -> Option<String> {
    request
        .url
        .split_once('?')
        .and_then(|(_, query)| {
            query
                .split('&')
                .find_map(|pair| pair.strip_prefix("page=").map(str::to_owned))
        })
}
