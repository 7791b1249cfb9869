#![allow(dead_code)]

use async_trait::async_trait;
use axum::extract::{Query, State};
use axum::http::{header, HeaderMap, StatusCode};
use axum::routing::get;
use axum::Router;
use ractor::rpc::CallResult;
use ractor::ActorRef;
use repo_favorites::actors::WidgetMessage;
use repo_favorites::error::{RepoFavoritesError, Result};
use repo_favorites::github::RepoSearch;
use repo_favorites::models::{RepositoryRecord, SearchQuery, WidgetSnapshot, WidgetStats};
use repo_favorites::notify::Notifier;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

pub fn record(id: u64, name: &str, owner: &str, stars: u32) -> RepositoryRecord {
    RepositoryRecord {
        id,
        name: name.to_string(),
        owner_name: owner.to_string(),
        star_count: stars,
    }
}

pub fn sample_records(count: usize) -> Vec<RepositoryRecord> {
    (0..count)
        .map(|i| {
            let name = format!("repo-{}", i);
            let owner = format!("owner-{}", i);
            record(100 + i as u64, &name, &owner, 10 * i as u32)
        })
        .collect()
}

/// Canned reply for [`FakeSearch`]
#[derive(Debug, Clone)]
pub enum FakeResponse {
    Records(Vec<RepositoryRecord>),
    Status(u16),
    MalformedBody,
}

/// In-memory search collaborator that records every query it receives
pub struct FakeSearch {
    pub queries: Mutex<Vec<SearchQuery>>,
    response: Mutex<FakeResponse>,
}

impl FakeSearch {
    pub fn new(response: FakeResponse) -> Arc<Self> {
        Arc::new(Self {
            queries: Mutex::new(Vec::new()),
            response: Mutex::new(response),
        })
    }

    pub fn set_response(&self, response: FakeResponse) {
        *self.response.lock().unwrap() = response;
    }

    pub fn queries(&self) -> Vec<SearchQuery> {
        self.queries.lock().unwrap().clone()
    }
}

#[async_trait]
impl RepoSearch for FakeSearch {
    async fn search_repositories(&self, query: &SearchQuery) -> Result<Vec<RepositoryRecord>> {
        self.queries.lock().unwrap().push(query.clone());
        let response = self.response.lock().unwrap().clone();
        match response {
            FakeResponse::Records(records) => Ok(records),
            FakeResponse::Status(status) => Err(RepoFavoritesError::HttpStatus(status)),
            FakeResponse::MalformedBody => {
                let err = serde_json::from_str::<serde_json::Value>("{\"items\": [").unwrap_err();
                Err(RepoFavoritesError::JsonError(err))
            }
        }
    }
}

/// Notifier that keeps every alert for inspection
#[derive(Default)]
pub struct RecordingNotifier {
    alerts: Mutex<Vec<String>>,
}

impl RecordingNotifier {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn alerts(&self) -> Vec<String> {
        self.alerts.lock().unwrap().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn alert(&self, message: &str) {
        self.alerts.lock().unwrap().push(message.to_string());
    }
}

pub async fn snapshot(widget: &ActorRef<WidgetMessage>) -> WidgetSnapshot {
    match widget.call(WidgetMessage::GetSnapshot, None).await {
        Ok(CallResult::Success(snapshot)) => snapshot,
        Ok(CallResult::Timeout) => panic!("Timed out waiting for widget snapshot"),
        Ok(CallResult::SenderError) => panic!("Widget dropped the snapshot reply"),
        Err(e) => panic!("Failed to get widget snapshot: {}", e),
    }
}

pub async fn stats(widget: &ActorRef<WidgetMessage>) -> WidgetStats {
    match widget.call(WidgetMessage::GetStats, None).await {
        Ok(CallResult::Success(stats)) => stats,
        Ok(CallResult::Timeout) => panic!("Timed out waiting for widget stats"),
        Ok(CallResult::SenderError) => panic!("Widget dropped the stats reply"),
        Err(e) => panic!("Failed to get widget stats: {}", e),
    }
}

/// Request seen by the stub search endpoint
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub params: HashMap<String, String>,
    pub authorization: Option<String>,
    pub accept: Option<String>,
}

#[derive(Clone)]
struct StubState {
    status: StatusCode,
    body: String,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

/// Local stand-in for `GET /search/repositories`
pub struct StubGitHub {
    pub base_url: String,
    pub requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl StubGitHub {
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }
}

async fn search_handler(
    State(state): State<StubState>,
    Query(params): Query<HashMap<String, String>>,
    headers: HeaderMap,
) -> (StatusCode, [(header::HeaderName, &'static str); 1], String) {
    let header_value = |name: header::HeaderName| {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(|s| s.to_string())
    };

    state.requests.lock().unwrap().push(RecordedRequest {
        params,
        authorization: header_value(header::AUTHORIZATION),
        accept: header_value(header::ACCEPT),
    });

    (
        state.status,
        [(header::CONTENT_TYPE, "application/json")],
        state.body.clone(),
    )
}

pub async fn spawn_stub_github(status: StatusCode, body: impl Into<String>) -> StubGitHub {
    let requests = Arc::new(Mutex::new(Vec::new()));
    let state = StubState {
        status,
        body: body.into(),
        requests: requests.clone(),
    };

    let app = Router::new()
        .route("/search/repositories", get(search_handler))
        .with_state(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind stub server");
    let addr = listener.local_addr().expect("Stub server has no address");

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Stub server failed");
    });

    StubGitHub {
        base_url: format!("http://{}", addr),
        requests,
    }
}

pub fn search_payload(records: &[RepositoryRecord]) -> String {
    let items: Vec<serde_json::Value> = records
        .iter()
        .map(|r| {
            serde_json::json!({
                "id": r.id,
                "name": r.name,
                "full_name": format!("{}/{}", r.owner_name, r.name),
                "owner": { "login": r.owner_name, "id": 1 },
                "stargazers_count": r.star_count,
                "private": false
            })
        })
        .collect();

    serde_json::json!({
        "total_count": records.len(),
        "incomplete_results": false,
        "items": items
    })
    .to_string()
}
