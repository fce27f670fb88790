use std::{collections::HashMap, net::SocketAddr, sync::Arc, time::Duration};

use axum::{Router, extract::{Path, Query, State}, response::IntoResponse, Json, routing::get};
use reqwest::StatusCode;
use serde::Deserialize;
use serde_json::{json, Value};
use tokio::{sync::RwLock, task::JoinHandle};

#[derive(Deserialize)]
struct OpponentQuery {
    opponent_name: Option<String>,
}

/// Canned analytics responses, keyed by opponent id (or team name for recent form).
#[derive(Default)]
pub struct AnalyticsData {
    pub fixtures: Vec<Value>,
    pub opponents: Vec<Value>,
    pub stats: HashMap<String, Value>,
    pub recent: HashMap<String, Value>,
    pub plans: HashMap<String, Value>,
    pub analyses: HashMap<String, Value>,
    pub requests: Vec<String>,
}

type SafeData = Arc<RwLock<AnalyticsData>>;

pub struct ExternalServer {
    port: u16,
    handles: Vec<JoinHandle<()>>,
    data: SafeData,
}

impl Drop for ExternalServer {
    fn drop(&mut self) {
        for e in &self.handles {
            e.abort();
        }
    }
}

impl ExternalServer {
    pub fn new(port: u16) -> ExternalServer {
        ExternalServer { port, handles: vec![], data: Arc::new(RwLock::new(AnalyticsData::default())) }
    }

    pub async fn start(&mut self) {
        let external_mock = {
            let port = self.port;
            let data = self.data.clone();
            tokio::spawn(async move { ExternalServer::serve_external_data(data, port).await })
        };
        self.handles.push(external_mock);

        tokio::time::sleep(Duration::from_secs(1)).await; // wait for mock to start
    }

    pub fn get_url(&self) -> String {
        format!("http://localhost:{}/api/v1", self.port)
    }

    pub async fn add_fixture(&self, fixture: Value) {
        self.data.write().await.fixtures.push(fixture);
    }

    pub async fn add_opponent(&self, opponent: Value) {
        self.data.write().await.opponents.push(opponent);
    }

    pub async fn add_stats(&self, opponent_id: &str, stats: Value) {
        self.data.write().await.stats.insert(opponent_id.to_string(), stats);
    }

    pub async fn add_recent(&self, team_name: &str, recent: Value) {
        self.data.write().await.recent.insert(team_name.to_string(), recent);
    }

    pub async fn add_plan(&self, opponent_id: &str, plan: Value) {
        self.data.write().await.plans.insert(opponent_id.to_string(), plan);
    }

    pub async fn add_analysis(&self, opponent_id: &str, analysis: Value) {
        self.data.write().await.analyses.insert(opponent_id.to_string(), analysis);
    }

    pub async fn get_requests(&self) -> Vec<String> {
        self.data.read().await.requests.clone()
    }

    async fn serve_external_data(data: SafeData, port: u16) {
        let addr = SocketAddr::from(([127, 0, 0, 1], port));
        let app = Router::new()
            .route("/api/v1/fixtures/all", get(ExternalServer::get_fixtures))
            .route("/api/v1/opponents", get(ExternalServer::get_opponents))
            .route("/api/v1/opponents/:team_name/recent", get(ExternalServer::get_recent))
            .route("/api/v1/opponent-stats/:opponent_id", get(ExternalServer::get_stats))
            .route("/api/v1/tactical-plan/:opponent_id", get(ExternalServer::get_plan))
            .route("/api/v1/match-analysis/:opponent_id", get(ExternalServer::get_analysis))
            .with_state(data);

        axum::Server::bind(&addr)
            .serve(app.into_make_service())
            .await
            .unwrap();
    }

    async fn get_fixtures(State(data): State<SafeData>) -> impl IntoResponse {
        let mut data = data.write().await;
        data.requests.push("fixtures".to_string());
        let upcoming_count = data.fixtures.iter().filter(|e| e["status"] == "upcoming").count();
        Json(json!({ "fixtures": data.fixtures, "upcoming_count": upcoming_count }))
    }

    async fn get_opponents(State(data): State<SafeData>) -> impl IntoResponse {
        let mut data = data.write().await;
        data.requests.push("opponents".to_string());
        Json(json!({ "season": 2025, "opponents": data.opponents, "count": data.opponents.len() }))
    }

    async fn get_recent(Path(team_name): Path<String>, State(data): State<SafeData>) -> impl IntoResponse {
        let mut data = data.write().await;
        data.requests.push(format!("recent {team_name}"));
        ExternalServer::found(data.recent.get(&team_name).cloned())
    }

    async fn get_stats(Path(opponent_id): Path<String>, Query(query): Query<OpponentQuery>, State(data): State<SafeData>) -> impl IntoResponse {
        let mut data = data.write().await;
        data.requests.push(format!("stats {opponent_id} {}", query.opponent_name.unwrap_or_default()));
        ExternalServer::found(data.stats.get(&opponent_id).cloned())
    }

    async fn get_plan(Path(opponent_id): Path<String>, Query(query): Query<OpponentQuery>, State(data): State<SafeData>) -> impl IntoResponse {
        let mut data = data.write().await;
        data.requests.push(format!("plan {opponent_id} {}", query.opponent_name.unwrap_or_default()));
        ExternalServer::found(data.plans.get(&opponent_id).cloned())
    }

    async fn get_analysis(Path(opponent_id): Path<String>, Query(query): Query<OpponentQuery>, State(data): State<SafeData>) -> impl IntoResponse {
        let mut data = data.write().await;
        data.requests.push(format!("analysis {opponent_id} {}", query.opponent_name.unwrap_or_default()));
        ExternalServer::found(data.analyses.get(&opponent_id).cloned())
    }

    fn found(value: Option<Value>) -> Result<Json<Value>, (StatusCode, String)> {
        value.map(Json).ok_or((StatusCode::NOT_FOUND, "Not found".to_string()))
    }
}
