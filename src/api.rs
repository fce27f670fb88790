use std::{net::SocketAddr, sync::Arc};

use axum::{Router, extract::{Path, Query, State}, http::header, response::{IntoResponse, Response}, Json};
use chrono::Utc;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use tower::ServiceBuilder;
use tower_http::{compression::CompressionLayer, trace::TraceLayer};
use tracing::log;

use crate::LogResult;
use crate::export_service::{subject_name, ExportService, ReportFile};
use crate::models::ExportFormat;
use crate::models_api::{analysis::ApiMatchAnalysis, fixture::ApiFixtures, opponent::{ApiOpponentDetails, ApiOpponents}};
use crate::report_service::ReportService;
use crate::rest_client::AnalyticsClient;

#[derive(Clone)]
pub struct ApiState {
    pub client: AnalyticsClient,
    pub exporter: Arc<ExportService>,
    pub report_service: ReportService,
}

impl ApiState {
    pub fn new(client: AnalyticsClient, exporter: ExportService) -> ApiState {
        let exporter = Arc::new(exporter);
        let report_service = ReportService::new(client.clone(), exporter.clone());
        ApiState { client, exporter, report_service }
    }
}

/// The error banner shown in place of a view.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

#[derive(Serialize, Deserialize)]
pub struct ApiErrorBody {
    pub error: String,
}

impl ApiError {
    fn upstream(view: &str, err: anyhow::Error) -> ApiError {
        log::error!("[API] Failed loading {view}: {err:#}");
        ApiError { status: StatusCode::BAD_GATEWAY, message: format!("Error loading {view}: {err:#}") }
    }

    fn bad_request(message: &str) -> ApiError {
        ApiError { status: StatusCode::BAD_REQUEST, message: message.to_string() }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(ApiErrorBody { error: self.message })).into_response()
    }
}

#[derive(Deserialize)]
pub struct OpponentQuery {
    opponent_name: Option<String>,
}

#[derive(Deserialize)]
pub struct ExportQuery {
    opponent_name: Option<String>,
    format: Option<String>,
}

impl ExportQuery {
    fn get_format(&self) -> Result<ExportFormat, ApiError> {
        match &self.format {
            None => Ok(ExportFormat::Json),
            Some(format) => format.parse().map_err(|_| ApiError::bad_request("Invalid format, expected json or text")),
        }
    }
}

fn required_name(query: &OpponentQuery) -> Result<&str, ApiError> {
    subject_name(query.opponent_name.as_deref())
        .ok_or_else(|| ApiError::bad_request("Missing opponent_name"))
}

pub struct Api;
impl Api {
    pub fn router(state: ApiState) -> Router {
        Router::new()
            .route("/fixtures", axum::routing::get(Api::get_fixtures))
            .route("/fixtures/:opponent_id/analysis", axum::routing::get(Api::get_match_analysis))
            .route("/opponents", axum::routing::get(Api::get_opponents))
            .route("/opponents/:opponent_id", axum::routing::get(Api::get_opponent))

            .route("/export/fixture/:opponent_id", axum::routing::get(Api::export_fixture))
            .route("/export/opponent/:opponent_id", axum::routing::get(Api::export_opponent))
            .route("/export/report/:opponent_id", axum::routing::get(Api::export_report))

            .route("/", axum::routing::get(Api::root))
            .with_state(state)
            .layer(ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CompressionLayer::new())
            )
    }

    pub async fn serve(port: u16, state: ApiState) -> anyhow::Result<()> {
        let app = Api::router(state);
        let addr = SocketAddr::from(([0, 0, 0, 0], port));
        log::info!("[API] Listening on {}", addr);
        axum::Server::bind(&addr)
            .serve(app.into_make_service())
            .await?;
        Ok(())
    }

    async fn root(State(state): State<ApiState>) -> String {
        let club = state.exporter.club();
        format!("{} {}", club.name, club.platform_name)
    }

    async fn get_fixtures(State(state): State<ApiState>) -> Result<Json<ApiFixtures>, ApiError> {
        let rsp = state.client.get_fixtures().await
            .map_err(|e| ApiError::upstream("fixtures", e))?;
        Ok(Json((&rsp).into()))
    }

    async fn get_match_analysis(
        Path(opponent_id): Path<String>,
        Query(query): Query<OpponentQuery>,
        State(state): State<ApiState>) -> Result<Json<ApiMatchAnalysis>, ApiError> {

        let name = required_name(&query)?;
        let analysis = state.client.get_match_analysis(&opponent_id, name).await
            .map_err(|e| ApiError::upstream("tactical analysis", e))?;
        Ok(Json(ApiMatchAnalysis::new(&state.exporter.club().name, name, &analysis)))
    }

    async fn get_opponents(State(state): State<ApiState>) -> Result<Json<ApiOpponents>, ApiError> {
        let rsp = state.client.get_opponents().await
            .map_err(|e| ApiError::upstream("opponents", e))?;
        Ok(Json(ApiOpponents::new(rsp, &state.exporter.club().name)))
    }

    async fn get_opponent(
        Path(opponent_id): Path<String>,
        Query(query): Query<OpponentQuery>,
        State(state): State<ApiState>) -> Result<Json<ApiOpponentDetails>, ApiError> {

        let name = required_name(&query)?;
        let (profile, recent_form) = futures::join!(
            state.client.get_opponent_stats(&opponent_id, name),
            state.client.get_recent_form(name),
        );
        let profile = profile.map_err(|e| ApiError::upstream("opponent", e))?;
        Ok(Json(ApiOpponentDetails {
            id: opponent_id,
            name: name.to_string(),
            profile,
            recent_form: recent_form.ok_log("[API] Recent form unavailable"),
        }))
    }

    async fn export_fixture(
        Path(opponent_id): Path<String>,
        Query(query): Query<ExportQuery>,
        State(state): State<ApiState>) -> Result<Response, ApiError> {

        let format = query.get_format()?;
        let file = state.report_service.fixture_report(&opponent_id, format, Utc::now()).await
            .map_err(|e| ApiError::upstream("fixture analysis", e))?;
        Ok(download(file))
    }

    async fn export_opponent(
        Path(opponent_id): Path<String>,
        Query(query): Query<ExportQuery>,
        State(state): State<ApiState>) -> Result<Response, ApiError> {

        let format = query.get_format()?;
        let file = state.report_service.opponent_report(&opponent_id, query.opponent_name.as_deref(), format, Utc::now()).await;
        Ok(download(file))
    }

    async fn export_report(
        Path(opponent_id): Path<String>,
        Query(query): Query<ExportQuery>,
        State(state): State<ApiState>) -> Result<Response, ApiError> {

        let format = query.get_format()?;
        let file = state.report_service.tactical_report(&opponent_id, query.opponent_name.as_deref(), format, Utc::now()).await;
        Ok(download(file))
    }
}

/// No report means nothing to save: `204` without a body.
fn download(file: Option<ReportFile>) -> Response {
    match file {
        Some(file) => (
            [
                (header::CONTENT_TYPE, file.content_type().to_string()),
                (header::CONTENT_DISPOSITION, content_disposition(&file.file_name)),
            ],
            file.body,
        ).into_response(),
        None => StatusCode::NO_CONTENT.into_response(),
    }
}

/// Plain `filename` for old clients plus the RFC 5987 form for names outside ASCII.
fn content_disposition(file_name: &str) -> String {
    let fallback: String = file_name.chars()
        .map(|c| if c.is_ascii_graphic() && c != '"' && c != '\\' { c } else { '_' })
        .collect();
    let encoded: String = file_name.bytes()
        .map(|b| match b {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'.' | b'_' | b'~' => (b as char).to_string(),
            _ => format!("%{b:02X}"),
        })
        .collect();
    format!("attachment; filename=\"{fallback}\"; filename*=UTF-8''{encoded}")
}
