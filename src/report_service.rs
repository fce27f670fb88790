use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::log;

use crate::LogResult;
use crate::export_service::{subject_name, ExportService, ReportFile};
use crate::models::ExportFormat;
use crate::models_api::export::TacticalReport;
use crate::rest_client::AnalyticsClient;

/// Collects what each report needs from the analytics service and hands it to
/// the exporter. Optional parts that fail to load are left out of the report.
#[derive(Clone)]
pub struct ReportService {
    client: AnalyticsClient,
    exporter: Arc<ExportService>,
}

impl ReportService {
    pub fn new(client: AnalyticsClient, exporter: Arc<ExportService>) -> ReportService {
        ReportService { client, exporter }
    }

    /// Analysis report for the next fixture against `opponent_id`. Fails only
    /// when the fixtures themselves can't be loaded.
    pub async fn fixture_report(&self, opponent_id: &str, format: ExportFormat, now: DateTime<Utc>) -> anyhow::Result<Option<ReportFile>> {
        let fixtures = self.client.get_fixtures().await?;
        let Some(fixture) = fixtures.find_upcoming(opponent_id) else {
            log::info!("[REPORT] No upcoming fixture against {opponent_id}");
            return Ok(None);
        };

        let name = fixture.opponent_name.as_str();
        let (statistics, tactical_plan) = futures::join!(
            self.client.get_opponent_stats(opponent_id, name),
            self.client.get_tactical_plan(opponent_id, name),
        );
        let statistics = statistics.ok_log("[REPORT] Opponent statistics unavailable");
        let tactical_plan = tactical_plan.ok_log("[REPORT] Tactical plan unavailable").map(|e| e.tactical_plan);

        Ok(self.exporter.export_fixture_analysis(Some(fixture), statistics.as_ref(), tactical_plan.as_ref(), format, now))
    }

    pub async fn opponent_report(&self, opponent_id: &str, opponent_name: Option<&str>, format: ExportFormat, now: DateTime<Utc>) -> Option<ReportFile> {
        let name = subject_name(opponent_name)?;

        let (profile, recent_form, analysis) = futures::join!(
            self.client.get_opponent_stats(opponent_id, name),
            self.client.get_recent_form(name),
            self.client.get_match_analysis(opponent_id, name),
        );
        let profile = profile.ok_log("[REPORT] Opponent profile unavailable");
        let recent_form = recent_form.ok_log("[REPORT] Recent form unavailable");
        let advanced = analysis.ok_log("[REPORT] Match analysis unavailable")
            .and_then(|e| e.opponent_advanced_stats);

        self.exporter.export_opponent_analysis(Some(name), profile.as_ref(), recent_form.as_ref(), advanced.as_ref(), format, now)
    }

    pub async fn tactical_report(&self, opponent_id: &str, opponent_name: Option<&str>, format: ExportFormat, now: DateTime<Utc>) -> Option<ReportFile> {
        let name = subject_name(opponent_name)?;

        let (plan, profile, recent_form) = futures::join!(
            self.client.get_tactical_plan(opponent_id, name),
            self.client.get_opponent_stats(opponent_id, name),
            self.client.get_recent_form(name),
        );
        let plan = plan.ok_log("[REPORT] Tactical plan unavailable");
        let statistics = profile.ok_log("[REPORT] Opponent statistics unavailable");

        let report = TacticalReport {
            opponent: Some(name.to_string()),
            statistics,
            tactical_plan: plan.map(|e| e.tactical_plan),
            recent_matches: recent_form.ok_log("[REPORT] Recent form unavailable").map(|e| e.recent_matches),
        };
        self.exporter.export_tactical_report(&report, format, now)
    }
}
