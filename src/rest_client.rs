use std::time::{Duration, Instant};

use anyhow::{anyhow, Context};
use reqwest::Url;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::log;

use crate::models_external::analysis::TacticalAnalysis;
use crate::models_external::fixture::FixturesRsp;
use crate::models_external::opponent::{OpponentsRsp, RecentForm, TacticalPlanRsp};

/// Read-only client for the remote analytics service. Every call is a single
/// GET; nothing is cached or retried.
#[derive(Clone)]
pub struct AnalyticsClient {
    base_url: Url,
    http: reqwest::Client,
}

impl AnalyticsClient {
    pub fn new(base_url: &str, timeout: Duration) -> anyhow::Result<AnalyticsClient> {
        let base_url = Url::parse(base_url)
            .with_context(|| format!("Invalid analytics url {base_url}"))?;
        if base_url.cannot_be_a_base() {
            return Err(anyhow!("Analytics url {base_url} cannot be a base"));
        }
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()?;
        Ok(AnalyticsClient { base_url, http })
    }

    pub async fn get_fixtures(&self) -> anyhow::Result<FixturesRsp> {
        self.get_call(&["fixtures", "all"], &[]).await
    }

    pub async fn get_match_analysis(&self, opponent_id: &str, opponent_name: &str) -> anyhow::Result<TacticalAnalysis> {
        self.get_call(&["match-analysis", opponent_id], &[("opponent_name", opponent_name)]).await
    }

    pub async fn get_opponents(&self) -> anyhow::Result<OpponentsRsp> {
        self.get_call(&["opponents"], &[]).await
    }

    /// Kept as raw JSON; exports pass it on as received.
    pub async fn get_opponent_stats(&self, opponent_id: &str, opponent_name: &str) -> anyhow::Result<Value> {
        self.get_call(&["opponent-stats", opponent_id], &[("opponent_name", opponent_name)]).await
    }

    pub async fn get_recent_form(&self, team_name: &str) -> anyhow::Result<RecentForm> {
        self.get_call(&["opponents", team_name, "recent"], &[]).await
    }

    pub async fn get_tactical_plan(&self, opponent_id: &str, opponent_name: &str) -> anyhow::Result<TacticalPlanRsp> {
        self.get_call(&["tactical-plan", opponent_id], &[("opponent_name", opponent_name)]).await
    }

    pub fn get_url(&self, segments: &[&str]) -> anyhow::Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| anyhow!("Analytics url {} cannot be a base", self.base_url))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn get_call<T: DeserializeOwned>(&self, segments: &[&str], query: &[(&str, &str)]) -> anyhow::Result<T> {
        let before = Instant::now();
        let url = self.get_url(segments)?;
        let rsp = self.http.get(url.clone())
            .query(query)
            .send().await
            .with_context(|| format!("Request to {url} failed"))?
            .error_for_status()?;
        let res = rsp.json().await
            .with_context(|| format!("Could not parse response from {url}"));
        log::info!("[REST] Call {url} {:.2?}", before.elapsed());
        res
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::AnalyticsClient;

    #[test]
    fn build_urls() {
        let client = AnalyticsClient::new("http://localhost:8000/api/v1/", Duration::from_secs(1)).unwrap();
        assert_eq!(client.get_url(&["fixtures", "all"]).unwrap().as_str(), "http://localhost:8000/api/v1/fixtures/all");

        let client = AnalyticsClient::new("http://localhost:8000/api/v1", Duration::from_secs(1)).unwrap();
        assert_eq!(
            client.get_url(&["opponents", "Vitória Guimarães", "recent"]).unwrap().as_str(),
            "http://localhost:8000/api/v1/opponents/Vit%C3%B3ria%20Guimar%C3%A3es/recent"
        );
    }

    #[test]
    fn reject_invalid_base() {
        assert!(AnalyticsClient::new("not a url", Duration::from_secs(1)).is_err());
        assert!(AnalyticsClient::new("mailto:coach@example.com", Duration::from_secs(1)).is_err());
    }
}
