use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::models_external::opponent::{RecentForm, RecentMatch, TacticalPlan};

#[derive(Serialize, Debug)]
pub struct MatchInfo<'a> {
    pub opponent: &'a str,
    pub date: &'a str,
    pub venue: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub competition: Option<&'a str>,
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct FixtureExport<'a> {
    #[serde(rename = "match")]
    pub match_info: MatchInfo<'a>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub statistics: Option<&'a Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tactical_plan: Option<&'a TacticalPlan>,
    pub export_date: String,
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct OpponentExport<'a> {
    pub opponent: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tactical_profile: Option<&'a Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recent_form: Option<&'a RecentForm>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub advanced_statistics: Option<&'a Value>,
    pub export_date: String,
}

/// Free-form tactical report assembled from whatever the analytics service
/// returned for one opponent.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct TacticalReport {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opponent: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub statistics: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tactical_plan: Option<TacticalPlan>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recent_matches: Option<Vec<RecentMatch>>,
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct TacticalReportExport<'a> {
    #[serde(flatten)]
    pub report: &'a TacticalReport,
    pub export_date: String,
}
