use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::models::{ExternalId, StatValue};

// Keys this crate does not know about are kept in `extra`. Numbers may arrive
// quoted, see `StatValue`.

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct OpponentProfile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub formation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub playing_style: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avg_possession: Option<StatValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avg_goals: Option<StatValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub strengths: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weaknesses: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_match: Option<LastMatch>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recent_matches: Option<Vec<RecentMatch>>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct LastMatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub goals_scored: Option<StatValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub goals_conceded: Option<StatValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub possession: Option<StatValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shots: Option<StatValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shots_on_target: Option<StatValue>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct RecentMatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub goals_scored: Option<StatValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub goals_conceded: Option<StatValue>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct RecentForm {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team_name: Option<String>,
    #[serde(default)]
    pub recent_matches: Vec<RecentMatch>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct TacticalPlan {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recommended_formation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key_recommendations: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub defensive_approach: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attacking_approach: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub set_pieces: Option<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct TacticalPlanRsp {
    #[serde(default)]
    pub opponent: Option<String>,
    #[serde(default)]
    pub tactical_plan: TacticalPlan,
    #[serde(default)]
    pub generated_at: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct OpponentSummary {
    pub id: ExternalId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct OpponentsRsp {
    #[serde(default)]
    pub season: Option<u16>,
    #[serde(default)]
    pub opponents: Vec<OpponentSummary>,
    #[serde(default)]
    pub count: usize,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::models::StatValue;

    use super::{OpponentProfile, TacticalPlanRsp};

    #[test]
    fn profile_keeps_unknown_keys() {
        let raw = r#"{
            "team_name": "Braga",
            "formation": "4-2-3-1",
            "strengths": ["Wing play", "Set pieces"],
            "pressing_intensity": 71.5,
            "last_match": { "result": "W", "score": "2-0", "xg": 1.8 }
        }"#;
        let profile: OpponentProfile = serde_json::from_str(raw).unwrap();
        assert_eq!(profile.team_name.as_deref(), Some("Braga"));
        assert_eq!(profile.strengths.as_ref().map(|e| e.len()), Some(2));
        assert_eq!(profile.weaknesses, None);
        assert_eq!(profile.extra.get("pressing_intensity").and_then(|e| e.as_f64()), Some(71.5));
        assert!(profile.last_match.as_ref().unwrap().extra.contains_key("xg"));

        let back = serde_json::to_value(&profile).unwrap();
        assert_eq!(back, serde_json::from_str::<serde_json::Value>(raw).unwrap());
    }

    #[test]
    fn tactical_plan_rsp_without_plan() {
        let rsp: TacticalPlanRsp = serde_json::from_str(r#"{ "opponent": "Porto" }"#).unwrap();
        assert_eq!(rsp.opponent.as_deref(), Some("Porto"));
        assert_eq!(rsp.tactical_plan.recommended_formation, None);
    }

    #[test]
    fn profile_with_quoted_numbers() {
        let raw = json!({
            "team_name": "Braga",
            "formation": "4-4-2",
            "strengths": ["A"],
            "last_match": { "result": "W", "possession": "55", "shots": 12.0 }
        });
        let profile: OpponentProfile = serde_json::from_value(raw.clone()).unwrap();
        let last = profile.last_match.as_ref().unwrap();
        assert_eq!(last.possession, Some(StatValue::Text("55".to_string())));
        assert_eq!(last.shots.as_ref().map(|e| e.to_string()).as_deref(), Some("12"));
        assert_eq!(serde_json::to_value(&profile).unwrap(), raw);
    }
}
