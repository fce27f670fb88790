use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct TeamForm {
    #[serde(default)]
    pub team_name: Option<String>,
    #[serde(default)]
    pub form_string: String,
    #[serde(default)]
    pub goals_scored: u16,
    #[serde(default)]
    pub goals_conceded: u16,
    #[serde(default)]
    pub clean_sheets: u16,
    #[serde(default)]
    pub avg_goals_conceded: Option<f64>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Vulnerability {
    pub zone: String,
    pub severity: String,
    #[serde(default)]
    pub detail: String,
    #[serde(default)]
    pub coaching_tip: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct DefensiveVulnerabilities {
    #[serde(default)]
    pub vulnerabilities: Vec<Vulnerability>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct GamePhases {
    #[serde(default)]
    pub first_15min: String,
    #[serde(default)]
    pub minutes_15_45: String,
    #[serde(default)]
    pub half_time_adjustments: String,
    #[serde(default)]
    pub minutes_45_75: String,
    #[serde(default)]
    pub final_15min: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct GamePlan {
    #[serde(default)]
    pub formation_recommendation: String,
    #[serde(default)]
    pub game_phases: GamePhases,
    #[serde(default)]
    pub key_tactical_points: Vec<String>,
    #[serde(default)]
    pub player_instructions: Vec<String>,
    #[serde(default)]
    pub set_piece_strategy: String,
}

/// Match analysis document served by `match-analysis/{opponent_id}`.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct TacticalAnalysis {
    #[serde(rename = "match", default)]
    pub match_label: Option<String>,
    #[serde(alias = "gil_vicente_form", default)]
    pub club_form: TeamForm,
    #[serde(default)]
    pub opponent_form: TeamForm,
    #[serde(default)]
    pub defensive_vulnerabilities: DefensiveVulnerabilities,
    #[serde(default)]
    pub tactical_game_plan: GamePlan,
    #[serde(default)]
    pub opponent_advanced_stats: Option<Value>,
    #[serde(default)]
    pub generated_at: Option<String>,
}
