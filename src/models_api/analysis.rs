use serde::{Deserialize, Serialize};

use crate::models_external::analysis::{GamePhases, TacticalAnalysis, TeamForm, Vulnerability};

/// Matches the five phase windows the analytics service plans for.
const PHASE_LABELS: [&str; 5] = [
    "0-15 min: Opening Phase",
    "15-45 min: First Half Build-up",
    "Half-Time Adjustments",
    "45-75 min: Second Half Execution",
    "75-90 min: Final Push",
];

const FORM_WINDOW: u16 = 5;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum SeverityLevel {
    Critical,
    High,
    Moderate,
}

impl SeverityLevel {
    pub fn from_severity(severity: &str) -> SeverityLevel {
        match severity.to_uppercase().as_str() {
            "CRITICAL" => SeverityLevel::Critical,
            "HIGH" => SeverityLevel::High,
            _ => SeverityLevel::Moderate,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ApiVulnerability {
    pub zone: String,
    pub severity: String,
    pub level: SeverityLevel,
    pub detail: String,
    pub coaching_tip: String,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ApiGamePhase {
    pub label: String,
    pub guidance: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum InstructionKind {
    KeyPoint,
    Player,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ApiInstruction {
    pub kind: InstructionKind,
    pub text: String,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ApiForm {
    pub team: String,
    pub form_string: String,
    pub goals_scored: u16,
    pub goals_conceded: u16,
    pub clean_sheets: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avg_goals_conceded: Option<f64>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ApiMatchAnalysis {
    pub title: String,
    pub formation_recommendation: String,
    pub vulnerabilities: Vec<ApiVulnerability>,
    pub game_phases: Vec<ApiGamePhase>,
    pub instructions: Vec<ApiInstruction>,
    pub set_piece_strategy: String,
    pub club_form: ApiForm,
    pub opponent_form: ApiForm,
}

impl From<&Vulnerability> for ApiVulnerability {
    fn from(value: &Vulnerability) -> Self {
        ApiVulnerability {
            zone: value.zone.clone(),
            severity: value.severity.clone(),
            level: SeverityLevel::from_severity(&value.severity),
            detail: value.detail.clone(),
            coaching_tip: value.coaching_tip.clone(),
        }
    }
}

impl GamePhases {
    fn to_api(&self) -> Vec<ApiGamePhase> {
        let guidance = [
            &self.first_15min,
            &self.minutes_15_45,
            &self.half_time_adjustments,
            &self.minutes_45_75,
            &self.final_15min,
        ];
        PHASE_LABELS.iter().zip(guidance)
            .map(|(label, guidance)| ApiGamePhase { label: label.to_string(), guidance: guidance.clone() })
            .collect()
    }
}

impl ApiForm {
    fn new(team: &str, form: &TeamForm, with_conceded_avg: bool) -> ApiForm {
        ApiForm {
            team: team.to_string(),
            form_string: form.form_string.clone(),
            goals_scored: form.goals_scored,
            goals_conceded: form.goals_conceded,
            clean_sheets: format!("{}/{FORM_WINDOW}", form.clean_sheets),
            avg_goals_conceded: form.avg_goals_conceded.filter(|_| with_conceded_avg),
        }
    }
}

impl ApiMatchAnalysis {
    pub fn new(club_name: &str, opponent_name: &str, analysis: &TacticalAnalysis) -> ApiMatchAnalysis {
        let plan = &analysis.tactical_game_plan;
        let instructions = plan.key_tactical_points.iter()
            .map(|e| ApiInstruction { kind: InstructionKind::KeyPoint, text: e.clone() })
            .chain(plan.player_instructions.iter()
                .map(|e| ApiInstruction { kind: InstructionKind::Player, text: e.clone() }))
            .collect();

        ApiMatchAnalysis {
            title: format!("{club_name} vs {opponent_name}"),
            formation_recommendation: plan.formation_recommendation.clone(),
            vulnerabilities: analysis.defensive_vulnerabilities.vulnerabilities.iter().map(|e| e.into()).collect(),
            game_phases: plan.game_phases.to_api(),
            instructions,
            set_piece_strategy: plan.set_piece_strategy.clone(),
            club_form: ApiForm::new(club_name, &analysis.club_form, false),
            opponent_form: ApiForm::new(opponent_name, &analysis.opponent_form, true),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::models_external::analysis::TacticalAnalysis;

    use super::{ApiMatchAnalysis, InstructionKind, SeverityLevel};

    #[test]
    fn map_match_analysis() {
        let analysis: TacticalAnalysis = serde_json::from_value(json!({
            "gil_vicente_form": { "form_string": "1W-2D-2L", "goals_scored": 4, "goals_conceded": 6, "clean_sheets": 1, "avg_goals_conceded": 1.2 },
            "opponent_form": { "form_string": "3W-0D-2L", "goals_scored": 8, "goals_conceded": 9, "clean_sheets": 0, "avg_goals_conceded": 1.8 },
            "defensive_vulnerabilities": { "vulnerabilities": [
                { "zone": "Right channel", "severity": "CRITICAL", "detail": "Slow CB", "coaching_tip": "Run in behind" },
                { "zone": "Zone 14", "severity": "MEDIUM", "detail": "DM drifts", "coaching_tip": "Shoot from range" }
            ] },
            "tactical_game_plan": {
                "formation_recommendation": "4-3-3",
                "game_phases": {
                    "first_15min": "Press", "minutes_15_45": "Build", "half_time_adjustments": "Adjust",
                    "minutes_45_75": "Execute", "final_15min": "Push"
                },
                "key_tactical_points": ["Win duels"],
                "player_instructions": ["LW: hug the line", "ST: pin the CBs"],
                "set_piece_strategy": "Crowd the keeper"
            }
        })).unwrap();

        let api = ApiMatchAnalysis::new("Gil Vicente", "Casa Pia", &analysis);
        assert_eq!(api.title, "Gil Vicente vs Casa Pia");
        assert_eq!(api.formation_recommendation, "4-3-3");
        assert_eq!(api.vulnerabilities[0].level, SeverityLevel::Critical);
        assert_eq!(api.vulnerabilities[1].level, SeverityLevel::Moderate);

        assert_eq!(api.game_phases.len(), 5);
        assert_eq!(api.game_phases[2].label, "Half-Time Adjustments");
        assert_eq!(api.game_phases[2].guidance, "Adjust");
        assert_eq!(api.game_phases[4].label, "75-90 min: Final Push");
        assert_eq!(api.game_phases[4].guidance, "Push");

        let kinds: Vec<InstructionKind> = api.instructions.iter().map(|e| e.kind.clone()).collect();
        assert_eq!(kinds, vec![InstructionKind::KeyPoint, InstructionKind::Player, InstructionKind::Player]);
        assert_eq!(api.instructions[2].text, "ST: pin the CBs");

        assert_eq!(api.club_form.clean_sheets, "1/5");
        assert_eq!(api.club_form.avg_goals_conceded, None);
        assert_eq!(api.opponent_form.team, "Casa Pia");
        assert_eq!(api.opponent_form.avg_goals_conceded, Some(1.8));
    }
}
