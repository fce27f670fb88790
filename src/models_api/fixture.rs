use serde::{Deserialize, Serialize};

use crate::locale;
use crate::models_external::fixture::{Fixture, FixtureStatus, FixturesRsp, MatchResult};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub enum Venue {
    HOME,
    AWAY,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ApiFixture {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opponent_id: Option<String>,
    pub opponent_name: String,
    pub date: String,
    pub date_label: Option<String>,
    pub venue: Venue,
    pub status: FixtureStatus,
    /// Only upcoming fixtures link to a tactical analysis.
    pub analyzable: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result_label: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ApiFixtures {
    pub upcoming_count: u16,
    pub fixtures: Vec<ApiFixture>,
}

fn result_label(result: MatchResult) -> Option<&'static str> {
    match result {
        MatchResult::W => Some("✓ WIN"),
        MatchResult::L => Some("✗ LOSS"),
        MatchResult::D => Some("- DRAW"),
        MatchResult::Unknown => None,
    }
}

impl From<&Fixture> for ApiFixture {
    fn from(value: &Fixture) -> Self {
        let analyzable = value.is_upcoming();
        let finished = value.status == FixtureStatus::Finished;
        ApiFixture {
            id: value.id.as_ref().map(|e| e.to_string()),
            opponent_id: value.opponent_id.as_ref().map(|e| e.to_string()),
            opponent_name: value.opponent_name.clone(),
            date: value.date.clone(),
            date_label: locale::short_month_day(&value.date),
            venue: if value.is_home { Venue::HOME } else { Venue::AWAY },
            status: value.status.clone(),
            analyzable,
            score: value.score.as_ref().filter(|_| finished).map(|e| e.display.clone()),
            result_label: value.result.filter(|_| finished).and_then(result_label).map(|e| e.to_string()),
        }
    }
}

impl From<&FixturesRsp> for ApiFixtures {
    fn from(value: &FixturesRsp) -> Self {
        ApiFixtures {
            upcoming_count: value.upcoming_count,
            fixtures: value.fixtures.iter().map(|e| e.into()).collect(),
        }
    }
}
