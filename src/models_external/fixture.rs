use serde::{Deserialize, Serialize};

use crate::models::ExternalId;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum FixtureStatus {
    Upcoming,
    Finished,
    /// Postponed, cancelled or anything else the feed comes up with.
    #[default]
    #[serde(other)]
    Unknown,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub enum MatchResult {
    W,
    L,
    D,
    #[serde(other)]
    Unknown,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Score {
    pub display: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub home: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub away: Option<u16>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Fixture {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ExternalId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opponent_id: Option<ExternalId>,
    #[serde(default)]
    pub opponent_name: String,
    #[serde(default)]
    pub date: String,
    #[serde(alias = "is_gil_home", default)]
    pub is_home: bool,
    #[serde(default)]
    pub status: FixtureStatus,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<MatchResult>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<Score>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub competition: Option<String>,
}

impl Fixture {
    pub fn is_upcoming(&self) -> bool {
        self.status == FixtureStatus::Upcoming
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct FixturesRsp {
    #[serde(default)]
    pub fixtures: Vec<Fixture>,
    #[serde(default)]
    pub upcoming_count: u16,
}

impl FixturesRsp {
    /// First fixture that can still be analyzed against the given opponent.
    pub fn find_upcoming(&self, opponent_id: &str) -> Option<&Fixture> {
        self.fixtures.iter()
            .filter(|e| e.is_upcoming())
            .find(|e| e.opponent_id.as_ref().map_or(false, |id| id.matches(opponent_id)))
    }
}
