use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::models_external::opponent::{OpponentsRsp, RecentForm};

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ApiOpponent {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ApiOpponents {
    pub season: Option<u16>,
    pub opponents: Vec<ApiOpponent>,
}

impl ApiOpponents {
    /// The club itself shows up in the league's team list.
    pub fn new(rsp: OpponentsRsp, club_name: &str) -> ApiOpponents {
        let opponents = rsp.opponents.into_iter()
            .filter(|e| !is_same_club(&e.name, club_name))
            .map(|e| ApiOpponent { id: e.id.to_string(), name: e.name, logo: e.logo })
            .collect();
        ApiOpponents { season: rsp.season, opponents }
    }
}

fn is_same_club(name: &str, club_name: &str) -> bool {
    let name = name.to_lowercase();
    let club_name = club_name.to_lowercase();
    name == club_name || club_name.starts_with(&format!("{name} "))
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ApiOpponentDetails {
    pub id: String,
    pub name: String,
    pub profile: Value,
    pub recent_form: Option<RecentForm>,
}
