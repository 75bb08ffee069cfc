use serde::{Deserialize, Serialize};

use crate::models::csv_bool;

/// One row of the teams CSV
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamRecord {
    #[serde(rename = "Team Name")]
    pub team_name: String,
    #[serde(rename = "Team Captain")]
    pub team_captain: String,
    #[serde(rename = "Team Email")]
    pub team_email: String,
    /// Comma separated, stored verbatim
    #[serde(rename = "Team Members")]
    pub team_members: String,
    #[serde(rename = "Beta Interested", with = "csv_bool")]
    pub beta_interested: bool,
}

impl TeamRecord {
    pub const HEADERS: [&'static str; 5] = [
        "Team Name",
        "Team Captain",
        "Team Email",
        "Team Members",
        "Beta Interested",
    ];
}
