use serde::{Deserialize, Serialize};

/// A national team taking part in the tournament.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Team {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub country: String,
    #[serde(rename = "logoUrl", default)]
    pub logo_url: String,
}

/// Body posted to `/teams/add`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewTeam {
    pub name: String,
    pub country: String,
    #[serde(rename = "logoUrl")]
    pub logo_url: String,
}
