use serde::{Deserialize, Serialize};

use crate::models::{AdviceType, Can, Industry, ReleasedSardine};
use crate::stamps::Stamp;
use crate::stations::Station;

// -- Cans --

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CreateCanRequest {
    pub text: String,
    #[serde(default)]
    pub industry: String,
    #[serde(default)]
    pub advice_needed: String,
    #[serde(default)]
    pub mood: String,
    #[serde(default)]
    pub station_id: Option<String>,
}

/// A can together with its rendered frame.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CanView {
    pub can: Can,
    pub art: Vec<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct RandomCanQuery {
    pub industry: Option<String>,
    pub advice: Option<String>,
}

/// A can with how many responses it has received so far.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManifestEntry {
    pub can: Can,
    pub response_count: usize,
}

// -- Responses --

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ReleaseRequest {
    #[serde(default)]
    pub advice: String,
    #[serde(default)]
    pub stamps: Vec<Stamp>,
}

/// A released sardine as it swims in the aquarium.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AquariumFish {
    #[serde(flatten)]
    pub sardine: ReleasedSardine,
    pub glyph: String,
    pub stamps: Vec<Stamp>,
}

// -- Preview --

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct PreviewRequest {
    pub text: String,
    #[serde(default)]
    pub industry: String,
    /// Render the mascot mid-speech.
    #[serde(default)]
    pub talking: bool,
    /// Animation frame counter for a talking mascot.
    #[serde(default)]
    pub tick: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PreviewResponse {
    pub fish: String,
    pub can: Vec<String>,
    pub mascot: Vec<String>,
    pub distressed: bool,
}

// -- Labels --

#[derive(Debug, Clone, Serialize)]
pub struct IndustryLabel {
    pub label: &'static str,
    pub line: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct StampLabel {
    pub stamp: Stamp,
    pub label: &'static str,
    pub icon: &'static str,
    pub tag: String,
}

/// Every choice a client can offer when sealing, browsing or answering a can.
#[derive(Debug, Clone, Serialize)]
pub struct Labels {
    pub industries: Vec<IndustryLabel>,
    pub advice: Vec<&'static str>,
    pub stamps: Vec<StampLabel>,
}

impl Labels {
    pub fn all() -> Self {
        Self {
            industries: Industry::ALL
                .into_iter()
                .map(|i| IndustryLabel {
                    label: i.as_str(),
                    line: i.line(),
                })
                .collect(),
            advice: AdviceType::ALL.into_iter().map(AdviceType::as_str).collect(),
            stamps: Stamp::ALL
                .into_iter()
                .map(|s| StampLabel {
                    stamp: s,
                    label: s.label(),
                    icon: s.icon(),
                    tag: s.tag(),
                })
                .collect(),
        }
    }
}

// -- Stations --

#[derive(Debug, Clone, Serialize)]
pub struct StationView {
    pub station: &'static Station,
    pub neighbors: Vec<&'static Station>,
}
