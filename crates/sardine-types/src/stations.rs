use serde::Serialize;

use crate::models::Industry;

/// A stop on the subway map. Cans and responses may point at one for
/// display grouping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Station {
    pub id: &'static str,
    pub name: &'static str,
    pub line: Industry,
    pub neighbors: &'static [&'static str],
}

pub const STATIONS: &[Station] = &[
    Station {
        id: "central",
        name: "Central Interchange",
        line: Industry::Other,
        neighbors: &["server-farm", "trading-floor", "studio-row", "campus"],
    },
    Station {
        id: "server-farm",
        name: "Server Farm",
        line: Industry::Tech,
        neighbors: &["central", "trading-floor"],
    },
    Station {
        id: "trading-floor",
        name: "Trading Floor",
        line: Industry::Finance,
        neighbors: &["central", "server-farm"],
    },
    Station {
        id: "studio-row",
        name: "Studio Row",
        line: Industry::Creative,
        neighbors: &["central", "food-court"],
    },
    Station {
        id: "food-court",
        name: "Food Court",
        line: Industry::Service,
        neighbors: &["studio-row", "job-centre"],
    },
    Station {
        id: "campus",
        name: "Campus",
        line: Industry::Student,
        neighbors: &["central", "job-centre"],
    },
    Station {
        id: "job-centre",
        name: "Job Centre",
        line: Industry::Unemployed,
        neighbors: &["food-court", "campus"],
    },
];

pub fn station(id: &str) -> Option<&'static Station> {
    STATIONS.iter().find(|s| s.id == id)
}

pub fn neighbors(id: &str) -> Vec<&'static Station> {
    station(id)
        .map(|s| s.neighbors.iter().filter_map(|n| station(n)).collect())
        .unwrap_or_default()
}
