use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A sealed message. Cans are written once and never edited.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Can {
    pub id: String,
    pub text: String,
    #[serde(default)]
    pub industry: String,
    #[serde(default)]
    pub advice_needed: String,
    #[serde(default)]
    pub mood: String,
    pub timestamp: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ingredients: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub station_id: Option<String>,
}

impl Can {
    /// Character count of the message, which sizes its fish.
    pub fn text_length(&self) -> usize {
        self.text.chars().count()
    }
}

/// A response to a can. `original_can_id` is not checked against the
/// can collection; dangling ids are allowed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReleasedSardine {
    pub id: String,
    pub original_can_id: String,
    pub text_length: usize,
    pub advice_given: String,
    #[serde(default)]
    pub industry: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub station_id: Option<String>,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Industry {
    Tech,
    Finance,
    Creative,
    Service,
    Student,
    Unemployed,
    Other,
}

impl Industry {
    pub const ALL: [Industry; 7] = [
        Industry::Tech,
        Industry::Finance,
        Industry::Creative,
        Industry::Service,
        Industry::Student,
        Industry::Unemployed,
        Industry::Other,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Industry::Tech => "Tech",
            Industry::Finance => "Finance",
            Industry::Creative => "Creative",
            Industry::Service => "Service",
            Industry::Student => "Student",
            Industry::Unemployed => "Unemployed",
            Industry::Other => "Other",
        }
    }

    /// Parse a stored label. Empty and unknown labels yield `None`.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|i| i.as_str() == label)
    }

    /// Subway line shown next to the industry in listings.
    pub fn line(self) -> &'static str {
        match self {
            Industry::Tech => "Line 1",
            Industry::Finance => "Line 2",
            Industry::Creative => "Line 3",
            Industry::Service => "Line 4",
            Industry::Student => "Line 5",
            Industry::Unemployed => "Line 0",
            Industry::Other => "Line X",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AdviceType {
    Listen,
    Advice,
    #[serde(rename = "Quit!")]
    Quit,
    Hug,
}

impl AdviceType {
    pub const ALL: [AdviceType; 4] = [
        AdviceType::Listen,
        AdviceType::Advice,
        AdviceType::Quit,
        AdviceType::Hug,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            AdviceType::Listen => "Listen",
            AdviceType::Advice => "Advice",
            AdviceType::Quit => "Quit!",
            AdviceType::Hug => "Hug",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_can_json_shape() {
        let can = Can {
            id: "mock-9".into(),
            text: "hello".into(),
            industry: "Tech".into(),
            advice_needed: "Quit!".into(),
            mood: "tired".into(),
            timestamp: Utc::now(),
            ingredients: None,
            station_id: Some("s1".into()),
        };
        let v = serde_json::to_value(&can).unwrap();
        assert_eq!(v["adviceNeeded"], "Quit!");
        assert_eq!(v["stationId"], "s1");
        assert!(v.get("ingredients").is_none());

        let back: Can = serde_json::from_value(v).unwrap();
        assert_eq!(back, can);
    }

    #[test]
    fn test_released_json_shape() {
        let raw = r#"{
            "id": "r1",
            "originalCanId": "mock-1",
            "textLength": 42,
            "adviceGiven": "[HUG] hang in there",
            "industry": "Tech",
            "timestamp": "2025-01-02T03:04:05Z"
        }"#;
        let r: ReleasedSardine = serde_json::from_str(raw).unwrap();
        assert_eq!(r.original_can_id, "mock-1");
        assert_eq!(r.text_length, 42);
        assert_eq!(r.station_id, None);
    }

    #[test]
    fn test_labels() {
        assert_eq!(Industry::from_label("Finance"), Some(Industry::Finance));
        assert_eq!(Industry::from_label(""), None);
        assert_eq!(Industry::from_label("tech"), None);
        assert_eq!(Industry::Unemployed.line(), "Line 0");
        assert_eq!(AdviceType::Quit.as_str(), "Quit!");
        assert_eq!(
            serde_json::to_string(&AdviceType::Quit).unwrap(),
            "\"Quit!\""
        );
    }

    #[test]
    fn test_text_length_counts_chars() {
        let can = Can {
            id: "x".into(),
            text: "累了".into(),
            industry: String::new(),
            advice_needed: String::new(),
            mood: String::new(),
            timestamp: Utc::now(),
            ingredients: None,
            station_id: None,
        };
        assert_eq!(can.text_length(), 2);
    }
}
