use serde::{Deserialize, Serialize};

/// Most stamps a single response can carry.
pub const MAX_STAMPS: usize = 3;

/// Advice recorded when a can is released with no text and no stamps.
pub const VALIDATED: &str = "[VALIDATED]";

/// Reaction stamps that can be pressed onto a response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Stamp {
    MeToo,
    Hug,
    Respect,
    Real,
    ItPasses,
}

impl Stamp {
    pub const ALL: [Stamp; 5] = [
        Stamp::MeToo,
        Stamp::Hug,
        Stamp::Respect,
        Stamp::Real,
        Stamp::ItPasses,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Stamp::MeToo => "ME TOO",
            Stamp::Hug => "HUG",
            Stamp::Respect => "RESPECT",
            Stamp::Real => "REAL",
            Stamp::ItPasses => "IT PASSES",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Stamp::MeToo => "( T_T)",
            Stamp::Hug => "(>^_^)><(^o^<)",
            Stamp::Respect => "d(-_- )",
            Stamp::Real => "[REAL]",
            Stamp::ItPasses => ">>>>>",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.label() == label)
    }

    /// The bracketed tag embedded in advice text.
    pub fn tag(self) -> String {
        format!("[{}]", self.label())
    }
}

/// Build the advice string for a response: up to three distinct stamp tags
/// followed by the trimmed text.
pub fn compose_advice(stamps: &[Stamp], text: &str) -> String {
    let mut picked: Vec<Stamp> = Vec::with_capacity(MAX_STAMPS);
    for stamp in stamps {
        if picked.len() == MAX_STAMPS {
            break;
        }
        if !picked.contains(stamp) {
            picked.push(*stamp);
        }
    }

    let tags = picked
        .iter()
        .map(|s| s.tag())
        .collect::<Vec<_>>()
        .join(" ");
    let text = text.trim();

    match (tags.is_empty(), text.is_empty()) {
        (true, true) => VALIDATED.to_string(),
        (true, false) => text.to_string(),
        (false, true) => tags,
        (false, false) => format!("{} {}", tags, text),
    }
}

/// Recognized stamps embedded in advice text, in order of appearance.
pub fn parse_stamps(advice: &str) -> Vec<Stamp> {
    let mut found = Vec::new();
    let mut rest = advice;
    while let Some(open) = rest.find('[') {
        let after = &rest[open + 1..];
        let Some(close) = after.find(']') else {
            break;
        };
        if let Some(stamp) = Stamp::from_label(&after[..close]) {
            found.push(stamp);
        }
        rest = &after[close + 1..];
    }
    found
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compose_with_text() {
        let advice = compose_advice(&[Stamp::MeToo, Stamp::Real], "  same here ");
        assert_eq!(advice, "[ME TOO] [REAL] same here");
    }

    #[test]
    fn test_compose_caps_and_dedupes() {
        let advice = compose_advice(
            &[Stamp::Hug, Stamp::Hug, Stamp::Respect, Stamp::Real, Stamp::ItPasses],
            "",
        );
        assert_eq!(advice, "[HUG] [RESPECT] [REAL]");
    }

    #[test]
    fn test_compose_empty_is_validated() {
        assert_eq!(compose_advice(&[], "   "), VALIDATED);
    }

    #[test]
    fn test_parse_stamps() {
        let stamps = parse_stamps("[ME TOO] [REAL] Literally me yesterday. [NOPE] [IT PASSES");
        assert_eq!(stamps, vec![Stamp::MeToo, Stamp::Real]);

        let composed = compose_advice(&[Stamp::ItPasses, Stamp::Hug], "keep swimming");
        assert_eq!(parse_stamps(&composed), vec![Stamp::ItPasses, Stamp::Hug]);
        assert!(parse_stamps(VALIDATED).is_empty());
    }

    #[test]
    fn test_icons_are_distinct() {
        let mut icons: Vec<&str> = Stamp::ALL.iter().map(|s| s.icon()).collect();
        icons.sort();
        icons.dedup();
        assert_eq!(icons.len(), Stamp::ALL.len());
        assert_eq!(Stamp::Respect.icon(), "d(-_- )");
    }

    #[test]
    fn test_stamp_serde_name() {
        assert_eq!(serde_json::to_string(&Stamp::MeToo).unwrap(), "\"ME_TOO\"");
        let s: Stamp = serde_json::from_str("\"IT_PASSES\"").unwrap();
        assert_eq!(s, Stamp::ItPasses);
    }
}
