use chrono::Utc;
use sardine_types::Can;

/// Example cans written to an empty store so browsing never comes up empty.
pub fn seed_cans() -> Vec<Can> {
    let now = Utc::now();
    let can = |id: &str,
               text: &str,
               industry: &str,
               advice: &str,
               mood: &str,
               ingredients: [&str; 2]| Can {
        id: id.to_string(),
        text: text.to_string(),
        industry: industry.to_string(),
        advice_needed: advice.to_string(),
        mood: mood.to_string(),
        timestamp: now,
        ingredients: Some(ingredients.iter().map(|s| s.to_string()).collect()),
        station_id: None,
    };

    vec![
        can(
            "mock-1",
            "My boss keeps scheduling meetings at 5:55 PM on Fridays. I have no life.",
            "Tech",
            "Quit!",
            "tired",
            ["100% Zoom Fatigue", "Lost Weekend"],
        ),
        can(
            "mock-2",
            "I honestly don't know what I do all day anymore. Spreadsheets look like matrix code.",
            "Finance",
            "Advice",
            "confused",
            ["Excel Dust", "Corporate Tears"],
        ),
        can(
            "mock-3",
            "Clients want the logo bigger but also smaller. Make it pop.",
            "Creative",
            "Hug",
            "sad",
            ["Pixelated Hope", "Hex Code #000000"],
        ),
    ]
}
