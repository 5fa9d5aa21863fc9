/// Words that make the mascot cry when they show up in a message.
pub const DISTRESS_KEYWORDS: &[&str] = &[
    "累", "迷茫", "痛苦", "不想干了", "压力", "加班", "烦", "想哭", "撑不住",
    "死", "难受", "焦虑", "崩溃", "孤独", "无助", "很难", "甚至", "讨厌",
    // exhaustion
    "tired", "exhausted", "drained", "fatigued", "worn out", "burned out",
    "sleepy", "overworked", "exhausting", "dead tired", "fatigue", "cry",
    // pressure
    "stress", "stressed", "overwhelmed", "collapse", "tense", "can’t handle",
    "breaking", "pressure", "burnout", "strained",
    // lost
    "lost", "confused", "stuck", "unsure", "meaningless", "directionless",
    "don’t know", "no idea", "trapped", "blocked",
    // work
    "underpaid", "exploited", "unfair", "overtime", "tough day", "bad day",
    "can’t continue", "hate", "fail", "stupid",
    // low mood
    "sad", "upset", "hurt", "empty", "crying", "heartbroken", "down",
    "depressed", "miserable", "anxious", "panic", "dead",
    // lonely
    "alone", "lonely", "helpless", "no one", "no support", "can’t anymore",
    "giving up", "hopeless", "powerless", "isolated",
];

/// Substring match against [`DISTRESS_KEYWORDS`], case-insensitive.
pub fn is_distressed(text: &str) -> bool {
    let lower = text.to_lowercase();
    DISTRESS_KEYWORDS.iter().any(|k| lower.contains(k))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detects_keywords() {
        assert!(is_distressed("So TIRED of this"));
        assert!(is_distressed("今天又加班"));
        assert!(is_distressed("I feel like giving up"));
    }

    #[test]
    fn test_calm_text() {
        assert!(!is_distressed("Lunch was great today"));
        assert!(!is_distressed(""));
    }
}
