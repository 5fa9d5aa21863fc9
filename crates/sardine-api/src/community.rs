//! Simulated strangers answering new cans.
//!
//! There is only ever one real user, so a canned reply arrives a little
//! while after each can is sealed.

use chrono::Utc;
use rand::Rng;
use tracing::{info, warn};
use uuid::Uuid;

use sardine_types::{Can, ReleasedSardine};

use crate::state::{AppState, with_db};

pub const COMMUNITY_REPLIES: [&str; 6] = [
    "[ME TOO] Hang in there, I feel exactly the same.",
    "[HUG] Sending digital warmth your way.",
    "[RESPECT] You are stronger than you think.",
    "[REAL] The commute is the only quiet time I get.",
    "[IT PASSES] This too shall pass. Keep swimming.",
    "[ME TOO] [REAL] Literally me yesterday.",
];

pub fn community_reply<R: Rng + ?Sized>(can: &Can, rng: &mut R) -> ReleasedSardine {
    let advice = COMMUNITY_REPLIES[rng.random_range(0..COMMUNITY_REPLIES.len())];

    ReleasedSardine {
        id: Uuid::new_v4().to_string(),
        original_can_id: can.id.clone(),
        text_length: can.text_length(),
        advice_given: advice.to_string(),
        industry: can.industry.clone(),
        station_id: can.station_id.clone(),
        timestamp: Utc::now(),
    }
}

/// Save a stranger's reply to `can` after the configured delay.
pub fn schedule_reply(state: AppState, can: Can) {
    let Some(delay) = state.community_delay else {
        return;
    };

    tokio::spawn(async move {
        tokio::time::sleep(delay).await;

        let reply = {
            let mut rng = rand::rng();
            community_reply(&can, &mut rng)
        };

        let can_id = reply.original_can_id.clone();
        match with_db(&state, move |db| db.save_released(reply)).await {
            Ok(()) => info!(%can_id, "Stranger replied"),
            Err(status) => warn!(%can_id, %status, "Stranger reply dropped"),
        }
    });
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    fn can() -> Can {
        Can {
            id: "c1".into(),
            text: "twelve chars".into(),
            industry: "Service".into(),
            advice_needed: "Hug".into(),
            mood: String::new(),
            timestamp: Utc::now(),
            ingredients: None,
            station_id: Some("food-court".into()),
        }
    }

    #[test]
    fn test_reply_copies_can_fields() {
        let mut rng = StdRng::seed_from_u64(5);
        let reply = community_reply(&can(), &mut rng);
        assert_eq!(reply.original_can_id, "c1");
        assert_eq!(reply.text_length, 12);
        assert_eq!(reply.industry, "Service");
        assert_eq!(reply.station_id.as_deref(), Some("food-court"));
        assert!(COMMUNITY_REPLIES.contains(&reply.advice_given.as_str()));
    }

    #[test]
    fn test_reply_pick_is_seeded() {
        let pick = |seed| {
            let mut rng = StdRng::seed_from_u64(seed);
            community_reply(&can(), &mut rng).advice_given
        };
        assert_eq!(pick(11), pick(11));
    }
}
