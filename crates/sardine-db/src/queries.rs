use rand::Rng;
use tracing::debug;

use sardine_types::api::ManifestEntry;
use sardine_types::{Can, ReleasedSardine};

use crate::error::Result;
use crate::{CANS_KEY, RELEASED_KEY, SardineDb};

/// Equality filters for picking a random can. Empty strings count as unset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CanFilter {
    pub industry: Option<String>,
    pub advice: Option<String>,
}

impl CanFilter {
    pub fn new(industry: Option<String>, advice: Option<String>) -> Self {
        Self { industry, advice }
    }

    pub fn matches(&self, can: &Can) -> bool {
        fn check(want: &Option<String>, have: &str) -> bool {
            match want.as_deref() {
                None | Some("") => true,
                Some(want) => want == have,
            }
        }
        check(&self.industry, &can.industry) && check(&self.advice, &can.advice_needed)
    }
}

impl SardineDb {
    // -- Cans --

    pub fn save_can(&self, can: Can) -> Result<()> {
        let _writer = self.lock_writer()?;
        self.seed_if_empty()?;
        let id = can.id.clone();
        let total = self.prepend(CANS_KEY, can)?;
        debug!(can_id = %id, total, "saved can");
        Ok(())
    }

    /// All cans, most recent first. Seeds the collection on first use.
    pub fn list_cans(&self) -> Result<Vec<Can>> {
        if let Some(cans) = self.read_collection(CANS_KEY)? {
            return Ok(cans);
        }
        self.init()?;
        Ok(self.read_collection(CANS_KEY)?.unwrap_or_default())
    }

    pub fn find_can(&self, id: &str) -> Result<Option<Can>> {
        Ok(self.list_cans()?.into_iter().find(|c| c.id == id))
    }

    /// Pick one can matching `filter`, uniformly at random.
    /// `None` when nothing matches.
    pub fn random_can<R: Rng + ?Sized>(
        &self,
        filter: &CanFilter,
        rng: &mut R,
    ) -> Result<Option<Can>> {
        let mut matches: Vec<Can> = self
            .list_cans()?
            .into_iter()
            .filter(|c| filter.matches(c))
            .collect();

        if matches.is_empty() {
            debug!(?filter, "no cans match filter");
            return Ok(None);
        }

        let idx = rng.random_range(0..matches.len());
        Ok(Some(matches.swap_remove(idx)))
    }

    /// Every can with its response count, newest timestamp first.
    pub fn manifest(&self) -> Result<Vec<ManifestEntry>> {
        let mut cans = self.list_cans()?;
        let released = self.list_released()?;

        cans.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));

        Ok(cans
            .into_iter()
            .map(|can| {
                let response_count = released
                    .iter()
                    .filter(|r| r.original_can_id == can.id)
                    .count();
                ManifestEntry { can, response_count }
            })
            .collect())
    }

    // -- Released sardines --

    pub fn save_released(&self, sardine: ReleasedSardine) -> Result<()> {
        let _writer = self.lock_writer()?;
        debug!(sardine_id = %sardine.id, can_id = %sardine.original_can_id, "releasing sardine");
        self.prepend(RELEASED_KEY, sardine)?;
        Ok(())
    }

    /// All released sardines, most recent first.
    pub fn list_released(&self) -> Result<Vec<ReleasedSardine>> {
        Ok(self.read_collection(RELEASED_KEY)?.unwrap_or_default())
    }

    pub fn responses_for_can(&self, can_id: &str) -> Result<Vec<ReleasedSardine>> {
        Ok(self
            .list_released()?
            .into_iter()
            .filter(|r| r.original_can_id == can_id)
            .collect())
    }
}
