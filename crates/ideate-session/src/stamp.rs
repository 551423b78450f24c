//! Id and timestamp sources for minted parked ideas.
//!
//! The parser synthesizes ids and timestamps at parse time; they are not
//! extracted from the reply text. Routing them through a trait keeps the
//! parser deterministic under test.

use chrono::{DateTime, TimeZone, Utc};
use std::sync::atomic::{AtomicU64, Ordering};

use ideate_models::IdeaId;

/// Source of fresh ids and timestamps for parked ideas.
pub trait IdeaStamper {
    /// Mints a unique idea id.
    fn mint_id(&self) -> IdeaId;

    /// Returns the current time.
    fn now(&self) -> DateTime<Utc>;
}

/// Stamper backed by random v4 ids and the system clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemStamper;

impl IdeaStamper for SystemStamper {
    fn mint_id(&self) -> IdeaId {
        IdeaId::new()
    }

    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Deterministic stamper for tests: sequential ids and a fixed timestamp.
#[derive(Debug)]
pub struct FixedStamper {
    counter: AtomicU64,
    timestamp: DateTime<Utc>,
}

impl FixedStamper {
    /// Creates a stamper that always reports the given timestamp.
    pub fn new(timestamp: DateTime<Utc>) -> Self {
        Self {
            counter: AtomicU64::new(0),
            timestamp,
        }
    }
}

impl Default for FixedStamper {
    fn default() -> Self {
        Self::new(
            Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0)
                .single()
                .expect("valid fixed timestamp"),
        )
    }
}

impl IdeaStamper for FixedStamper {
    fn mint_id(&self) -> IdeaId {
        let n = self.counter.fetch_add(1, Ordering::Relaxed);
        IdeaId::from_string(format!("idea-{}", n))
    }

    fn now(&self) -> DateTime<Utc> {
        self.timestamp
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_stamper_mints_prefixed_ids() {
        let stamper = SystemStamper;
        assert!(stamper.mint_id().as_str().starts_with("idea-"));
    }

    #[test]
    fn test_system_stamper_ids_unique() {
        let stamper = SystemStamper;
        assert_ne!(stamper.mint_id(), stamper.mint_id());
    }

    #[test]
    fn test_fixed_stamper_sequential() {
        let stamper = FixedStamper::default();

        assert_eq!(stamper.mint_id().as_str(), "idea-0");
        assert_eq!(stamper.mint_id().as_str(), "idea-1");
        assert_eq!(stamper.now(), stamper.now());
    }
}
