//! Session metadata recovered from annotated assistant replies.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ids::IdeaId;

/// Default text shown before the problem statement is articulated.
pub const CLARITY_WHAT_DEFAULT: &str = "Not yet clear";
/// Default text shown before the affected audience is identified.
pub const CLARITY_WHO_DEFAULT: &str = "Not yet identified";
/// Default text shown before success criteria are defined.
pub const CLARITY_SUCCESS_DEFAULT: &str = "Not yet defined";

/// How well the user's problem statement has been articulated, as judged by
/// the upstream conversational agent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClarityState {
    /// Overall clarity, nominally 0-100.
    ///
    /// The parser stores whatever integer the annotation carried as long as
    /// it fits in a `u8`, so an out-of-range value like 150 passes through
    /// unclamped; captures above 255 fall back to the default 0. The
    /// upstream prompt template constrains the range.
    pub percentage: u8,

    /// What the problem is.
    pub what: String,

    /// Who has the problem.
    pub who: String,

    /// What success looks like.
    pub success: String,
}

impl Default for ClarityState {
    fn default() -> Self {
        Self {
            percentage: 0,
            what: CLARITY_WHAT_DEFAULT.to_string(),
            who: CLARITY_WHO_DEFAULT.to_string(),
            success: CLARITY_SUCCESS_DEFAULT.to_string(),
        }
    }
}

/// Running counters for the current coaching session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SessionStats {
    /// Questions the agent has asked so far.
    pub questions_asked: u32,

    /// Ideas parked so far, as counted by the agent.
    ///
    /// Independent of the enumerated parked-ideas list; the two may disagree
    /// and are never reconciled.
    pub parked_ideas_count: u32,

    /// Assumptions the agent has challenged so far.
    pub assumptions_challenged: u32,
}

/// A tangential idea deliberately deferred rather than pursued.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParkedIdea {
    /// Unique identifier, minted at parse time.
    pub id: IdeaId,

    /// The idea text as it appeared in the reply.
    pub text: String,

    /// When the idea was recorded.
    pub recorded_at: DateTime<Utc>,
}

/// Structured view of one assistant reply.
///
/// Derived from the raw reply text on every parse and replaced wholesale by
/// the next one; never persisted.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ParsedSession {
    /// Human-facing portion of the reply. Always present, may be empty.
    pub message: String,

    /// Clarity assessment.
    pub clarity: ClarityState,

    /// Session counters.
    pub stats: SessionStats,

    /// Parked ideas enumerated in this reply.
    #[serde(default)]
    pub parked_ideas: Vec<ParkedIdea>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clarity_defaults() {
        let clarity = ClarityState::default();

        assert_eq!(clarity.percentage, 0);
        assert_eq!(clarity.what, "Not yet clear");
        assert_eq!(clarity.who, "Not yet identified");
        assert_eq!(clarity.success, "Not yet defined");
    }

    #[test]
    fn test_stats_default_all_zero() {
        let stats = SessionStats::default();

        assert_eq!(stats.questions_asked, 0);
        assert_eq!(stats.parked_ideas_count, 0);
        assert_eq!(stats.assumptions_challenged, 0);
    }

    #[test]
    fn test_parsed_session_default() {
        let session = ParsedSession::default();

        assert!(session.message.is_empty());
        assert_eq!(session.clarity, ClarityState::default());
        assert_eq!(session.stats, SessionStats::default());
        assert!(session.parked_ideas.is_empty());
    }

    #[test]
    fn test_parked_idea_serialization_roundtrip() {
        let idea = ParkedIdea {
            id: IdeaId::from_string("idea-1"),
            text: "Partner with local banks".to_string(),
            recorded_at: Utc::now(),
        };

        let json = serde_json::to_string(&idea).unwrap();
        let parsed: ParkedIdea = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed, idea);
    }
}
