//! Core data models for Ideate.
//!
//! This crate provides the fundamental data types used throughout the
//! Ideate system: opportunity records, parsed session metadata, anomaly
//! classifications, and conversation messages.

pub mod builders;
pub mod ids;
pub mod message;
pub mod opportunity;
pub mod session;

// Re-export main types
pub use builders::OpportunityBuilder;
pub use ids::{IdeaId, MessageId, OpportunityId};
pub use message::ChatMessage;
pub use opportunity::{AnomalyRecord, AnomalyType, Opportunity};
pub use session::{
    ClarityState, ParkedIdea, ParsedSession, SessionStats, CLARITY_SUCCESS_DEFAULT,
    CLARITY_WHAT_DEFAULT, CLARITY_WHO_DEFAULT,
};
