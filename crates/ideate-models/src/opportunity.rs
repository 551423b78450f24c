//! Opportunity records and anomaly classification.
//!
//! An opportunity is a captured business idea. The core only interprets its
//! CSIO score; every descriptive field (name, tags, status, notes blocks)
//! rides in the flattened `details` map and passes through unchanged.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

use crate::ids::OpportunityId;

/// A captured opportunity record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Opportunity {
    /// Unique identifier for the opportunity.
    pub id: OpportunityId,

    /// CSIO quality score in `[0, 1]`, if one has been assigned.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,

    /// Descriptive fields opaque to the core (name, tags, status, ...).
    #[serde(flatten)]
    pub details: HashMap<String, serde_json::Value>,
}

impl Opportunity {
    /// Creates a new opportunity with a fresh id and no score.
    pub fn new() -> Self {
        Self {
            id: OpportunityId::new(),
            score: None,
            details: HashMap::new(),
        }
    }

    /// Returns the score, treating an absent score as `0.0`.
    pub fn score_or_zero(&self) -> f64 {
        self.score.unwrap_or(0.0)
    }
}

impl Default for Opportunity {
    fn default() -> Self {
        Self::new()
    }
}

/// How an anomalous opportunity deviates from the population.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnomalyType {
    /// Score is more than two standard deviations above the mean.
    HighPerformer,
    /// Score is more than two standard deviations below the mean.
    NeedsAttention,
}

impl fmt::Display for AnomalyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::HighPerformer => write!(f, "high_performer"),
            Self::NeedsAttention => write!(f, "needs_attention"),
        }
    }
}

/// An opportunity flagged as a statistical outlier.
///
/// Computed fresh on every detector run and superseded entirely by the next
/// run; never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnomalyRecord {
    /// Id of the source opportunity.
    pub id: OpportunityId,

    /// Which side of the mean the record falls on.
    pub anomaly_type: AnomalyType,
}
