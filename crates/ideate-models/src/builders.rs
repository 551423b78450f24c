//! Builder patterns for complex types.

use std::collections::HashMap;

use crate::ids::OpportunityId;
use crate::opportunity::Opportunity;

/// Builder for creating Opportunity instances with a fluent API.
#[derive(Debug, Clone, Default)]
pub struct OpportunityBuilder {
    id: Option<OpportunityId>,
    score: Option<f64>,
    details: HashMap<String, serde_json::Value>,
}

impl OpportunityBuilder {
    /// Creates a new empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the id (defaults to a fresh random id if not set).
    pub fn id(mut self, id: impl Into<OpportunityId>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Sets the CSIO score.
    pub fn score(mut self, score: f64) -> Self {
        self.score = Some(score);
        self
    }

    /// Adds an opaque descriptive field.
    pub fn detail(
        mut self,
        key: impl Into<String>,
        value: impl Into<serde_json::Value>,
    ) -> Self {
        self.details.insert(key.into(), value.into());
        self
    }

    /// Builds the opportunity.
    pub fn build(self) -> Opportunity {
        Opportunity {
            id: self.id.unwrap_or_default(),
            score: self.score,
            details: self.details,
        }
    }
}
