//! Score statistics and outlier detection for Ideate opportunities.
//!
//! # Example
//!
//! ```
//! use ideate_insights::detect_anomalies;
//! use ideate_models::OpportunityBuilder;
//!
//! let opportunities: Vec<_> = (0..9)
//!     .map(|_| OpportunityBuilder::new().score(0.5).build())
//!     .chain(std::iter::once(OpportunityBuilder::new().score(1.0).build()))
//!     .collect();
//!
//! let anomalies = detect_anomalies(&opportunities);
//! assert_eq!(anomalies.len(), 1);
//! ```

pub mod detector;
pub mod stats;

pub use detector::{detect_anomalies, ANOMALY_THRESHOLD_SIGMA};
pub use stats::ScoreStats;
