//! Crash-safe persistence for captured Ideate opportunities.
//!
//! Opportunities are stored as individual JSON files and written atomically
//! (write to temp file, then rename). Parsed session metadata and anomaly
//! records are derived values and are never persisted.
//!
//! # Example
//!
//! ```no_run
//! use ideate_models::OpportunityBuilder;
//! use ideate_persistence::OpportunityStore;
//!
//! let store = OpportunityStore::new(OpportunityStore::default_path());
//!
//! let opportunity = OpportunityBuilder::new()
//!     .score(0.6)
//!     .detail("name", "Same-day tailoring")
//!     .build();
//! store.save(&opportunity).unwrap();
//!
//! let all = store.list().unwrap();
//! ```

pub mod error;
pub mod store;

pub use error::{PersistenceError, Result};
pub use store::OpportunityStore;
