//! Annotated-reply protocol for Ideate coaching sessions.
//!
//! Assistant replies carry an optional trailing annotation block with the
//! session's clarity assessment, counters, and parked ideas. This crate owns
//! both sides of that convention: the prompt template that asks the model to
//! emit it, and the parser that recovers the structure.
//!
//! # Example
//!
//! ```
//! use ideate_session::parse_reply;
//!
//! let session = parse_reply("Who exactly has this problem?---\nProblem Clarity: 40%");
//!
//! assert_eq!(session.message, "Who exactly has this problem?");
//! assert_eq!(session.clarity.percentage, 40);
//! ```

pub mod fields;
pub mod parser;
pub mod stamp;
pub mod state;
pub mod template;

pub use parser::{parse_reply, ReplyParser};
pub use stamp::{FixedStamper, IdeaStamper, SystemStamper};
pub use state::SessionState;
pub use template::{ANNOTATION_PROMPT, REPLY_DELIMITER};
