//! Annotation prompt constants.
//!
//! The other half of the wire contract: the instruction block given to the
//! upstream model so that its replies carry exactly the labels the parser
//! anchors on. Changing any label here breaks [`crate::fields`] and vice
//! versa.

/// Delimiter between the human-facing message and the metadata section.
///
/// Only the first occurrence is structurally significant; later occurrences
/// belong to the metadata text.
pub const REPLY_DELIMITER: &str = "---";

/// Instruction block appended to the coaching system prompt.
pub const ANNOTATION_PROMPT: &str = r#"After your reply, append a line containing only "---" followed by a session annotation block in exactly this format:

Problem Clarity: <0-100>%
What is the problem: [<one sentence, or leave unchanged if unknown>]
Who has this problem: [<one sentence, or leave unchanged if unknown>]
What is success: [<one sentence, or leave unchanged if unknown>]
Questions asked: <total so far>
Parked ideas: <total so far>
Assumptions challenged: <total so far>
**Parked Ideas:**
- <each idea parked this session, one per line>

If no ideas have been parked, write "**Parked Ideas:** None" instead of the bullet list. Do not rename, reorder into prose, or omit the labels; the client parses them verbatim. Any label you cannot fill may be dropped entirely."#;
