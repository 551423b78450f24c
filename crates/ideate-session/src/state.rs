//! Current-session state holder.
//!
//! One owner holds the latest [`ParsedSession`] and replaces it wholesale on
//! every reply; there is no incremental merge. The transcript grows
//! append-only alongside it.

use ideate_models::{ChatMessage, ParsedSession};

use crate::parser::ReplyParser;
use crate::stamp::{IdeaStamper, SystemStamper};

/// Conversation transcript plus the latest parsed session metadata.
#[derive(Debug, Default)]
pub struct SessionState<S = SystemStamper> {
    parser: ReplyParser<S>,
    transcript: Vec<ChatMessage>,
    current: ParsedSession,
}

impl SessionState<SystemStamper> {
    /// Creates an empty session with the default parser.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<S: IdeaStamper> SessionState<S> {
    /// Creates an empty session around the given parser.
    pub fn with_parser(parser: ReplyParser<S>) -> Self {
        Self {
            parser,
            transcript: Vec::new(),
            current: ParsedSession::default(),
        }
    }

    /// Records a user message in the transcript.
    pub fn push_user(&mut self, content: impl Into<String>) {
        self.transcript.push(ChatMessage::user(content));
    }

    /// Parses a raw assistant reply, appends its human-facing portion to the
    /// transcript, and replaces the current session metadata entirely.
    pub fn apply_reply(&mut self, raw: &str) -> &ParsedSession {
        let parsed = self.parser.parse(raw);
        self.transcript
            .push(ChatMessage::assistant(parsed.message.clone()));
        self.current = parsed;
        &self.current
    }

    /// Returns the latest parsed session metadata.
    pub fn current(&self) -> &ParsedSession {
        &self.current
    }

    /// Returns the conversation transcript.
    pub fn transcript(&self) -> &[ChatMessage] {
        &self.transcript
    }
}
