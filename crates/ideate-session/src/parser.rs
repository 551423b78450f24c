//! Annotated-reply parser.
//!
//! Splits an assistant reply into the human-facing message and the trailing
//! metadata section, then recovers the structured session state from it.
//! Parsing is total: any malformed or missing annotation degrades field by
//! field to defaults, never to an error. The annotation layer is best-effort
//! decoration over a natural-language channel and must never block the
//! conversation.

use tracing::debug;

use ideate_models::{ParkedIdea, ParsedSession};

use crate::fields;
use crate::stamp::{IdeaStamper, SystemStamper};
use crate::template::REPLY_DELIMITER;

/// Parser for annotated assistant replies.
///
/// Stateless apart from its [`IdeaStamper`], which supplies the ids and
/// timestamps minted for parked ideas.
#[derive(Debug, Clone, Default)]
pub struct ReplyParser<S = SystemStamper> {
    stamper: S,
}

impl ReplyParser<SystemStamper> {
    /// Creates a parser using random ids and the system clock.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<S: IdeaStamper> ReplyParser<S> {
    /// Creates a parser with a custom id/timestamp source.
    pub fn with_stamper(stamper: S) -> Self {
        Self { stamper }
    }

    /// Parses a raw assistant reply into a [`ParsedSession`].
    ///
    /// Only the first `"---"` is structurally significant: everything before
    /// it is the trimmed message, everything after it (including any later
    /// `"---"` sequences) is the metadata section. Without a delimiter the
    /// whole trimmed reply is the message and every structured field keeps
    /// its default.
    pub fn parse(&self, reply: &str) -> ParsedSession {
        let (message, metadata) = match reply.split_once(REPLY_DELIMITER) {
            Some((head, tail)) => (head.trim().to_string(), Some(tail)),
            None => (reply.trim().to_string(), None),
        };

        let mut session = ParsedSession {
            message,
            ..ParsedSession::default()
        };

        let Some(metadata) = metadata else {
            return session;
        };

        // Each extractor is independent: a miss on one never blocks another.
        if let Some(percentage) = fields::clarity_percentage(metadata) {
            session.clarity.percentage = percentage;
        }
        if let Some(what) = fields::clarity_what(metadata) {
            session.clarity.what = what;
        }
        if let Some(who) = fields::clarity_who(metadata) {
            session.clarity.who = who;
        }
        if let Some(success) = fields::clarity_success(metadata) {
            session.clarity.success = success;
        }
        if let Some(n) = fields::questions_asked(metadata) {
            session.stats.questions_asked = n;
        }
        if let Some(n) = fields::parked_ideas_count(metadata) {
            session.stats.parked_ideas_count = n;
        }
        if let Some(n) = fields::assumptions_challenged(metadata) {
            session.stats.assumptions_challenged = n;
        }

        session.parked_ideas = fields::parked_idea_lines(metadata)
            .into_iter()
            .map(|text| ParkedIdea {
                id: self.stamper.mint_id(),
                text,
                recorded_at: self.stamper.now(),
            })
            .collect();

        debug!(
            percentage = session.clarity.percentage,
            parked = session.parked_ideas.len(),
            "parsed annotated reply"
        );

        session
    }
}

/// Parses a reply with the default system stamper.
pub fn parse_reply(reply: &str) -> ParsedSession {
    ReplyParser::new().parse(reply)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stamp::FixedStamper;

    fn fixed_parser() -> ReplyParser<FixedStamper> {
        ReplyParser::with_stamper(FixedStamper::default())
    }

    #[test]
    fn test_no_delimiter_all_defaults() {
        let session = parse_reply("  Tell me more about your idea.  ");

        assert_eq!(session.message, "Tell me more about your idea.");
        assert_eq!(session.clarity.percentage, 0);
        assert_eq!(session.clarity.what, "Not yet clear");
        assert_eq!(session.clarity.who, "Not yet identified");
        assert_eq!(session.clarity.success, "Not yet defined");
        assert_eq!(session.stats.questions_asked, 0);
        assert_eq!(session.stats.parked_ideas_count, 0);
        assert_eq!(session.stats.assumptions_challenged, 0);
        assert!(session.parked_ideas.is_empty());
    }

    #[test]
    fn test_percentage_extraction() {
        let session = parse_reply("Hello---\nProblem Clarity: 73%\n");

        assert_eq!(session.message, "Hello");
        assert_eq!(session.clarity.percentage, 73);
    }

    #[test]
    fn test_field_extraction_independence() {
        let session =
            parse_reply("Good question.---\nWho has this problem: [small business owners]");

        assert_eq!(session.clarity.who, "small business owners");
        assert_eq!(session.clarity.what, "Not yet clear");
        assert_eq!(session.clarity.success, "Not yet defined");
        assert_eq!(session.stats.questions_asked, 0);
    }

    #[test]
    fn test_parked_ideas_block_bounded_by_next_section() {
        let reply = "Let's focus.---\n\
                     **Parked Ideas:**\n\
                     - Build a mobile app first\n\
                     - Partner with local banks\n\
                     **Next Steps:** keep digging\n";

        let session = fixed_parser().parse(reply);

        assert_eq!(session.parked_ideas.len(), 2);
        assert_eq!(session.parked_ideas[0].text, "Build a mobile app first");
        assert_eq!(session.parked_ideas[1].text, "Partner with local banks");
    }

    #[test]
    fn test_parked_ideas_none_suppression() {
        let session = parse_reply("Noted.---\n**Parked Ideas:** None\n");

        assert!(session.parked_ideas.is_empty());
    }

    #[test]
    fn test_counter_independent_of_list_length() {
        let reply = "Parking that.---\n\
                     Parked ideas: 5\n\
                     **Parked Ideas:**\n\
                     - Only one enumerated\n";

        let session = fixed_parser().parse(reply);

        // The explicit counter and the enumerated list may disagree; both
        // are reported as-is.
        assert_eq!(session.stats.parked_ideas_count, 5);
        assert_eq!(session.parked_ideas.len(), 1);
    }

    #[test]
    fn test_later_delimiters_stay_in_metadata() {
        let session = parse_reply("Msg---\nProblem Clarity: 10%\n---\nQuestions asked: 2\n");

        assert_eq!(session.message, "Msg");
        assert_eq!(session.clarity.percentage, 10);
        assert_eq!(session.stats.questions_asked, 2);
    }

    #[test]
    fn test_empty_message_before_delimiter() {
        let session = parse_reply("---\nProblem Clarity: 20%");

        assert_eq!(session.message, "");
        assert_eq!(session.clarity.percentage, 20);
    }

    #[test]
    fn test_malformed_metadata_degrades_per_field() {
        let reply = "Msg---\n\
                     Problem Clarity: soon%\n\
                     Questions asked: 7\n\
                     What is the problem: missing brackets\n";

        let session = parse_reply(reply);

        assert_eq!(session.clarity.percentage, 0);
        assert_eq!(session.stats.questions_asked, 7);
        assert_eq!(session.clarity.what, "Not yet clear");
    }

    #[test]
    fn test_deterministic_with_fixed_stamper() {
        let reply = "Msg---\n**Parked Ideas:**\n- Idea one\n- Idea two\n**end";

        let first = fixed_parser().parse(reply);
        let second = fixed_parser().parse(reply);

        assert_eq!(first.parked_ideas, second.parked_ideas);
        assert_eq!(first.parked_ideas[0].id.as_str(), "idea-0");
        assert_eq!(first.parked_ideas[1].id.as_str(), "idea-1");
    }

    #[test]
    fn test_empty_input() {
        let session = parse_reply("");

        assert_eq!(session.message, "");
        assert!(session.parked_ideas.is_empty());
    }
}
