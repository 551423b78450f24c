//! Labeled-field extractors for the reply metadata section.
//!
//! Each extractor matches one label of the annotation convention and nothing
//! else, so malformed text in one field cannot corrupt extraction of the
//! others. Labels are case-sensitive wire contract; they must match the
//! upstream prompt template byte for byte.

use regex::Regex;
use std::sync::LazyLock;

/// Regex to extract the overall clarity percentage.
static CLARITY_PERCENTAGE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Problem Clarity:\s*(\d+)%").expect("Invalid clarity regex"));

/// Regex to extract the problem statement.
static WHAT_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"What is the problem:\s*\[([^\]]*)\]").expect("Invalid what regex")
});

/// Regex to extract the affected audience.
static WHO_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"Who has this problem:\s*\[([^\]]*)\]").expect("Invalid who regex")
});

/// Regex to extract the success criteria.
static SUCCESS_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"What is success:\s*\[([^\]]*)\]").expect("Invalid success regex")
});

/// Regex to extract the questions-asked counter.
static QUESTIONS_ASKED_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Questions asked:\s*(\d+)").expect("Invalid questions regex"));

/// Regex to extract the parked-ideas counter.
static PARKED_COUNT_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Parked ideas:\s*(\d+)").expect("Invalid parked count regex"));

/// Regex to extract the assumptions-challenged counter.
static ASSUMPTIONS_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"Assumptions challenged:\s*(\d+)").expect("Invalid assumptions regex")
});

/// Regex to extract the parked-ideas block: everything after the marker up
/// to (not including) the next `*`, so a following bold section ends it.
static PARKED_BLOCK_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\*\*Parked Ideas:\*\*([^*]*)").expect("Invalid parked block regex")
});

/// Extracts the clarity percentage, if present and representable.
pub fn clarity_percentage(metadata: &str) -> Option<u8> {
    CLARITY_PERCENTAGE_REGEX
        .captures(metadata)
        .and_then(|cap| cap.get(1))
        .and_then(|m| m.as_str().parse::<u8>().ok())
}

/// Extracts the bracketed "what is the problem" text.
pub fn clarity_what(metadata: &str) -> Option<String> {
    bracket_capture(&WHAT_REGEX, metadata)
}

/// Extracts the bracketed "who has this problem" text.
pub fn clarity_who(metadata: &str) -> Option<String> {
    bracket_capture(&WHO_REGEX, metadata)
}

/// Extracts the bracketed "what is success" text.
pub fn clarity_success(metadata: &str) -> Option<String> {
    bracket_capture(&SUCCESS_REGEX, metadata)
}

/// Extracts the questions-asked counter.
pub fn questions_asked(metadata: &str) -> Option<u32> {
    counter_capture(&QUESTIONS_ASKED_REGEX, metadata)
}

/// Extracts the parked-ideas counter.
///
/// This is the agent's own running count; it is independent of the
/// enumerated list returned by [`parked_idea_lines`] and the two are never
/// reconciled.
pub fn parked_ideas_count(metadata: &str) -> Option<u32> {
    counter_capture(&PARKED_COUNT_REGEX, metadata)
}

/// Extracts the assumptions-challenged counter.
pub fn assumptions_challenged(metadata: &str) -> Option<u32> {
    counter_capture(&ASSUMPTIONS_REGEX, metadata)
}

/// Extracts the parked-idea texts enumerated in the metadata section.
///
/// Returns one entry per `- ` bullet line inside the `**Parked Ideas:**`
/// block, with the leading dash and whitespace stripped. A block containing
/// the word "None" yields no entries, as does a missing block.
pub fn parked_idea_lines(metadata: &str) -> Vec<String> {
    let Some(block) = PARKED_BLOCK_REGEX
        .captures(metadata)
        .and_then(|cap| cap.get(1))
        .map(|m| m.as_str())
    else {
        return Vec::new();
    };

    if block.contains("None") {
        return Vec::new();
    }

    block
        .lines()
        .filter_map(|line| {
            let trimmed = line.trim();
            trimmed
                .strip_prefix('-')
                .map(|rest| rest.trim_start().to_string())
        })
        .collect()
}

fn bracket_capture(regex: &Regex, metadata: &str) -> Option<String> {
    regex
        .captures(metadata)
        .and_then(|cap| cap.get(1))
        .map(|m| m.as_str().to_string())
}

fn counter_capture(regex: &Regex, metadata: &str) -> Option<u32> {
    regex
        .captures(metadata)
        .and_then(|cap| cap.get(1))
        .and_then(|m| m.as_str().parse::<u32>().ok())
}
