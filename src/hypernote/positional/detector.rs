//! Positional question detection.
//!
//! Recognizes questions that ask for the Nth item of something:
//!
//! | # | Shape | Example |
//! |---|-------|---------|
//! | 1 | `<N>th <noun> [of <topic>]` | "3rd method of Knowledge Representation" |
//! | 2 | `<noun> #<N> [of <topic>]` | "step 4 in the bread recipe" |
//! | 3 | `<ordinal> <noun> [of <topic>]` | "second rule of fight club" |
//! | 4 | `give/show/tell/get/what is [me] [the] <N>th [...]` | "give me the 2nd one" |
//! | 5 | same as 4 with an ordinal word | "what's the fifth item of the list" |
//!
//! Patterns are tried top to bottom and the first hit wins. The topic (whatever
//! follows `of`/`in`/`from`/`for`) is only a scoring hint for the resolver; a
//! question without one is still positional.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use crate::model::PositionalQuery;

/// Nouns accepted after an ordinal.
pub const NOUNS: &[&str] = &[
    "method",
    "step",
    "point",
    "item",
    "way",
    "technique",
    "rule",
    "principle",
    "type",
    "kind",
    "example",
    "part",
    "section",
    "chapter",
    "element",
    "component",
    "feature",
    "tip",
    "trick",
    "hack",
    "strategy",
    "approach",
    "phase",
    "stage",
];

/// Nouns accepted before a number. Narrower than [`NOUNS`] so that phrases such
/// as "type 2 diabetes" or "feature 3D printing" are not taken as positional.
pub const LEADING_NOUNS: &[&str] = &[
    "method",
    "step",
    "point",
    "item",
    "way",
    "technique",
    "rule",
    "principle",
    "part",
    "section",
    "chapter",
    "tip",
    "phase",
    "stage",
];

pub const ORDINAL_WORDS: &[(&str, u32)] = &[
    ("first", 1),
    ("second", 2),
    ("third", 3),
    ("fourth", 4),
    ("fifth", 5),
    ("sixth", 6),
    ("seventh", 7),
    ("eighth", 8),
    ("ninth", 9),
    ("tenth", 10),
    ("eleventh", 11),
    ("twelfth", 12),
    ("1st", 1),
    ("2nd", 2),
    ("3rd", 3),
    ("4th", 4),
    ("5th", 5),
    ("6th", 6),
    ("7th", 7),
    ("8th", 8),
    ("9th", 9),
    ("10th", 10),
    ("11th", 11),
    ("12th", 12),
];

const TOPIC_TAIL: &str = r"(?:\s+(?:of|in|from|for)\s+(?P<topic>.+))?";
const ASK_VERB: &str = r"(?:give|show|tell|get|what(?:'|’)s|what\s+is)\s+(?:me\s+)?(?:the\s+)?";
const ASK_NOUN: &str = r"(?:\s+(?:one|item|method|step|point)s?\b)?";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NumberForm {
    Digits,
    Word,
}

struct PositionalPattern {
    regex: Regex,
    number: NumberForm,
}

impl PositionalPattern {
    fn new(pattern: String, number: NumberForm) -> Self {
        Self {
            regex: Regex::new(&format!("(?i){}", pattern)).unwrap(),
            number,
        }
    }

    fn detect(&self, question: &str) -> Option<PositionalQuery> {
        let caps = self.regex.captures(question)?;
        let position = self.position(&caps)?;
        Some(PositionalQuery {
            position,
            topic: caps.name("topic").and_then(|t| clean_topic(t.as_str())),
        })
    }

    fn position(&self, caps: &Captures) -> Option<u32> {
        let raw = caps.name("n")?.as_str();
        let position = match self.number {
            NumberForm::Digits => raw.parse().ok()?,
            NumberForm::Word => ordinal_value(raw)?,
        };
        (position > 0).then_some(position)
    }
}

fn alternation(words: &[&str]) -> String {
    words.join("|")
}

fn ordinal_alternation() -> String {
    let words: Vec<&str> = ORDINAL_WORDS.iter().map(|(w, _)| *w).collect();
    alternation(&words)
}

/// Detection patterns in priority order.
static PATTERNS: Lazy<Vec<PositionalPattern>> = Lazy::new(|| {
    let nouns = alternation(NOUNS);
    let leading = alternation(LEADING_NOUNS);
    let ordinals = ordinal_alternation();
    vec![
        PositionalPattern::new(
            format!(r"\b(?P<n>\d+)(?:st|nd|rd|th)\s+(?:{nouns})s?\b{TOPIC_TAIL}"),
            NumberForm::Digits,
        ),
        PositionalPattern::new(
            format!(r"\b(?:{leading})\s*#?\s*(?P<n>\d+)\b{TOPIC_TAIL}"),
            NumberForm::Digits,
        ),
        PositionalPattern::new(
            format!(r"\b(?P<n>{ordinals})\s+(?:{nouns})s?\b{TOPIC_TAIL}"),
            NumberForm::Word,
        ),
        PositionalPattern::new(
            format!(r"\b{ASK_VERB}(?P<n>\d+)(?:st|nd|rd|th)\b{ASK_NOUN}{TOPIC_TAIL}"),
            NumberForm::Digits,
        ),
        PositionalPattern::new(
            format!(r"\b{ASK_VERB}(?P<n>{ordinals})\b{ASK_NOUN}{TOPIC_TAIL}"),
            NumberForm::Word,
        ),
    ]
});

/// Returns the requested position and topic when `question` is positional.
pub fn detect_positional_query(question: &str) -> Option<PositionalQuery> {
    let query = PATTERNS.iter().find_map(|pattern| pattern.detect(question));
    if let Some(query) = &query {
        tracing::debug!(position = query.position, topic = ?query.topic, "positional query detected");
    }
    query
}

pub fn ordinal_value(word: &str) -> Option<u32> {
    let word = word.to_ascii_lowercase();
    ORDINAL_WORDS
        .iter()
        .find(|(w, _)| *w == word)
        .map(|(_, n)| *n)
}

fn clean_topic(raw: &str) -> Option<String> {
    let topic = raw
        .trim()
        .trim_end_matches(['?', '.', '!'])
        .trim();
    (!topic.is_empty()).then(|| topic.to_string())
}
