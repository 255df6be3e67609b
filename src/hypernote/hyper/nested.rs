//! Nested sub-command detection.
//!
//! A hyper command body may itself be a command for another executor, e.g.
//! `@new-@pai-Explain quantum computing`. This module only identifies the intent;
//! running it (AI query, wiki lookup, math, ...) is the caller's job.

use crate::model::{NestedCommand, NestedKind};

use super::strip_prefix_ignore_case;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Match {
    /// Body starts with the keyword; the rest is the query.
    Prefix,
    /// Body is exactly the keyword; the query is empty.
    Exact,
}

#[derive(Debug, Clone, Copy)]
pub struct NestedPattern {
    pub keyword: &'static str,
    pub kind: NestedKind,
    pub matching: Match,
}

/// Sub-command keywords in priority order. Matching is case-insensitive.
pub const NESTED_COMMANDS: &[NestedPattern] = &[
    NestedPattern {
        keyword: "@pai-",
        kind: NestedKind::AiQuery,
        matching: Match::Prefix,
    },
    NestedPattern {
        keyword: "@wiki-",
        kind: NestedKind::Wiki,
        matching: Match::Prefix,
    },
    NestedPattern {
        keyword: "@t-",
        kind: NestedKind::Translate,
        matching: Match::Prefix,
    },
    NestedPattern {
        keyword: "@summary",
        kind: NestedKind::Summary,
        matching: Match::Exact,
    },
    NestedPattern {
        keyword: "@elaboration",
        kind: NestedKind::Elaborate,
        matching: Match::Exact,
    },
    NestedPattern {
        keyword: "@def-",
        kind: NestedKind::Define,
        matching: Match::Prefix,
    },
    NestedPattern {
        keyword: "@c-",
        kind: NestedKind::Math,
        matching: Match::Prefix,
    },
];

impl NestedPattern {
    fn detect(&self, body: &str) -> Option<NestedCommand> {
        let rest = strip_prefix_ignore_case(body, self.keyword)?;
        match self.matching {
            Match::Exact if !rest.is_empty() => None,
            _ => Some(NestedCommand {
                kind: self.kind,
                query: rest.trim().to_string(),
            }),
        }
    }
}

/// Identifies the sub-command a cleaned body starts with. First match wins.
pub fn detect_nested_command(body: &str) -> Option<NestedCommand> {
    let body = body.trim();
    NESTED_COMMANDS.iter().find_map(|pattern| pattern.detect(body))
}

/// True when the text begins with any sub-command keyword. Used before title
/// splitting, so exact keywords count here even with trailing text.
pub fn starts_with_nested_keyword(text: &str) -> bool {
    let text = text.trim_start();
    NESTED_COMMANDS
        .iter()
        .any(|pattern| strip_prefix_ignore_case(text, pattern.keyword).is_some())
}
