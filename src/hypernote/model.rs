//! # Domain Model
//!
//! The data types produced by the grammars and consumed by the note store and the
//! chat-context builder. All of them are transient: created per user input, handed
//! to the caller, never persisted by this crate.
//!
//! ## Note Drafts
//!
//! A [`NoteDraft`] is what a hyper command (`@new-Title || Body || ##tag is:pin`)
//! becomes. Two invariants hold for every draft built by [`crate::hyper`]:
//!
//! - `title` is never empty (it falls back to [`DEFAULT_TITLE`]).
//! - `content` never contains attribute-flag syntax (`##tag`, `c:`, `f:`, `is:`).
//!
//! ## Lists and Positional Queries
//!
//! [`ParsedList`] / [`ListItem`] are the output of [`crate::lists`]. A
//! [`PositionalQuery`] is what [`crate::positional::detector`] recognizes in a
//! question, and [`PositionalQueryResult`] is the resolver's answer.
//!
//! ## Candidate Notes
//!
//! The resolver works over any note type implementing [`CandidateNote`], so the
//! caller's own storage type can be passed in without conversion. [`Note`] is the
//! plain implementation used by the CLI and tests.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Title given to notes created without one.
pub const DEFAULT_TITLE: &str = "Untitled Note";

/// Reserved tag appended to drafts flagged `is:hide`.
pub const HIDE_TAG: &str = "@hide";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoteColor {
    Pink,
    Purple,
    Blue,
    Green,
    Yellow,
    Orange,
}

impl NoteColor {
    pub const ALL: [NoteColor; 6] = [
        NoteColor::Pink,
        NoteColor::Purple,
        NoteColor::Blue,
        NoteColor::Green,
        NoteColor::Yellow,
        NoteColor::Orange,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            NoteColor::Pink => "pink",
            NoteColor::Purple => "purple",
            NoteColor::Blue => "blue",
            NoteColor::Green => "green",
            NoteColor::Yellow => "yellow",
            NoteColor::Orange => "orange",
        }
    }
}

impl std::fmt::Display for NoteColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for NoteColor {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_ascii_lowercase();
        NoteColor::ALL
            .iter()
            .find(|c| c.as_str() == lower)
            .copied()
            .ok_or_else(|| format!("Invalid color: {}", s))
    }
}

/// The sub-command a hyper command body may start with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NestedKind {
    AiQuery,
    Wiki,
    Summary,
    Elaborate,
    Translate,
    Math,
    Define,
}

impl std::fmt::Display for NestedKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            NestedKind::AiQuery => "ai-query",
            NestedKind::Wiki => "wiki",
            NestedKind::Summary => "summary",
            NestedKind::Elaborate => "elaborate",
            NestedKind::Translate => "translate",
            NestedKind::Math => "math",
            NestedKind::Define => "define",
        };
        write!(f, "{}", name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NestedCommand {
    pub kind: NestedKind,
    pub query: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteDraft {
    pub title: String,
    pub content: String,
    pub tags: BTreeSet<String>,
    pub color: Option<NoteColor>,
    pub is_pinned: bool,
    pub is_favorite: bool,
    pub is_private: bool,
    pub is_hidden: bool,
    pub font_family: Option<String>,
    pub nested_command: Option<NestedCommand>,
}

impl NoteDraft {
    /// Creates a bare draft. An empty (or blank) title falls back to [`DEFAULT_TITLE`].
    pub fn new(title: &str, content: String) -> Self {
        let title = title.trim();
        Self {
            title: if title.is_empty() {
                DEFAULT_TITLE.to_string()
            } else {
                title.to_string()
            },
            content,
            tags: BTreeSet::new(),
            color: None,
            is_pinned: false,
            is_favorite: false,
            is_private: false,
            is_hidden: false,
            font_family: None,
            nested_command: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListType {
    Numbered,
    Step,
    Bullet,
}

impl ListType {
    pub fn label(&self) -> &'static str {
        match self {
            ListType::Numbered => "Numbered list",
            ListType::Step => "Step list",
            ListType::Bullet => "Bullet list",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListItem {
    pub position: u32,
    pub content: String,
    pub raw_line: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedList {
    pub items: Vec<ListItem>,
    pub list_type: ListType,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PositionalQuery {
    pub position: u32,
    /// Free text hint, only ever used for scoring.
    pub topic: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PositionalQueryResult {
    pub is_positional: bool,
    pub position: Option<u32>,
    pub topic: Option<String>,
    pub extracted_item: Option<String>,
    pub source_note: Option<String>,
    pub full_list_context: Option<String>,
}

impl PositionalQueryResult {
    pub fn not_positional() -> Self {
        Self::default()
    }

    pub fn unresolved(query: PositionalQuery) -> Self {
        Self {
            is_positional: true,
            position: Some(query.position),
            topic: query.topic,
            ..Self::default()
        }
    }
}

/// A note offered to the resolver as a possible answer source.
pub trait CandidateNote {
    fn title(&self) -> &str;
    fn content(&self) -> &str;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub title: String,
    #[serde(default)]
    pub content: String,
}

impl Note {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
        }
    }
}

impl CandidateNote for Note {
    fn title(&self) -> &str {
        &self.title
    }

    fn content(&self) -> &str {
        &self.content
    }
}

impl CandidateNote for NoteDraft {
    fn title(&self) -> &str {
        &self.title
    }

    fn content(&self) -> &str {
        &self.content
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draft_blank_title_falls_back() {
        let draft = NoteDraft::new("   ", "body".to_string());
        assert_eq!(draft.title, DEFAULT_TITLE);
        assert!(draft.tags.is_empty());
    }

    #[test]
    fn test_draft_title_trimmed() {
        let draft = NoteDraft::new("  Meeting ", String::new());
        assert_eq!(draft.title, "Meeting");
    }

    #[test]
    fn test_color_from_str_case_insensitive() {
        assert_eq!("Pink".parse::<NoteColor>(), Ok(NoteColor::Pink));
        assert_eq!("orange".parse::<NoteColor>(), Ok(NoteColor::Orange));
        assert!("red".parse::<NoteColor>().is_err());
    }

    #[test]
    fn test_nested_kind_serializes_kebab_case() {
        let json = serde_json::to_string(&NestedKind::AiQuery).unwrap();
        assert_eq!(json, "\"ai-query\"");
        assert_eq!(NestedKind::AiQuery.to_string(), "ai-query");
    }

    #[test]
    fn test_note_deserialize_without_content() {
        let note: Note = serde_json::from_str(r#"{"title": "Only title"}"#).unwrap();
        assert_eq!(note.title, "Only title");
        assert_eq!(note.content, "");
    }

    #[test]
    fn test_unresolved_result_keeps_query() {
        let result = PositionalQueryResult::unresolved(PositionalQuery {
            position: 3,
            topic: Some("bread".into()),
        });
        assert!(result.is_positional);
        assert_eq!(result.position, Some(3));
        assert_eq!(result.topic.as_deref(), Some("bread"));
        assert!(result.extracted_item.is_none());
    }
}
