//! Tag management commands.
//!
//! Tags come in four types, each typed with its color name:
//!
//! | Type | Meaning |
//! |------|---------|
//! | `blue` | Folder |
//! | `green` | Context within a folder |
//! | `grey` | Loose label |
//! | `orange` | Named group of grey tags |
//!
//! Commands are typed into the search bar as `@<type>-<name>/<action>`, for
//! example `@grey-work/pin` or `@blue-inbox/edit-Archive`. Orange groups add
//! `/create`, `/delete`, `/etots` (enter the orange space) and, once a group has
//! been entered, the bare actions `/drop`, `/view`, `/remove` and `/back`.
//!
//! See [`grammar`] for the matchers and [`validation`] for the rename rules.

pub mod grammar;
pub mod validation;

use serde::{Deserialize, Serialize};

pub use grammar::{
    extract_search_term, extract_tag_type_only, parse_command, parse_group_command,
    parse_tag_command, partial_tag_types, RenameError, SearchTerm,
};
pub use validation::{validate_rename_target, TagValidationError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TagType {
    Blue,
    Green,
    Grey,
    Orange,
}

impl TagType {
    pub const ALL: [TagType; 4] = [TagType::Blue, TagType::Green, TagType::Grey, TagType::Orange];

    pub fn as_str(&self) -> &'static str {
        match self {
            TagType::Blue => "blue",
            TagType::Green => "green",
            TagType::Grey => "grey",
            TagType::Orange => "orange",
        }
    }
}

impl std::fmt::Display for TagType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for TagType {
    type Err = String;

    /// Case-sensitive: only the lowercase keywords are tag types.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TagType::ALL
            .iter()
            .find(|t| t.as_str() == s)
            .copied()
            .ok_or_else(|| format!("Invalid tag type: {}", s))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum TagCommand {
    Edit {
        tag_type: TagType,
        old_name: String,
        new_name: String,
    },
    Delete {
        tag_type: TagType,
        tag_name: String,
    },
    Pin {
        tag_type: TagType,
        tag_name: String,
    },
    Star {
        tag_type: TagType,
        tag_name: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GroupAction {
    Drop,
    View,
    Remove,
    Back,
}

impl GroupAction {
    pub const ALL: [GroupAction; 4] = [
        GroupAction::Drop,
        GroupAction::View,
        GroupAction::Remove,
        GroupAction::Back,
    ];

    pub fn keyword(&self) -> &'static str {
        match self {
            GroupAction::Drop => "/drop",
            GroupAction::View => "/view",
            GroupAction::Remove => "/remove",
            GroupAction::Back => "/back",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum GroupCommand {
    Create { group_name: String },
    Delete { group_name: String },
    Enter { group_name: String },
    Rename { old_name: String, new_name: String },
    Action { kind: GroupAction },
}

/// Either kind of management command the grammar recognizes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ManagementCommand {
    Tag(TagCommand),
    Group(GroupCommand),
}
