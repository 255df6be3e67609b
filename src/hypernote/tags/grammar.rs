//! Regex grammar for `@type-name/action` commands.
//!
//! Each command shape has its own matcher. Matchers are tried in a fixed priority
//! order (see [`TAG_MATCHERS`] and [`GROUP_MATCHERS`]) and the first structural match
//! wins. Keywords are case-sensitive; names are kept as typed, minus surrounding
//! whitespace.
//!
//! Every matcher returns `Result<Option<T>, RenameError>`:
//! - `Ok(Some(cmd))`: the input is this command
//! - `Ok(None)`: the input is not this command (including malformed input)
//! - `Err(RenameError)`: the input is a rename whose new name is invalid

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use thiserror::Error;

use super::validation::{validate_rename_target, TagValidationError};
use super::{GroupAction, GroupCommand, ManagementCommand, TagCommand, TagType};

static EDIT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^@(blue|green|grey)-([^/]*)/edit-(.*)$").unwrap());
static DELETE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^@(blue|green|grey)-([^/]*)/delete$").unwrap());
static PIN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^@(blue|green|grey|orange)-([^/]*)/pin$").unwrap());
static STAR_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^@(blue|green|grey|orange)-([^/]*)/(?:star|fav)$").unwrap());
static GROUP_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^@orange-([^/]*)/(create|delete|etots)$").unwrap());
static GROUP_RENAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^@orange-([^/]*)/edit-(.*)$").unwrap());
static SEARCH_TERM_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^@(blue|green|grey|orange)-([^/]*)$").unwrap());
static TYPE_ONLY_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^@(blue|green|grey|orange)-?$").unwrap());

pub type Matcher<T> = fn(&str) -> Result<Option<T>, RenameError>;

/// Tag command shapes in priority order.
pub const TAG_MATCHERS: &[Matcher<TagCommand>] =
    &[edit_command, delete_command, pin_command, star_command];

/// Group command shapes in priority order.
pub const GROUP_MATCHERS: &[Matcher<GroupCommand>] = &[
    group_action,
    group_create,
    group_delete,
    group_enter,
    group_rename,
];

/// A rename command whose new name failed validation.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[error("cannot rename {tag_type} '{old_name}' to '{new_name}': {reason}")]
pub struct RenameError {
    pub tag_type: TagType,
    pub old_name: String,
    pub new_name: String,
    pub reason: TagValidationError,
}

/// A half-typed `@type-partialName`, used to drive tag autocomplete.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchTerm {
    pub tag_type: TagType,
    pub search_term: String,
}

/// Parses any tag or group command. Tag commands take precedence.
pub fn parse_command(input: &str) -> Result<Option<ManagementCommand>, RenameError> {
    if let Some(cmd) = parse_tag_command(input)? {
        tracing::debug!(?cmd, "tag command recognized");
        return Ok(Some(ManagementCommand::Tag(cmd)));
    }
    if let Some(cmd) = parse_group_command(input)? {
        tracing::debug!(?cmd, "group command recognized");
        return Ok(Some(ManagementCommand::Group(cmd)));
    }
    Ok(None)
}

pub fn parse_tag_command(input: &str) -> Result<Option<TagCommand>, RenameError> {
    first_match(TAG_MATCHERS, input)
}

pub fn parse_group_command(input: &str) -> Result<Option<GroupCommand>, RenameError> {
    first_match(GROUP_MATCHERS, input)
}

fn first_match<T>(matchers: &[Matcher<T>], input: &str) -> Result<Option<T>, RenameError> {
    for matcher in matchers {
        if let Some(cmd) = matcher(input)? {
            return Ok(Some(cmd));
        }
    }
    Ok(None)
}

/// `@(blue|green|grey)-<old>/edit-<new>`
pub fn edit_command(input: &str) -> Result<Option<TagCommand>, RenameError> {
    let Some(caps) = EDIT_RE.captures(input.trim()) else {
        return Ok(None);
    };
    let Some(tag_type) = tag_type_of(&caps[1]) else {
        return Ok(None);
    };
    let Some((old_name, new_name)) = rename_pair(tag_type, &caps[2], &caps[3])? else {
        return Ok(None);
    };
    Ok(Some(TagCommand::Edit {
        tag_type,
        old_name,
        new_name,
    }))
}

/// `@(blue|green|grey)-<name>/delete`
pub fn delete_command(input: &str) -> Result<Option<TagCommand>, RenameError> {
    Ok(named(&DELETE_RE, input).map(|(tag_type, tag_name)| TagCommand::Delete {
        tag_type,
        tag_name,
    }))
}

/// `@(blue|green|grey|orange)-<name>/pin`
pub fn pin_command(input: &str) -> Result<Option<TagCommand>, RenameError> {
    Ok(named(&PIN_RE, input).map(|(tag_type, tag_name)| TagCommand::Pin { tag_type, tag_name }))
}

/// `@(blue|green|grey|orange)-<name>/star` or `/fav`
pub fn star_command(input: &str) -> Result<Option<TagCommand>, RenameError> {
    Ok(named(&STAR_RE, input).map(|(tag_type, tag_name)| TagCommand::Star { tag_type, tag_name }))
}

/// Bare `/drop`, `/view`, `/remove` or `/back`.
pub fn group_action(input: &str) -> Result<Option<GroupCommand>, RenameError> {
    let input = input.trim();
    Ok(GroupAction::ALL
        .iter()
        .find(|action| action.keyword() == input)
        .map(|kind| GroupCommand::Action { kind: *kind }))
}

/// `@orange-<name>/create`
pub fn group_create(input: &str) -> Result<Option<GroupCommand>, RenameError> {
    Ok(group_keyword(input, "create").map(|group_name| GroupCommand::Create { group_name }))
}

/// `@orange-<name>/delete`
pub fn group_delete(input: &str) -> Result<Option<GroupCommand>, RenameError> {
    Ok(group_keyword(input, "delete").map(|group_name| GroupCommand::Delete { group_name }))
}

/// `@orange-<name>/etots`
pub fn group_enter(input: &str) -> Result<Option<GroupCommand>, RenameError> {
    Ok(group_keyword(input, "etots").map(|group_name| GroupCommand::Enter { group_name }))
}

/// `@orange-<old>/edit-<new>`
pub fn group_rename(input: &str) -> Result<Option<GroupCommand>, RenameError> {
    let Some(caps) = GROUP_RENAME_RE.captures(input.trim()) else {
        return Ok(None);
    };
    let Some((old_name, new_name)) = rename_pair(TagType::Orange, &caps[1], &caps[2])? else {
        return Ok(None);
    };
    Ok(Some(GroupCommand::Rename { old_name, new_name }))
}

/// Tag types whose name starts with what follows `@`, for autocomplete.
///
/// `"@g"` yields green and grey, `"@"` yields all four. Anything already past the
/// type (a `-`, `/` or whitespace) yields nothing.
pub fn partial_tag_types(input: &str) -> Vec<TagType> {
    let Some(prefix) = input.trim().strip_prefix('@') else {
        return Vec::new();
    };
    if prefix.contains(['-', '/']) || prefix.contains(char::is_whitespace) {
        return Vec::new();
    }
    TagType::ALL
        .iter()
        .filter(|t| t.as_str().starts_with(prefix))
        .copied()
        .collect()
}

/// Splits a half-typed `@type-partialName` (no action yet) into its parts.
/// The search term may be empty right after the hyphen.
pub fn extract_search_term(input: &str) -> Option<SearchTerm> {
    let caps = SEARCH_TERM_RE.captures(input.trim())?;
    Some(SearchTerm {
        tag_type: tag_type_of(&caps[1])?,
        search_term: caps[2].to_string(),
    })
}

/// Recognizes `@type` or `@type-` with nothing typed after it.
pub fn extract_tag_type_only(input: &str) -> Option<TagType> {
    let caps = TYPE_ONLY_RE.captures(input.trim())?;
    tag_type_of(&caps[1])
}

fn tag_type_of(keyword: &str) -> Option<TagType> {
    keyword.parse().ok()
}

fn named(re: &Regex, input: &str) -> Option<(TagType, String)> {
    let caps = re.captures(input.trim())?;
    let tag_type = tag_type_of(&caps[1])?;
    let name = caps[2].trim();
    if name.is_empty() {
        return None;
    }
    Some((tag_type, name.to_string()))
}

fn group_keyword(input: &str, keyword: &str) -> Option<String> {
    let caps = GROUP_RE.captures(input.trim())?;
    if &caps[2] != keyword {
        return None;
    }
    let name = caps[1].trim();
    if name.is_empty() {
        return None;
    }
    Some(name.to_string())
}

/// Trims both names. A blank name on either side is not a rename at all; a
/// non-blank new name with invalid characters is a [`RenameError`].
fn rename_pair(
    tag_type: TagType,
    old: &str,
    new: &str,
) -> Result<Option<(String, String)>, RenameError> {
    let (old, new) = (old.trim(), new.trim());
    if old.is_empty() || new.is_empty() {
        return Ok(None);
    }
    validate_rename_target(new).map_err(|reason| RenameError {
        tag_type,
        old_name: old.to_string(),
        new_name: new.to_string(),
        reason,
    })?;
    Ok(Some((old.to_string(), new.to_string())))
}
