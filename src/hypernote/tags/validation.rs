//! Rename target validation.
//!
//! A tag or group may only be renamed to a name made of:
//! - ASCII letters and digits
//! - Spaces, underscores (`_`) and hyphens (`-`)
//!
//! Surrounding whitespace is ignored; an empty name is rejected.

use serde::Serialize;

/// Validates the new name of a `/edit-<new>` command.
///
/// # Examples
/// ```
/// use hypernote::tags::validation::validate_rename_target;
///
/// assert!(validate_rename_target("work").is_ok());
/// assert!(validate_rename_target("side project").is_ok());
/// assert!(validate_rename_target("q3_goals-2024").is_ok());
///
/// assert!(validate_rename_target("").is_err());
/// assert!(validate_rename_target("   ").is_err());
/// assert!(validate_rename_target("work!").is_err());
/// assert!(validate_rename_target("a/b").is_err());
/// ```
pub fn validate_rename_target(name: &str) -> Result<(), TagValidationError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(TagValidationError::Empty);
    }

    match name.chars().find(|ch| !is_valid_name_char(*ch)) {
        Some(ch) => Err(TagValidationError::InvalidCharacter(ch)),
        None => Ok(()),
    }
}

fn is_valid_name_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || ch == ' ' || ch == '_' || ch == '-'
}

/// Error type for rename target validation failures.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TagValidationError {
    /// New name is empty
    Empty,
    /// New name contains a character outside `[A-Za-z0-9 _-]`
    InvalidCharacter(char),
}

impl std::fmt::Display for TagValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TagValidationError::Empty => write!(f, "new name cannot be empty"),
            TagValidationError::InvalidCharacter(ch) => {
                write!(
                    f,
                    "new name contains invalid character '{}' (only letters, digits, space, underscore and hyphen allowed)",
                    ch
                )
            }
        }
    }
}

impl std::error::Error for TagValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_simple_names() {
        assert!(validate_rename_target("work").is_ok());
        assert!(validate_rename_target("Work2").is_ok());
    }

    #[test]
    fn test_valid_names_with_separators() {
        assert!(validate_rename_target("side project").is_ok());
        assert!(validate_rename_target("my-project").is_ok());
        assert!(validate_rename_target("my_project").is_ok());
        assert!(validate_rename_target("-leading-hyphen").is_ok());
    }

    #[test]
    fn test_surrounding_whitespace_ignored() {
        assert!(validate_rename_target("  work  ").is_ok());
    }

    #[test]
    fn test_invalid_empty() {
        assert_eq!(validate_rename_target(""), Err(TagValidationError::Empty));
        assert_eq!(validate_rename_target(" \t"), Err(TagValidationError::Empty));
    }

    #[test]
    fn test_invalid_characters() {
        assert_eq!(
            validate_rename_target("work!"),
            Err(TagValidationError::InvalidCharacter('!'))
        );
        assert_eq!(
            validate_rename_target("a/b"),
            Err(TagValidationError::InvalidCharacter('/'))
        );
        assert_eq!(
            validate_rename_target("café"),
            Err(TagValidationError::InvalidCharacter('é'))
        );
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            TagValidationError::Empty.to_string(),
            "new name cannot be empty"
        );
        assert!(TagValidationError::InvalidCharacter('#')
            .to_string()
            .contains("'#'"));
    }
}
