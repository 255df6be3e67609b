//! # Hyper Commands
//!
//! A hyper command creates a fully attributed note from a single line:
//!
//! ```text
//! @new-Title || Content || ##tag c:blue f:Inter is:pin
//! ```
//!
//! ## Parsing Pipeline
//!
//! 1. **Prefix**: `@new-` (any case) is stripped. Anything else is not a hyper command.
//! 2. **Title split**: the first `||` separates title from body, unless the text is a
//!    nested command (`@new-@pai-...`) or URL-like (`@new-https://...`). Those are
//!    never split, so a `||` or `://` inside them can't produce a bogus title.
//! 3. **Attributes**: see [`attributes`]. Flags may appear anywhere in the body, in
//!    any order.
//! 4. **Cleanup**: leftover `||` separators at the edges and empty `|| ||` segments
//!    are removed, whitespace is collapsed.
//! 5. **Nested command**: see [`nested`]. The cleaned body stays the note content
//!    either way.
//!
//! ## Examples
//!
//! | Input | Title | Content |
//! |-------|-------|---------|
//! | `@new-Meeting \|\| Discussion notes` | `Meeting` | `Discussion notes` |
//! | `@new-Just some text` | `Untitled Note` | `Just some text` |
//! | `@new-https://a.io/x \|\| y` | `Untitled Note` | `https://a.io/x \|\| y` |

pub mod attributes;
pub mod nested;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::model::{NoteDraft, DEFAULT_TITLE};

pub use attributes::{extract_attributes, Attributes};
pub use nested::{detect_nested_command, starts_with_nested_keyword};

/// The command prefix, matched case-insensitively.
pub const HYPER_PREFIX: &str = "@new-";

const DELIMITER: &str = "||";

static DELIMITER_RUN_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\|\|(?:\s*\|\|)+").unwrap());
static HORIZONTAL_SPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^\S\r\n]+").unwrap());

pub fn is_hyper_command(input: &str) -> bool {
    strip_prefix_ignore_case(input.trim_start(), HYPER_PREFIX).is_some()
}

/// Parses a hyper command into a draft, titling untitled notes "Untitled Note".
pub fn parse_hyper_command(input: &str) -> Option<NoteDraft> {
    parse_hyper_command_with_title(input, DEFAULT_TITLE)
}

/// Like [`parse_hyper_command`] with a custom fallback title.
pub fn parse_hyper_command_with_title(input: &str, default_title: &str) -> Option<NoteDraft> {
    let rest = strip_prefix_ignore_case(input.trim_start(), HYPER_PREFIX)?;

    let (title, body) = split_title(rest);
    let (body, attrs) = extract_attributes(body);
    let content = clean_body(&body);

    let mut draft = NoteDraft::new(title.unwrap_or(default_title), content);
    attrs.apply_to(&mut draft);
    draft.nested_command = detect_nested_command(&draft.content);

    tracing::debug!(
        title = %draft.title,
        tags = draft.tags.len(),
        nested = ?draft.nested_command.as_ref().map(|c| c.kind),
        "hyper command parsed"
    );
    Some(draft)
}

/// Splits on the first `||` into `(title, body)`. Returns no title when the text
/// is a nested command, looks like a URL, has no delimiter, or the title part is
/// blank.
pub fn split_title(text: &str) -> (Option<&str>, &str) {
    if starts_with_nested_keyword(text) || is_url_like(text) {
        return (None, text);
    }
    match text.split_once(DELIMITER) {
        Some((title, body)) => {
            let title = title.trim();
            ((!title.is_empty()).then_some(title), body)
        }
        None => (None, text),
    }
}

pub fn is_url_like(text: &str) -> bool {
    let text = text.trim_start();
    strip_prefix_ignore_case(text, "http://").is_some()
        || strip_prefix_ignore_case(text, "https://").is_some()
        || strip_prefix_ignore_case(text, "www.").is_some()
        || text.contains("://")
}

/// Removes separator debris left behind by attribute extraction and collapses
/// whitespace. Line breaks are kept.
pub fn clean_body(body: &str) -> String {
    let collapsed = DELIMITER_RUN_RE.replace_all(body, DELIMITER);

    let mut text = collapsed.trim();
    loop {
        if let Some(rest) = text.strip_suffix(DELIMITER) {
            text = rest.trim();
        } else if let Some(rest) = text.strip_prefix(DELIMITER) {
            text = rest.trim();
        } else {
            break;
        }
    }

    text.lines()
        .map(|line| HORIZONTAL_SPACE_RE.replace_all(line.trim(), " "))
        .collect::<Vec<_>>()
        .join("\n")
        .trim()
        .to_string()
}

/// ASCII case-insensitive `strip_prefix`.
pub(crate) fn strip_prefix_ignore_case<'a>(text: &'a str, prefix: &str) -> Option<&'a str> {
    let head = text.get(..prefix.len())?;
    if head.eq_ignore_ascii_case(prefix) {
        Some(&text[prefix.len()..])
    } else {
        None
    }
}
