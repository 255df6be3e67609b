//! Attribute flags inside a hyper command body.
//!
//! | Flag | Effect |
//! |------|--------|
//! | `##name` | Adds tag `name` (must start with a letter or `_`) |
//! | `c:<color>` | Sets the color if it is in the palette, dropped otherwise |
//! | `f:<font name>` | Sets the font family |
//! | `is:fav`, `is:star` | Favorite |
//! | `is:pin` | Pinned |
//! | `is:vault`, `is:private` | Private |
//! | `is:hide` | Hidden, plus the reserved `@hide` tag |
//!
//! Extraction runs in that order. Each step scans the body left by the previous one
//! and replaces every matched span with a single space, so a removed tag can never
//! glue two words into something that looks like a flag. Every step is a fresh,
//! stateless scan: a flag repeated N times is removed N times.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use std::collections::BTreeSet;

use crate::model::{NoteColor, NoteDraft, HIDE_TAG};

static TAG_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"##([A-Za-z_][A-Za-z0-9_-]*)").unwrap());
static COLOR_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\bc:([A-Za-z0-9]+)\b").unwrap());
static FONT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\bf:([A-Za-z0-9][A-Za-z0-9 ]*)").unwrap());
static FLAG_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\bis:(fav|star|pin|vault|private|hide)\b").unwrap());

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attributes {
    pub tags: BTreeSet<String>,
    pub color: Option<NoteColor>,
    pub font_family: Option<String>,
    pub is_pinned: bool,
    pub is_favorite: bool,
    pub is_private: bool,
    pub is_hidden: bool,
}

impl Attributes {
    pub fn is_empty(&self) -> bool {
        *self == Attributes::default()
    }

    pub fn apply_to(self, draft: &mut NoteDraft) {
        draft.tags.extend(self.tags);
        draft.color = self.color;
        draft.font_family = self.font_family;
        draft.is_pinned = self.is_pinned;
        draft.is_favorite = self.is_favorite;
        draft.is_private = self.is_private;
        draft.is_hidden = self.is_hidden;
    }
}

/// Removes every attribute flag from `body`.
///
/// Returns the body with flags replaced by single spaces (whitespace is not
/// collapsed here) and the attributes found.
pub fn extract_attributes(body: &str) -> (String, Attributes) {
    let mut attrs = Attributes::default();

    let text = TAG_RE
        .replace_all(body, |caps: &Captures| {
            attrs.tags.insert(caps[1].to_string());
            " "
        })
        .into_owned();

    let text = COLOR_RE
        .replace_all(&text, |caps: &Captures| {
            if attrs.color.is_none() {
                attrs.color = caps[1].parse().ok();
            }
            " "
        })
        .into_owned();

    let text = take_fonts(&text, &mut attrs.font_family);

    let text = FLAG_RE
        .replace_all(&text, |caps: &Captures| {
            match caps[1].to_ascii_lowercase().as_str() {
                "fav" | "star" => attrs.is_favorite = true,
                "pin" => attrs.is_pinned = true,
                "vault" | "private" => attrs.is_private = true,
                "hide" => {
                    attrs.is_hidden = true;
                    attrs.tags.insert(HIDE_TAG.to_string());
                }
                _ => {}
            }
            " "
        })
        .into_owned();

    (text, attrs)
}

/// Font names may contain spaces, so a greedy match can swallow the key of a
/// following flag (`f:Arial is:pin` matches `f:Arial is`). When the match is
/// directly followed by `:`, its last word is handed back to the text. A
/// single-word name has nothing to hand back and is kept (`f:Mono:bold` sets
/// `Mono`, leaving `:bold`).
fn take_fonts(text: &str, font: &mut Option<String>) -> String {
    let mut out = String::with_capacity(text.len());
    let mut last = 0;

    for caps in FONT_RE.captures_iter(text) {
        let (Some(whole), Some(value)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        let mut end = whole.end();
        if text[end..].starts_with(':') {
            if let Some(idx) = text[value.start()..end].rfind(' ') {
                end = value.start() + idx;
            }
        }
        let name = text[value.start()..end].trim();
        if font.is_none() && !name.is_empty() {
            *font = Some(name.to_string());
        }
        out.push_str(&text[last..whole.start()]);
        out.push(' ');
        last = end;
    }

    out.push_str(&text[last..]);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tags(list: &[&str]) -> BTreeSet<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_extract_tags() {
        let (text, attrs) = extract_attributes("Buy milk ##shopping ##errands_2");
        assert_eq!(attrs.tags, tags(&["shopping", "errands_2"]));
        assert!(!text.contains("##"));
    }

    #[test]
    fn test_tags_must_start_with_letter_or_underscore() {
        let (text, attrs) = extract_attributes("##123 and ##_private ##-x");
        assert_eq!(attrs.tags, tags(&["_private"]));
        assert!(text.contains("##123"));
    }

    #[test]
    fn test_duplicate_tags_collapse() {
        let (_, attrs) = extract_attributes("##work ##work ##work");
        assert_eq!(attrs.tags, tags(&["work"]));
    }

    #[test]
    fn test_extract_color() {
        let (text, attrs) = extract_attributes("Note c:purple");
        assert_eq!(attrs.color, Some(NoteColor::Purple));
        assert_eq!(text.trim(), "Note");
    }

    #[test]
    fn test_color_value_case_insensitive() {
        let (_, attrs) = extract_attributes("C:Yellow");
        assert_eq!(attrs.color, Some(NoteColor::Yellow));
    }

    #[test]
    fn test_invalid_color_removed_silently() {
        let (text, attrs) = extract_attributes("Note c:red rest");
        assert_eq!(attrs.color, None);
        assert!(!text.contains("c:red"));
        assert!(text.contains("rest"));
    }

    #[test]
    fn test_first_valid_color_wins() {
        let (_, attrs) = extract_attributes("c:red c:green c:blue");
        assert_eq!(attrs.color, Some(NoteColor::Green));
    }

    #[test]
    fn test_color_word_must_end_at_boundary() {
        let (text, attrs) = extract_attributes("see c:blue2 now");
        assert_eq!(attrs.color, None);
        assert_eq!(text.split_whitespace().collect::<Vec<_>>(), vec!["see", "now"]);
    }

    #[test]
    fn test_color_needs_word_boundary() {
        let (text, attrs) = extract_attributes("see abc:pink");
        assert_eq!(attrs.color, None);
        assert!(text.contains("abc:pink"));
    }

    #[test]
    fn test_extract_font_up_to_separator() {
        let (text, attrs) = extract_attributes("Body || f:Roboto Mono || more");
        assert_eq!(attrs.font_family.as_deref(), Some("Roboto Mono"));
        assert!(text.contains("more"));
        assert!(!text.contains("Roboto"));
    }

    #[test]
    fn test_font_does_not_swallow_following_flag() {
        let (text, attrs) = extract_attributes("f:Fira Code is:pin");
        assert_eq!(attrs.font_family.as_deref(), Some("Fira Code"));
        assert!(attrs.is_pinned);
        assert_eq!(text.trim(), "");
    }

    #[test]
    fn test_single_word_font_followed_by_colon_is_removed() {
        let (text, attrs) = extract_attributes("body f:Mono:bold");
        assert_eq!(attrs.font_family.as_deref(), Some("Mono"));
        assert!(!text.contains("f:"));
        assert!(text.contains("body"));
    }

    #[test]
    fn test_boolean_flags() {
        let (text, attrs) = extract_attributes("x is:fav is:pin is:vault is:hide");
        assert!(attrs.is_favorite);
        assert!(attrs.is_pinned);
        assert!(attrs.is_private);
        assert!(attrs.is_hidden);
        assert_eq!(attrs.tags, tags(&[HIDE_TAG]));
        assert_eq!(text.trim(), "x");
    }

    #[test]
    fn test_flag_aliases() {
        let (_, attrs) = extract_attributes("is:star is:private");
        assert!(attrs.is_favorite);
        assert!(attrs.is_private);
    }

    #[test]
    fn test_repeated_identical_flags_all_consumed() {
        let (text, attrs) = extract_attributes("a is:fav b is:fav c is:fav is:fav");
        assert!(attrs.is_favorite);
        assert!(!text.contains("is:"));
        assert_eq!(text.split_whitespace().collect::<Vec<_>>(), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_unknown_flag_left_alone() {
        let (text, attrs) = extract_attributes("is:favorite is:archived");
        assert!(attrs.is_empty());
        assert!(text.contains("is:favorite"));
        assert!(text.contains("is:archived"));
    }

    #[test]
    fn test_removed_tag_does_not_glue_words() {
        let (text, _) = extract_attributes("Content##tag||is:fav");
        assert!(!text.contains("Content||"));
        assert!(text.contains("Content "));
    }

    #[test]
    fn test_apply_to_draft() {
        let (_, attrs) = extract_attributes("##a c:pink f:Inter is:pin");
        let mut draft = NoteDraft::new("T", String::new());
        attrs.apply_to(&mut draft);
        assert_eq!(draft.tags, tags(&["a"]));
        assert_eq!(draft.color, Some(NoteColor::Pink));
        assert_eq!(draft.font_family.as_deref(), Some("Inter"));
        assert!(draft.is_pinned);
        assert!(!draft.is_favorite);
    }
}
