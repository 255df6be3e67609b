//! # List Structure Extraction
//!
//! Turns a free-text note body into the enumerated lists it contains, so a later
//! question like "3rd step of X" can be answered with the exact item.
//!
//! ## Two Passes
//!
//! **Pass A** ([`parse_marker_list`]) looks for *step markers* anywhere in the text:
//! lines starting with `N.`, `N)`, `N:` or `Step N -`/`Step N:`. With at least two
//! markers, each item runs from its marker to the next one, so multi-paragraph steps
//! keep all their lines:
//!
//! ```text
//! 1. Preheat the oven        ┐
//!                            │ item 1
//!    Use the middle rack.    ┘
//! 2. Mix the dough           ─ item 2
//! ```
//!
//! **Pass B** ([`parse_block_lists`]) only runs when pass A finds fewer than two
//! markers. It reads blank-line separated blocks, also accepts bullets (`-`, `*`,
//! `•`), and treats a plain line right after an item as that item's continuation.
//! Bullets carry no number, so they are numbered 1, 2, 3... within their list.
//! A block needs at least two items to count as a list.
//!
//! ## Known Ambiguities
//!
//! - The continuation rule is a heuristic: a prose line directly under a list is
//!   glued to the last item.
//! - Numbering is taken as written. `1. 2. 2. 5.` stays that way, and position
//!   lookups return the first item carrying a position.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::model::{ListItem, ListType, ParsedList};

static NUMBERED_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(\d+)[.):]\s*(.+)$").unwrap());
static STEP_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^step\s*(\d+)\s*[-—:]\s*(.+)$").unwrap());
static BULLET_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[-*•]\s+(.+)$").unwrap());

/// Numbered marker shapes, in the order they are tried.
static NUMBERED_MARKERS: Lazy<[(&'static Regex, ListType); 2]> =
    Lazy::new(|| [(&*NUMBERED_RE, ListType::Numbered), (&*STEP_RE, ListType::Step)]);

#[derive(Debug, Clone, PartialEq, Eq)]
struct Marker<'a> {
    list_type: ListType,
    /// `None` for bullets.
    position: Option<u32>,
    title: &'a str,
}

fn numbered_marker(line: &str) -> Option<Marker<'_>> {
    NUMBERED_MARKERS.iter().find_map(|(re, list_type)| {
        let caps = re.captures(line)?;
        let position = caps.get(1)?.as_str().parse::<u32>().ok().filter(|n| *n > 0)?;
        Some(Marker {
            list_type: *list_type,
            position: Some(position),
            title: caps.get(2)?.as_str().trim(),
        })
    })
}

fn block_marker(line: &str) -> Option<Marker<'_>> {
    numbered_marker(line).or_else(|| {
        let caps = BULLET_RE.captures(line)?;
        Some(Marker {
            list_type: ListType::Bullet,
            position: None,
            title: caps.get(1)?.as_str().trim(),
        })
    })
}

/// Extracts every list in `content`: pass A when it finds two or more markers,
/// pass B otherwise.
pub fn parse_lists(content: &str) -> Vec<ParsedList> {
    let lists = match parse_marker_list(content) {
        Some(list) => vec![list],
        None => parse_block_lists(content),
    };
    tracing::trace!(lists = lists.len(), "lists extracted");
    lists
}

/// Pass A: one list built from all numbered/step markers in the text.
///
/// Returns `None` with fewer than two markers. The list is a step list when the
/// first marker is `Step N`, numbered otherwise.
pub fn parse_marker_list(content: &str) -> Option<ParsedList> {
    let lines: Vec<&str> = content.lines().collect();
    let markers: Vec<(usize, Marker<'_>)> = lines
        .iter()
        .enumerate()
        .filter_map(|(idx, line)| numbered_marker(line.trim()).map(|m| (idx, m)))
        .collect();

    if markers.len() < 2 {
        return None;
    }

    let items = markers
        .iter()
        .enumerate()
        .map(|(k, (line_idx, marker))| {
            let end = markers
                .get(k + 1)
                .map(|(next_idx, _)| *next_idx)
                .unwrap_or(lines.len());

            let mut parts = vec![marker.title];
            parts.extend(lines[line_idx + 1..end].iter().map(|l| l.trim_end()));
            while parts.len() > 1 && parts.last().is_some_and(|p| p.trim().is_empty()) {
                parts.pop();
            }

            ListItem {
                position: marker.position.unwrap_or(1),
                content: parts.join("\n"),
                raw_line: lines[*line_idx].to_string(),
            }
        })
        .collect();

    Some(ParsedList {
        items,
        list_type: markers[0].1.list_type,
    })
}

/// Pass B: blank-line separated blocks of numbered, step or bullet items.
pub fn parse_block_lists(content: &str) -> Vec<ParsedList> {
    let mut lists = Vec::new();
    let mut current: Option<ParsedList> = None;

    for line in content.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            close_list(&mut current, &mut lists);
            continue;
        }

        if let Some(marker) = block_marker(trimmed) {
            if current
                .as_ref()
                .is_some_and(|list| list.list_type != marker.list_type)
            {
                close_list(&mut current, &mut lists);
            }
            let list = current.get_or_insert_with(|| ParsedList {
                items: Vec::new(),
                list_type: marker.list_type,
            });
            let position = marker
                .position
                .unwrap_or_else(|| u32::try_from(list.items.len() + 1).unwrap_or(u32::MAX));
            list.items.push(ListItem {
                position,
                content: marker.title.to_string(),
                raw_line: line.to_string(),
            });
        } else if let Some(item) = current.as_mut().and_then(|list| list.items.last_mut()) {
            item.content.push(' ');
            item.content.push_str(trimmed);
        }
    }

    close_list(&mut current, &mut lists);
    lists
}

fn close_list(current: &mut Option<ParsedList>, lists: &mut Vec<ParsedList>) {
    if let Some(list) = current.take() {
        if list.items.len() >= 2 {
            lists.push(list);
        }
    }
}

/// The first item of `list` at `position`.
pub fn extract_positional_item(list: &ParsedList, position: u32) -> Option<&ListItem> {
    list.items.iter().find(|item| item.position == position)
}

/// The item at `position` in the first list that has one.
pub fn find_positional_item(lists: &[ParsedList], position: u32) -> Option<&ListItem> {
    lists
        .iter()
        .find_map(|list| extract_positional_item(list, position))
}

pub fn total_items(lists: &[ParsedList]) -> usize {
    lists.iter().map(|list| list.items.len()).sum()
}

/// Human-readable dump of `lists`, used as grounding context.
///
/// ```text
/// [Numbered list]
/// 1. A
/// 2. B
///
/// [Bullet list]
/// 1. x
/// 2. y
/// ```
pub fn format_list_context(lists: &[ParsedList]) -> String {
    lists
        .iter()
        .map(|list| {
            let mut block = format!("[{}]", list.list_type.label());
            for item in &list.items {
                block.push_str(&format!("\n{}. {}", item.position, item.content));
            }
            block
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}
