//! Picks the note that best answers a positional question and pulls the item out.
//!
//! Every candidate note is parsed into lists. Notes without an item at the
//! requested position are skipped; the rest are scored:
//!
//! ```text
//! score = base_score
//!       + topic_word_weight * (topic words found in title + content)
//!       + item_count_weight * (total list items in the note)
//! ```
//!
//! Topic words are the whitespace-separated words of the topic, lowercased, with
//! punctuation trimmed off the edges; words shorter than `min_topic_word_len` are
//! ignored. A word counts once if it occurs anywhere in the note (substring match).
//! On a tie the earlier note keeps its place.

use crate::config::ScoringConfig;
use crate::lists::{find_positional_item, format_list_context, parse_lists, total_items};
use crate::model::{CandidateNote, PositionalQuery, PositionalQueryResult};

use super::detector::detect_positional_query;

struct Candidate<'a> {
    title: &'a str,
    item: String,
    context: String,
    score: f64,
}

/// Detects and resolves `question` against `notes` with default weights.
pub fn resolve<N: CandidateNote>(question: &str, notes: &[N]) -> PositionalQueryResult {
    resolve_with(question, notes, &ScoringConfig::default())
}

/// Detects and resolves `question` against `notes`.
///
/// Non-positional questions return [`PositionalQueryResult::not_positional`]
/// without looking at the notes. A positional question no note can answer keeps
/// its position and topic with the answer fields left empty.
pub fn resolve_with<N: CandidateNote>(
    question: &str,
    notes: &[N],
    scoring: &ScoringConfig,
) -> PositionalQueryResult {
    match detect_positional_query(question) {
        Some(query) => resolve_query(query, notes, scoring),
        None => PositionalQueryResult::not_positional(),
    }
}

/// Resolves an already detected query.
pub fn resolve_query<N: CandidateNote>(
    query: PositionalQuery,
    notes: &[N],
    scoring: &ScoringConfig,
) -> PositionalQueryResult {
    let words = query
        .topic
        .as_deref()
        .map(|topic| topic_words(topic, scoring.min_topic_word_len))
        .unwrap_or_default();

    let mut best: Option<Candidate<'_>> = None;
    for note in notes {
        let lists = parse_lists(note.content());
        let Some(item) = find_positional_item(&lists, query.position) else {
            continue;
        };

        let haystack = format!("{} {}", note.title(), note.content()).to_lowercase();
        let score = score_note(&haystack, &words, total_items(&lists), scoring);
        tracing::trace!(title = note.title(), score, "positional candidate");

        if best.as_ref().map_or(true, |b| score > b.score) {
            best = Some(Candidate {
                title: note.title(),
                item: item.content.clone(),
                context: format_list_context(&lists),
                score,
            });
        }
    }

    let Some(best) = best else {
        tracing::debug!(position = query.position, "no note has an item at this position");
        return PositionalQueryResult::unresolved(query);
    };

    tracing::debug!(title = best.title, score = best.score, "positional query resolved");
    PositionalQueryResult {
        is_positional: true,
        position: Some(query.position),
        topic: query.topic,
        extracted_item: Some(best.item),
        source_note: Some(best.title.to_string()),
        full_list_context: Some(best.context),
    }
}

/// Scoring words of a topic: lowercased, edge punctuation removed, short words dropped.
pub fn topic_words(topic: &str, min_len: usize) -> Vec<String> {
    topic
        .split_whitespace()
        .map(|word| {
            word.trim_matches(|c: char| !c.is_alphanumeric())
                .to_lowercase()
        })
        .filter(|word| word.chars().count() >= min_len)
        .collect()
}

/// Scores one note. `haystack` must already be lowercased.
pub fn score_note(
    haystack: &str,
    topic_words: &[String],
    item_count: usize,
    scoring: &ScoringConfig,
) -> f64 {
    let matched = topic_words
        .iter()
        .filter(|word| haystack.contains(word.as_str()))
        .count();
    scoring.base_score
        + scoring.topic_word_weight * matched as f64
        + scoring.item_count_weight * item_count as f64
}
