//! Grounding block handed to the chat-completion service.
//!
//! When a positional question was answered from a note, the answer is spelled out
//! verbatim so the model repeats it instead of guessing:
//!
//! ```text
//! Source note: "AI lecture"
//! Requested item: #3 (topic: Knowledge Representation)
//! Answer: Production rules
//!
//! Full list context:
//! [Numbered list]
//! 1. Semantic networks
//! 2. Frames
//! 3. Production rules
//! ```

use crate::model::PositionalQueryResult;

/// Builds the grounding block, or `None` when nothing was extracted.
pub fn build_grounding_context(result: &PositionalQueryResult) -> Option<String> {
    if !result.is_positional {
        return None;
    }
    let item = result.extracted_item.as_deref()?;
    let position = result.position?;

    let mut block = String::new();
    if let Some(source) = &result.source_note {
        block.push_str(&format!("Source note: \"{}\"\n", source));
    }
    block.push_str(&format!("Requested item: #{}", position));
    if let Some(topic) = &result.topic {
        block.push_str(&format!(" (topic: {})", topic));
    }
    block.push_str(&format!("\nAnswer: {}", item));
    if let Some(context) = &result.full_list_context {
        block.push_str(&format!("\n\nFull list context:\n{}", context));
    }
    Some(block)
}
