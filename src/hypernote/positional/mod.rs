//! # Positional Queries
//!
//! Answers questions like "what's the 3rd step of making sourdough" from the
//! user's own notes:
//!
//! 1. [`detector`] decides whether the question asks for an item by position and
//!    pulls out the position and an optional topic.
//! 2. [`resolver`] parses each candidate note into lists, scores the notes that
//!    have an item at that position, and extracts the item from the best one.
//! 3. [`grounding`] renders the answer as a context block for the chat model.

pub mod detector;
pub mod grounding;
pub mod resolver;

pub use detector::{detect_positional_query, ordinal_value};
pub use grounding::build_grounding_context;
pub use resolver::{resolve, resolve_query, resolve_with, score_note, topic_words};
