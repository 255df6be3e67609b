//! # Hypernote Architecture
//!
//! Hypernote is the **text-to-structure layer** of a note-taking application. It turns
//! what a user types into a search bar or note editor into structured intents, and it
//! turns free-form note bodies into enumerated lists that can answer questions such as
//! "what is the 3rd step of X" with the exact item instead of a guess.
//!
//! The grammars and the retrieval code never touch storage or the network; only
//! [`config`] reads a file. The note store, the chat-completion service and the
//! sub-command executors are collaborators that consume what this crate produces.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, loads config/notes, prints results     │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Routes a raw input line to the right grammar             │
//! │  - Runs positional queries with configured weights          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Grammar & Retrieval Layer                                  │
//! │  - tags/: tag and group command grammar                     │
//! │  - hyper/: `@new-` note creation command                    │
//! │  - lists.rs: list structure extraction                      │
//! │  - positional/: question detection, scoring, grounding      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: Parsing Never Fails
//!
//! Every grammar degrades to a well-defined default rather than an error: an input
//! that is not a command is plain text, a hyper command without a title is an
//! "Untitled Note", a question that is not positional is reported as such. The single
//! validated-and-rejected case is a rename whose new name has invalid characters,
//! surfaced as [`tags::RenameError`] so callers can tell it apart from "not a rename".
//!
//! [`error::HypernoteError`] only exists for the I/O-facing edges (config files,
//! note files, the CLI).
//!
//! ## Module Overview
//!
//! - [`api`]: The facade, entry point for all operations
//! - [`tags`]: Tag/group command grammar and rename validation
//! - [`hyper`]: Hyper command parsing and attribute extraction
//! - [`lists`]: Ordered list extraction from note bodies
//! - [`positional`]: Positional question detection and resolution
//! - [`model`]: Shared data types
//! - [`config`]: Configuration
//! - [`error`]: Error types

pub mod api;
pub mod config;
pub mod error;
pub mod hyper;
pub mod lists;
pub mod model;
pub mod positional;
pub mod tags;
