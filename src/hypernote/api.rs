//! # API Facade
//!
//! The API layer is a **thin facade** over the grammars. It is the single entry
//! point for every hypernote operation, regardless of the UI being used.
//!
//! ## Role and Responsibilities
//!
//! The API facade:
//! - **Routes** a raw input line to the grammar that claims it ([`HypernoteApi::interpret`])
//! - **Applies configuration** (default title, scoring weights)
//! - **Returns structured types**, never strings meant for a terminal
//!
//! ## What the API Does NOT Do
//!
//! - **Parsing logic**: that belongs in `tags/`, `hyper/`, `lists.rs`, `positional/`
//! - **I/O operations**: no stdout, stderr, or file access
//!
//! ## Routing Order
//!
//! 1. `@new-...` is a hyper command.
//! 2. A tag or group command (`@grey-x/delete`, `/drop`, ...). A rename with an
//!    invalid target is reported as [`Intent::InvalidRename`].
//! 3. Anything else is plain text (a search term or a chat message).

use serde::Serialize;

use crate::config::HypernoteConfig;
use crate::hyper::{is_hyper_command, parse_hyper_command_with_title};
use crate::lists::parse_lists;
use crate::model::{CandidateNote, NoteDraft, ParsedList, PositionalQuery, PositionalQueryResult};
use crate::positional::{build_grounding_context, detect_positional_query, resolve_with};
use crate::tags::{parse_command, ManagementCommand, RenameError};

/// What a raw input line turned out to be.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "intent", content = "value", rename_all = "snake_case")]
pub enum Intent {
    Hyper(NoteDraft),
    Command(ManagementCommand),
    InvalidRename(RenameError),
    Text(String),
}

/// A positional answer together with its rendered grounding block.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Answer {
    #[serde(flatten)]
    pub result: PositionalQueryResult,
    pub grounding: Option<String>,
}

/// The main API facade for hypernote operations.
#[derive(Debug, Clone, Default)]
pub struct HypernoteApi {
    config: HypernoteConfig,
}

impl HypernoteApi {
    pub fn new(config: HypernoteConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &HypernoteConfig {
        &self.config
    }

    pub fn interpret(&self, input: &str) -> Intent {
        if is_hyper_command(input) {
            if let Some(draft) = parse_hyper_command_with_title(input, &self.config.default_title) {
                return Intent::Hyper(draft);
            }
        }
        match parse_command(input) {
            Ok(Some(cmd)) => Intent::Command(cmd),
            Ok(None) => Intent::Text(input.trim().to_string()),
            Err(err) => {
                tracing::debug!(%err, "rename rejected");
                Intent::InvalidRename(err)
            }
        }
    }

    pub fn extract_lists(&self, content: &str) -> Vec<ParsedList> {
        parse_lists(content)
    }

    pub fn detect(&self, question: &str) -> Option<PositionalQuery> {
        detect_positional_query(question)
    }

    /// Resolves `question` against `notes` with the configured weights.
    pub fn resolve<N: CandidateNote>(&self, question: &str, notes: &[N]) -> PositionalQueryResult {
        resolve_with(question, notes, &self.config.scoring)
    }

    /// [`Self::resolve`] plus the grounding block for the chat model.
    pub fn ask<N: CandidateNote>(&self, question: &str, notes: &[N]) -> Answer {
        let result = self.resolve(question, notes);
        let grounding = build_grounding_context(&result);
        Answer { result, grounding }
    }
}
