//! # CLI Layer
//!
//! This module is **one possible UI client** for hypernote. It is the only place
//! in the codebase that:
//! - Knows about terminal I/O (stdout, stderr, stdin)
//! - Reads files (config, note bodies, notes collections)
//! - Installs the tracing subscriber
//!
//! ## Structure
//!
//! - `run()`: main dispatch logic (called by `main.rs`)
//! - `handle_*()`: per-command handlers that call the API and format output
//! - `print_*()` (in `print.rs`): text output formatting

use clap::Parser;
use hypernote::api::HypernoteApi;
use hypernote::config::HypernoteConfig;
use hypernote::error::{HypernoteError, Result};
use hypernote::model::Note;
use serde::Serialize;
use std::fs;
use std::io::Read;
use std::path::Path;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use super::print::{print_answer, print_config, print_intent, print_lists};
use super::setup::{Cli, Commands, OutputFormat};

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = HypernoteConfig::load(cli.config.as_deref())?;
    let api = HypernoteApi::new(config);
    let output = cli.output;

    match cli.command {
        Commands::Parse { input } => handle_parse(&api, &input, output),
        Commands::Lists { file } => handle_lists(&api, file.as_deref(), output),
        Commands::Ask { question, notes } => handle_ask(&api, &question, &notes, output),
        Commands::Config => handle_config(&api, output),
    }
}

/// Logs go to stderr. `RUST_LOG` wins over `--verbose`.
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "hypernote=debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init();
}

fn handle_parse(api: &HypernoteApi, input: &str, output: OutputFormat) -> Result<()> {
    let intent = api.interpret(input);
    match output {
        OutputFormat::Json => print_json(&intent),
        OutputFormat::Text => {
            print_intent(&intent);
            Ok(())
        }
    }
}

fn handle_lists(api: &HypernoteApi, file: Option<&Path>, output: OutputFormat) -> Result<()> {
    let content = read_input(file)?;
    let lists = api.extract_lists(&content);
    match output {
        OutputFormat::Json => print_json(&lists),
        OutputFormat::Text => {
            print_lists(&lists);
            Ok(())
        }
    }
}

fn handle_ask(
    api: &HypernoteApi,
    question: &str,
    notes_path: &Path,
    output: OutputFormat,
) -> Result<()> {
    let notes = load_notes(notes_path)?;
    tracing::debug!(notes = notes.len(), "notes loaded");

    let answer = api.ask(question, &notes);
    match output {
        OutputFormat::Json => print_json(&answer),
        OutputFormat::Text => {
            print_answer(&answer);
            Ok(())
        }
    }
}

fn handle_config(api: &HypernoteApi, output: OutputFormat) -> Result<()> {
    match output {
        OutputFormat::Json => print_json(api.config()),
        OutputFormat::Text => {
            print_config(api.config());
            Ok(())
        }
    }
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn read_input(file: Option<&Path>) -> Result<String> {
    match file {
        Some(path) => Ok(fs::read_to_string(path)?),
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}

/// Reads a JSON array of `{"title": ..., "content": ...}` objects.
fn load_notes(path: &Path) -> Result<Vec<Note>> {
    let raw = fs::read_to_string(path)?;
    let value: serde_json::Value = serde_json::from_str(&raw)?;
    if !value.is_array() {
        return Err(HypernoteError::InvalidNotes(format!(
            "{}: expected a JSON array of notes",
            path.display()
        )));
    }
    Ok(serde_json::from_value(value)?)
}
