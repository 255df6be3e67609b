#![allow(deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;
use std::path::Path;
use tempfile::TempDir;

/// A `hypernote` command isolated from the user's config dir and environment.
fn hypernote(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("hypernote").unwrap();
    cmd.env("HOME", home)
        .env("XDG_CONFIG_HOME", home.join(".config"))
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .env_remove("HYPERNOTE_DEFAULT_TITLE")
        .env_remove("HYPERNOTE_BASE_SCORE")
        .env_remove("HYPERNOTE_TOPIC_WORD_WEIGHT")
        .env_remove("HYPERNOTE_ITEM_COUNT_WEIGHT")
        .env_remove("HYPERNOTE_MIN_TOPIC_WORD_LEN");
    cmd
}

fn write_notes(dir: &Path) -> std::path::PathBuf {
    let path = dir.join("notes.json");
    let notes = serde_json::json!([
        {
            "title": "Sourdough bread",
            "content": "1. Feed the starter\n2. Mix flour and water\n3. Stretch and fold\n4. Bake"
        },
        {
            "title": "AI lecture",
            "content": "Knowledge Representation methods:\n1. Semantic networks\n2. Frames\n3. Production rules"
        }
    ]);
    std::fs::write(&path, notes.to_string()).unwrap();
    path
}

#[test]
fn test_parse_hyper_command() {
    let home = TempDir::new().unwrap();
    hypernote(home.path())
        .args(["parse", "@new-Meeting || Discussion notes ##work is:pin"])
        .assert()
        .success()
        .stdout(predicate::str::contains("New note"))
        .stdout(predicate::str::contains("Meeting"))
        .stdout(predicate::str::contains("Discussion notes"))
        .stdout(predicate::str::contains("work"))
        .stdout(predicate::str::contains("pinned"));
}

#[test]
fn test_parse_json_output() {
    let home = TempDir::new().unwrap();
    let output = hypernote(home.path())
        .args(["parse", "@new-@pai-Explain monads||is:fav", "--output", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["intent"], "hyper");
    assert_eq!(json["value"]["title"], "Untitled Note");
    assert_eq!(json["value"]["is_favorite"], true);
    assert_eq!(json["value"]["nested_command"]["kind"], "ai-query");
    assert_eq!(json["value"]["nested_command"]["query"], "Explain monads");
}

#[test]
fn test_parse_tag_command() {
    let home = TempDir::new().unwrap();
    hypernote(home.path())
        .args(["parse", "@grey-urgent/delete"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Tag command"))
        .stdout(predicate::str::contains("delete grey 'urgent'"));
}

#[test]
fn test_parse_group_action() {
    let home = TempDir::new().unwrap();
    hypernote(home.path())
        .args(["parse", "/drop"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Group command"))
        .stdout(predicate::str::contains("/drop"));
}

#[test]
fn test_parse_invalid_rename() {
    let home = TempDir::new().unwrap();
    hypernote(home.path())
        .args(["parse", "@blue-work/edit-work!"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Invalid rename"))
        .stdout(predicate::str::contains("invalid character '!'"));
}

#[test]
fn test_parse_plain_text() {
    let home = TempDir::new().unwrap();
    hypernote(home.path())
        .args(["parse", "what's for dinner"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Plain text"));
}

#[test]
fn test_lists_from_file() {
    let home = TempDir::new().unwrap();
    let file = home.path().join("recipe.txt");
    std::fs::write(&file, "Recipe\n1. Preheat the oven\n2. Mix the dough\n3. Bake").unwrap();

    hypernote(home.path())
        .arg("lists")
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("Numbered list"))
        .stdout(predicate::str::contains("1. Preheat the oven"))
        .stdout(predicate::str::contains("3. Bake"));
}

#[test]
fn test_lists_from_stdin() {
    let home = TempDir::new().unwrap();
    hypernote(home.path())
        .arg("lists")
        .write_stdin("Packing:\n- tent\n- stove\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Bullet list"))
        .stdout(predicate::str::contains("2. stove"));
}

#[test]
fn test_lists_none_found() {
    let home = TempDir::new().unwrap();
    hypernote(home.path())
        .arg("lists")
        .write_stdin("just a sentence\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("No lists found."));
}

#[test]
fn test_ask_prints_grounding() {
    let home = TempDir::new().unwrap();
    let notes = write_notes(home.path());

    hypernote(home.path())
        .args(["ask", "3rd method of Knowledge Representation", "--notes"])
        .arg(&notes)
        .assert()
        .success()
        .stdout(predicate::str::contains("Source note: \"AI lecture\""))
        .stdout(predicate::str::contains(
            "Requested item: #3 (topic: Knowledge Representation)",
        ))
        .stdout(predicate::str::contains("Answer: Production rules"))
        .stdout(predicate::str::contains("Full list context:"));
}

#[test]
fn test_ask_json_output() {
    let home = TempDir::new().unwrap();
    let notes = write_notes(home.path());

    let output = hypernote(home.path())
        .args(["ask", "what is the 4th step of baking bread", "-o", "json", "-n"])
        .arg(&notes)
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["is_positional"], true);
    assert_eq!(json["position"], 4);
    assert_eq!(json["extracted_item"], "Bake");
    assert_eq!(json["source_note"], "Sourdough bread");
    assert!(json["grounding"].as_str().unwrap().contains("Answer: Bake"));
}

#[test]
fn test_ask_not_positional() {
    let home = TempDir::new().unwrap();
    let notes = write_notes(home.path());

    hypernote(home.path())
        .args(["ask", "how do I bake bread?", "--notes"])
        .arg(&notes)
        .assert()
        .success()
        .stdout(predicate::str::contains("Not a positional question."));
}

#[test]
fn test_ask_unresolved() {
    let home = TempDir::new().unwrap();
    let notes = write_notes(home.path());

    hypernote(home.path())
        .args(["ask", "9th step of bread", "--notes"])
        .arg(&notes)
        .assert()
        .success()
        .stdout(predicate::str::contains("No note has an item #9."));
}

#[test]
fn test_ask_missing_notes_file() {
    let home = TempDir::new().unwrap();
    hypernote(home.path())
        .args(["ask", "2nd step", "--notes"])
        .arg(home.path().join("missing.json"))
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::starts_with("Error:"));
}

#[test]
fn test_ask_notes_not_an_array() {
    let home = TempDir::new().unwrap();
    let notes = home.path().join("notes.json");
    std::fs::write(&notes, r#"{"title": "A", "content": "1. a\n2. b"}"#).unwrap();

    hypernote(home.path())
        .args(["ask", "2nd step", "--notes"])
        .arg(&notes)
        .assert()
        .failure()
        .stderr(predicate::str::contains("expected a JSON array"));
}

#[test]
fn test_config_defaults() {
    let home = TempDir::new().unwrap();
    hypernote(home.path())
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("default_title = \"Untitled Note\""))
        .stdout(predicate::str::contains("min_topic_word_len = 3"));
}

#[test]
fn test_config_file_and_env_layering() {
    let home = TempDir::new().unwrap();
    let config = home.path().join("hypernote.toml");
    std::fs::write(
        &config,
        "default_title = \"Inbox\"\n\n[scoring]\ntopic_word_weight = 5.0\n",
    )
    .unwrap();

    hypernote(home.path())
        .arg("--config")
        .arg(&config)
        .args(["parse", "@new-no title"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Inbox"));

    hypernote(home.path())
        .env("HYPERNOTE_DEFAULT_TITLE", "From env")
        .arg("--config")
        .arg(&config)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("default_title = \"From env\""))
        .stdout(predicate::str::contains("topic_word_weight = 5.0"));
}

#[test]
fn test_config_missing_explicit_file() {
    let home = TempDir::new().unwrap();
    hypernote(home.path())
        .arg("--config")
        .arg(home.path().join("nope.toml"))
        .arg("config")
        .assert()
        .failure()
        .stderr(predicate::str::contains("config file not found"));
}
