//! Configuration.
//!
//! Values are layered, highest priority first:
//!
//! 1. Environment variables (`HYPERNOTE_*`)
//! 2. The TOML config file (`--config <FILE>`, or the platform config dir)
//! 3. Built-in defaults
//!
//! ```toml
//! default_title = "Inbox"
//!
//! [scoring]
//! base_score = 1.0
//! topic_word_weight = 2.0
//! item_count_weight = 0.1
//! min_topic_word_len = 3
//! ```

use confique::Config;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{HypernoteError, Result};
use crate::model::DEFAULT_TITLE;

pub const CONFIG_FILE_NAME: &str = "hypernote.toml";

#[derive(Config, Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct HypernoteConfig {
    /// Title given to hyper-command notes that don't name one.
    #[config(default = "Untitled Note", env = "HYPERNOTE_DEFAULT_TITLE")]
    pub default_title: String,

    #[config(nested)]
    pub scoring: ScoringConfig,
}

/// Weights used to pick the best note for a positional question.
///
/// `score = base_score + topic_word_weight * matched_topic_words + item_count_weight * list_items`
#[derive(Config, Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ScoringConfig {
    #[config(default = 1.0, env = "HYPERNOTE_BASE_SCORE")]
    pub base_score: f64,

    #[config(default = 2.0, env = "HYPERNOTE_TOPIC_WORD_WEIGHT")]
    pub topic_word_weight: f64,

    #[config(default = 0.1, env = "HYPERNOTE_ITEM_COUNT_WEIGHT")]
    pub item_count_weight: f64,

    /// Topic words shorter than this (in chars) are ignored.
    #[config(default = 3, env = "HYPERNOTE_MIN_TOPIC_WORD_LEN")]
    pub min_topic_word_len: usize,
}

impl Default for HypernoteConfig {
    fn default() -> Self {
        Self {
            default_title: DEFAULT_TITLE.to_string(),
            scoring: ScoringConfig::default(),
        }
    }
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            base_score: 1.0,
            topic_word_weight: 2.0,
            item_count_weight: 0.1,
            min_topic_word_len: 3,
        }
    }
}

impl HypernoteConfig {
    /// Loads config from the environment and `path`. A path that was given
    /// explicitly must exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(HypernoteError::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("config file not found: {}", path.display()),
            )));
        }
        tracing::debug!(path = %path.display(), "loading config file");
        Ok(Self::builder().env().file(path).load()?)
    }

    /// Loads config from the environment and the default config file, if present.
    pub fn load_default() -> Result<Self> {
        let builder = Self::builder().env();
        let builder = match default_config_path().filter(|p| p.exists()) {
            Some(path) => {
                tracing::debug!(path = %path.display(), "loading config file");
                builder.file(path)
            }
            None => builder,
        };
        Ok(builder.load()?)
    }

    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load_from(path),
            None => Self::load_default(),
        }
    }
}

/// `<platform config dir>/hypernote/hypernote.toml`
pub fn default_config_path() -> Option<PathBuf> {
    ProjectDirs::from("com", "hypernote", "hypernote")
        .map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = HypernoteConfig::default();
        assert_eq!(config.default_title, "Untitled Note");
        assert_eq!(config.scoring.base_score, 1.0);
        assert_eq!(config.scoring.topic_word_weight, 2.0);
        assert_eq!(config.scoring.item_count_weight, 0.1);
        assert_eq!(config.scoring.min_topic_word_len, 3);
    }

    #[test]
    fn test_toml_roundtrip_shape() {
        let raw = r#"
            default_title = "Inbox"

            [scoring]
            base_score = 0.5
            topic_word_weight = 3.0
            item_count_weight = 0.0
            min_topic_word_len = 4
        "#;
        let config: HypernoteConfig = toml::from_str(raw).unwrap();
        assert_eq!(config.default_title, "Inbox");
        assert_eq!(config.scoring.topic_word_weight, 3.0);
        assert_eq!(config.scoring.min_topic_word_len, 4);
    }

    #[test]
    fn test_load_partial_file_fills_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        fs::write(&path, "[scoring]\ntopic_word_weight = 5.0\n").unwrap();

        let config = HypernoteConfig::load_from(&path).unwrap();
        assert_eq!(config.scoring.topic_word_weight, 5.0);
        assert_eq!(config.scoring.base_score, 1.0);
        assert_eq!(config.scoring.min_topic_word_len, 3);
    }

    #[test]
    fn test_load_missing_explicit_file_fails() {
        let dir = TempDir::new().unwrap();
        let result = HypernoteConfig::load_from(&dir.path().join("nope.toml"));
        assert!(matches!(result, Err(HypernoteError::Io(_))));
    }

    #[test]
    fn test_load_invalid_file_fails() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        fs::write(&path, "[scoring]\nbase_score = \"high\"\n").unwrap();

        let result = HypernoteConfig::load_from(&path);
        assert!(matches!(result, Err(HypernoteError::Config(_))));
    }

    #[test]
    fn test_default_config_path_file_name() {
        if let Some(path) = default_config_path() {
            assert!(path.ends_with(CONFIG_FILE_NAME));
        }
    }
}
