//! Tagger configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::scoring::GRAMMATICAL_SUFFIXES;
use crate::types::Mode;

/// Settings for a tagging run, loadable from a JSON file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TaggerConfig {
    pub mode: Mode,
    /// Endings that never count as a rhyme in orthographic mode
    pub grammatical_suffixes: Vec<String>,
}

impl Default for TaggerConfig {
    fn default() -> Self {
        Self {
            mode: Mode::Phonemic,
            grammatical_suffixes: GRAMMATICAL_SUFFIXES.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl TaggerConfig {
    pub fn orthographic() -> Self {
        Self {
            mode: Mode::Orthographic,
            ..Self::default()
        }
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }
}
