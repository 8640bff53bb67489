//! Compiler configuration

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Name of the helper used to join interpolated attribute values.
pub const DEFAULT_CONCAT_HELPER: &str = "concat";

/// Whether `~` strip directives on mustaches trim the neighbouring text.
///
/// Off by default. When enabled, a text node's leading whitespace is trimmed
/// by its previous sibling's right-strip flag and its trailing whitespace by
/// its next sibling's left-strip flag. The two edges are owned independently,
/// so neither neighbour can override the other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum WhitespaceStripping {
    #[default]
    Disabled,
    Enabled,
}

impl WhitespaceStripping {
    pub fn is_enabled(self) -> bool {
        self == WhitespaceStripping::Enabled
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CompilerConfig {
    pub whitespace: WhitespaceStripping,
    pub concat_helper: String,
}

impl Default for CompilerConfig {
    fn default() -> Self {
        CompilerConfig {
            whitespace: WhitespaceStripping::Disabled,
            concat_helper: DEFAULT_CONCAT_HELPER.to_string(),
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid compiler configuration: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("concatHelper must not be empty")]
    EmptyConcatHelper,
}

impl CompilerConfig {
    /// Parse a JSON configuration document. Missing keys take their defaults.
    pub fn from_json(source: &str) -> Result<Self, ConfigError> {
        let config: CompilerConfig = serde_json::from_str(source)?;
        if config.concat_helper.is_empty() {
            return Err(ConfigError::EmptyConcatHelper);
        }
        Ok(config)
    }

    pub fn with_whitespace(mut self, whitespace: WhitespaceStripping) -> Self {
        self.whitespace = whitespace;
        self
    }
}
