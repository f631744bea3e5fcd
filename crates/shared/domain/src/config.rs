use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use strum_macros::{Display, EnumString};

/// Top-level configuration of the mapper tooling.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct MapperConfig {
    pub logging: LoggingConfig,
    pub mapping: MappingConfig,
}

/// Log output settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub json: bool,
    /// Rolling log files are written here when set.
    pub directory: Option<PathBuf>,
    pub env_filter: Option<String>,
}

/// Field-level mapping decisions left to the caller.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct MappingConfig {
    pub content_policy: ContentPolicy,
}

/// How message content that is not text is handled.
#[derive(
    Default, Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum ContentPolicy {
    /// Keep whatever primitive arrived.
    #[default]
    Preserve,
    /// Reject anything but text.
    RequireText,
    /// Render scalars to their textual form.
    CoerceToText,
}

// --- Default ---

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: "info".to_owned(), json: false, directory: None, env_filter: None }
    }
}
