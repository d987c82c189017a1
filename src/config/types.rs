//! Configuration struct definitions.

use serde::Deserialize;

/// Fully resolved application configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub ai: AiConfig,
    pub upload: UploadConfig,
    pub display: DisplayConfig,
}

/// AI collaborator credentials.
#[derive(Debug, Clone, PartialEq)]
pub struct AiConfig {
    /// API key for the insight engine; empty disables AI features.
    pub api_key: String,
    /// Model identifier passed through to the insight engine.
    pub model: String,
}

/// Upload policy settings.
#[derive(Debug, Clone, PartialEq)]
pub struct UploadConfig {
    /// Size ceiling in megabytes; must be positive.
    pub max_file_size_mb: u64,
    /// Default CSV decode encoding name.
    pub default_encoding: String,
}

/// Presentation settings.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayConfig {
    /// Theme name resolved through the default-on-miss theme lookup.
    pub theme: String,
    /// Verbose diagnostics in rendered pages and logs.
    pub debug: bool,
}

/// Raw TOML file shape: everything optional so partial files merge over
/// defaults.
#[derive(Debug, Clone, Default, Deserialize)]
pub(super) struct FileConfig {
    pub ai: Option<FileAiConfig>,
    pub upload: Option<FileUploadConfig>,
    pub display: Option<FileDisplayConfig>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub(super) struct FileAiConfig {
    pub api_key: Option<String>,
    pub api_key_env: Option<String>,
    pub model: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub(super) struct FileUploadConfig {
    pub max_file_size_mb: Option<u64>,
    pub default_encoding: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub(super) struct FileDisplayConfig {
    pub theme: Option<String>,
    pub debug: Option<bool>,
}
