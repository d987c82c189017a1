//! Configuration loading from TOML files and environment variables.
//!
//! Config is loaded in this order of precedence (highest wins):
//! 1. Environment variables (`BIVISTA_API_KEY`, `BIVISTA_AI_MODEL`,
//!    `BIVISTA_THEME`, `BIVISTA_MAX_FILE_SIZE_MB`)
//! 2. TOML file specified via --config CLI flag
//! 3. ./bivista.toml in the current directory
//! 4. $XDG_CONFIG_HOME/bivista/bivista.toml (or ~/.config/bivista/...)
//! 5. Built-in defaults

use crate::error::ConfigError;
use crate::upload::Encoding;
use std::path::{Path, PathBuf};

mod defaults;
mod env;
mod types;

use defaults::{
    DEFAULT_AI_MODEL, DEFAULT_ENCODING, DEFAULT_MAX_FILE_SIZE_MB, DEFAULT_THEME,
    GLOBAL_CONFIG_DIR, LOCAL_CONFIG_FILE,
};
use env::apply_env_overrides;
use types::FileConfig;
pub use types::{AiConfig, Config, DisplayConfig, UploadConfig};

impl Default for Config {
    fn default() -> Config {
        Config {
            ai: AiConfig {
                api_key: String::new(),
                model: DEFAULT_AI_MODEL.to_string(),
            },
            upload: UploadConfig {
                max_file_size_mb: DEFAULT_MAX_FILE_SIZE_MB,
                default_encoding: DEFAULT_ENCODING.to_string(),
            },
            display: DisplayConfig {
                theme: DEFAULT_THEME.to_string(),
                debug: false,
            },
        }
    }
}

impl Config {
    /// True when an API key is configured, enabling AI features.
    pub fn ai_enabled(&self) -> bool {
        !self.ai.api_key.trim().is_empty()
    }

    /// Validate settings and return human-readable problems.
    ///
    /// Mirrors the message-queue convention: issues are strings rendered as
    /// warnings, not structured errors.
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();
        if !self.ai_enabled() {
            errors.push("API key is required for AI features".to_string());
        }
        if self.upload.max_file_size_mb == 0 {
            errors.push("max_file_size_mb must be positive".to_string());
        }
        if Encoding::from_name(&self.upload.default_encoding).is_err() {
            errors.push(format!(
                "unknown default_encoding `{}`",
                self.upload.default_encoding
            ));
        }
        errors
    }
}

/// Load configuration from disk and environment.
///
/// `path_override` is an explicit config file path (from --config flag).
pub fn load_config(path_override: Option<&str>) -> Result<Config, ConfigError> {
    load_config_from_sources(
        path_override,
        |path| std::fs::read_to_string(path),
        |name| std::env::var(name).ok(),
        config_root_dir,
    )
}

fn load_config_from_sources<FRead, FEnv, FRoot>(
    path_override: Option<&str>,
    read_file: FRead,
    env_lookup: FEnv,
    config_root: FRoot,
) -> Result<Config, ConfigError>
where
    FRead: Fn(&Path) -> Result<String, std::io::Error>,
    FEnv: Fn(&str) -> Option<String>,
    FRoot: Fn() -> Option<PathBuf>,
{
    let config_text = read_config_text(path_override, &read_file, &config_root)?;
    let parsed: FileConfig = match config_text {
        Some(text) => toml::from_str(&text)?,
        None => FileConfig::default(),
    };
    let mut config = resolve(parsed, &env_lookup)?;
    apply_env_overrides(&mut config, &env_lookup)?;
    Ok(config)
}

/// Find and read the first config file in precedence order.
///
/// An explicit --config path that cannot be read is an error; the implicit
/// local and global locations are optional.
fn read_config_text<FRead, FRoot>(
    path_override: Option<&str>,
    read_file: &FRead,
    config_root: &FRoot,
) -> Result<Option<String>, ConfigError>
where
    FRead: Fn(&Path) -> Result<String, std::io::Error>,
    FRoot: Fn() -> Option<PathBuf>,
{
    if let Some(p) = path_override {
        let text = read_file(Path::new(p))?;
        return Ok(Some(text));
    }
    if let Ok(text) = read_file(Path::new(LOCAL_CONFIG_FILE)) {
        return Ok(Some(text));
    }
    if let Some(root) = config_root() {
        let global = root.join(GLOBAL_CONFIG_DIR).join(LOCAL_CONFIG_FILE);
        if let Ok(text) = read_file(&global) {
            return Ok(Some(text));
        }
    }
    Ok(None)
}

/// Merge a parsed file config over built-in defaults.
fn resolve<FEnv>(file: FileConfig, env_lookup: &FEnv) -> Result<Config, ConfigError>
where
    FEnv: Fn(&str) -> Option<String>,
{
    let mut config = Config::default();

    if let Some(ai) = file.ai {
        if let Some(key) = ai.api_key {
            config.ai.api_key = key;
        }
        // An api_key_env pointer resolves through the environment at load
        // time; a literal api_key in the same file wins.
        if config.ai.api_key.is_empty() {
            if let Some(env_name) = ai.api_key_env {
                if let Some(key) = env_lookup(&env_name) {
                    config.ai.api_key = key;
                }
            }
        }
        if let Some(model) = ai.model {
            config.ai.model = model;
        }
    }
    if let Some(upload) = file.upload {
        if let Some(size) = upload.max_file_size_mb {
            if size == 0 {
                return Err(ConfigError::Invalid(
                    "max_file_size_mb must be positive".to_string(),
                ));
            }
            config.upload.max_file_size_mb = size;
        }
        if let Some(encoding) = upload.default_encoding {
            config.upload.default_encoding = encoding;
        }
    }
    if let Some(display) = file.display {
        if let Some(theme) = display.theme {
            config.display.theme = theme;
        }
        if let Some(debug) = display.debug {
            config.display.debug = debug;
        }
    }
    Ok(config)
}

/// Root directory for global config (`~/.config` on Linux).
fn config_root_dir() -> Option<PathBuf> {
    dirs::config_dir()
}
