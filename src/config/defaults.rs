//! Default configuration constants.
//!
//! Keeping defaults in one module makes behavior-preserving refactors safer:
//! callers can share the same constants without duplicating literals.

/// Default insight-engine model identifier.
pub(super) const DEFAULT_AI_MODEL: &str = "gpt-3.5-turbo";
/// Default upload size ceiling in megabytes.
pub(super) const DEFAULT_MAX_FILE_SIZE_MB: u64 = 200;
/// Default CSV decode encoding.
pub(super) const DEFAULT_ENCODING: &str = "utf-8";
/// Default dashboard theme name.
pub(super) const DEFAULT_THEME: &str = "business";
/// Local config file name searched in the working directory.
pub(super) const LOCAL_CONFIG_FILE: &str = "bivista.toml";
/// Directory under the user config root holding the global config file.
pub(super) const GLOBAL_CONFIG_DIR: &str = "bivista";
