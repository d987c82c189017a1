//! Unified error types for the dashboard.
//!
//! User-visible analysis failures are not modeled here: per the message-queue
//! convention they accumulate as strings in session state and render as
//! banners. These types cover the launcher/config path only.

use std::fmt;

// ---------------------------------------------------------------------------
// ConfigError
// ---------------------------------------------------------------------------

/// Errors when loading or parsing configuration.
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Toml(toml::de::Error),
    Invalid(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "io: {e}"),
            Self::Toml(e) => write!(f, "toml: {e}"),
            Self::Invalid(msg) => write!(f, "invalid config: {msg}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        Self::Toml(e)
    }
}

// ---------------------------------------------------------------------------
// UploadError
// ---------------------------------------------------------------------------

/// Rejections from upload policy checks.
#[derive(Debug, PartialEq, Eq)]
pub enum UploadError {
    /// File extension not in the accepted set.
    UnsupportedType(String),
    /// File exceeds the configured size ceiling (actual, ceiling, in MB).
    TooLarge(u64, u64),
    /// Encoding name not in the allow-list.
    UnsupportedEncoding(String),
}

impl fmt::Display for UploadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnsupportedType(name) => {
                write!(
                    f,
                    "unsupported file type `{name}` (expected csv, xlsx, or xls)"
                )
            }
            Self::TooLarge(actual, ceiling) => {
                write!(f, "file is {actual} MB, exceeding the {ceiling} MB limit")
            }
            Self::UnsupportedEncoding(name) => {
                write!(f, "unsupported encoding `{name}`")
            }
        }
    }
}

impl std::error::Error for UploadError {}

// ---------------------------------------------------------------------------
// ServeError
// ---------------------------------------------------------------------------

/// Errors from the HTTP serving layer.
#[derive(Debug)]
pub enum ServeError {
    /// Failed to bind or accept on the local endpoint.
    Io(std::io::Error),
}

impl fmt::Display for ServeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "serve: {e}"),
        }
    }
}

impl std::error::Error for ServeError {}

impl From<std::io::Error> for ServeError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

// ---------------------------------------------------------------------------
// DashboardError — top-level
// ---------------------------------------------------------------------------

/// Top-level error type for the launcher.
#[derive(Debug)]
pub enum DashboardError {
    Config(ConfigError),
    Serve(ServeError),
}

impl fmt::Display for DashboardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(e) => write!(f, "config: {e}"),
            Self::Serve(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for DashboardError {}

impl From<ConfigError> for DashboardError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

impl From<ServeError> for DashboardError {
    fn from(e: ServeError) -> Self {
        Self::Serve(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upload_error_display() {
        assert_eq!(
            UploadError::UnsupportedType("pdf".into()).to_string(),
            "unsupported file type `pdf` (expected csv, xlsx, or xls)"
        );
        assert_eq!(
            UploadError::TooLarge(512, 200).to_string(),
            "file is 512 MB, exceeding the 200 MB limit"
        );
    }

    #[test]
    fn config_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "missing file");
        let e = ConfigError::from(io_err);
        let s = e.to_string();
        assert!(s.starts_with("io:"), "got: {s}");
        assert!(s.contains("missing file"));
    }

    #[test]
    fn config_error_from_toml() {
        let toml_err: toml::de::Error = toml::from_str::<toml::Value>("x = [unclosed").unwrap_err();
        let e = ConfigError::from(toml_err);
        assert!(e.to_string().starts_with("toml:"));
    }

    #[test]
    fn dashboard_error_wraps_config_error() {
        let e = DashboardError::from(ConfigError::Invalid("bad port".into()));
        assert_eq!(e.to_string(), "config: invalid config: bad port");
    }

    #[test]
    fn dashboard_error_wraps_serve_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::AddrInUse, "port busy");
        let e = DashboardError::from(ServeError::from(io_err));
        assert!(e.to_string().contains("port busy"));
    }
}
