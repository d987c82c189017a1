//! File upload policy: accepted formats, size ceiling, encoding allow-list.
//!
//! Parsing uploaded bytes is the data processor's job; this module only
//! decides whether an upload is admissible before it is handed over.

use crate::error::UploadError;
use std::fmt;
use std::path::Path;

/// Default upload size ceiling in megabytes.
pub const DEFAULT_MAX_FILE_SIZE_MB: u64 = 200;

/// Accepted data file formats, by extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    Csv,
    Xlsx,
    Xls,
}

impl FileKind {
    /// Extensions the uploader accepts, lowercase.
    pub const ACCEPTED_EXTENSIONS: [&'static str; 3] = ["csv", "xlsx", "xls"];

    fn from_extension(ext: &str) -> Option<FileKind> {
        match ext.to_ascii_lowercase().as_str() {
            "csv" => Some(FileKind::Csv),
            "xlsx" => Some(FileKind::Xlsx),
            "xls" => Some(FileKind::Xls),
            _ => None,
        }
    }
}

/// Text encodings the uploader offers for CSV decoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Encoding {
    #[default]
    Utf8,
    Latin1,
    Iso8859_1,
}

impl Encoding {
    /// Encoding names in selector order.
    pub const ALL: [Encoding; 3] = [Encoding::Utf8, Encoding::Latin1, Encoding::Iso8859_1];

    /// Resolve an encoding from its selector name.
    pub fn from_name(name: &str) -> Result<Encoding, UploadError> {
        match name.trim().to_ascii_lowercase().as_str() {
            "utf-8" | "utf8" => Ok(Encoding::Utf8),
            "latin-1" | "latin1" => Ok(Encoding::Latin1),
            "iso-8859-1" => Ok(Encoding::Iso8859_1),
            other => Err(UploadError::UnsupportedEncoding(other.to_string())),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Encoding::Utf8 => "utf-8",
            Encoding::Latin1 => "latin-1",
            Encoding::Iso8859_1 => "iso-8859-1",
        }
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Upload admission policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UploadPolicy {
    /// Size ceiling in megabytes.
    pub max_file_size_mb: u64,
}

impl Default for UploadPolicy {
    fn default() -> UploadPolicy {
        UploadPolicy {
            max_file_size_mb: DEFAULT_MAX_FILE_SIZE_MB,
        }
    }
}

impl UploadPolicy {
    /// Check a candidate upload and classify it.
    ///
    /// Extension is checked before size so the caller gets the most
    /// actionable rejection first.
    pub fn validate(&self, filename: &str, size_bytes: u64) -> Result<FileKind, UploadError> {
        let kind = Path::new(filename)
            .extension()
            .and_then(|ext| ext.to_str())
            .and_then(FileKind::from_extension)
            .ok_or_else(|| UploadError::UnsupportedType(filename.to_string()))?;

        let size_mb = size_bytes.div_ceil(1024 * 1024);
        if size_mb > self.max_file_size_mb {
            return Err(UploadError::TooLarge(size_mb, self.max_file_size_mb));
        }
        Ok(kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_known_extensions_case_insensitively() {
        let policy = UploadPolicy::default();
        assert_eq!(policy.validate("sales.csv", 1024), Ok(FileKind::Csv));
        assert_eq!(policy.validate("Q3.XLSX", 1024), Ok(FileKind::Xlsx));
        assert_eq!(policy.validate("legacy.Xls", 1024), Ok(FileKind::Xls));
    }

    #[test]
    fn rejects_unsupported_extension() {
        let policy = UploadPolicy::default();
        assert_eq!(
            policy.validate("report.pdf", 10),
            Err(UploadError::UnsupportedType("report.pdf".to_string()))
        );
        assert!(policy.validate("no-extension", 10).is_err());
    }

    // Ensures the ceiling is enforced on rounded-up megabytes so a file one
    // byte over the limit is rejected.
    #[test]
    fn rejects_files_over_the_size_ceiling() {
        let policy = UploadPolicy {
            max_file_size_mb: 1,
        };
        assert!(policy.validate("ok.csv", 1024 * 1024).is_ok());
        assert_eq!(
            policy.validate("big.csv", 1024 * 1024 + 1),
            Err(UploadError::TooLarge(2, 1))
        );
    }

    #[test]
    fn encoding_names_round_trip() {
        for enc in Encoding::ALL {
            assert_eq!(Encoding::from_name(enc.as_str()), Ok(enc));
        }
        assert!(Encoding::from_name("utf-16").is_err());
    }
}
