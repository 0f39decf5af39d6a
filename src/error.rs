//! Error taxonomy for wishlist exports.

use thiserror::Error;

/// Errors that abort an export.
///
/// HTTP failure statuses, empty pages and repeated pages are not errors: they
/// end pagination and the export continues with whatever was collected.
#[derive(Debug, Error)]
pub enum ExportError {
    /// Country code has no entry in the locale table.
    #[error("Country code {0} is not supported. Supported: {1}")]
    UnsupportedLocale(String, String),

    /// Network-level failure while fetching a page.
    #[error("Request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Output file could not be created or written.
    #[error("Failed to write output: {0}")]
    Output(#[from] std::io::Error),

    #[error("Failed to write CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("Failed to serialize JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl ExportError {
    /// Wraps a transport failure for `url`.
    pub fn transport(
        url: impl Into<String>,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        ExportError::Transport { url: url.into(), source: source.into() }
    }

    /// Returns true for locale lookup failures.
    pub fn is_unsupported_locale(&self) -> bool {
        matches!(self, ExportError::UnsupportedLocale(..))
    }
}

/// Result alias used across the library.
pub type Result<T, E = ExportError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_locale_display() {
        let err = ExportError::UnsupportedLocale("XX".to_string(), "US, DE, UK".to_string());
        let msg = err.to_string();
        assert!(msg.contains("XX"));
        assert!(msg.contains("US, DE, UK"));
        assert!(err.is_unsupported_locale());
    }

    #[test]
    fn test_transport_display_and_source() {
        let io = std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "connection refused");
        let err = ExportError::transport("http://localhost/x", io);
        assert!(err.to_string().contains("http://localhost/x"));
        assert!(err.to_string().contains("connection refused"));
        assert!(std::error::Error::source(&err).is_some());
        assert!(!err.is_unsupported_locale());
    }

    #[test]
    fn test_io_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: ExportError = io.into();
        assert!(matches!(err, ExportError::Output(_)));
    }
}
