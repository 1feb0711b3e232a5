use std::path::PathBuf;
use thiserror::Error;

/// All errors produced by the Corner Grocer tracker.
#[derive(Error, Debug)]
pub enum GrocerError {
    /// The transaction input file could not be opened or read.
    #[error("Failed to open input file {path}: {source}")]
    SourceOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The backup artifact could not be created, written, or flushed.
    #[error("Failed to write backup file {path}: {source}")]
    BackupWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A configuration value is missing or invalid.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Pass-through for any raw I/O error that does not carry a path.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Catch-all for errors from third-party crates via `anyhow`.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Convenience alias used throughout the grocer crates.
pub type Result<T> = std::result::Result<T, GrocerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_source_open() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
        let err = GrocerError::SourceOpen {
            path: PathBuf::from("/data/transactions.txt"),
            source: io_err,
        };
        let msg = err.to_string();
        assert!(msg.contains("Failed to open input file"));
        assert!(msg.contains("/data/transactions.txt"));
        assert!(msg.contains("no such file"));
    }

    #[test]
    fn test_error_display_backup_write() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only");
        let err = GrocerError::BackupWrite {
            path: PathBuf::from("frequency.dat"),
            source: io_err,
        };
        let msg = err.to_string();
        assert!(msg.contains("Failed to write backup file"));
        assert!(msg.contains("frequency.dat"));
        assert!(msg.contains("read-only"));
    }

    #[test]
    fn test_error_display_config() {
        let err = GrocerError::Config("unknown color mode".to_string());
        assert_eq!(err.to_string(), "Configuration error: unknown color mode");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::Other, "boom");
        let err: GrocerError = io_err.into();
        assert!(matches!(err, GrocerError::Io(_)));
    }
}
