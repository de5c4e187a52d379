//! Error types module
//!
//! All failures surfaced by the action engine are unified under `ActionError`.
//! Environment failures (unreadable source, uncreatable output) are fatal and
//! propagate; a file that is still over the size ceiling once the compression
//! loop hits its quality floor is accepted as best-effort and is not an error.

use std::io;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ActionError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Cannot create output directory {path}: {source}")]
    OutputDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Cannot decode source image {path}: {reason}")]
    Decode { path: PathBuf, reason: String },

    #[error("PNG encoding error: {0}")]
    Encode(String),

    #[error("Archive error on {path}: {reason}")]
    Archive { path: PathBuf, reason: String },
}

impl ActionError {
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        ActionError::Io {
            path: path.into(),
            source,
        }
    }

    pub fn decode(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        ActionError::Decode {
            path: path.into(),
            reason: reason.into(),
        }
    }

    pub fn archive(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        ActionError::Archive {
            path: path.into(),
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ActionError::decode("/tmp/a.jpg", "truncated stream");
        assert!(err.to_string().contains("/tmp/a.jpg"));
        assert!(err.to_string().contains("truncated stream"));

        let err = ActionError::archive("/tmp/out.zip", "disk full");
        assert!(err.to_string().contains("out.zip"));
    }

    #[test]
    fn test_io_error_source_preserved() {
        use std::error::Error;

        let inner = io::Error::new(io::ErrorKind::PermissionDenied, "denied");
        let err = ActionError::io("/tmp/x", inner);
        assert!(err.source().is_some());
    }
}
