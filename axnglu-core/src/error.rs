use std::fmt;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Which end of a transfer an I/O failure happened on.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum IoSide {
    Source,
    Destination,
}

impl fmt::Display for IoSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IoSide::Source => f.write_str("source"),
            IoSide::Destination => f.write_str("destination"),
        }
    }
}

/// Coarse failure class, used by callers to pick exit codes or messages.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    NotFound,
    InvalidArgument,
    Conflict,
    Io,
}

#[derive(Error, Debug)]
pub enum AxnError {
    #[error("{what} not found: {}", path.display())]
    NotFound { what: &'static str, path: PathBuf },

    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("invalid size format: {0:?}")]
    InvalidSizeFormat(String),

    #[error("output file already exists: {}", .0.display())]
    Conflict(PathBuf),

    #[error("I/O error on {side} {}: {source}", path.display())]
    Io {
        side: IoSide,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl AxnError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            AxnError::NotFound { .. } => ErrorKind::NotFound,
            AxnError::InvalidArgument(_) | AxnError::InvalidSizeFormat(_) => {
                ErrorKind::InvalidArgument
            }
            AxnError::Conflict(_) => ErrorKind::Conflict,
            AxnError::Io { .. } => ErrorKind::Io,
        }
    }

    pub(crate) fn not_found(what: &'static str, path: &Path) -> Self {
        AxnError::NotFound {
            what,
            path: path.to_path_buf(),
        }
    }
}

// Convenient crate-wide result type
pub type Result<T> = std::result::Result<T, AxnError>;

/// Tags a raw `std::io::Result` with the path and side it failed on.
pub trait IoResultExt<T> {
    fn source_side(self, path: &Path) -> Result<T>;
    fn dest_side(self, path: &Path) -> Result<T>;
}

impl<T> IoResultExt<T> for std::io::Result<T> {
    fn source_side(self, path: &Path) -> Result<T> {
        self.map_err(|source| AxnError::Io {
            side: IoSide::Source,
            path: path.to_path_buf(),
            source,
        })
    }

    fn dest_side(self, path: &Path) -> Result<T> {
        self.map_err(|source| AxnError::Io {
            side: IoSide::Destination,
            path: path.to_path_buf(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn size_format_counts_as_invalid_argument() {
        let err = AxnError::InvalidSizeFormat("abc".into());
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
        assert_eq!(err.to_string(), "invalid size format: \"abc\"");
    }

    #[test]
    fn io_error_names_side_and_path() {
        let res: std::io::Result<()> = Err(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "denied",
        ));
        let err = res.dest_side(Path::new("out.bin.001")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Io);
        assert!(matches!(
            err,
            AxnError::Io {
                side: IoSide::Destination,
                ..
            }
        ));
        assert_eq!(err.to_string(), "I/O error on destination out.bin.001: denied");
    }
}
