// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Error types for the channel and playlist core.

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Result alias used throughout the core.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("File not found: {}", .path.display())]
    NotFound { path: PathBuf },

    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{}", format_message(.path, .line, .message))]
    Format {
        path: PathBuf,
        /// 1-based line number for line-delimited files
        line: Option<usize>,
        message: String,
    },

    #[error("Duplicate playlist ID {0} in channel document")]
    DuplicatePlaylistId(u64),

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("No playlist at index {0}")]
    NoSuchPlaylist(usize),
}

impl Error {
    /// Wrap an error from reading `path`, separating out a missing file.
    pub fn read(path: &Path, source: io::Error) -> Self {
        if source.kind() == io::ErrorKind::NotFound {
            Error::NotFound {
                path: path.to_path_buf(),
            }
        } else {
            Error::write(path, source)
        }
    }

    /// Wrap an error from writing `path`. A missing parent directory is
    /// still an unwritable path, not a missing file.
    pub fn write(path: &Path, source: io::Error) -> Self {
        Error::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    pub fn format(path: &Path, line: Option<usize>, message: impl ToString) -> Self {
        Error::Format {
            path: path.to_path_buf(),
            line,
            message: message.to_string(),
        }
    }
}

fn format_message(path: &Path, line: &Option<usize>, message: &str) -> String {
    match line {
        Some(line) => format!("Malformed record in {} (line {}): {}", path.display(), line, message),
        None => format!("Malformed document {}: {}", path.display(), message),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_maps_to_not_found() {
        let err = Error::read(
            Path::new("gone.txt"),
            io::Error::new(io::ErrorKind::NotFound, "no such file"),
        );
        assert!(matches!(err, Error::NotFound { .. }));
    }

    #[test]
    fn test_other_io_errors_kept() {
        let err = Error::read(
            Path::new("locked.txt"),
            io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        );
        assert!(matches!(err, Error::Io { .. }));
    }

    #[test]
    fn test_write_not_found_is_io() {
        let err = Error::write(
            Path::new("missing_dir/out.txt"),
            io::Error::new(io::ErrorKind::NotFound, "no such directory"),
        );
        assert!(matches!(err, Error::Io { .. }));
    }

    #[test]
    fn test_format_message_includes_line() {
        let err = Error::format(Path::new("list.txt"), Some(3), "expected value");
        assert_eq!(
            err.to_string(),
            "Malformed record in list.txt (line 3): expected value"
        );

        let err = Error::format(Path::new("channel.json"), None, "EOF");
        assert_eq!(err.to_string(), "Malformed document channel.json: EOF");
    }
}
