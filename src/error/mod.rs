//! Error handling for the clinic store.

use std::io;
use std::path::PathBuf;

/// Specialized error type for clinic store operations
///
/// Only structural failures are errors. Lookup misses ("patient not found",
/// "invalid field") and failed logins are ordinary result values the caller
/// branches on; see the collection and auth modules.
#[derive(Debug, thiserror::Error)]
pub enum ClinicStoreError {
    /// Error on console or other unlocated IO
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Error opening or reading a source file
    #[error("failed to read {}: {}", .path.display(), .source)]
    ReadFile {
        /// Path of the file that could not be read
        path: PathBuf,
        /// Underlying IO error
        #[source]
        source: io::Error,
    },

    /// A record is missing a required column or carries an uncoercible value
    #[error("malformed record in column `{column}`: {message}")]
    MalformedRecord {
        /// Column the failure was detected in
        column: String,
        /// What was wrong with it
        message: String,
    },

    /// A grouping attribute outside the declared demographic set
    #[error("unknown demographic attribute `{attribute}`")]
    UnknownAttribute {
        /// The rejected attribute name
        attribute: String,
    },

    /// The visit id generator gave up after too many collisions
    #[error("exhausted visit id space after {attempts} attempts")]
    ExhaustedIdSpace {
        /// How many candidates were drawn before giving up
        attempts: usize,
    },

    /// A record file whose extension no reader handles
    #[error("unsupported record format: {}", .path.display())]
    UnsupportedFormat {
        /// Path of the rejected file
        path: PathBuf,
    },
}

impl ClinicStoreError {
    /// Build a `MalformedRecord` error for a column
    pub fn malformed(column: impl Into<String>, message: impl Into<String>) -> Self {
        Self::MalformedRecord {
            column: column.into(),
            message: message.into(),
        }
    }
}

/// Result type for clinic store operations
pub type Result<T> = std::result::Result<T, ClinicStoreError>;
