//! Error types for the dice engine.
//!
//! Engine commands never fail: out-of-range counts are clamped and invalid
//! rerolls are ignored. Errors only arise at the edges, when a die catalog is
//! loaded from outside the program or a text command cannot be parsed.

use std::path::PathBuf;

/// Errors that can occur while building a die catalog.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// The catalog does not contain exactly the required number of die types.
    #[error("catalog must contain exactly {expected} die types, found {found}")]
    CatalogSize {
        /// Required number of entries.
        expected: usize,
        /// Number of entries actually supplied.
        found: usize,
    },

    /// Two die types share the same key.
    #[error("duplicate die key: \"{0}\"")]
    DuplicateKey(String),

    /// A die type has an empty or whitespace-only key.
    #[error("die type at position {0} has an empty key")]
    EmptyKey(usize),

    /// The catalog file could not be read.
    #[error("cannot read catalog {}: {source}", .path.display())]
    Io {
        /// File that was being read.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The catalog file is not valid JSON for a list of die types.
    #[error("invalid catalog JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience result type for engine setup.
pub type EngineResult<T> = Result<T, EngineError>;

/// Errors raised while parsing a line of text commands.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// The command word was not recognized.
    #[error("unknown command: {0}")]
    UnknownCommand(String),

    /// The die name did not match any key, code, or virtue in the catalog.
    #[error("unknown die: {0}")]
    UnknownDie(String),

    /// A command was missing a required argument.
    #[error("missing argument: {0}")]
    MissingArgument(&'static str),

    /// A face index could not be parsed as a positive number.
    #[error("invalid face index: {0}")]
    InvalidIndex(String),
}

/// Convenience result type for session commands.
pub type SessionResult<T> = Result<T, SessionError>;
