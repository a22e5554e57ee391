//! Core results and error types

use thiserror::Error;

/// Core error type encompassing all core module errors.
///
/// Operators never produce these; they only surface at the edges where text or
/// seeds enter the system.
#[derive(Debug, Error)]
pub enum Error {
    /// Failed to read file at the specified path.
    #[error("could not read file '{path}': {source}")]
    FileRead {
        /// The path to the file that could not be read.
        path: String,
        /// The underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// Invalid hexadecimal in seed.
    #[error("invalid hexadecimal in seed")]
    InvalidSeedHex,

    /// Invalid seed length.
    #[error("invalid seed length: expected 64 hex chars, got {0}")]
    InvalidSeedLength(usize),
}

/// Core result type
pub type Result<T> = std::result::Result<T, Error>;
