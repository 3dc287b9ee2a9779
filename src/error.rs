//! Error types for `lltz`.

use std::path::PathBuf;

/// Result type for index open/lookup operations.
pub type LookupResult<T> = Result<T, LookupError>;

/// Errors returned by the `lltz` crate.
#[derive(thiserror::Error, Debug)]
pub enum LookupError {
    /// The byte range does not start with the 8-byte `LLTZ1\0\0\0` magic.
    ///
    /// Raised at construction; the reader is never built.
    #[error("invalid header: not an LLTZ1 index")]
    InvalidHeader,

    /// A coordinate outside `[-90, 90] x [-180, 180]` (or a non-finite value).
    ///
    /// Raised per call; the reader remains usable.
    #[error("coordinate out of range: latitude {lat}, longitude {lon}")]
    OutOfRange {
        /// The latitude that was passed in.
        lat: f64,
        /// The longitude that was passed in.
        lon: f64,
    },

    /// A decode stepped outside the provided byte range, or an encoded value
    /// (string-table index, quadtree chain, UTF-8 identifier) is inconsistent.
    ///
    /// Never produced for files written by a conforming builder.
    #[error("corrupt index: {message} at byte {offset}")]
    Corrupt {
        /// Short description of the inconsistency.
        message: &'static str,
        /// Byte offset at which the read or check failed.
        offset: usize,
    },

    /// I/O error while reading an index file from disk.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// No bundled index data file was found at any search location.
    ///
    /// Only produced by the convenience loader; `IndexReader::open` never
    /// touches the filesystem.
    #[error("index data file not found (searched {searched:?})")]
    DataFileNotFound {
        /// Every path that was probed, in search order.
        searched: Vec<PathBuf>,
    },
}

impl LookupError {
    /// Shorthand for a fail-closed out-of-range read.
    pub(crate) fn corrupt(message: &'static str, offset: usize) -> Self {
        LookupError::Corrupt { message, offset }
    }
}
