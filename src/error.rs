//! Error types for compression and expansion.
//!
//! Every error is fatal to the current operation: no retries, no partial
//! output. There is no integrity check in the archive format, so corruption
//! that happens to land on valid bit patterns decodes to garbage without an
//! error here.

use std::io;
use thiserror::Error;

/// The error type for all compression and expansion operations.
#[derive(Debug, Error)]
pub enum BurrowsError {
    /// I/O error from the underlying sink or source, propagated verbatim.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A read or write was attempted on a closed bit stream.
    #[error("bit stream already closed")]
    StreamClosed,

    /// The bit stream ended while more data was still required.
    #[error("unexpected end of stream while {0}")]
    UnexpectedEof(&'static str),

    /// The archive is structurally invalid.
    #[error("malformed archive: {0}")]
    Malformed(&'static str),
}

/// Result type alias for compression and expansion operations.
pub type Result<T> = std::result::Result<T, BurrowsError>;
