//! Error types for digest computation.

use thiserror::Error;

/// Errors surfaced while computing a digest.
///
/// End-of-data is not represented here: block production signals exhaustion
/// through `Ok(None)`, and the engine treats it as normal termination. The
/// only hard failure is the underlying byte source giving up mid-stream.
#[derive(Debug, Error)]
pub enum Error {
    /// The underlying byte source failed before the stream was fully consumed.
    #[error("byte source read failed: {0}")]
    SourceRead(#[from] std::io::Error),
}

/// Result type for digest operations
pub type Result<T> = std::result::Result<T, Error>;
