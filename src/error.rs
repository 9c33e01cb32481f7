// File: src/error.rs
//! Typed failure taxonomy for fetch and projection operations.
//!
//! Every variant is `Clone + PartialEq` so the widget can retain the last
//! failure for display and tests can assert on exact error kinds. A failed
//! cycle is all-or-nothing: callers never see partial results.
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Transport-level failure: DNS, connect, TLS, or a dropped socket.
    #[error("network request failed: {reason}")]
    Network { reason: String },

    /// The remote answered, but without the success indicator.
    #[error("server returned HTTP {status}")]
    Status { status: u16 },

    /// A local resource could not be read.
    #[error("failed to read '{path}': {reason}")]
    Io { path: String, reason: String },

    /// The body parsed as JSON but the expected envelope or fields are missing.
    #[error("invalid response shape: {context}")]
    InvalidShape { context: String },

    /// A timestamp did not split into date and time-of-day portions.
    #[error("malformed timestamp '{value}'")]
    MalformedTimestamp { value: String },
}
