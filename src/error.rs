//! Error types for certificate request processing.
//!
//! Structural decode failures inside the detection trials are never
//! surfaced as errors; they advance detection to the next grammar.
//! [`RequestError`] covers the surfaces around the detector: BASE64/PEM
//! framing, boundary models, and file I/O in the inspection tool.

use thiserror::Error;

/// Result type alias using [`RequestError`].
pub type Result<T> = std::result::Result<T, RequestError>;

/// Errors that can occur around certificate request handling.
#[derive(Debug, Error)]
pub enum RequestError {
    /// Base64 decoding error.
    #[error("Base64 decode error: {0}")]
    Base64(#[from] base64::DecodeError),

    /// DER encoding/decoding error.
    #[error("DER error: {0}")]
    Der(#[from] der::Error),

    /// Invalid PEM framing.
    #[error("Invalid PEM data: {0}")]
    InvalidPem(String),

    /// The request did not parse under any supported grammar.
    ///
    /// Callers at an HTTP boundary are expected to map this to a
    /// client error before anything reaches a certification authority.
    #[error("certificate request does not parse as PKCS#10, PKCS#7 or CMC")]
    UnrecognizedRequest,

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl RequestError {
    /// Create an invalid PEM error with the given message.
    pub fn invalid_pem(msg: impl Into<String>) -> Self {
        Self::InvalidPem(msg.into())
    }
}
