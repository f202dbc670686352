//! BASE64/PEM framing utilities.
//!
//! Certificate requests arrive from callers as BASE64 with PEM-style
//! marker lines, as bare BASE64, or as BASE64 with embedded line
//! breaks. [`decode_base64_any`] accepts all of these; the encoders
//! produce the two output shapes a submission gateway needs: a single
//! unbroken BASE64 line and a 64-column PEM block.

use base64::prelude::*;

use crate::error::{RequestError, Result};

/// Standard PEM labels for the payloads handled by this crate.
pub mod labels {
    /// RFC 7468 label for a PKCS#10 certification request.
    pub const CERTIFICATE_REQUEST: &str = "CERTIFICATE REQUEST";

    /// Label emitted by Windows enrollment tooling for new requests.
    pub const NEW_CERTIFICATE_REQUEST: &str = "NEW CERTIFICATE REQUEST";

    /// Label emitted by Windows tooling for PKCS#7 renewal envelopes.
    pub const PKCS7_SIGNED_DATA: &str = "PKCS #7 SIGNED DATA";

    /// RFC 7468 label for an X.509 certificate.
    pub const CERTIFICATE: &str = "CERTIFICATE";
}

/// Decode BASE64 regardless of framing.
///
/// Marker lines (`-----BEGIN ...-----` / `-----END ...-----`, any
/// label) are skipped, and any ASCII whitespace inside the body is
/// stripped before decoding. An input with no BASE64 payload left
/// after framing removal is rejected.
pub fn decode_base64_any(input: &str) -> Result<Vec<u8>> {
    let mut body = Vec::with_capacity(input.len());

    for line in input.lines() {
        let line = line.trim();
        if line.starts_with("-----") {
            continue;
        }
        body.extend(line.bytes().filter(|b| !b.is_ascii_whitespace()));
    }

    if body.is_empty() {
        return Err(RequestError::invalid_pem("no BASE64 payload"));
    }

    BASE64_STANDARD.decode(&body).map_err(RequestError::Base64)
}

/// Encode DER data as a single unbroken BASE64 line.
pub fn encode_base64(der: &[u8]) -> String {
    BASE64_STANDARD.encode(der)
}

/// Encode DER data as a PEM block with the given label.
///
/// The body is wrapped at 64 columns.
pub fn encode_pem(label: &str, der: &[u8]) -> String {
    let encoded = BASE64_STANDARD.encode(der);

    let mut pem = format!("-----BEGIN {}-----\n", label);
    for chunk in encoded.as_bytes().chunks(64) {
        pem.push_str(std::str::from_utf8(chunk).unwrap());
        pem.push('\n');
    }
    pem.push_str(&format!("-----END {}-----\n", label));
    pem
}
