// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 U.S. Federal Government (in countries where recognized)
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Certificate request type auto-detection.
//!
//! Callers submitting a certificate request declare nothing about its
//! encoding; the gateway must determine - without trusting any
//! assertion - whether the blob parses as PKCS#10, PKCS#7/CMS, or CMC,
//! and produce the canonical raw form expected by
//! `ICertRequest::Submit`.
//!
//! Detection is an ordered trial decode: PKCS#10 first (the most
//! restrictive grammar), then PKCS#7, then CMC. The first grammar that
//! accepts the blob without structural error wins. A failed trial is
//! routine, not an error; input that no grammar accepts classifies as
//! [`RequestKind::Unknown`] with an empty payload.
//!
//! # Example
//!
//! ```
//! use adcs_request_kit::{detect_request_type, RequestKind};
//!
//! let result = detect_request_type("this is not a csr");
//! assert_eq!(result.kind(), RequestKind::Unknown);
//! assert!(result.to_base64().is_empty());
//! ```

use tracing::debug;

use crate::flags;
use crate::pem;
use crate::types::{cmc, pkcs10, pkcs7};

/// Recognized certificate request encodings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RequestKind {
    /// Bare PKCS#10 certification request.
    Pkcs10,

    /// PKCS#7/CMS signed-data envelope wrapping a request
    /// (renewal signed with an existing key).
    Pkcs7,

    /// CMC full enrollment request package (RFC 5272).
    Cmc,

    /// None of the supported grammars matched.
    #[default]
    Unknown,
}

impl RequestKind {
    /// The fixed trial order: most restrictive grammar first.
    ///
    /// Inherited behavior: an input that happens to satisfy more than
    /// one grammar resolves to the first match in this order.
    pub const DETECTION_ORDER: [RequestKind; 3] =
        [RequestKind::Pkcs10, RequestKind::Pkcs7, RequestKind::Cmc];

    /// The `CR_IN_*` constant identifying this kind to
    /// `ICertRequest::Submit`. Zero for [`RequestKind::Unknown`].
    pub fn submission_flag(self) -> u32 {
        match self {
            Self::Pkcs10 => flags::CR_IN_PKCS10,
            Self::Pkcs7 => flags::CR_IN_PKCS7,
            Self::Cmc => flags::CR_IN_CMC,
            Self::Unknown => 0,
        }
    }

    /// Map a `CR_IN_*` constant back to a request kind.
    pub fn from_submission_flag(flag: u32) -> Self {
        match flag {
            flags::CR_IN_PKCS10 => Self::Pkcs10,
            flags::CR_IN_PKCS7 => Self::Pkcs7,
            flags::CR_IN_CMC => Self::Cmc,
            _ => Self::Unknown,
        }
    }

    /// Returns true for any kind other than [`RequestKind::Unknown`].
    pub fn is_recognized(self) -> bool {
        !matches!(self, Self::Unknown)
    }

    /// Short name of the kind.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pkcs10 => "PKCS10",
            Self::Pkcs7 => "PKCS7",
            Self::Cmc => "CMC",
            Self::Unknown => "Unknown",
        }
    }
}

impl std::fmt::Display for RequestKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A certificate request normalized to its canonical raw form.
///
/// Holds the detected kind together with the exact DER bytes that were
/// classified - the decoded BASE64 body, never a re-encoding and never
/// data from a different trial. For an unrecognized input the payload
/// is empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedRequest {
    kind: RequestKind,
    der: Vec<u8>,
}

impl NormalizedRequest {
    fn unknown() -> Self {
        Self {
            kind: RequestKind::Unknown,
            der: Vec::new(),
        }
    }

    /// The detected request kind.
    pub fn kind(&self) -> RequestKind {
        self.kind
    }

    /// Returns true if a supported grammar matched.
    ///
    /// Callers must check this (or [`Self::kind`]) explicitly before
    /// submitting the payload anywhere.
    pub fn is_recognized(&self) -> bool {
        self.kind.is_recognized()
    }

    /// The raw DER bytes of the request. Empty for unrecognized input.
    pub fn as_der(&self) -> &[u8] {
        &self.der
    }

    /// The canonical payload: BASE64 with no marker lines and no line
    /// breaks. Empty for unrecognized input.
    pub fn to_base64(&self) -> String {
        if self.der.is_empty() {
            String::new()
        } else {
            pem::encode_base64(&self.der)
        }
    }

    /// Flags for `ICertRequest::Submit`: BASE64 input combined with
    /// the detected kind. Zero for unrecognized input.
    pub fn submission_flags(&self) -> u32 {
        match self.kind {
            RequestKind::Unknown => 0,
            kind => flags::CR_IN_BASE64 | kind.submission_flag(),
        }
    }
}

/// Identify the type of a certificate request.
///
/// The input may be BASE64 with PEM marker lines, bare BASE64, or
/// BASE64 with embedded line breaks. Malformed input of any shape -
/// empty, non-BASE64, binary garbage, truncated DER - classifies as
/// [`RequestKind::Unknown`]; this function never returns an error and
/// never panics on caller-supplied data.
pub fn detect_request_type(certificate_request: &str) -> NormalizedRequest {
    let der = match pem::decode_base64_any(certificate_request) {
        Ok(der) => der,
        Err(e) => {
            debug!("certificate request is not decodable BASE64: {}", e);
            return NormalizedRequest::unknown();
        }
    };

    for kind in RequestKind::DETECTION_ORDER {
        if verify_request_structure(kind, &der) {
            debug!(
                kind = kind.as_str(),
                size = der.len(),
                "certificate request detected"
            );
            return NormalizedRequest { kind, der };
        }
    }

    debug!("certificate request does not match any supported grammar");
    NormalizedRequest::unknown()
}

/// Verify that the blob parses under the given grammar.
///
/// Each trial is independent and side-effect-free on failure; decode
/// state is dropped before the next trial runs.
fn verify_request_structure(kind: RequestKind, der: &[u8]) -> bool {
    match kind {
        RequestKind::Pkcs10 => pkcs10::try_decode(der).is_some(),
        RequestKind::Pkcs7 => pkcs7::try_decode(der).is_some(),
        RequestKind::Cmc => cmc::try_decode(der).is_some(),
        RequestKind::Unknown => false,
    }
}
