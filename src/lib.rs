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

//! # adcs-request-kit
//!
//! Certificate request auto-detection and normalization for Active
//! Directory Certificate Services submission gateways.
//!
//! A submission gateway receives certificate requests as BASE64 blobs
//! over HTTP and passes them to a certification authority via
//! `ICertRequest::Submit`. Before anything reaches that privileged
//! pathway, the blob must be classified and validated: does it parse
//! as PKCS#10, PKCS#7/CMS, or CMC, and what are its canonical raw
//! bytes? This crate implements that check, plus the numeric flag
//! contract and JSON boundary models that surround it.
//!
//! ## Detection
//!
//! ```
//! use adcs_request_kit::{detect_request_type, RequestKind};
//!
//! // Malformed input never raises an error - it classifies as Unknown
//! let result = detect_request_type("this is not a csr");
//! assert_eq!(result.kind(), RequestKind::Unknown);
//! assert_eq!(result.submission_flags(), 0);
//! ```
//!
//! Detection tolerates any input framing: PEM marker lines, bare
//! BASE64, and embedded line breaks all decode to the same canonical
//! payload. The trial order is fixed - PKCS#10, then PKCS#7, then CMC
//! - and the first grammar that accepts the blob wins.
//!
//! ## Submission boundary
//!
//! ```no_run
//! use adcs_request_kit::CertificateSubmission;
//!
//! # fn example(body: &str) -> Result<(), Box<dyn std::error::Error>> {
//! let submission: CertificateSubmission = serde_json::from_str(body)?;
//!
//! // Rejects unrecognized requests before they reach the CA
//! let normalized = submission.normalize()?;
//! let flags = normalized.submission_flags();
//! let payload = normalized.to_base64();
//! # Ok(())
//! # }
//! ```
//!
//! The detector performs no policy checks (key sizes, signatures,
//! template names) - those belong to the certification authority. It
//! verifies structure only.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod detect;
pub mod error;
pub mod flags;
pub mod models;
pub mod pem;
pub mod types;

// Re-export main types at crate root for convenience
pub use detect::{detect_request_type, NormalizedRequest, RequestKind};
pub use error::{RequestError, Result};
pub use models::{CertificateSubmission, Disposition, SubmissionResponse};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
