//! JSON models for the certificate submission boundary.
//!
//! These types mirror the REST contract of an AD CS submission
//! gateway: the inbound submission body, the disposition codes a
//! certification authority reports, and the response envelope returned
//! to callers. Field names serialize in camelCase.

use serde::{Deserialize, Serialize};

use crate::detect::{detect_request_type, NormalizedRequest};
use crate::error::{RequestError, Result};
use crate::flags;

/// A certificate submission as received from a REST caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CertificateSubmission {
    /// The certificate request as BASE64 encoded DER (aka PEM).
    /// PKCS#10, PKCS#7/CMS and CMC are supported and are detected
    /// automatically.
    pub request: String,

    /// Optional request attributes as name-value pairs separated by a
    /// colon, e.g. `CertificateTemplate:WebServer`.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub request_attributes: Vec<String>,
}

impl CertificateSubmission {
    /// Create a submission for the given request blob.
    pub fn new(request: impl Into<String>) -> Self {
        Self {
            request: request.into(),
            request_attributes: Vec::new(),
        }
    }

    /// Add a request attribute.
    pub fn with_attribute(mut self, attribute: impl Into<String>) -> Self {
        self.request_attributes.push(attribute.into());
        self
    }

    /// Run auto-detection on the request blob.
    ///
    /// Returns [`RequestError::UnrecognizedRequest`] when no supported
    /// grammar matches, so an HTTP layer can reject the submission
    /// before any call into a certification authority.
    pub fn normalize(&self) -> Result<NormalizedRequest> {
        let normalized = detect_request_type(&self.request);

        if !normalized.is_recognized() {
            return Err(RequestError::UnrecognizedRequest);
        }

        Ok(normalized)
    }
}

/// Disposition of a submission as reported by the certification
/// authority.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Disposition {
    /// The request was incomplete.
    Incomplete,

    /// The certification authority failed to process the request.
    Error,

    /// The request was denied.
    Denied,

    /// The certificate was issued.
    Issued,

    /// The certificate was issued out of band.
    IssuedOutOfBand,

    /// The request is pending manual approval.
    UnderSubmission,

    /// The certificate has been revoked.
    Revoked,
}

impl Disposition {
    /// Parse from a `CR_DISP_*` code.
    pub fn from_code(code: u32) -> Option<Self> {
        match code {
            flags::CR_DISP_INCOMPLETE => Some(Self::Incomplete),
            flags::CR_DISP_ERROR => Some(Self::Error),
            flags::CR_DISP_DENIED => Some(Self::Denied),
            flags::CR_DISP_ISSUED => Some(Self::Issued),
            flags::CR_DISP_ISSUED_OUT_OF_BAND => Some(Self::IssuedOutOfBand),
            flags::CR_DISP_UNDER_SUBMISSION => Some(Self::UnderSubmission),
            flags::CR_DISP_REVOKED => Some(Self::Revoked),
            _ => None,
        }
    }

    /// The `CR_DISP_*` code for this disposition.
    pub fn code(self) -> u32 {
        match self {
            Self::Incomplete => flags::CR_DISP_INCOMPLETE,
            Self::Error => flags::CR_DISP_ERROR,
            Self::Denied => flags::CR_DISP_DENIED,
            Self::Issued => flags::CR_DISP_ISSUED,
            Self::IssuedOutOfBand => flags::CR_DISP_ISSUED_OUT_OF_BAND,
            Self::UnderSubmission => flags::CR_DISP_UNDER_SUBMISSION,
            Self::Revoked => flags::CR_DISP_REVOKED,
        }
    }

    /// A textual description of the disposition.
    pub fn description(self) -> &'static str {
        match self {
            Self::Incomplete => "The certificate request was incomplete.",
            Self::Error => {
                "The certification authority was unable to process the certificate request."
            }
            Self::Denied => "The certificate request was denied by the certification authority.",
            Self::Issued => "The certificate was issued.",
            Self::IssuedOutOfBand => "The certificate was issued out of band.",
            Self::UnderSubmission => "The certificate request is under submission.",
            Self::Revoked => "The certificate has been revoked.",
        }
    }

    /// Returns true if a certificate was issued.
    pub fn is_issued(self) -> bool {
        matches!(self, Self::Issued | Self::IssuedOutOfBand)
    }

    /// Returns true if the request is awaiting manual approval.
    pub fn is_pending(self) -> bool {
        matches!(self, Self::UnderSubmission)
    }
}

/// Response envelope for a certificate submission.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionResponse {
    /// A textual description of the outcome of the submission.
    pub description: String,

    /// HResult status code reported by the certification authority.
    pub status_code: i32,

    /// A textual description of the status code.
    #[serde(default)]
    pub status_message: String,

    /// The request ID of the issued certificate or pending request.
    #[serde(default)]
    pub request_id: u32,

    /// The disposition code (`CR_DISP_*`) for the request.
    #[serde(default)]
    pub disposition_code: u32,

    /// A textual description of the disposition.
    #[serde(default)]
    pub disposition_message: String,

    /// The issued certificate as BASE64 encoded DER, if issued.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub certificate: Option<String>,
}

impl SubmissionResponse {
    /// The disposition, if the code is a known `CR_DISP_*` value.
    pub fn disposition(&self) -> Option<Disposition> {
        Disposition::from_code(self.disposition_code)
    }
}
