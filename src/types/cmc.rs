//! CMC (Certificate Management over CMS) full request parsing.
//!
//! A CMC full enrollment request (RFC 5272) is a CMS `SignedData`
//! envelope whose encapsulated content type is id-cct-PKIData and
//! whose content is a `PKIData` message carrying the certificate
//! requests and control attributes.

use const_oid::ObjectIdentifier;
use der::asn1::Any;
use der::{Decode, Sequence};

use super::pkcs7;

/// OID for id-cct-PKIData (1.3.6.1.5.5.7.12.2).
pub const ID_CCT_PKI_DATA: ObjectIdentifier = ObjectIdentifier::new_unwrap("1.3.6.1.5.5.7.12.2");

/// PKIData message body (RFC 5272 Section 3.2).
///
/// ```asn1
/// PKIData ::= SEQUENCE {
///     controlSequence    SEQUENCE SIZE(0..MAX) OF TaggedAttribute,
///     reqSequence        SEQUENCE SIZE(0..MAX) OF TaggedRequest,
///     cmsSequence        SEQUENCE SIZE(0..MAX) OF TaggedContentInfo,
///     otherMsgSequence   SEQUENCE SIZE(0..MAX) OF OtherMsg
/// }
/// ```
///
/// The members are kept as raw ASN.1 values; classifying a request
/// only needs the outer structure, not the individual controls.
#[derive(Clone, Debug, Sequence)]
pub struct PkiData {
    /// Control attributes (TaggedAttribute).
    pub control_sequence: Vec<Any>,

    /// Certificate requests (TaggedRequest).
    pub req_sequence: Vec<Any>,

    /// Nested CMS content (TaggedContentInfo).
    pub cms_sequence: Vec<Any>,

    /// Extension messages (OtherMsg).
    pub other_msg_sequence: Vec<Any>,
}

impl PkiData {
    /// Number of certificate requests carried by the message.
    pub fn request_count(&self) -> usize {
        self.req_sequence.len()
    }

    /// Number of control attributes carried by the message.
    pub fn control_count(&self) -> usize {
        self.control_sequence.len()
    }
}

/// Attempt to decode a CMC full enrollment request.
pub fn try_decode(der: &[u8]) -> Option<PkiData> {
    let signed_data = pkcs7::signed_data_from_der(der)?;

    if signed_data.encap_content_info.econtent_type != ID_CCT_PKI_DATA {
        return None;
    }

    let inner = pkcs7::encapsulated_content(&signed_data)?;
    PkiData::from_der(&inner).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use der::Encode;

    #[test]
    fn test_try_decode_empty() {
        assert!(try_decode(&[]).is_none());
    }

    #[test]
    fn test_try_decode_garbage() {
        assert!(try_decode(b"this is not a cmc request").is_none());
    }

    #[test]
    fn test_pki_data_empty_sequences() {
        // PKIData with four empty member sequences
        let der = [0x30, 0x08, 0x30, 0x00, 0x30, 0x00, 0x30, 0x00, 0x30, 0x00];
        let pki_data = PkiData::from_der(&der).unwrap();

        assert_eq!(pki_data.request_count(), 0);
        assert_eq!(pki_data.control_count(), 0);
        assert_eq!(pki_data.to_der().unwrap(), der);
    }

    #[test]
    fn test_pki_data_rejects_truncated() {
        // Only three of the four member sequences present
        let der = [0x30, 0x06, 0x30, 0x00, 0x30, 0x00, 0x30, 0x00];
        assert!(PkiData::from_der(&der).is_err());
    }
}
