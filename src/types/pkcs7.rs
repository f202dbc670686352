//! PKCS#7/CMS renewal envelope parsing.
//!
//! A PKCS#7 certificate request is a CMS `SignedData` message whose
//! encapsulated content is a PKCS#10 certification request, signed
//! with an existing certificate's key (renewal-with-old-key). This
//! module also provides the shared `ContentInfo`/`SignedData` decode
//! plumbing used by the CMC grammar, which layers on the same
//! envelope.

use cms::content_info::ContentInfo;
use cms::signed_data::SignedData;
use const_oid::ObjectIdentifier;
use der::asn1::OctetString;
use der::{Decode, Encode};

use super::pkcs10;

/// OID for CMS SignedData (1.2.840.113549.1.7.2).
pub const ID_SIGNED_DATA: ObjectIdentifier = ObjectIdentifier::new_unwrap("1.2.840.113549.1.7.2");

/// OID for CMS id-data (1.2.840.113549.1.7.1).
pub const ID_DATA: ObjectIdentifier = ObjectIdentifier::new_unwrap("1.2.840.113549.1.7.1");

/// Parse a DER blob as a CMS SignedData envelope.
pub(crate) fn signed_data_from_der(der: &[u8]) -> Option<SignedData> {
    let content_info = ContentInfo::from_der(der).ok()?;

    if content_info.content_type != ID_SIGNED_DATA {
        return None;
    }

    let content = content_info.content.to_der().ok()?;
    SignedData::from_der(&content).ok()
}

/// Extract the encapsulated content octets from a SignedData message.
pub(crate) fn encapsulated_content(signed_data: &SignedData) -> Option<Vec<u8>> {
    let econtent = signed_data.encap_content_info.econtent.as_ref()?;
    let octets = econtent.decode_as::<OctetString>().ok()?;
    Some(octets.as_bytes().to_vec())
}

/// Attempt to decode a PKCS#7 renewal envelope.
///
/// The envelope must be a SignedData message carrying id-data content,
/// and that content must itself parse as a PKCS#10 certification
/// request. A certs-only SignedData (no encapsulated request) is not a
/// certificate request and fails the trial.
pub fn try_decode(der: &[u8]) -> Option<SignedData> {
    let signed_data = signed_data_from_der(der)?;

    if signed_data.encap_content_info.econtent_type != ID_DATA {
        return None;
    }

    let inner = encapsulated_content(&signed_data)?;
    pkcs10::try_decode(&inner)?;

    Some(signed_data)
}
