//! PKCS#10 certification request parsing.

use const_oid::db::rfc4519::CN;
use der::Decode;
use x509_cert::request::CertReq;

/// Attempt to decode a bare PKCS#10 `CertificationRequest`.
///
/// The whole blob must be consumed by the parse; trailing data fails
/// the trial.
pub fn try_decode(der: &[u8]) -> Option<CertReq> {
    CertReq::from_der(der).ok()
}

/// Extract the subject common name from a certification request.
pub fn subject_common_name(csr: &CertReq) -> Option<String> {
    for rdn in csr.info.subject.0.iter() {
        for atv in rdn.0.iter() {
            if atv.oid == CN {
                if let Ok(s) = std::str::from_utf8(atv.value.value()) {
                    return Some(s.to_string());
                }
            }
        }
    }
    None
}

/// Dotted-decimal OID of the request's public key algorithm.
pub fn public_key_algorithm(csr: &CertReq) -> String {
    csr.info.public_key.algorithm.oid.to_string()
}
