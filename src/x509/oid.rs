//! Object identifiers of certificate extensions.

use crate::oid::{ConstOid, Oid};

/// `id-ce-subjectKeyIdentifier`, 2.5.29.14.
pub const CE_SUBJECT_KEY_IDENTIFIER: ConstOid = Oid(&[85, 29, 14]);

/// `id-ce-keyUsage`, 2.5.29.15.
pub const CE_KEY_USAGE: ConstOid = Oid(&[85, 29, 15]);

/// `id-ce-subjectAltName`, 2.5.29.17.
pub const CE_SUBJECT_ALT_NAME: ConstOid = Oid(&[85, 29, 17]);

/// `id-ce-basicConstraints`, 2.5.29.19.
pub const CE_BASIC_CONSTRAINTS: ConstOid = Oid(&[85, 29, 19]);

/// `id-ce-authorityKeyIdentifier`, 2.5.29.35.
pub const CE_AUTHORITY_KEY_IDENTIFIER: ConstOid = Oid(&[85, 29, 35]);

/// The embedded SCT list of RFC 6962, 1.3.6.1.4.1.11129.2.4.2.
pub const CT_PRECERT_SCTS: ConstOid
    = Oid(&[43, 6, 1, 4, 1, 214, 121, 2, 4, 2]);

/// The Sigstore OIDC issuer, 1.3.6.1.4.1.57264.1.1.
pub const SIGSTORE_ISSUER: ConstOid
    = Oid(&[43, 6, 1, 4, 1, 131, 191, 48, 1, 1]);

/// The Sigstore OIDC issuer as a UTF8String, 1.3.6.1.4.1.57264.1.8.
pub const SIGSTORE_ISSUER_V2: ConstOid
    = Oid(&[43, 6, 1, 4, 1, 131, 191, 48, 1, 8]);

/// The Sigstore username other name, 1.3.6.1.4.1.57264.1.7.
pub const SIGSTORE_OTHERNAME: ConstOid
    = Oid(&[43, 6, 1, 4, 1, 131, 191, 48, 1, 7]);


//============ Tests =========================================================

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn dotted() {
        assert_eq!(CE_SUBJECT_KEY_IDENTIFIER.to_string(), "2.5.29.14");
        assert_eq!(CE_KEY_USAGE.to_string(), "2.5.29.15");
        assert_eq!(CE_SUBJECT_ALT_NAME.to_string(), "2.5.29.17");
        assert_eq!(CE_BASIC_CONSTRAINTS.to_string(), "2.5.29.19");
        assert_eq!(CE_AUTHORITY_KEY_IDENTIFIER.to_string(), "2.5.29.35");
        assert_eq!(CT_PRECERT_SCTS.to_string(), "1.3.6.1.4.1.11129.2.4.2");
        assert_eq!(SIGSTORE_ISSUER.to_string(), "1.3.6.1.4.1.57264.1.1");
        assert_eq!(SIGSTORE_ISSUER_V2.to_string(), "1.3.6.1.4.1.57264.1.8");
        assert_eq!(SIGSTORE_OTHERNAME.to_string(), "1.3.6.1.4.1.57264.1.7");
    }
}
