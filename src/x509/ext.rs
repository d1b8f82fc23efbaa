//! X.509 certificate extensions.
//!
//! This is a private module. Its public items are re-exported by the parent.

use bytes::Bytes;
use num_bigint::BigInt;
use crate::decode::Error;
use crate::obj::Node;
use crate::oid::Oid;
use crate::string::BitString;
use crate::tag::Tag;
use super::oid;
use super::sct::SignedCertificateTimestamp;


//------------ Extension -----------------------------------------------------

/// A generic certificate extension.
///
/// ```text
/// Extension  ::=  SEQUENCE  {
///     extnID      OBJECT IDENTIFIER,
///     critical    BOOLEAN DEFAULT FALSE,
///     extnValue   OCTET STRING
///                 -- contains the DER encoding of an ASN.1 value
///                 -- corresponding to the extension type identified
///                 -- by extnID
///     }
/// ```
///
/// The OCTET STRING of `extnValue` is kept as a node. Because its content
/// is DER, that node normally has exactly one child which is the actual
/// value of the extension. The typed extensions below all interpret this
/// child.
#[derive(Clone, Debug)]
pub struct Extension {
    /// The object identifier of the extension.
    oid: Oid,

    /// Whether the extension is critical.
    critical: bool,

    /// The `extnValue` OCTET STRING.
    value: Node,
}

/// # Decoding
///
impl Extension {
    /// Creates an extension from the node of its SEQUENCE.
    pub fn from_node(node: &Node) -> Result<Self, Error> {
        if !node.tag().is_type(&Tag::SEQUENCE) {
            xerr!(return Err(Error::type_mismatch("SEQUENCE", node.tag())))
        }
        let (oid, critical, value) = match node.subs() {
            [oid, value] => (oid, None, value),
            [oid, critical, value] => (oid, Some(critical), value),
            _ => xerr!(return Err(Error::format("invalid extension")))
        };
        if !value.tag().is_type(&Tag::OCTET_STRING) {
            xerr!(return Err(Error::format("invalid extension")))
        }
        Ok(Extension {
            oid: oid.to_oid()?,
            critical: match critical {
                Some(critical) => critical.to_boolean()?,
                None => false,
            },
            value: value.clone(),
        })
    }

    /// Creates an extension from its complete encoding.
    pub fn parse_buffer(data: impl Into<Bytes>) -> Result<Self, Error> {
        Self::from_node(&Node::parse_buffer(data)?)
    }
}

/// # Data Access
///
impl Extension {
    /// Returns the object identifier of the extension.
    pub fn oid(&self) -> &Oid {
        &self.oid
    }

    /// Returns whether the extension is critical.
    pub fn is_critical(&self) -> bool {
        self.critical
    }

    /// Returns the content of the `extnValue` OCTET STRING.
    pub fn value(&self) -> Bytes {
        self.value.content()
    }

    /// Returns the `extnValue` OCTET STRING as a node.
    pub fn value_obj(&self) -> &Node {
        &self.value
    }

    /// Returns the value of the extension wrapped in `extnValue`.
    ///
    /// Fails unless the OCTET STRING contains exactly one value.
    fn inner(&self) -> Result<&Node, Error> {
        match self.value.subs() {
            [inner] => Ok(inner),
            _ => xerr!(Err(Error::format("invalid extension")))
        }
    }

    /// Returns the wrapped value if it is of the given type.
    fn inner_of_type(
        &self, tag: &Tag, expected: &'static str
    ) -> Result<&Node, Error> {
        let inner = self.inner()?;
        if inner.tag().is_type(tag) {
            Ok(inner)
        }
        else {
            xerr!(Err(Error::type_mismatch(expected, inner.tag())))
        }
    }
}


//------------ TypedExtension ------------------------------------------------

/// An extension interpreted according to its object identifier.
#[derive(Clone, Debug)]
pub enum TypedExtension {
    BasicConstraints(BasicConstraints),
    KeyUsage(KeyUsage),
    SubjectAltName(SubjectAltName),
    AuthorityKeyIdentifier(AuthorityKeyIdentifier),
    SubjectKeyIdentifier(SubjectKeyIdentifier),
    Sct(SctExtension),

    /// An extension we don’t know about.
    Other(Extension),
}

impl TypedExtension {
    /// Picks the typed view for an extension based on its OID.
    pub fn from_extension(ext: Extension) -> Result<Self, Error> {
        let id = ext.oid().clone();
        if id == oid::CE_BASIC_CONSTRAINTS {
            BasicConstraints::from_extension(ext)
                .map(TypedExtension::BasicConstraints)
        }
        else if id == oid::CE_KEY_USAGE {
            KeyUsage::from_extension(ext).map(TypedExtension::KeyUsage)
        }
        else if id == oid::CE_SUBJECT_ALT_NAME {
            SubjectAltName::from_extension(ext)
                .map(TypedExtension::SubjectAltName)
        }
        else if id == oid::CE_AUTHORITY_KEY_IDENTIFIER {
            AuthorityKeyIdentifier::from_extension(ext)
                .map(TypedExtension::AuthorityKeyIdentifier)
        }
        else if id == oid::CE_SUBJECT_KEY_IDENTIFIER {
            SubjectKeyIdentifier::from_extension(ext)
                .map(TypedExtension::SubjectKeyIdentifier)
        }
        else if id == oid::CT_PRECERT_SCTS {
            SctExtension::from_extension(ext).map(TypedExtension::Sct)
        }
        else {
            Ok(TypedExtension::Other(ext))
        }
    }

    /// Returns the generic extension.
    pub fn extension(&self) -> &Extension {
        match *self {
            TypedExtension::BasicConstraints(ref ext) => ext.extension(),
            TypedExtension::KeyUsage(ref ext) => ext.extension(),
            TypedExtension::SubjectAltName(ref ext) => ext.extension(),
            TypedExtension::AuthorityKeyIdentifier(ref ext) => {
                ext.extension()
            }
            TypedExtension::SubjectKeyIdentifier(ref ext) => {
                ext.extension()
            }
            TypedExtension::Sct(ref ext) => ext.extension(),
            TypedExtension::Other(ref ext) => ext,
        }
    }
}


//------------ BasicConstraints ----------------------------------------------

/// The Basic Constraints extension.
///
/// ```text
/// BasicConstraints ::= SEQUENCE {
///      cA                      BOOLEAN DEFAULT FALSE,
///      pathLenConstraint       INTEGER (0..MAX) OPTIONAL }
/// ```
#[derive(Clone, Debug)]
pub struct BasicConstraints {
    ext: Extension,
}

impl BasicConstraints {
    /// Creates the typed view of a generic extension.
    ///
    /// Fails if the value isn’t a SEQUENCE.
    pub fn from_extension(ext: Extension) -> Result<Self, Error> {
        ext.inner_of_type(&Tag::SEQUENCE, "SEQUENCE")?;
        Ok(BasicConstraints { ext })
    }

    pub fn extension(&self) -> &Extension {
        &self.ext
    }

    fn sequence(&self) -> &Node {
        // Checked in from_extension.
        &self.ext.value.subs()[0]
    }

    /// Returns whether the subject is a CA.
    ///
    /// If the cA field is missing, this is `false`.
    pub fn is_ca(&self) -> Result<bool, Error> {
        match self.sequence().subs().first() {
            Some(ca) if ca.tag().is_type(&Tag::BOOLEAN) => ca.to_boolean(),
            _ => Ok(false)
        }
    }

    /// Returns the path length constraint if present.
    pub fn path_len_constraint(&self) -> Result<Option<BigInt>, Error> {
        self.sequence().find(&Tag::INTEGER).map(Node::to_integer).transpose()
    }
}


//------------ KeyUsage ------------------------------------------------------

/// The Key Usage extension.
///
/// ```text
/// KeyUsage ::= BIT STRING {
///      digitalSignature        (0),
///      nonRepudiation          (1), -- recent editions of X.509 have
///                           -- renamed this bit to contentCommitment
///      keyEncipherment         (2),
///      dataEncipherment        (3),
///      keyAgreement            (4),
///      keyCertSign             (5),
///      cRLSign                 (6),
///      encipherOnly            (7),
///      decipherOnly            (8) }
/// ```
///
/// A bit that is beyond the end of the bit string is not set.
#[derive(Clone, Debug)]
pub struct KeyUsage {
    ext: Extension,
    bits: BitString,
}

impl KeyUsage {
    /// Creates the typed view of a generic extension.
    pub fn from_extension(ext: Extension) -> Result<Self, Error> {
        let bits = ext.inner()?.to_bit_string()?;
        Ok(KeyUsage { ext, bits })
    }

    pub fn extension(&self) -> &Extension {
        &self.ext
    }

    pub fn bits(&self) -> &BitString {
        &self.bits
    }

    pub fn digital_signature(&self) -> bool {
        self.bits.bit(0)
    }

    pub fn content_commitment(&self) -> bool {
        self.bits.bit(1)
    }

    pub fn key_encipherment(&self) -> bool {
        self.bits.bit(2)
    }

    pub fn data_encipherment(&self) -> bool {
        self.bits.bit(3)
    }

    pub fn key_agreement(&self) -> bool {
        self.bits.bit(4)
    }

    pub fn key_cert_sign(&self) -> bool {
        self.bits.bit(5)
    }

    pub fn crl_sign(&self) -> bool {
        self.bits.bit(6)
    }

    pub fn encipher_only(&self) -> bool {
        self.bits.bit(7)
    }

    pub fn decipher_only(&self) -> bool {
        self.bits.bit(8)
    }
}


//------------ SubjectAltName ------------------------------------------------

/// The Subject Alternative Name extension.
///
/// ```text
/// SubjectAltName ::= GeneralNames
///
/// GeneralNames ::= SEQUENCE SIZE (1..MAX) OF GeneralName
///
/// GeneralName ::= CHOICE {
///      otherName                       [0]     OtherName,
///      rfc822Name                      [1]     IA5String,
///      dNSName                         [2]     IA5String,
///      x400Address                     [3]     ORAddress,
///      directoryName                   [4]     Name,
///      ediPartyName                    [5]     EDIPartyName,
///      uniformResourceIdentifier       [6]     IA5String,
///      iPAddress                       [7]     OCTET STRING,
///      registeredID                    [8]     OBJECT IDENTIFIER }
///
/// OtherName ::= SEQUENCE {
///      type-id    OBJECT IDENTIFIER,
///      value      [0] EXPLICIT ANY DEFINED BY type-id }
/// ```
///
/// The accessors return the first name of the requested kind or `None` if
/// there is no such name.
#[derive(Clone, Debug)]
pub struct SubjectAltName {
    ext: Extension,
}

impl SubjectAltName {
    /// Creates the typed view of a generic extension.
    ///
    /// Fails if the value isn’t a SEQUENCE.
    pub fn from_extension(ext: Extension) -> Result<Self, Error> {
        ext.inner_of_type(&Tag::SEQUENCE, "SEQUENCE")?;
        Ok(SubjectAltName { ext })
    }

    pub fn extension(&self) -> &Extension {
        &self.ext
    }

    /// Returns an iterator over all general names.
    pub fn names(&self) -> impl Iterator<Item = &Node> {
        // Checked in from_extension.
        self.ext.value.subs()[0].subs().iter()
    }

    fn ascii_name(&self, number: u32) -> Option<String> {
        self.names().find(|name| {
            name.tag().is_context_specific(number)
        }).map(Node::to_ascii_string)
    }

    /// Returns the first email address.
    pub fn rfc822_name(&self) -> Option<String> {
        self.ascii_name(1)
    }

    /// Returns the first domain name.
    pub fn dns_name(&self) -> Option<String> {
        self.ascii_name(2)
    }

    /// Returns the first URI.
    pub fn uri(&self) -> Option<String> {
        self.ascii_name(6)
    }

    /// Returns the value of the first other name of the given type.
    ///
    /// The value is expected to be a string. Anything that isn’t a
    /// UTF8String is taken to be ASCII.
    pub fn other_name<T: AsRef<[u8]>>(&self, oid: &Oid<T>) -> Option<String> {
        self.names().filter(|name| {
            name.tag().is_context_specific(0)
        }).find_map(|name| {
            match name.subs() {
                [type_id, value] if type_id.to_oid().ok()? == *oid => {
                    if !value.tag().is_context_specific(0) {
                        return None
                    }
                    let value = value.subs().first()?;
                    if value.tag().is_type(&Tag::UTF8_STRING) {
                        Some(value.to_utf8_string())
                    }
                    else {
                        Some(value.to_ascii_string())
                    }
                }
                _ => None
            }
        })
    }
}


//------------ AuthorityKeyIdentifier ----------------------------------------

/// The Authority Key Identifier extension.
///
/// ```text
/// AuthorityKeyIdentifier ::= SEQUENCE {
///     keyIdentifier             [0] KeyIdentifier           OPTIONAL,
///     authorityCertIssuer       [1] GeneralNames            OPTIONAL,
///     authorityCertSerialNumber [2] CertificateSerialNumber OPTIONAL  }
///
/// KeyIdentifier ::= OCTET STRING
/// ```
#[derive(Clone, Debug)]
pub struct AuthorityKeyIdentifier {
    ext: Extension,
}

impl AuthorityKeyIdentifier {
    /// Creates the typed view of a generic extension.
    ///
    /// Fails if the value isn’t a SEQUENCE.
    pub fn from_extension(ext: Extension) -> Result<Self, Error> {
        ext.inner_of_type(&Tag::SEQUENCE, "SEQUENCE")?;
        Ok(AuthorityKeyIdentifier { ext })
    }

    pub fn extension(&self) -> &Extension {
        &self.ext
    }

    /// Returns the key identifier if present.
    pub fn key_identifier(&self) -> Option<Bytes> {
        // Checked in from_extension.
        self.ext.value.subs()[0].find(&Tag::ctx(0)).map(Node::content)
    }
}


//------------ SubjectKeyIdentifier ------------------------------------------

/// The Subject Key Identifier extension.
///
/// ```text
/// SubjectKeyIdentifier ::= KeyIdentifier
/// KeyIdentifier        ::= OCTET STRING
/// ```
#[derive(Clone, Debug)]
pub struct SubjectKeyIdentifier {
    ext: Extension,
}

impl SubjectKeyIdentifier {
    /// Creates the typed view of a generic extension.
    ///
    /// Fails if the value isn’t an OCTET STRING.
    pub fn from_extension(ext: Extension) -> Result<Self, Error> {
        ext.inner_of_type(&Tag::OCTET_STRING, "OCTET STRING")?;
        Ok(SubjectKeyIdentifier { ext })
    }

    pub fn extension(&self) -> &Extension {
        &self.ext
    }

    /// Returns the key identifier.
    pub fn key_identifier(&self) -> Bytes {
        self.ext.value.subs()[0].content()
    }
}


//------------ SctExtension --------------------------------------------------

/// The embedded signed certificate timestamp list.
///
/// ```text
/// SignedCertificateTimestampList ::= OCTET STRING
/// ```
///
/// The content of the OCTET STRING is a TLS encoded list of signed
/// certificate timestamps, see [`SignedCertificateTimestamp`].
#[derive(Clone, Debug)]
pub struct SctExtension {
    ext: Extension,
}

impl SctExtension {
    /// Creates the typed view of a generic extension.
    ///
    /// Fails if the value isn’t an OCTET STRING.
    pub fn from_extension(ext: Extension) -> Result<Self, Error> {
        ext.inner_of_type(&Tag::OCTET_STRING, "OCTET STRING")?;
        Ok(SctExtension { ext })
    }

    pub fn extension(&self) -> &Extension {
        &self.ext
    }

    /// Decodes the timestamps in the list.
    pub fn signed_certificate_timestamps(
        &self
    ) -> Result<Vec<SignedCertificateTimestamp>, Error> {
        SignedCertificateTimestamp::decode_list(
            self.ext.value.subs()[0].content()
        )
    }
}


//============ Tests =========================================================

#[cfg(test)]
mod test {
    use super::*;
    use crate::oid::ConstOid;

    fn ext(hex: &str) -> Extension {
        Extension::parse_buffer(hex::decode(hex).unwrap()).unwrap()
    }

    const BASIC_CONSTRAINTS_CA: &str = "300F0603551D130101FF040530030101FF";

    #[test]
    fn extension() {
        let ext = ext(BASIC_CONSTRAINTS_CA);
        assert!(ext.is_critical());
        assert_eq!(ext.oid().to_string(), "2.5.29.19");
        assert_eq!(hex::encode(ext.value()), "30030101ff");
        assert_eq!(ext.value_obj().tag(), &Tag::OCTET_STRING);
        assert_eq!(ext.value_obj().subs().len(), 1);
    }

    #[test]
    fn extension_not_critical() {
        let ext = ext(
            "301D0603551D0E04160414BC8EE9246141781B89DB3CAB61A94F825A34C5A8"
        );
        assert!(!ext.is_critical());
        assert_eq!(ext.oid(), &oid::CE_SUBJECT_KEY_IDENTIFIER);
    }

    #[test]
    fn malformed_extension() {
        fn err(hex: &str) -> Error {
            Extension::parse_buffer(hex::decode(hex).unwrap()).unwrap_err()
        }

        // Not a SEQUENCE.
        assert!(err("3103060155").is_type_mismatch());
        // Only the OID.
        assert_eq!(err("30050603551D13"), Error::format("invalid extension"));
        // Four elements.
        assert_eq!(
            err("300E0603551D130101FF040030000500"),
            Error::format("invalid extension")
        );
        // The value isn’t an OCTET STRING.
        assert_eq!(
            err("300A0603551D130101FF0500"),
            Error::format("invalid extension")
        );
        // The second element isn’t a BOOLEAN.
        assert!(err("300A0603551D130201010400").is_type_mismatch());
        // The OID is broken.
        assert_eq!(
            err("300A0603551D930101FF0400"),
            Error::format("invalid object identifier")
        );
    }

    #[test]
    fn basic_constraints() {
        let bc = BasicConstraints::from_extension(
            ext(BASIC_CONSTRAINTS_CA)
        ).unwrap();
        assert!(bc.extension().is_critical());
        assert_eq!(bc.extension().oid().to_string(), "2.5.29.19");
        assert_eq!(bc.is_ca(), Ok(true));
        assert_eq!(bc.path_len_constraint(), Ok(None));

        let bc = BasicConstraints::from_extension(
            ext("300F0603551D130101FF04053003010100")
        ).unwrap();
        assert_eq!(bc.is_ca(), Ok(false));

        let bc = BasicConstraints::from_extension(
            ext("300C0603551D130101FF04023000")
        ).unwrap();
        assert_eq!(bc.is_ca(), Ok(false));
        assert_eq!(bc.path_len_constraint(), Ok(None));

        let bc = BasicConstraints::from_extension(
            ext("30120603551D130101FF040830060101FF020101")
        ).unwrap();
        assert_eq!(bc.is_ca(), Ok(true));
        assert_eq!(bc.path_len_constraint(), Ok(Some(BigInt::from(1))));

        // pathLenConstraint only.
        let bc = BasicConstraints::from_extension(
            ext("300F0603551D130101FF04053003020100")
        ).unwrap();
        assert_eq!(bc.is_ca(), Ok(false));
        assert_eq!(bc.path_len_constraint(), Ok(Some(BigInt::from(0))));
    }

    #[test]
    fn basic_constraints_malformed() {
        // The value is a BOOLEAN rather than a SEQUENCE.
        assert!(
            BasicConstraints::from_extension(
                ext("300D0603551D130101FF04030101FF")
            ).unwrap_err().is_type_mismatch()
        );

        // The OCTET STRING doesn’t contain a value.
        assert_eq!(
            BasicConstraints::from_extension(
                ext("300A0603551D130101FF0400")
            ).unwrap_err(),
            Error::format("invalid extension")
        );
    }

    #[test]
    fn key_usage() {
        fn ku(bits: &str) -> KeyUsage {
            KeyUsage::from_extension(
                ext(&format!("300E0603551D0F0101FF04040302{}", bits))
            ).unwrap()
        }

        let usage = ku("0780");
        assert!(usage.extension().is_critical());
        assert_eq!(usage.extension().oid().to_string(), "2.5.29.15");
        assert!(usage.digital_signature());
        assert!(!usage.key_cert_sign());
        assert!(!usage.crl_sign());

        assert!(!ku("0700").digital_signature());
        assert!(ku("0204").key_cert_sign());
        assert!(!ku("0200").key_cert_sign());
        assert!(ku("0102").crl_sign());
        assert!(!ku("0100").crl_sign());

        // keyEncipherment and keyAgreement.
        let usage = ku("0328");
        assert!(usage.key_encipherment());
        assert!(usage.key_agreement());
        assert!(!usage.content_commitment());
        assert!(!usage.data_encipherment());
        assert!(!usage.encipher_only());
        assert!(!usage.decipher_only());

        let usage = KeyUsage::from_extension(
            ext("300F0603551D0F0101FF0405030307FF80")
        ).unwrap();
        assert!(usage.encipher_only());
        assert!(usage.decipher_only());
        assert_eq!(usage.bits().bit_len(), 9);
    }

    #[test]
    fn subject_alt_name() {
        let san = SubjectAltName::from_extension(ext(
            "301F0603551D110101FF041530138111627269616E40646568616D65722E636F6D"
        )).unwrap();
        assert!(san.extension().is_critical());
        assert_eq!(san.extension().oid().to_string(), "2.5.29.17");
        assert_eq!(san.rfc822_name().unwrap(), "brian@dehamer.com");
    }

    #[test]
    fn rfc822_name_and_uri() {
        let rfc822 = SubjectAltName::from_extension(ext(
            "30190603551D110101FF040F300D810B666F6F406261722E636F6D"
        )).unwrap();
        let uri = SubjectAltName::from_extension(ext(
            "30190603551D110101FF040F300D860B666F6F406261722E636F6D"
        )).unwrap();

        assert_eq!(rfc822.rfc822_name().as_deref(), Some("foo@bar.com"));
        assert_eq!(rfc822.uri(), None);
        assert_eq!(rfc822.dns_name(), None);
        assert_eq!(uri.uri().as_deref(), Some("foo@bar.com"));
        assert_eq!(uri.rfc822_name(), None);
        assert_eq!(
            rfc822.other_name(&oid::SIGSTORE_OTHERNAME), None
        );
    }

    #[test]
    fn dns_name() {
        let san = SubjectAltName::from_extension(ext(
            "301D0603551D11041630148207666F6F2E636F6D82092A2E6578616D706C65"
        )).unwrap();
        assert_eq!(san.dns_name().as_deref(), Some("foo.com"));
        assert_eq!(san.names().count(), 2);
    }

    #[test]
    fn other_name() {
        let san = SubjectAltName::from_extension(ext(
            "30260603551D11041F301DA01B060A2B0601040183BF300107\
             A00D0C0B666F6F406261722E636F6D"
        )).unwrap();
        assert!(!san.extension().is_critical());
        assert_eq!(
            san.other_name(&oid::SIGSTORE_OTHERNAME).as_deref(),
            Some("foo@bar.com")
        );

        const UNKNOWN: ConstOid = Oid(&[9, 9]);
        assert_eq!(UNKNOWN.to_string(), "0.9.9");
        assert_eq!(san.other_name(&UNKNOWN), None);
        assert_eq!(san.rfc822_name(), None);
    }

    #[test]
    fn authority_key_identifier() {
        let aki = AuthorityKeyIdentifier::from_extension(ext(
            "301F0603551D23041830168014875197D46B0D39CC9C44DFEDD1FBF77BF04F9B4F"
        )).unwrap();
        assert!(!aki.extension().is_critical());
        assert_eq!(aki.extension().oid().to_string(), "2.5.29.35");
        assert_eq!(
            hex::encode_upper(aki.key_identifier().unwrap()),
            "875197D46B0D39CC9C44DFEDD1FBF77BF04F9B4F"
        );

        let aki = AuthorityKeyIdentifier::from_extension(ext(
            "301F0603551D23041830168114875197D46B0D39CC9C44DFEDD1FBF77BF04F9B4F"
        )).unwrap();
        assert_eq!(aki.key_identifier(), None);
    }

    #[test]
    fn subject_key_identifier() {
        let ski = SubjectKeyIdentifier::from_extension(ext(
            "301D0603551D0E04160414BC8EE9246141781B89DB3CAB61A94F825A34C5A8"
        )).unwrap();
        assert!(!ski.extension().is_critical());
        assert_eq!(ski.extension().oid().to_string(), "2.5.29.14");
        assert_eq!(
            hex::encode_upper(ski.key_identifier()),
            "BC8EE9246141781B89DB3CAB61A94F825A34C5A8"
        );
    }

    #[test]
    fn typed_extension() {
        let typed = TypedExtension::from_extension(
            ext(BASIC_CONSTRAINTS_CA)
        ).unwrap();
        match typed {
            TypedExtension::BasicConstraints(ref bc) => {
                assert_eq!(bc.is_ca(), Ok(true))
            }
            _ => panic!("expected basic constraints")
        }
        assert!(typed.extension().is_critical());

        assert!(matches!(
            TypedExtension::from_extension(ext(
                "300E0603551D0F0101FF040403020780"
            )).unwrap(),
            TypedExtension::KeyUsage(_)
        ));
        assert!(matches!(
            TypedExtension::from_extension(ext(
                "3012060A2B06010401D679020402040404020000"
            )).unwrap(),
            TypedExtension::Sct(_)
        ));

        // An unknown OID.
        let typed = TypedExtension::from_extension(
            ext("300A06032A0304040302010A")
        ).unwrap();
        assert!(matches!(typed, TypedExtension::Other(_)));
        assert_eq!(typed.extension().oid().to_string(), "1.2.3.4");
    }
}
