//! Signed certificate timestamps.
//!
//! This is a private module. Its public items are re-exported by the parent.

use bytes::Bytes;
use chrono::{DateTime, Utc};
use log::debug;
use crate::crypto::{CryptoProvider, HashAlgorithm, SignatureAlgorithm};
use crate::decode::{Error, Source};


//------------ SignedCertificateTimestamp ------------------------------------

/// A signed certificate timestamp.
///
/// This is a Certificate Transparency log’s promise to include a
/// certificate. It is defined in section 3.2 of RFC 6962 using the TLS
/// presentation language:
///
/// ```text
/// struct {
///     Version sct_version;                     -- one octet
///     LogID id;                                -- 32 octets
///     uint64 timestamp;
///     CtExtensions extensions;                 -- opaque <0..2^16-1>
///     digitally-signed struct { ... };         -- hash, signature, and
///                                              -- opaque <0..2^16-1>
/// } SignedCertificateTimestamp;
/// ```
///
/// A list of these is embedded into precertificates. Each entry of the list
/// is preceded by its length as a two octet integer and so is the list as
/// a whole.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SignedCertificateTimestamp {
    version: u8,
    log_id: Bytes,
    timestamp: u64,
    extensions: Bytes,
    hash_algorithm: u8,
    signature_algorithm: u8,
    signature: Bytes,
}

/// # Decoding
///
impl SignedCertificateTimestamp {
    /// The length of a log ID.
    pub const LOG_ID_LEN: usize = 32;

    /// Decodes a complete timestamp list.
    ///
    /// Fails if the length of the list doesn’t match the data or if any
    /// entry doesn’t fit the list.
    pub fn decode_list(data: Bytes) -> Result<Vec<Self>, Error> {
        let mut source = Source::new(data);
        let len = match source.take_u16() {
            Ok(len) => usize::from(len),
            Err(_) => xerr!(return Err(Error::length_mismatch("SCT list")))
        };
        if len != source.remaining() {
            xerr!(return Err(Error::length_mismatch("SCT list")))
        }

        let mut res = Vec::new();
        while !source.is_exhausted() {
            let record = match source.take_u16_block() {
                Ok(record) => record,
                Err(_) => {
                    xerr!(return Err(Error::length_mismatch("SCT list")))
                }
            };
            res.push(Self::from_record(record)?);
        }
        debug!("decoded SCT list with {} entries", res.len());
        Ok(res)
    }

    /// Decodes a single timestamp from its complete record.
    ///
    /// All the record needs to be used up by the timestamp.
    pub fn from_record(record: Bytes) -> Result<Self, Error> {
        let mut source = Source::new(record);
        let res = match Self::take_from(&mut source) {
            Ok(res) => res,
            Err(err) if err.is_decode() => {
                xerr!(return Err(Error::length_mismatch("SCT")))
            }
            Err(err) => return Err(err)
        };
        if !source.is_exhausted() {
            xerr!(return Err(Error::length_mismatch("SCT")))
        }
        Ok(res)
    }

    fn take_from(source: &mut Source) -> Result<Self, Error> {
        let version = source.take_u8()?;
        let log_id = source.take_bytes(Self::LOG_ID_LEN)?;
        let timestamp = source.take_u64()?;
        if timestamp > i64::MAX as u64 {
            xerr!(return Err(Error::format("invalid SCT timestamp")))
        }
        Ok(SignedCertificateTimestamp {
            version,
            log_id,
            timestamp,
            extensions: source.take_u16_block()?,
            hash_algorithm: source.take_u8()?,
            signature_algorithm: source.take_u8()?,
            signature: source.take_u16_block()?,
        })
    }
}

/// # Data Access
///
impl SignedCertificateTimestamp {
    /// Returns the version. Zero means version 1.
    pub fn version(&self) -> u8 {
        self.version
    }

    /// Returns the SHA-256 hash of the log’s public key.
    pub fn log_id(&self) -> &Bytes {
        &self.log_id
    }

    /// Returns the timestamp in milliseconds since the Unix epoch.
    pub fn timestamp(&self) -> u64 {
        self.timestamp
    }

    /// Returns the timestamp as a point in time.
    ///
    /// Returns `None` if the time is too far in the future to be
    /// represented.
    pub fn datetime(&self) -> Option<DateTime<Utc>> {
        // Checked when decoding, the cast is fine.
        DateTime::from_timestamp_millis(self.timestamp as i64)
    }

    /// Returns the raw extensions.
    pub fn extensions(&self) -> &Bytes {
        &self.extensions
    }

    /// Returns the TLS code point of the hash algorithm.
    pub fn hash_algorithm(&self) -> u8 {
        self.hash_algorithm
    }

    /// Returns the TLS code point of the signature algorithm.
    pub fn signature_algorithm(&self) -> u8 {
        self.signature_algorithm
    }

    /// Returns the signature algorithm if it is a known one.
    pub fn signature_algorithm_kind(&self) -> Option<SignatureAlgorithm> {
        SignatureAlgorithm::from_tls_code(self.signature_algorithm)
    }

    /// Returns the signature.
    pub fn signature(&self) -> &Bytes {
        &self.signature
    }
}

/// # Verification
///
impl SignedCertificateTimestamp {
    /// Returns the data signed by the log for a precertificate.
    ///
    /// The `precert_entry` is the `PreCert` structure of RFC 6962, i.e.,
    /// the 32 octet issuer key hash followed by the DER encoded
    /// TBSCertificate with a three octet length. See
    /// [`precert_entry`][Self::precert_entry] for how to make one.
    pub fn signed_data(&self, precert_entry: &[u8]) -> Vec<u8> {
        let mut res = Vec::with_capacity(
            1 + 1 + 8 + 2 + precert_entry.len() + 2 + self.extensions.len()
        );
        res.push(self.version);
        res.push(0); // signature_type: certificate_timestamp
        res.extend_from_slice(&self.timestamp.to_be_bytes());
        res.extend_from_slice(&1u16.to_be_bytes()); // entry_type: precert
        res.extend_from_slice(precert_entry);
        // The extensions came from a two octet length, the cast is fine.
        res.extend_from_slice(&(self.extensions.len() as u16).to_be_bytes());
        res.extend_from_slice(&self.extensions);
        res
    }

    /// Creates the `PreCert` entry for a precertificate.
    ///
    /// The `issuer_public_key` is the DER encoded SubjectPublicKeyInfo of
    /// the issuer. The `tbs_certificate` is the precertificate’s
    /// TBSCertificate with the poison and SCT list extensions removed.
    pub fn precert_entry(
        issuer_public_key: &[u8],
        tbs_certificate: &[u8],
        provider: &impl CryptoProvider,
    ) -> Result<Vec<u8>, Error> {
        let len = tbs_certificate.len();
        if len > 0xFF_FFFF {
            xerr!(return Err(Error::format("invalid precertificate entry")))
        }
        let mut res = provider.digest(
            HashAlgorithm::Sha256, issuer_public_key
        );
        res.reserve(3 + len);
        res.extend_from_slice(&(len as u32).to_be_bytes()[1..]);
        res.extend_from_slice(tbs_certificate);
        Ok(res)
    }

    /// Checks the log’s signature over a precertificate entry.
    ///
    /// Fails if the hash algorithm is unknown. Otherwise returns whether
    /// `provider` considers the signature valid for `log_public_key`.
    pub fn verify(
        &self,
        precert_entry: &[u8],
        log_public_key: &[u8],
        provider: &impl CryptoProvider,
    ) -> Result<bool, Error> {
        let alg = match HashAlgorithm::from_tls_code(self.hash_algorithm) {
            Some(alg) => alg,
            None => {
                xerr!(return Err(Error::format("unknown SCT hash algorithm")))
            }
        };
        Ok(provider.verify(
            alg, log_public_key, &self.signed_data(precert_entry),
            &self.signature
        ))
    }
}


//============ Tests =========================================================
