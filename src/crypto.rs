//! Cryptographic operations provided from the outside.
//!
//! The crate doesn’t implement any cryptography itself. Wherever it needs
//! to hash data or check a signature, it asks a [`CryptoProvider`] passed
//! in by the caller. Any widely used cryptography library can be wrapped
//! into one.

use std::fmt;


//------------ CryptoProvider ------------------------------------------------

/// A type that can calculate digests and verify signatures.
pub trait CryptoProvider {
    /// Returns the digest of `data` using the given hash algorithm.
    fn digest(&self, alg: HashAlgorithm, data: &[u8]) -> Vec<u8>;

    /// Checks that `signature` is a valid signature over `data`.
    ///
    /// The public key is given as a DER encoded SubjectPublicKeyInfo. The
    /// signature algorithm follows from the key, `alg` is the hash
    /// algorithm used for the signature.
    ///
    /// Returns `false` both for an invalid signature and for a key or
    /// signature that can’t be used at all.
    fn verify(
        &self,
        alg: HashAlgorithm,
        public_key: &[u8],
        data: &[u8],
        signature: &[u8],
    ) -> bool;
}

impl<'a, T: CryptoProvider + ?Sized> CryptoProvider for &'a T {
    fn digest(&self, alg: HashAlgorithm, data: &[u8]) -> Vec<u8> {
        (*self).digest(alg, data)
    }

    fn verify(
        &self,
        alg: HashAlgorithm,
        public_key: &[u8],
        data: &[u8],
        signature: &[u8],
    ) -> bool {
        (*self).verify(alg, public_key, data, signature)
    }
}


//------------ HashAlgorithm -------------------------------------------------

/// A hash algorithm.
///
/// The variants and their codes are those of the TLS HashAlgorithm
/// registry used in signed certificate timestamps. See section 7.4.1.4.1
/// of RFC 5246.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum HashAlgorithm {
    None,
    Md5,
    Sha1,
    Sha224,
    Sha256,
    Sha384,
    Sha512,
}

impl HashAlgorithm {
    /// Returns the algorithm for a TLS code point.
    pub fn from_tls_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(HashAlgorithm::None),
            1 => Some(HashAlgorithm::Md5),
            2 => Some(HashAlgorithm::Sha1),
            3 => Some(HashAlgorithm::Sha224),
            4 => Some(HashAlgorithm::Sha256),
            5 => Some(HashAlgorithm::Sha384),
            6 => Some(HashAlgorithm::Sha512),
            _ => None
        }
    }

    /// Returns the TLS code point of the algorithm.
    pub fn to_tls_code(self) -> u8 {
        match self {
            HashAlgorithm::None => 0,
            HashAlgorithm::Md5 => 1,
            HashAlgorithm::Sha1 => 2,
            HashAlgorithm::Sha224 => 3,
            HashAlgorithm::Sha256 => 4,
            HashAlgorithm::Sha384 => 5,
            HashAlgorithm::Sha512 => 6,
        }
    }

    /// Returns the length of a digest in octets.
    pub fn digest_len(self) -> usize {
        match self {
            HashAlgorithm::None => 0,
            HashAlgorithm::Md5 => 16,
            HashAlgorithm::Sha1 => 20,
            HashAlgorithm::Sha224 => 28,
            HashAlgorithm::Sha256 => 32,
            HashAlgorithm::Sha384 => 48,
            HashAlgorithm::Sha512 => 64,
        }
    }
}

impl fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match *self {
            HashAlgorithm::None => "none",
            HashAlgorithm::Md5 => "md5",
            HashAlgorithm::Sha1 => "sha1",
            HashAlgorithm::Sha224 => "sha224",
            HashAlgorithm::Sha256 => "sha256",
            HashAlgorithm::Sha384 => "sha384",
            HashAlgorithm::Sha512 => "sha512",
        })
    }
}


//------------ SignatureAlgorithm --------------------------------------------

/// A signature algorithm.
///
/// Again, these are the code points of the TLS SignatureAlgorithm registry.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum SignatureAlgorithm {
    Anonymous,
    Rsa,
    Dsa,
    Ecdsa,
}

impl SignatureAlgorithm {
    /// Returns the algorithm for a TLS code point.
    pub fn from_tls_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(SignatureAlgorithm::Anonymous),
            1 => Some(SignatureAlgorithm::Rsa),
            2 => Some(SignatureAlgorithm::Dsa),
            3 => Some(SignatureAlgorithm::Ecdsa),
            _ => None
        }
    }
}


//============ Tests =========================================================
