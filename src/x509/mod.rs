//! X.509 certificate extensions.
//!
//! The types in this module are views atop a parsed [`Node`][crate::Node].
//! Every extension is first read as a generic [`Extension`] which provides
//! its object identifier, the critical flag, and the wrapped value. Typed
//! views such as [`BasicConstraints`] interpret the value further. Use
//! [`TypedExtension::from_extension`] to pick the right view based on the
//! object identifier.
//!
//! Accessors for parts of an extension that are optional return an
//! `Option`. They only fail if the part is present but broken.

pub use self::ext::{
    AuthorityKeyIdentifier, BasicConstraints, Extension, KeyUsage,
    SctExtension, SubjectAltName, SubjectKeyIdentifier, TypedExtension,
};
pub use self::sct::SignedCertificateTimestamp;

pub mod oid;

mod ext;
mod sct;
