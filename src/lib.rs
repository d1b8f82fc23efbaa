//! An editable tree of DER encoded data and typed X.509 extensions.
//!
//! This crate decodes data encoded in the Distinguished Encoding Rules
//! of ASN.1 into a tree of [`Node`]s, allows changing that tree, and
//! encodes it again. Unlike a decoder that follows a fixed ASN.1
//! specification, the tree is built purely from what is in the data. The
//! content of an OCTET STRING is treated as nested values if it happens to
//! be a correctly encoded sequence of values.
//!
//! The content of a node can be interpreted as one of the basic types via
//! methods such as [`Node::to_integer`] or [`Node::to_oid`]. On top of
//! this, the [`x509`] module provides typed views of certificate
//! extensions, including the signed certificate timestamps of Certificate
//! Transparency.
//!
//! Cryptographic operations are never performed by the crate itself. They
//! are delegated to an implementation of [`crypto::CryptoProvider`].
//!
//! # Limitations
//!
//! Only definite lengths are supported, so BER data using the indefinite
//! form can’t be decoded. Tags and lengths must be encoded in their
//! shortest form. The crate doesn’t validate certificates or certificate
//! chains.
//!
//! # Example
//!
//! ```
//! use x509der::Node;
//!
//! let mut node = Node::parse_buffer(
//!     &b"\x30\x08\x02\x02\x10\x10\x02\x02\x11\x11"[..]
//! ).unwrap();
//! assert_eq!(node.subs().len(), 2);
//! node.subs_mut().remove(0);
//! assert_eq!(node.to_der().as_ref(), b"\x30\x04\x02\x02\x11\x11");
//! ```

pub use self::decode::Error;
pub use self::int::Integer;
pub use self::obj::Node;
pub use self::oid::{ConstOid, Oid};
pub use self::string::BitString;
pub use self::tag::{Class, Tag};
pub use self::time::Time;

#[macro_use] pub mod debug;

pub mod crypto;
pub mod decode;
pub mod int;
pub mod obj;
pub mod oid;
pub mod string;
pub mod tag;
pub mod time;
pub mod x509;

mod length;
