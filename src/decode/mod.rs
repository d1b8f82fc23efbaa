//! Decoding DER encoded data.
//!
//! This module contains the two things everything else in the crate needs
//! for decoding: the [`Source`] cursor walking over a buffer and the
//! [`Error`] type describing what went wrong.

pub use self::error::Error;
pub use self::source::{Pos, Source};

mod error;
mod source;
