//! Error Handling.
//!
//! This is a private module. Its public content is being re-exported by the
//! parent module.

use crate::tag::Tag;
use super::source::Pos;


//------------ Error ---------------------------------------------------------

/// A type representing an error that happened while decoding data.
///
/// There is one variant for each kind of failure. Structural errors
/// happen while splitting a buffer into values and are always fatal to the
/// whole parse. The other kinds happen when interpreting the content of an
/// already parsed value and only concern that single interpretation.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum Error {
    /// The data is not a correctly encoded sequence of DER values.
    ///
    /// This covers truncated data, tag or length fields that run past the
    /// end of the buffer, and length encodings that are either not
    /// minimal or not supported at all, such as the indefinite form.
    #[error("malformed data at position {pos}: {msg}")]
    Decode {
        msg: &'static str,
        pos: Pos,
    },

    /// A value was interpreted as a type it isn’t tagged as.
    #[error("expected {expected}, found {found}")]
    TypeMismatch {
        expected: &'static str,
        found: Tag,
    },

    /// The content of a value does not follow the format of its type.
    #[error("{msg}")]
    Format {
        msg: &'static str,
    },

    /// A declared length disagrees with the data actually present.
    #[error("{what} length does not match actual length")]
    LengthMismatch {
        what: &'static str,
    },
}

impl Error {
    /// Creates a structural error at the given position.
    pub fn decode(msg: &'static str, pos: impl Into<Pos>) -> Self {
        Error::Decode { msg, pos: pos.into() }
    }

    /// Creates an error for a value that is not of the expected type.
    pub fn type_mismatch(expected: &'static str, found: &Tag) -> Self {
        Error::TypeMismatch { expected, found: found.clone() }
    }

    /// Creates an error for content violating its type’s format.
    pub fn format(msg: &'static str) -> Self {
        Error::Format { msg }
    }

    /// Creates an error for a declared length that doesn’t match.
    pub fn length_mismatch(what: &'static str) -> Self {
        Error::LengthMismatch { what }
    }

    /// Returns whether this is a structural decoding error.
    pub fn is_decode(&self) -> bool {
        matches!(self, Error::Decode { .. })
    }

    /// Returns whether this is a type mismatch.
    pub fn is_type_mismatch(&self) -> bool {
        matches!(self, Error::TypeMismatch { .. })
    }
}


//============ Tests =========================================================
