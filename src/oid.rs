//! ASN.1 Object Identifiers.
//!
//! This module contains the [`Oid`] type that implements object identifiers,
//! a construct used by ASN.1 to uniquely identify all sorts of things. The
//! type is also re-exported at the top-level.

use std::{fmt, hash};
use bytes::Bytes;
use num_bigint::BigUint;
use crate::decode::Error;


//------------ Oid -----------------------------------------------------------

/// An object identifier.
///
/// Object identifiers are globally unique, hierarchical values that are used
/// to identify objects or their type. When written, they are presented as a
/// sequence of integers separated by dots such as ‘1.3.6.1.5.5.7.1’.
///
/// Values of this type keep a single object identifier in its encoded form,
/// i.e., in some form of byte sequence. Because different representations
/// may be useful, the type is generic over something that can become a
/// reference to a bytes slice. Values created via
/// [`from_content`][Oid::from_content] are checked to be correctly encoded.
/// Known identifiers are usually defined as constants of type [`ConstOid`],
/// see the [`x509::oid`][crate::x509::oid] module for examples.
///
/// # Encoding
///
/// The first content octet `v` alone provides the first two components:
/// the first component is `v / 40` capped at 2 and the second component is
/// `v` minus 40 times the first. All following octets are a sequence of
/// sub-identifiers, each an unsigned integer in base 128, big-endian, with
/// the most significant bit of every octet but the last one set.
#[derive(Clone, Debug)]
pub struct Oid<T: AsRef<[u8]> = Bytes>(pub T);

/// A type alias for `Oid<&'static [u8]>`.
///
/// This is useful when defining object identifier constants.
pub type ConstOid = Oid<&'static [u8]>;

impl Oid<Bytes> {
    /// Creates an object identifier from the content octets of a value.
    ///
    /// Fails if the content is empty or if there are octets after the
    /// first one and the final octet has its continuation bit set.
    pub fn from_content(content: Bytes) -> Result<Self, Error> {
        match content.split_first() {
            Some((_, [])) => Ok(Oid(content)),
            Some((_, [.., last])) if last & 0x80 == 0 => Ok(Oid(content)),
            _ => xerr!(Err(Error::format("invalid object identifier")))
        }
    }
}

impl<T: AsRef<[u8]>> Oid<T> {
    /// Returns an iterator to the components of this object identifier.
    ///
    /// A trailing incomplete sub-identifier is silently ignored. This can
    /// only happen for identifiers not created via `from_content`.
    pub fn iter(&self) -> Iter<'_> {
        Iter::new(self.0.as_ref())
    }

    /// Returns all components as unbounded integers.
    pub fn arcs(&self) -> Vec<BigUint> {
        self.iter().map(Component::to_biguint).collect()
    }
}


//--- AsRef

impl<T: AsRef<[u8]>> AsRef<[u8]> for Oid<T> {
    fn as_ref(&self) -> &[u8] {
        self.0.as_ref()
    }
}


//--- PartialEq and Eq

impl<T: AsRef<[u8]>, U: AsRef<[u8]>> PartialEq<Oid<U>> for Oid<T> {
    fn eq(&self, other: &Oid<U>) -> bool {
        self.0.as_ref() == other.0.as_ref()
    }
}

impl<T: AsRef<[u8]>> Eq for Oid<T> { }


//--- Hash

impl<T: AsRef<[u8]>> hash::Hash for Oid<T> {
    fn hash<H: hash::Hasher>(&self, state: &mut H) {
        self.0.as_ref().hash(state)
    }
}


//--- Display

impl<T: AsRef<[u8]>> fmt::Display for Oid<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut first = true;
        for component in self.iter() {
            if first {
                first = false;
            }
            else {
                f.write_str(".")?;
            }
            match component.to_u32() {
                Some(value) => write!(f, "{}", value)?,
                None => write!(f, "{}", component.to_biguint())?,
            }
        }
        Ok(())
    }
}


//------------ Component -----------------------------------------------------

/// A component of an object identifier.
///
/// Although these components are integers, they are encoded in a slightly
/// inconvenient way. Because of this we don’t convert them to native integers
/// but rather keep them as references to the underlying octets.
///
/// The methods [`to_u32`][Self::to_u32] and
/// [`to_biguint`][Self::to_biguint] convert a component into an integer.
#[derive(Clone, Copy, Debug)]
pub struct Component<'a> {
    /// The position of the component in the object identifier.
    position: Position,

    /// The octets of the subidentifier.
    ///
    /// For the first two components, this is the first octet of the
    /// identifier taken as is. Otherwise, the most significant bit of each
    /// octet indicates whether there are more octets to follow, the lower
    /// seven bits make up an unsigned integer in big endian notation. Since
    /// this isn’t bounded in any way, we can’t just simply turn these into,
    /// say, `u32`s.
    slice: &'a [u8],
}

/// The position of the component in the object identifier.
///
/// As the first two components of the object identifier are encoded in the
/// first octet of the encoded value, we have three different cases.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
enum Position {
    /// This is the first component of the identifier.
    ///
    /// This is 0 if the first octet is 0..39, 1 for 40..79, and 2 for
    /// anything else.
    First,

    /// This is the second component of the identifier.
    ///
    /// This is the first octet modulo 40 if it is below 80 and otherwise
    /// the octet minus 80.
    Second,

    /// This is any later component of the identifier.
    ///
    /// This is identical to the integer value of the subidentifier.
    Other,
}

impl<'a> Component<'a> {
    /// Creates a new component.
    fn new(slice: &'a [u8], position: Position) -> Self {
        Component { slice, position }
    }

    /// Attempts to convert the component to `u32`.
    ///
    /// Since the component’s value can be larger than the maximum value of
    /// a `u32`, this may fail in which case the method will return `None`.
    pub fn to_u32(self) -> Option<u32> {
        match self.position {
            Position::First | Position::Second => {
                self.leading_arc().map(u32::from)
            }
            Position::Other => {
                let mut res = 0u32;
                for &ch in self.slice {
                    res = res.checked_mul(128)? | u32::from(ch & 0x7F);
                }
                Some(res)
            }
        }
    }

    /// Converts the component into an unbounded integer.
    pub fn to_biguint(self) -> BigUint {
        match self.position {
            Position::First | Position::Second => {
                BigUint::from(self.leading_arc().unwrap_or(0))
            }
            Position::Other => {
                let mut res = BigUint::default();
                for &ch in self.slice {
                    res = (res << 7usize) | BigUint::from(ch & 0x7F);
                }
                res
            }
        }
    }

    /// Returns the value of one of the two components of the first octet.
    fn leading_arc(self) -> Option<u8> {
        let octet = *self.slice.first()?;
        let first = (octet / 40).min(2);
        match self.position {
            Position::First => Some(first),
            _ => Some(octet - 40 * first),
        }
    }
}


//--- PartialEq and Eq

impl<'a> PartialEq for Component<'a> {
    fn eq(&self, other: &Self) -> bool {
        self.position == other.position && self.slice == other.slice
    }
}

impl<'a> Eq for Component<'a> { }


//------------ Iter ----------------------------------------------------------

/// An iterator over the components of an object identifier.
///
/// Because the first octet provides two components, the iterator hands out
/// a slice of this octet twice.
pub struct Iter<'a> {
    /// The remainder of the object identifier’s encoded octets.
    slice: &'a [u8],

    /// The position of the next component.
    position: Position,

    /// The first octet while we still need it for `Second`.
    first: &'a [u8],
}

impl<'a> Iter<'a> {
    /// Creates a new iterator.
    fn new(slice: &'a [u8]) -> Self {
        Iter {
            slice,
            position: Position::First,
            first: b"",
        }
    }

    /// Takes the next sub-identifier off the remaining octets.
    fn take_subidentifier(&mut self) -> Option<&'a [u8]> {
        let end = self.slice.iter().position(|ch| ch & 0x80 == 0)?;
        let (res, tail) = self.slice.split_at(end + 1);
        self.slice = tail;
        Some(res)
    }
}

impl<'a> Iterator for Iter<'a> {
    type Item = Component<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.position {
            Position::First => {
                if self.slice.is_empty() {
                    return None
                }
                let (first, tail) = self.slice.split_at(1);
                self.slice = tail;
                self.first = first;
                self.position = Position::Second;
                Some(Component::new(first, Position::First))
            }
            Position::Second => {
                self.position = Position::Other;
                Some(Component::new(self.first, Position::Second))
            }
            Position::Other => {
                self.take_subidentifier().map(|slice| {
                    Component::new(slice, Position::Other)
                })
            }
        }
    }
}


//============ Tests =========================================================
