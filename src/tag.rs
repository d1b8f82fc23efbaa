//! The identifier octets of a DER encoded value.
//!
//! This is a private module. Its public items are re-exported by the parent.

use std::fmt;
use num_bigint::BigUint;
use smallvec::SmallVec;
use crate::decode::{Error, Source};


//------------ Tag -----------------------------------------------------------

/// The tag of an encoded value.
///
/// Each encoded value starts with a sequence of one or more octets called
/// the _identifier octets._ They encode the class of the tag, its number
/// within that class, and whether the value uses primitive or constructed
/// encoding. The `Tag` type represents all three.
///
/// When checking whether a value is of a certain type, the encoding form
/// usually doesn’t matter. Use [`Tag::is_type`] for such comparisons; the
/// `PartialEq` implementation compares all three parts.
///
/// Tag numbers are unbounded. Numbers that fit into a `u32` are kept
/// inline, only larger numbers need an allocation.
#[derive(Clone, Eq, Hash, PartialEq)]
pub struct Tag {
    class: Class,
    constructed: bool,
    number: Number,
}

/// The number of a tag.
///
/// `Large` is only ever used for numbers that don’t fit into a `u32`, so
/// that every number has exactly one representation.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
enum Number {
    Small(u32),
    Large(BigUint),
}

impl Tag {
    /// The mask for checking whether the value is constructed.
    const CONSTRUCTED_MASK: u8 = 0x20;

    /// The mask for the number in the first octet.
    ///
    /// If all these bits are set, the number follows in subsequent octets.
    const SINGLEBYTE_DATA_MASK: u8 = 0x1f;

    /// The mask for the number bits in subsequent octets.
    const MULTIBYTE_DATA_MASK: u8 = 0x7f;

    /// The bit that is cleared in the last identifier octet.
    const LAST_OCTET_MASK: u8 = 0x80;
}

/// # Constants for Often Used Universal Tags
///
/// See clause 8.4 of ITU Recommendation X.690. SEQUENCE and SET are
/// always constructed, all others here are primitive.
impl Tag {
    /// The tag for the BOOLEAN type, UNIVERSAL 1.
    pub const BOOLEAN: Self = Self::universal(1);

    /// The tag for the INTEGER type, UNIVERSAL 2.
    pub const INTEGER: Self = Self::universal(2);

    /// The tag for the BIT STRING type, UNIVERSAL 3.
    pub const BIT_STRING: Self = Self::universal(3);

    /// The tag for the OCTET STRING type, UNIVERSAL 4.
    pub const OCTET_STRING: Self = Self::universal(4);

    /// The tag for the NULL type, UNIVERSAL 5.
    pub const NULL: Self = Self::universal(5);

    /// The tag for the OBJECT IDENTIFIER type, UNIVERSAL 6.
    pub const OID: Self = Self::universal(6);

    /// The tag for the UTF8String type, UNIVERSAL 12.
    pub const UTF8_STRING: Self = Self::universal(12);

    /// The tag for the SEQUENCE and SEQUENCE OF types, UNIVERSAL 16.
    pub const SEQUENCE: Self = Self::new(Class::Universal, true, 16);

    /// The tag for the SET and SET OF types, UNIVERSAL 17.
    pub const SET: Self = Self::new(Class::Universal, true, 17);

    /// The tag for the PrintableString type, UNIVERSAL 19.
    pub const PRINTABLE_STRING: Self = Self::universal(19);

    /// The tag for the IA5String type, UNIVERSAL 22.
    pub const IA5_STRING: Self = Self::universal(22);

    /// The tag for the UTCTime type, UNIVERSAL 23.
    pub const UTC_TIME: Self = Self::universal(23);

    /// The tag for the GeneralizedTime type, UNIVERSAL 24.
    pub const GENERALIZED_TIME: Self = Self::universal(24);
}

impl Tag {
    /// Creates a tag from its three parts.
    pub const fn new(class: Class, constructed: bool, number: u32) -> Self {
        Tag { class, constructed, number: Number::Small(number) }
    }

    /// Creates a tag with a number of arbitrary size.
    pub fn with_number(
        class: Class, constructed: bool, number: BigUint
    ) -> Self {
        let number = match u32::try_from(&number) {
            Ok(small) => Number::Small(small),
            Err(_) => Number::Large(number),
        };
        Tag { class, constructed, number }
    }

    /// Creates a primitive tag in the universal class.
    pub const fn universal(number: u32) -> Self {
        Self::new(Class::Universal, false, number)
    }

    /// Creates a primitive tag in the context specific class.
    pub const fn ctx(number: u32) -> Self {
        Self::new(Class::ContextSpecific, false, number)
    }

    /// Returns the same tag with constructed encoding.
    pub fn into_constructed(self) -> Self {
        Tag { constructed: true, ..self }
    }

    /// Returns the class of the tag.
    pub fn class(&self) -> Class {
        self.class
    }

    /// Returns whether the value uses constructed encoding.
    pub fn is_constructed(&self) -> bool {
        self.constructed
    }

    /// Returns the number of the tag.
    pub fn number(&self) -> BigUint {
        match self.number {
            Number::Small(number) => number.into(),
            Number::Large(ref number) => number.clone(),
        }
    }

    /// Returns the number of the tag if it fits into a `u32`.
    pub fn number_u32(&self) -> Option<u32> {
        match self.number {
            Number::Small(number) => Some(number),
            Number::Large(_) => None,
        }
    }

    /// Returns whether both tags have the same class and number.
    ///
    /// This ignores whether the tags use primitive or constructed
    /// encoding.
    pub fn is_type(&self, other: &Tag) -> bool {
        self.class == other.class && self.number == other.number
    }

    /// Returns whether this is the universal tag with the given number.
    pub fn is_universal(&self, number: u32) -> bool {
        self.class == Class::Universal
            && self.number == Number::Small(number)
    }

    /// Returns whether this is the context specific tag `[number]`.
    pub fn is_context_specific(&self, number: u32) -> bool {
        self.class == Class::ContextSpecific
            && self.number == Number::Small(number)
    }
}

/// # Decoding and Encoding
///
impl Tag {
    /// Takes the identifier octets from the beginning of a source.
    ///
    /// Fails if the source ends in the middle of the identifier octets or
    /// if a multi-octet number isn’t encoded in the shortest possible way.
    pub fn take_from(source: &mut Source) -> Result<Self, Error> {
        let start = source.pos();
        let first = source.take_u8()?;
        let class = Class::from_u8(first);
        let constructed = first & Tag::CONSTRUCTED_MASK != 0;
        let low = first & Tag::SINGLEBYTE_DATA_MASK;
        if low != Tag::SINGLEBYTE_DATA_MASK {
            return Ok(Tag::new(class, constructed, u32::from(low)))
        }

        // Base 128, most significant digit first, bit 8 set on all but the
        // last octet.
        let mut number = BigUint::default();
        let mut leading = true;
        loop {
            let octet = source.take_u8()?;
            if leading && octet == Tag::LAST_OCTET_MASK {
                xerr!(return Err(
                    Error::decode("non-minimal tag number", start)
                ))
            }
            leading = false;
            number = (number << 7u32)
                | BigUint::from(octet & Tag::MULTIBYTE_DATA_MASK);
            if octet & Tag::LAST_OCTET_MASK == 0 {
                break
            }
        }
        if number < BigUint::from(Tag::SINGLEBYTE_DATA_MASK) {
            xerr!(return Err(Error::decode("non-minimal tag number", start)))
        }
        Ok(Tag::with_number(class, constructed, number))
    }

    /// Returns the identifier octets for the tag.
    ///
    /// The multi-octet form is only used for numbers of 31 and above.
    pub fn to_encoded(&self) -> SmallVec<[u8; 6]> {
        let mut first = self.class.into_u8();
        if self.constructed {
            first |= Tag::CONSTRUCTED_MASK
        }
        let mut res = SmallVec::new();
        match self.number {
            Number::Small(number) if number < 0x1f => {
                res.push(first | number as u8);
            }
            Number::Small(mut number) => {
                res.push(first | Tag::SINGLEBYTE_DATA_MASK);
                let mut buf = [0u8; 5];
                let mut idx = buf.len();
                loop {
                    idx -= 1;
                    buf[idx] = (number as u8) & Tag::MULTIBYTE_DATA_MASK;
                    if idx < buf.len() - 1 {
                        buf[idx] |= Tag::LAST_OCTET_MASK
                    }
                    number >>= 7;
                    if number == 0 {
                        break
                    }
                }
                res.extend_from_slice(&buf[idx..]);
            }
            Number::Large(ref number) => {
                res.push(first | Tag::SINGLEBYTE_DATA_MASK);
                let digits = number.to_radix_be(128);
                let last = digits.len() - 1;
                res.extend(digits.iter().enumerate().map(|(i, digit)| {
                    if i < last { digit | Tag::LAST_OCTET_MASK }
                    else { *digit }
                }));
            }
        }
        res
    }

    /// Returns the number of identifier octets for the tag.
    pub fn encoded_len(&self) -> usize {
        match self.number {
            Number::Small(number) if number < 0x1f => 1,
            Number::Small(number) => {
                1 + ((32 - number.leading_zeros()) as usize + 6) / 7
            }
            Number::Large(ref number) => {
                1 + (number.bits() as usize + 6) / 7
            }
        }
    }

    /// Appends the identifier octets to the end of `target`.
    pub fn append_encoded(&self, target: &mut Vec<u8>) {
        target.extend_from_slice(&self.to_encoded())
    }

    /// Returns the name of the universal type this tag represents.
    fn universal_name(&self) -> Option<&'static str> {
        if self.class != Class::Universal {
            return None
        }
        Some(match self.number_u32()? {
            1 => "BOOLEAN",
            2 => "INTEGER",
            3 => "BIT STRING",
            4 => "OCTET STRING",
            5 => "NULL",
            6 => "OBJECT IDENTIFIER",
            10 => "ENUMERATED",
            12 => "UTF8String",
            16 => "SEQUENCE",
            17 => "SET",
            19 => "PrintableString",
            22 => "IA5String",
            23 => "UTCTime",
            24 => "GeneralizedTime",
            _ => return None
        })
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if let Some(name) = self.universal_name() {
            return f.write_str(name)
        }
        match self.class {
            Class::Universal => write!(f, "[UNIVERSAL ")?,
            Class::Application => write!(f, "[APPLICATION ")?,
            Class::ContextSpecific => write!(f, "[")?,
            Class::Private => write!(f, "[PRIVATE ")?,
        }
        match self.number {
            Number::Small(number) => write!(f, "{}]", number),
            Number::Large(ref number) => write!(f, "{}]", number),
        }
    }
}

impl fmt::Debug for Tag {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f, "Tag({}, {})", self,
            if self.constructed { "constructed" } else { "primitive" }
        )
    }
}


//------------ Class ---------------------------------------------------------

/// The class of a tag.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Class {
    Universal,
    Application,
    ContextSpecific,
    Private,
}

impl Class {
    const fn from_u8(octet: u8) -> Self {
        match octet {
            0x00..=0x3F => Self::Universal,
            0x40..=0x7F => Self::Application,
            0x80..=0xBF => Self::ContextSpecific,
            0xC0..=0xFF => Self::Private
        }
    }

    const fn into_u8(self) -> u8 {
        match self {
            Self::Universal => 0x00,
            Self::Application => 0x40,
            Self::ContextSpecific => 0x80,
            Self::Private => 0xC0,
        }
    }
}


//============ Tests =========================================================
