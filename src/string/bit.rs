//! DER-encoded bit strings.
//!
//! This is a private module. Its public items are re-exported by the parent.

use bytes::Bytes;
use crate::decode::Error;


//------------ BitString -----------------------------------------------------

/// A bit string value.
///
/// Bit strings are a sequence of bits. Unlike octet strings, they do not
/// need to contain a multiple of eight bits.
///
/// There are two types of methods for accessing the data in a bit string.
/// Methods starting with `bit` operate on the individual bits while those
/// prefixed with `octet` access entire octets and ignore the fact that there
/// may be unused bits in the final octet.
///
/// # Encoding
///
/// The first octet of the content contains the number of unused bits in
/// the last octet and the following octets contain the bits with the first
/// bit in the most significant bit of the octet. The unused bits are at the
/// least significant end of the last octet and their value is ignored.
///
/// DER only allows the primitive form which is the only one supported here.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BitString {
    /// The number of unused bits in the last byte.
    unused: u8,

    /// The bytes of the bit string.
    bits: Bytes,
}

impl BitString {
    /// Creates a new bit string.
    ///
    /// Returns `None` if `unused` is greater than seven or if it isn’t zero
    /// for an empty `bits`.
    pub fn new(unused: u8, bits: Bytes) -> Option<Self> {
        if unused > 7 || (unused > 0 && bits.is_empty()) {
            None
        }
        else {
            Some(BitString { unused, bits })
        }
    }

    /// Parses the content octets of a bit string value.
    pub fn from_content(mut content: Bytes) -> Result<Self, Error> {
        if content.is_empty() {
            xerr!(return Err(Error::format("invalid bit string")))
        }
        let unused = content[0];
        let bits = content.split_off(1);
        match Self::new(unused, bits) {
            Some(res) => Ok(res),
            None => xerr!(Err(Error::format("invalid bit string")))
        }
    }

    /// Returns the value of the given bit.
    ///
    /// Bits past the end of the bit string are `false`.
    pub fn bit(&self, bit: usize) -> bool {
        if bit >= self.bit_len() {
            return false
        }
        self.bits[bit >> 3] & (0x80 >> (bit & 7)) != 0
    }

    /// Returns the number of bits in the bit string.
    pub fn bit_len(&self) -> usize {
        (self.bits.len() << 3) - usize::from(self.unused)
    }

    /// Returns all bits in order.
    pub fn to_bits(&self) -> Vec<bool> {
        (0..self.bit_len()).map(|idx| self.bit(idx)).collect()
    }

    /// Returns the number of unused bits in the last octet.
    pub fn unused(&self) -> u8 {
        self.unused
    }

    /// Returns the number of octets in the bit string.
    pub fn octet_len(&self) -> usize {
        self.bits.len()
    }

    /// Returns a slice of the octets in the bit string.
    pub fn octet_slice(&self) -> &[u8] {
        self.bits.as_ref()
    }

    /// Returns a bytes value of the octets of the bit string.
    pub fn octet_bytes(&self) -> Bytes {
        self.bits.clone()
    }
}


//============ Tests =========================================================
