//! Decoding of INTEGER values.
//!
//! This is a private module. Its public items are re-exported by the parent.

use std::cmp::Ordering;
use bytes::Bytes;
use num_bigint::BigInt;
use crate::decode::Error;


//------------ Integer -------------------------------------------------------

/// A DER encoded integer.
///
/// As integers are variable length, this type is just a simple wrapper atop
/// the underlying `Bytes` value containing the raw content. The value can
/// be converted into a [`BigInt`] of arbitrary size or, if it is small
/// enough, into an `i64`.
///
/// # Encoding
///
/// An INTEGER is encoded as a primitive value with the content octets
/// providing a variable-length, big-endian, two‘s complement byte sequence
/// of that integer. Thus, the most-significant bit of the first octet
/// serves as the sign bit.
///
/// Strictly speaking, DER requires the shortest possible encoding, i.e.,
/// the first nine bits must never be all the same. Certificates in the
/// wild violate this rule often enough that we accept such values as long
/// as there is at least one content octet.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Integer(Bytes);

impl Integer {
    /// Creates an integer from the content octets of a value.
    ///
    /// Fails if there are no content octets at all.
    pub fn from_content(content: Bytes) -> Result<Self, Error> {
        if content.is_empty() {
            xerr!(return Err(Error::format("invalid integer")))
        }
        Ok(Integer(content))
    }

    /// Returns the content octets of the integer.
    pub fn as_slice(&self) -> &[u8] {
        self.0.as_ref()
    }

    /// Returns whether the integer is negative.
    pub fn is_negative(&self) -> bool {
        self.0[0] & 0x80 != 0
    }

    /// Returns how the integer compares to zero.
    pub fn signum(&self) -> Ordering {
        if self.is_negative() {
            Ordering::Less
        }
        else if self.0.iter().all(|&ch| ch == 0) {
            Ordering::Equal
        }
        else {
            Ordering::Greater
        }
    }

    /// Converts the integer into a big integer.
    ///
    /// The leading octet is sign-extended, so `ff` is -1 and `0080` is 128.
    pub fn to_bigint(&self) -> BigInt {
        BigInt::from_signed_bytes_be(self.0.as_ref())
    }

    /// Converts the integer into an `i64` if it fits.
    pub fn to_i64(&self) -> Option<i64> {
        // Leading sign octets don’t change the value, drop them first.
        let fill = if self.is_negative() { 0xFF } else { 0x00 };
        let mut slice = self.0.as_ref();
        while slice.len() > 1
            && slice[0] == fill
            && (slice[1] & 0x80) == (fill & 0x80)
        {
            slice = &slice[1..];
        }
        if slice.len() > 8 {
            return None
        }
        let mut res = [fill; 8];
        res[8 - slice.len()..].copy_from_slice(slice);
        Some(i64::from_be_bytes(res))
    }
}

impl From<Integer> for BigInt {
    fn from(src: Integer) -> Self {
        src.to_bigint()
    }
}


//============ Tests =========================================================

#[cfg(test)]
mod test {
    use super::*;

    fn int(hex: &str) -> Integer {
        Integer::from_content(hex::decode(hex).unwrap().into()).unwrap()
    }

    #[test]
    fn sign_extension() {
        for (hex, value) in [
            ("00", 0), ("7f", 127), ("0080", 128), ("0100", 256),
            ("ff", -1), ("80", -128), ("ff7f", -129), ("ff00", -256),
        ] {
            assert_eq!(int(hex).to_bigint(), BigInt::from(value), "{hex}");
            assert_eq!(int(hex).to_i64(), Some(value), "{hex}");
        }
    }

    #[test]
    fn non_minimal_is_accepted() {
        assert_eq!(int("000001").to_bigint(), BigInt::from(1));
        assert_eq!(int("ffff80").to_bigint(), BigInt::from(-128));
        assert_eq!(int("ffff80").to_i64(), Some(-128));
    }

    #[test]
    fn large_values() {
        let value = int("0100000000000000000000");
        assert_eq!(value.to_i64(), None);
        assert_eq!(
            value.to_bigint(),
            BigInt::from(1u8) << 80usize
        );
        assert_eq!(int("7fffffffffffffff").to_i64(), Some(i64::MAX));
        assert_eq!(int("8000000000000000").to_i64(), Some(i64::MIN));
        assert_eq!(int("ff7fffffffffffffff").to_i64(), None);
    }

    #[test]
    fn signum() {
        assert_eq!(int("00").signum(), Ordering::Equal);
        assert_eq!(int("0000").signum(), Ordering::Equal);
        assert_eq!(int("01").signum(), Ordering::Greater);
        assert_eq!(int("80").signum(), Ordering::Less);
    }

    #[test]
    fn empty() {
        assert_eq!(
            Integer::from_content(Bytes::new()),
            Err(Error::format("invalid integer"))
        );
    }
}
