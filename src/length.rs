//! The length octets.
//!
//! This is a private module. The [`Length`] defined herein is not
//! publicly exposed.

use smallvec::SmallVec;
use crate::decode::{Error, Pos, Source};


/// The largest number of octets the length octets can take up.
const MAX_LEN: usize = std::mem::size_of::<usize>() + 1;


//------------ Length -------------------------------------------------------

/// The length octets of an encoded value.
///
/// # Encoding
///
/// The length can be encoded in one of two basic ways. Which one is used is
/// determined by the most significant bit of the first octet. If it is not
/// set, the length octets is one octet long and the remaining bits of this
/// first octet provide the length. Thus, if the first octet is less than
/// 128, it provides the length already.
///
/// If the most significant bit is set, the remaining bits of the first
/// octet specify the number of octets that follow to encode the actual
/// length. If they specify that there are zero more octets, i.e., the
/// value of the first octet is 128, the length is indefinite, which we
/// don’t support. Otherwise, those following octets give the big-endian
/// encoding of the length of the content octets.
///
/// Under DER, the length must be encoded in the minimum number of octets.
/// We enforce this when decoding and always produce it when encoding.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Length(usize);

impl Length {
    /// Creates a new length.
    pub fn new(len: usize) -> Self {
        Length(len)
    }

    /// Returns the length as a `usize`.
    pub fn to_usize(self) -> usize {
        self.0
    }

    /// Takes the length octets from the beginning of a source.
    ///
    /// Besides checking the encoding, this also checks that there are at
    /// least as many octets left in the source as the length announces.
    pub fn take_from(source: &mut Source) -> Result<Self, Error> {
        let start = source.pos();
        let count = match source.take_u8()? {
            // Bit 7 clear: single.
            n if (n & 0x80) == 0 => {
                return Self::check_available(source, n.into(), start)
            }

            0x80 => {
                xerr!(return Err(Error::decode(
                    "indefinite length not supported", start
                )))
            }

            0xFF => {
                xerr!(return Err(Error::decode(
                    "illegal length octets", start
                )))
            }

            // Anything else: clear left bit, number of octets.
            n => usize::from(n & 0x7F)
        };

        if count > MAX_LEN - 1 {
            xerr!(return Err(Error::decode("excessive length", start)))
        }
        let octets = source.take_bytes(count)?;

        // The first octet can’t be zero and it can’t be less than 0x80 if
        // it is the only octet. In both cases, there is a shorter encoding.
        if octets[0] == 0 || (count == 1 && octets[0] < 0x80) {
            xerr!(return Err(Error::decode("non-minimal length", start)))
        }

        let mut res = [0u8; MAX_LEN - 1];
        let idx = res.len() - count;
        res[idx..].copy_from_slice(&octets);
        Self::check_available(source, usize::from_be_bytes(res), start)
    }

    fn check_available(
        source: &Source, len: usize, start: Pos
    ) -> Result<Self, Error> {
        if len > source.remaining() {
            xerr!(Err(Error::decode("length exceeds available data", start)))
        }
        else {
            Ok(Length(len))
        }
    }

    /// Returns the length of the encoded representation of the value.
    pub fn encoded_len(self) -> usize {
        if self.0 > 0x7F {
            MAX_LEN - self.encoded_start_idx()
        }
        else {
            1
        }
    }

    /// Returns the length octets in their minimal form.
    pub fn to_encoded(self) -> SmallVec<[u8; MAX_LEN]> {
        let mut res = SmallVec::new();
        if self.0 > 0x7F {
            let idx = self.encoded_start_idx();

            // The number of octets will never be greater than 126, so the
            // cast is fine.
            res.push(((MAX_LEN - 1 - idx) | 0x80) as u8);
            res.extend_from_slice(&self.0.to_be_bytes()[idx..])
        }
        else {
            res.push(self.0 as u8)
        }
        res
    }

    /// Appends the encoded length to the end of `target`.
    pub fn append_encoded(self, target: &mut Vec<u8>) {
        target.extend_from_slice(&self.to_encoded())
    }

    /// Returns the index of the first non-zero octet of the length.
    fn encoded_start_idx(self) -> usize {
        (self.0.leading_zeros() / 8) as usize
    }
}

impl From<usize> for Length {
    fn from(len: usize) -> Self {
        Length(len)
    }
}


//============ Tests =========================================================
