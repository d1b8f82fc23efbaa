//! The data source for decoding.
//!
//! This is a private module. Its public items are re-exported by the parent.

use std::{fmt, ops};
use bytes::Bytes;
use super::error::Error;


//------------ Source --------------------------------------------------------

/// A cursor over a buffer of encoded data.
///
/// The source hands out the octets of the buffer front to back. Because
/// content is kept as [`Bytes`], taking a block out of the source never
/// copies the data.
///
/// Every source knows the position of its buffer within the outermost
/// buffer being decoded. This is only used to produce errors that point
/// to the right place.
#[derive(Clone, Debug)]
pub struct Source {
    /// The complete data of this source.
    data: Bytes,

    /// The index of the next octet in `data`.
    pos: usize,

    /// The position of `data[0]` within the outermost buffer.
    base: Pos,
}

impl Source {
    /// Creates a new source for the given data.
    pub fn new(data: impl Into<Bytes>) -> Self {
        Self::with_base(data.into(), Pos::default())
    }

    /// Creates a source whose first octet sits at `base`.
    ///
    /// Use this when decoding data that has been taken out of another
    /// source so that error positions stay meaningful.
    pub fn with_base(data: Bytes, base: Pos) -> Self {
        Source { data, pos: 0, base }
    }

    /// Returns the position of the next octet.
    pub fn pos(&self) -> Pos {
        self.base + self.pos.into()
    }

    /// Returns the number of octets left in the source.
    pub fn remaining(&self) -> usize {
        self.data.len() - self.pos
    }

    /// Returns whether all octets have been taken.
    pub fn is_exhausted(&self) -> bool {
        self.remaining() == 0
    }

    /// Takes a single octet from the source.
    ///
    /// If there aren’t any more octets available from the source, returns
    /// a decoding error.
    pub fn take_u8(&mut self) -> Result<u8, Error> {
        match self.data.get(self.pos).copied() {
            Some(value) => {
                self.pos += 1;
                Ok(value)
            }
            None => {
                xerr!(Err(Error::decode("unexpected end of data", self.pos())))
            }
        }
    }

    /// Takes a big-endian `u16` from the source.
    pub fn take_u16(&mut self) -> Result<u16, Error> {
        let block = self.take_bytes(2)?;
        Ok(u16::from_be_bytes([block[0], block[1]]))
    }

    /// Takes a big-endian `u64` from the source.
    pub fn take_u64(&mut self) -> Result<u64, Error> {
        let block = self.take_bytes(8)?;
        let mut res = [0u8; 8];
        res.copy_from_slice(&block);
        Ok(u64::from_be_bytes(res))
    }

    /// Takes the next `len` octets from the source.
    ///
    /// Returns a decoding error and leaves the source untouched if fewer
    /// octets are available.
    pub fn take_bytes(&mut self, len: usize) -> Result<Bytes, Error> {
        if len > self.remaining() {
            xerr!(return Err(Error::decode(
                "unexpected end of data", self.pos()
            )))
        }
        let res = self.data.slice(self.pos..self.pos + len);
        self.pos += len;
        Ok(res)
    }

    /// Takes a block preceded by its length as a big-endian `u16`.
    pub fn take_u16_block(&mut self) -> Result<Bytes, Error> {
        let len = self.take_u16()?;
        self.take_bytes(len.into())
    }

    /// Returns a decoding error at the current position.
    pub fn content_err(&self, msg: &'static str) -> Error {
        Error::decode(msg, self.pos())
    }
}


//------------ Pos -----------------------------------------------------------

/// The logical position within a source.
///
/// Values of this type can only be used for diagnostics. They can not be used
/// to determine how far a source has been advanced since it was created. This
/// is why we used a newtype.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Pos(usize);

impl From<usize> for Pos {
    fn from(pos: usize) -> Pos {
        Pos(pos)
    }
}

impl ops::Add for Pos {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Pos(self.0 + rhs.0)
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.0.fmt(f)
    }
}


//============ Tests =========================================================
