//! UTCTime and GeneralizedTime values.
//!
//! This is a private module. Its public items are re-exported by the parent.

use chrono::{DateTime, TimeZone, Utc};
use crate::decode::Error;


//------------ Time ----------------------------------------------------------

/// A point in time as carried by a UTCTime or GeneralizedTime value.
///
/// Both types encode the time as a string of ASCII digits followed by a
/// `Z` indicating that the time is in UTC. A UTCTime only has a two digit
/// year: values from 50 onwards are in the 20th century, everything below
/// in the 21st. A GeneralizedTime has all four digits.
///
/// Either form may carry fractional seconds as a dot followed by exactly
/// three digits. The fraction is checked but dropped, the resulting time
/// has whole seconds only.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Time(DateTime<Utc>);

/// # Decoding
///
impl Time {
    /// Parses the content octets of a UTCTime value.
    pub fn from_utc_time(content: &[u8]) -> Result<Self, Error> {
        let mut digits = Digits::new(content, 12)?;
        let year = match digits.take(2)? {
            year if year >= 50 => 1900 + year,
            year => 2000 + year,
        };
        digits.finish(year)
    }

    /// Parses the content octets of a GeneralizedTime value.
    pub fn from_generalized_time(content: &[u8]) -> Result<Self, Error> {
        let mut digits = Digits::new(content, 14)?;
        let year = digits.take(4)?;
        digits.finish(year)
    }
}

/// # Data Access
///
impl Time {
    /// Returns the time as a chrono value.
    pub fn to_datetime(self) -> DateTime<Utc> {
        self.0
    }

    /// Returns the number of seconds since the Unix epoch.
    pub fn timestamp(self) -> i64 {
        self.0.timestamp()
    }
}

impl From<Time> for DateTime<Utc> {
    fn from(time: Time) -> Self {
        time.0
    }
}


//------------ Digits --------------------------------------------------------

/// The digits of a time value with the trailing bits already checked.
struct Digits<'a>(&'a [u8]);

impl<'a> Digits<'a> {
    /// Checks the framing of a time value.
    ///
    /// There need to be exactly `len` digits up front, optionally followed
    /// by three digits of fractional seconds, and a final `Z`.
    fn new(content: &'a [u8], len: usize) -> Result<Self, Error> {
        let body = match content.strip_suffix(b"Z") {
            Some(body) => body,
            None => return Err(invalid())
        };
        if body.len() == len {
            return Ok(Digits(body))
        }
        match body.get(len..) {
            Some([b'.', fraction @ ..])
                if fraction.len() == 3
                    && fraction.iter().all(u8::is_ascii_digit)
            => {
                Ok(Digits(&body[..len]))
            }
            _ => Err(invalid())
        }
    }

    /// Takes a decimal number of `len` digits off the front.
    fn take(&mut self, len: usize) -> Result<u32, Error> {
        if self.0.len() < len {
            return Err(invalid())
        }
        let (head, tail) = self.0.split_at(len);
        let mut res = 0;
        for &ch in head {
            if !ch.is_ascii_digit() {
                return Err(invalid())
            }
            res = res * 10 + u32::from(ch - b'0');
        }
        self.0 = tail;
        Ok(res)
    }

    /// Parses month to second and assembles the final time.
    fn finish(mut self, year: u32) -> Result<Time, Error> {
        let month = self.take(2)?;
        let day = self.take(2)?;
        let hour = self.take(2)?;
        let minute = self.take(2)?;
        let second = self.take(2)?;
        // year has at most four digits, so the cast is fine.
        Utc.with_ymd_and_hms(year as i32, month, day, hour, minute, second)
            .single()
            .map(Time)
            .ok_or_else(invalid)
    }
}

fn invalid() -> Error {
    xerr!(Error::format("invalid time"))
}


//============ Tests =========================================================
