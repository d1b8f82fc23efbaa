//! String types.
//!
//! There are two kinds of strings here. [`BitString`]s contain a sequence
//! of bits that does not need to be of a length divisible by eight. The
//! character strings used in certificates are converted into Rust strings
//! directly by the functions in this module.

//--- Re-exports

pub use self::bit::BitString;
pub use self::text::{ascii_to_string, utf8_to_string};

//--- Private modules

mod bit;
mod text;
