//! Macros for last-resort debugging.
//!
//! Errors produced by the decoder only tell you what went wrong and where
//! in the buffer, not where in the code. To help with that, this module
//! contains a macro `xerr!()` that, when the `extra-debug` feature is
//! enabled, logs the source location at `trace` level via the `log` crate
//! before resolving into whatever the expression it encloses resolves to.
//! Use it whenever you initially produce an error, i.e.:
//!
//! ```rust,ignore
//! if foo {
//!     xerr!(Err(Error::format("invalid time")))
//! }
//! ```
//!
//! or, with an early return:
//!
//! ```rust,ignore
//! if foo {
//!     xerr!(return Err(Error::format("invalid time")))
//! }
//! ```

#[cfg(feature = "extra-debug")]
#[macro_export]
macro_rules! xerr {
    ($test:expr) => {{
        log::trace!("error raised at {}:{}", file!(), line!());
        $test
    }}
}

#[cfg(not(feature = "extra-debug"))]
#[macro_export]
macro_rules! xerr {
    ($test:expr) => { $test };
}
