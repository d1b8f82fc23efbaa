//! Character strings.
//!
//! This is a private module. Its public items are re-exported by the parent.

/// Converts the content of an ASCII string into a Rust string.
///
/// This is used for IA5String and the context-specific tagged strings of a
/// general name. Each octet is taken as the character with the same value,
/// so octets beyond the ASCII range end up as Latin-1 characters instead of
/// failing the conversion.
pub fn ascii_to_string(content: &[u8]) -> String {
    content.iter().map(|&ch| char::from(ch)).collect()
}

/// Converts the content of a UTF8String into a Rust string.
///
/// Invalid sequences are replaced by U+FFFD.
pub fn utf8_to_string(content: &[u8]) -> String {
    String::from_utf8_lossy(content).into_owned()
}


//============ Tests =========================================================
