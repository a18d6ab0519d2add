//! Byte classes used by the scanner.
//!
//! Source text is treated as a sequence of single bytes. Anything outside
//! ASCII belongs to none of these classes and ends up in an unknown token
//! (or passes through untouched inside strings and comments).

/// Checks if a byte is C whitespace: space, `\t`, `\n`, `\v`, `\f` or `\r`.
///
/// # Example
///
/// ```
/// use jksc_lex::chars::is_whitespace;
///
/// assert!(is_whitespace(b' '));
/// assert!(is_whitespace(0x0B));
/// assert!(!is_whitespace(b'_'));
/// assert!(!is_whitespace(0));
/// ```
#[inline]
pub fn is_whitespace(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | 0x0B | 0x0C | b'\r')
}

/// Checks if a byte can start an identifier: `[A-Za-z_]`.
#[inline]
pub fn is_ident_start(b: u8) -> bool {
    b.is_ascii_alphabetic() || b == b'_'
}

/// Checks if a byte can continue an identifier: `[A-Za-z0-9_]`.
#[inline]
pub fn is_ident_continue(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

/// Checks if a byte is a valid digit in the given base.
///
/// # Arguments
///
/// * `b` - The byte to check
/// * `base` - The numeric base (2, 8, 10, or 16)
///
/// # Example
///
/// ```
/// use jksc_lex::chars::is_digit_in_base;
///
/// assert!(is_digit_in_base(b'1', 2));
/// assert!(!is_digit_in_base(b'2', 2));
/// assert!(is_digit_in_base(b'F', 16));
/// assert!(!is_digit_in_base(b'8', 8));
/// ```
#[inline]
pub fn is_digit_in_base(b: u8, base: u32) -> bool {
    match base {
        2 => matches!(b, b'0' | b'1'),
        8 => matches!(b, b'0'..=b'7'),
        10 => b.is_ascii_digit(),
        16 => b.is_ascii_hexdigit(),
        _ => false,
    }
}

/// Returns the numeric value of a hexadecimal digit.
///
/// Returns `None` for bytes that are not hex digits.
#[inline]
pub fn hex_digit_value(b: u8) -> Option<u8> {
    match b {
        b'0'..=b'9' => Some(b - b'0'),
        b'a'..=b'f' => Some(b - b'a' + 10),
        b'A'..=b'F' => Some(b - b'A' + 10),
        _ => None,
    }
}

/// Maps a radix prefix letter (`b`, `o`, `x`, either case) to its base.
#[inline]
pub fn radix_from_prefix(b: u8) -> Option<u32> {
    match b.to_ascii_lowercase() {
        b'b' => Some(2),
        b'o' => Some(8),
        b'x' => Some(16),
        _ => None,
    }
}
