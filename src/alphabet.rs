use crate::error::{CheckCodeError, Result};

/// The 36 check-code symbols, in code point order.
pub const ALPHABET: &[u8; 36] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Number of symbols in [`ALPHABET`].
pub const BASE: u32 = 36;

/// Map a character to its position in [`ALPHABET`], ignoring ASCII case.
///
/// # Examples
///
/// ```
/// use luhn36::alphabet::code_point;
///
/// assert_eq!(code_point('7'), Ok(7));
/// assert_eq!(code_point('a'), Ok(10));
/// assert_eq!(code_point('Z'), Ok(35));
/// assert!(code_point('-').is_err());
/// ```
///
/// # Errors
///
/// Returns `InvalidCharacter` for anything outside `0-9`, `a-z`, `A-Z`.
pub fn code_point(c: char) -> Result<u8> {
    let upper = c.to_ascii_uppercase();
    ALPHABET
        .iter()
        .position(|&symbol| char::from(symbol) == upper)
        .and_then(|index| u8::try_from(index).ok())
        .ok_or(CheckCodeError::InvalidCharacter { character: c })
}

/// Symbol for a code point, or `None` when `value >= 36`.
#[must_use]
pub fn symbol(value: u8) -> Option<char> {
    ALPHABET.get(usize::from(value)).copied().map(char::from)
}

/// Returns true if `c` maps to a code point.
#[must_use]
pub const fn is_symbol(c: char) -> bool {
    c.is_ascii_alphanumeric()
}
