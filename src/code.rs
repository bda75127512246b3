use crate::alphabet;
use crate::checksum::check_symbol;
use crate::error::{CheckCodeError, Result};
use crate::validate::normalize_code;
use std::fmt;

/// Append a check character to `prefix`.
///
/// The check character is computed over the normalized prefix (see
/// [`normalize_code`]), but the prefix is returned exactly as given, so
/// `"abc"` and `"ABC"` share a check character and keep their own casing.
/// An empty prefix yields just `"0"`.
///
/// # Examples
///
/// ```
/// use luhn36::full_code;
///
/// assert_eq!(full_code("PYTHON01"), "PYTHON01M");
/// assert_eq!(full_code("abc"), "abcH");
/// assert_eq!(full_code("G-NODE-01"), "G-NODE-01X");
/// ```
#[must_use]
pub fn full_code(prefix: &str) -> String {
    let values = payload_values(&normalize_code(prefix));
    format!("{prefix}{}", check_symbol(&values))
}

/// Code points of an already normalized payload.
fn payload_values(normalized: &str) -> Vec<u8> {
    normalized
        .chars()
        .filter_map(|c| alphabet::code_point(c).ok())
        .collect()
}

/// A code split into its normalized payload and trailing check character.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckedCode {
    payload: String,
    check: char,
}

impl CheckedCode {
    /// Normalized payload, without the check character.
    #[must_use]
    pub fn payload(&self) -> &str {
        &self.payload
    }

    #[must_use]
    pub const fn check_character(&self) -> char {
        self.check
    }

    /// Normalized code: payload followed by the check character.
    #[must_use]
    pub fn to_code_string(&self) -> String {
        format!("{}{}", self.payload, self.check)
    }
}

impl fmt::Display for CheckedCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_code_string())
    }
}

/// Parses a code, verifying its check character.
///
/// Normalization matches [`crate::validate_code`], and `parse_code(code)`
/// succeeds exactly when `validate_code(code)` is true.
///
/// # Examples
///
/// ```
/// use luhn36::{parse_code, CheckCodeError};
///
/// let code = parse_code("g-node-01x").unwrap();
/// assert_eq!(code.payload(), "GNODE01");
/// assert_eq!(code.check_character(), 'X');
///
/// assert_eq!(
///     parse_code("ABCX"),
///     Err(CheckCodeError::ChecksumMismatch {
///         code: "ABCX".to_string(),
///         expected: 'H',
///         found: 'X',
///     })
/// );
/// ```
///
/// # Errors
///
/// Returns `TooShort` if fewer than two alphanumeric characters remain after
/// normalization, and `ChecksumMismatch` if the last one is not the expected
/// check character.
pub fn parse_code(code: &str) -> Result<CheckedCode> {
    let mut payload = normalize_code(code);
    let Some(found) = payload.pop().filter(|_| !payload.is_empty()) else {
        return Err(CheckCodeError::TooShort {
            code: code.to_string(),
        });
    };

    let expected = check_symbol(&payload_values(&payload));
    if found != expected {
        return Err(CheckCodeError::ChecksumMismatch {
            code: code.to_string(),
            expected,
            found,
        });
    }

    Ok(CheckedCode {
        payload,
        check: found,
    })
}
