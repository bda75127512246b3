//! Base-36 Luhn check characters for alphanumeric identifiers.
//!
//! Codes are drawn from `0-9A-Z` (case-insensitive). [`full_code`] appends a
//! check character to a prefix and [`validate_code`] verifies one, catching
//! any single-character substitution and most adjacent transpositions.
//!
//! ```
//! use luhn36::{full_code, validate_code};
//!
//! let code = full_code("TESTCODE");
//! assert_eq!(code, "TESTCODE6");
//! assert!(validate_code(&code));
//! assert!(!validate_code("TESTCDOE6"));
//! ```

pub mod alphabet;
pub mod checksum;
pub mod code;
pub mod error;
pub mod validate;

pub use alphabet::{ALPHABET, BASE, code_point};
pub use checksum::generate_check_character;
pub use code::{CheckedCode, full_code, parse_code};
pub use error::{CheckCodeError, Result};
pub use validate::{normalize_code, validate_code};
