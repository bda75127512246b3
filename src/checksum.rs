use crate::alphabet::{self, ALPHABET, BASE};
use crate::error::Result;

/// Collapse a product into base 36 exactly once: `product / 36 + product % 36`.
///
/// The result is never folded a second time.
pub(crate) const fn fold(product: u32) -> u32 {
    product / BASE + product % BASE
}

/// Sum of folded, weighted code points, walking right to left.
///
/// The rightmost value is weighted by `first_factor`; weights then alternate
/// between 2 and 1.
pub(crate) fn weighted_sum(values: &[u8], first_factor: u32) -> u32 {
    let mut factor = first_factor;
    let mut sum = 0;
    for &value in values.iter().rev() {
        sum += fold(u32::from(value) * factor);
        factor = if factor == 2 { 1 } else { 2 };
    }
    sum
}

/// Check character for a payload that has already been mapped to code points.
pub(crate) fn check_symbol(values: &[u8]) -> char {
    let remainder = weighted_sum(values, 2) % BASE;
    let check = (BASE - remainder) % BASE;
    char::from(ALPHABET[check as usize])
}

/// Compute the check character for `input`.
///
/// Every character must be in the alphabet (either case). An empty input
/// yields `'0'`.
///
/// # Examples
///
/// ```
/// use luhn36::generate_check_character;
///
/// assert_eq!(generate_check_character("ABC"), Ok('H'));
/// assert_eq!(generate_check_character("abc"), Ok('H'));
/// assert_eq!(generate_check_character(""), Ok('0'));
/// assert!(generate_check_character("A!B").is_err());
/// ```
///
/// # Errors
///
/// Returns `InvalidCharacter` for the first character that has no code point.
pub fn generate_check_character(input: &str) -> Result<char> {
    let values = input
        .chars()
        .map(alphabet::code_point)
        .collect::<Result<Vec<u8>>>()?;
    Ok(check_symbol(&values))
}
