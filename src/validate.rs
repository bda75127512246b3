use crate::alphabet::{self, BASE};
use crate::checksum::weighted_sum;

/// Uppercases (full Unicode mapping), then strips everything except ASCII
/// letters and digits.
///
/// Letters whose uppercase form is ASCII survive, so `ß` becomes `SS`.
/// This is the form both [`validate_code`] and [`crate::full_code`] compute over.
///
/// # Examples
///
/// ```
/// use luhn36::normalize_code;
///
/// assert_eq!(normalize_code("g-node-01x"), "GNODE01X");
/// assert_eq!(normalize_code(" AB 12 "), "AB12");
/// assert_eq!(normalize_code("straße"), "STRASSE");
/// ```
#[must_use]
pub fn normalize_code(code: &str) -> String {
    code.chars()
        .flat_map(char::to_uppercase)
        .filter(|&c| alphabet::is_symbol(c))
        .collect()
}

/// Returns true if `code` (payload followed by its check character) checks out.
///
/// Case and separators are ignored. Codes shorter than two characters after
/// normalization are never valid. This never fails: malformed input is just
/// invalid.
///
/// # Examples
///
/// ```
/// use luhn36::validate_code;
///
/// assert!(validate_code("ABCH"));
/// assert!(validate_code("g-node-01x"));
/// assert!(!validate_code("ABCX"));
/// assert!(!validate_code("A"));
/// ```
#[must_use]
pub fn validate_code(code: &str) -> bool {
    let cleaned = normalize_code(code);
    if cleaned.len() < 2 {
        return false;
    }

    let Ok(values) = cleaned
        .chars()
        .map(alphabet::code_point)
        .collect::<crate::Result<Vec<u8>>>()
    else {
        return false;
    };

    weighted_sum(&values, 1).is_multiple_of(BASE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alphabet::ALPHABET;
    use crate::checksum::generate_check_character;
    use proptest::prelude::*;

    fn with_check(prefix: &str) -> String {
        let check = generate_check_character(prefix).expect("alphabet-only prefix");
        format!("{prefix}{check}")
    }

    #[test]
    fn test_normalize_strips_and_uppercases() {
        assert_eq!(normalize_code("ab-12"), "AB12");
        assert_eq!(normalize_code("A_B.C D"), "ABCD");
        assert_eq!(normalize_code("\tpython01\n"), "PYTHON01");
    }

    #[test]
    fn test_normalize_drops_non_ascii() {
        assert_eq!(normalize_code("café"), "CAF");
        assert_eq!(normalize_code("éclair"), "CLAIR");
        assert_eq!(normalize_code("ＡＢ12"), "12");
    }

    #[test]
    fn test_normalize_uppercases_before_stripping() {
        assert_eq!(normalize_code("straße"), "STRASSE");
        assert_eq!(normalize_code("\u{fb01}x"), "FIX");
        assert_eq!(normalize_code("ı90"), "I90");
    }

    #[test]
    fn test_validate_letters_with_ascii_uppercase() {
        assert!(validate_code("straßeO"));
        assert!(validate_code("STRASSEO"));
        assert!(!validate_code("straße1"));
        assert!(validate_code("ı90Q"));
    }

    #[test]
    fn test_normalize_empty() {
        assert_eq!(normalize_code(""), "");
        assert_eq!(normalize_code("--- ..."), "");
    }

    #[test]
    fn test_validate_fixtures() {
        assert!(validate_code("PYTHON01M"));
        assert!(validate_code("TESTCODE6"));
        assert!(validate_code("ABCH"));
        assert!(validate_code("G-NODE-01X"));
        assert!(validate_code("12345C"));
    }

    #[test]
    fn test_validate_wrong_check_character() {
        assert!(!validate_code("PYTHON01N"));
        assert!(!validate_code("TESTCODE7"));
        assert!(!validate_code("ABCX"));
    }

    #[test]
    fn test_validate_too_short() {
        assert!(!validate_code(""));
        assert!(!validate_code("A"));
        assert!(!validate_code("0"));
        assert!(!validate_code("-A-"));
    }

    #[test]
    fn test_validate_two_characters() {
        assert!(validate_code("AG"));
        assert!(validate_code("00"));
        assert!(!validate_code("AH"));
    }

    #[test]
    fn test_validate_ignores_case_and_separators() {
        assert_eq!(validate_code("ab-12"), validate_code("AB12"));
        assert!(validate_code("python01m"));
        assert!(validate_code("PyThOn-01-M"));
        assert!(validate_code(" TEST CODE 6 "));
        assert!(validate_code("te.st_co/de:6"));
    }

    #[test]
    fn test_validate_garbage_is_false() {
        assert!(!validate_code("!!!"));
        assert!(!validate_code("é"));
        assert!(!validate_code("\u{0}\u{1}"));
    }

    #[test]
    fn test_single_substitution_detected_exhaustively() {
        let mut prefixes: Vec<String> = ALPHABET.iter().map(|&c| char::from(c).to_string()).collect();
        for &a in ALPHABET {
            for &b in ALPHABET {
                prefixes.push(format!("{}{}", char::from(a), char::from(b)));
            }
        }

        for prefix in &prefixes {
            let code: Vec<char> = with_check(prefix).chars().collect();
            assert!(validate_code(&code.iter().collect::<String>()));
            for position in 0..code.len() {
                for &replacement in ALPHABET {
                    let replacement = char::from(replacement);
                    if replacement == code[position] {
                        continue;
                    }
                    let mut altered = code.clone();
                    altered[position] = replacement;
                    let altered: String = altered.into_iter().collect();
                    assert!(!validate_code(&altered), "{altered} should not validate");
                }
            }
        }
    }

    #[test]
    fn test_adjacent_transposition_detected() {
        assert!(validate_code("ABCH"));
        assert!(!validate_code("BACH"));
        assert!(!validate_code("ACBH"));
        assert!(!validate_code("ABHC"));
    }

    proptest! {
        #[test]
        fn prop_generated_codes_validate(prefix in "[0-9A-Za-z]{1,24}") {
            let code = with_check(&prefix);
            prop_assert!(validate_code(&code));
        }

        #[test]
        fn prop_single_substitution_rejected(
            prefix in "[0-9A-Z]{1,16}",
            position in any::<prop::sample::Index>(),
            offset in 1u8..36,
        ) {
            let mut code: Vec<char> = with_check(&prefix).chars().collect();
            let i = position.index(code.len());
            let value = alphabet::code_point(code[i]).expect("alphabet symbol");
            code[i] = alphabet::symbol((value + offset) % 36).expect("in range");
            let altered: String = code.into_iter().collect();
            prop_assert!(!validate_code(&altered));
        }

        #[test]
        fn prop_validate_ignores_separators(prefix in "[0-9A-Z]{1,12}", sep in "[-_ ./]") {
            let code = with_check(&prefix);
            let spaced: String = code
                .chars()
                .flat_map(|c| [c.to_ascii_lowercase()].into_iter().chain(sep.chars()))
                .collect();
            prop_assert_eq!(validate_code(&spaced), validate_code(&code));
            prop_assert!(validate_code(&spaced));
        }

        #[test]
        fn prop_validate_is_total(input in ".*") {
            let _ = validate_code(&input);
        }
    }
}
