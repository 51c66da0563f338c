use thiserror::Error;

/// Verhoeff multiplication table: the dihedral group D5.
/// `D[a][b]` composes two group elements; the table is non-commutative,
/// which is what lets the checksum catch adjacent transpositions.
const D: [[u8; 10]; 10] = [
    [0, 1, 2, 3, 4, 5, 6, 7, 8, 9],
    [1, 2, 3, 4, 0, 6, 7, 8, 9, 5],
    [2, 3, 4, 0, 1, 7, 8, 9, 5, 6],
    [3, 4, 0, 1, 2, 8, 9, 5, 6, 7],
    [4, 0, 1, 2, 3, 9, 5, 6, 7, 8],
    [5, 9, 8, 7, 6, 0, 4, 3, 2, 1],
    [6, 5, 9, 8, 7, 1, 0, 4, 3, 2],
    [7, 6, 5, 9, 8, 2, 1, 0, 4, 3],
    [8, 7, 6, 5, 9, 3, 2, 1, 0, 4],
    [9, 8, 7, 6, 5, 4, 3, 2, 1, 0],
];

/// Position permutation table, applied cyclically (row = position mod 8).
const P: [[u8; 10]; 8] = [
    [0, 1, 2, 3, 4, 5, 6, 7, 8, 9],
    [1, 5, 7, 6, 2, 8, 3, 0, 9, 4],
    [5, 8, 0, 3, 7, 9, 6, 1, 4, 2],
    [8, 9, 1, 6, 0, 4, 3, 5, 2, 7],
    [9, 4, 5, 3, 1, 2, 6, 8, 7, 0],
    [4, 2, 8, 6, 5, 7, 3, 9, 0, 1],
    [2, 7, 9, 3, 8, 0, 6, 4, 1, 5],
    [7, 0, 4, 6, 9, 1, 3, 2, 5, 8],
];

/// Inverse of each element of D5.
const INV: [u8; 10] = [0, 4, 3, 2, 1, 5, 6, 7, 8, 9];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChecksumError {
    #[error("InvalidDigitError: cannot compute a check digit over an empty field")]
    Empty,
    #[error("InvalidDigitError: '{ch}' at position {position} is not a decimal digit")]
    InvalidDigit { ch: char, position: usize },
}

/// Compute the Verhoeff check digit for a string of decimal digits.
///
/// Digits are consumed from the least significant end, with the permutation
/// row chosen by `i mod 8` where `i` starts at 0 on the last character.
pub fn verhoeff_check_digit(digits: &str) -> Result<u8, ChecksumError> {
    if digits.is_empty() {
        return Err(ChecksumError::Empty);
    }
    let values = parse_digits(digits)?;
    let c = values
        .iter()
        .rev()
        .enumerate()
        .fold(0u8, |c, (i, &d)| D[c as usize][P[i % 8][d as usize] as usize]);
    Ok(INV[c as usize])
}

/// Compare `check_digit` against the digit computed for `field`.
///
/// Never fails: a field that is empty or not purely numeric simply does not verify.
pub fn verify_field_with_verhoeff(field: &str, check_digit: &str) -> bool {
    match verhoeff_check_digit(field) {
        Ok(expected) => expected.to_string() == check_digit,
        Err(err) => {
            tracing::debug!(field, %err, "verhoeff verification rejected field");
            false
        }
    }
}

/// Validate a digit string whose final character is its own check digit.
pub fn verhoeff_validate(digits_with_check: &str) -> bool {
    let mut chars = digits_with_check.chars();
    match chars.next_back() {
        Some(check) => verify_field_with_verhoeff(chars.as_str(), &check.to_string()),
        None => false,
    }
}

fn parse_digits(digits: &str) -> Result<Vec<u8>, ChecksumError> {
    digits
        .chars()
        .enumerate()
        .map(|(position, ch)| {
            ch.to_digit(10)
                .map(|d| d as u8)
                .ok_or(ChecksumError::InvalidDigit { ch, position })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_check_digits() {
        assert_eq!(verhoeff_check_digit("236").unwrap(), 0);
        assert_eq!(verhoeff_check_digit("12345").unwrap(), 5);
        assert_eq!(verhoeff_check_digit("5").unwrap(), 5);
        assert_eq!(verhoeff_check_digit("123456789").unwrap(), 8);
        assert_eq!(verhoeff_check_digit("900101").unwrap(), 5);
        assert_eq!(verhoeff_check_digit("250501").unwrap(), 8);
    }

    #[test]
    fn all_zero_field_follows_tables() {
        assert_eq!(verhoeff_check_digit("000000").unwrap(), 8);
        assert_eq!(verhoeff_check_digit("000000000").unwrap(), 1);
        assert_eq!(verhoeff_check_digit("00000000000000").unwrap(), 7);
    }

    #[test]
    fn output_is_single_digit_for_long_input() {
        let d = verhoeff_check_digit("12345678901234567890").unwrap();
        assert!(d <= 9);
        assert_eq!(d, verhoeff_check_digit("12345678901234567890").unwrap());
    }

    #[test]
    fn rejects_non_numeric() {
        assert_eq!(
            verhoeff_check_digit("12A4"),
            Err(ChecksumError::InvalidDigit { ch: 'A', position: 2 })
        );
        assert!(matches!(
            verhoeff_check_digit("1234567890<<<<"),
            Err(ChecksumError::InvalidDigit { ch: '<', position: 10 })
        ));
    }

    #[test]
    fn rejects_empty() {
        assert_eq!(verhoeff_check_digit(""), Err(ChecksumError::Empty));
    }

    #[test]
    fn verify_matches_computed_digit() {
        assert!(verify_field_with_verhoeff("123456789", "8"));
        assert!(!verify_field_with_verhoeff("123456789", "9"));
        assert!(!verify_field_with_verhoeff("123456789", "08"));
    }

    #[test]
    fn verify_never_fails_on_bad_input() {
        assert!(!verify_field_with_verhoeff("AB1234567", "0"));
        assert!(!verify_field_with_verhoeff("", "0"));
    }

    #[test]
    fn detects_adjacent_transposition() {
        let d = verhoeff_check_digit("12345").unwrap().to_string();
        assert!(!verify_field_with_verhoeff("12354", &d));
    }

    #[test]
    fn validate_trailing_check_digit() {
        assert!(verhoeff_validate("2360"));
        assert!(verhoeff_validate("1234567898"));
        assert!(!verhoeff_validate("1234567899"));
        assert!(!verhoeff_validate(""));
        assert!(!verhoeff_validate("7"));
    }
}
