//! CNPJ (Brazilian company tax id) check-digit validation and masking.
//!
//! A CNPJ has 12 base digits and two mod-11 check digits. Punctuation is
//! ignored on input.

use once_cell::sync::Lazy;
use regex::Regex;

const CNPJ_LEN: usize = 14;
const FIRST_CHECK_WEIGHTS: [u32; 12] = [5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];
const SECOND_CHECK_WEIGHTS: [u32; 13] = [6, 5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];

static CNPJ_MASK_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\d{2})(\d{3})(\d{3})(\d{4})(\d{2})$").expect("valid cnpj mask regex")
});

/// Returns whether `value` is a CNPJ with both check digits correct.
///
/// Rejects anything that is not 14 digits after stripping punctuation, and
/// sequences of one repeated digit.
pub fn is_valid_cnpj(value: &str) -> bool {
    let digits = digits_of(value);
    if digits.len() != CNPJ_LEN {
        return false;
    }
    if digits.iter().all(|&digit| digit == digits[0]) {
        return false;
    }

    check_digit(&digits[..12], &FIRST_CHECK_WEIGHTS) == digits[12]
        && check_digit(&digits[..13], &SECOND_CHECK_WEIGHTS) == digits[13]
}

/// Masks 14 digits as `NN.NNN.NNN/NNNN-NN`.
///
/// Input that does not reduce to exactly 14 digits is returned as its digits.
pub fn format_cnpj(value: &str) -> String {
    let bare: String = value.chars().filter(char::is_ascii_digit).collect();
    CNPJ_MASK_RE.replace(&bare, "$1.$2.$3/$4-$5").into_owned()
}

fn digits_of(value: &str) -> Vec<u32> {
    value.chars().filter_map(|c| c.to_digit(10)).collect()
}

fn check_digit(digits: &[u32], weights: &[u32]) -> u32 {
    let sum: u32 = digits
        .iter()
        .zip(weights)
        .map(|(digit, weight)| digit * weight)
        .sum();
    match sum % 11 {
        remainder if remainder < 2 => 0,
        remainder => 11 - remainder,
    }
}
