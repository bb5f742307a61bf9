//! CURP verification digit (18th character).

/// Character values: `0-9` are 0-9, `A-N` are 10-23, `Ñ` is 24, `O-Z` are 25-36.
const ALPHABET: &str = "0123456789ABCDEFGHIJKLMNÑOPQRSTUVWXYZ";

/// Length of the input the digit is computed over.
pub const CHECKED_LEN: usize = 17;

fn char_value(c: char) -> u32 {
    ALPHABET
        .chars()
        .position(|a| a == c)
        .map(|p| p as u32)
        .unwrap_or(0)
}

/// Verification digit over the first 17 CURP characters.
///
/// Each character value is weighted by `18 - index`; the digit is
/// `(10 - sum % 10) % 10`. Input of any other length yields `'0'`.
/// Characters outside the alphabet count as zero.
pub fn curp_check_digit(first17: &str) -> char {
    if first17.chars().count() != CHECKED_LEN {
        return '0';
    }

    let sum: u32 = first17
        .chars()
        .enumerate()
        .map(|(index, c)| char_value(c) * (18 - index as u32))
        .sum();

    let digit = (10 - sum % 10) % 10;
    char::from_digit(digit, 10).unwrap_or('0')
}
