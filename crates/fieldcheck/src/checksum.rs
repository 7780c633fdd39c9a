//! Checksum-carrying identifier checkers
//!
//! Credit card numbers and 11-digit national identity numbers are not pure
//! shape matches: both strip formatting first and then verify an arithmetic
//! check digit over the remaining digits.

// ============================================================================
// Digit extraction
// ============================================================================

/// Strip every non-digit character and return the digit values
fn extract_digits(value: &str) -> Vec<u8> {
    value
        .chars()
        .filter_map(|c| c.to_digit(10))
        .map(|d| d as u8)
        .collect()
}

// ============================================================================
// Credit Card (Luhn)
// ============================================================================

/// Mod-10 Luhn sum: from the rightmost digit, double every digit at an odd
/// 0-based position and subtract 9 from any doubled value over 9
fn luhn_sum(digits: &[u8]) -> u32 {
    digits
        .iter()
        .rev()
        .enumerate()
        .map(|(i, &d)| {
            let mut d = u32::from(d);
            if i % 2 == 1 {
                d *= 2;
                if d > 9 {
                    d -= 9;
                }
            }
            d
        })
        .sum()
}

/// Check a payment card number
///
/// Non-digit characters (spaces, hyphens) are stripped first. The remaining
/// digits must number 13 to 19 and satisfy the Luhn mod-10 checksum.
///
/// # Example
/// ```
/// use fieldcheck::checksum::is_valid_credit_card;
///
/// assert!(is_valid_credit_card("4532015112830366"));
/// assert!(is_valid_credit_card("4532 0151 1283 0366"));
/// assert!(!is_valid_credit_card("4532015112830367")); // checksum off by one
/// ```
pub fn is_valid_credit_card(value: &str) -> bool {
    let digits = extract_digits(value);
    (13..=19).contains(&digits.len()) && luhn_sum(&digits) % 10 == 0
}

// ============================================================================
// Identity Number (11-digit national ID)
// ============================================================================

/// Check an 11-digit national identity number
///
/// Non-digit characters are stripped first. Exactly 11 digits must remain,
/// the first must be non-zero, and the last must equal the check digit
/// computed over the first ten: digits at even 0-based positions weigh 1,
/// digits at odd positions weigh 3, and the check digit is
/// `(10 - sum % 10) % 10` (a sum divisible by 10 maps to check digit 0,
/// not 10).
///
/// # Example
/// ```
/// use fieldcheck::checksum::is_valid_identity_number;
///
/// assert!(is_valid_identity_number("10000000146"));
/// assert!(!is_valid_identity_number("10000000147"));
/// ```
pub fn is_valid_identity_number(value: &str) -> bool {
    let digits = extract_digits(value);
    if digits.len() != 11 || digits[0] == 0 {
        return false;
    }

    let sum: u32 = digits[..10]
        .iter()
        .enumerate()
        .map(|(i, &d)| u32::from(d) * if i % 2 == 0 { 1 } else { 3 })
        .sum();
    let check_digit = (10 - sum % 10) % 10;

    u32::from(digits[10]) == check_digit
}
