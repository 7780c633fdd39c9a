//! Dispatch from a validation kind to its checker
//!
//! Every [`ValidationKind`] variant maps to exactly one checker function.
//! The registry is an exhaustive `match`, so adding a variant without a
//! checker is a compile error and no "unknown kind" runtime path exists.

use crate::checksum;
use crate::formats;
use crate::kind::ValidationKind;

// ============================================================================
// Checker Registry
// ============================================================================

/// A checker: a pure, total function from input text to a verdict
pub type Checker = fn(&str) -> bool;

/// Look up the checker registered for a kind
///
/// Useful for testing a single checker in isolation or for building a
/// caller-side table; [`is_valid`] is the usual entry point.
pub fn checker_for(kind: ValidationKind) -> Checker {
    match kind {
        ValidationKind::Email => formats::is_valid_email,
        ValidationKind::Password => formats::is_valid_password,
        ValidationKind::CreditCard => checksum::is_valid_credit_card,
        ValidationKind::IdentityNumber => checksum::is_valid_identity_number,
        ValidationKind::Name => formats::is_valid_name,
        ValidationKind::Url => formats::is_valid_url,
        ValidationKind::PhoneNumber => formats::is_valid_phone_number,
        ValidationKind::PostalCode => formats::is_valid_postal_code,
        ValidationKind::Ipv4Address => formats::is_valid_ipv4_address,
        ValidationKind::Isbn => formats::is_valid_isbn,
    }
}

// ============================================================================
// Public API
// ============================================================================

/// Check whether `input` conforms to the format selected by `kind`
///
/// This is the single entry point of the engine. It runs exactly one
/// checker and returns its verdict unchanged. Non-conforming input yields
/// `false`; no input ever causes an error or panic, and matching runs in
/// time linear in the input length.
///
/// # Example
///
/// ```
/// use fieldcheck::{is_valid, ValidationKind};
///
/// assert!(is_valid("user@example.com", ValidationKind::Email));
/// assert!(!is_valid("not-an-email", ValidationKind::Email));
/// assert!(is_valid("4532015112830366", ValidationKind::CreditCard));
/// ```
pub fn is_valid(input: &str, kind: ValidationKind) -> bool {
    checker_for(kind)(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dispatch_routes_to_the_right_checker() {
        // A fixed-format phone number is only a phone number
        assert!(is_valid("555-123-4567", ValidationKind::PhoneNumber));
        assert!(!is_valid("555-123-4567", ValidationKind::Email));
        assert!(!is_valid("555-123-4567", ValidationKind::Ipv4Address));
    }

    #[test]
    fn test_registry_agrees_with_entry_point() {
        for kind in ValidationKind::ALL {
            let checker = checker_for(kind);
            for input in ["", "user@example.com", "4532015112830366", "abc12345"] {
                assert_eq!(checker(input), is_valid(input, kind), "{kind} {input:?}");
            }
        }
    }

    #[test]
    fn test_no_kind_accepts_empty_input() {
        for kind in ValidationKind::ALL {
            assert!(!is_valid("", kind), "{kind} accepted empty input");
        }
    }

    #[test]
    fn test_hostile_input_never_panics() {
        let long = "a".repeat(1 << 20);
        let control = "\u{0}\u{1}\u{7f}\n\r\t";
        for kind in ValidationKind::ALL {
            is_valid(&long, kind);
            is_valid(control, kind);
            is_valid("\u{fffd}", kind);
        }
    }
}
