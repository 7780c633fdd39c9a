//! Pattern-driven checkers for common string formats
//!
//! This module holds the pre-compiled regex patterns and the checkers that
//! are pure shape matches: email, password, name, phone number, postal code,
//! IPv4 address, ISBN, and structural URL. The checksum-carrying formats
//! (credit card, identity number) live in [`crate::checksum`].
//!
//! All patterns are anchored and compiled once via `once_cell`. The `regex`
//! engine matches in linear time, so adversarial inputs cannot trigger
//! catastrophic backtracking and no input-length cap is needed.

use once_cell::sync::Lazy;
use regex::Regex;
use url::Url;

// ============================================================================
// Pre-compiled Regex Patterns
// ============================================================================

/// Email pattern: local part, `@`, domain, dot, 2+ letter TLD
static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$").unwrap()
});

/// Password shape: 8+ characters, ASCII letters and digits only
/// (the letter-and-digit requirement is checked separately)
static PASSWORD_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Za-z0-9]{8,}$").unwrap());

/// Name pattern: a letter run, then optional groups of one separator
/// (apostrophe, comma, dot, space, hyphen), an optional letter or space,
/// and more letters. Digits never match.
static NAME_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z]+(?:[' ,.-][A-Za-z ]?[A-Za-z]*)*$").unwrap()
});

/// Phone pattern: fixed `NNN-NNN-NNNN`, no other formats recognized
static PHONE_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{3}-\d{3}-\d{4}$").unwrap());

/// Canadian-style postal code: `A1A 1A1`, separator optional (space or hyphen)
static POSTAL_CODE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z]\d[A-Za-z][ -]?\d[A-Za-z]\d$").unwrap());

/// Dotted-quad shape. Octet ranges are NOT checked: `999.999.999.999`
/// matches. This leniency is deliberate; tightening it would break callers
/// that rely on the shape-only behavior.
static IPV4_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{1,3}\.\d{1,3}\.\d{1,3}\.\d{1,3}$").unwrap());

/// ISBN-10 (nine digits plus a digit or `X`) or ISBN-13 (thirteen digits).
/// Shape only; check digits are not verified.
static ISBN_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(?:\d{9}[\dX]|\d{13})$").unwrap());

// ============================================================================
// Format Checkers
// ============================================================================

/// Check email format
///
/// # Example
/// ```
/// use fieldcheck::formats::is_valid_email;
///
/// assert!(is_valid_email("user@example.com"));
/// assert!(!is_valid_email("not-an-email"));
/// ```
pub fn is_valid_email(value: &str) -> bool {
    EMAIL_REGEX.is_match(value)
}

/// Check password strength: at least 8 characters, letters and digits only,
/// with at least one letter and at least one digit
///
/// # Example
/// ```
/// use fieldcheck::formats::is_valid_password;
///
/// assert!(is_valid_password("abc12345"));
/// assert!(!is_valid_password("abcdefgh")); // no digit
/// assert!(!is_valid_password("abc123")); // too short
/// ```
pub fn is_valid_password(value: &str) -> bool {
    PASSWORD_REGEX.is_match(value)
        && value.chars().any(|c| c.is_ascii_alphabetic())
        && value.chars().any(|c| c.is_ascii_digit())
}

/// Check personal-name format: letter sequences optionally joined by a
/// single separator (`'`, `,`, `.`, space, `-`)
///
/// # Example
/// ```
/// use fieldcheck::formats::is_valid_name;
///
/// assert!(is_valid_name("Mary Jane"));
/// assert!(is_valid_name("O'Brien"));
/// assert!(!is_valid_name("R2D2"));
/// ```
pub fn is_valid_name(value: &str) -> bool {
    NAME_REGEX.is_match(value)
}

/// Check URL structure: parses as a URL, scheme is http/https/ftp
/// (case-insensitively), and a non-empty host is present
///
/// No reachability check is performed.
///
/// # Example
/// ```
/// use fieldcheck::formats::is_valid_url;
///
/// assert!(is_valid_url("https://example.com/path"));
/// assert!(is_valid_url("ftp://files.example.com"));
/// assert!(!is_valid_url("mailto:user@example.com"));
/// ```
pub fn is_valid_url(value: &str) -> bool {
    match Url::parse(value) {
        // Url::parse lowercases the scheme, so this comparison is
        // case-insensitive for the caller's input.
        Ok(url) => {
            matches!(url.scheme(), "http" | "https" | "ftp")
                && url.host_str().is_some_and(|host| !host.is_empty())
        }
        Err(_) => false,
    }
}

/// Check phone-number format: exactly `NNN-NNN-NNNN`
///
/// This is a narrow single-format matcher, not a general phone validator.
///
/// # Example
/// ```
/// use fieldcheck::formats::is_valid_phone_number;
///
/// assert!(is_valid_phone_number("555-123-4567"));
/// assert!(!is_valid_phone_number("(555) 123-4567"));
/// ```
pub fn is_valid_phone_number(value: &str) -> bool {
    PHONE_REGEX.is_match(value)
}

/// Check Canadian-style postal-code format
///
/// # Example
/// ```
/// use fieldcheck::formats::is_valid_postal_code;
///
/// assert!(is_valid_postal_code("K1A 0B1"));
/// assert!(is_valid_postal_code("K1A0B1"));
/// assert!(!is_valid_postal_code("12345"));
/// ```
pub fn is_valid_postal_code(value: &str) -> bool {
    POSTAL_CODE_REGEX.is_match(value)
}

/// Check dotted-quad IPv4 shape
///
/// Purely syntactic: each group is 1-3 digits with no upper-bound check,
/// so `"999.999.999.999"` passes.
///
/// # Example
/// ```
/// use fieldcheck::formats::is_valid_ipv4_address;
///
/// assert!(is_valid_ipv4_address("192.168.1.1"));
/// assert!(is_valid_ipv4_address("999.999.999.999"));
/// assert!(!is_valid_ipv4_address("192.168.1"));
/// ```
pub fn is_valid_ipv4_address(value: &str) -> bool {
    IPV4_REGEX.is_match(value)
}

/// Check ISBN-10 or ISBN-13 shape (no check-digit verification)
///
/// # Example
/// ```
/// use fieldcheck::formats::is_valid_isbn;
///
/// assert!(is_valid_isbn("123456789X"));
/// assert!(is_valid_isbn("1234567890123"));
/// assert!(!is_valid_isbn("12345"));
/// ```
pub fn is_valid_isbn(value: &str) -> bool {
    ISBN_REGEX.is_match(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_validation() {
        // Valid emails
        assert!(is_valid_email("user@example.com"));
        assert!(is_valid_email("test.user+tag@subdomain.example.co.uk"));
        assert!(is_valid_email("first_last%x@host-name.org"));

        // Invalid emails
        assert!(!is_valid_email("not-an-email"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("user@"));
        assert!(!is_valid_email("user@example"));
        assert!(!is_valid_email("user@example.c"));
        assert!(!is_valid_email(""));
    }

    #[test]
    fn test_password_validation() {
        // Valid passwords
        assert!(is_valid_password("abc12345"));
        assert!(is_valid_password("1234567a"));
        assert!(is_valid_password("A1B2C3D4E5"));

        // Invalid passwords
        assert!(!is_valid_password("abcdefgh")); // no digit
        assert!(!is_valid_password("12345678")); // no letter
        assert!(!is_valid_password("abc123")); // too short
        assert!(!is_valid_password("abc 1234")); // space not allowed
        assert!(!is_valid_password("abc-1234")); // punctuation not allowed
        assert!(!is_valid_password(""));
    }

    #[test]
    fn test_name_validation() {
        // Valid names
        assert!(is_valid_name("Alice"));
        assert!(is_valid_name("Mary Jane"));
        assert!(is_valid_name("O'Brien"));
        assert!(is_valid_name("Smith, John"));
        assert!(is_valid_name("Jean-Luc"));
        assert!(is_valid_name("J. R. R. Tolkien"));

        // Invalid names
        assert!(!is_valid_name("R2D2"));
        assert!(!is_valid_name("4lice"));
        assert!(!is_valid_name(" Alice"));
        assert!(!is_valid_name(""));
    }

    #[test]
    fn test_url_validation() {
        // Valid URLs
        assert!(is_valid_url("http://example.com"));
        assert!(is_valid_url("https://sub.example.com/path?q=1"));
        assert!(is_valid_url("ftp://files.example.com/pub"));
        assert!(is_valid_url("HTTPS://EXAMPLE.COM")); // scheme case-insensitive

        // Invalid URLs
        assert!(!is_valid_url("not a url"));
        assert!(!is_valid_url("mailto:user@example.com")); // wrong scheme
        assert!(!is_valid_url("file:///etc/passwd")); // wrong scheme
        assert!(!is_valid_url("http://")); // no host
        assert!(!is_valid_url(""));
    }

    #[test]
    fn test_phone_number_validation() {
        // Valid
        assert!(is_valid_phone_number("555-123-4567"));
        assert!(is_valid_phone_number("000-000-0000"));

        // Invalid
        assert!(!is_valid_phone_number("5551234567"));
        assert!(!is_valid_phone_number("(555) 123-4567"));
        assert!(!is_valid_phone_number("555-123-456"));
        assert!(!is_valid_phone_number("555-123-45678"));
        assert!(!is_valid_phone_number("+1-555-123-4567"));
        assert!(!is_valid_phone_number(""));
    }

    #[test]
    fn test_postal_code_validation() {
        // Valid
        assert!(is_valid_postal_code("K1A 0B1"));
        assert!(is_valid_postal_code("K1A-0B1"));
        assert!(is_valid_postal_code("K1A0B1"));
        assert!(is_valid_postal_code("m5v3l9"));

        // Invalid
        assert!(!is_valid_postal_code("12345"));
        assert!(!is_valid_postal_code("K1A  0B1")); // double separator
        assert!(!is_valid_postal_code("K1A 0B"));
        assert!(!is_valid_postal_code(""));
    }

    #[test]
    fn test_ipv4_validation() {
        // Valid shapes
        assert!(is_valid_ipv4_address("192.168.1.1"));
        assert!(is_valid_ipv4_address("0.0.0.0"));
        assert!(is_valid_ipv4_address("255.255.255.255"));
        // Out-of-range octets still match the shape
        assert!(is_valid_ipv4_address("999.999.999.999"));

        // Invalid shapes
        assert!(!is_valid_ipv4_address("192.168.1"));
        assert!(!is_valid_ipv4_address("192.168.1.1.1"));
        assert!(!is_valid_ipv4_address("192.168.1.1234"));
        assert!(!is_valid_ipv4_address("a.b.c.d"));
        assert!(!is_valid_ipv4_address(""));
    }

    #[test]
    fn test_isbn_validation() {
        // Valid shapes
        assert!(is_valid_isbn("123456789X"));
        assert!(is_valid_isbn("1234567890"));
        assert!(is_valid_isbn("1234567890123"));

        // Invalid shapes
        assert!(!is_valid_isbn("12345"));
        assert!(!is_valid_isbn("X23456789X")); // X only allowed last
        assert!(!is_valid_isbn("123456789x")); // lowercase x rejected
        assert!(!is_valid_isbn("12345678901234")); // 14 digits
        assert!(!is_valid_isbn(""));
    }
}
