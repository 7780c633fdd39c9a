//! The closed set of validation categories
//!
//! This module defines the `ValidationKind` enum that callers use to select
//! which checker runs. The set is fixed at compile time; an out-of-range kind
//! is unrepresentable, so dispatch never has an "unknown kind" error path.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

// ============================================================================
// ValidationKind - Closed enumeration of supported categories
// ============================================================================

/// A validation category recognized by the engine
///
/// Each variant maps to exactly one checker function. The enum is closed:
/// exhaustive `match` in the dispatcher guarantees every kind is handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ValidationKind {
    /// Email address (pattern match, no DNS or mailbox checks)
    Email,

    /// Alphanumeric password, 8+ characters with at least one letter and one digit
    Password,

    /// Payment card number (13-19 digits after stripping, Luhn checksum)
    CreditCard,

    /// 11-digit national identity number (Turkish checksum algorithm)
    IdentityNumber,

    /// Personal name (letter runs joined by single separator characters)
    Name,

    /// Structural URL with an http/https/ftp scheme and a host
    Url,

    /// North-American-style phone number, `NNN-NNN-NNNN` only
    PhoneNumber,

    /// Canadian-style alphanumeric postal code
    PostalCode,

    /// Dotted-quad IPv4 shape (octet ranges deliberately unchecked)
    Ipv4Address,

    /// ISBN-10 or ISBN-13 shape (no check-digit verification)
    Isbn,
}

impl ValidationKind {
    /// All supported kinds, in declaration order
    pub const ALL: [ValidationKind; 10] = [
        Self::Email,
        Self::Password,
        Self::CreditCard,
        Self::IdentityNumber,
        Self::Name,
        Self::Url,
        Self::PhoneNumber,
        Self::PostalCode,
        Self::Ipv4Address,
        Self::Isbn,
    ];

    /// Get the stable snake_case name of this kind
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::Password => "password",
            Self::CreditCard => "credit_card",
            Self::IdentityNumber => "identity_number",
            Self::Name => "name",
            Self::Url => "url",
            Self::PhoneNumber => "phone_number",
            Self::PostalCode => "postal_code",
            Self::Ipv4Address => "ipv4_address",
            Self::Isbn => "isbn",
        }
    }
}

impl fmt::Display for ValidationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.kind_name())
    }
}

// ============================================================================
// Parsing kind names
// ============================================================================

/// Error returned when a string does not name a supported kind
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown validation kind: {0:?}")]
pub struct ParseKindError(pub String);

impl FromStr for ValidationKind {
    type Err = ParseKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ValidationKind::ALL
            .into_iter()
            .find(|kind| kind.kind_name() == s)
            .ok_or_else(|| ParseKindError(s.to_string()))
    }
}
