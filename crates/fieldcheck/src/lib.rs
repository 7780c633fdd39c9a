//! Fieldcheck
//!
//! Stateless string classification: given caller-supplied text and a
//! validation kind, decide whether the text conforms to that kind's format
//! and, where applicable, its checksum rules.
//!
//! The engine is a single function, [`is_valid`], dispatching over the
//! closed [`ValidationKind`] enum to one of ten independent checkers. Every
//! checker is a pure function of its input: no shared state, no I/O, no
//! error path. Non-conforming input is a normal `false` result, never a
//! panic or an `Err`. Pattern matching uses the `regex` crate, whose
//! linear-time engine bounds worst-case latency even on adversarial input,
//! so the engine is safe to call concurrently from any number of threads.
//!
//! # Features
//!
//! - **Default**: core validation only
//! - **serde**: `Serialize`/`Deserialize` on [`ValidationKind`] (snake_case
//!   kind names)
//!
//! # Example
//!
//! ```rust
//! use fieldcheck::{is_valid, ValidationKind};
//!
//! assert!(is_valid("user@example.com", ValidationKind::Email));
//! assert!(!is_valid("not-an-email", ValidationKind::Email));
//!
//! // Checksum-backed kinds verify the check digit, not just the shape
//! assert!(is_valid("4532015112830366", ValidationKind::CreditCard));
//! assert!(!is_valid("4532015112830367", ValidationKind::CreditCard));
//! ```

// Public modules
pub mod checksum;
pub mod formats;
pub mod kind;
pub mod validators;

// Re-export the public surface
pub use kind::{ParseKindError, ValidationKind};
pub use validators::{Checker, checker_for, is_valid};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
