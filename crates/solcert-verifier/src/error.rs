//! Error types for proof verification

use thiserror::Error;

/// Errors raised while validating verification inputs
///
/// An invalid *proof* is not an error — verification reports `valid: false`
/// for it. Errors are reserved for inputs that are not well-formed hashes
/// at all.
#[derive(Debug, Error)]
pub enum VerifierError {
    /// A hex input did not parse as a 32-byte hash
    #[error("invalid hex in {field}: {reason}")]
    InvalidHex { field: String, reason: String },
}

impl VerifierError {
    pub(crate) fn invalid_hex(field: impl Into<String>, reason: impl ToString) -> Self {
        Self::InvalidHex {
            field: field.into(),
            reason: reason.to_string(),
        }
    }
}
