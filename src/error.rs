//! Error types for address, mask and network parsing.

use thiserror::Error;

/// Result type alias for vip operations.
pub type Result<T> = std::result::Result<T, VipError>;

/// Why a piece of text could not be parsed.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Malformed {
    #[error("expected dotted-quad")]
    ExpectedDottedQuad,

    #[error("expected <ip>/<mask>")]
    ExpectedCidr,

    #[error("invalid syntax")]
    InvalidSyntax,

    #[error("value out of range")]
    OutOfRange,
}

/// Main error type for vip.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VipError {
    #[error("malformed address {input:?}: {reason}")]
    MalformedAddress { input: String, reason: Malformed },

    #[error("malformed network {input:?}: {reason}")]
    MalformedNetwork { input: String, reason: Malformed },

    #[error("prefix length {0}: value out of range")]
    PrefixOutOfRange(u8),

    #[error("invalid mask")]
    InvalidMask,

    #[error("expecting host ip: {0}")]
    NotAHost(String),
}

impl VipError {
    pub(crate) fn address(input: &str, reason: Malformed) -> Self {
        VipError::MalformedAddress {
            input: input.to_string(),
            reason,
        }
    }

    pub(crate) fn network(input: &str, reason: Malformed) -> Self {
        VipError::MalformedNetwork {
            input: input.to_string(),
            reason,
        }
    }
}

/// Parse a decimal component of at most `u8` width.
///
/// Only ASCII digits are accepted, so `+1` and ` 1` are syntax errors
/// while `007` is fine.
pub(crate) fn parse_decimal(component: &str) -> std::result::Result<u8, Malformed> {
    if component.is_empty() || !component.bytes().all(|b| b.is_ascii_digit()) {
        return Err(Malformed::InvalidSyntax);
    }
    // all digits, so the only remaining failure is overflow
    component.parse::<u8>().map_err(|_| Malformed::OutOfRange)
}
