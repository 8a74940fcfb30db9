//! # Error Types
//!
//! Errors surfaced by addrsym.
//!
//! We use `thiserror` to automatically generate `Error` trait implementations
//! and nice error messages.
//!
//! Note that a token that fails to decode is *not* an error as far as a
//! parser is concerned: it becomes a placeholder frame. [`AddressParseError`]
//! only reaches callers who use [`parse_address`](crate::types::parse_address)
//! directly.

use thiserror::Error;

/// Why a token could not be decoded as an address.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AddressParseError
{
    /// The token was empty, or a prefix with no digits (`0x`).
    #[error("empty address")]
    Empty,

    /// The token contains a character that is not a digit of its radix.
    ///
    /// Bare hexadecimal such as `deadbeef` lands here; hex needs the `0x` prefix.
    #[error("invalid address `{token}`")]
    InvalidDigit
    {
        /// The offending token.
        token: String,
    },

    /// The value does not fit in 64 bits.
    #[error("address `{token}` does not fit in 64 bits")]
    Overflow
    {
        /// The offending token.
        token: String,
    },
}

/// Main error type for addrsym operations
#[derive(Error, Debug)]
pub enum AddrsymError
{
    /// Invalid argument passed while configuring a parser
    ///
    /// Examples:
    /// - An empty module name or build identifier
    /// - A malformed `NAME=ID@BASE` module mapping
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// An address given as configuration (not as parser input) was malformed
    #[error("Invalid address: {0}")]
    AddressParse(#[from] AddressParseError),

    /// I/O error while reading input
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for `Result<T, AddrsymError>`
///
/// ```rust
/// use addrsym_core::error::AddrsymResult;
/// fn foo() -> AddrsymResult<()>
/// {
///     Ok(())
/// }
/// ```
pub type AddrsymResult<T> = std::result::Result<T, AddrsymError>;
