//! Memory address type and the textual address decoder.

use std::fmt;
use std::ops::{Add, Sub};
use std::str::FromStr;

use crate::error::AddressParseError;

/// Strongly typed 64-bit address
///
/// Addresses show up in two roles in a crash log: the absolute address
/// captured at runtime, and the module-relative offset a symbol table is
/// keyed by. Both are `Address` values; which one you are holding is decided
/// by the field it came from, not by the type.
///
/// ## Example
///
/// ```rust
/// use addrsym_core::types::Address;
///
/// let base = Address::new(0x1000);
/// let addr = Address::from(0x1500_u64);
/// assert_eq!(addr.relative_to(base), Address::new(0x500));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Address(u64);

impl Address
{
    /// The null address (0x0)
    pub const ZERO: Self = Address(0);

    /// Create a new address from a `u64` value
    ///
    /// Usable in const contexts, unlike `From<u64>`.
    pub const fn new(value: u64) -> Self
    {
        Address(value)
    }

    /// Get the raw `u64` value of this address
    pub const fn value(self) -> u64
    {
        self.0
    }

    /// Offset of this address from `base`, wrapping modulo 2^64.
    ///
    /// An address below `base` does not fail: the result wraps around to a
    /// very large offset.
    ///
    /// ```rust
    /// use addrsym_core::types::Address;
    ///
    /// let base = Address::new(0x1000);
    /// assert_eq!(Address::new(0x0500).relative_to(base).value(), 0xFFFF_FFFF_FFFF_F500);
    /// ```
    #[must_use]
    pub const fn relative_to(self, base: Address) -> Self
    {
        Address(self.0.wrapping_sub(base.0))
    }

    /// Offset of this address from `base`, or `None` if it lies below `base`.
    ///
    /// Agrees with [`Address::relative_to`] whenever that does not wrap.
    #[must_use]
    pub fn checked_relative_to(self, base: Address) -> Option<Self>
    {
        self.0.checked_sub(base.0).map(Address)
    }
}

/// Decode a textual address.
///
/// Accepted forms:
/// - `0x`/`0X` followed by one or more hexadecimal digits (`0x7f00`, `0XDEADbeef`)
/// - plain decimal digits (`4096`)
///
/// Bare hexadecimal without a prefix (`deadbeef`), signs, whitespace and
/// values above `u64::MAX` are rejected.
///
/// ## Errors
///
/// - [`AddressParseError::Empty`] for `""` or a lone `0x`
/// - [`AddressParseError::InvalidDigit`] for characters outside the radix
/// - [`AddressParseError::Overflow`] when the value does not fit in 64 bits
pub fn parse_address(token: &str) -> Result<Address, AddressParseError>
{
    let (digits, radix) = match token.strip_prefix("0x").or_else(|| token.strip_prefix("0X")) {
        Some(hex) => (hex, 16),
        None => (token, 10),
    };

    if digits.is_empty() {
        return Err(AddressParseError::Empty);
    }

    // `from_str_radix` tolerates a leading `+`, which is not an address.
    if !digits.chars().all(|c| c.is_digit(radix)) {
        return Err(AddressParseError::InvalidDigit {
            token: token.to_string(),
        });
    }

    u64::from_str_radix(digits, radix)
        .map(Address)
        .map_err(|_| AddressParseError::Overflow {
            token: token.to_string(),
        })
}

impl FromStr for Address
{
    type Err = AddressParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err>
    {
        parse_address(s)
    }
}

impl From<u64> for Address
{
    fn from(value: u64) -> Self
    {
        Address(value)
    }
}

impl From<Address> for u64
{
    fn from(address: Address) -> Self
    {
        address.0
    }
}

impl fmt::Display for Address
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        write!(f, "0x{:016x}", self.0)
    }
}

impl fmt::LowerHex for Address
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        fmt::LowerHex::fmt(&self.0, f)
    }
}

impl Add<u64> for Address
{
    type Output = Address;

    fn add(self, rhs: u64) -> Self::Output
    {
        Address(self.0.wrapping_add(rhs))
    }
}

impl Sub<u64> for Address
{
    type Output = Address;

    fn sub(self, rhs: u64) -> Self::Output
    {
        Address(self.0.wrapping_sub(rhs))
    }
}

#[cfg(test)]
mod tests
{
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("0x1500", 0x1500)]
    #[case("0X1500", 0x1500)]
    #[case("0xDeadBeef", 0xdead_beef)]
    #[case("0x0", 0)]
    #[case("0x0500", 0x500)]
    #[case("4096", 4096)]
    #[case("0", 0)]
    #[case("0xffffffffffffffff", u64::MAX)]
    #[case("18446744073709551615", u64::MAX)]
    fn test_parse_valid(#[case] token: &str, #[case] expected: u64)
    {
        assert_eq!(parse_address(token), Ok(Address::new(expected)));
    }

    #[rstest]
    #[case("")]
    #[case("0x")]
    #[case("0X")]
    fn test_parse_empty(#[case] token: &str)
    {
        assert_eq!(parse_address(token), Err(AddressParseError::Empty));
    }

    #[rstest]
    #[case("garbage")]
    #[case("deadbeef")]
    #[case("+42")]
    #[case("-1")]
    #[case("0x+1")]
    #[case("0xg00d")]
    #[case("12ab")]
    #[case("0x10,")]
    fn test_parse_invalid_digit(#[case] token: &str)
    {
        assert_eq!(
            parse_address(token),
            Err(AddressParseError::InvalidDigit {
                token: token.to_string()
            })
        );
    }

    #[rstest]
    #[case("0x10000000000000000")]
    #[case("18446744073709551616")]
    fn test_parse_overflow(#[case] token: &str)
    {
        assert_eq!(
            parse_address(token),
            Err(AddressParseError::Overflow {
                token: token.to_string()
            })
        );
    }

    #[test]
    fn test_from_str_matches_parse_address()
    {
        let addr: Address = "0x7fff0000".parse().unwrap();
        assert_eq!(addr, Address::new(0x7fff_0000));
        assert!("nope".parse::<Address>().is_err());
    }

    #[test]
    fn test_relative_to_wraps_below_base()
    {
        let base = Address::new(0x1000);
        assert_eq!(Address::new(0x1500).relative_to(base), Address::new(0x500));
        assert_eq!(Address::new(0x1000).relative_to(base), Address::ZERO);
        assert_eq!(Address::new(0x0500).relative_to(base), Address::new(0xFFFF_FFFF_FFFF_F500));
        assert_eq!(Address::ZERO.relative_to(Address::new(1)), Address::new(u64::MAX));
    }

    #[test]
    fn test_checked_relative_to_matches_relative_to_above_base()
    {
        let base = Address::new(0x1000);
        assert_eq!(Address::new(0x1500).checked_relative_to(base), Some(Address::new(0x500)));
        assert_eq!(Address::new(0x1000).checked_relative_to(base), Some(Address::ZERO));
        assert_eq!(Address::new(0x0500).checked_relative_to(base), None);
    }

    #[test]
    fn test_display_is_zero_padded()
    {
        assert_eq!(Address::new(0x500).to_string(), "0x0000000000000500");
        assert_eq!(format!("{:#x}", Address::new(0x500)), "0x500");
    }
}
