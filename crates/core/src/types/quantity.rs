//! Positive item quantity.

use core::fmt;
use core::num::NonZeroU32;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing a [`Quantity`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum QuantityError {
    /// The input is not an integer.
    #[error("quantity must be a whole number")]
    NotANumber,
    /// The input is zero or negative.
    #[error("quantity must be at least 1")]
    NotPositive,
}

/// A positive number of items.
///
/// Form inputs are coerced with [`Quantity::coerce`], which maps anything that
/// is not a positive integer to the default of 1.
///
/// ```
/// use webenv_core::Quantity;
///
/// assert_eq!(Quantity::coerce("3").get(), 3);
/// assert_eq!(Quantity::coerce("-2").get(), 1);
/// assert_eq!(Quantity::coerce("lots").get(), 1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Quantity(NonZeroU32);

impl Quantity {
    /// A single item.
    pub const ONE: Self = Self(NonZeroU32::MIN);

    /// Create a quantity, returning `None` for zero.
    #[must_use]
    pub const fn new(value: u32) -> Option<Self> {
        match NonZeroU32::new(value) {
            Some(value) => Some(Self(value)),
            None => None,
        }
    }

    /// Get the underlying value.
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0.get()
    }

    /// Parse user input, falling back to 1 for anything invalid.
    #[must_use]
    pub fn coerce(input: &str) -> Self {
        input.parse().unwrap_or_default()
    }
}

impl Default for Quantity {
    fn default() -> Self {
        Self::ONE
    }
}

impl FromStr for Quantity {
    type Err = QuantityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: i64 = s.trim().parse().map_err(|_| QuantityError::NotANumber)?;
        u32::try_from(value)
            .ok()
            .and_then(Self::new)
            .ok_or(QuantityError::NotPositive)
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid() {
        assert_eq!("1".parse::<Quantity>().unwrap().get(), 1);
        assert_eq!(" 12 ".parse::<Quantity>().unwrap().get(), 12);
    }

    #[test]
    fn test_parse_zero_and_negative() {
        assert_eq!("0".parse::<Quantity>(), Err(QuantityError::NotPositive));
        assert_eq!("-4".parse::<Quantity>(), Err(QuantityError::NotPositive));
    }

    #[test]
    fn test_parse_not_a_number() {
        assert_eq!("".parse::<Quantity>(), Err(QuantityError::NotANumber));
        assert_eq!("two".parse::<Quantity>(), Err(QuantityError::NotANumber));
        assert_eq!("2.5".parse::<Quantity>(), Err(QuantityError::NotANumber));
    }

    #[test]
    fn test_coerce_falls_back_to_one() {
        assert_eq!(Quantity::coerce("0"), Quantity::ONE);
        assert_eq!(Quantity::coerce("abc"), Quantity::ONE);
        assert_eq!(Quantity::coerce("99999999999"), Quantity::ONE);
        assert_eq!(Quantity::coerce("7").get(), 7);
    }

    #[test]
    fn test_serde_rejects_zero() {
        assert!(serde_json::from_str::<Quantity>("0").is_err());
        assert_eq!(serde_json::from_str::<Quantity>("2").unwrap().get(), 2);
    }
}
