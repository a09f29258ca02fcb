// SPDX-License-Identifier: MIT

//!
//! The MythicAges year type
//!

use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

/// The minimum year allowed in the MythicAges system
pub const MIN_YEAR: i64 = -50000;

/// The maximum year allowed in the MythicAges system
pub const MAX_YEAR: i64 = 10000;

/// Errors that can arise in relation to a [`Year`]
#[derive(Error, Debug, Clone)]
pub enum YearError {
    /// The year is not allowed (must be [`MIN_YEAR`] <= year <= [`MAX_YEAR`])
    #[error("Year `{0}` is not allowed")]
    InvalidYear(i64),
}

/// The MythicAges year type
///
/// Years are signed integers where `-n` means "n BCE" and positive values are
/// CE.  There is no year-zero adjustment: the value is a plain sign flip on
/// the year count, matching the convention the era parser and the age table
/// use throughout.  The minimum year allowed is [`MIN_YEAR`].  The maximum
/// year allowed is [`MAX_YEAR`]
#[rustfmt::skip]
#[derive(derive_more::Display, Serialize, Eq, PartialEq, Clone, Copy, Debug, Hash, PartialOrd, Ord)]
pub struct Year(i32);

impl Year {
    pub fn value(&self) -> i32 {
        self.0
    }

    pub fn min() -> Self {
        Year(MIN_YEAR as i32)
    }

    pub fn max() -> Self {
        Year(MAX_YEAR as i32)
    }

    /// The year the system treats as "now".  The era parser resolves the
    /// literal "present" to this
    pub fn present() -> Self {
        Year(2026)
    }

    /// Create a [`Year`], saturating at [`MIN_YEAR`]/[`MAX_YEAR`] rather than
    /// failing.  Scale operations clamp out-of-range inputs instead of
    /// rejecting them, so they use this rather than `try_from`
    pub fn clamped(value: i64) -> Self {
        Year(value.clamp(MIN_YEAR, MAX_YEAR) as i32)
    }
}

impl TryFrom<i64> for Year {
    type Error = YearError;
    fn try_from(value: i64) -> Result<Self, Self::Error> {
        if (MIN_YEAR..=MAX_YEAR).contains(&value) {
            Ok(Year(value as i32))
        } else {
            Err(YearError::InvalidYear(value))
        }
    }
}

impl<'de> Deserialize<'de> for Year {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = i64::deserialize(deserializer)?;
        Year::try_from(value).map_err(|e| serde::de::Error::custom(format!("{:?}", e)))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn try_from() {
        assert!(Year::try_from(999_999).is_err());
        assert!(Year::try_from(-999_999).is_err());
        assert!(Year::try_from(-3300).is_ok());
        assert!(Year::try_from(2026).is_ok());
    }

    #[test]
    fn clamped() {
        assert_eq!(Year::clamped(999_999), Year::max());
        assert_eq!(Year::clamped(-999_999), Year::min());
        assert_eq!(Year::clamped(1925).value(), 1925);
    }

    #[test]
    fn deserialize() {
        let year: Year = serde_json::from_str("-250").unwrap();
        assert_eq!(year.value(), -250);
        assert!(serde_json::from_str::<Year>("999999").is_err());
    }
}
