// SPDX-License-Identifier: MIT

//!
//! The MythicAges era type
//!

use crate::Year;
use serde::{Deserialize, Serialize};

/// A normalized year range
///
/// `start_year <= end_year` is NOT guaranteed: the era parser passes
/// descending-written ranges ("5th–3rd century BCE") through in written
/// order.  [`Era::midpoint`] is order-independent, so pin placement doesn't
/// care which way round the pair is
#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Copy, Debug, Hash)]
pub struct Era {
    start_year: Year,
    end_year: Year,
}

impl Era {
    /// Create an [`Era`] from two endpoints, kept in the order given
    pub fn from(start_year: Year, end_year: Year) -> Self {
        Era {
            start_year,
            end_year,
        }
    }

    /// A zero-width [`Era`] at a single year
    pub fn at(year: Year) -> Self {
        Era {
            start_year: year,
            end_year: year,
        }
    }

    /// Get the era's start year (as written, not necessarily the earlier one)
    pub fn start_year(&self) -> Year {
        self.start_year
    }

    /// Get the era's end year (as written, not necessarily the later one)
    pub fn end_year(&self) -> Year {
        self.end_year
    }

    /// The year halfway between the two endpoints, whichever way round they
    /// were written
    pub fn midpoint(&self) -> Year {
        let mid = (self.start_year.value() as i64 + self.end_year.value() as i64) / 2;
        Year::clamped(mid)
    }

    /// Whether the era covers a single year
    pub fn is_zero_width(&self) -> bool {
        self.start_year == self.end_year
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn midpoint() {
        let start = Year::try_from(-3300).unwrap();
        let end = Year::try_from(-1800).unwrap();
        assert_eq!(Era::from(start, end).midpoint().value(), -2550);

        // Order-independent
        assert_eq!(Era::from(end, start).midpoint().value(), -2550);

        let at = Era::at(Year::try_from(1925).unwrap());
        assert!(at.is_zero_width());
        assert_eq!(at.midpoint().value(), 1925);
    }
}
