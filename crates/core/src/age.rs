// SPDX-License-Identifier: MIT

//!
//! The fixed "mythic ages" reference table
//!
//! The ages are a contiguous, non-overlapping partition of the full timeline
//! domain.  The table never changes at runtime; only the *visual* spacing of
//! its boundaries does (see the scale crate).
//!

use crate::{Colour, Year};
use serde::Serialize;

/// One of the fixed, named bands partitioning the timeline domain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Age {
    pub id: &'static str,
    pub label: &'static str,
    pub start_year: i32,
    pub end_year: i32,
    pub colour: Colour,
}

/// The MythicAges age table
pub const AGES: [Age; 5] = [
    Age {
        id: "bronze",
        label: "Bronze Age",
        start_year: -3300,
        end_year: -1100,
        colour: Colour::from_rgb(0xb0, 0x8d, 0x57),
    },
    Age {
        id: "iron",
        label: "Iron Age",
        start_year: -1100,
        end_year: -500,
        colour: Colour::from_rgb(0x71, 0x79, 0x7e),
    },
    Age {
        id: "classical",
        label: "Classical Age",
        start_year: -500,
        end_year: 500,
        colour: Colour::from_rgb(0xd4, 0xaf, 0x37),
    },
    Age {
        id: "medieval",
        label: "Medieval Age",
        start_year: 500,
        end_year: 1500,
        colour: Colour::from_rgb(0x7c, 0x3f, 0x58),
    },
    Age {
        id: "modern",
        label: "Modern Age",
        start_year: 1500,
        end_year: 2026,
        colour: Colour::from_rgb(0x2e, 0x6f, 0x95),
    },
];

/// The years at which one age ends and the next begins, including both domain
/// edges.  Pairs index-for-index with the scale's position array
pub const AGE_BOUNDARY_YEARS: [i32; 6] = [-3300, -1100, -500, 500, 1500, 2026];

/// The oldest year on the timeline axis
pub const TIMELINE_MIN_YEAR: i32 = AGE_BOUNDARY_YEARS[0];

/// The newest year on the timeline axis
pub const TIMELINE_MAX_YEAR: i32 = AGE_BOUNDARY_YEARS[AGE_BOUNDARY_YEARS.len() - 1];

/// The age a year falls in.  Years beyond the domain edges fall into the
/// first/last age, matching the scale's segment fallback
pub fn age_containing(year: Year) -> &'static Age {
    let value = year.value();
    for age in &AGES[..AGES.len() - 1] {
        if value < age.end_year {
            return age;
        }
    }
    &AGES[AGES.len() - 1]
}
