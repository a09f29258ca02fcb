// SPDX-License-Identifier: MIT

//!
//! The MythicAges pin type
//!

use crate::{Colour, Era, Name, Year};
use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

/// Errors that can arise in relation to a [`Pin`]
#[derive(Error, Debug)]
pub enum PinError {
    /// The pin's ID slug is empty
    #[error("The pin ID cannot be empty")]
    EmptyId,

    /// The pin dates are invalid
    #[error("The pin dates are invalid")]
    Dates,
}

/// A host-supplied point-in-time marker placed on the timeline axis
///
/// Pins come from the static site content and are read-only to the timeline
/// core: the scale renders each one at the position of its midpoint year
#[derive(Serialize, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Pin {
    /// The pin's content slug (e.g. "oracle-of-delphi")
    id: String,

    /// The pin's display name
    name: Name,

    /// When the pinned event/era begins
    start_year: Year,

    /// When the pinned event/era ends
    end_year: Year,

    /// The pin's colour, if the content specifies one
    colour: Option<Colour>,
}

impl Pin {
    /// Create a valid [`Pin`] if it is possible to do so with the values
    /// passed in
    pub fn from<S: ToString>(
        id: S,
        name: Name,
        start_year: Year,
        end_year: Year,
        colour: Option<Colour>,
    ) -> Result<Pin, PinError> {
        let id = id.to_string();
        if id.trim().is_empty() {
            return Err(PinError::EmptyId);
        }
        if end_year < start_year {
            return Err(PinError::Dates);
        }
        Ok(Pin {
            id: id.trim().to_string(),
            name,
            start_year,
            end_year,
            colour,
        })
    }

    /// Get the pin's ID slug
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Get the pin's name
    pub fn name(&self) -> &Name {
        &self.name
    }

    /// Get the pin's year range as an [`Era`]
    pub fn era(&self) -> Era {
        Era::from(self.start_year, self.end_year)
    }

    /// The year the pin is rendered at
    pub fn midpoint_year(&self) -> Year {
        self.era().midpoint()
    }

    /// Get the pin's colour (if the content specifies one)
    pub fn colour(&self) -> Option<Colour> {
        self.colour
    }
}

#[derive(Deserialize)]
struct RawPin {
    id: String,
    name: Name,
    start_year: Year,
    end_year: Year,
    colour: Option<Colour>,
}

impl<'de> Deserialize<'de> for Pin {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = RawPin::deserialize(deserializer)?;
        Pin::from(raw.id, raw.name, raw.start_year, raw.end_year, raw.colour)
            .map_err(serde::de::Error::custom)
    }
}
