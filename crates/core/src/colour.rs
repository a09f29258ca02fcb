// SPDX-License-Identifier: MIT

//!
//! The colours used for age bands and pins
//!

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can arise in relation to a [`Colour`]
#[derive(Error, Debug, Clone)]
pub enum ColourError {
    /// The hex string is not a recognisable colour
    #[error("`{0}` is not a valid hex colour")]
    InvalidHex(String),
}

/// The `Colour` type
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Colour {
    r: u8,
    g: u8,
    b: u8,
}

impl From<Colour> for [u8; 3] {
    fn from(value: Colour) -> Self {
        [value.r, value.g, value.b]
    }
}

impl From<[u8; 3]> for Colour {
    fn from(value: [u8; 3]) -> Self {
        Colour::from_rgb(value[0], value[1], value[2])
    }
}

impl Colour {
    /// Create a colour from RGB values
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Colour { r, g, b }
    }

    /// Create a colour from a hex colour (e.g. `#b08d57`, `b08d57`).
    /// If the hex value has an alpha component, it is removed.
    pub fn from_hex<S: Into<String>>(hex_colour: S) -> Result<Self, ColourError> {
        let hex_colour = hex_colour.into();

        // Remove the alpha part if there is one
        let len = hex_colour.len();
        let stripped = if len == 8 || len == 9 {
            &hex_colour[0..(len - 2)]
        } else {
            &hex_colour[..]
        };

        // Check the hex length
        let len = stripped.len();
        if len != 6 && len != 7 {
            return Err(ColourError::InvalidHex(hex_colour));
        }

        // Get individual RGB hex digits
        // Work backwards so that it's independent of a leading "#"
        let r_hex = &stripped[(len - 6)..(len - 4)];
        let g_hex = &stripped[(len - 4)..(len - 2)];
        let b_hex = &stripped[(len - 2)..len];

        // Convert RGB hex digits to u8s
        let r = u8::from_str_radix(r_hex, 16);
        let g = u8::from_str_radix(g_hex, 16);
        let b = u8::from_str_radix(b_hex, 16);

        match (r, g, b) {
            (Ok(r), Ok(g), Ok(b)) => Ok(Colour::from_rgb(r, g, b)),
            _ => Err(ColourError::InvalidHex(hex_colour)),
        }
    }

    /// Get the colour as a `#rrggbb` hex string
    pub fn as_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}
