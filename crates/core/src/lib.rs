// SPDX-License-Identifier: MIT

//!
//! *Part of the wider MythicAges project*
//!
//! This crate defines the basic datatypes used across the MythicAges
//! timeline (the browser widget, the scale engine, the CLI tools): years,
//! eras, the fixed age table, pins, and colours — plus the free-text era
//! parser that turns the site content's human-written date expressions into
//! normalized year ranges.
//!
//! This crate aims to provide APIs for each type so that if a type is
//! instantiated, the developer can be sure it's valid.
//!

mod age;
mod colour;
mod era;
mod name;
mod parser;
mod pin;
mod year;

pub use age::*;
pub use colour::*;
pub use era::*;
pub use name::*;
pub use parser::*;
pub use pin::*;
pub use year::*;
