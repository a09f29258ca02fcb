// SPDX-License-Identifier: MIT

//!
//! The MythicAges timeline scale engine
//!
//! A piecewise-linear, user-adjustable mapping between calendar years and a
//! normalized 0–100 position along the timeline axis.  The frontends capture
//! pointer/touch coordinates, convert them to an axis percentage, and drive
//! this engine; the engine owns the breakpoint state, the selection range,
//! and the drag state machine, and does no rendering of its own.
//!

mod consts;
mod drag;
mod range;
mod scale;

pub use consts::*;
pub use drag::*;
pub use range::*;
pub use scale::*;
