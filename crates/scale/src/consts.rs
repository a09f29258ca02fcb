// SPDX-License-Identifier: MIT

//!
//! Scale engine tuning consts
//!

/// The axis position of the oldest boundary year
pub const AXIS_MIN_PCT: f64 = 0.0;

/// The axis position of the newest boundary year
pub const AXIS_MAX_PCT: f64 = 100.0;

/// The minimum visual width of an age segment, in axis percent.  Boundary
/// drags can never push two breakpoints (or a breakpoint and an axis edge)
/// closer than this
pub const MIN_SEGMENT_WIDTH_PCT: f64 = 4.0;

/// The minimum width of the user's selection range, in years
pub const MIN_RANGE_YEAR_GAP: i32 = 50;
