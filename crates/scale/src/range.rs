// SPDX-License-Identifier: MIT

//!
//! The user's selection range
//!

use crate::MIN_RANGE_YEAR_GAP;
use log::trace;
use mythic_timeline_core::{TIMELINE_MAX_YEAR, TIMELINE_MIN_YEAR, Year};
use serde::Serialize;

/// Which end of a [`SelectionRange`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum RangeEndpoint {
    Start,
    End,
}

/// A user-chosen sub-interval of the timeline domain
///
/// The two endpoints only ever change through [`Self::move_endpoint`], which
/// keeps both within the domain and at least [`MIN_RANGE_YEAR_GAP`] years
/// apart — so a range that starts valid stays valid for the lifetime of the
/// widget
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SelectionRange {
    start: Year,
    end: Year,
}

impl Default for SelectionRange {
    fn default() -> Self {
        Self::full()
    }
}

impl SelectionRange {
    /// A range covering the whole domain
    pub fn full() -> Self {
        SelectionRange {
            start: Year::clamped(TIMELINE_MIN_YEAR as i64),
            end: Year::clamped(TIMELINE_MAX_YEAR as i64),
        }
    }

    /// A range with the given endpoints, clamped into validity
    pub fn from(start: Year, end: Year) -> Self {
        let mut range = Self::full();
        range.move_endpoint(RangeEndpoint::End, end);
        range.move_endpoint(RangeEndpoint::Start, start);
        range
    }

    /// Get the range's start year
    pub fn start(&self) -> Year {
        self.start
    }

    /// Get the range's end year
    pub fn end(&self) -> Year {
        self.end
    }

    /// Move one endpoint to a proposed year.  The proposal is clamped to the
    /// domain and to [`MIN_RANGE_YEAR_GAP`] years short of the other
    /// endpoint, however far the drag overshoots
    pub fn move_endpoint(&mut self, which: RangeEndpoint, proposed: Year) {
        match which {
            RangeEndpoint::Start => {
                let upper = self.end.value() - MIN_RANGE_YEAR_GAP;
                self.start = Year::clamped(proposed.value().clamp(TIMELINE_MIN_YEAR, upper) as i64);
            }
            RangeEndpoint::End => {
                let lower = self.start.value() + MIN_RANGE_YEAR_GAP;
                self.end = Year::clamped(proposed.value().clamp(lower, TIMELINE_MAX_YEAR) as i64);
            }
        }
        trace!("range now {} -> {}", self.start, self.end);
    }

    /// Which endpoint a direct click on the axis should move: whichever is
    /// numerically closer to the clicked year, ties going to the start.
    /// This is what lets a plain click snap the nearer handle without the
    /// user grabbing it precisely
    pub fn nearest_endpoint(&self, pointer_year: Year) -> RangeEndpoint {
        let to_start = (pointer_year.value() - self.start.value()).abs();
        let to_end = (pointer_year.value() - self.end.value()).abs();
        if to_start <= to_end {
            RangeEndpoint::Start
        } else {
            RangeEndpoint::End
        }
    }

    /// Snap the nearer endpoint to a clicked year
    pub fn snap_to(&mut self, pointer_year: Year) {
        self.move_endpoint(self.nearest_endpoint(pointer_year), pointer_year);
    }
}
