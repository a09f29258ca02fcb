// SPDX-License-Identifier: MIT

//!
//! The drag interaction state machine
//!

use crate::{RangeEndpoint, SelectionRange, TimelineScale};
use log::trace;
use serde::Serialize;

/// What the pointer is currently dragging, if anything
///
/// The frontends serialize interaction to at most one active drag target, so
/// a single explicit state replaces listener closures holding live mutable
/// references to drag state.  Every pointer event is a discrete transition:
/// press picks a target, each move routes to that target's clamped update,
/// release returns to idle
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DragState {
    /// No active drag
    #[default]
    Idle,

    /// An age-boundary grip is held (by breakpoint index)
    DraggingBoundary(usize),

    /// A selection-range handle is held
    DraggingHandle(RangeEndpoint),
}

impl DragState {
    /// Pointer press on an age-boundary grip
    pub fn press_boundary(&mut self, index: usize) {
        trace!("drag boundary {index}");
        *self = DragState::DraggingBoundary(index);
    }

    /// Pointer press on a selection-range handle
    pub fn press_handle(&mut self, which: RangeEndpoint) {
        trace!("drag handle {which:?}");
        *self = DragState::DraggingHandle(which);
    }

    /// Pointer moved to an axis percentage.  Routes the movement to the
    /// active drag target; does nothing when idle
    pub fn pointer_move(&self, pct: f64, scale: &mut TimelineScale, range: &mut SelectionRange) {
        match *self {
            DragState::Idle => {}
            DragState::DraggingBoundary(index) => scale.adjust_boundary(index, pct),
            DragState::DraggingHandle(which) => {
                range.move_endpoint(which, scale.position_to_year(pct));
            }
        }
    }

    /// Pointer released
    pub fn release(&mut self) {
        *self = DragState::Idle;
    }

    /// Whether no drag is active
    pub fn is_idle(&self) -> bool {
        matches!(self, DragState::Idle)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn transitions() {
        let mut state = DragState::default();
        assert!(state.is_idle());

        state.press_boundary(2);
        assert_eq!(state, DragState::DraggingBoundary(2));

        state.press_handle(RangeEndpoint::End);
        assert_eq!(state, DragState::DraggingHandle(RangeEndpoint::End));

        state.release();
        assert!(state.is_idle());
    }

    #[test]
    fn idle_moves_change_nothing() {
        let mut scale = TimelineScale::new();
        let mut range = SelectionRange::full();
        let boundaries = scale.boundaries().to_vec();

        DragState::Idle.pointer_move(50.0, &mut scale, &mut range);
        assert_eq!(scale.boundaries(), boundaries.as_slice());
        assert_eq!(range, SelectionRange::full());
    }

    #[test]
    fn boundary_drag_routes_to_the_scale() {
        let mut scale = TimelineScale::new();
        let mut range = SelectionRange::full();
        let mut state = DragState::default();

        state.press_boundary(1);
        state.pointer_move(60.0, &mut scale, &mut range);
        assert_eq!(scale.boundaries()[1], 60.0);

        // Range untouched by a boundary drag
        assert_eq!(range, SelectionRange::full());
    }

    #[test]
    fn handle_drag_routes_to_the_range() {
        let mut scale = TimelineScale::new();
        let mut range = SelectionRange::full();
        let mut state = DragState::default();

        state.press_handle(RangeEndpoint::Start);
        state.pointer_move(50.0, &mut scale, &mut range);
        assert_eq!(range.start(), scale.position_to_year(50.0));

        // Boundaries untouched by a handle drag
        assert_eq!(
            scale.boundaries(),
            TimelineScale::new().boundaries()
        );
    }
}
