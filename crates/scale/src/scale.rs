// SPDX-License-Identifier: MIT

//!
//! The piecewise-linear year/position mapping
//!

use crate::{AXIS_MAX_PCT, AXIS_MIN_PCT, MIN_SEGMENT_WIDTH_PCT};
use log::{debug, trace};
use mythic_timeline_core::{AGE_BOUNDARY_YEARS, Pin, Year};

/// The piecewise-linear, invertible mapping between year space and the
/// 0–100 axis position space
///
/// The fixed boundary years never change; the interior breakpoint
/// percentages do, one per boundary year, as the user drags the age
/// boundaries about.  Together with the implicit 0 and 100 endpoints the
/// breakpoints form a position array that pairs index-for-index with the
/// boundary-year array, and each segment between neighbouring pairs maps
/// linearly.
pub struct TimelineScale {
    /// The fixed boundary years, oldest to newest
    boundary_years: &'static [i32],

    /// The interior breakpoint percentages, strictly increasing, each
    /// adjacent gap at least [`MIN_SEGMENT_WIDTH_PCT`]
    boundaries: Vec<f64>,
}

impl Default for TimelineScale {
    fn default() -> Self {
        Self::new()
    }
}

impl TimelineScale {
    /// A scale over the fixed MythicAges age table
    pub fn new() -> Self {
        Self::with_boundary_years(&AGE_BOUNDARY_YEARS)
    }

    /// A scale over any fixed boundary-year table (oldest to newest)
    pub fn with_boundary_years(boundary_years: &'static [i32]) -> Self {
        assert!(
            boundary_years.len() >= 2,
            "A scale needs at least two boundary years"
        );
        let boundaries = Self::default_boundaries(boundary_years);
        TimelineScale {
            boundary_years,
            boundaries,
        }
    }

    /// The even default breakpoints: each interior boundary year's position
    /// under a uniform single-segment mapping of the whole domain.  A pure
    /// function of the fixed table, independent of any adjusted state
    fn default_boundaries(boundary_years: &[i32]) -> Vec<f64> {
        let min = boundary_years[0] as f64;
        let max = boundary_years[boundary_years.len() - 1] as f64;
        boundary_years[1..boundary_years.len() - 1]
            .iter()
            .map(|&year| (year as f64 - min) / (max - min) * AXIS_MAX_PCT)
            .collect()
    }

    /// The oldest year on the axis
    pub fn domain_min(&self) -> i32 {
        self.boundary_years[0]
    }

    /// The newest year on the axis
    pub fn domain_max(&self) -> i32 {
        self.boundary_years[self.boundary_years.len() - 1]
    }

    /// Get the current interior breakpoint percentages
    pub fn boundaries(&self) -> &[f64] {
        &self.boundaries
    }

    /// The full position array: `[0, breakpoints…, 100]`
    pub fn positions(&self) -> Vec<f64> {
        let mut positions = Vec::with_capacity(self.boundaries.len() + 2);
        positions.push(AXIS_MIN_PCT);
        positions.extend_from_slice(&self.boundaries);
        positions.push(AXIS_MAX_PCT);
        positions
    }

    /// The segment a year falls in, with the last segment as the fallback
    /// for anything beyond the newest boundary
    fn segment_for_year(&self, year: i32) -> usize {
        let last = self.boundary_years.len() - 2;
        for i in 0..last {
            if year <= self.boundary_years[i + 1] {
                return i;
            }
        }
        last
    }

    /// Map a year to its current axis position.  Out-of-domain years
    /// saturate at the domain edges
    pub fn year_to_position(&self, year: Year) -> f64 {
        let year = year.value().clamp(self.domain_min(), self.domain_max());
        let positions = self.positions();

        let i = self.segment_for_year(year);
        let year_start = self.boundary_years[i] as f64;
        let year_end = self.boundary_years[i + 1] as f64;

        // The fixed table has no zero-width year segments, but don't divide
        // by zero if one ever appears
        let t = if year_end == year_start {
            0.0
        } else {
            (year as f64 - year_start) / (year_end - year_start)
        };
        positions[i] + t * (positions[i + 1] - positions[i])
    }

    /// Map an axis position back to a year — the exact inverse of
    /// [`Self::year_to_position`], rounded to the nearest year.
    /// Out-of-range percentages saturate at the axis edges
    pub fn position_to_year(&self, pct: f64) -> Year {
        let pct = pct.clamp(AXIS_MIN_PCT, AXIS_MAX_PCT);
        let positions = self.positions();

        let last = positions.len() - 2;
        let mut i = last;
        for candidate in 0..last {
            if pct <= positions[candidate + 1] {
                i = candidate;
                break;
            }
        }

        // A drag can push two breakpoints to their minimum-gap limit, where
        // numerical noise may collapse a segment to zero width
        let width = positions[i + 1] - positions[i];
        let t = if width <= f64::EPSILON {
            0.0
        } else {
            (pct - positions[i]) / width
        };

        let year_start = self.boundary_years[i] as f64;
        let year_end = self.boundary_years[i + 1] as f64;
        Year::clamped((year_start + t * (year_end - year_start)).round() as i64)
    }

    /// Move one interior breakpoint.  The proposed percentage is clamped so
    /// that the strictly-increasing, minimum-gap invariant holds however
    /// extreme the drag input is
    pub fn adjust_boundary(&mut self, index: usize, proposed_pct: f64) {
        let lower = if index == 0 {
            AXIS_MIN_PCT + MIN_SEGMENT_WIDTH_PCT
        } else {
            self.boundaries[index - 1] + MIN_SEGMENT_WIDTH_PCT
        };
        let upper = if index == self.boundaries.len() - 1 {
            AXIS_MAX_PCT - MIN_SEGMENT_WIDTH_PCT
        } else {
            self.boundaries[index + 1] - MIN_SEGMENT_WIDTH_PCT
        };

        let clamped = proposed_pct.clamp(lower, upper);
        trace!("adjust boundary {index} -> {clamped}");
        self.boundaries[index] = clamped;
    }

    /// Restore the even default breakpoints
    pub fn reset_boundaries(&mut self) {
        debug!("reset boundaries to the even default");
        self.boundaries = Self::default_boundaries(self.boundary_years);
    }

    /// The axis position a pin renders at: the position of its midpoint year
    pub fn pin_position(&self, pin: &Pin) -> f64 {
        self.year_to_position(pin.midpoint_year())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use mythic_timeline_core::{Name, TIMELINE_MAX_YEAR, TIMELINE_MIN_YEAR};
    use rand::{Rng, SeedableRng, rngs::StdRng};

    fn year(y: i64) -> Year {
        Year::try_from(y).unwrap()
    }

    /// A scale mangled by a long sequence of seeded random drags, including
    /// wildly out-of-range ones
    fn randomly_adjusted(rng: &mut StdRng) -> TimelineScale {
        let mut scale = TimelineScale::new();
        let count = scale.boundaries().len();
        for _ in 0..200 {
            let index = rng.gen_range(0..count);
            let proposed = rng.gen_range(-500.0..500.0);
            scale.adjust_boundary(index, proposed);
        }
        scale
    }

    fn assert_boundaries_valid(scale: &TimelineScale) {
        let positions = scale.positions();
        for pair in positions.windows(2) {
            assert!(
                pair[1] - pair[0] >= MIN_SEGMENT_WIDTH_PCT - 1e-9,
                "Gap below minimum: {} -> {}",
                pair[0],
                pair[1]
            );
        }
    }

    #[test]
    fn default_boundaries_are_even() {
        let scale = TimelineScale::new();
        let domain = (TIMELINE_MAX_YEAR - TIMELINE_MIN_YEAR) as f64;
        for (boundary, expected_year) in scale.boundaries().iter().zip(&AGE_BOUNDARY_YEARS[1..]) {
            let expected = (*expected_year - TIMELINE_MIN_YEAR) as f64 / domain * 100.0;
            assert!((boundary - expected).abs() < 1e-9);
        }
    }

    #[test]
    fn endpoints_map_to_axis_edges() {
        let scale = TimelineScale::new();
        assert_eq!(scale.year_to_position(year(TIMELINE_MIN_YEAR as i64)), 0.0);
        assert_eq!(
            scale.year_to_position(year(TIMELINE_MAX_YEAR as i64)),
            100.0
        );

        // Out-of-domain inputs saturate
        assert_eq!(scale.year_to_position(year(-40000)), 0.0);
        assert_eq!(scale.year_to_position(year(9000)), 100.0);
        assert_eq!(
            scale.position_to_year(-15.0).value(),
            TIMELINE_MIN_YEAR
        );
        assert_eq!(scale.position_to_year(250.0).value(), TIMELINE_MAX_YEAR);
    }

    #[test]
    fn round_trip_default_config() {
        let scale = TimelineScale::new();
        for y in TIMELINE_MIN_YEAR..=TIMELINE_MAX_YEAR {
            let round_tripped = scale.position_to_year(scale.year_to_position(year(y as i64)));
            assert!(
                (round_tripped.value() - y).abs() <= 1,
                "{y} round-tripped to {round_tripped}"
            );
        }
    }

    #[test]
    fn round_trip_adjusted_configs() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..20 {
            let scale = randomly_adjusted(&mut rng);
            for y in (TIMELINE_MIN_YEAR..=TIMELINE_MAX_YEAR).step_by(3) {
                let round_tripped = scale.position_to_year(scale.year_to_position(year(y as i64)));
                assert!(
                    (round_tripped.value() - y).abs() <= 1,
                    "{y} round-tripped to {round_tripped}"
                );
            }
        }
    }

    #[test]
    fn year_to_position_is_monotonic() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..10 {
            let scale = randomly_adjusted(&mut rng);
            let mut previous = scale.year_to_position(year(TIMELINE_MIN_YEAR as i64));
            for y in (TIMELINE_MIN_YEAR + 1)..=TIMELINE_MAX_YEAR {
                let position = scale.year_to_position(year(y as i64));
                assert!(position >= previous, "Not monotonic at year {y}");
                previous = position;
            }
        }
    }

    #[test]
    fn position_to_year_is_monotonic() {
        let mut rng = StdRng::seed_from_u64(13);
        for _ in 0..10 {
            let scale = randomly_adjusted(&mut rng);
            let mut previous = scale.position_to_year(0.0);
            for step in 1..=10_000 {
                let pct = step as f64 * 0.01;
                let result = scale.position_to_year(pct);
                assert!(result >= previous, "Not monotonic at {pct}%");
                previous = result;
            }
        }
    }

    #[test]
    fn adjustments_preserve_invariant() {
        let mut rng = StdRng::seed_from_u64(17);
        for _ in 0..50 {
            let scale = randomly_adjusted(&mut rng);
            assert_boundaries_valid(&scale);
        }
    }

    #[test]
    fn reset_is_idempotent() {
        let mut rng = StdRng::seed_from_u64(19);
        let mut scale = randomly_adjusted(&mut rng);
        scale.reset_boundaries();
        let first = scale.boundaries().to_vec();
        assert_eq!(first, TimelineScale::new().boundaries());

        // A second reset, and a reset after more drags, land on the same
        // default array
        scale.reset_boundaries();
        assert_eq!(scale.boundaries(), first.as_slice());
        scale.adjust_boundary(2, 80.0);
        scale.reset_boundaries();
        assert_eq!(scale.boundaries(), first.as_slice());
    }

    #[test]
    fn zero_width_year_segment_does_not_divide_by_zero() {
        const DEGENERATE: [i32; 3] = [0, 0, 100];
        let scale = TimelineScale::with_boundary_years(&DEGENERATE);
        let position = scale.year_to_position(year(0));
        assert!(position.is_finite());
    }

    #[test]
    fn pin_renders_at_midpoint() {
        let scale = TimelineScale::new();
        let pin = Pin::from(
            "trojan-war",
            Name::from("Trojan War").unwrap(),
            year(-1260),
            year(-1180),
            None,
        )
        .unwrap();
        let expected = scale.year_to_position(year(-1220));
        assert_eq!(scale.pin_position(&pin), expected);
    }
}
