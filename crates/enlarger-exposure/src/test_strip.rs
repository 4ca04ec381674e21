//! Test strip timing
//!
//! Patches are spaced one unit of the current adjustment increment apart,
//! patch 0 being the current exposure. A strip is printed by exposing every
//! patch for the first time, then covering one patch at a time and adding
//! the incremental time for the remaining ones.
//!
//! In calibration mode patch 0 delivers the strip target to the lowest
//! reading instead. Incremental steps are not floored, a step shorter than
//! the hardware minimum is reported by [`ExposureState::test_strip_is_printable`].

use crate::math::exp2_stops;
use crate::state::{ExposureMode, ExposureState};
use crate::tone::{Pev, ToneGraph};

impl ExposureState {
    /// Total exposure time patch `patch` receives
    pub fn test_strip_time_complete(&self, patch: i32) -> f32 {
        match self.calibration_strip_time() {
            Some(center) => {
                let denominator = i32::from(self.increment.denominator());
                self.floor_time(center * exp2_stops(patch, denominator))
            }
            None => self.time_for_adjustment(self.adjustment.saturating_add(patch)),
        }
    }

    // Unfloored time of the strip target on the lowest reading
    fn calibration_strip_time(&self) -> Option<f32> {
        if self.mode != ExposureMode::Calibration {
            return None;
        }
        let lux = self.readings.lowest()?;
        self.strip_pev.exposure_time(lux)
    }

    /// Time of the exposure step after `patches_covered` patches starting
    /// at `patch_min` have already been covered
    ///
    /// The steps add up to the complete time of the last exposed patch.
    pub fn test_strip_time_incremental(&self, patch_min: i32, patches_covered: u32) -> f32 {
        let covered = i32::try_from(patches_covered).unwrap_or(i32::MAX);
        let patch = patch_min.saturating_add(covered);
        let complete = self.test_strip_time_complete(patch);
        if patches_covered == 0 {
            complete
        } else {
            complete - self.test_strip_time_complete(patch.saturating_sub(1))
        }
    }

    /// Whether every step of a `patch_count` patch strip is at least the
    /// hardware minimum exposure time
    pub fn test_strip_is_printable(&self, patch_min: i32, patch_count: u32) -> bool {
        (0..patch_count).all(|covered| {
            self.test_strip_time_incremental(patch_min, covered) >= self.min_exposure_time
        })
    }

    /// Exposure the lowest reading receives on patch `patch`
    pub fn test_strip_patch_pev(&self, patch: i32) -> Option<Pev> {
        let lux = self.readings.lowest()?;
        Pev::from_exposure(lux, self.test_strip_time_complete(patch))
    }

    /// Tone graph of all readings on patch `patch`
    pub fn test_strip_patch_tone(&self, patch: i32) -> ToneGraph {
        self.absolute_tone_graph(self.test_strip_time_complete(patch))
    }
}
