//! Calibration targets
//!
//! The base target is the paper exposure that prints as the reference tone,
//! the strip target anchors calibration test strips. Both are PEVs so they
//! stay valid whatever the lamp or negative.

use crate::math::adjust_with_clamp;
use crate::state::{ExposureState, PevPreset};
use crate::tone::Pev;

/// Calibration targets are kept within 20 stops of one lux-second
const PEV_LIMIT: i32 = 20 * Pev::UNITS_PER_STOP;

impl ExposureState {
    pub fn calibration_pev_get_preset(&self) -> PevPreset {
        self.pev_preset
    }

    pub fn calibration_pev_set_preset(&mut self, preset: PevPreset) {
        self.pev_preset = preset;
    }

    pub fn calibration_pev_increase(&mut self) {
        self.calibration_pev_adjust(1);
    }

    pub fn calibration_pev_decrease(&mut self) {
        self.calibration_pev_adjust(-1);
    }

    // Base moves in twelfths, strip in patches of the current increment
    fn calibration_pev_adjust(&mut self, direction: i32) {
        match self.pev_preset {
            PevPreset::Base => {
                self.base_pev = Pev(adjust_with_clamp(
                    self.base_pev.0,
                    direction,
                    -PEV_LIMIT,
                    PEV_LIMIT,
                ));
            }
            PevPreset::Strip => {
                let step = i32::from(self.increment.twelfths());
                self.strip_pev = Pev(adjust_with_clamp(
                    self.strip_pev.0,
                    direction * step,
                    -PEV_LIMIT,
                    PEV_LIMIT,
                ));
            }
        }
    }

    /// Target of the active preset
    pub fn calibration_pev(&self) -> Pev {
        match self.pev_preset {
            PevPreset::Base => self.base_pev,
            PevPreset::Strip => self.strip_pev,
        }
    }

    pub fn calibration_base_pev(&self) -> Pev {
        self.base_pev
    }

    pub fn calibration_strip_pev(&self) -> Pev {
        self.strip_pev
    }

    /// Time that delivers the active target to the lowest reading
    pub fn calibration_exposure_time(&self) -> Option<f32> {
        self.calibration_preset_exposure_time(self.pev_preset)
    }

    /// Time that delivers the target of `preset` to the lowest reading
    pub fn calibration_preset_exposure_time(&self, preset: PevPreset) -> Option<f32> {
        let lux = self.readings.lowest()?;
        let target = match preset {
            PevPreset::Base => self.base_pev,
            PevPreset::Strip => self.strip_pev,
        };
        target.exposure_time(lux).map(|time| self.floor_time(time))
    }
}
