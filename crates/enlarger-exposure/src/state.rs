//! Exposure state of the active print job
//!
//! [`ExposureState`] owns every adjustment axis of a print and derives the
//! exposure time and tone graphs from them on demand. It is mutated only by
//! its owner; derived values are never cached.

use serde::Serialize;

use crate::burn_dodge::{BurnDodgeEntry, BurnDodgeError, BurnDodgeList};
use crate::config::{CHANNEL_COUNT, EXPOSURE, ExposureConfig};
use crate::contrast::ContrastGrade;
use crate::increment::AdjustmentIncrement;
use crate::math::{adjust_with_clamp, adjust_with_rollover_u16, exp2_stops, rescale_fraction};
use crate::readings::{MeterReadingSet, ReadingError};
use crate::tone::{Pev, ToneGraph, ToneScale};

/// What the controller is currently used for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum ExposureMode {
    #[default]
    PrintingBW,
    PrintingColor,
    Densitometer,
    Calibration,
}

/// Anchor a calibration PEV adjustment applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PevPreset {
    #[default]
    Base,
    Strip,
}

/// Exposure settings of a single print job
#[derive(Debug, Clone)]
pub struct ExposureState {
    pub(crate) config: ExposureConfig,
    pub(crate) mode: ExposureMode,
    pub(crate) base_time: f32,
    pub(crate) min_exposure_time: f32,
    pub(crate) active_paper_profile: Option<usize>,
    pub(crate) readings: MeterReadingSet,
    /// Global adjustment in units of `increment`
    pub(crate) adjustment: i32,
    pub(crate) increment: AdjustmentIncrement,
    pub(crate) contrast_grade: ContrastGrade,
    pub(crate) channels: [u16; CHANNEL_COUNT],
    pub(crate) channel_wide_mode: bool,
    pub(crate) burn_dodge: BurnDodgeList,
    pub(crate) pev_preset: PevPreset,
    pub(crate) base_pev: Pev,
    pub(crate) strip_pev: Pev,
}

impl ExposureState {
    /// Create a state with the default engine configuration
    pub fn new() -> Self {
        Self::with_config(EXPOSURE)
    }

    pub fn with_config(config: ExposureConfig) -> Self {
        Self {
            config,
            mode: ExposureMode::PrintingBW,
            base_time: config.default_base_time,
            min_exposure_time: config.default_min_exposure_time,
            active_paper_profile: None,
            readings: MeterReadingSet::new(),
            adjustment: 0,
            increment: config.default_increment,
            contrast_grade: config.default_contrast_grade,
            channels: [0; CHANNEL_COUNT],
            channel_wide_mode: false,
            burn_dodge: BurnDodgeList::new(),
            pev_preset: PevPreset::Base,
            base_pev: Pev(config.default_base_pev),
            strip_pev: Pev(config.default_strip_pev),
        }
    }

    /// Reset every setting to the configured defaults
    pub fn defaults(&mut self) {
        *self = Self::with_config(self.config);
    }

    pub fn config(&self) -> &ExposureConfig {
        &self.config
    }

    // === Mode ===

    pub fn mode(&self) -> ExposureMode {
        self.mode
    }

    /// Switch mode, starting a fresh job when the mode changes
    ///
    /// The hardware floor, the calibration targets, the active paper profile
    /// and the color channel values carry over to the new job.
    pub fn set_mode(&mut self, mode: ExposureMode) {
        if self.mode == mode {
            return;
        }
        let min_exposure_time = self.min_exposure_time;
        let active_paper_profile = self.active_paper_profile;
        let channels = self.channels;
        let channel_wide_mode = self.channel_wide_mode;
        let base_pev = self.base_pev;
        let strip_pev = self.strip_pev;

        self.defaults();
        self.mode = mode;
        self.min_exposure_time = min_exposure_time;
        self.active_paper_profile = active_paper_profile;
        self.channels = channels;
        self.channel_wide_mode = channel_wide_mode;
        self.base_pev = base_pev;
        self.strip_pev = strip_pev;

        #[cfg(feature = "log")]
        log::debug!("exposure: mode set to {:?}", mode);
    }

    // === Times ===

    pub fn base_time(&self) -> f32 {
        self.base_time
    }

    /// Set the nominal exposure time, rejecting non-positive values
    pub fn set_base_time(&mut self, value: f32) -> bool {
        if !value.is_finite() || value <= 0.0 {
            return false;
        }
        self.base_time = value;
        true
    }

    pub fn min_exposure_time(&self) -> f32 {
        self.min_exposure_time
    }

    /// Set the hardware floor, rejecting negative values
    pub fn set_min_exposure_time(&mut self, value: f32) -> bool {
        if !value.is_finite() || value < 0.0 {
            return false;
        }
        self.min_exposure_time = value;
        true
    }

    /// Exposure time with the global adjustment applied
    pub fn exposure_time(&self) -> f32 {
        self.time_for_adjustment(self.adjustment)
    }

    pub(crate) fn time_for_adjustment(&self, adjustment: i32) -> f32 {
        let denominator = i32::from(self.increment.denominator());
        self.floor_time(self.base_time * exp2_stops(adjustment, denominator))
    }

    pub(crate) fn floor_time(&self, time: f32) -> f32 {
        time.max(self.min_exposure_time)
    }

    // === Paper profile ===

    pub fn active_paper_profile_index(&self) -> Option<usize> {
        self.active_paper_profile
    }

    /// Select a profile of the external store by index
    pub fn set_active_paper_profile_index(&mut self, index: usize) -> bool {
        if index >= self.config.paper_profile_max {
            return false;
        }
        self.active_paper_profile = Some(index);
        true
    }

    pub fn clear_active_paper_profile(&mut self) {
        self.active_paper_profile = None;
    }

    // === Meter readings ===

    /// Store a reading and return its tone at the current exposure time
    pub fn add_meter_reading(&mut self, lux: f32) -> Result<u8, ReadingError> {
        self.readings.add(lux)?;

        #[cfg(feature = "log")]
        log::debug!("exposure: reading {} lux ({} total)", lux, self.readings.count());

        Ok(self.meter_reading_tone(lux))
    }

    /// Tone of a reading at the current exposure time, without storing it
    pub fn meter_reading_tone(&self, lux: f32) -> u8 {
        self.tone_scale().classify(lux, self.exposure_time())
    }

    pub fn lowest_meter_reading(&self) -> Option<f32> {
        self.readings.lowest()
    }

    pub fn meter_readings(&self) -> &MeterReadingSet {
        &self.readings
    }

    pub fn clear_meter_readings(&mut self) {
        self.readings.clear();
    }

    // === Tone graphs ===

    /// Scale the readings are classified on, centered on the base target
    pub fn tone_scale(&self) -> ToneScale {
        ToneScale::new(self.base_pev, self.config.tone.dynamic_range_stops)
    }

    pub fn tone_graph(&self) -> ToneGraph {
        self.absolute_tone_graph(self.exposure_time())
    }

    /// Tone graph with the global adjustment shifted by `adjustment` units
    pub fn adjusted_tone_graph(&self, adjustment: i32) -> ToneGraph {
        let time = self.time_for_adjustment(self.adjustment.saturating_add(adjustment));
        self.absolute_tone_graph(time)
    }

    pub fn absolute_tone_graph(&self, exposure_time: f32) -> ToneGraph {
        self.tone_scale().graph(&self.readings, exposure_time)
    }

    pub fn burn_dodge_tone_graph(&self, entry: &BurnDodgeEntry) -> ToneGraph {
        self.absolute_tone_graph(self.burn_dodge_exposure_time(entry))
    }

    // === Global adjustment ===

    pub fn adj_get(&self) -> i32 {
        self.adjustment
    }

    pub fn adj_set(&mut self, value: i32) {
        self.adjustment = value.clamp(self.adj_min(), self.adj_max());
    }

    pub fn adj_increase(&mut self) {
        self.adjustment = adjust_with_clamp(self.adjustment, 1, self.adj_min(), self.adj_max());
    }

    pub fn adj_decrease(&mut self) {
        self.adjustment = adjust_with_clamp(self.adjustment, -1, self.adj_min(), self.adj_max());
    }

    pub fn adj_min(&self) -> i32 {
        -self.adj_max()
    }

    pub fn adj_max(&self) -> i32 {
        self.config.adjustment_span_stops * i32::from(self.increment.denominator())
    }

    pub fn adj_increment_get(&self) -> AdjustmentIncrement {
        self.increment
    }

    /// Change the increment, keeping the adjustment at the same stops
    pub fn adj_increment_set(&mut self, increment: AdjustmentIncrement) {
        let from = i32::from(self.increment.denominator());
        let to = i32::from(increment.denominator());
        self.increment = increment;
        self.adj_set(rescale_fraction(self.adjustment, from, to));

        #[cfg(feature = "log")]
        log::debug!(
            "exposure: increment 1/{}, adjustment {}",
            to,
            self.adjustment
        );
    }

    pub fn adj_increment_increase(&mut self) {
        self.adj_increment_set(self.increment.next());
    }

    pub fn adj_increment_decrease(&mut self) {
        self.adj_increment_set(self.increment.prev());
    }

    pub fn adj_increment_get_denominator(&self) -> u8 {
        self.increment.denominator()
    }

    // === Contrast ===

    pub fn contrast_grade(&self) -> ContrastGrade {
        self.contrast_grade
    }

    pub fn set_contrast_grade(&mut self, grade: ContrastGrade) {
        self.contrast_grade = grade;
    }

    pub fn contrast_increase(&mut self) {
        self.contrast_grade = self.contrast_grade.harder().unwrap_or(self.contrast_grade);
    }

    pub fn contrast_decrease(&mut self) {
        self.contrast_grade = self.contrast_grade.softer().unwrap_or(self.contrast_grade);
    }

    // === Color channels ===

    pub fn channel_value(&self, index: usize) -> Option<u16> {
        self.channels.get(index).copied()
    }

    pub fn channel_values(&self) -> [u16; CHANNEL_COUNT] {
        self.channels
    }

    /// Seed a channel directly, e.g. from the paper profile
    pub fn set_channel_default_value(&mut self, index: usize, value: u16) {
        let max = self.config.channel.max;
        if let Some(channel) = self.channels.get_mut(index) {
            *channel = value.min(max);
        }
    }

    pub fn channel_increase(&mut self, index: usize, amount: u8) {
        self.channel_adjust(index, i32::from(amount));
    }

    pub fn channel_decrease(&mut self, index: usize, amount: u8) {
        self.channel_adjust(index, -i32::from(amount));
    }

    fn channel_adjust(&mut self, index: usize, amount: i32) {
        if self.mode != ExposureMode::PrintingColor {
            return;
        }
        let step = if self.channel_wide_mode {
            i32::from(self.config.channel.wide_step)
        } else {
            1
        };
        let max = self.config.channel.max;
        if let Some(channel) = self.channels.get_mut(index) {
            *channel = adjust_with_rollover_u16(*channel, amount * step, 0, max);
        }
    }

    pub fn channel_wide_mode(&self) -> bool {
        self.channel_wide_mode
    }

    pub fn set_channel_wide_mode(&mut self, wide_mode: bool) {
        self.channel_wide_mode = wide_mode;
    }

    // === Burn/dodge ===

    pub fn burn_dodge(&self) -> &BurnDodgeList {
        &self.burn_dodge
    }

    pub fn burn_dodge_count(&self) -> usize {
        self.burn_dodge.count()
    }

    pub fn burn_dodge_get(&self, index: usize) -> Option<&BurnDodgeEntry> {
        self.burn_dodge.get(index)
    }

    pub fn burn_dodge_set(
        &mut self,
        entry: BurnDodgeEntry,
        index: usize,
    ) -> Result<(), BurnDodgeError> {
        self.burn_dodge.set(entry, index).inspect_err(|_e| {
            #[cfg(feature = "log")]
            log::warn!("exposure: burn/dodge set at {} rejected: {}", index, _e);
        })
    }

    pub fn burn_dodge_delete(&mut self, index: usize) {
        let _ = self.burn_dodge.delete(index);
    }

    pub fn burn_dodge_delete_all(&mut self) {
        self.burn_dodge.delete_all();
    }

    /// Total exposure time of the area an entry applies to
    pub fn burn_dodge_exposure_time(&self, entry: &BurnDodgeEntry) -> f32 {
        self.floor_time(self.exposure_time() * entry.factor())
    }
}

impl Default for ExposureState {
    fn default() -> Self {
        Self::new()
    }
}
