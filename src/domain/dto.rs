use embassy_time::Duration;
use enlarger_exposure::config::CHANNEL_COUNT;
use enlarger_exposure::{ContrastGrade, ExposureMode, ExposureState};
use serde::Serialize;

/// Abstract menu action decoded from the keypad, encoder or a USB keyboard
///
/// This is a source-neutral representation of what the operator did,
/// independent of which key or knob produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    /// Accept the current screen or value
    Select,
    /// Cancel and go back
    Home,
    /// Contrast up key
    Next,
    /// Contrast down key
    Prev,
    /// Exposure up key
    Up,
    /// Exposure down key
    Down,
    /// Encoder turned clockwise by a number of detents
    ValueInc(u8),
    /// Encoder turned counter-clockwise by a number of detents
    ValueDec(u8),
}

/// Event produced by the meter probe
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MeterEvent {
    /// New reading in lux
    Reading(f32),
    /// Discard all readings of the current job
    Clear,
}

/// What an exposure step does to the print
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExposureStepKind {
    /// Main exposure of the whole print
    Base,
    /// Extra exposure of part of the print after the base exposure
    Burn,
    /// Part of the base exposure during which an area is held back
    Dodge,
}

/// One step of the printing sequence
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExposureStep {
    pub kind: ExposureStepKind,
    pub contrast_grade: ContrastGrade,
    /// Filter recipe for the step's grade on the active filter head
    pub filter_recipe: Option<&'static str>,
    pub time: Duration,
}

/// A snapshot of the exposure state for the display and diagnostics
///
/// Times are in milliseconds so the snapshot encodes without floats.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExposureSnapshot {
    pub mode: ExposureMode,
    pub exposure_time_ms: u32,
    pub base_time_ms: u32,
    pub adjustment: i32,
    pub increment_denominator: u8,
    pub contrast_grade: &'static str,
    pub filter_recipe: Option<&'static str>,
    pub tone_graph: u32,
    pub reading_count: usize,
    pub burn_dodge_count: usize,
    pub channels: [u16; CHANNEL_COUNT],
    pub calibration_pev: i32,
    pub paper_profile: Option<usize>,
}

impl ExposureSnapshot {
    /// Capture the state, with the recipe resolved by the caller
    pub fn capture(state: &ExposureState, filter_recipe: Option<&'static str>) -> Self {
        Self {
            mode: state.mode(),
            exposure_time_ms: seconds_to_millis(state.exposure_time()),
            base_time_ms: seconds_to_millis(state.base_time()),
            adjustment: state.adj_get(),
            increment_denominator: state.adj_increment_get_denominator(),
            contrast_grade: state.contrast_grade().label(),
            filter_recipe,
            tone_graph: state.tone_graph().bits(),
            reading_count: state.meter_readings().count(),
            burn_dodge_count: state.burn_dodge_count(),
            channels: state.channel_values(),
            calibration_pev: state.calibration_pev().value(),
            paper_profile: state.active_paper_profile_index(),
        }
    }

    /// Encode as JSON into `buf`, returning the number of bytes written
    pub fn encode(&self, buf: &mut [u8]) -> Result<usize, serde_json_core::ser::Error> {
        serde_json_core::to_slice(self, buf)
    }
}

/// Convert seconds to whole milliseconds, saturating
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub(crate) fn seconds_to_millis(seconds: f32) -> u32 {
    if !(seconds > 0.0) {
        return 0;
    }
    let millis = seconds * 1000.0 + 0.5;
    if millis >= u32::MAX as f32 {
        u32::MAX
    } else {
        millis as u32
    }
}

/// Convert seconds to a timer duration
pub(crate) fn seconds_to_duration(seconds: f32) -> Duration {
    Duration::from_millis(u64::from(seconds_to_millis(seconds)))
}
