//! Boundary configuration of the exposure engine
//!
//! Values that the firmware picks per device. Capacities that size
//! `heapless` collections are plain constants, everything else is carried
//! by [`ExposureConfig`] so a device can override it.

use crate::contrast::ContrastGrade;
use crate::increment::AdjustmentIncrement;

/// Maximum number of burn/dodge entries per exposure
pub const BURN_DODGE_MAX: usize = 9;

/// Maximum number of meter readings kept while metering
pub const METER_READINGS_MAX: usize = 32;

/// Number of per-channel color trims
pub const CHANNEL_COUNT: usize = 3;

/// Tone graph quantization
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToneConfig {
    /// Stops covered by the 15 intermediate zones, centered on the reference
    pub dynamic_range_stops: f32,
}

/// Color channel trim limits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChannelConfig {
    /// Highest valid trim value (lowest is 0)
    pub max: u16,
    /// Per-press step multiplier in wide mode
    pub wide_step: u16,
}

/// Engine configuration
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExposureConfig {
    pub tone: ToneConfig,
    pub channel: ChannelConfig,
    /// Stops reachable in either direction by the global adjustment
    pub adjustment_span_stops: i32,
    /// Number of profiles in the external store
    pub paper_profile_max: usize,
    /// Nominal exposure time in seconds
    pub default_base_time: f32,
    /// Shortest exposure the enlarger fires reliably, in seconds
    pub default_min_exposure_time: f32,
    pub default_increment: AdjustmentIncrement,
    pub default_contrast_grade: ContrastGrade,
    /// Default calibration targets, in twelfths of a stop
    pub default_base_pev: i32,
    pub default_strip_pev: i32,
}

impl ExposureConfig {
    pub const fn new() -> Self {
        Self {
            tone: ToneConfig {
                dynamic_range_stops: 7.5,
            },
            channel: ChannelConfig {
                max: 999,
                wide_step: 10,
            },
            adjustment_span_stops: 12,
            paper_profile_max: 16,
            default_base_time: 15.0,
            default_min_exposure_time: 0.5,
            default_increment: AdjustmentIncrement::Whole,
            default_contrast_grade: ContrastGrade::Grade2,
            // 4 lux-seconds
            default_base_pev: 24,
            default_strip_pev: 24,
        }
    }
}

impl Default for ExposureConfig {
    fn default() -> Self {
        Self::new()
    }
}

pub const EXPOSURE: ExposureConfig = ExposureConfig::new();
