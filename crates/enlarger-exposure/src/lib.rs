#![no_std]

//! Enlarger exposure engine
//!
//! Architecture layers:
//! - `contrast` - Contrast grade labels and dichroic filter recipes
//! - `math` - Rollover and clamp arithmetic used by value editors and axes
//! - `increment` - Fractional-stop granularity of the global adjustment
//! - `readings` - Bounded set of meter readings taken during metering
//! - `tone` - Tone graph bitmap and reading classification
//! - `burn_dodge` - Localized exposure adjustments
//! - `state` - [`ExposureState`], the per print job orchestrator
//! - `config` - Boundary configuration of the engine
//!
//! The engine is a plain single-owner value. Nothing here blocks or locks;
//! asynchronous reading sources must be funneled into the owning context.

pub mod burn_dodge;
pub mod config;
pub mod contrast;
pub mod increment;
pub mod math;
pub mod readings;
pub mod state;
pub mod tone;

mod calibration;
mod test_strip;

pub use burn_dodge::{BurnDodgeEntry, BurnDodgeError, BurnDodgeList};
pub use config::ExposureConfig;
pub use contrast::{ContrastFilter, ContrastGrade};
pub use increment::AdjustmentIncrement;
pub use readings::{MeterReadingSet, ReadingError};
pub use state::{ExposureMode, ExposureState, PevPreset};
pub use tone::{Pev, ToneGraph, ToneScale};
