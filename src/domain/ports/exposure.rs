use core::fmt;

use enlarger_exposure::{BurnDodgeEntry, BurnDodgeError, ContrastFilter, ExposureState, ReadingError};
use heapless::Vec;

use crate::domain::dto::{ExposureSnapshot, ExposureStep};
use crate::domain::entity::PaperProfile;

/// Base step plus one step per burn/dodge entry
pub const PRINTING_SEQUENCE_MAX: usize = enlarger_exposure::config::BURN_DODGE_MAX + 1;

pub type PrintingSequence = Vec<ExposureStep, PRINTING_SEQUENCE_MAX>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExposureUsecaseError {
    /// No profile is stored at the requested index
    ProfileNotFound,
    /// Calibration needs at least one meter reading
    NoReadings,
    /// Calibration target can't be reached with the lowest reading
    CalibrationOutOfRange,
    Reading(ReadingError),
    BurnDodge(BurnDodgeError),
}

impl fmt::Display for ExposureUsecaseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExposureUsecaseError::ProfileNotFound => write!(f, "Paper profile not found"),
            ExposureUsecaseError::NoReadings => write!(f, "No meter readings"),
            ExposureUsecaseError::CalibrationOutOfRange => {
                write!(f, "Calibration target out of range")
            }
            ExposureUsecaseError::Reading(e) => write!(f, "Meter reading rejected: {e}"),
            ExposureUsecaseError::BurnDodge(e) => write!(f, "{e}"),
        }
    }
}

impl From<ReadingError> for ExposureUsecaseError {
    fn from(e: ReadingError) -> Self {
        ExposureUsecaseError::Reading(e)
    }
}

impl From<BurnDodgeError> for ExposureUsecaseError {
    fn from(e: BurnDodgeError) -> Self {
        ExposureUsecaseError::BurnDodge(e)
    }
}

/// Reader interface for the exposure state
pub trait ExposureStateReader {
    fn exposure_state(&self) -> &ExposureState;

    /// Profile selected for the current job, if any
    fn active_paper_profile(&self) -> Option<PaperProfile>;

    /// Number of profiles available for selection
    fn paper_profile_count(&self) -> usize;

    /// Filter head of the active profile
    fn contrast_filter(&self) -> ContrastFilter;

    /// Recipe for the current grade on the active filter head
    fn current_filter_recipe(&self) -> Option<&'static str>;

    fn snapshot(&self) -> ExposureSnapshot;

    fn printing_sequence(&self) -> PrintingSequence;
}

/// Port interface for the exposure usecases
pub trait ExposureUsecasesPort: ExposureStateReader {
    fn exposure_state_mut(&mut self) -> &mut ExposureState;

    fn select_paper_profile(&mut self, index: usize) -> Result<(), ExposureUsecaseError>;

    fn clear_paper_profile(&mut self);

    /// Harder grade, limited to what the active paper supports
    fn contrast_increase(&mut self);

    /// Softer grade, limited to what the active paper supports
    fn contrast_decrease(&mut self);

    /// Store a reading and return its tone zone bit
    fn add_meter_reading(&mut self, lux: f32) -> Result<u8, ExposureUsecaseError>;

    fn add_burn_dodge(&mut self, entry: BurnDodgeEntry) -> Result<usize, ExposureUsecaseError>;

    /// Take the time that delivers the base target as the new base time
    fn apply_calibration(&mut self) -> Result<f32, ExposureUsecaseError>;
}
