use enlarger_exposure::ExposureConfig;

/// Number of paper profiles the store can hold
pub const PAPER_PROFILES_MAX: usize = 16;

/// Pending menu actions from the input layer
pub const ACTION_CHANNEL_SIZE: usize = 8;

/// Pending events from the meter probe
pub const METER_CHANNEL_SIZE: usize = 8;

/// Limits of the numeric editors, in the units they display
pub struct EditorConfig {
    /// Base time editor, tenths of a second
    pub base_time_min: u16,
    pub base_time_max: u16,
    /// Minimum exposure editor, hundredths of a second
    pub min_exposure_min: u16,
    pub min_exposure_max: u16,
}

pub const EDITOR: EditorConfig = EditorConfig {
    base_time_min: 1,
    base_time_max: 9999,
    min_exposure_min: 0,
    min_exposure_max: 999,
};

/// Engine defaults, sized for the device's profile store
pub const EXPOSURE: ExposureConfig = ExposureConfig {
    paper_profile_max: PAPER_PROFILES_MAX,
    ..ExposureConfig::new()
};
