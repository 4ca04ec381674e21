use enlarger_exposure::config::CHANNEL_COUNT;
use enlarger_exposure::{ContrastFilter, ContrastGrade};
use heapless::String;
use serde::{Deserialize, Serialize};

/// Paper profile as supplied by the external profile store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaperProfile {
    pub name: String<32>,
    /// Filter head the profile was calibrated with
    pub contrast_filter: ContrastFilter,
    /// Color channel values to start a color print from
    pub channel_defaults: [u16; CHANNEL_COUNT],
    /// Softest grade the paper supports
    pub grade_min: ContrastGrade,
    /// Hardest grade the paper supports
    pub grade_max: ContrastGrade,
}

impl PaperProfile {
    /// Create a variable contrast profile covering every grade
    pub fn new(name: &str, contrast_filter: ContrastFilter) -> Self {
        let mut profile_name = String::new();
        for c in name.chars() {
            if profile_name.push(c).is_err() {
                break;
            }
        }
        Self {
            name: profile_name,
            contrast_filter,
            channel_defaults: [0; CHANNEL_COUNT],
            grade_min: ContrastGrade::MIN,
            grade_max: ContrastGrade::MAX,
        }
    }

    #[must_use]
    pub fn with_channel_defaults(mut self, defaults: [u16; CHANNEL_COUNT]) -> Self {
        self.channel_defaults = defaults;
        self
    }

    #[must_use]
    pub fn with_grade_range(mut self, grade_min: ContrastGrade, grade_max: ContrastGrade) -> Self {
        self.grade_min = grade_min.min(grade_max);
        self.grade_max = grade_max.max(grade_min);
        self
    }

    /// Closest grade to `grade` this paper supports
    pub fn constrain_grade(&self, grade: ContrastGrade) -> ContrastGrade {
        grade.clamp(self.grade_min, self.grade_max)
    }
}
