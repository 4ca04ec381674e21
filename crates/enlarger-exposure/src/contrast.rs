//! Contrast grades and enlarger filter recipes
//!
//! Static catalog mapping a paper contrast grade and a filter head model to
//! the Yellow+Magenta dichroic setting that reproduces it.

use serde::{Deserialize, Serialize};

/// Marker shown for grades a filter head has no published setting for
pub const FILTER_UNAVAILABLE: &str = "--";

/// Paper contrast grade, half-step ordinal from 00 to 5
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum ContrastGrade {
    Grade00 = 0,
    Grade0 = 1,
    Grade0Half = 2,
    Grade1 = 3,
    Grade1Half = 4,
    Grade2 = 5,
    Grade2Half = 6,
    Grade3 = 7,
    Grade3Half = 8,
    Grade4 = 9,
    Grade4Half = 10,
    Grade5 = 11,
}

/// Number of contrast grades
pub const CONTRAST_GRADE_COUNT: usize = 12;

/// Grades that exist on graded (non variable contrast) paper
pub const WHOLE_GRADES: [ContrastGrade; 7] = [
    ContrastGrade::Grade00,
    ContrastGrade::Grade0,
    ContrastGrade::Grade1,
    ContrastGrade::Grade2,
    ContrastGrade::Grade3,
    ContrastGrade::Grade4,
    ContrastGrade::Grade5,
];

const ALL_GRADES: [ContrastGrade; CONTRAST_GRADE_COUNT] = [
    ContrastGrade::Grade00,
    ContrastGrade::Grade0,
    ContrastGrade::Grade0Half,
    ContrastGrade::Grade1,
    ContrastGrade::Grade1Half,
    ContrastGrade::Grade2,
    ContrastGrade::Grade2Half,
    ContrastGrade::Grade3,
    ContrastGrade::Grade3Half,
    ContrastGrade::Grade4,
    ContrastGrade::Grade4Half,
    ContrastGrade::Grade5,
];

const GRADE_STR: [&str; CONTRAST_GRADE_COUNT] = [
    "00", "0", "1/2", "1", "1-1/2", "2", "2-1/2", "3", "3-1/2", "4", "4-1/2", "5",
];

impl ContrastGrade {
    pub const MIN: Self = Self::Grade00;
    pub const MAX: Self = Self::Grade5;

    /// Grade from its ordinal, `None` when out of range
    pub const fn from_index(index: u8) -> Option<Self> {
        if (index as usize) < CONTRAST_GRADE_COUNT {
            Some(ALL_GRADES[index as usize])
        } else {
            None
        }
    }

    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Next harder grade, `None` at grade 5
    pub const fn harder(self) -> Option<Self> {
        Self::from_index(self.index() + 1)
    }

    /// Next softer grade, `None` at grade 00
    pub const fn softer(self) -> Option<Self> {
        match self.index().checked_sub(1) {
            Some(index) => Self::from_index(index),
            None => None,
        }
    }

    /// Whether this is one of the half grades (1/2 through 4-1/2)
    pub const fn is_half_grade(self) -> bool {
        let index = self.index();
        index >= 2 && index.is_multiple_of(2)
    }

    pub const fn label(self) -> &'static str {
        GRADE_STR[self as usize]
    }
}

/// Enlarger filter head model used to reach a contrast grade
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[repr(u8)]
pub enum ContrastFilter {
    /// Contrast comes from the paper grade alone
    #[default]
    Regular = 0,
    Durst170M = 1,
    Durst130M = 2,
    Kodak = 3,
    FocomatV35 = 4,
    Meopta = 5,
}

/// Number of filter head models
pub const CONTRAST_FILTER_COUNT: usize = 6;

const FILTER_NAME_STR: [&str; CONTRAST_FILTER_COUNT] = [
    "Regular",
    "Durst (170M)",
    "Durst (130M)",
    "Kodak",
    "Focomat V35",
    "Meopta",
];

const RECIPES_DURST_170M: [&str; CONTRAST_GRADE_COUNT] = [
    "115Y+0M", "100Y+5M", "88Y+7M", "75Y+10M", "65Y+15M", "52Y+20M", "42Y+28M", "34Y+45M",
    "27Y+60M", "17Y+76M", "10Y+105M", "0Y+170M",
];

const RECIPES_DURST_130M: [&str; CONTRAST_GRADE_COUNT] = [
    "120Y+0M", "88Y+6M", "78Y+8M", "64Y+12M", "53Y+17M", "45Y+24M", "35Y+31M", "24Y+42M",
    "17Y+53M", "10Y+69M", "6Y+89M", "0Y+130M",
];

const RECIPES_KODAK: [&str; CONTRAST_GRADE_COUNT] = [
    "162Y+0M", "90Y+0M", "78Y+5M", "68Y+10M", "49Y+23M", "41Y+32M", "32Y+42M", "23Y+56M",
    "15Y+75M", "6Y+102M", "0Y+150M", "0Y+200M",
];

const RECIPES_FOCOMAT_V35: [&str; CONTRAST_GRADE_COUNT] = [
    "135Y+6M", "105Y+12M", "77Y+11M", "67Y+17M", "52Y+28M", "39Y+43M", "32Y+51M", "23Y+62M",
    "14Y+79M", "10Y+95M", "15Y+154M", "0Y+200M",
];

// Meopta never published half-grade settings
const RECIPES_MEOPTA: [&str; CONTRAST_GRADE_COUNT] = [
    "105Y+0M",
    "85Y+10M",
    FILTER_UNAVAILABLE,
    "60Y+20M",
    FILTER_UNAVAILABLE,
    "40Y+45M",
    FILTER_UNAVAILABLE,
    "20Y+60M",
    FILTER_UNAVAILABLE,
    "10Y+75M",
    FILTER_UNAVAILABLE,
    "0Y+200M",
];

impl ContrastFilter {
    pub const fn from_index(index: u8) -> Option<Self> {
        match index {
            0 => Some(Self::Regular),
            1 => Some(Self::Durst170M),
            2 => Some(Self::Durst130M),
            3 => Some(Self::Kodak),
            4 => Some(Self::FocomatV35),
            5 => Some(Self::Meopta),
            _ => None,
        }
    }

    pub const fn name(self) -> &'static str {
        FILTER_NAME_STR[self as usize]
    }

    /// Filter recipe for a grade
    ///
    /// `None` for [`ContrastFilter::Regular`], [`FILTER_UNAVAILABLE`] where
    /// the head has no data for the grade.
    pub const fn recipe(self, grade: ContrastGrade) -> Option<&'static str> {
        let table = match self {
            Self::Regular => return None,
            Self::Durst170M => &RECIPES_DURST_170M,
            Self::Durst130M => &RECIPES_DURST_130M,
            Self::Kodak => &RECIPES_KODAK,
            Self::FocomatV35 => &RECIPES_FOCOMAT_V35,
            Self::Meopta => &RECIPES_MEOPTA,
        };
        Some(table[grade as usize])
    }
}

/// Label for a raw grade ordinal, empty when out of range
pub fn contrast_grade_str(grade: u8) -> &'static str {
    ContrastGrade::from_index(grade).map_or("", ContrastGrade::label)
}

/// Name for a raw filter ordinal, empty when out of range
pub fn contrast_filter_name_str(filter: u8) -> &'static str {
    ContrastFilter::from_index(filter).map_or("", ContrastFilter::name)
}

/// Filter recipe for a raw grade ordinal, `None` when out of range
pub fn contrast_filter_grade_str(filter: ContrastFilter, grade: u8) -> Option<&'static str> {
    ContrastGrade::from_index(grade).and_then(|grade| filter.recipe(grade))
}
