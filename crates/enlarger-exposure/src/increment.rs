//! Adjustment increments
//!
//! The global adjustment counts in units of the selected increment, from a
//! twelfth of a stop up to a whole stop.

/// Granularity of the global exposure adjustment and test strip patches
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AdjustmentIncrement {
    Twelfth,
    Sixth,
    Quarter,
    Third,
    Half,
    Whole,
}

const INCREMENTS: [AdjustmentIncrement; 6] = [
    AdjustmentIncrement::Twelfth,
    AdjustmentIncrement::Sixth,
    AdjustmentIncrement::Quarter,
    AdjustmentIncrement::Third,
    AdjustmentIncrement::Half,
    AdjustmentIncrement::Whole,
];

impl AdjustmentIncrement {
    /// Units per stop, used both for display and for converting raw
    /// adjustment units into stops
    pub const fn denominator(self) -> u8 {
        match self {
            Self::Twelfth => 12,
            Self::Sixth => 6,
            Self::Quarter => 4,
            Self::Third => 3,
            Self::Half => 2,
            Self::Whole => 1,
        }
    }

    /// Size of one unit in twelfths of a stop
    pub const fn twelfths(self) -> u8 {
        12 / self.denominator()
    }

    const fn position(self) -> usize {
        match self {
            Self::Twelfth => 0,
            Self::Sixth => 1,
            Self::Quarter => 2,
            Self::Third => 3,
            Self::Half => 4,
            Self::Whole => 5,
        }
    }

    /// Next coarser increment, wrapping from whole back to twelfth
    pub const fn next(self) -> Self {
        INCREMENTS[(self.position() + 1) % INCREMENTS.len()]
    }

    /// Next finer increment, wrapping from twelfth back to whole
    pub const fn prev(self) -> Self {
        INCREMENTS[(self.position() + INCREMENTS.len() - 1) % INCREMENTS.len()]
    }
}
