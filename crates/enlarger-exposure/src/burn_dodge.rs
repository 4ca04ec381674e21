//! Burn and dodge adjustments
//!
//! Each entry is a fractional stop applied to part of the print at its own
//! contrast grade. Entries are kept dense and in the order the operator
//! added them, since that is the order they are printed in.

use core::fmt;

use heapless::Vec;

use crate::config::BURN_DODGE_MAX;
use crate::contrast::ContrastGrade;

/// Localized exposure adjustment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BurnDodgeEntry {
    pub contrast_grade: ContrastGrade,
    /// Signed stop numerator, positive burns and negative dodges
    pub numerator: i8,
    pub denominator: u8,
}

impl BurnDodgeEntry {
    pub const fn new(contrast_grade: ContrastGrade, numerator: i8, denominator: u8) -> Self {
        Self {
            contrast_grade,
            numerator,
            denominator,
        }
    }

    pub const fn is_burn(&self) -> bool {
        self.numerator > 0 && self.denominator > 0
    }

    pub const fn is_dodge(&self) -> bool {
        self.numerator < 0 && self.denominator > 0
    }

    /// Exposure factor of this adjustment, 1.0 for a zero denominator
    pub fn factor(&self) -> f32 {
        crate::math::exp2_stops(i32::from(self.numerator), i32::from(self.denominator))
    }
}

/// Error changing the burn/dodge list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BurnDodgeError {
    /// Index is past the end of the list
    IndexOutOfRange,
    /// List already holds the maximum number of entries
    ListFull,
}

impl fmt::Display for BurnDodgeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BurnDodgeError::IndexOutOfRange => write!(f, "Burn/dodge index out of range"),
            BurnDodgeError::ListFull => write!(f, "Burn/dodge list is full"),
        }
    }
}

/// Ordered list of at most [`BURN_DODGE_MAX`] entries
#[derive(Debug, Clone, Default)]
pub struct BurnDodgeList {
    entries: Vec<BurnDodgeEntry, BURN_DODGE_MAX>,
}

impl BurnDodgeList {
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    pub fn count(&self) -> usize {
        self.entries.len()
    }

    pub fn is_full(&self) -> bool {
        self.entries.is_full()
    }

    pub fn get(&self, index: usize) -> Option<&BurnDodgeEntry> {
        self.entries.get(index)
    }

    /// Replace the entry at `index`, or append when `index == count()`
    pub fn set(&mut self, entry: BurnDodgeEntry, index: usize) -> Result<(), BurnDodgeError> {
        if let Some(slot) = self.entries.get_mut(index) {
            *slot = entry;
            return Ok(());
        }
        if index != self.entries.len() {
            return Err(BurnDodgeError::IndexOutOfRange);
        }
        self.entries
            .push(entry)
            .map_err(|_| BurnDodgeError::ListFull)
    }

    /// Remove the entry at `index`, shifting later entries down
    ///
    /// Out of range indices are ignored.
    pub fn delete(&mut self, index: usize) -> Option<BurnDodgeEntry> {
        if index < self.entries.len() {
            Some(self.entries.remove(index))
        } else {
            None
        }
    }

    pub fn delete_all(&mut self) {
        self.entries.clear();
    }

    pub fn iter(&self) -> core::slice::Iter<'_, BurnDodgeEntry> {
        self.entries.iter()
    }
}
