//! Numeric value editors driven by menu actions
//!
//! An editor works on a local copy of the value. Select hands the edited
//! value back, Home drops it and leaves the caller's value untouched.

use enlarger_exposure::math::{adjust_with_rollover_u8, adjust_with_rollover_u16};

use crate::domain::dto::MenuAction;

/// Largest value the N.DD fixed point editor can show
pub const FIXED_POINT_MAX: u16 = 999;

/// Coarse step of the 16-bit editors
const WIDE_STEP: i32 = 10;

/// Outcome of feeding one action to an editor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorResult<T> {
    /// Still editing
    Pending,
    Accepted(T),
    Cancelled,
}

/// Editor for small values, every key steps by one
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValueEditorU8 {
    value: u8,
    low: u8,
    high: u8,
}

impl ValueEditorU8 {
    pub fn new(value: u8, low: u8, high: u8) -> Self {
        Self { value, low, high }
    }

    pub fn value(&self) -> u8 {
        self.value
    }

    pub fn handle(&mut self, action: MenuAction) -> EditorResult<u8> {
        let delta = match action {
            MenuAction::Select => return EditorResult::Accepted(self.value),
            MenuAction::Home => return EditorResult::Cancelled,
            MenuAction::Next | MenuAction::Up => 1,
            MenuAction::Prev | MenuAction::Down => -1,
            MenuAction::ValueInc(count) => i32::from(count),
            MenuAction::ValueDec(count) => -i32::from(count),
        };
        self.value = adjust_with_rollover_u8(self.value, delta, self.low, self.high);
        EditorResult::Pending
    }
}

/// Editor for wide values, Next and Prev step by ten
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValueEditorU16 {
    value: u16,
    low: u16,
    high: u16,
}

impl ValueEditorU16 {
    pub fn new(value: u16, low: u16, high: u16) -> Self {
        Self { value, low, high }
    }

    /// Editor for an N.DD value in hundredths
    ///
    /// The range is limited to what three digits can show and the initial
    /// value is pulled into the range.
    pub fn for_fixed_point(value: u16, low: u16, high: u16) -> Self {
        let high = high.min(FIXED_POINT_MAX);
        let low = low.min(high);
        Self {
            value: value.clamp(low, high),
            low,
            high,
        }
    }

    pub fn value(&self) -> u16 {
        self.value
    }

    pub fn handle(&mut self, action: MenuAction) -> EditorResult<u16> {
        let delta = match action {
            MenuAction::Select => return EditorResult::Accepted(self.value),
            MenuAction::Home => return EditorResult::Cancelled,
            MenuAction::Up => 1,
            MenuAction::Down => -1,
            MenuAction::Next => WIDE_STEP,
            MenuAction::Prev => -WIDE_STEP,
            MenuAction::ValueInc(count) => i32::from(count),
            MenuAction::ValueDec(count) => -i32::from(count),
        };
        self.value = adjust_with_rollover_u16(self.value, delta, self.low, self.high);
        EditorResult::Pending
    }
}
