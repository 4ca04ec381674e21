//! Arithmetic for edited values and stop fractions
//!
//! Two distinct behaviors are used by the controller:
//! - rollover: raw value editors and color channel trims wrap around
//! - clamp: the global adjustment and the contrast grade stop at the bounds

use micromath::F32Ext as _;

/// Wrap `value + delta` into the circular range `[low, high]`
///
/// Returns `value` unchanged when `low > high`.
#[inline]
fn rollover(value: i32, delta: i32, low: i32, high: i32) -> i32 {
    if low > high {
        return value;
    }
    let width = i64::from(high) - i64::from(low) + 1;
    let offset = i64::from(value) - i64::from(low) + i64::from(delta);
    // Result is within [low, high], so it fits back into i32
    #[allow(clippy::cast_possible_truncation)]
    let wrapped = (i64::from(low) + offset.rem_euclid(width)) as i32;
    wrapped
}

/// Adjust an 8-bit value by `delta`, wrapping within `[low, high]`
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn adjust_with_rollover_u8(value: u8, delta: i32, low: u8, high: u8) -> u8 {
    if low > high {
        return value;
    }
    rollover(i32::from(value), delta, i32::from(low), i32::from(high)) as u8
}

/// Adjust a 16-bit value by `delta`, wrapping within `[low, high]`
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn adjust_with_rollover_u16(value: u16, delta: i32, low: u16, high: u16) -> u16 {
    if low > high {
        return value;
    }
    rollover(i32::from(value), delta, i32::from(low), i32::from(high)) as u16
}

/// Adjust a value by `delta`, saturating at `[low, high]`
#[inline]
pub fn adjust_with_clamp(value: i32, delta: i32, low: i32, high: i32) -> i32 {
    if low > high {
        return value;
    }
    value.saturating_add(delta).clamp(low, high)
}

/// `2^stops`, exact when `stops` is a whole number
///
/// Whole stops are applied by repeated doubling so that one full stop on a
/// whole-stop increment gives exactly twice the time.
#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
pub fn exp2_stops(numerator: i32, denominator: i32) -> f32 {
    if denominator == 0 {
        return 1.0;
    }
    let whole = numerator / denominator;
    let remainder = numerator % denominator;

    let mut factor = 1.0_f32;
    let magnitude = whole.unsigned_abs().min(127);
    for _ in 0..magnitude {
        factor *= 2.0;
    }
    if whole < 0 {
        factor = 1.0 / factor;
    }
    if remainder != 0 {
        factor *= 2.0_f32.powf(remainder as f32 / denominator as f32);
    }
    factor
}

/// Rescale an integer count of `1/from` units into `1/to` units
///
/// Rounds half away from zero.
pub fn rescale_fraction(value: i32, from: i32, to: i32) -> i32 {
    if from == 0 {
        return value;
    }
    let scaled = i64::from(value) * i64::from(to);
    let from = i64::from(from);
    let rounded = if scaled >= 0 {
        (2 * scaled + from) / (2 * from)
    } else {
        (2 * scaled - from) / (2 * from)
    };
    #[allow(clippy::cast_possible_truncation)]
    let result = rounded.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32;
    result
}
