//! Meter readings collected while metering a negative

use core::fmt;

use heapless::Vec;

use crate::config::METER_READINGS_MAX;

/// Error adding a meter reading
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadingError {
    /// Reading set is at capacity, the reading was rejected
    Full,
    /// Lux value is not a positive finite number
    InvalidLux,
}

impl fmt::Display for ReadingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReadingError::Full => write!(f, "Meter reading set is full"),
            ReadingError::InvalidLux => write!(f, "Invalid lux value"),
        }
    }
}

/// Ordered set of photometric readings in lux
///
/// Keeps the lowest reading cached so the highlight of the print is
/// available without a scan. New readings are rejected once the set is full.
#[derive(Debug, Clone, Default)]
pub struct MeterReadingSet {
    readings: Vec<f32, METER_READINGS_MAX>,
    lowest: Option<f32>,
}

impl MeterReadingSet {
    pub const fn new() -> Self {
        Self {
            readings: Vec::new(),
            lowest: None,
        }
    }

    /// Append a reading
    pub fn add(&mut self, lux: f32) -> Result<(), ReadingError> {
        if !lux.is_finite() || lux <= 0.0 {
            return Err(ReadingError::InvalidLux);
        }
        self.readings.push(lux).map_err(|_| ReadingError::Full)?;
        self.lowest = Some(match self.lowest {
            Some(lowest) if lowest <= lux => lowest,
            _ => lux,
        });
        Ok(())
    }

    /// Lowest reading since the last clear, `None` when empty
    pub fn lowest(&self) -> Option<f32> {
        self.lowest
    }

    pub fn count(&self) -> usize {
        self.readings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.readings.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.readings.is_full()
    }

    pub fn clear(&mut self) {
        self.readings.clear();
        self.lowest = None;
    }

    /// Readings in the order they were taken
    pub fn iter(&self) -> core::slice::Iter<'_, f32> {
        self.readings.iter()
    }

    pub fn as_slice(&self) -> &[f32] {
        &self.readings
    }
}

impl<'a> IntoIterator for &'a MeterReadingSet {
    type Item = &'a f32;
    type IntoIter = core::slice::Iter<'a, f32>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
