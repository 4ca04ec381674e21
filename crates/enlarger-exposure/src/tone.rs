//! Tone graph
//!
//! Readings are placed on a 17 position tonal axis relative to a reference
//! paper exposure. The graph is a plain bitmap in the low 17 bits of a
//! `u32`, laid out as the display consumes it:
//!
//! ```text
//!  1 | 1  1  1  1  1  1       |
//!  6 | 5  4  3  2  1  0  9  8 | 7  6  5  4  3  2  1  0
//! [<]|[ ][ ][ ][ ][ ][ ][ ][ ]|[ ][ ][ ][ ][ ][ ][ ][>]
//!  + |                        |                      -
//! ```
//!
//! Bit 0 is an under-exposed tone beyond the representable range, bit 16 an
//! over-exposed one, bits 1 through 15 are the zones in between.

use core::ops::{BitOr, BitOrAssign};

use micromath::F32Ext as _;

/// Number of intermediate zones
pub const TONE_ZONES: u8 = 15;
/// Bit set for tones under the representable range
pub const TONE_LOWER_BIT: u8 = 0;
/// Bit set for tones over the representable range
pub const TONE_UPPER_BIT: u8 = TONE_ZONES + 1;
/// Zone an exposure exactly at the reference lands on
pub const TONE_CENTER_BIT: u8 = TONE_ZONES / 2 + 1;

/// Paper exposure value
///
/// Absolute exposure reaching the paper, in twelfths of a stop of
/// lux-seconds: `round(12 * log2(lux * seconds))`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Pev(pub i32);

impl Pev {
    /// Twelfths per stop
    pub const UNITS_PER_STOP: i32 = 12;

    /// PEV of `lux` falling on the paper for `seconds`
    #[allow(clippy::cast_possible_truncation)]
    pub fn from_exposure(lux: f32, seconds: f32) -> Option<Self> {
        let quantity = lux * seconds;
        if !quantity.is_finite() || quantity <= 0.0 {
            return None;
        }
        let units = (quantity.log2() * 12.0).round();
        Some(Self(units as i32))
    }

    pub const fn value(self) -> i32 {
        self.0
    }

    /// Exposure in stops (log2 lux-seconds)
    #[allow(clippy::cast_precision_loss)]
    pub fn stops(self) -> f32 {
        self.0 as f32 / 12.0
    }

    /// Exposure time that delivers this PEV at `lux`
    pub fn exposure_time(self, lux: f32) -> Option<f32> {
        if !lux.is_finite() || lux <= 0.0 {
            return None;
        }
        let quantity = crate::math::exp2_stops(self.0, Self::UNITS_PER_STOP);
        Some(quantity / lux)
    }
}

/// Bitmap of tones covered by a set of readings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct ToneGraph(u32);

impl ToneGraph {
    pub const EMPTY: Self = Self(0);
    const MASK: u32 = (1 << (TONE_UPPER_BIT as u32 + 1)) - 1;

    /// Graph with a single tone set; positions past bit 16 are ignored
    pub const fn from_bit(bit: u8) -> Self {
        if bit > TONE_UPPER_BIT {
            return Self::EMPTY;
        }
        Self(1 << bit)
    }

    /// Graph from raw bits, anything above bit 16 is dropped
    pub const fn from_bits(bits: u32) -> Self {
        Self(bits & Self::MASK)
    }

    pub const fn bits(self) -> u32 {
        self.0
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub const fn is_lower_bound(self) -> bool {
        self.is_set(TONE_LOWER_BIT)
    }

    pub const fn is_upper_bound(self) -> bool {
        self.is_set(TONE_UPPER_BIT)
    }

    pub const fn is_set(self, bit: u8) -> bool {
        bit <= TONE_UPPER_BIT && self.0 & (1 << bit) != 0
    }

    /// Intermediate zones only, zone 1 in bit 0
    #[allow(clippy::cast_possible_truncation)]
    pub const fn zones(self) -> u16 {
        ((self.0 >> 1) & 0x7FFF) as u16
    }

    pub fn set(&mut self, bit: u8) {
        *self |= Self::from_bit(bit);
    }
}

impl BitOr for ToneGraph {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for ToneGraph {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl FromIterator<u8> for ToneGraph {
    fn from_iter<I: IntoIterator<Item = u8>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Self::EMPTY, |graph, bit| graph | Self::from_bit(bit))
    }
}

/// Quantizes paper exposure into tone positions
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToneScale {
    /// Exposure that lands on the center zone
    pub reference: Pev,
    /// Stops spanned by the intermediate zones
    pub dynamic_range_stops: f32,
}

impl ToneScale {
    pub const fn new(reference: Pev, dynamic_range_stops: f32) -> Self {
        Self {
            reference,
            dynamic_range_stops,
        }
    }

    /// Width of one zone in stops
    pub fn zone_width(&self) -> f32 {
        self.dynamic_range_stops / f32::from(TONE_ZONES)
    }

    /// Tone position of `lux` exposed for `exposure_time` seconds
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn classify(&self, lux: f32, exposure_time: f32) -> u8 {
        let quantity = lux * exposure_time;
        if quantity.is_nan() || quantity <= 0.0 {
            return TONE_LOWER_BIT;
        }
        if quantity.is_infinite() {
            return TONE_UPPER_BIT;
        }
        let zone_width = self.zone_width();
        if !(zone_width > 0.0) {
            return TONE_CENTER_BIT;
        }

        let offset = quantity.log2() - self.reference.stops();
        let half_span = f32::from(TONE_ZONES / 2);
        let steps = (offset / zone_width).round();
        if steps < -half_span {
            TONE_LOWER_BIT
        } else if steps > half_span {
            TONE_UPPER_BIT
        } else {
            (i32::from(TONE_CENTER_BIT) + steps as i32) as u8
        }
    }

    /// Tone graph of all `readings` exposed for `exposure_time` seconds
    pub fn graph<'a, I>(&self, readings: I, exposure_time: f32) -> ToneGraph
    where
        I: IntoIterator<Item = &'a f32>,
    {
        readings
            .into_iter()
            .map(|lux| self.classify(*lux, exposure_time))
            .collect()
    }
}
