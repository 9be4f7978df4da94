use serde::{Deserialize, Serialize};

use crate::error::{SelectorError, SelectorResult};

/// Half-open interval `[start, end)` measured in slot units.
///
/// Fractional values are allowed when the snap unit is finer than one slot.
/// Construction normalizes inverted bounds so `start <= end` always holds.
/// Serialized as a two-element array, e.g. `[9.0, 10.5]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "(f64, f64)", into = "(f64, f64)")]
pub struct TimeRange {
    start: f64,
    end: f64,
}

impl TimeRange {
    #[must_use]
    pub fn new(start: f64, end: f64) -> Self {
        if start <= end {
            Self { start, end }
        } else {
            Self {
                start: end,
                end: start,
            }
        }
    }

    /// Builds a range and rejects non-finite bounds.
    pub fn try_new(start: f64, end: f64) -> SelectorResult<Self> {
        if !start.is_finite() || !end.is_finite() {
            return Err(SelectorError::InvalidData(
                "time range bounds must be finite".to_owned(),
            ));
        }
        Ok(Self::new(start, end))
    }

    #[must_use]
    pub fn start(self) -> f64 {
        self.start
    }

    #[must_use]
    pub fn end(self) -> f64 {
        self.end
    }

    #[must_use]
    pub fn len(self) -> f64 {
        self.end - self.start
    }

    /// Zero-width ranges are valid selections but render as an empty box.
    #[must_use]
    pub fn is_empty(self) -> bool {
        self.len() == 0.0
    }

    #[must_use]
    pub fn is_finite(self) -> bool {
        self.start.is_finite() && self.end.is_finite()
    }

    /// `true` when `value` falls inside `[start, end]`.
    #[must_use]
    pub fn contains(self, value: f64) -> bool {
        self.start <= value && value <= self.end
    }

    #[must_use]
    pub fn translated(self, delta: f64) -> Self {
        Self::new(self.start + delta, self.end + delta)
    }

    #[must_use]
    pub fn as_tuple(self) -> (f64, f64) {
        (self.start, self.end)
    }
}

impl From<(f64, f64)> for TimeRange {
    fn from((start, end): (f64, f64)) -> Self {
        Self::new(start, end)
    }
}

impl From<TimeRange> for (f64, f64) {
    fn from(range: TimeRange) -> Self {
        (range.start, range.end)
    }
}

/// Pixel geometry of the slot track.
///
/// Missing fields deserialize to the stock 100x100 geometry.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackGeometry {
    /// Width of one slot in pixels.
    pub split_width: f64,
    /// Height of the selection box in pixels.
    pub height: f64,
}

impl TrackGeometry {
    #[must_use]
    pub fn new(split_width: f64, height: f64) -> Self {
        Self {
            split_width,
            height,
        }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.invalid_field().is_none()
    }

    /// Fails on the first dimension that is not finite and positive.
    pub fn validate(self) -> SelectorResult<Self> {
        match self.invalid_field() {
            Some((field, value)) => Err(SelectorError::InvalidGeometry { field, value }),
            None => Ok(self),
        }
    }

    fn invalid_field(self) -> Option<(&'static str, f64)> {
        [("split_width", self.split_width), ("height", self.height)]
            .into_iter()
            .find(|&(_, value)| !value.is_finite() || value <= 0.0)
    }
}

impl Default for TrackGeometry {
    fn default() -> Self {
        Self {
            split_width: 100.0,
            height: 100.0,
        }
    }
}
