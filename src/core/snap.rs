use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::error::{SelectorError, SelectorResult};

/// Quantization step for drag-derived boundaries, in slot units.
///
/// Always finite and strictly positive.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct SnapUnit(f64);

impl SnapUnit {
    /// One whole slot.
    pub const WHOLE_SLOT: Self = Self(1.0);

    pub fn new(value: f64) -> SelectorResult<Self> {
        if !value.is_finite() || value <= 0.0 {
            return Err(SelectorError::InvalidSnap(value));
        }
        Ok(Self(value))
    }

    #[must_use]
    pub fn get(self) -> f64 {
        self.0
    }
}

impl Default for SnapUnit {
    fn default() -> Self {
        Self::WHOLE_SLOT
    }
}

impl TryFrom<f64> for SnapUnit {
    type Error = SelectorError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<SnapUnit> for f64 {
    fn from(unit: SnapUnit) -> Self {
        unit.0
    }
}

/// Rounds `value` to the nearest multiple of `snap`, ties away from zero.
///
/// Quantization runs in decimal arithmetic so that e.g. `10.37` with a
/// `0.25` unit lands on exactly `10.25` rather than a float neighbor.
/// Values outside the decimal range fall back to float rounding.
#[must_use]
pub fn snap_to_grid(value: f64, snap: SnapUnit) -> f64 {
    if !value.is_finite() {
        return value;
    }
    snap_decimal(value, snap.get()).unwrap_or_else(|| (value / snap.get()).round() * snap.get())
}

fn snap_decimal(value: f64, snap: f64) -> Option<f64> {
    let value = Decimal::from_f64(value)?;
    let snap = Decimal::from_f64(snap)?;
    let steps = value
        .checked_div(snap)?
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    steps.checked_mul(snap)?.to_f64()
}

/// `true` when `value` is a multiple of `snap` within `tolerance`.
#[must_use]
pub fn is_on_grid(value: f64, snap: SnapUnit, tolerance: f64) -> bool {
    let steps = value / snap.get();
    (steps - steps.round()).abs() * snap.get() <= tolerance
}
