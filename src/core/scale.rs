use serde::{Deserialize, Serialize};

use crate::core::snap::SnapUnit;
use crate::core::types::TimeRange;
use crate::error::{SelectorError, SelectorResult};

/// Linear mapping between ruler pixels and slot units.
///
/// Pixel `0` is the left edge of the first slot; each slot spans
/// `split_width` pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SlotScale {
    split_width: f64,
    slot_count: usize,
}

impl SlotScale {
    pub fn new(split_width: f64, slot_count: usize) -> SelectorResult<Self> {
        if !split_width.is_finite() || split_width <= 0.0 {
            return Err(SelectorError::InvalidGeometry {
                field: "split_width",
                value: split_width,
            });
        }

        Ok(Self {
            split_width,
            slot_count,
        })
    }

    #[must_use]
    pub fn split_width(self) -> f64 {
        self.split_width
    }

    #[must_use]
    pub fn slot_count(self) -> usize {
        self.slot_count
    }

    /// Upper clamp bound for range boundaries.
    #[must_use]
    pub fn max_slot(self) -> f64 {
        self.slot_count as f64
    }

    #[must_use]
    pub fn slot_to_pixel(self, slot: f64) -> f64 {
        slot * self.split_width
    }

    #[must_use]
    pub fn pixel_to_slot(self, pixel: f64) -> f64 {
        pixel / self.split_width
    }

    /// Full ruler width: one `split_width` per slot.
    #[must_use]
    pub fn ruler_width_px(self) -> f64 {
        self.slot_to_pixel(self.max_slot())
    }

    /// Pixel size of one snap step.
    #[must_use]
    pub fn snap_width_px(self, snap: SnapUnit) -> f64 {
        snap.get() * self.split_width
    }

    /// Left offset and width of the box that visualizes `range`.
    #[must_use]
    pub fn range_box_px(self, range: TimeRange) -> SelectionBox {
        SelectionBox {
            left_px: self.slot_to_pixel(range.start()),
            width_px: self.slot_to_pixel(range.len()),
        }
    }

    /// Clamps a single boundary into `[0, slot_count]`.
    #[must_use]
    pub fn clamp_slot(self, slot: f64) -> f64 {
        slot.clamp(0.0, self.max_slot())
    }

    /// Clamps both boundaries of `range` into `[0, slot_count]`.
    #[must_use]
    pub fn clamp_range(self, range: TimeRange) -> TimeRange {
        TimeRange::new(self.clamp_slot(range.start()), self.clamp_slot(range.end()))
    }

    /// Horizontal scroll offset that brings `slot` to the left edge, clamped
    /// to the ruler.
    #[must_use]
    pub fn scroll_offset_for_slot(self, slot: f64) -> f64 {
        self.slot_to_pixel(self.clamp_slot(slot))
    }
}

/// Pixel placement of the selection box inside the ruler.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SelectionBox {
    pub left_px: f64,
    pub width_px: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pixel_slot_mapping_is_linear() {
        let scale = SlotScale::new(100.0, 24).expect("valid scale");
        assert_eq!(scale.pixel_to_slot(37.0), 0.37);
        assert_eq!(scale.slot_to_pixel(9.5), 950.0);
        assert_eq!(scale.ruler_width_px(), 2400.0);
    }

    #[test]
    fn box_spans_range_width() {
        let scale = SlotScale::new(50.0, 24).expect("valid scale");
        let selection = scale.range_box_px(TimeRange::new(9.0, 10.5));
        assert_eq!(selection.left_px, 450.0);
        assert_eq!(selection.width_px, 75.0);
    }

    #[test]
    fn rejects_non_positive_split_width() {
        let err = SlotScale::new(0.0, 24).expect_err("zero split width");
        assert!(matches!(
            err,
            SelectorError::InvalidGeometry {
                field: "split_width",
                ..
            }
        ));
        assert!(SlotScale::new(f64::INFINITY, 24).is_err());
    }

    #[test]
    fn clamp_range_pulls_boundaries_onto_ruler() {
        let scale = SlotScale::new(100.0, 24).expect("valid scale");
        assert_eq!(scale.clamp_range(TimeRange::new(-3.0, 2.0)).as_tuple(), (0.0, 2.0));
        assert_eq!(scale.clamp_range(TimeRange::new(20.0, 30.0)).as_tuple(), (20.0, 24.0));
        assert_eq!(scale.clamp_range(TimeRange::new(30.0, 40.0)).as_tuple(), (24.0, 24.0));
    }
}
