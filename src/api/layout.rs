use chrono::{Local, Timelike};

use crate::core::SelectionBox;

use super::TimeRangeSelector;

impl TimeRangeSelector {
    /// Width of the whole ruler in pixels.
    #[must_use]
    pub fn ruler_width_px(&self) -> f64 {
        self.params.scale.ruler_width_px()
    }

    /// Pixel size of one snap step.
    #[must_use]
    pub fn snap_width_px(&self) -> f64 {
        self.params.scale.snap_width_px(self.config.snap)
    }

    #[must_use]
    pub fn box_height_px(&self) -> f64 {
        self.config.geometry.height
    }

    /// Placement of the selection box, `None` without a selection.
    #[must_use]
    pub fn selection_box(&self) -> Option<SelectionBox> {
        self.value()
            .map(|range| self.params.scale.range_box_px(range))
    }

    /// Label of the slot under `x_px`.
    #[must_use]
    pub fn slot_label_at(&self, x_px: f64) -> Option<&str> {
        let slot = self.params.scale.pixel_to_slot(x_px);
        if !slot.is_finite() || slot < 0.0 {
            return None;
        }
        self.slots.get(slot.floor() as usize).map(String::as_str)
    }

    /// Scroll offset that brings slot `hour` to the left edge of the viewport.
    ///
    /// Meaningful for hourly rulers such as `day`; clamped to the ruler.
    #[must_use]
    pub fn initial_scroll_offset_px(&self, hour: u32) -> f64 {
        self.params.scale.scroll_offset_for_slot(f64::from(hour))
    }

    /// [`TimeRangeSelector::initial_scroll_offset_px`] for the current local hour.
    ///
    /// Reads the wall clock once; call it at mount time only.
    #[must_use]
    pub fn initial_scroll_offset_px_now(&self) -> f64 {
        self.initial_scroll_offset_px(Local::now().hour())
    }
}
