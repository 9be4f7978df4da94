use tracing::{debug, trace};

use crate::core::TimeRange;
use crate::interaction::{DragMode, DragTarget, click_range, hit_target, interpret_drag};

use super::TimeRangeSelector;

impl TimeRangeSelector {
    /// Starts a drag on `target` at pointer `x_px`.
    ///
    /// Returns `false` (and stays idle) when disabled, when there is no
    /// selection to drag, or when `x_px` is not finite.
    pub fn pointer_down(&mut self, target: DragTarget, x_px: f64) -> bool {
        if self.config.disabled || !x_px.is_finite() {
            return false;
        }
        let Some(anchor) = self.value() else {
            return false;
        };
        let mode = DragMode::from(target);
        self.interaction.on_drag_start(mode, x_px, anchor);
        debug!(?mode, x_px, ?anchor, "drag started");
        true
    }

    /// Hit-tests the selection at `x_px` and starts a drag on whatever part
    /// is under the pointer. `handle_px` is the grab tolerance around each edge.
    pub fn pointer_down_at(&mut self, x_px: f64, handle_px: f64) -> bool {
        let Some(range) = self.value() else {
            return false;
        };
        match hit_target(range, x_px, handle_px, self.params.scale) {
            Some(target) => self.pointer_down(target, x_px),
            None => false,
        }
    }

    /// Recomputes the candidate for the active drag and commits it if it changed.
    ///
    /// Returns the current selection while dragging, `None` when idle.
    pub fn pointer_move(&mut self, x_px: f64) -> Option<TimeRange> {
        let drag = self.interaction.on_pointer_move()?;
        let delta_px = x_px - drag.anchor_px;
        let candidate = interpret_drag(drag.anchor_range, drag.mode, delta_px, self.params);
        trace!(x_px, delta_px, ?candidate, "drag candidate");

        if self.value() != Some(candidate) {
            self.commit(Some(candidate));
        }
        self.value()
    }

    /// Ends the active drag. The last committed candidate stays in place.
    pub fn pointer_up(&mut self) -> Option<TimeRange> {
        if let Some(drag) = self.interaction.on_drag_end() {
            debug!(mode = ?drag.mode, value = ?self.value(), "drag ended");
        }
        self.value()
    }

    /// Abandons the active drag and restores the range held at pointer-down.
    ///
    /// Covers pointer-capture loss and removal of the drag source.
    pub fn cancel_drag(&mut self) -> bool {
        let Some(drag) = self.interaction.on_drag_end() else {
            return false;
        };
        debug!(anchor = ?drag.anchor_range, "drag cancelled");
        if self.value() != Some(drag.anchor_range) {
            self.commit(Some(drag.anchor_range));
        }
        true
    }

    /// Click on the ruler. With `add_by_click` and no selection, creates a
    /// one-snap-wide range at the click position.
    pub fn click(&mut self, x_px: f64) -> bool {
        if !self.config.add_by_click
            || self.config.disabled
            || self.value().is_some()
            || self.interaction.active_drag().is_some()
        {
            return false;
        }
        match click_range(x_px, self.params) {
            Some(range) => self.commit(Some(range)),
            None => false,
        }
    }

    /// Double click. With `remove_by_double_click`, clears the selection when
    /// the pointer is over it.
    pub fn double_click(&mut self, x_px: f64) -> bool {
        if !self.config.remove_by_double_click || self.config.disabled {
            return false;
        }
        let Some(range) = self.value() else {
            return false;
        };
        if !range.contains(self.params.scale.pixel_to_slot(x_px)) {
            return false;
        }
        self.interaction.on_drag_end();
        self.commit(None)
    }
}
