use serde::{Deserialize, Serialize};

use crate::core::{SlotScale, SnapUnit, TimeRange, snap_to_grid};

use super::{DragMode, DragTarget};

/// Geometry and snapping inputs shared by every drag computation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DragParams {
    pub scale: SlotScale,
    pub snap: SnapUnit,
    pub snap_to_grid: bool,
}

impl DragParams {
    #[must_use]
    pub fn new(scale: SlotScale, snap: SnapUnit, snap_to_grid: bool) -> Self {
        Self {
            scale,
            snap,
            snap_to_grid,
        }
    }

    fn quantize(self, slot: f64) -> f64 {
        if self.snap_to_grid {
            snap_to_grid(slot, self.snap)
        } else {
            slot
        }
    }

    /// Width of a range created by a click.
    fn click_width(self) -> f64 {
        if self.snap_to_grid {
            self.snap.get()
        } else {
            1.0
        }
    }
}

/// Converts a pixel delta measured from the gesture anchor into a candidate range.
///
/// The anchor is first clamped onto the ruler; a zero delta then returns it
/// as is, and a non-finite delta or anchor returns `anchor` untouched.
///
/// `Move` snaps only the new `start` and keeps the anchor's width, so an
/// anchor whose width is not a multiple of the snap unit keeps an off-grid
/// `end`. The resize modes snap the boundary they move.
#[must_use]
pub fn interpret_drag(
    anchor: TimeRange,
    mode: DragMode,
    delta_px: f64,
    params: DragParams,
) -> TimeRange {
    if !delta_px.is_finite() || !anchor.is_finite() {
        return anchor;
    }
    let anchor = params.scale.clamp_range(anchor);
    if delta_px == 0.0 {
        return anchor;
    }

    let delta = params.scale.pixel_to_slot(delta_px);
    let scale = params.scale;
    match mode {
        DragMode::Move => {
            let start = params.quantize(anchor.start() + delta);
            fit_inside(start, anchor.len(), scale)
        }
        DragMode::ResizeStart => {
            let start = scale.clamp_slot(params.quantize(anchor.start() + delta));
            // Dragging past the opposite edge swaps which boundary is active.
            TimeRange::new(start, scale.clamp_slot(anchor.end()))
        }
        DragMode::ResizeEnd => {
            let end = scale.clamp_slot(params.quantize(anchor.end() + delta));
            TimeRange::new(scale.clamp_slot(anchor.start()), end)
        }
    }
}

/// Range created by a click at `x_px` on an empty ruler.
///
/// Anchored at the snapped click slot, one snap unit wide (one slot when
/// snapping is off), and slid back inside the ruler if needed.
#[must_use]
pub fn click_range(x_px: f64, params: DragParams) -> Option<TimeRange> {
    if !x_px.is_finite() || params.scale.slot_count() == 0 {
        return None;
    }
    let anchor = params.quantize(params.scale.pixel_to_slot(x_px));
    Some(fit_inside(anchor, params.click_width(), params.scale))
}

/// Resolves which part of `range` sits under `x_px`.
///
/// Handles take precedence over the body within `handle_px` of an edge.
#[must_use]
pub fn hit_target(
    range: TimeRange,
    x_px: f64,
    handle_px: f64,
    scale: SlotScale,
) -> Option<DragTarget> {
    if !x_px.is_finite() {
        return None;
    }
    let left = scale.slot_to_pixel(range.start());
    let right = scale.slot_to_pixel(range.end());
    let handle_px = handle_px.max(0.0);

    if (x_px - left).abs() <= handle_px {
        Some(DragTarget::StartHandle)
    } else if (x_px - right).abs() <= handle_px {
        Some(DragTarget::EndHandle)
    } else if left <= x_px && x_px <= right {
        Some(DragTarget::Body)
    } else {
        None
    }
}

/// Places a `width`-wide range at `start`, sliding it inside `[0, max_slot]`.
fn fit_inside(start: f64, width: f64, scale: SlotScale) -> TimeRange {
    let max = scale.max_slot();
    let width = width.clamp(0.0, max);
    let start = start.clamp(0.0, max - width);
    TimeRange::new(start, start + width)
}
