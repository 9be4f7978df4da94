//! Pointer gesture state and the drag interpreter.
//!
//! A gesture is `Idle -> Dragging -> Idle`. While dragging, every pointer
//! move is interpreted against the anchor captured at pointer-down, never
//! against the previous candidate, so repeated moves cannot accumulate
//! rounding drift.

mod drag;

pub use drag::{DragParams, click_range, hit_target, interpret_drag};

use serde::{Deserialize, Serialize};

use crate::core::TimeRange;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InteractionMode {
    Idle,
    Dragging,
}

/// Screen element that received pointer-down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DragTarget {
    /// The selection box body.
    Body,
    /// Left resize handle.
    StartHandle,
    /// Right resize handle.
    EndHandle,
}

/// How a drag reshapes the anchor range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DragMode {
    /// Both boundaries shift by the same delta; width is preserved.
    Move,
    /// Only `start` shifts.
    ResizeStart,
    /// Only `end` shifts.
    ResizeEnd,
}

impl From<DragTarget> for DragMode {
    fn from(target: DragTarget) -> Self {
        match target {
            DragTarget::Body => Self::Move,
            DragTarget::StartHandle => Self::ResizeStart,
            DragTarget::EndHandle => Self::ResizeEnd,
        }
    }
}

/// Anchor data captured when a drag starts.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DragGesture {
    pub mode: DragMode,
    pub anchor_px: f64,
    pub anchor_range: TimeRange,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GestureState {
    Idle,
    Dragging(DragGesture),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InteractionState {
    gesture: GestureState,
}

impl Default for InteractionState {
    fn default() -> Self {
        Self {
            gesture: GestureState::Idle,
        }
    }
}

impl InteractionState {
    #[must_use]
    pub fn mode(self) -> InteractionMode {
        match self.gesture {
            GestureState::Idle => InteractionMode::Idle,
            GestureState::Dragging(_) => InteractionMode::Dragging,
        }
    }

    #[must_use]
    pub fn gesture(self) -> GestureState {
        self.gesture
    }

    /// Active drag, if any.
    #[must_use]
    pub fn active_drag(self) -> Option<DragGesture> {
        match self.gesture {
            GestureState::Dragging(drag) => Some(drag),
            GestureState::Idle => None,
        }
    }

    pub fn on_drag_start(&mut self, mode: DragMode, anchor_px: f64, anchor_range: TimeRange) {
        self.gesture = GestureState::Dragging(DragGesture {
            mode,
            anchor_px,
            anchor_range,
        });
    }

    /// Drag a pointer move should be interpreted against, if one is active.
    #[must_use]
    pub fn on_pointer_move(self) -> Option<DragGesture> {
        self.active_drag()
    }

    /// Ends the gesture, returning the drag that was active.
    pub fn on_drag_end(&mut self) -> Option<DragGesture> {
        let ended = self.active_drag();
        self.gesture = GestureState::Idle;
        ended
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gesture_round_trip_returns_to_idle() {
        let mut state = InteractionState::default();
        assert_eq!(state.mode(), InteractionMode::Idle);

        state.on_drag_start(DragMode::Move, 120.0, TimeRange::new(1.0, 2.0));
        assert_eq!(state.mode(), InteractionMode::Dragging);

        let drag = state.on_pointer_move().expect("active drag");
        assert_eq!(drag.anchor_px, 120.0);

        assert!(state.on_drag_end().is_some());
        assert_eq!(state.mode(), InteractionMode::Idle);
        assert!(state.on_pointer_move().is_none());
    }

    #[test]
    fn drag_target_selects_mode() {
        assert_eq!(DragMode::from(DragTarget::Body), DragMode::Move);
        assert_eq!(DragMode::from(DragTarget::StartHandle), DragMode::ResizeStart);
        assert_eq!(DragMode::from(DragTarget::EndHandle), DragMode::ResizeEnd);
    }
}
