//! timerange-rs: headless time-range selector core.
//!
//! A horizontal ruler of labeled slots over which a user drags to select one
//! contiguous interval. This crate owns the model and interaction rules
//! (slot resolution, drag interpretation, grid snapping, disabled-range
//! overlap detection) and leaves drawing to the host's UI layer.

pub mod api;
pub mod core;
pub mod error;
pub mod interaction;
pub mod telemetry;

pub use api::{SelectorConfig, TimeRangeSelector};
pub use crate::core::TimeRange;
pub use error::{SelectorError, SelectorResult};
