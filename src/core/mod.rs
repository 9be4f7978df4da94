pub mod collision;
pub mod range;
pub mod scale;
pub mod snap;
pub mod types;

pub use collision::{DisabledRanges, check_overlap, overlapping_ranges, overlaps};
pub use range::{RangeCatalog, RangeSpec, RangeType, resolve_slots};
pub use scale::{SelectionBox, SlotScale};
pub use snap::{SnapUnit, is_on_grid, snap_to_grid};
pub use types::{TimeRange, TrackGeometry};
