use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::warn;

use crate::core::types::TimeRange;

/// `true` when `selection` and `disabled` share a span of positive length.
///
/// Uses the combined-extent test: the ranges overlap iff the span from the
/// smallest to the largest edge is shorter than the sum of both lengths.
/// Ranges that merely touch (`[0, 9]` and `[9, 10]`) do not overlap.
#[must_use]
pub fn overlaps(selection: TimeRange, disabled: TimeRange) -> bool {
    let edges = [
        selection.start(),
        selection.end(),
        disabled.start(),
        disabled.end(),
    ];
    let max_edge = edges.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let min_edge = edges.iter().copied().fold(f64::INFINITY, f64::min);
    max_edge - min_edge < selection.len() + disabled.len()
}

/// `true` when a selection exists and overlaps any disabled range.
#[must_use]
pub fn check_overlap(selection: Option<TimeRange>, disabled: &[TimeRange]) -> bool {
    match selection {
        Some(selection) if selection.is_finite() => {
            disabled.iter().any(|&range| overlaps(selection, range))
        }
        _ => false,
    }
}

/// Disabled ranges overlapping `selection`, ordered by start.
#[must_use]
pub fn overlapping_ranges(
    selection: Option<TimeRange>,
    disabled: &[TimeRange],
) -> SmallVec<[TimeRange; 4]> {
    let Some(selection) = selection.filter(|range| range.is_finite()) else {
        return SmallVec::new();
    };
    let mut hits: SmallVec<[TimeRange; 4]> = disabled
        .iter()
        .copied()
        .filter(|&range| overlaps(selection, range))
        .collect();
    hits.sort_by_key(|range| (OrderedFloat(range.start()), OrderedFloat(range.end())));
    hits
}

/// Host-supplied set of intervals flagged as unselectable.
///
/// Read-only after construction. Non-finite entries are dropped.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "Vec<TimeRange>", into = "Vec<TimeRange>")]
pub struct DisabledRanges {
    ranges: SmallVec<[TimeRange; 4]>,
}

impl DisabledRanges {
    #[must_use]
    pub fn new<I>(ranges: I) -> Self
    where
        I: IntoIterator<Item = TimeRange>,
    {
        let mut kept = SmallVec::new();
        for range in ranges {
            if range.is_finite() {
                kept.push(range);
            } else {
                warn!(?range, "dropping non-finite disabled range");
            }
        }
        Self { ranges: kept }
    }

    /// Defaults of the original widget: night hours `[0, 9]` and `[20, 24]`.
    #[must_use]
    pub fn outside_business_hours() -> Self {
        Self::new([TimeRange::new(0.0, 9.0), TimeRange::new(20.0, 24.0)])
    }

    #[must_use]
    pub fn as_slice(&self) -> &[TimeRange] {
        &self.ranges
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.ranges.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    #[must_use]
    pub fn overlaps(&self, selection: Option<TimeRange>) -> bool {
        check_overlap(selection, &self.ranges)
    }

    #[must_use]
    pub fn conflicts(&self, selection: Option<TimeRange>) -> SmallVec<[TimeRange; 4]> {
        overlapping_ranges(selection, &self.ranges)
    }
}

impl From<Vec<TimeRange>> for DisabledRanges {
    fn from(ranges: Vec<TimeRange>) -> Self {
        Self::new(ranges)
    }
}

impl From<DisabledRanges> for Vec<TimeRange> {
    fn from(ranges: DisabledRanges) -> Self {
        ranges.ranges.into_vec()
    }
}
