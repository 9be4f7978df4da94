use serde::{Deserialize, Serialize};

use crate::core::{DisabledRanges, RangeSpec, SnapUnit, TimeRange, TrackGeometry};
use crate::error::{SelectorError, SelectorResult};

/// Public selector bootstrap configuration.
///
/// Every field has a serde default, so a host can load `{"range": "day"}`
/// and get the stock widget. Validation happens once, in
/// [`TimeRangeSelector::new`](super::TimeRangeSelector::new).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectorConfig {
    /// Ruler description: a built-in name or explicit slot labels.
    #[serde(default)]
    pub range: RangeSpec,
    /// Initial controlled value.
    #[serde(default)]
    pub value: Option<TimeRange>,
    /// Intervals flagged as unselectable. Overlap is reported, not blocked.
    #[serde(default = "default_disabled_time_ranges")]
    pub disabled_time_ranges: DisabledRanges,
    /// Quantization step in slot units.
    #[serde(default)]
    pub snap: SnapUnit,
    #[serde(flatten)]
    pub geometry: TrackGeometry,
    /// Quantize drag boundaries to multiples of `snap`.
    #[serde(default = "default_true")]
    pub snap_to_grid: bool,
    /// Ignore all user-driven changes.
    #[serde(default)]
    pub disabled: bool,
    /// Double click inside the selection clears it.
    #[serde(default)]
    pub remove_by_double_click: bool,
    /// Click on an empty ruler creates a selection.
    #[serde(default)]
    pub add_by_click: bool,
    /// Draw slot separators. Presentational only.
    #[serde(default = "default_true")]
    pub ruler: bool,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self::new(RangeSpec::default())
    }
}

impl SelectorConfig {
    /// Creates a config with the stock widget defaults for `range`.
    #[must_use]
    pub fn new(range: impl Into<RangeSpec>) -> Self {
        Self {
            range: range.into(),
            value: None,
            disabled_time_ranges: default_disabled_time_ranges(),
            snap: SnapUnit::default(),
            geometry: default_geometry(),
            snap_to_grid: true,
            disabled: false,
            remove_by_double_click: false,
            add_by_click: false,
            ruler: true,
        }
    }

    #[must_use]
    pub fn with_value(mut self, value: Option<TimeRange>) -> Self {
        self.value = value;
        self
    }

    #[must_use]
    pub fn with_disabled_time_ranges<I>(mut self, ranges: I) -> Self
    where
        I: IntoIterator<Item = TimeRange>,
    {
        self.disabled_time_ranges = DisabledRanges::new(ranges);
        self
    }

    #[must_use]
    pub fn with_snap(mut self, snap: SnapUnit) -> Self {
        self.snap = snap;
        self
    }

    #[must_use]
    pub fn with_split_width(mut self, split_width: f64) -> Self {
        self.geometry.split_width = split_width;
        self
    }

    #[must_use]
    pub fn with_height(mut self, height: f64) -> Self {
        self.geometry.height = height;
        self
    }

    #[must_use]
    pub fn with_snap_to_grid(mut self, enabled: bool) -> Self {
        self.snap_to_grid = enabled;
        self
    }

    #[must_use]
    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    #[must_use]
    pub fn with_remove_by_double_click(mut self, enabled: bool) -> Self {
        self.remove_by_double_click = enabled;
        self
    }

    #[must_use]
    pub fn with_add_by_click(mut self, enabled: bool) -> Self {
        self.add_by_click = enabled;
        self
    }

    #[must_use]
    pub fn with_ruler(mut self, ruler: bool) -> Self {
        self.ruler = ruler;
        self
    }

    pub fn validate(&self) -> SelectorResult<()> {
        self.geometry.validate()?;
        if let Some(value) = self.value {
            if !value.is_finite() {
                return Err(SelectorError::InvalidData(
                    "initial value must be finite".to_owned(),
                ));
            }
        }
        Ok(())
    }

    pub fn from_json_str(input: &str) -> SelectorResult<Self> {
        serde_json::from_str(input).map_err(|e| {
            SelectorError::InvalidData(format!("failed to parse selector config json: {e}"))
        })
    }

    pub fn to_json_pretty(&self) -> SelectorResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            SelectorError::InvalidData(format!("failed to serialize selector config json: {e}"))
        })
    }
}

fn default_true() -> bool {
    true
}

fn default_geometry() -> TrackGeometry {
    TrackGeometry::default()
}

fn default_disabled_time_ranges() -> DisabledRanges {
    DisabledRanges::outside_business_hours()
}
