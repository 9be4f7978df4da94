use serde::{Deserialize, Serialize};

use crate::core::{SelectionBox, TimeRange};
use crate::error::{SelectorError, SelectorResult};
use crate::interaction::InteractionMode;

use super::TimeRangeSelector;

pub const SELECTOR_SNAPSHOT_JSON_SCHEMA_V1: u32 = 1;

/// Serializable view of everything a renderer needs for one frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectorSnapshot {
    pub slots: Vec<String>,
    pub value: Option<TimeRange>,
    pub disabled_time_ranges: Vec<TimeRange>,
    pub is_disabled_overlap: bool,
    pub disabled: bool,
    pub ruler: bool,
    pub interaction_mode: InteractionMode,
    pub selection_box: Option<SelectionBox>,
    pub ruler_width_px: f64,
    pub snap_width_px: f64,
    pub box_height_px: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectorSnapshotJsonContractV1 {
    pub schema_version: u32,
    pub snapshot: SelectorSnapshot,
}

impl SelectorSnapshot {
    pub fn to_json_pretty(&self) -> SelectorResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            SelectorError::InvalidData(format!("failed to serialize snapshot json: {e}"))
        })
    }

    pub fn to_json_contract_v1_pretty(&self) -> SelectorResult<String> {
        let payload = SelectorSnapshotJsonContractV1 {
            schema_version: SELECTOR_SNAPSHOT_JSON_SCHEMA_V1,
            snapshot: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            SelectorError::InvalidData(format!("failed to serialize snapshot contract v1: {e}"))
        })
    }

    /// Accepts either a bare snapshot or a versioned v1 contract payload.
    pub fn from_json_compat_str(input: &str) -> SelectorResult<Self> {
        if let Ok(snapshot) = serde_json::from_str::<Self>(input) {
            return Ok(snapshot);
        }
        let payload: SelectorSnapshotJsonContractV1 =
            serde_json::from_str(input).map_err(|e| {
                SelectorError::InvalidData(format!("failed to parse snapshot json payload: {e}"))
            })?;
        if payload.schema_version != SELECTOR_SNAPSHOT_JSON_SCHEMA_V1 {
            return Err(SelectorError::InvalidData(format!(
                "unsupported snapshot schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload.snapshot)
    }
}

impl TimeRangeSelector {
    #[must_use]
    pub fn snapshot(&self) -> SelectorSnapshot {
        SelectorSnapshot {
            slots: self.slots.clone(),
            value: self.value(),
            disabled_time_ranges: self.config.disabled_time_ranges.as_slice().to_vec(),
            is_disabled_overlap: self.is_disabled_overlap(),
            disabled: self.config.disabled,
            ruler: self.config.ruler,
            interaction_mode: self.interaction_mode(),
            selection_box: self.selection_box(),
            ruler_width_px: self.ruler_width_px(),
            snap_width_px: self.snap_width_px(),
            box_height_px: self.box_height_px(),
        }
    }

    pub fn snapshot_json_pretty(&self) -> SelectorResult<String> {
        self.snapshot().to_json_pretty()
    }
}
