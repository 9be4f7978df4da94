mod config;
mod gesture_controller;
mod layout;
mod selection;
mod selector;
mod snapshot;

pub use config::SelectorConfig;
pub use selection::{ObserverId, SelectionObserver, SelectionState};
pub use selector::TimeRangeSelector;
pub use snapshot::{
    SELECTOR_SNAPSHOT_JSON_SCHEMA_V1, SelectorSnapshot, SelectorSnapshotJsonContractV1,
};
