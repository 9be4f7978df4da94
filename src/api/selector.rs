use smallvec::SmallVec;
use tracing::{debug, trace};

use crate::core::{DisabledRanges, RangeCatalog, SlotScale, TimeRange, resolve_slots};
use crate::error::SelectorResult;
use crate::interaction::{DragParams, InteractionMode, InteractionState};

use super::{ObserverId, SelectionObserver, SelectionState, SelectorConfig};

/// Main facade consumed by host applications.
///
/// `TimeRangeSelector` owns the resolved ruler, the single selection state,
/// and the gesture state machine. Renderers read state from it and route
/// pointer events into it; it never draws.
#[derive(Debug)]
pub struct TimeRangeSelector {
    pub(super) config: SelectorConfig,
    pub(super) slots: Vec<String>,
    pub(super) params: DragParams,
    pub(super) selection: SelectionState,
    pub(super) interaction: InteractionState,
}

impl TimeRangeSelector {
    /// Validates `config` and resolves its ruler against the built-in table.
    pub fn new(config: SelectorConfig) -> SelectorResult<Self> {
        let slots = resolve_slots(&config.range);
        Self::from_parts(config, slots)
    }

    /// Same as [`TimeRangeSelector::new`] but resolves named ranges through
    /// a host-extended catalog.
    pub fn with_catalog(config: SelectorConfig, catalog: &RangeCatalog) -> SelectorResult<Self> {
        let slots = catalog.resolve(&config.range);
        Self::from_parts(config, slots)
    }

    fn from_parts(config: SelectorConfig, slots: Vec<String>) -> SelectorResult<Self> {
        config.validate()?;
        let scale = SlotScale::new(config.geometry.split_width, slots.len())?;
        let params = DragParams::new(scale, config.snap, config.snap_to_grid);
        debug!(
            slots = slots.len(),
            snap = config.snap.get(),
            split_width = config.geometry.split_width,
            "time range selector created"
        );

        Ok(Self {
            selection: SelectionState::new(clamp_to_ruler(scale, config.value)),
            config,
            slots,
            params,
            interaction: InteractionState::default(),
        })
    }

    #[must_use]
    pub fn config(&self) -> &SelectorConfig {
        &self.config
    }

    #[must_use]
    pub fn slots(&self) -> &[String] {
        &self.slots
    }

    #[must_use]
    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    #[must_use]
    pub fn scale(&self) -> SlotScale {
        self.params.scale
    }

    #[must_use]
    pub fn value(&self) -> Option<TimeRange> {
        self.selection.value()
    }

    #[must_use]
    pub fn interaction_mode(&self) -> InteractionMode {
        self.interaction.mode()
    }

    #[must_use]
    pub fn disabled_time_ranges(&self) -> &DisabledRanges {
        &self.config.disabled_time_ranges
    }

    /// Presentational flag: the current selection overlaps a disabled range.
    ///
    /// Overlap never blocks a commit.
    #[must_use]
    pub fn is_disabled_overlap(&self) -> bool {
        self.config.disabled_time_ranges.overlaps(self.value())
    }

    /// Disabled ranges the current selection overlaps, ordered by start.
    #[must_use]
    pub fn disabled_conflicts(&self) -> SmallVec<[TimeRange; 4]> {
        self.config.disabled_time_ranges.conflicts(self.value())
    }

    pub fn set_disabled_time_ranges<I>(&mut self, ranges: I)
    where
        I: IntoIterator<Item = TimeRange>,
    {
        self.config.disabled_time_ranges = DisabledRanges::new(ranges);
        debug!(
            count = self.config.disabled_time_ranges.len(),
            "disabled time ranges replaced"
        );
    }

    #[must_use]
    pub fn is_disabled(&self) -> bool {
        self.config.disabled
    }

    /// Toggles the read-only mode. Disabling abandons any active drag.
    pub fn set_disabled(&mut self, disabled: bool) {
        self.config.disabled = disabled;
        if disabled {
            self.interaction.on_drag_end();
        }
    }

    /// Registers a change observer (the host's `onChange`).
    pub fn add_observer(&mut self, observer: Box<dyn SelectionObserver>) -> ObserverId {
        self.selection.add_observer(observer)
    }

    /// Closure shorthand for [`TimeRangeSelector::add_observer`].
    pub fn on_change<F>(&mut self, callback: F) -> ObserverId
    where
        F: FnMut(Option<TimeRange>) + 'static,
    {
        self.selection.add_observer(Box::new(callback))
    }

    pub fn remove_observer(&mut self, id: ObserverId) -> bool {
        self.selection.remove_observer(id)
    }

    /// Applies the host's controlled value without notifying observers.
    ///
    /// An in-flight drag is dropped so later pointer moves cannot overwrite
    /// the external value.
    pub fn sync(&mut self, external: Option<TimeRange>) {
        if self.interaction.on_drag_end().is_some() {
            debug!("external sync abandoned active drag");
        }
        self.selection.sync(clamp_to_ruler(self.params.scale, external));
    }

    /// Commits a user-driven change through the selection state.
    ///
    /// Returns `false` when the selector is disabled.
    pub(super) fn commit(&mut self, candidate: Option<TimeRange>) -> bool {
        if self.config.disabled {
            trace!(?candidate, "selector disabled; change ignored");
            return false;
        }
        self.selection.replace(candidate);
        debug!(
            value = ?candidate,
            disabled_overlap = self.is_disabled_overlap(),
            "selection committed"
        );
        true
    }
}

/// Host values outside `[0, slot_count]` are pulled onto the ruler.
fn clamp_to_ruler(scale: SlotScale, value: Option<TimeRange>) -> Option<TimeRange> {
    let value = value?;
    let clamped = scale.clamp_range(value);
    if clamped != value {
        debug!(?value, ?clamped, "host value clamped to ruler");
    }
    Some(clamped)
}
