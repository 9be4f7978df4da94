use std::fmt;

use crate::core::TimeRange;

/// Receives every committed selection change.
///
/// Closures taking `Option<TimeRange>` implement this trait directly.
pub trait SelectionObserver {
    fn on_change(&mut self, value: Option<TimeRange>);
}

impl<F> SelectionObserver for F
where
    F: FnMut(Option<TimeRange>),
{
    fn on_change(&mut self, value: Option<TimeRange>) {
        self(value);
    }
}

/// Handle returned by [`SelectionState::add_observer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObserverId(u64);

/// Single-writer holder of the current selection.
///
/// [`SelectionState::replace`] is the only mutation that notifies observers.
/// [`SelectionState::sync`] mirrors a host-controlled value silently.
#[derive(Default)]
pub struct SelectionState {
    value: Option<TimeRange>,
    observers: Vec<(ObserverId, Box<dyn SelectionObserver>)>,
    next_observer_id: u64,
}

impl fmt::Debug for SelectionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SelectionState")
            .field("value", &self.value)
            .field("observers", &self.observers.len())
            .finish()
    }
}

impl SelectionState {
    #[must_use]
    pub fn new(value: Option<TimeRange>) -> Self {
        Self {
            value,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn value(&self) -> Option<TimeRange> {
        self.value
    }

    pub fn add_observer(&mut self, observer: Box<dyn SelectionObserver>) -> ObserverId {
        let id = ObserverId(self.next_observer_id);
        self.next_observer_id += 1;
        self.observers.push((id, observer));
        id
    }

    pub fn remove_observer(&mut self, id: ObserverId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(observer_id, _)| *observer_id != id);
        self.observers.len() != before
    }

    #[must_use]
    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    /// Replaces the selection and notifies observers synchronously.
    pub fn replace(&mut self, value: Option<TimeRange>) {
        self.value = value;
        for (_, observer) in &mut self.observers {
            observer.on_change(value);
        }
    }

    /// Mirrors an externally controlled value without notifying.
    pub fn sync(&mut self, value: Option<TimeRange>) {
        self.value = value;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn replace_notifies_and_sync_does_not() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let mut state = SelectionState::new(None);
        state.add_observer(Box::new(move |value: Option<TimeRange>| {
            sink.borrow_mut().push(value);
        }));

        state.sync(Some(TimeRange::new(1.0, 2.0)));
        assert!(seen.borrow().is_empty());

        state.replace(Some(TimeRange::new(3.0, 4.0)));
        state.replace(None);
        assert_eq!(*seen.borrow(), vec![Some(TimeRange::new(3.0, 4.0)), None]);
        assert_eq!(state.value(), None);
    }

    #[test]
    fn removed_observer_stops_receiving() {
        let hits = Rc::new(RefCell::new(0_u32));
        let sink = Rc::clone(&hits);
        let mut state = SelectionState::default();
        let id = state.add_observer(Box::new(move |_value: Option<TimeRange>| {
            *sink.borrow_mut() += 1;
        }));

        state.replace(None);
        assert!(state.remove_observer(id));
        assert!(!state.remove_observer(id));
        state.replace(None);
        assert_eq!(*hits.borrow(), 1);
    }
}
