//! Selection change notification.
//!
//! A committed selection change reaches observers through three channels:
//! - the index-change callback (always, when set)
//! - value-changed listeners (only while the control is hosted)
//! - a reactive `Signal<i32>` mirror of the selection (-1 for none)

use spark_signals::{signal, Signal};
use tracing::debug;

/// Index-change callback.
pub type IndexChangeCallback = Box<dyn FnMut(usize)>;

/// Value-changed listener; receives the newly selected index.
pub type ValueChangedListener = Box<dyn FnMut(usize)>;

/// Handle for removing a value-changed listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(usize);

/// Signal value for "no selection".
pub const NO_SELECTION_SIGNAL: i32 = -1;

/// Map a selection to its signal value.
#[inline]
pub fn signal_value(selected: Option<usize>) -> i32 {
    selected.map_or(NO_SELECTION_SIGNAL, |index| {
        i32::try_from(index).unwrap_or(i32::MAX)
    })
}

/// Fan-out for selection changes.
pub struct SelectionNotifier {
    index_change: Option<IndexChangeCallback>,
    listeners: Vec<(ListenerId, ValueChangedListener)>,
    next_id: usize,
    hosted: bool,
    signal: Signal<i32>,
}

impl Default for SelectionNotifier {
    fn default() -> Self {
        Self::new(None)
    }
}

impl std::fmt::Debug for SelectionNotifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SelectionNotifier")
            .field("index_change", &self.index_change.is_some())
            .field("listeners", &self.listeners.len())
            .field("hosted", &self.hosted)
            .field("signal", &self.signal.get())
            .finish()
    }
}

impl SelectionNotifier {
    pub fn new(selected: Option<usize>) -> Self {
        Self {
            index_change: None,
            listeners: Vec::new(),
            next_id: 0,
            hosted: false,
            signal: signal(signal_value(selected)),
        }
    }

    /// Replace the index-change callback.
    pub fn set_index_change(&mut self, callback: Option<IndexChangeCallback>) {
        self.index_change = callback;
    }

    /// Register a value-changed listener.
    pub fn add_listener(&mut self, listener: ValueChangedListener) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, listener));
        id
    }

    /// Remove a listener. Returns `false` if it was not registered.
    pub fn remove_listener(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(listener_id, _)| *listener_id != id);
        self.listeners.len() != before
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    #[inline]
    pub fn is_hosted(&self) -> bool {
        self.hosted
    }

    pub fn set_hosted(&mut self, hosted: bool) {
        self.hosted = hosted;
    }

    /// Reactive mirror of the selection.
    pub fn signal(&self) -> Signal<i32> {
        self.signal.clone()
    }

    /// Record a committed selection in the signal mirror.
    pub fn sync(&mut self, selected: Option<usize>) {
        let value = signal_value(selected);
        if self.signal.get() != value {
            self.signal.set(value);
        }
    }

    /// Deliver a change to `index` to every observer.
    pub fn notify(&mut self, index: usize) {
        debug!(index, hosted = self.hosted, listeners = self.listeners.len(), "selection changed");
        if self.hosted {
            for (_, listener) in &mut self.listeners {
                listener(index);
            }
        }
        if let Some(callback) = self.index_change.as_mut() {
            callback(index);
        }
    }
}
