use crate::host::ScrollHost;
use html::Id;

/// A click as seen by document-level listeners.
#[derive(Debug)]
pub struct ClickEvent {
    target: Id,
    default_prevented: bool,
}

impl ClickEvent {
    pub fn new(target: Id) -> Self {
        Self {
            target,
            default_prevented: false,
        }
    }

    pub fn target(&self) -> Id {
        self.target
    }

    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }
}

pub trait ClickListener {
    fn on_click(&mut self, event: &mut ClickEvent, host: &mut dyn ScrollHost);
}

/// Handle for one registration in a [`ClickListeners`] registry.
///
/// Ids are never reused within a registry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

impl ListenerId {
    pub const fn as_raw(self) -> u64 {
        self.0
    }
}

/// Document-level click listeners, invoked in registration order.
#[derive(Default)]
pub struct ClickListeners {
    next_id: u64,
    entries: Vec<(ListenerId, Box<dyn ClickListener>)>,
}

impl ClickListeners {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, listener: Box<dyn ClickListener>) -> ListenerId {
        self.next_id += 1;
        let id = ListenerId(self.next_id);
        self.entries.push((id, listener));
        log::trace!(target: "smooth_scroll.listeners", "added listener {}", id.0);
        id
    }

    /// Returns `false` if `id` was not registered.
    pub fn remove(&mut self, id: ListenerId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry_id, _)| *entry_id != id);
        let removed = self.entries.len() != before;
        if removed {
            log::trace!(target: "smooth_scroll.listeners", "removed listener {}", id.0);
        }
        removed
    }

    pub fn contains(&self, id: ListenerId) -> bool {
        self.entries.iter().any(|(entry_id, _)| *entry_id == id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn dispatch(&mut self, event: &mut ClickEvent, host: &mut dyn ScrollHost) {
        for (_, listener) in self.entries.iter_mut() {
            listener.on_click(event, host);
        }
    }
}

impl std::fmt::Debug for ClickListeners {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClickListeners")
            .field("next_id", &self.next_id)
            .field(
                "ids",
                &self.entries.iter().map(|(id, _)| id.0).collect::<Vec<_>>(),
            )
            .finish()
    }
}
