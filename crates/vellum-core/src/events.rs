//! Lifecycle events and their listener bus.
//!
//! Events fire only after the operation they describe has succeeded, and
//! are delivered synchronously in emission order. A successful move
//! produces write, then del, then move.

use crate::view::ViewId;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::sync::Mutex;

/// Notification emitted after a mutation succeeds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Event {
    /// Contents persisted: original source path and resolved target path.
    Write {
        view: ViewId,
        source: PathBuf,
        dest: PathBuf,
    },
    /// Path removed, or confirmed absent.
    Del { view: ViewId, path: PathBuf },
    /// Contents rewritten at a new location and the original removed.
    Move {
        view: ViewId,
        from: PathBuf,
        to: PathBuf,
    },
}

impl Event {
    /// The view this event refers to.
    pub fn view(&self) -> ViewId {
        match self {
            Event::Write { view, .. } | Event::Del { view, .. } | Event::Move { view, .. } => *view,
        }
    }
}

type Listener = Box<dyn Fn(&Event) + Send + Sync + 'static>;

/// Listener registry for lifecycle events.
pub struct EventBus {
    listeners: Mutex<Vec<Listener>>,
}

impl EventBus {
    pub fn new() -> Self {
        Self {
            listeners: Mutex::new(Vec::new()),
        }
    }

    /// Subscribe to every event.
    pub fn on(&self, listener: impl Fn(&Event) + Send + Sync + 'static) {
        self.listeners.lock().unwrap().push(Box::new(listener));
    }

    /// Subscribe to write events only.
    pub fn on_write(&self, listener: impl Fn(&Event) + Send + Sync + 'static) {
        self.on(move |event| {
            if matches!(event, Event::Write { .. }) {
                listener(event);
            }
        });
    }

    /// Subscribe to del events only.
    pub fn on_del(&self, listener: impl Fn(&Event) + Send + Sync + 'static) {
        self.on(move |event| {
            if matches!(event, Event::Del { .. }) {
                listener(event);
            }
        });
    }

    /// Subscribe to move events only.
    pub fn on_move(&self, listener: impl Fn(&Event) + Send + Sync + 'static) {
        self.on(move |event| {
            if matches!(event, Event::Move { .. }) {
                listener(event);
            }
        });
    }

    /// Deliver an event to every listener, in subscription order.
    pub fn emit(&self, event: &Event) {
        for listener in self.listeners.lock().unwrap().iter() {
            listener(event);
        }
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.lock().unwrap().len()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for EventBus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventBus")
            .field("listeners", &self.listener_count())
            .finish()
    }
}
