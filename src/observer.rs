//! Delegate notifications and non-owning observer registration

use std::rc::{Rc, Weak};

use crate::panel::GestureKind;

/// Notifications a panel emits
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PanelEvent {
    /// A move finished. `offset` is the value that was requested, before clamping,
    /// so treat it as informational.
    FinishedMoving { offset: f64 },
    /// A recognizer toggle was requested (emitted even when nothing changed)
    GestureAvailabilityChanged { kind: GestureKind, enabled: bool },
}

/// Listener for panel notifications. Both methods default to no-ops.
pub trait PanelObserver {
    fn on_finished_moving(&self, _offset: f64) {}

    fn on_gesture_availability_changed(&self, _kind: GestureKind, _enabled: bool) {}
}

/// Registry of observers held by weak reference.
///
/// Dropping the last `Rc` to an observer unsubscribes it.
#[derive(Default)]
pub struct Observers {
    entries: Vec<Weak<dyn PanelObserver>>,
}

impl Observers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&mut self, observer: &Rc<dyn PanelObserver>) {
        let weak = Rc::downgrade(observer);
        if !self.entries.iter().any(|e| e.ptr_eq(&weak)) {
            self.entries.push(weak);
        }
    }

    pub fn unsubscribe(&mut self, observer: &Rc<dyn PanelObserver>) {
        let weak = Rc::downgrade(observer);
        self.entries.retain(|e| !e.ptr_eq(&weak));
    }

    /// Number of observers still alive
    pub fn len(&self) -> usize {
        self.entries.iter().filter(|e| e.strong_count() > 0).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Deliver an event to every live observer, pruning dead ones
    pub fn emit(&mut self, event: &PanelEvent) {
        self.entries.retain(|e| e.strong_count() > 0);
        for entry in &self.entries {
            let Some(observer) = entry.upgrade() else {
                continue;
            };
            match *event {
                PanelEvent::FinishedMoving { offset } => observer.on_finished_moving(offset),
                PanelEvent::GestureAvailabilityChanged { kind, enabled } => {
                    observer.on_gesture_availability_changed(kind, enabled)
                }
            }
        }
    }
}

impl std::fmt::Debug for Observers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Observers")
            .field("live", &self.len())
            .finish()
    }
}
