//! Host container bookkeeping
//!
//! Mirrors what the panel has asked the host to do, so toggles can be
//! idempotent without querying the host.

use std::collections::HashSet;

use crate::geometry::Rect;
use crate::panel::GestureKind;

/// The container the panel surface and its recognizers live in
#[derive(Debug, Clone, PartialEq)]
pub struct HostContainer {
    /// Host bounds; only the size is used for drag math
    pub bounds: Rect,
    /// Whether the managed surface is currently a child of the host
    pub contains_surface: bool,
    /// Recognizers currently installed on the host
    recognizers: HashSet<GestureKind>,
}

impl HostContainer {
    pub fn new(bounds: Rect) -> Self {
        Self {
            bounds,
            contains_surface: false,
            recognizers: HashSet::new(),
        }
    }

    pub fn has_recognizer(&self, kind: GestureKind) -> bool {
        self.recognizers.contains(&kind)
    }

    /// Returns true if the recognizer was not installed yet
    pub fn add_recognizer(&mut self, kind: GestureKind) -> bool {
        self.recognizers.insert(kind)
    }

    /// Returns true if the recognizer was installed
    pub fn remove_recognizer(&mut self, kind: GestureKind) -> bool {
        self.recognizers.remove(&kind)
    }

    /// Installed recognizers in a stable order
    pub fn recognizers(&self) -> Vec<GestureKind> {
        [GestureKind::Swipe, GestureKind::Dismiss]
            .into_iter()
            .filter(|k| self.recognizers.contains(k))
            .collect()
    }
}
