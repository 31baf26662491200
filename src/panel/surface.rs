//! The visual element whose frame the panel drives

use serde::{Deserialize, Serialize};

/// Opaque handle the host uses to identify a visual element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SurfaceId(pub u64);

/// What the panel manages: a child controller's root view or a bare view.
///
/// The controller only owns the position of this element, never its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "id", rename_all = "lowercase")]
pub enum ManagedSurface {
    Controller(SurfaceId),
    View(SurfaceId),
}

impl ManagedSurface {
    /// The element that actually gets repositioned
    pub fn view_id(&self) -> SurfaceId {
        match self {
            ManagedSurface::Controller(id) | ManagedSurface::View(id) => *id,
        }
    }
}

impl std::fmt::Display for ManagedSurface {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ManagedSurface::Controller(id) => write!(f, "controller#{}", id.0),
            ManagedSurface::View(id) => write!(f, "view#{}", id.0),
        }
    }
}
