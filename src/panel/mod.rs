//! Side panel primitives
//!
//! A side panel is a single surface that slides between a closed frame and an
//! open frame. Its position is a normalized offset: 0 at the closed frame, 1 at
//! the open frame.
//!
//! ## Architecture
//!
//! - `PanelFrames`: the two endpoint rectangles and the offset <-> frame mapping
//! - `PanelDirection`: which host edge the panel enters from on the active axis
//! - `ManagedSurface`: the element being positioned (controller view or bare view)
//! - `GestureSession`, `DragTrack`, `release_target`: drag math and release heuristics
//!
//! State transitions live in `update`; this module is pure data and math.

mod frames;
mod gesture;
mod surface;

pub use frames::{PanelDirection, PanelFrames};
pub use gesture::{release_target, DragTrack, GestureKind, GestureSession};
pub use surface::{ManagedSurface, SurfaceId};
