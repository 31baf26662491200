//! Side panel - gesture-driven offset state machine
//!
//! This crate positions a single side panel between a closed and an open
//! frame, driven by swipe and tap gestures, following the Elm Architecture
//! pattern: `PanelModel` + `PanelMsg` -> `update` -> `Cmd`.

pub mod commands;
pub mod config;
pub mod config_paths;
pub mod errors;
pub mod geometry;
pub mod messages;
pub mod model;
pub mod observer;
pub mod panel;
pub mod runtime;
pub mod script;
pub mod tracing;
pub mod update;

// Re-export commonly used types
pub use commands::{Animation, Cmd};
pub use config::{GestureThresholds, PanelConfig};
pub use errors::PanelError;
pub use geometry::{Rect, SwipeAxis, Vector};
pub use messages::{DragMsg, PanelMsg};
pub use model::{PanelModel, PanelSetup};
pub use observer::{PanelEvent, PanelObserver};
pub use panel::{GestureKind, ManagedSurface, PanelDirection, PanelFrames, SurfaceId};
pub use runtime::{HostCall, MoveCompletion, PanelHost, PanelRuntime, SimulatedHost};
pub use update::update;
