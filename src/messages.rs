//! Message types for the Elm-style architecture
//!
//! Everything that can change panel state arrives as a `PanelMsg`: gesture
//! samples from the host, completions of animations it ran, and requests from
//! the embedding application.

use crate::geometry::{Rect, Vector};

/// Phases of the continuous drag recognizer
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragMsg {
    /// Finger/pointer went down and started moving
    Began,
    /// New sample; both vectors are relative to the host container
    Changed {
        /// Cumulative translation since `Began`
        translation: Vector,
        /// Instantaneous velocity in points per second
        velocity: Vector,
    },
    /// Finger/pointer released
    Ended,
    /// Recognizer was cancelled by the system
    Cancelled,
}

/// Panel messages
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PanelMsg {
    /// Swipe recognizer sample
    Drag(DragMsg),
    /// Dismiss recognizer fired; location is in the surface's local space
    Tap { location: Vector },

    // === Requests ===
    /// Move to an offset (0 closed, 1 open). `None` uses the configured duration.
    Move { offset: f64, duration: Option<f64> },
    /// Move to offset 1
    Present { duration: Option<f64> },
    /// Move to offset 0
    Dismiss { duration: Option<f64> },
    /// Install or remove the swipe recognizer
    SetSwipeEnabled(bool),
    /// Install or remove the tap-to-dismiss recognizer
    SetDismissEnabled(bool),

    // === Host feedback ===
    /// An animation requested by `Cmd::SetSurfaceFrame` finished.
    /// Carries the offset that was requested, before clamping.
    MoveFinished { offset: f64 },
    /// The host container appeared, resized, or went away
    HostChanged(Option<Rect>),
    /// The managed surface was removed from the host by someone else
    SurfaceDetached,
}

impl PanelMsg {
    /// Animated move with the configured default duration
    pub fn move_to(offset: f64) -> Self {
        PanelMsg::Move {
            offset,
            duration: None,
        }
    }

    pub fn present() -> Self {
        PanelMsg::Present { duration: None }
    }

    pub fn dismiss() -> Self {
        PanelMsg::Dismiss { duration: None }
    }

    /// Drag sample helper
    pub fn drag_changed(translation: Vector, velocity: Vector) -> Self {
        PanelMsg::Drag(DragMsg::Changed {
            translation,
            velocity,
        })
    }

    /// Short name used in logs
    pub fn name(&self) -> &'static str {
        match self {
            PanelMsg::Drag(DragMsg::Began) => "Drag::Began",
            PanelMsg::Drag(DragMsg::Changed { .. }) => "Drag::Changed",
            PanelMsg::Drag(DragMsg::Ended) => "Drag::Ended",
            PanelMsg::Drag(DragMsg::Cancelled) => "Drag::Cancelled",
            PanelMsg::Tap { .. } => "Tap",
            PanelMsg::Move { .. } => "Move",
            PanelMsg::Present { .. } => "Present",
            PanelMsg::Dismiss { .. } => "Dismiss",
            PanelMsg::SetSwipeEnabled(_) => "SetSwipeEnabled",
            PanelMsg::SetDismissEnabled(_) => "SetDismissEnabled",
            PanelMsg::MoveFinished { .. } => "MoveFinished",
            PanelMsg::HostChanged(_) => "HostChanged",
            PanelMsg::SurfaceDetached => "SurfaceDetached",
        }
    }

    /// High-frequency messages that would flood debug logs
    pub fn is_noisy(&self) -> bool {
        matches!(
            self,
            PanelMsg::Drag(DragMsg::Changed { .. }) | PanelMsg::MoveFinished { .. }
        )
    }
}
