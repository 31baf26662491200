//! Command types for the Elm-style architecture
//!
//! Commands represent side effects the host performs after an update.

use crate::geometry::Rect;
use crate::observer::PanelEvent;
use crate::panel::{GestureKind, ManagedSurface};

/// Timing curve for frame changes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AnimationCurve {
    /// Decelerating curve used for every panel move
    #[default]
    EaseOut,
}

/// How a frame change should be applied
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Animation {
    /// Seconds; zero means apply immediately
    pub duration: f64,
    pub curve: AnimationCurve,
}

impl Animation {
    pub fn ease_out(duration: f64) -> Self {
        Self {
            duration: duration.max(0.0),
            curve: AnimationCurve::EaseOut,
        }
    }

    pub fn is_immediate(&self) -> bool {
        self.duration == 0.0
    }
}

/// Side effects requested by `update`
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Cmd {
    /// No command - do nothing
    #[default]
    None,
    /// Add the surface to the host container at `frame`
    AttachSurface { surface: ManagedSurface, frame: Rect },
    /// Remove the surface from the host container
    DetachSurface { surface: ManagedSurface },
    /// Move the surface. The host must answer with `PanelMsg::MoveFinished { offset }`
    /// once the animation completes, even if a later move superseded it.
    SetSurfaceFrame {
        surface: ManagedSurface,
        frame: Rect,
        animation: Animation,
        offset: f64,
    },
    /// Install a recognizer on the host container
    AttachRecognizer(GestureKind),
    /// Remove a recognizer from the host container
    DetachRecognizer(GestureKind),
    /// Deliver a notification to observers
    Notify(PanelEvent),
    /// Execute multiple commands in order
    Batch(Vec<Cmd>),
}

impl Cmd {
    /// Create a batch of commands, collapsing trivial cases
    pub fn batch(cmds: Vec<Cmd>) -> Self {
        let mut cmds: Vec<Cmd> = cmds.into_iter().filter(|c| *c != Cmd::None).collect();
        match cmds.len() {
            0 => Cmd::None,
            1 => cmds.remove(0),
            _ => Cmd::Batch(cmds),
        }
    }

    /// Append another command, keeping a flat batch
    pub fn and(self, next: Cmd) -> Self {
        match self {
            Cmd::Batch(mut cmds) => {
                cmds.push(next);
                Cmd::batch(cmds)
            }
            other => Cmd::batch(vec![other, next]),
        }
    }

    /// Flatten nested batches into execution order
    pub fn flatten(self) -> Vec<Cmd> {
        match self {
            Cmd::None => Vec::new(),
            Cmd::Batch(cmds) => cmds.into_iter().flat_map(Cmd::flatten).collect(),
            other => vec![other],
        }
    }

    /// Target frame of the last surface move in this command, if any
    pub fn target_frame(&self) -> Option<Rect> {
        match self {
            Cmd::SetSurfaceFrame { frame, .. } | Cmd::AttachSurface { frame, .. } => Some(*frame),
            Cmd::Batch(cmds) => cmds.iter().rev().find_map(|c| c.target_frame()),
            _ => None,
        }
    }
}
