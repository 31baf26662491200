//! In-memory host
//!
//! Applies frame changes instantly, records every call, and holds animation
//! completions until `finish_animations` is called.

use std::collections::{HashMap, VecDeque};

use super::{MoveCompletion, PanelHost};
use crate::commands::Animation;
use crate::geometry::Rect;
use crate::panel::{GestureKind, ManagedSurface, SurfaceId};

/// A call the runtime made into the host
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HostCall {
    AttachSurface { surface: ManagedSurface, frame: Rect },
    DetachSurface { surface: ManagedSurface },
    SetFrame {
        surface: ManagedSurface,
        frame: Rect,
        duration: f64,
        offset: f64,
    },
    AttachRecognizer(GestureKind),
    DetachRecognizer(GestureKind),
}

#[derive(Debug, Default)]
pub struct SimulatedHost {
    /// Every call in order
    pub calls: Vec<HostCall>,
    frames: HashMap<SurfaceId, Rect>,
    attached: Vec<SurfaceId>,
    /// Kept as a list so a duplicate install would be visible
    recognizers: Vec<GestureKind>,
    pending: VecDeque<MoveCompletion>,
}

impl SimulatedHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Last frame applied to a surface
    pub fn surface_frame(&self, id: SurfaceId) -> Option<Rect> {
        self.frames.get(&id).copied()
    }

    pub fn is_attached(&self, id: SurfaceId) -> bool {
        self.attached.contains(&id)
    }

    pub fn recognizers(&self) -> &[GestureKind] {
        &self.recognizers
    }

    pub fn pending_animations(&self) -> usize {
        self.pending.len()
    }

    /// Complete every pending animation in the order they were started
    pub fn finish_animations(&mut self) -> usize {
        let count = self.pending.len();
        for completion in self.pending.drain(..) {
            completion.complete();
        }
        count
    }

    /// Drain the call log
    pub fn take_calls(&mut self) -> Vec<HostCall> {
        std::mem::take(&mut self.calls)
    }
}

impl PanelHost for SimulatedHost {
    fn attach_surface(&mut self, surface: ManagedSurface, frame: Rect) {
        let id = surface.view_id();
        if !self.attached.contains(&id) {
            self.attached.push(id);
        }
        self.frames.insert(id, frame);
        self.calls.push(HostCall::AttachSurface { surface, frame });
    }

    fn detach_surface(&mut self, surface: ManagedSurface) {
        let id = surface.view_id();
        self.attached.retain(|a| *a != id);
        self.calls.push(HostCall::DetachSurface { surface });
    }

    fn set_surface_frame(
        &mut self,
        surface: ManagedSurface,
        frame: Rect,
        animation: Animation,
        completion: MoveCompletion,
    ) {
        self.frames.insert(surface.view_id(), frame);
        self.calls.push(HostCall::SetFrame {
            surface,
            frame,
            duration: animation.duration,
            offset: completion.offset(),
        });
        self.pending.push_back(completion);
    }

    fn attach_recognizer(&mut self, kind: GestureKind) {
        self.recognizers.push(kind);
        self.calls.push(HostCall::AttachRecognizer(kind));
    }

    fn detach_recognizer(&mut self, kind: GestureKind) {
        self.recognizers.retain(|k| *k != kind);
        self.calls.push(HostCall::DetachRecognizer(kind));
    }
}
