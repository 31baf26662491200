//! Panel model - the complete state of one side panel
//!
//! This module holds the state types following the Elm Architecture pattern.
//! All mutation from gestures and requests goes through `update`; the setters
//! here only guard configuration invariants.

pub mod host;

pub use host::HostContainer;

use crate::config::PanelConfig;
use crate::errors::PanelError;
use crate::geometry::{Rect, SwipeAxis};
use crate::panel::{DragTrack, GestureKind, GestureSession, ManagedSurface, PanelFrames};

/// Construction inputs for a panel
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanelSetup {
    pub surface: ManagedSurface,
    /// Closed frame; derived from the host bounds when omitted
    pub closed: Option<Rect>,
    /// Open frame; derived from the host bounds when omitted
    pub open: Option<Rect>,
    /// Host container bounds, if the host is already available
    pub host: Option<Rect>,
}

impl PanelSetup {
    pub fn new(surface: ManagedSurface) -> Self {
        Self {
            surface,
            closed: None,
            open: None,
            host: None,
        }
    }

    pub fn with_frames(mut self, closed: Rect, open: Rect) -> Self {
        self.closed = Some(closed);
        self.open = Some(open);
        self
    }

    pub fn with_host(mut self, bounds: Rect) -> Self {
        self.host = Some(bounds);
        self
    }
}

/// The complete panel model
#[derive(Debug)]
pub struct PanelModel {
    surface: ManagedSurface,
    /// Frame last applied to the surface (the target of the latest move)
    surface_frame: Rect,
    /// Resolved endpoints. `None` until both frames are known: explicit ones,
    /// or defaults computed once from the first host bounds seen.
    frames: Option<PanelFrames>,
    requested_closed: Option<Rect>,
    requested_open: Option<Rect>,
    axis: SwipeAxis,
    /// Host container, absent until the panel is placed in a window
    pub host: Option<HostContainer>,
    /// Active drag, if any
    pub session: Option<GestureSession>,
    /// Tuning for durations and release heuristics
    pub config: PanelConfig,
    /// Configured recognizers still waiting for a host to be installed on
    pub(crate) initial_gestures_pending: bool,
    /// Swipe/dismiss states requested while no host was available.
    /// These override the config once a host appears.
    pub(crate) deferred_swipe: Option<bool>,
    pub(crate) deferred_dismiss: Option<bool>,
}

impl PanelModel {
    /// Create a panel model. Fails if the resolved frames cannot move on the configured axis.
    pub fn new(setup: PanelSetup, config: PanelConfig) -> Result<Self, PanelError> {
        let mut model = Self {
            surface: setup.surface,
            surface_frame: Rect::ZERO,
            frames: None,
            requested_closed: setup.closed,
            requested_open: setup.open,
            axis: config.swipe_axis,
            host: setup.host.map(HostContainer::new),
            session: None,
            config,
            initial_gestures_pending: false,
            deferred_swipe: None,
            deferred_dismiss: None,
        };

        if let Some(frames) = model.candidate_frames() {
            frames.validate(model.axis)?;
            model.surface_frame = frames.closed;
            model.frames = Some(frames);
        }

        Ok(model)
    }

    pub fn surface(&self) -> ManagedSurface {
        self.surface
    }

    /// Recognizer state waiting for a host, by gesture
    pub(crate) fn deferred_gesture(&mut self, kind: GestureKind) -> &mut Option<bool> {
        match kind {
            GestureKind::Swipe => &mut self.deferred_swipe,
            GestureKind::Dismiss => &mut self.deferred_dismiss,
        }
    }

    pub fn axis(&self) -> SwipeAxis {
        self.axis
    }

    pub fn frames(&self) -> Option<&PanelFrames> {
        self.frames.as_ref()
    }

    pub fn closed_frame(&self) -> Option<Rect> {
        self.frames.map(|f| f.closed).or(self.requested_closed)
    }

    pub fn open_frame(&self) -> Option<Rect> {
        self.frames.map(|f| f.open).or(self.requested_open)
    }

    /// Frame the surface was last moved to
    pub fn surface_frame(&self) -> Rect {
        self.surface_frame
    }

    pub(crate) fn set_surface_frame(&mut self, frame: Rect) {
        self.surface_frame = frame;
    }

    /// Whether the surface is currently inside the host container
    pub fn surface_attached(&self) -> bool {
        self.host.as_ref().is_some_and(|h| h.contains_surface)
    }

    /// Change the swipe axis. The frames must differ on the new axis.
    ///
    /// An in-flight drag is abandoned.
    pub fn set_axis(&mut self, axis: SwipeAxis) -> Result<(), PanelError> {
        if let Some(frames) = &self.frames {
            frames.validate(axis)?;
        }
        if self.axis != axis {
            self.session = None;
        }
        self.axis = axis;
        Ok(())
    }

    pub fn set_closed_frame(&mut self, closed: Rect) -> Result<(), PanelError> {
        match self.frames {
            Some(frames) => self.set_frames(closed, frames.open),
            None => {
                self.requested_closed = Some(closed);
                self.resolve_frames().map(|_| ())
            }
        }
    }

    pub fn set_open_frame(&mut self, open: Rect) -> Result<(), PanelError> {
        match self.frames {
            Some(frames) => self.set_frames(frames.closed, open),
            None => {
                self.requested_open = Some(open);
                self.resolve_frames().map(|_| ())
            }
        }
    }

    /// Replace both endpoints. Does not move the surface.
    pub fn set_frames(&mut self, closed: Rect, open: Rect) -> Result<(), PanelError> {
        let frames = PanelFrames::new(closed, open, self.axis)?;
        self.requested_closed = Some(closed);
        self.requested_open = Some(open);
        self.frames = Some(frames);
        Ok(())
    }

    /// Resolve the endpoints if they are not known yet.
    ///
    /// Defaults are computed from the host bounds once and kept afterwards,
    /// even if the host later resizes.
    pub fn resolve_frames(&mut self) -> Result<Option<&PanelFrames>, PanelError> {
        if self.frames.is_none() {
            if let Some(frames) = self.candidate_frames() {
                frames.validate(self.axis)?;
                tracing::debug!(
                    closed = ?frames.closed,
                    open = ?frames.open,
                    "resolved panel frames"
                );
                if !self.surface_attached() {
                    self.surface_frame = frames.closed;
                }
                self.frames = Some(frames);
            }
        }
        Ok(self.frames.as_ref())
    }

    fn candidate_frames(&self) -> Option<PanelFrames> {
        match (self.requested_closed, self.requested_open) {
            (Some(closed), Some(open)) => Some(PanelFrames { closed, open }),
            (closed, open) => {
                let host = self.host.as_ref()?;
                let defaults = PanelFrames::defaults_for(&host.bounds, self.axis);
                Some(PanelFrames {
                    closed: closed.unwrap_or(defaults.closed),
                    open: open.unwrap_or(defaults.open),
                })
            }
        }
    }

    /// Offset of the surface's current frame; `None` until frames are resolved
    pub fn current_offset(&self) -> Option<f64> {
        self.frames
            .as_ref()
            .map(|f| f.offset_of(&self.surface_frame, self.axis))
    }

    /// Exactly at the open frame on the active axis
    pub fn is_fully_open(&self) -> bool {
        self.current_offset() == Some(1.0)
    }

    /// Drag range for the active axis; `None` without a host or frames
    pub fn drag_track(&self) -> Option<DragTrack> {
        let host = self.host.as_ref()?;
        let frames = self.frames.as_ref()?;
        let extent = frames.open.size_on(self.axis);
        if extent <= 0.0 {
            return None;
        }
        Some(DragTrack {
            bound: host.bounds.size_on(self.axis),
            extent,
            direction: frames.direction(self.axis),
        })
    }
}
