//! Endpoint frames and the offset <-> frame mapping
//!
//! Offset 0 is always the closed frame and offset 1 always the open frame,
//! whichever side of the host the panel slides in from.

use serde::{Deserialize, Serialize};

use crate::errors::PanelError;
use crate::geometry::{clamped, Rect, SwipeAxis};

/// Side of the host the panel slides in from on the active axis
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelDirection {
    /// Closed edge is past the open edge (panel enters from the right or bottom)
    Trailing,
    /// Closed edge is before the open edge (panel enters from the left or top)
    Leading,
}

/// The two rectangles the panel interpolates between
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PanelFrames {
    pub closed: Rect,
    pub open: Rect,
}

impl PanelFrames {
    /// Build a validated frame pair for the given active axis
    pub fn new(closed: Rect, open: Rect, axis: SwipeAxis) -> Result<Self, PanelError> {
        let frames = Self { closed, open };
        frames.validate(axis)?;
        Ok(frames)
    }

    /// Default frames for a host: closed sits just past the right edge
    /// (bottom edge when swiping vertically), open is flush with the host
    /// origin. Both span the full host.
    pub fn defaults_for(host: &Rect, axis: SwipeAxis) -> Self {
        let closed = match axis {
            SwipeAxis::Horizontal => Rect::new(host.width, 0.0, host.width, host.height),
            SwipeAxis::Vertical => Rect::new(0.0, host.height, host.width, host.height),
        };
        Self {
            closed,
            open: Rect::new(0.0, 0.0, host.width, host.height),
        }
    }

    /// The endpoints must differ on the active axis, otherwise offsets are undefined
    pub fn validate(&self, axis: SwipeAxis) -> Result<(), PanelError> {
        let closed_edge = self.closed.origin_on(axis);
        if closed_edge == self.open.origin_on(axis) {
            return Err(PanelError::DegenerateAxis {
                axis,
                coordinate: closed_edge,
            });
        }
        Ok(())
    }

    pub fn direction(&self, axis: SwipeAxis) -> PanelDirection {
        if self.closed.origin_on(axis) < self.open.origin_on(axis) {
            PanelDirection::Leading
        } else {
            PanelDirection::Trailing
        }
    }

    /// Frame for a public offset (clamped to `[0, 1]`)
    pub fn frame_at(&self, offset: f64) -> Rect {
        let offset = clamped(offset, 0.0, 1.0);
        Rect::lerp(1.0 - offset, &self.closed, &self.open)
    }

    /// Inverse of [`frame_at`](Self::frame_at) restricted to the active axis.
    ///
    /// Not clamped: a frame outside the endpoints maps outside `[0, 1]`.
    pub fn offset_of(&self, frame: &Rect, axis: SwipeAxis) -> f64 {
        let closed_edge = self.closed.origin_on(axis);
        let open_edge = self.open.origin_on(axis);
        (closed_edge - frame.origin_on(axis)) / (closed_edge - open_edge)
    }
}
