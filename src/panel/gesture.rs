//! Drag and tap gesture math
//!
//! Pure functions over scalars on the active axis. The model owns the
//! session state and feeds these with host and frame measurements.

use serde::{Deserialize, Serialize};

use super::frames::PanelDirection;
use crate::config::GestureThresholds;
use crate::geometry::{clamped, SwipeAxis, Vector};

/// The two recognizers a panel can install on its host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GestureKind {
    /// Continuous drag that tracks the pointer
    Swipe,
    /// Tap outside the open panel
    Dismiss,
}

impl GestureKind {
    pub fn name(&self) -> &'static str {
        match self {
            GestureKind::Swipe => "swipe",
            GestureKind::Dismiss => "dismiss",
        }
    }
}

impl std::fmt::Display for GestureKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// State carried between a drag's begin and end
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureSession {
    /// Active-axis origin of the surface when the drag began
    pub start_location: f64,
    /// Most recent velocity sample with a non-zero active-axis component.
    /// The final sample before release is frequently zero.
    pub last_nonzero_velocity: Vector,
}

impl GestureSession {
    pub fn begin(start_location: f64) -> Self {
        Self {
            start_location,
            last_nonzero_velocity: Vector::ZERO,
        }
    }

    pub fn record_velocity(&mut self, velocity: Vector, axis: SwipeAxis) {
        if velocity.on(axis) != 0.0 {
            self.last_nonzero_velocity = velocity;
        }
    }

    /// Release velocity, signed so that positive always moves towards closed
    pub fn closing_velocity(&self, axis: SwipeAxis, direction: PanelDirection) -> f64 {
        let v = self.last_nonzero_velocity.on(axis);
        match direction {
            PanelDirection::Trailing => v,
            PanelDirection::Leading => -v,
        }
    }
}

/// Geometry of the drag range on the active axis
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragTrack {
    /// Host size on the active axis
    pub bound: f64,
    /// Open frame size on the active axis
    pub extent: f64,
    pub direction: PanelDirection,
}

impl DragTrack {
    /// Where a detached surface is assumed to start: fully hidden past the host edge
    pub fn hidden_location(&self) -> f64 {
        match self.direction {
            PanelDirection::Trailing => self.bound,
            PanelDirection::Leading => -self.extent,
        }
    }

    /// Raw offset for an absolute surface position on the active axis.
    ///
    /// The position is clamped to the drag range first, so the result stays in `[0, 1]`.
    pub fn offset_for(&self, translation: f64) -> f64 {
        match self.direction {
            PanelDirection::Trailing => {
                let t = clamped(translation, self.bound - self.extent, self.bound);
                (self.bound - t) / self.extent
            }
            PanelDirection::Leading => {
                let t = clamped(translation, -self.extent, 0.0);
                (t + self.extent) / self.extent
            }
        }
    }
}

/// Decide where a released drag settles.
///
/// `current` is the live offset, `closing_velocity` the release velocity with
/// positive meaning "towards closed". Returns 0 (closed) or 1 (open).
pub fn release_target(current: f64, closing_velocity: f64, thresholds: &GestureThresholds) -> f64 {
    let v = closing_velocity;
    let fast = thresholds.fast_flick_velocity;

    let dismiss_threshold = if v > fast {
        thresholds.fast_dismiss_offset
    } else {
        thresholds.dismiss_offset
    };
    let dismiss_target = if current < dismiss_threshold { 0.0 } else { 1.0 };
    let present_target = if current > thresholds.present_offset || v < -fast {
        1.0
    } else {
        0.0
    };

    if v > 0.0 {
        dismiss_target
    } else {
        present_target
    }
}
