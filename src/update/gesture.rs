//! Swipe and tap recognizer handlers
//!
//! Drag: Idle -> Dragging -> Idle. Begin records where the surface starts,
//! each change re-lays the surface out immediately, and release settles it
//! fully open or fully closed.

use tracing::{debug, trace};

use super::motion::{animate_to, move_to};
use crate::commands::Cmd;
use crate::geometry::Vector;
use crate::messages::DragMsg;
use crate::model::PanelModel;
use crate::panel::{release_target, GestureKind, GestureSession};

fn recognizer_installed(model: &PanelModel, kind: GestureKind) -> bool {
    model
        .host
        .as_ref()
        .is_some_and(|host| host.has_recognizer(kind))
}

/// Update function for swipe recognizer samples
pub fn update_drag(model: &mut PanelModel, msg: DragMsg) -> Option<Cmd> {
    if !recognizer_installed(model, GestureKind::Swipe) {
        trace!(?msg, "drag ignored: swipe recognizer not installed");
        return None;
    }
    // No host or no frames: nothing to track against
    let track = model.drag_track()?;
    let axis = model.axis();

    match msg {
        DragMsg::Began => {
            let start_location = if model.surface_attached() {
                model.surface_frame().origin_on(axis)
            } else {
                track.hidden_location()
            };
            debug!(start_location, %axis, "drag began");
            model.session = Some(GestureSession::begin(start_location));
            None
        }

        DragMsg::Changed {
            translation,
            velocity,
        } => {
            let session = model.session.as_mut()?;
            session.record_velocity(velocity, axis);

            let position = session.start_location + translation.on(axis);
            let offset = track.offset_for(position);
            trace!(position, offset, "drag changed");
            move_to(model, offset, 0.0)
        }

        DragMsg::Ended => {
            let session = model.session.take()?;
            let current = model.current_offset()?;
            let velocity = session.closing_velocity(axis, track.direction);
            let target = release_target(current, velocity, &model.config.thresholds);
            debug!(current, velocity, target, "drag ended");
            animate_to(model, target)
        }

        DragMsg::Cancelled => None,
    }
}

/// Tap outside the fully open surface dismisses it
pub fn handle_tap(model: &mut PanelModel, location: Vector) -> Option<Cmd> {
    if !recognizer_installed(model, GestureKind::Dismiss) {
        trace!("tap ignored: dismiss recognizer not installed");
        return None;
    }
    if !model.is_fully_open() {
        return None;
    }
    if model.surface_frame().contains_local(location) {
        // Belongs to the panel's own content
        return None;
    }

    debug!(x = location.x, y = location.y, "tap outside panel, dismissing");
    animate_to(model, 0.0)
}
