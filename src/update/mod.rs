//! Update functions for the Elm-style architecture
//!
//! All state transformations flow through these functions.

mod availability;
mod gesture;
mod host;
mod motion;

use crate::commands::Cmd;
use crate::messages::PanelMsg;
use crate::model::PanelModel;
use crate::observer::PanelEvent;
use crate::panel::GestureKind;

#[cfg(debug_assertions)]
use crate::tracing::PanelSnapshot;
#[cfg(debug_assertions)]
use tracing::{debug, span, Level};

pub use availability::set_gesture;
pub use gesture::{handle_tap, update_drag};
pub use host::{host_changed, start, surface_detached, teardown};
pub use motion::{animate_to, move_to};

/// Main update function - dispatches to sub-handlers
///
/// In debug builds, this wraps with tracing instrumentation.
/// In release builds, it's a direct dispatch with zero overhead.
#[inline]
pub fn update(model: &mut PanelModel, msg: PanelMsg) -> Option<Cmd> {
    #[cfg(debug_assertions)]
    {
        update_traced(model, msg)
    }
    #[cfg(not(debug_assertions))]
    {
        update_inner(model, msg)
    }
}

/// Inner update logic (no tracing)
fn update_inner(model: &mut PanelModel, msg: PanelMsg) -> Option<Cmd> {
    match msg {
        PanelMsg::Drag(m) => gesture::update_drag(model, m),
        PanelMsg::Tap { location } => gesture::handle_tap(model, location),

        PanelMsg::Move { offset, duration } => {
            let duration = duration.unwrap_or(model.config.animation_duration);
            motion::move_to(model, offset, duration)
        }
        PanelMsg::Present { duration } => {
            let duration = duration.unwrap_or(model.config.animation_duration);
            motion::move_to(model, 1.0, duration)
        }
        PanelMsg::Dismiss { duration } => {
            let duration = duration.unwrap_or(model.config.animation_duration);
            motion::move_to(model, 0.0, duration)
        }

        PanelMsg::SetSwipeEnabled(enabled) => {
            availability::set_gesture(model, GestureKind::Swipe, enabled)
        }
        PanelMsg::SetDismissEnabled(enabled) => {
            availability::set_gesture(model, GestureKind::Dismiss, enabled)
        }

        PanelMsg::MoveFinished { offset } => {
            Some(Cmd::Notify(PanelEvent::FinishedMoving { offset }))
        }
        PanelMsg::HostChanged(bounds) => host::host_changed(model, bounds),
        PanelMsg::SurfaceDetached => host::surface_detached(model),
    }
}

/// Update with tracing instrumentation (debug builds only)
#[cfg(debug_assertions)]
fn update_traced(model: &mut PanelModel, msg: PanelMsg) -> Option<Cmd> {
    // Skip logging for per-frame drag samples and completions
    let is_noisy = msg.is_noisy();

    let _span = if is_noisy {
        None
    } else {
        Some(span!(Level::DEBUG, "update", msg = msg.name()).entered())
    };

    if !is_noisy {
        debug!(target: "message", msg = msg.name(), "processing");
    }

    let before = PanelSnapshot::from_model(model);
    let result = update_inner(model, msg);
    let after = PanelSnapshot::from_model(model);

    if let Some(diff) = before.diff(&after) {
        debug!(target: "panel", %diff, "state changed");
    }
    if !is_noisy {
        if let Some(frame) = result.as_ref().and_then(Cmd::target_frame) {
            debug!(target: "panel", ?frame, "surface target");
        }
    }

    result
}
