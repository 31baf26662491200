//! Moving the surface to an offset

use crate::commands::{Animation, Cmd};
use crate::model::PanelModel;

/// Move the surface to `offset` (clamped when applied) over `duration` seconds.
///
/// The command carries the unclamped offset so the completion notification
/// reports what was asked for. Without resolved frames this is a no-op.
pub fn move_to(model: &mut PanelModel, offset: f64, duration: f64) -> Option<Cmd> {
    let Some(frames) = model.frames() else {
        tracing::debug!(offset, "move ignored: panel frames not resolved yet");
        return None;
    };

    let frame = frames.frame_at(offset);
    model.set_surface_frame(frame);

    Some(Cmd::SetSurfaceFrame {
        surface: model.surface(),
        frame,
        animation: Animation::ease_out(duration),
        offset,
    })
}

/// Animated move using the configured default duration
pub fn animate_to(model: &mut PanelModel, offset: f64) -> Option<Cmd> {
    let duration = model.config.animation_duration;
    move_to(model, offset, duration)
}
