//! Host container lifecycle: first placement, resizes, teardown

use tracing::{debug, info, warn};

use super::availability::set_gesture;
use crate::commands::Cmd;
use crate::geometry::Rect;
use crate::model::{HostContainer, PanelModel};
use crate::panel::GestureKind;

/// Commands to run right after a model is created.
///
/// Places the surface at its closed frame and installs the recognizers the
/// config asks for. Without a host both are deferred until one appears.
pub fn start(model: &mut PanelModel) -> Option<Cmd> {
    let mut cmds = Vec::new();
    if let Some(cmd) = attach_surface(model) {
        cmds.push(cmd);
    }

    model.initial_gestures_pending = true;
    if model.host.is_some() {
        cmds.extend(initial_gestures(model));
    }

    let cmd = Cmd::batch(cmds);
    (cmd != Cmd::None).then_some(cmd)
}

/// Install the recognizers wanted on a freshly available host.
///
/// Requests made while hostless take precedence over the config, which only
/// applies on first placement.
fn initial_gestures(model: &mut PanelModel) -> Vec<Cmd> {
    let from_config = std::mem::take(&mut model.initial_gestures_pending);
    let mut cmds = Vec::new();
    for kind in [GestureKind::Swipe, GestureKind::Dismiss] {
        let configured = match kind {
            GestureKind::Swipe => model.config.swipe_enabled,
            GestureKind::Dismiss => model.config.dismiss_enabled,
        };
        let wanted = model
            .deferred_gesture(kind)
            .take()
            .unwrap_or(from_config && configured);
        if wanted {
            cmds.extend(set_gesture(model, kind, true));
        }
    }
    cmds
}

fn has_deferred_gestures(model: &PanelModel) -> bool {
    model.initial_gestures_pending
        || model.deferred_swipe.is_some()
        || model.deferred_dismiss.is_some()
}

/// Add the surface to the host at the closed frame, the first time it is positioned
fn attach_surface(model: &mut PanelModel) -> Option<Cmd> {
    let closed = model.frames()?.closed;
    let surface = model.surface();
    let host = model.host.as_mut()?;
    if host.contains_surface {
        return None;
    }
    host.contains_surface = true;
    model.set_surface_frame(closed);
    debug!(%surface, frame = ?closed, "attaching surface");
    Some(Cmd::AttachSurface {
        surface,
        frame: closed,
    })
}

/// The host container appeared, resized, or disappeared
pub fn host_changed(model: &mut PanelModel, bounds: Option<Rect>) -> Option<Cmd> {
    let Some(bounds) = bounds else {
        if model.host.take().is_some() {
            info!("host container removed");
            model.session = None;
        }
        return None;
    };

    match model.host.as_mut() {
        Some(host) => host.bounds = bounds,
        None => {
            info!(width = bounds.width, height = bounds.height, "host container available");
            model.host = Some(HostContainer::new(bounds));
        }
    }

    if let Err(e) = model.resolve_frames() {
        warn!("cannot place panel in host: {}", e);
        return None;
    }

    let mut cmds = Vec::new();
    if let Some(cmd) = attach_surface(model) {
        cmds.push(cmd);
    }
    if has_deferred_gestures(model) {
        cmds.extend(initial_gestures(model));
    }

    let cmd = Cmd::batch(cmds);
    (cmd != Cmd::None).then_some(cmd)
}

/// Someone else removed the surface from the host
pub fn surface_detached(model: &mut PanelModel) -> Option<Cmd> {
    if let Some(host) = model.host.as_mut() {
        host.contains_surface = false;
    }
    None
}

/// Commands to run when the panel is discarded: uninstall recognizers and
/// take the surface out of the host.
pub fn teardown(model: &mut PanelModel) -> Option<Cmd> {
    model.session = None;
    let surface = model.surface();
    let host = model.host.as_mut()?;

    let mut cmds: Vec<Cmd> = host
        .recognizers()
        .into_iter()
        .map(|kind| {
            host.remove_recognizer(kind);
            Cmd::DetachRecognizer(kind)
        })
        .collect();

    if host.contains_surface {
        host.contains_surface = false;
        cmds.push(Cmd::DetachSurface { surface });
    }

    let cmd = Cmd::batch(cmds);
    (cmd != Cmd::None).then_some(cmd)
}
