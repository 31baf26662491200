//! Installing and removing recognizers

use crate::commands::Cmd;
use crate::model::PanelModel;
use crate::observer::PanelEvent;
use crate::panel::GestureKind;

/// Enable or disable a recognizer.
///
/// Attaches/detaches only when membership actually changes, but always
/// notifies with the requested state. Without a host the request is kept and
/// applied when one appears, overriding the config.
pub fn set_gesture(model: &mut PanelModel, kind: GestureKind, enabled: bool) -> Option<Cmd> {
    let change = match model.host.as_mut() {
        Some(host) if enabled => host
            .add_recognizer(kind)
            .then_some(Cmd::AttachRecognizer(kind)),
        Some(host) => host
            .remove_recognizer(kind)
            .then_some(Cmd::DetachRecognizer(kind)),
        None => {
            tracing::debug!(%kind, enabled, "no host container, recognizer deferred");
            *model.deferred_gesture(kind) = Some(enabled);
            None
        }
    };

    if kind == GestureKind::Swipe && !enabled {
        model.session = None;
    }

    let notify = Cmd::Notify(PanelEvent::GestureAvailabilityChanged { kind, enabled });
    Some(change.unwrap_or_default().and(notify))
}
