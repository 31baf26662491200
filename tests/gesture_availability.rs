//! Enabling and disabling the swipe and tap-to-dismiss recognizers

mod common;

use common::{
    gestures_config, record, right_panel_model, runtime_with, CLOSED, HOST, OPEN, SURFACE,
};
use sidepanel::{
    GestureKind, HostCall, PanelConfig, PanelMsg, PanelRuntime, PanelSetup, SimulatedHost,
};

fn plain_runtime() -> PanelRuntime<SimulatedHost> {
    PanelRuntime::new(right_panel_model(PanelConfig::default()), SimulatedHost::new())
}

fn attach_count(runtime: &PanelRuntime<SimulatedHost>, kind: GestureKind) -> usize {
    runtime
        .host()
        .calls
        .iter()
        .filter(|c| **c == HostCall::AttachRecognizer(kind))
        .count()
}

#[test]
fn test_recognizers_off_by_default() {
    let runtime = plain_runtime();
    assert!(runtime.host().recognizers().is_empty());
}

#[test]
fn test_initial_recognizers_from_config() {
    let config = PanelConfig {
        dismiss_enabled: true,
        ..PanelConfig::default()
    };
    let runtime = PanelRuntime::new(right_panel_model(config), SimulatedHost::new());
    assert_eq!(runtime.host().recognizers(), &[GestureKind::Dismiss]);
}

#[test]
fn test_enable_twice_notifies_twice_attaches_once() {
    let mut runtime = plain_runtime();
    let recorder = record(&mut runtime);

    runtime.set_swipe_enabled(true);
    runtime.set_swipe_enabled(true);

    assert_eq!(
        recorder.availability(),
        vec![(GestureKind::Swipe, true), (GestureKind::Swipe, true)]
    );
    assert_eq!(attach_count(&runtime, GestureKind::Swipe), 1);
    assert_eq!(runtime.host().recognizers(), &[GestureKind::Swipe]);
}

#[test]
fn test_disable_twice_notifies_twice_detaches_once() {
    let mut runtime = plain_runtime();
    runtime.set_dismiss_enabled(true);
    let recorder = record(&mut runtime);
    runtime.host_mut().take_calls();

    runtime.set_dismiss_enabled(false);
    runtime.set_dismiss_enabled(false);

    assert_eq!(
        recorder.availability(),
        vec![(GestureKind::Dismiss, false), (GestureKind::Dismiss, false)]
    );
    assert_eq!(
        runtime.host().calls,
        vec![HostCall::DetachRecognizer(GestureKind::Dismiss)]
    );
    assert!(runtime.host().recognizers().is_empty());
}

#[test]
fn test_disabling_an_absent_recognizer_still_notifies() {
    let mut runtime = plain_runtime();
    let recorder = record(&mut runtime);

    runtime.set_swipe_enabled(false);

    assert_eq!(recorder.availability(), vec![(GestureKind::Swipe, false)]);
    assert!(runtime.host().calls.iter().all(|c| !matches!(
        c,
        HostCall::DetachRecognizer(_)
    )));
}

#[test]
fn test_toggles_are_independent() {
    let mut runtime = plain_runtime();
    runtime.set_swipe_enabled(true);
    runtime.set_dismiss_enabled(true);
    runtime.set_swipe_enabled(false);

    assert_eq!(runtime.host().recognizers(), &[GestureKind::Dismiss]);
    assert!(runtime
        .model()
        .host
        .as_ref()
        .is_some_and(|h| h.has_recognizer(GestureKind::Dismiss)
            && !h.has_recognizer(GestureKind::Swipe)));
}

#[test]
fn test_toggle_without_host_only_notifies() {
    let mut runtime = runtime_with(
        PanelSetup::new(SURFACE).with_frames(CLOSED, OPEN),
        PanelConfig::default(),
    );
    let recorder = record(&mut runtime);

    runtime.set_swipe_enabled(true);
    runtime.set_dismiss_enabled(true);

    assert_eq!(
        recorder.availability(),
        vec![(GestureKind::Swipe, true), (GestureKind::Dismiss, true)]
    );
    assert!(runtime.host().calls.is_empty());
}

#[test]
fn test_disable_without_host_survives_host_arrival() {
    let mut runtime = runtime_with(
        PanelSetup::new(SURFACE).with_frames(CLOSED, OPEN),
        gestures_config(),
    );
    let recorder = record(&mut runtime);

    runtime.set_swipe_enabled(false);
    runtime.dispatch(PanelMsg::HostChanged(Some(HOST)));

    assert_eq!(runtime.host().recognizers(), &[GestureKind::Dismiss]);
    assert_eq!(attach_count(&runtime, GestureKind::Swipe), 0);
    assert_eq!(
        recorder.availability(),
        vec![(GestureKind::Swipe, false), (GestureKind::Dismiss, true)]
    );
}

#[test]
fn test_enable_without_host_installs_on_host_arrival() {
    let mut runtime = runtime_with(
        PanelSetup::new(SURFACE).with_frames(CLOSED, OPEN),
        PanelConfig::default(),
    );

    runtime.set_dismiss_enabled(true);
    runtime.dispatch(PanelMsg::HostChanged(Some(HOST)));
    assert_eq!(runtime.host().recognizers(), &[GestureKind::Dismiss]);

    // Applied once; a resize does not re-install
    runtime.host_mut().take_calls();
    runtime.dispatch(PanelMsg::HostChanged(Some(HOST)));
    assert!(runtime.host().calls.is_empty());
}

#[test]
fn test_unsubscribed_observer_hears_nothing() {
    let mut runtime = plain_runtime();
    let recorder = record(&mut runtime);
    runtime.set_swipe_enabled(true);

    let handle: std::rc::Rc<dyn sidepanel::PanelObserver> = recorder.clone();
    runtime.unsubscribe(&handle);
    runtime.set_swipe_enabled(false);

    assert_eq!(recorder.availability(), vec![(GestureKind::Swipe, true)]);
}
