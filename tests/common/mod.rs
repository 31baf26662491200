//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use sidepanel::messages::{DragMsg, PanelMsg};
use sidepanel::{
    GestureKind, ManagedSurface, PanelConfig, PanelEvent, PanelModel, PanelObserver,
    PanelRuntime, PanelSetup, Rect, SimulatedHost, SurfaceId, Vector,
};

/// Host container used by most tests: 400 wide, 500 tall
pub const HOST: Rect = Rect::new(0.0, 0.0, 400.0, 500.0);

/// 300x500 panel parked just past the right edge of `HOST`
pub const CLOSED: Rect = Rect::new(400.0, 0.0, 300.0, 500.0);

/// The same panel slid in so its right edge is flush with the host
pub const OPEN: Rect = Rect::new(100.0, 0.0, 300.0, 500.0);

pub const SURFACE: ManagedSurface = ManagedSurface::View(SurfaceId(1));

/// Config with both recognizers installed at start-up
pub fn gestures_config() -> PanelConfig {
    PanelConfig {
        swipe_enabled: true,
        dismiss_enabled: true,
        ..PanelConfig::default()
    }
}

/// Right-hand panel model in `HOST`, not started yet
pub fn right_panel_model(config: PanelConfig) -> PanelModel {
    PanelModel::new(
        PanelSetup::new(SURFACE)
            .with_frames(CLOSED, OPEN)
            .with_host(HOST),
        config,
    )
    .unwrap()
}

/// Right-hand panel with swipe and tap-to-dismiss enabled
pub fn right_panel_runtime() -> PanelRuntime<SimulatedHost> {
    PanelRuntime::new(right_panel_model(gestures_config()), SimulatedHost::new())
}

pub fn runtime_with(setup: PanelSetup, config: PanelConfig) -> PanelRuntime<SimulatedHost> {
    PanelRuntime::new(PanelModel::new(setup, config).unwrap(), SimulatedHost::new())
}

/// Observer that records every notification
#[derive(Default)]
pub struct Recorder {
    pub events: RefCell<Vec<PanelEvent>>,
}

impl Recorder {
    pub fn events(&self) -> Vec<PanelEvent> {
        self.events.borrow().clone()
    }

    pub fn finished_offsets(&self) -> Vec<f64> {
        self.events
            .borrow()
            .iter()
            .filter_map(|e| match e {
                PanelEvent::FinishedMoving { offset } => Some(*offset),
                _ => None,
            })
            .collect()
    }

    pub fn availability(&self) -> Vec<(GestureKind, bool)> {
        self.events
            .borrow()
            .iter()
            .filter_map(|e| match e {
                PanelEvent::GestureAvailabilityChanged { kind, enabled } => {
                    Some((*kind, *enabled))
                }
                _ => None,
            })
            .collect()
    }
}

impl PanelObserver for Recorder {
    fn on_finished_moving(&self, offset: f64) {
        self.events
            .borrow_mut()
            .push(PanelEvent::FinishedMoving { offset });
    }

    fn on_gesture_availability_changed(&self, kind: GestureKind, enabled: bool) {
        self.events
            .borrow_mut()
            .push(PanelEvent::GestureAvailabilityChanged { kind, enabled });
    }
}

/// Subscribe a fresh recorder. The runtime only holds it weakly.
pub fn record(runtime: &mut PanelRuntime<SimulatedHost>) -> Rc<Recorder> {
    let recorder = Rc::new(Recorder::default());
    let handle: Rc<dyn PanelObserver> = recorder.clone();
    runtime.subscribe(&handle);
    recorder
}

/// Horizontal drag sample
pub fn drag_x(translation: f64, velocity: f64) -> PanelMsg {
    PanelMsg::drag_changed(Vector::new(translation, 0.0), Vector::new(velocity, 0.0))
}

/// Park the panel at `offset`, then grab it and let go with a horizontal velocity.
/// Returns the offset the release settles on.
pub fn release_at(runtime: &mut PanelRuntime<SimulatedHost>, offset: f64, velocity: f64) -> f64 {
    runtime.move_to(offset, Some(0.0));
    runtime.dispatch(PanelMsg::Drag(DragMsg::Began));
    runtime.dispatch(drag_x(0.0, velocity));
    runtime.dispatch(PanelMsg::Drag(DragMsg::Ended));
    runtime.current_offset().unwrap()
}

pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {}, got {}",
        expected,
        actual
    );
}
