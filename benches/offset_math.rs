//! Benchmarks for the per-sample drag path
//!
//! Run with: cargo bench offset_math

use sidepanel::config::GestureThresholds;
use sidepanel::messages::{DragMsg, PanelMsg};
use sidepanel::panel::{release_target, DragTrack, PanelDirection};
use sidepanel::update::{start, update};
use sidepanel::{
    ManagedSurface, PanelConfig, PanelFrames, PanelModel, PanelSetup, Rect, SurfaceId,
    SwipeAxis, Vector,
};

fn main() {
    divan::main();
}

fn frames() -> PanelFrames {
    PanelFrames {
        closed: Rect::new(1920.0, 0.0, 480.0, 1080.0),
        open: Rect::new(1440.0, 0.0, 480.0, 1080.0),
    }
}

fn dragging_model() -> PanelModel {
    let config = PanelConfig {
        swipe_enabled: true,
        ..PanelConfig::default()
    };
    let frames = frames();
    let mut model = PanelModel::new(
        PanelSetup::new(ManagedSurface::View(SurfaceId(1)))
            .with_frames(frames.closed, frames.open)
            .with_host(Rect::new(0.0, 0.0, 1920.0, 1080.0)),
        config,
    )
    .unwrap();
    start(&mut model);
    update(&mut model, PanelMsg::Drag(DragMsg::Began));
    model
}

// ============================================================================
// Pure math
// ============================================================================

#[divan::bench]
fn frame_at() -> Rect {
    let frames = frames();
    frames.frame_at(divan::black_box(0.37))
}

#[divan::bench]
fn offset_of() -> f64 {
    let frames = frames();
    let frame = divan::black_box(Rect::new(1700.0, 0.0, 480.0, 1080.0));
    frames.offset_of(&frame, SwipeAxis::Horizontal)
}

#[divan::bench(args = [PanelDirection::Trailing, PanelDirection::Leading])]
fn track_offset(direction: PanelDirection) -> f64 {
    let track = DragTrack {
        bound: 1920.0,
        extent: 480.0,
        direction,
    };
    track.offset_for(divan::black_box(1650.0))
}

#[divan::bench]
fn release_decision() -> f64 {
    let thresholds = GestureThresholds::default();
    release_target(
        divan::black_box(0.72),
        divan::black_box(1350.0),
        &thresholds,
    )
}

// ============================================================================
// Full update path
// ============================================================================

#[divan::bench(args = [10, 100, 1000])]
fn drag_samples(bencher: divan::Bencher, samples: usize) {
    bencher
        .with_inputs(dragging_model)
        .bench_local_values(|mut model| {
            for i in 0..samples {
                let dx = -(i as f64 % 480.0);
                update(
                    &mut model,
                    PanelMsg::drag_changed(Vector::new(dx, 0.0), Vector::new(-900.0, 0.0)),
                );
            }
            update(&mut model, PanelMsg::Drag(DragMsg::Ended));
            model
        });
}
