//! Offset <-> frame mapping through the public move operation
//!
//! Every axis/direction combination must recover the (clamped) offset it was
//! moved to, with 0 meaning closed and 1 meaning open.

mod common;

use common::{assert_close, right_panel_model, CLOSED, HOST, OPEN, SURFACE};
use sidepanel::messages::PanelMsg;
use sidepanel::update::update;
use sidepanel::{
    Cmd, PanelConfig, PanelDirection, PanelFrames, PanelModel, PanelSetup, Rect, SwipeAxis,
};

const OFFSETS: [f64; 7] = [0.0, 0.25, 0.5, 0.75, 1.0, -0.5, 1.5];

fn model_for(closed: Rect, open: Rect, axis: SwipeAxis) -> PanelModel {
    let config = PanelConfig {
        swipe_axis: axis,
        ..PanelConfig::default()
    };
    PanelModel::new(
        PanelSetup::new(SURFACE)
            .with_frames(closed, open)
            .with_host(HOST),
        config,
    )
    .unwrap()
}

fn assert_round_trip(mut model: PanelModel, direction: PanelDirection) {
    let axis = model.axis();
    assert_eq!(model.frames().unwrap().direction(axis), direction);

    for &offset in &OFFSETS {
        update(&mut model, PanelMsg::move_to(offset));
        let expected = offset.clamp(0.0, 1.0);
        assert_close(model.current_offset().unwrap(), expected);
    }
}

// ============================================================================
// Endpoints
// ============================================================================

#[test]
fn test_offset_zero_is_closed_and_one_is_open() {
    let frames = PanelFrames::new(CLOSED, OPEN, SwipeAxis::Horizontal).unwrap();
    assert_eq!(frames.frame_at(0.0), CLOSED);
    assert_eq!(frames.frame_at(1.0), OPEN);
}

#[test]
fn test_new_model_rests_at_closed() {
    let model = right_panel_model(PanelConfig::default());
    assert_eq!(model.surface_frame(), CLOSED);
    assert_eq!(model.current_offset(), Some(0.0));
}

#[test]
fn test_fields_interpolate_independently() {
    let closed = Rect::new(400.0, 0.0, 300.0, 500.0);
    let open = Rect::new(100.0, 50.0, 200.0, 400.0);
    let frames = PanelFrames::new(closed, open, SwipeAxis::Horizontal).unwrap();

    assert_eq!(frames.frame_at(0.5), Rect::new(250.0, 25.0, 250.0, 450.0));
}

#[test]
fn test_move_clamps_the_applied_frame() {
    let mut model = right_panel_model(PanelConfig::default());

    let cmd = update(&mut model, PanelMsg::move_to(1.5));
    assert_eq!(model.surface_frame(), OPEN);
    assert!(matches!(
        cmd,
        Some(Cmd::SetSurfaceFrame { frame, offset, .. }) if frame == OPEN && offset == 1.5
    ));

    update(&mut model, PanelMsg::move_to(-3.0));
    assert_eq!(model.surface_frame(), CLOSED);
}

#[test]
fn test_present_and_dismiss() {
    let mut model = right_panel_model(PanelConfig::default());

    update(&mut model, PanelMsg::present());
    assert_eq!(model.surface_frame(), OPEN);
    assert!(model.is_fully_open());

    update(&mut model, PanelMsg::dismiss());
    assert_eq!(model.surface_frame(), CLOSED);
}

#[test]
fn test_move_uses_configured_duration() {
    let config = PanelConfig {
        animation_duration: 0.4,
        ..PanelConfig::default()
    };
    let mut model = right_panel_model(config);

    match update(&mut model, PanelMsg::present()) {
        Some(Cmd::SetSurfaceFrame { animation, .. }) => assert_eq!(animation.duration, 0.4),
        other => panic!("expected a frame change, got {:?}", other),
    }
    match update(
        &mut model,
        PanelMsg::Move {
            offset: 0.5,
            duration: Some(0.0),
        },
    ) {
        Some(Cmd::SetSurfaceFrame { animation, .. }) => assert!(animation.is_immediate()),
        other => panic!("expected a frame change, got {:?}", other),
    }
}

// ============================================================================
// Round trips per axis and direction
// ============================================================================

#[test]
fn test_round_trip_horizontal_trailing() {
    assert_round_trip(
        model_for(CLOSED, OPEN, SwipeAxis::Horizontal),
        PanelDirection::Trailing,
    );
}

#[test]
fn test_round_trip_horizontal_leading() {
    assert_round_trip(
        model_for(
            Rect::new(-300.0, 0.0, 300.0, 500.0),
            Rect::new(0.0, 0.0, 300.0, 500.0),
            SwipeAxis::Horizontal,
        ),
        PanelDirection::Leading,
    );
}

#[test]
fn test_round_trip_vertical_trailing() {
    assert_round_trip(
        model_for(
            Rect::new(0.0, 500.0, 400.0, 300.0),
            Rect::new(0.0, 200.0, 400.0, 300.0),
            SwipeAxis::Vertical,
        ),
        PanelDirection::Trailing,
    );
}

#[test]
fn test_round_trip_vertical_leading() {
    assert_round_trip(
        model_for(
            Rect::new(0.0, -300.0, 400.0, 300.0),
            Rect::new(0.0, 0.0, 400.0, 300.0),
            SwipeAxis::Vertical,
        ),
        PanelDirection::Leading,
    );
}

#[test]
fn test_leading_half_open_sits_halfway() {
    let mut model = model_for(
        Rect::new(-300.0, 0.0, 300.0, 500.0),
        Rect::new(0.0, 0.0, 300.0, 500.0),
        SwipeAxis::Horizontal,
    );
    update(&mut model, PanelMsg::move_to(0.25));
    assert_eq!(model.surface_frame().x, -225.0);
}

// ============================================================================
// Frame configuration
// ============================================================================

#[test]
fn test_equal_origins_on_active_axis_rejected() {
    let result = PanelModel::new(
        PanelSetup::new(SURFACE)
            .with_frames(CLOSED, Rect::new(400.0, 0.0, 200.0, 500.0))
            .with_host(HOST),
        PanelConfig::default(),
    );
    assert!(result.is_err());
}

#[test]
fn test_switching_to_a_degenerate_axis_rejected() {
    // Same y on both frames: fine while swiping horizontally, not vertically
    let mut model = right_panel_model(PanelConfig::default());
    assert!(model.set_axis(SwipeAxis::Vertical).is_err());
    assert_eq!(model.axis(), SwipeAxis::Horizontal);
}

#[test]
fn test_setters_validate() {
    let mut model = right_panel_model(PanelConfig::default());

    assert!(model.set_open_frame(Rect::new(400.0, 0.0, 300.0, 500.0)).is_err());
    assert_eq!(model.open_frame(), Some(OPEN));

    model
        .set_open_frame(Rect::new(200.0, 0.0, 200.0, 500.0))
        .unwrap();
    assert_eq!(model.open_frame(), Some(Rect::new(200.0, 0.0, 200.0, 500.0)));
    assert_eq!(model.closed_frame(), Some(CLOSED));
}

#[test]
fn test_default_frames_follow_first_host() {
    let mut model = PanelModel::new(PanelSetup::new(SURFACE), PanelConfig::default()).unwrap();
    assert!(model.frames().is_none());
    assert_eq!(model.current_offset(), None);

    // Nothing to move yet
    assert_eq!(update(&mut model, PanelMsg::present()), None);

    update(
        &mut model,
        PanelMsg::HostChanged(Some(Rect::new(0.0, 0.0, 320.0, 640.0))),
    );
    let frames = *model.frames().unwrap();
    assert_eq!(frames.closed, Rect::new(320.0, 0.0, 320.0, 640.0));
    assert_eq!(frames.open, Rect::new(0.0, 0.0, 320.0, 640.0));

    // Memoized: a resize keeps the first defaults
    update(
        &mut model,
        PanelMsg::HostChanged(Some(Rect::new(0.0, 0.0, 640.0, 480.0))),
    );
    assert_eq!(*model.frames().unwrap(), frames);
}
