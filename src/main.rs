//! sidepanel - replay gesture scripts against a simulated side panel

mod cli;

use std::rc::Rc;

use anyhow::{Context, Result};
use clap::Parser;
use serde_json::json;

use sidepanel::script::{GestureScript, ScriptStep};
use sidepanel::{
    GestureKind, ManagedSurface, PanelConfig, PanelModel, PanelObserver, PanelRuntime,
    PanelSetup, SimulatedHost, SurfaceId,
};

use crate::cli::CliArgs;

/// Prints delegate notifications as they arrive
struct PrintingObserver {
    json: bool,
}

impl PanelObserver for PrintingObserver {
    fn on_finished_moving(&self, offset: f64) {
        if self.json {
            println!("{}", json!({ "event": "finished_moving", "offset": offset }));
        } else {
            println!("      finished moving (requested {:.3})", offset);
        }
    }

    fn on_gesture_availability_changed(&self, kind: GestureKind, enabled: bool) {
        if self.json {
            println!(
                "{}",
                json!({ "event": "gesture_availability", "kind": kind, "enabled": enabled })
            );
        } else {
            let state = if enabled { "enabled" } else { "disabled" };
            println!("      {} gesture {}", kind, state);
        }
    }
}

fn report(runtime: &PanelRuntime<SimulatedHost>, index: usize, op: &str, json: bool) {
    let model = runtime.model();
    let frame = model.surface_frame();
    let offset = model.current_offset();
    let pending = runtime.host().pending_animations();

    if json {
        println!(
            "{}",
            json!({
                "step": index,
                "op": op,
                "offset": offset,
                "frame": frame,
                "dragging": model.session.is_some(),
                "pending_animations": pending,
            })
        );
    } else {
        let offset = offset.map_or_else(|| "-".to_string(), |o| format!("{:.3}", o));
        println!(
            "[{:>3}] {:<16} offset={:<6} frame=({:.1}, {:.1}, {:.1}, {:.1}) pending={}",
            index, op, offset, frame.x, frame.y, frame.width, frame.height, pending
        );
    }
}

fn main() -> Result<()> {
    sidepanel::tracing::init();

    let replay = CliArgs::parse()
        .into_config()
        .map_err(anyhow::Error::msg)?;

    let mut config = match &replay.config_path {
        Some(path) => PanelConfig::load_from(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => PanelConfig::load(),
    };
    if let Some(axis) = replay.axis {
        config.swipe_axis = axis;
    }

    let script = GestureScript::load(&replay.script)
        .with_context(|| format!("Failed to load script {}", replay.script.display()))?;

    let mut setup = PanelSetup::new(ManagedSurface::View(SurfaceId(1))).with_host(replay.host);
    if let Some((closed, open)) = replay
        .frames_for(config.swipe_axis)
        .map_err(anyhow::Error::msg)?
    {
        setup = setup.with_frames(closed, open);
    }

    let model = PanelModel::new(setup, config).context("Invalid panel frames")?;
    let mut runtime = PanelRuntime::new(model, SimulatedHost::new());

    let observer: Rc<dyn PanelObserver> = Rc::new(PrintingObserver { json: replay.json });
    runtime.subscribe(&observer);

    tracing::info!(
        steps = script.steps.len(),
        script = %replay.script.display(),
        "replaying gesture script"
    );

    report(&runtime, 0, "start", replay.json);
    for (index, step) in script.steps.iter().enumerate() {
        match step.to_msg() {
            Some(msg) => runtime.dispatch(msg),
            None => {
                runtime.settle();
            }
        }
        report(&runtime, index + 1, step.name(), replay.json);
    }

    // Let whatever is still animating land before exiting
    if runtime.host().pending_animations() > 0 {
        runtime.settle();
        report(
            &runtime,
            script.steps.len() + 1,
            ScriptStep::Settle.name(),
            replay.json,
        );
    }

    Ok(())
}
