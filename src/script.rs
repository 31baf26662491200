//! Gesture scripts for replaying input against a panel
//!
//! A script is a YAML or JSON document with a list of steps:
//!
//! ```yaml
//! steps:
//!   - op: swipe_gesture
//!     enabled: true
//!   - op: begin
//!   - op: drag
//!     dx: -150
//!     vx: -900
//!   - op: end
//!   - op: settle
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::PanelError;
use crate::geometry::{Rect, Vector};
use crate::messages::{DragMsg, PanelMsg};

/// One scripted input
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum ScriptStep {
    /// Drag began
    Begin,
    /// Drag sample: cumulative translation and instantaneous velocity
    Drag {
        #[serde(default)]
        dx: f64,
        #[serde(default)]
        dy: f64,
        #[serde(default)]
        vx: f64,
        #[serde(default)]
        vy: f64,
    },
    /// Drag released
    End,
    /// Drag cancelled
    Cancel,
    /// Tap in the surface's local coordinates
    Tap { x: f64, y: f64 },
    Move {
        offset: f64,
        #[serde(default)]
        duration: Option<f64>,
    },
    Present {
        #[serde(default)]
        duration: Option<f64>,
    },
    Dismiss {
        #[serde(default)]
        duration: Option<f64>,
    },
    SwipeGesture { enabled: bool },
    DismissGesture { enabled: bool },
    /// Host container resized
    Resize { width: f64, height: f64 },
    /// Host container went away
    RemoveHost,
    /// Let every running animation finish
    Settle,
}

impl ScriptStep {
    pub fn name(&self) -> &'static str {
        match self {
            ScriptStep::Begin => "begin",
            ScriptStep::Drag { .. } => "drag",
            ScriptStep::End => "end",
            ScriptStep::Cancel => "cancel",
            ScriptStep::Tap { .. } => "tap",
            ScriptStep::Move { .. } => "move",
            ScriptStep::Present { .. } => "present",
            ScriptStep::Dismiss { .. } => "dismiss",
            ScriptStep::SwipeGesture { .. } => "swipe_gesture",
            ScriptStep::DismissGesture { .. } => "dismiss_gesture",
            ScriptStep::Resize { .. } => "resize",
            ScriptStep::RemoveHost => "remove_host",
            ScriptStep::Settle => "settle",
        }
    }

    /// The panel message for this step; `None` for `Settle`, which acts on the host
    pub fn to_msg(&self) -> Option<PanelMsg> {
        let msg = match *self {
            ScriptStep::Begin => PanelMsg::Drag(DragMsg::Began),
            ScriptStep::Drag { dx, dy, vx, vy } => {
                PanelMsg::drag_changed(Vector::new(dx, dy), Vector::new(vx, vy))
            }
            ScriptStep::End => PanelMsg::Drag(DragMsg::Ended),
            ScriptStep::Cancel => PanelMsg::Drag(DragMsg::Cancelled),
            ScriptStep::Tap { x, y } => PanelMsg::Tap {
                location: Vector::new(x, y),
            },
            ScriptStep::Move { offset, duration } => PanelMsg::Move { offset, duration },
            ScriptStep::Present { duration } => PanelMsg::Present { duration },
            ScriptStep::Dismiss { duration } => PanelMsg::Dismiss { duration },
            ScriptStep::SwipeGesture { enabled } => PanelMsg::SetSwipeEnabled(enabled),
            ScriptStep::DismissGesture { enabled } => PanelMsg::SetDismissEnabled(enabled),
            ScriptStep::Resize { width, height } => {
                PanelMsg::HostChanged(Some(Rect::new(0.0, 0.0, width, height)))
            }
            ScriptStep::RemoveHost => PanelMsg::HostChanged(None),
            ScriptStep::Settle => return None,
        };
        Some(msg)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GestureScript {
    #[serde(default)]
    pub steps: Vec<ScriptStep>,
}

/// Serialization format of a script file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScriptFormat {
    Yaml,
    Json,
}

impl ScriptFormat {
    /// `.json` files are JSON, everything else is YAML
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => ScriptFormat::Json,
            _ => ScriptFormat::Yaml,
        }
    }
}

impl GestureScript {
    pub fn parse(content: &str, format: ScriptFormat) -> Result<Self, PanelError> {
        let script = match format {
            ScriptFormat::Yaml => serde_yaml::from_str(content)?,
            ScriptFormat::Json => serde_json::from_str(content)?,
        };
        Ok(script)
    }

    pub fn load(path: &Path) -> Result<Self, PanelError> {
        let content = std::fs::read_to_string(path).map_err(|source| PanelError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content, ScriptFormat::from_path(path))
    }
}
