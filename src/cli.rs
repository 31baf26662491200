//! Command-line argument parsing for the replay tool
//!
//! Supports:
//! - Replaying a YAML or JSON gesture script
//! - Host and panel sizing
//! - Config file and axis overrides
//! - JSON line output for piping into other tools

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use sidepanel::{Rect, SwipeAxis};

/// Replay gesture scripts against a simulated side panel
#[derive(Parser, Debug)]
#[command(
    name = "sidepanel",
    version,
    about = "Replay gesture scripts against a simulated side panel"
)]
pub struct CliArgs {
    /// Gesture script to replay (.yaml, .yml or .json)
    #[arg(value_name = "SCRIPT")]
    pub script: PathBuf,

    /// Config file to use instead of the user config
    #[arg(short = 'c', long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Host container width
    #[arg(long, default_value_t = 400.0)]
    pub width: f64,

    /// Host container height
    #[arg(long, default_value_t = 800.0)]
    pub height: f64,

    /// Panel size on the swipe axis; the full host when omitted
    #[arg(long, value_name = "POINTS")]
    pub panel_size: Option<f64>,

    /// Override the configured swipe axis
    #[arg(long, value_enum)]
    pub axis: Option<AxisArg>,

    /// Slide in from the left/top edge instead of the right/bottom
    #[arg(long)]
    pub leading: bool,

    /// Print one JSON object per line
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum AxisArg {
    Horizontal,
    Vertical,
}

impl From<AxisArg> for SwipeAxis {
    fn from(arg: AxisArg) -> Self {
        match arg {
            AxisArg::Horizontal => SwipeAxis::Horizontal,
            AxisArg::Vertical => SwipeAxis::Vertical,
        }
    }
}

/// Validated replay settings
#[derive(Debug, Clone)]
pub struct ReplayConfig {
    pub script: PathBuf,
    pub config_path: Option<PathBuf>,
    pub host: Rect,
    pub panel_size: Option<f64>,
    pub leading: bool,
    pub axis: Option<SwipeAxis>,
    pub json: bool,
}

impl CliArgs {
    pub fn into_config(self) -> Result<ReplayConfig, String> {
        if self.width <= 0.0 || self.height <= 0.0 {
            return Err(format!(
                "Host size must be positive, got {}x{}",
                self.width, self.height
            ));
        }
        if let Some(size) = self.panel_size {
            if size <= 0.0 {
                return Err(format!("Panel size must be positive, got {}", size));
            }
        }

        Ok(ReplayConfig {
            script: self.script,
            config_path: self.config,
            host: Rect::new(0.0, 0.0, self.width, self.height),
            panel_size: self.panel_size,
            leading: self.leading,
            axis: self.axis.map(SwipeAxis::from),
            json: self.json,
        })
    }
}

impl ReplayConfig {
    /// Explicit endpoints for `axis`, or `None` to let the panel derive them from the host
    pub fn frames_for(&self, axis: SwipeAxis) -> Result<Option<(Rect, Rect)>, String> {
        if self.panel_size.is_none() && !self.leading {
            return Ok(None);
        }
        let along = self.host.size_on(axis);
        let size = self.panel_size.unwrap_or(along);
        if size > along {
            return Err(format!(
                "Panel size {} does not fit the {} host extent {}",
                size, axis, along
            ));
        }
        Ok(Some(edge_frames(self.host, axis, size, self.leading)))
    }
}

/// Closed/open frames for a panel of `size` sliding in from one edge of `host`
fn edge_frames(host: Rect, axis: SwipeAxis, size: f64, leading: bool) -> (Rect, Rect) {
    match (axis, leading) {
        (SwipeAxis::Horizontal, false) => (
            Rect::new(host.width, 0.0, size, host.height),
            Rect::new(host.width - size, 0.0, size, host.height),
        ),
        (SwipeAxis::Horizontal, true) => (
            Rect::new(-size, 0.0, size, host.height),
            Rect::new(0.0, 0.0, size, host.height),
        ),
        (SwipeAxis::Vertical, false) => (
            Rect::new(0.0, host.height, host.width, size),
            Rect::new(0.0, host.height - size, host.width, size),
        ),
        (SwipeAxis::Vertical, true) => (
            Rect::new(0.0, -size, host.width, size),
            Rect::new(0.0, 0.0, host.width, size),
        ),
    }
}
