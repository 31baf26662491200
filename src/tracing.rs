//! Tracing infrastructure for development diagnostics
//!
//! Provides structured logging with scoped filtering for debugging gesture
//! sessions and offset transitions.
//!
//! # Usage
//!
//! Configure via RUST_LOG environment variable:
//! - `RUST_LOG=debug` - all debug logs
//! - `RUST_LOG=panel=debug,message=debug` - scoped filtering
//! - `RUST_LOG=sidepanel::update=trace` - module-level filtering (includes drag samples)
//!
//! # Log Files
//!
//! Logs are written to `~/.config/sidepanel/logs/sidepanel.log` with daily rotation.
//! File logging uses debug level by default for more verbose troubleshooting.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::model::PanelModel;
use crate::panel::GestureKind;

/// Initialize tracing subscriber with console and file logging
///
/// Console output respects RUST_LOG (default `warn`).
/// File logging writes to `~/.config/sidepanel/logs/sidepanel.log` with daily rotation.
pub fn init() {
    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    // Console layer - respects RUST_LOG
    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_line_number(true)
        .with_filter(console_filter);

    // File layer - always debug level for troubleshooting
    let file_layer = match crate::config_paths::ensure_logs_dir() {
        Ok(logs_dir) => {
            let file_appender = tracing_appender::rolling::daily(logs_dir, "sidepanel.log");
            Some(
                fmt::layer()
                    .with_writer(file_appender)
                    .with_ansi(false)
                    .with_target(true)
                    .with_line_number(true)
                    .with_filter(EnvFilter::new("debug")),
            )
        }
        Err(e) => {
            eprintln!("Warning: Could not initialize file logging: {}", e);
            None
        }
    };

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .init();
}

/// Lightweight snapshot of panel state for diffing
#[derive(Debug, Clone, PartialEq)]
pub struct PanelSnapshot {
    pub offset: Option<f64>,
    pub dragging: bool,
    pub attached: bool,
    pub recognizers: Vec<GestureKind>,
}

impl PanelSnapshot {
    pub fn from_model(model: &PanelModel) -> Self {
        Self {
            offset: model.current_offset(),
            dragging: model.session.is_some(),
            attached: model.surface_attached(),
            recognizers: model
                .host
                .as_ref()
                .map(|h| h.recognizers())
                .unwrap_or_default(),
        }
    }

    /// Generate a diff description between two snapshots
    pub fn diff(&self, other: &PanelSnapshot) -> Option<String> {
        let mut changes = Vec::new();

        if self.offset != other.offset {
            changes.push(format!(
                "offset: {} → {}",
                fmt_offset(self.offset),
                fmt_offset(other.offset)
            ));
        }
        if self.dragging != other.dragging {
            let status = if other.dragging { "began" } else { "ended" };
            changes.push(format!("drag {}", status));
        }
        if self.attached != other.attached {
            let status = if other.attached { "attached" } else { "detached" };
            changes.push(format!("surface {}", status));
        }
        if self.recognizers != other.recognizers {
            changes.push(format!(
                "recognizers: {:?} → {:?}",
                self.recognizers, other.recognizers
            ));
        }

        if changes.is_empty() {
            None
        } else {
            Some(changes.join("; "))
        }
    }
}

fn fmt_offset(offset: Option<f64>) -> String {
    match offset {
        Some(o) => format!("{:.3}", o),
        None => "unresolved".to_string(),
    }
}
