use std::path::PathBuf;

use crate::geometry::SwipeAxis;

#[derive(Debug, thiserror::Error)]
pub enum PanelError {
    #[error("closed and open frames share the same {axis} origin ({coordinate}); the panel cannot move on that axis")]
    DegenerateAxis { axis: SwipeAxis, coordinate: f64 },
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("no config directory available")]
    NoConfigDir,
    #[error("{0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("{0}")]
    Json(#[from] serde_json::Error),
}
