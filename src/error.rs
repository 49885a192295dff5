use std::path::PathBuf;
use thiserror::Error;

/// Everything that can go wrong around the calculation itself.
///
/// Computing areas and sums never fails; these cover loading scenes and
/// writing the report.
#[derive(Error, Debug)]
pub enum ShapeError {
    #[error("Failed to read scene file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid TOML scene: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Invalid JSON scene: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to write area report: {0}")]
    Output(#[source] std::io::Error),
}

impl ShapeError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, ShapeError>;
