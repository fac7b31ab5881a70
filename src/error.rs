use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::orientation::TilemapOrientation;

/// Error type for decoding and validating map geometry and debug options.
#[derive(Debug, Error)]
pub enum MapError {
    /// File I/O error
    #[error("I/O error reading {}: {source}", .path.display())]
    Io {
        /// File that failed to read
        path: PathBuf,
        /// Underlying error
        source: io::Error,
    },
    /// Malformed JSON in a map file
    #[error("JSON parse error in {}: {source}", .path.display())]
    Json {
        /// File that failed to parse
        path: PathBuf,
        /// Underlying error
        source: serde_json::Error,
    },
    /// Malformed inline JSON
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),
    /// Unsupported file format (non-JSON)
    #[error("Unsupported file format: {0}")]
    UnsupportedFormat(String),
    /// Structurally invalid map
    #[error("Invalid map: {0}")]
    InvalidMap(String),
    /// Orientation text is not one of the four Tiled orientations
    #[error("Unknown tilemap orientation '{0}'")]
    UnknownOrientation(String),
    /// Stagger axis text is neither `x` nor `y`
    #[error("Unknown stagger axis '{0}'")]
    UnknownStaggerAxis(String),
    /// Stagger index text is neither `odd` nor `even`
    #[error("Unknown stagger index '{0}'")]
    UnknownStaggerIndex(String),
    /// Debug overlay name is not recognised
    #[error("Unknown debug overlay '{0}'")]
    UnknownDebugOverlay(String),
    /// Stagger settings applied to a map that has no staggered rows
    #[error("Stagger settings do not apply to {orientation} maps")]
    StaggerNotApplicable {
        /// Orientation of the map the settings were applied to
        orientation: TilemapOrientation,
    },
    /// Hex side length applied to a map that is not hexagonal
    #[error("Hex side length does not apply to {orientation} maps")]
    HexSideNotApplicable {
        /// Orientation of the map the length was applied to
        orientation: TilemapOrientation,
    },
}
