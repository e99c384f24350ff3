// ---------------------------------------------------------------------------
// TerrainError: failures while configuring or building the terrain
// ---------------------------------------------------------------------------

use std::fmt;

/// Errors that can occur while loading configuration or building the mesh.
///
/// Gradient sampling is total and never produces one of these.
#[derive(Debug)]
pub enum TerrainError {
    /// Grid width of zero cells; the mesh would be a single point.
    InvalidWidth { width: u32 },
    /// Grid width whose index count does not fit the `u32` index type.
    IndexOverflow { width: u32, max: u32 },
    /// Config file could not be read.
    Io(std::io::Error),
    /// Config file is not valid terrain JSON.
    Config(String),
}

impl fmt::Display for TerrainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TerrainError::InvalidWidth { width } => {
                write!(f, "Invalid grid width {width}: at least one cell is required")
            }
            TerrainError::IndexOverflow { width, max } => write!(
                f,
                "Grid width {width} overflows the u32 index buffer (maximum width is {max})"
            ),
            TerrainError::Io(e) => write!(f, "I/O error: {e}"),
            TerrainError::Config(msg) => write!(f, "Config error: {msg}"),
        }
    }
}

impl std::error::Error for TerrainError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TerrainError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for TerrainError {
    fn from(e: std::io::Error) -> Self {
        TerrainError::Io(e)
    }
}

impl From<serde_json::Error> for TerrainError {
    fn from(e: serde_json::Error) -> Self {
        TerrainError::Config(e.to_string())
    }
}
