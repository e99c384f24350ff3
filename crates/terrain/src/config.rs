//! Terrain and window configuration.
//!
//! `TerrainConfig` is a Bevy resource that replaces free-standing width and
//! height globals. It can be loaded from a JSON file named by the
//! `TERRAIN_CONFIG` environment variable; every field is optional in the file.

use std::path::Path;

use bevy::prelude::*;
use serde::Deserialize;

use crate::error::TerrainError;
use crate::mesh::{build_terrain_mesh, TerrainMesh};

pub const DEFAULT_GRID_WIDTH: u32 = 100;
pub const DEFAULT_HEIGHT_SCALE: f32 = 1.0;

/// Largest grid width whose `6 * width^2` index count fits in `u32`. The
/// `(width + 1)^2` vertex count is smaller, so it fits as well.
pub const MAX_GRID_WIDTH: u32 = 26_754;

pub const WINDOW_WIDTH: f32 = 1024.0;
pub const WINDOW_HEIGHT: f32 = 768.0;
pub const WINDOW_TITLE: &str = "Heightfield Terrain";

/// Environment variable holding the path of a JSON config file.
pub const CONFIG_ENV_VAR: &str = "TERRAIN_CONFIG";

#[derive(Resource, Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TerrainConfig {
    /// Number of grid cells along each axis.
    ///
    /// Capped at `MAX_GRID_WIDTH` so counts stay addressable by `u32`. Memory
    /// is not checked: positions, colors and indices take about 48 bytes per
    /// cell, roughly 34 GB at the cap (see `mesh::estimated_mesh_bytes`).
    pub width: u32,
    /// Vertical multiplier applied to the sampled gradient.
    pub height_scale: f32,
    /// Fixed seed for the vertex colors. `None` seeds from the system clock.
    pub color_seed: Option<u64>,
    /// Start in line-only wireframe mode.
    pub wireframe: bool,
}

impl Default for TerrainConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_GRID_WIDTH,
            height_scale: DEFAULT_HEIGHT_SCALE,
            color_seed: None,
            wireframe: true,
        }
    }
}

impl TerrainConfig {
    pub fn from_json_str(json: &str) -> Result<Self, TerrainError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, TerrainError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    /// Load the file named by `TERRAIN_CONFIG`, or the defaults when the
    /// variable is unset.
    pub fn from_env() -> Result<Self, TerrainError> {
        match std::env::var_os(CONFIG_ENV_VAR) {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    /// Seed for the color generator: the configured one, or one derived from
    /// the current time.
    pub fn resolved_color_seed(&self) -> u64 {
        self.color_seed.unwrap_or_else(random_seed)
    }

    pub fn build_mesh(&self) -> Result<TerrainMesh, TerrainError> {
        build_terrain_mesh(self.width, self.height_scale)
    }
}

/// Generate a random seed from the current system time.
pub fn random_seed() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(42)
}
