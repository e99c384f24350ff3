use bevy::prelude::*;

use crate::wireframe::TerrainLineMaterial;

/// Marker for the entity carrying the uploaded terrain mesh.
#[derive(Component)]
pub struct TerrainSurface {
    pub width: u32,
}

/// The two looks of the terrain surface. Both are unlit and vertex-colored;
/// `lines` rasterizes edges only.
#[derive(Resource, Debug, Clone)]
pub struct TerrainMaterials {
    pub fill: Handle<StandardMaterial>,
    pub lines: Handle<TerrainLineMaterial>,
}
