use bevy::prelude::*;
use bevy::render::mesh::{Indices, PrimitiveTopology};
use bevy::render::render_asset::RenderAssetUsages;

use terrain::colors::VertexColors;
use terrain::mesh::TerrainMesh;

/// Fill for vertices without a generated color.
const FALLBACK_COLOR: [f32; 4] = [1.0, 1.0, 1.0, 1.0];

/// Convert the generated heightfield into a GPU mesh.
///
/// Position goes to the position attribute (three floats per vertex) and the
/// noise colors to the color attribute, in separate vertex buffers. The asset
/// is uploaded once and not kept in the main world.
pub fn build_render_mesh(terrain: &TerrainMesh, colors: &VertexColors) -> Mesh {
    let vertex_count = terrain.vertex_count();
    let mut rgba = colors.to_rgba();
    if rgba.len() != vertex_count {
        warn!(
            "Vertex color count {} does not match vertex count {}; padding with white",
            rgba.len(),
            vertex_count
        );
        rgba.resize(vertex_count, FALLBACK_COLOR);
    }

    Mesh::new(
        PrimitiveTopology::TriangleList,
        RenderAssetUsages::RENDER_WORLD,
    )
    .with_inserted_attribute(Mesh::ATTRIBUTE_POSITION, terrain.positions.clone())
    .with_inserted_attribute(Mesh::ATTRIBUTE_COLOR, rgba)
    .with_inserted_indices(Indices::U32(terrain.indices.clone()))
}
