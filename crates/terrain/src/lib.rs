use bevy::prelude::*;

pub mod colors;
pub mod config;
pub mod error;
pub mod gradient;
pub mod mesh;

use colors::{seeded_vertex_colors, VertexColors};
use config::TerrainConfig;
use mesh::TerrainMesh;

/// Startup work that produces `TerrainMesh` and `VertexColors`. Consumers
/// of those resources order themselves after this set.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct TerrainStartup;

pub struct TerrainPlugin;

impl Plugin for TerrainPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<TerrainConfig>()
            .add_systems(Startup, generate_terrain.in_set(TerrainStartup));
    }
}

/// Build the heightfield and its vertex colors once and publish them as
/// resources. A rejected config aborts the app.
pub fn generate_terrain(
    mut commands: Commands,
    config: Res<TerrainConfig>,
    mut exit: EventWriter<AppExit>,
) {
    info!(
        "Building {}x{} terrain, about {} MB of buffers",
        config.width,
        config.width,
        mesh::estimated_mesh_bytes(config.width) / 1_000_000
    );
    let mesh = {
        let _span = info_span!("build_terrain_mesh", width = config.width).entered();
        config.build_mesh()
    };
    let mesh: TerrainMesh = match mesh {
        Ok(mesh) => mesh,
        Err(e) => {
            error!("Terrain generation failed: {}", e);
            exit.send(AppExit::error());
            return;
        }
    };

    let seed = config.resolved_color_seed();
    let colors: VertexColors = seeded_vertex_colors(mesh.vertex_count(), seed);

    let (lo, hi) = mesh.height_range();
    info!(
        "Generated {}x{} terrain: {} vertices, {} triangles, heights {:.3}..{:.3}, color seed {}",
        mesh.width,
        mesh.width,
        mesh.vertex_count(),
        mesh.triangle_count(),
        lo,
        hi,
        seed
    );

    commands.insert_resource(mesh);
    commands.insert_resource(colors);
}
