use bevy::prelude::*;
use bevy::render::render_resource::Face;

use terrain::colors::VertexColors;
use terrain::mesh::TerrainMesh;

use crate::wireframe::{LineFill, TerrainLineMaterial};

use super::mesh::build_render_mesh;
use super::types::{TerrainMaterials, TerrainSurface};

/// Unlit: vertex colors are shown as-is, multiplied by a white base.
fn surface_material() -> StandardMaterial {
    StandardMaterial {
        base_color: Color::WHITE,
        unlit: true,
        cull_mode: Some(Face::Back),
        ..default()
    }
}

/// Upload the generated terrain once. Skipped when generation failed and the
/// resources were never inserted. The surface material is attached by
/// `sync_terrain_material` according to the wireframe mode.
pub fn spawn_terrain(
    mut commands: Commands,
    terrain: Option<Res<TerrainMesh>>,
    colors: Option<Res<VertexColors>>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut fill_materials: ResMut<Assets<StandardMaterial>>,
    mut line_materials: ResMut<Assets<TerrainLineMaterial>>,
) {
    let (Some(terrain), Some(colors)) = (terrain, colors) else {
        warn!("No terrain data available; nothing to render");
        return;
    };

    let mesh = build_render_mesh(&terrain, &colors);

    commands.insert_resource(TerrainMaterials {
        fill: fill_materials.add(surface_material()),
        lines: line_materials.add(TerrainLineMaterial {
            base: surface_material(),
            extension: LineFill {},
        }),
    });
    commands.spawn((
        Mesh3d(meshes.add(mesh)),
        Transform::IDENTITY,
        TerrainSurface {
            width: terrain.width,
        },
    ));
}

#[cfg(test)]
mod tests {
    use super::*;
    use terrain::config::TerrainConfig;
    use terrain::{TerrainPlugin, TerrainStartup};

    fn headless_app(config: TerrainConfig) -> App {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app.insert_resource(config);
        app.add_plugins(TerrainPlugin);
        app.init_resource::<Assets<Mesh>>();
        app.init_resource::<Assets<StandardMaterial>>();
        app.init_resource::<Assets<TerrainLineMaterial>>();
        app.add_systems(Startup, spawn_terrain.after(TerrainStartup));
        app.update();
        app
    }

    #[test]
    fn test_spawns_one_surface() {
        let mut app = headless_app(TerrainConfig {
            width: 3,
            color_seed: Some(1),
            ..Default::default()
        });
        let widths: Vec<u32> = app
            .world_mut()
            .query::<&TerrainSurface>()
            .iter(app.world())
            .map(|s| s.width)
            .collect();
        assert_eq!(widths, vec![3]);
        assert_eq!(app.world().resource::<Assets<Mesh>>().len(), 1);
        assert!(app.world().contains_resource::<TerrainMaterials>());
        assert_eq!(app.world().resource::<Assets<StandardMaterial>>().len(), 1);
        assert_eq!(app.world().resource::<Assets<TerrainLineMaterial>>().len(), 1);
    }

    #[test]
    fn test_failed_generation_spawns_nothing() {
        let mut app = headless_app(TerrainConfig {
            width: 0,
            ..Default::default()
        });
        let count = app
            .world_mut()
            .query::<&TerrainSurface>()
            .iter(app.world())
            .count();
        assert_eq!(count, 0);
        assert!(app.world().resource::<Assets<Mesh>>().is_empty());
        assert!(!app.world().contains_resource::<TerrainMaterials>());
    }
}
