//! Line-only terrain rendering.
//!
//! In wireframe mode the terrain swaps its filled material for a copy that
//! rasterizes triangle edges only, so the lines keep the per-vertex colors and
//! nothing is drawn between them. Needs the `POLYGON_MODE_LINE` wgpu feature,
//! which the app enables when it configures the render plugin.

use bevy::pbr::{
    ExtendedMaterial, MaterialExtension, MaterialExtensionKey, MaterialExtensionPipeline,
};
use bevy::prelude::*;
use bevy::render::mesh::MeshVertexBufferLayoutRef;
use bevy::render::render_resource::{
    AsBindGroup, PolygonMode, RenderPipelineDescriptor, SpecializedMeshPipelineError,
};

use terrain::config::TerrainConfig;

use crate::terrain_render::{TerrainMaterials, TerrainSurface};

/// Extension that switches the base material's pipeline to line rasterization.
#[derive(Asset, AsBindGroup, Reflect, Debug, Clone, Default)]
pub struct LineFill {}

impl MaterialExtension for LineFill {
    fn specialize(
        _pipeline: &MaterialExtensionPipeline,
        descriptor: &mut RenderPipelineDescriptor,
        _layout: &MeshVertexBufferLayoutRef,
        _key: MaterialExtensionKey<Self>,
    ) -> Result<(), SpecializedMeshPipelineError> {
        descriptor.primitive.polygon_mode = PolygonMode::Line;
        Ok(())
    }
}

pub type TerrainLineMaterial = ExtendedMaterial<StandardMaterial, LineFill>;

#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WireframeMode {
    pub enabled: bool,
}

pub struct TerrainWireframePlugin;

impl Plugin for TerrainWireframePlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(MaterialPlugin::<TerrainLineMaterial>::default())
            .init_resource::<WireframeMode>()
            .add_systems(Startup, apply_configured_wireframe)
            .add_systems(
                Update,
                (
                    toggle_wireframe,
                    sync_terrain_material.run_if(resource_exists::<TerrainMaterials>),
                )
                    .chain(),
            );
    }
}

pub fn apply_configured_wireframe(config: Res<TerrainConfig>, mut mode: ResMut<WireframeMode>) {
    mode.enabled = config.wireframe;
}

/// F switches between filled and line-only terrain.
pub fn toggle_wireframe(keys: Res<ButtonInput<KeyCode>>, mut mode: ResMut<WireframeMode>) {
    if keys.just_pressed(KeyCode::KeyF) {
        mode.enabled = !mode.enabled;
        info!("Wireframe {}", if mode.enabled { "on" } else { "off" });
    }
}

/// Give every terrain surface the material matching the current mode. A
/// surface carries exactly one of the two materials.
pub fn sync_terrain_material(
    mut commands: Commands,
    mode: Res<WireframeMode>,
    materials: Res<TerrainMaterials>,
    surfaces: Query<
        (
            Entity,
            Has<MeshMaterial3d<StandardMaterial>>,
            Has<MeshMaterial3d<TerrainLineMaterial>>,
        ),
        With<TerrainSurface>,
    >,
) {
    for (entity, has_fill, has_lines) in &surfaces {
        if mode.enabled && (has_fill || !has_lines) {
            commands
                .entity(entity)
                .remove::<MeshMaterial3d<StandardMaterial>>()
                .insert(MeshMaterial3d(materials.lines.clone()));
        } else if !mode.enabled && (has_lines || !has_fill) {
            commands
                .entity(entity)
                .remove::<MeshMaterial3d<TerrainLineMaterial>>()
                .insert(MeshMaterial3d(materials.fill.clone()));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_app(config: TerrainConfig) -> App {
        let mut app = App::new();
        app.insert_resource(config);
        app.init_resource::<WireframeMode>();
        app.init_resource::<ButtonInput<KeyCode>>();
        app.insert_resource(TerrainMaterials {
            fill: Handle::default(),
            lines: Handle::default(),
        });
        app.add_systems(Startup, apply_configured_wireframe);
        app.add_systems(Update, (toggle_wireframe, sync_terrain_material).chain());
        app.world_mut().spawn(TerrainSurface { width: 1 });
        app
    }

    fn surface_materials(app: &mut App) -> (bool, bool) {
        let world = app.world_mut();
        let mut query = world.query_filtered::<(
            Has<MeshMaterial3d<StandardMaterial>>,
            Has<MeshMaterial3d<TerrainLineMaterial>>,
        ), With<TerrainSurface>>();
        query.single(world)
    }

    #[test]
    fn test_config_sets_initial_state() {
        let mut app = test_app(TerrainConfig {
            wireframe: false,
            ..Default::default()
        });
        app.update();
        assert!(!app.world().resource::<WireframeMode>().enabled);
        assert_eq!(surface_materials(&mut app), (true, false));

        let mut app = test_app(TerrainConfig::default());
        app.update();
        assert!(app.world().resource::<WireframeMode>().enabled);
        assert_eq!(surface_materials(&mut app), (false, true));
    }

    #[test]
    fn test_f_swaps_to_filled_surface() {
        let mut app = test_app(TerrainConfig::default());
        app.update();
        app.world_mut()
            .resource_mut::<ButtonInput<KeyCode>>()
            .press(KeyCode::KeyF);
        app.update();
        assert!(!app.world().resource::<WireframeMode>().enabled);
        // Filled only: no line pass left on top of the surface.
        assert_eq!(surface_materials(&mut app), (true, false));
    }
}
