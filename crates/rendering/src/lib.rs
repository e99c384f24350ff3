use bevy::prelude::*;

use terrain::config::TerrainConfig;
use terrain::TerrainStartup;

pub mod camera;
pub mod diagnostics;
pub mod input;
pub mod terrain_render;
pub mod wireframe;

use camera::{CameraDrag, CameraOrbitDrag};

/// Background behind the terrain.
const CLEAR_COLOR: Color = Color::BLACK;

pub struct RenderingPlugin;

impl Plugin for RenderingPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<TerrainConfig>()
            .insert_resource(ClearColor(CLEAR_COLOR))
            .init_resource::<CameraDrag>()
            .init_resource::<CameraOrbitDrag>()
            .add_systems(
                Startup,
                (camera::setup_camera, terrain_render::spawn_terrain)
                    .chain()
                    .after(TerrainStartup),
            )
            .add_systems(
                Update,
                (
                    camera::camera_pan_keyboard,
                    camera::camera_pan_drag,
                    camera::camera_orbit_drag,
                    camera::camera_zoom,
                    camera::camera_zoom_keyboard,
                    camera::camera_rotate_keyboard,
                    camera::apply_orbit_camera,
                )
                    .chain(),
            )
            .add_systems(Update, input::exit_on_escape)
            .add_plugins(wireframe::TerrainWireframePlugin)
            .add_plugins(diagnostics::DiagnosticsPlugin);
    }
}
