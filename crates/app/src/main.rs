use bevy::prelude::*;
use bevy::render::settings::{RenderCreation, WgpuFeatures, WgpuSettings};
use bevy::render::RenderPlugin;
use bevy::window::PresentMode;

use terrain::config::{TerrainConfig, CONFIG_ENV_VAR, WINDOW_HEIGHT, WINDOW_TITLE, WINDOW_WIDTH};

fn main() -> AppExit {
    // Config problems abort before any window is opened.
    let config = match TerrainConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load terrain config (${CONFIG_ENV_VAR}): {e}");
            return AppExit::error();
        }
    };

    let mut app = App::new();

    app.insert_resource(config)
        .add_plugins(
            DefaultPlugins
                .set(WindowPlugin {
                    primary_window: Some(Window {
                        title: WINDOW_TITLE.to_string(),
                        resolution: (WINDOW_WIDTH, WINDOW_HEIGHT).into(),
                        present_mode: PresentMode::AutoVsync,
                        ..default()
                    }),
                    ..default()
                })
                .set(RenderPlugin {
                    // Line polygon mode is required by the wireframe material.
                    render_creation: RenderCreation::Automatic(WgpuSettings {
                        features: WgpuFeatures::POLYGON_MODE_LINE,
                        ..default()
                    }),
                    ..default()
                }),
        )
        .add_plugins((terrain::TerrainPlugin, rendering::RenderingPlugin));

    app.run()
}
