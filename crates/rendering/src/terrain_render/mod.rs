mod mesh;
mod systems;
mod types;

pub use mesh::build_render_mesh;
pub use systems::spawn_terrain;
pub use types::{TerrainMaterials, TerrainSurface};
