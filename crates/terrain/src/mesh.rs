use bevy::prelude::*;

use crate::config::MAX_GRID_WIDTH;
use crate::error::TerrainError;
use crate::gradient::sample_gradient;

/// Heightfield mesh: one vertex per lattice point, two triangles per cell.
///
/// Vertex `(i, j)` lives at `i * (width + 1) + j` and sits at
/// `(i, gradient.y * height_scale, j)`.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct TerrainMesh {
    pub width: u32,
    pub height_scale: f32,
    pub positions: Vec<[f32; 3]>,
    pub indices: Vec<u32>,
}

impl TerrainMesh {
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Row-major index of lattice point `(i, j)`.
    #[inline]
    pub fn grid_index(&self, i: u32, j: u32) -> u32 {
        i * (self.width + 1) + j
    }

    pub fn triangles(&self) -> impl Iterator<Item = [u32; 3]> + '_ {
        self.indices.chunks_exact(3).map(|t| [t[0], t[1], t[2]])
    }

    /// World-space side length of the grid.
    pub fn extent(&self) -> f32 {
        self.width as f32
    }

    /// Lowest and highest vertex heights.
    pub fn height_range(&self) -> (f32, f32) {
        self.positions
            .iter()
            .fold((f32::INFINITY, f32::NEG_INFINITY), |(lo, hi), p| {
                (lo.min(p[1]), hi.max(p[1]))
            })
    }
}

/// Reject widths that produce a degenerate mesh or overflow `u32` indices.
fn check_width(width: u32) -> Result<(), TerrainError> {
    if width == 0 {
        return Err(TerrainError::InvalidWidth { width });
    }
    if width > MAX_GRID_WIDTH {
        return Err(TerrainError::IndexOverflow {
            width,
            max: MAX_GRID_WIDTH,
        });
    }
    Ok(())
}

/// Bytes held by the position, color and index buffers of a `width` grid.
///
/// `check_width` only bounds the counts, so this is what callers log before
/// committing to a large build.
pub fn estimated_mesh_bytes(width: u32) -> u64 {
    let side = width as u64 + 1;
    let vertices = side * side;
    let indices = 6 * width as u64 * width as u64;
    // Position and color are three f32 each.
    vertices * 2 * std::mem::size_of::<[f32; 3]>() as u64
        + indices * std::mem::size_of::<u32>() as u64
}

/// Build the terrain mesh for a `width` x `width` cell grid.
pub fn build_terrain_mesh(width: u32, height_scale: f32) -> Result<TerrainMesh, TerrainError> {
    check_width(width)?;

    let side = width as usize + 1;
    let cells = width as usize * width as usize;
    let mut positions: Vec<[f32; 3]> = Vec::with_capacity(side * side);
    let mut indices: Vec<u32> = Vec::with_capacity(cells * 6);

    for i in 0..=width {
        for j in 0..=width {
            // Both coordinates are <= MAX_GRID_WIDTH, so the cast is lossless.
            let g = sample_gradient(i as i32, j as i32);
            positions.push([i as f32, g.y * height_scale, j as f32]);
        }
    }

    let stride = width + 1;
    for i in 0..width {
        for j in 0..width {
            let c00 = i * stride + j;
            let c01 = c00 + 1;
            let c10 = c00 + stride;
            let c11 = c10 + 1;

            // Both triangles wind counter-clockwise seen from +Y.
            indices.extend_from_slice(&[c00, c01, c10]);
            indices.extend_from_slice(&[c10, c01, c11]);
        }
    }

    Ok(TerrainMesh {
        width,
        height_scale,
        positions,
        indices,
    })
}
