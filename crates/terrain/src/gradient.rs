//! Deterministic pseudo-random gradient field.
//!
//! Every integer lattice point `(i, j)` maps to a unit vector whose angle is
//! derived from an integer hash of the coordinates. There is no gradient
//! table, so the field covers any grid extent in O(1) memory and every sample
//! is reproducible without global state.

use std::f64::consts::PI;

const HASH_MUL_A: u32 = 3_284_157_443;
const HASH_MUL_B: u32 = 1_911_520_717;
const HASH_MUL_C: u32 = 2_048_419_325;

/// Half the hash word width. Derived from the type so the rotation can never
/// overflow the shift range.
const HALF_BITS: u32 = u32::BITS / 2;

/// Maps the full `u32` range onto `[0, 2π)`: one step is `π / 2^31`.
const ANGLE_PER_UNIT: f64 = PI / (1u64 << (u32::BITS - 1)) as f64;

/// Unit-length 2D vector attached to a lattice point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradientVector {
    pub x: f32,
    pub y: f32,
}

impl GradientVector {
    pub fn length(&self) -> f32 {
        (self.x * self.x + self.y * self.y).sqrt()
    }
}

/// Mix the two coordinates into one well-distributed word.
///
/// Coordinates are reinterpreted as unsigned, so negative inputs hash like
/// any other value. All multiplications wrap.
#[inline]
pub fn hash_coords(i: i32, j: i32) -> u32 {
    let mut a = i as u32;
    let mut b = j as u32;

    a = a.wrapping_mul(HASH_MUL_A);

    b ^= a.rotate_left(HALF_BITS);
    b = b.wrapping_mul(HASH_MUL_B);

    a ^= b.rotate_left(HALF_BITS);
    a.wrapping_mul(HASH_MUL_C)
}

/// Gradient angle for `(i, j)` in radians, in `[0, 2π)`.
#[inline]
pub fn gradient_angle(i: i32, j: i32) -> f64 {
    hash_coords(i, j) as f64 * ANGLE_PER_UNIT
}

/// Sample the gradient field at lattice point `(i, j)`.
pub fn sample_gradient(i: i32, j: i32) -> GradientVector {
    let theta = gradient_angle(i, j) as f32;
    GradientVector {
        x: theta.sin(),
        y: theta.cos(),
    }
}
