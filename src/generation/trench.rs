//! Procedural trench outline framing the machine footprint
//!
//! The outline marks where the perimeter trenches must be dug: two
//! concentric ring pairs hugging the border, plus an inner pair at fixed
//! trench depth from each edge. It is generated directly rather than tiled
//! from a template.

use glam::{IVec3, UVec3};

use crate::voxel::{BlockState, Region};

/// Marker block for the outer line of each ring pair
pub const TRENCH_PRIMARY: &str = "minecraft:spruce_leaves";

/// Marker block for the inner line of each ring pair
pub const TRENCH_SECONDARY: &str = "minecraft:oak_leaves";

/// Generate the flat trench outline for the given footprint.
///
/// The ranges below assume `size_x >= 18` and `size_z >= 29`, which the
/// size normalizer guarantees upstream.
pub fn generate(size_x: i32, size_z: i32) -> Region {
    let mut outline = Region::new(
        IVec3::ZERO,
        UVec3::new(size_x as u32, 1, size_z as u32),
    );
    let primary = BlockState::new(TRENCH_PRIMARY);
    let secondary = BlockState::new(TRENCH_SECONDARY);

    // outer border
    for x in 0..size_x {
        outline.set(IVec3::new(x, 0, 0), primary.clone());
        outline.set(IVec3::new(x, 0, size_z - 1), primary.clone());
    }
    for z in 0..size_z {
        outline.set(IVec3::new(0, 0, z), primary.clone());
        outline.set(IVec3::new(size_x - 1, 0, z), primary.clone());
    }

    // second ring, one block inward
    for x in 1..size_x - 2 {
        outline.set(IVec3::new(x, 0, 1), secondary.clone());
        outline.set(IVec3::new(x, 0, size_z - 2), secondary.clone());
    }
    for z in 1..size_z - 2 {
        outline.set(IVec3::new(1, 0, z), secondary.clone());
        outline.set(IVec3::new(size_x - 2, 0, z), secondary.clone());
    }

    // inner pair at trench depth from each edge
    for x in 4..size_x - 4 {
        outline.set(IVec3::new(x, 0, 13), primary.clone());
        outline.set(IVec3::new(x, 0, size_z - 14), primary.clone());
    }
    for x in 3..size_x - 3 {
        outline.set(IVec3::new(x, 0, 12), secondary.clone());
        outline.set(IVec3::new(x, 0, size_z - 13), secondary.clone());
    }
    for z in 14..size_z - 14 {
        outline.set(IVec3::new(4, 0, z), primary.clone());
        outline.set(IVec3::new(size_x - 5, 0, z), primary.clone());
    }
    for z in 13..size_z - 13 {
        outline.set(IVec3::new(3, 0, z), secondary.clone());
        outline.set(IVec3::new(size_x - 4, 0, z), secondary.clone());
    }

    outline
}
