//! Bounded 3D voxel grid

use glam::{IVec3, UVec3};

use crate::voxel::BlockState;

/// A 3D voxel grid anchored at an integer origin with fixed extents.
///
/// Storage is dense (working buffers accumulate many pastes; templates are
/// materialized into the same representation once at load time). Unset
/// positions are air. Local coordinates run over
/// `[0, width) x [0, height) x [0, length)`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Region {
    origin: IVec3,
    size: UVec3,
    blocks: Vec<Option<BlockState>>,
}

impl Region {
    /// Create an empty region with the given origin and extents
    pub fn new(origin: IVec3, size: UVec3) -> Self {
        let volume = (size.x as usize) * (size.y as usize) * (size.z as usize);
        Self {
            origin,
            size,
            blocks: vec![None; volume],
        }
    }

    /// World-space anchor of this region
    pub fn origin(&self) -> IVec3 {
        self.origin
    }

    /// Extents as (width, height, length)
    pub fn size(&self) -> UVec3 {
        self.size
    }

    /// Extent along the x axis
    pub fn width(&self) -> u32 {
        self.size.x
    }

    /// Extent along the y axis
    pub fn height(&self) -> u32 {
        self.size.y
    }

    /// Extent along the z axis
    pub fn length(&self) -> u32 {
        self.size.z
    }

    /// Whether the local position lies within the extents
    pub fn contains(&self, pos: IVec3) -> bool {
        pos.cmpge(IVec3::ZERO).all() && pos.cmplt(self.size.as_ivec3()).all()
    }

    fn index(&self, pos: IVec3) -> usize {
        let (x, y, z) = (pos.x as usize, pos.y as usize, pos.z as usize);
        (y * self.size.z as usize + z) * self.size.x as usize + x
    }

    /// Block state at a local position, `None` for air or out of bounds
    pub fn get(&self, pos: IVec3) -> Option<&BlockState> {
        if !self.contains(pos) {
            return None;
        }
        self.blocks[self.index(pos)].as_ref()
    }

    /// Set the block state at a local position.
    ///
    /// Panics if the position is outside the extents; callers are expected
    /// to size the region (or grow it via [`paste`](crate::voxel::paste))
    /// before writing.
    pub fn set(&mut self, pos: IVec3, state: BlockState) {
        assert!(
            self.contains(pos),
            "block position {pos} outside region extents {}",
            self.size
        );
        let idx = self.index(pos);
        self.blocks[idx] = Some(state);
    }

    /// Iterate all non-air blocks as (local position, state)
    pub fn blocks(&self) -> impl Iterator<Item = (IVec3, &BlockState)> {
        let (w, l) = (self.size.x as usize, self.size.z as usize);
        self.blocks.iter().enumerate().filter_map(move |(i, slot)| {
            let state = slot.as_ref()?;
            let x = i % w;
            let z = (i / w) % l;
            let y = i / (w * l);
            Some((IVec3::new(x as i32, y as i32, z as i32), state))
        })
    }

    /// Number of non-air blocks
    pub fn block_count(&self) -> usize {
        self.blocks.iter().filter(|slot| slot.is_some()).count()
    }
}
