//! Voxel data model: block states, regions, and the paste primitive

pub mod block;
pub mod region;
pub mod compositor;

pub use block::BlockState;
pub use compositor::paste;
pub use region::Region;
