//! QSWE Maker - schematic generator for the QSWE-V3 modular world eater

pub mod core;
pub mod voxel;
pub mod generation;
pub mod schematic;
pub mod templates;
