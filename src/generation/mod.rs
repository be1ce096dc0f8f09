//! World eater generation pipeline
//!
//! Normalizes requested footprints, tiles the two sides from templates,
//! generates the trench outline, and packages everything into a single
//! schematic.

pub mod side;
pub mod sizing;
pub mod trench;

use std::collections::BTreeMap;

use crate::core::Error;
use crate::schematic::Schematic;
use crate::templates::TemplateSet;

pub use sizing::{build_height, describe_adjustment, normalize, MIN_SIZE_X, MIN_SIZE_Z};

/// Author recorded in every generated schematic
pub const SCHEMATIC_AUTHOR: &str = "QSWE-MakerByAttila";

pub const REGION_TRENCHES: &str = "Trenches";
pub const REGION_MAIN: &str = "Main";
pub const REGION_RETURN: &str = "Return";

/// One-block margin added around the requested footprint on every side
const MARGIN: i32 = 2;

/// Assembles world eater schematics from an injected template set
pub struct WorldEaterAssembler {
    templates: TemplateSet,
}

impl WorldEaterAssembler {
    pub fn new(templates: TemplateSet) -> Self {
        Self { templates }
    }

    /// Assemble the full schematic for a normalized footprint.
    ///
    /// Fails with [`Error::InvalidGeometry`] when the sizes have not been
    /// normalized first; the tiling and trench ranges assume the modular
    /// constraints hold.
    pub fn assemble(&self, size_x: i32, size_z: i32) -> Result<Schematic, Error> {
        let normalized = normalize(size_x, size_z);
        if normalized != (size_x, size_z) {
            return Err(Error::InvalidGeometry(format!(
                "footprint {size_x}x{size_z} violates the modular constraints \
                 (nearest valid: {}x{})",
                normalized.0, normalized.1
            )));
        }

        log::info!("Assembling QSWE-V3 schematic for {size_x}x{size_z}");

        let trenches = trench::generate(size_x + MARGIN, size_z + MARGIN);
        let main = side::assemble_main(size_x + MARGIN, &self.templates.main_side());
        let return_side = side::assemble_return(
            size_x + MARGIN,
            size_z + MARGIN,
            &self.templates.return_side(),
        );

        let mut regions = BTreeMap::new();
        regions.insert(REGION_TRENCHES.to_string(), trenches);
        regions.insert(REGION_MAIN.to_string(), main);
        regions.insert(REGION_RETURN.to_string(), return_side);

        Ok(Schematic::new(
            format!("QSWE-V3 {size_x}x{size_z}"),
            SCHEMATIC_AUTHOR,
            regions,
        ))
    }
}
