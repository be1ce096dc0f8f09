//! Serializable mirror of the schematic structure
//!
//! Regions are stored as a palette plus a sparse block list, so the mostly
//! empty working volumes stay small on disk. The document is versioned
//! JSON for easy inspection.

use std::collections::{BTreeMap, HashMap};

use glam::{IVec3, UVec3};
use serde::{Deserialize, Serialize};

use crate::core::Error;
use crate::schematic::Schematic;
use crate::voxel::{BlockState, Region};

/// Current schematic document version
pub const FORMAT_VERSION: u32 = 1;

/// Serializable schematic document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SchematicData {
    pub version: u32,
    pub name: String,
    pub author: String,
    pub regions: BTreeMap<String, RegionData>,
}

/// Serializable region: palette plus sparse `[x, y, z, palette]` entries
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegionData {
    pub origin: [i32; 3],
    pub size: [u32; 3],
    pub palette: Vec<BlockState>,
    pub blocks: Vec<[i32; 4]>,
}

impl RegionData {
    /// Encode a region into its serializable form
    pub fn from_region(region: &Region) -> Self {
        let mut palette: Vec<BlockState> = Vec::new();
        let mut indices: HashMap<&BlockState, usize> = HashMap::new();
        let mut blocks = Vec::with_capacity(region.block_count());

        for (pos, state) in region.blocks() {
            let index = *indices.entry(state).or_insert_with(|| {
                palette.push(state.clone());
                palette.len() - 1
            });
            blocks.push([pos.x, pos.y, pos.z, index as i32]);
        }

        Self {
            origin: region.origin().to_array(),
            size: region.size().to_array(),
            palette,
            blocks,
        }
    }

    /// Decode into a region, validating palette indices and positions
    pub fn into_region(self) -> Result<Region, Error> {
        let mut region = Region::new(IVec3::from(self.origin), UVec3::from(self.size));

        for [x, y, z, palette_index] in self.blocks {
            let pos = IVec3::new(x, y, z);
            if !region.contains(pos) {
                return Err(Error::InvalidGeometry(format!(
                    "block position {pos} outside region extents {}",
                    region.size()
                )));
            }
            let state = self
                .palette
                .get(palette_index as usize)
                .ok_or_else(|| {
                    Error::InvalidGeometry(format!(
                        "palette index {palette_index} out of range ({} entries)",
                        self.palette.len()
                    ))
                })?;
            region.set(pos, state.clone());
        }

        Ok(region)
    }
}

impl SchematicData {
    /// Encode a schematic into its serializable form
    pub fn from_schematic(schematic: &Schematic) -> Self {
        Self {
            version: FORMAT_VERSION,
            name: schematic.name().to_string(),
            author: schematic.author().to_string(),
            regions: schematic
                .regions()
                .iter()
                .map(|(name, region)| (name.clone(), RegionData::from_region(region)))
                .collect(),
        }
    }

    /// Decode into a schematic, rejecting unknown document versions
    pub fn into_schematic(self) -> Result<Schematic, Error> {
        if self.version != FORMAT_VERSION {
            return Err(Error::InvalidInput(format!(
                "unsupported schematic document version {} (expected {FORMAT_VERSION})",
                self.version
            )));
        }

        let mut regions = BTreeMap::new();
        for (name, data) in self.regions {
            regions.insert(name, data.into_region()?);
        }

        Ok(Schematic::new(self.name, self.author, regions))
    }
}
