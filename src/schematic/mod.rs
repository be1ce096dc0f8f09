//! Schematic artifact: a named collection of assembled regions

pub mod format;
pub mod sink;

use std::collections::BTreeMap;

use crate::voxel::Region;

/// A finished, named multi-region layout ready for persistence.
///
/// Immutable after assembly; ownership passes to the persistence sink.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Schematic {
    name: String,
    author: String,
    regions: BTreeMap<String, Region>,
}

impl Schematic {
    /// Create a schematic from uniquely-named regions
    pub fn new(
        name: impl Into<String>,
        author: impl Into<String>,
        regions: BTreeMap<String, Region>,
    ) -> Self {
        Self {
            name: name.into(),
            author: author.into(),
            regions,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    /// All regions, keyed by name
    pub fn regions(&self) -> &BTreeMap<String, Region> {
        &self.regions
    }

    /// A single region by name
    pub fn region(&self, name: &str) -> Option<&Region> {
        self.regions.get(name)
    }

    /// Consume the schematic, yielding its regions
    pub fn into_regions(self) -> BTreeMap<String, Region> {
        self.regions
    }

    /// File name the schematic is persisted under
    pub fn file_name(&self) -> String {
        format!("{}.litematic", self.name)
    }
}
