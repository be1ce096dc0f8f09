//! Persistence collaborators for finished schematics

use std::fs;
use std::path::{Path, PathBuf};

use crate::core::Error;
use crate::schematic::format::SchematicData;
use crate::schematic::Schematic;

/// Accepts a finished schematic and persists it somewhere.
///
/// The assembly core never touches the file format; it only hands the
/// artifact to a sink.
pub trait SchematicSink {
    /// Persist the schematic, returning the path it was written to
    fn persist(&self, schematic: &Schematic) -> Result<PathBuf, Error>;
}

/// Writes schematics as versioned JSON documents into an output directory
pub struct JsonSink {
    output_dir: PathBuf,
}

impl JsonSink {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }
}

impl SchematicSink for JsonSink {
    fn persist(&self, schematic: &Schematic) -> Result<PathBuf, Error> {
        fs::create_dir_all(&self.output_dir)?;
        let path = self.output_dir.join(schematic.file_name());
        let data = SchematicData::from_schematic(schematic);
        fs::write(&path, serde_json::to_string_pretty(&data)?)?;
        log::info!("Wrote schematic to {}", path.display());
        Ok(path)
    }
}

/// Load a schematic document from disk (template libraries ship as
/// ordinary schematics)
pub fn load_schematic(path: &Path) -> Result<Schematic, Error> {
    let raw = fs::read_to_string(path)?;
    let data: SchematicData = serde_json::from_str(&raw)?;
    data.into_schematic()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::voxel::{BlockState, Region};
    use glam::{IVec3, UVec3};
    use std::collections::BTreeMap;

    fn sample_schematic() -> Schematic {
        let mut region = Region::new(IVec3::ZERO, UVec3::new(2, 2, 2));
        region.set(IVec3::new(1, 0, 1), BlockState::new("minecraft:stone"));
        let mut regions = BTreeMap::new();
        regions.insert("Main".to_string(), region);
        Schematic::new("QSWE-V3 18x29", "tester", regions)
    }

    #[test]
    fn test_persist_and_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let sink = JsonSink::new(dir.path());
        let schematic = sample_schematic();

        let path = sink.persist(&schematic).unwrap();
        assert_eq!(
            path.file_name().unwrap().to_str().unwrap(),
            "QSWE-V3 18x29.litematic"
        );

        let loaded = load_schematic(&path).unwrap();
        assert_eq!(loaded, schematic);
    }

    #[test]
    fn test_persist_creates_output_dir() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("out/schems");
        let sink = JsonSink::new(&nested);

        sink.persist(&sample_schematic()).unwrap();
        assert!(nested.is_dir());
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_schematic(&dir.path().join("nope.litematic"));
        assert!(matches!(result, Err(Error::Io(_))));
    }

    #[test]
    fn test_load_garbage_is_format_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.litematic");
        fs::write(&path, "not json").unwrap();
        assert!(matches!(load_schematic(&path), Err(Error::Format(_))));
    }
}
