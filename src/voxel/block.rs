//! Block state data type

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single block state, identified by its namespaced id
/// (e.g. `minecraft:spruce_leaves`). Immutable value type;
/// absence of a block state in a region means air.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BlockState {
    name: String,
}

impl BlockState {
    /// Create a block state from a namespaced id
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// The namespaced block id
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for BlockState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name() {
        let state = BlockState::new("minecraft:oak_leaves");
        assert_eq!(state.name(), "minecraft:oak_leaves");
        assert_eq!(state.to_string(), "minecraft:oak_leaves");
    }

    #[test]
    fn test_equality() {
        assert_eq!(
            BlockState::new("minecraft:stone"),
            BlockState::new("minecraft:stone")
        );
        assert_ne!(
            BlockState::new("minecraft:stone"),
            BlockState::new("minecraft:dirt")
        );
    }
}
