//! Prefabricated template regions the machine is tiled from
//!
//! Templates arrive as a ready-made name -> region mapping (a template
//! library file is just a schematic with eight well-known region names),
//! keeping the tiling core decoupled from any loading mechanism.

use std::collections::HashMap;

use crate::core::Error;
use crate::generation::side::SideTemplates;
use crate::schematic::Schematic;
use crate::voxel::Region;

pub const MAIN_LOGIC: &str = "MainLogic";
pub const MAIN_DUPERS_STACK: &str = "MainDupersStack";
pub const MAIN_SWEEPERS_STACK: &str = "MainSweepersStack";
pub const MAIN_SWEEPERS_END: &str = "MainSweepersEnd";
pub const RETURN_LOGIC: &str = "ReturnLogic";
pub const RETURN_DUPERS_STACK: &str = "ReturnDupersStack";
pub const RETURN_SWEEPERS_STACK: &str = "ReturnSweepersStack";
pub const RETURN_SWEEPERS_END: &str = "ReturnSweepersEnd";

/// Every region name a template library must supply
pub const TEMPLATE_NAMES: [&str; 8] = [
    MAIN_LOGIC,
    MAIN_DUPERS_STACK,
    MAIN_SWEEPERS_STACK,
    MAIN_SWEEPERS_END,
    RETURN_LOGIC,
    RETURN_DUPERS_STACK,
    RETURN_SWEEPERS_STACK,
    RETURN_SWEEPERS_END,
];

/// The eight immutable template regions, loaded once and read many times
#[derive(Debug, Clone)]
pub struct TemplateSet {
    main_logic: Region,
    main_dupers_stack: Region,
    main_sweepers_stack: Region,
    main_sweepers_end: Region,
    return_logic: Region,
    return_dupers_stack: Region,
    return_sweepers_stack: Region,
    return_sweepers_end: Region,
}

impl TemplateSet {
    /// Build the set from a name -> region mapping.
    ///
    /// Fails with [`Error::TemplateMissing`] naming the first absent
    /// template.
    pub fn from_regions(mut regions: HashMap<String, Region>) -> Result<Self, Error> {
        let mut take = |name: &str| {
            regions
                .remove(name)
                .ok_or_else(|| Error::TemplateMissing(name.to_string()))
        };

        Ok(Self {
            main_logic: take(MAIN_LOGIC)?,
            main_dupers_stack: take(MAIN_DUPERS_STACK)?,
            main_sweepers_stack: take(MAIN_SWEEPERS_STACK)?,
            main_sweepers_end: take(MAIN_SWEEPERS_END)?,
            return_logic: take(RETURN_LOGIC)?,
            return_dupers_stack: take(RETURN_DUPERS_STACK)?,
            return_sweepers_stack: take(RETURN_SWEEPERS_STACK)?,
            return_sweepers_end: take(RETURN_SWEEPERS_END)?,
        })
    }

    /// Extract the set from a template library schematic
    pub fn from_schematic(schematic: Schematic) -> Result<Self, Error> {
        Self::from_regions(schematic.into_regions().into_iter().collect())
    }

    /// Templates for assembling the main side
    pub fn main_side(&self) -> SideTemplates<'_> {
        SideTemplates {
            logic: &self.main_logic,
            sweepers_stack: &self.main_sweepers_stack,
            sweepers_end: &self.main_sweepers_end,
            dupers_stack: &self.main_dupers_stack,
        }
    }

    /// Templates for assembling the return side
    pub fn return_side(&self) -> SideTemplates<'_> {
        SideTemplates {
            logic: &self.return_logic,
            sweepers_stack: &self.return_sweepers_stack,
            sweepers_end: &self.return_sweepers_end,
            dupers_stack: &self.return_dupers_stack,
        }
    }
}
