//! Side assembly: tiles templates into the two long halves of the machine
//!
//! Each side starts from its logic section, repeats a sweeper/duper column
//! pair along the long axis at the module pitch, and closes with an end
//! cap. The main and return sides share the algorithm but differ in their
//! anchors and cross-sections.

use glam::{IVec3, UVec3};

use crate::voxel::{paste, Region};

/// Long-axis coordinate of the first tiled column
const TILE_START: i32 = 9;

/// Long-axis pitch between tiled columns
const TILE_PITCH: i32 = 6;

/// Distance from the far face to the end-cap column
const END_CAP_OFFSET: i32 = 11;

/// The four template regions one side is assembled from
pub struct SideTemplates<'a> {
    pub logic: &'a Region,
    pub sweepers_stack: &'a Region,
    pub sweepers_end: &'a Region,
    pub dupers_stack: &'a Region,
}

/// Anchor and offset constants of one side variant.
///
/// The x components of `sweeper_offset` and `duper_offset` are filled in
/// per tiled column.
struct SideProfile {
    origin: IVec3,
    height: u32,
    length: u32,
    logic_offset: IVec3,
    sweeper_offset: IVec3,
    duper_offset: IVec3,
}

/// Assemble the main side for the given long-axis size
pub fn assemble_main(size_x: i32, templates: &SideTemplates) -> Region {
    assemble(
        &SideProfile {
            origin: IVec3::new(1, 2, 1),
            height: 88,
            length: 11,
            logic_offset: IVec3::new(0, 0, 0),
            sweeper_offset: IVec3::new(0, 1, 0),
            duper_offset: IVec3::new(0, 82, 6),
        },
        size_x,
        templates,
    )
}

/// Assemble the return side for the given footprint.
///
/// The return logic template is anchored one block before the region along
/// z; its leading layer carries no blocks there.
pub fn assemble_return(size_x: i32, size_z: i32, templates: &SideTemplates) -> Region {
    assemble(
        &SideProfile {
            origin: IVec3::new(1, 4, size_z - 17),
            height: 84,
            length: 16,
            logic_offset: IVec3::new(0, 0, -1),
            sweeper_offset: IVec3::new(0, 0, -1),
            duper_offset: IVec3::new(0, 81, 4),
        },
        size_x,
        templates,
    )
}

fn assemble(profile: &SideProfile, size_x: i32, templates: &SideTemplates) -> Region {
    let mut side = Region::new(
        profile.origin,
        UVec3::new((size_x - 4) as u32, profile.height, profile.length),
    );

    side = paste(side, templates.logic, profile.logic_offset);

    for x in (TILE_START..size_x - 14).step_by(TILE_PITCH as usize) {
        side = paste(side, templates.sweepers_stack, profile.sweeper_offset.with_x(x));
        side = paste(side, templates.dupers_stack, profile.duper_offset.with_x(x));
    }

    let end_x = size_x - END_CAP_OFFSET;
    side = paste(side, templates.sweepers_end, profile.sweeper_offset.with_x(end_x));
    side = paste(side, templates.dupers_stack, profile.duper_offset.with_x(end_x));

    side
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::voxel::BlockState;

    fn marker(name: &str) -> BlockState {
        BlockState::new(format!("test:{name}"))
    }

    /// 1x1x2 template with a single marker block in its z=1 layer, so it
    /// survives the return side's z=-1 anchor like the real templates do
    fn template(name: &str) -> Region {
        let mut region = Region::new(IVec3::ZERO, UVec3::new(1, 1, 2));
        region.set(IVec3::new(0, 0, 1), marker(name));
        region
    }

    fn positions_of(side: &Region, name: &str) -> Vec<IVec3> {
        let state = marker(name);
        let mut found: Vec<IVec3> = side
            .blocks()
            .filter(|(_, s)| **s == state)
            .map(|(pos, _)| pos)
            .collect();
        found.sort_by_key(|p| (p.x, p.y, p.z));
        found
    }

    #[test]
    fn test_main_minimum_size_skips_tiling() {
        let logic = template("logic");
        let sweepers = template("sweepers");
        let end = template("end");
        let dupers = template("dupers");
        let set = SideTemplates {
            logic: &logic,
            sweepers_stack: &sweepers,
            sweepers_end: &end,
            dupers_stack: &dupers,
        };

        // 18 + 2 margin: the tiling range 9..6 is empty
        let side = assemble_main(20, &set);
        assert_eq!(side.size(), UVec3::new(16, 88, 11));
        assert_eq!(side.origin(), IVec3::new(1, 2, 1));
        assert!(positions_of(&side, "sweepers").is_empty());
        assert_eq!(positions_of(&side, "logic"), vec![IVec3::new(0, 0, 1)]);
        assert_eq!(positions_of(&side, "end"), vec![IVec3::new(9, 1, 1)]);
        assert_eq!(positions_of(&side, "dupers"), vec![IVec3::new(9, 82, 7)]);
    }

    #[test]
    fn test_main_tiles_at_module_pitch() {
        let logic = template("logic");
        let sweepers = template("sweepers");
        let end = template("end");
        let dupers = template("dupers");
        let set = SideTemplates {
            logic: &logic,
            sweepers_stack: &sweepers,
            sweepers_end: &end,
            dupers_stack: &dupers,
        };

        // 30 + 2 margin: range 9..18 step 6 tiles at x = 9 and x = 15
        let side = assemble_main(32, &set);
        assert_eq!(side.size(), UVec3::new(28, 88, 11));
        assert_eq!(
            positions_of(&side, "sweepers"),
            vec![IVec3::new(9, 1, 1), IVec3::new(15, 1, 1)]
        );
        assert_eq!(positions_of(&side, "end"), vec![IVec3::new(21, 1, 1)]);
        assert_eq!(
            positions_of(&side, "dupers"),
            vec![
                IVec3::new(9, 82, 7),
                IVec3::new(15, 82, 7),
                IVec3::new(21, 82, 7)
            ]
        );
    }

    #[test]
    fn test_return_anchors() {
        let logic = template("logic");
        let sweepers = template("sweepers");
        let end = template("end");
        let dupers = template("dupers");
        let set = SideTemplates {
            logic: &logic,
            sweepers_stack: &sweepers,
            sweepers_end: &end,
            dupers_stack: &dupers,
        };

        let side = assemble_return(20, 31, &set);
        assert_eq!(side.size(), UVec3::new(16, 84, 16));
        assert_eq!(side.origin(), IVec3::new(1, 4, 14));
        // the z=1 marker of each template lands on z=0 through the -1 anchor
        assert_eq!(positions_of(&side, "logic"), vec![IVec3::new(0, 0, 0)]);
        assert_eq!(positions_of(&side, "end"), vec![IVec3::new(9, 0, 0)]);
        assert_eq!(positions_of(&side, "dupers"), vec![IVec3::new(9, 81, 5)]);
    }

    #[test]
    fn test_side_grows_for_oversized_template() {
        // a logic template taller than the working buffer forces growth
        let mut logic = Region::new(IVec3::ZERO, UVec3::new(1, 90, 2));
        logic.set(IVec3::new(0, 89, 1), marker("logic"));
        let sweepers = template("sweepers");
        let end = template("end");
        let dupers = template("dupers");
        let set = SideTemplates {
            logic: &logic,
            sweepers_stack: &sweepers,
            sweepers_end: &end,
            dupers_stack: &dupers,
        };

        let side = assemble_main(20, &set);
        assert_eq!(side.size(), UVec3::new(16, 90, 11));
        assert_eq!(positions_of(&side, "logic"), vec![IVec3::new(0, 89, 1)]);
    }
}
