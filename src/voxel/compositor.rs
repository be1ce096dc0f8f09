//! Region compositor: the paste primitive shared by every assembler

use glam::IVec3;

use crate::voxel::Region;

/// Paste every non-air block of `src` into `dst` at the given offset.
///
/// If `src` overhangs `dst`'s extents at that offset, `dst` is replaced by
/// a region with the same origin and extents grown to the union of both
/// footprints; existing content keeps its exact local positions. Otherwise
/// `dst` is mutated in place. Callers must not rely on either identity.
///
/// On overlap the source block wins. Source blocks pushed below the
/// destination origin by a negative offset component are dropped; growth
/// only ever extends the far faces.
pub fn paste(dst: Region, src: &Region, offset: IVec3) -> Region {
    let current = dst.size().as_ivec3();
    let needed = src.size().as_ivec3() + offset;
    let grown = current.max(needed);

    let mut out = if grown != current {
        let mut out = Region::new(dst.origin(), grown.as_uvec3());
        for (pos, state) in dst.blocks() {
            out.set(pos, state.clone());
        }
        out
    } else {
        dst
    };

    for (pos, state) in src.blocks() {
        let target = pos + offset;
        if target.cmpge(IVec3::ZERO).all() {
            out.set(target, state.clone());
        }
    }

    out
}
