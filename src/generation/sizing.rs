//! Size normalization and build-height rules for the world eater

/// Minimum footprint along the long (x) axis
pub const MIN_SIZE_X: i32 = 18;

/// Minimum footprint along the z axis
pub const MIN_SIZE_Z: i32 = 29;

/// Vertical period of the sweeper/duper unit
const MODULE_HEIGHT: i32 = 4;

/// Long-axis pitch of one tiled module
const MODULE_PITCH: i32 = 6;

/// Normalize a requested (x, z) footprint to the machine's modular
/// constraints.
///
/// The long axis must be a multiple of the module pitch; any other value
/// rounds up to the next multiple, never down. Both axes are then clamped
/// to the minimum footprint. Idempotent.
pub fn normalize(x: i32, z: i32) -> (i32, i32) {
    let x = if x % MODULE_PITCH != 0 {
        MODULE_PITCH * (x.div_euclid(MODULE_PITCH) + 1)
    } else {
        x
    };

    (x.max(MIN_SIZE_X), z.max(MIN_SIZE_Z))
}

/// The y coordinate the machine must be built at so that its 4-block
/// repeating unit lands exactly on the end elevation.
///
/// Total over all integers; `end` above `start` is allowed.
pub fn build_height(start: i32, end: i32) -> i32 {
    start + (start - end).rem_euclid(MODULE_HEIGHT)
}

/// Human-readable form of a normalized footprint, annotating each axis
/// that changed, e.g. `"24 (+4), 29 (+1)"`.
///
/// Single source of truth for the "adjusted size" message shown by every
/// front end.
pub fn describe_adjustment(requested: (i32, i32), normalized: (i32, i32)) -> String {
    let axis = |req: i32, norm: i32| {
        let diff = norm - req;
        if diff != 0 {
            format!("{norm} ({diff:+})")
        } else {
            norm.to_string()
        }
    };

    format!(
        "{}, {}",
        axis(requested.0, normalized.0),
        axis(requested.1, normalized.1)
    )
}
