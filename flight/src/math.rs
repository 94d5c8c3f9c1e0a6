//! Vector types used across the workspace.
//!
//! These are Bevy's `Vec3`/`Quat` under the names the simulation code uses,
//! so a Bevy renderer can place meshes straight from simulation poses.

pub use bevy_math::{Quat as Quatf, Vec3 as Vec3f};

/// World up axis (+Y).
pub const WORLD_UP: Vec3f = Vec3f::Y;

/// Ship-local forward axis. The hull points down −Z in its own frame.
pub const SHIP_FORWARD: Vec3f = Vec3f::NEG_Z;

/// Heading of a yaw-only orientation about world up.
/// Zero faces −Z; positive yaw turns the nose left (toward −X).
#[inline]
pub fn yaw_of(q: Quatf) -> f32 {
    let fwd = q * SHIP_FORWARD;
    (-fwd.x).atan2(-fwd.z)
}
