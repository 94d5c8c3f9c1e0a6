use serde::{Deserialize, Serialize};
use crate::math::Vec3f;

/// One orbiting body as it is laid out at session start.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrbitSpec {
    /// Distance from the sun in the orbital plane.
    pub radius: f32,
    /// Visual radius; also drives the hitbox.
    pub size: f32,
    /// Angular rate around the sun (rad/s).
    pub speed: f32,
    /// Starting orbit angle (rad). 0 places the body on the sun's +X side.
    #[serde(default)]
    pub phase: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SunSpec {
    pub position: Vec3f,
    /// Half extent of the sun's mesh once its geometry has loaded.
    pub half_extent: f32,
    /// Cosmetic self-spin (rad/s).
    pub spin_rate: f32,
}

/// Everything needed to populate a session: the sun, the orbit table and where the ship starts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SystemSpec {
    pub sun: SunSpec,
    /// Height of the orbit plane above the sun's center.
    pub orbit_height: f32,
    pub bodies: Vec<OrbitSpec>,
    pub ship_start: Vec3f,
    /// Initial ship yaw (rad). π faces +Z.
    pub ship_heading: f32,
    /// Seed for per-body cosmetic spin rates.
    pub seed: u64,
}

impl SystemSpec {
    /// World position of a body orbiting at `radius` and `angle`.
    pub fn orbit_position(&self, radius: f32, angle: f32) -> Vec3f {
        orbit_position(self.sun.position, self.orbit_height, radius, angle)
    }
}

/// Point on a circular orbit around `center`, lifted by `height`.
/// Angles advance counter-clockwise seen from above (+X toward −Z).
#[inline]
pub fn orbit_position(center: Vec3f, height: f32, radius: f32, angle: f32) -> Vec3f {
    let (s, c) = angle.sin_cos();
    center + Vec3f::new(radius * c, height, -radius * s)
}
