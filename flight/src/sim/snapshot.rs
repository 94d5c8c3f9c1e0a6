use serde::{Deserialize, Serialize};

use super::orbit::{OrbitBody, OrbitState};
use super::types::ShipState;
use crate::math::Vec3f;

/// A point on the orbital plane, as seen from above.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlanarPoint {
    pub x: f32,
    pub z: f32,
}

impl From<Vec3f> for PlanarPoint {
    fn from(v: Vec3f) -> Self {
        Self { x: v.x, z: v.z }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShipMarker {
    pub at: PlanarPoint,
    /// Heading about world up (rad), zero facing −Z.
    pub yaw: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BodyMarker {
    pub at: PlanarPoint,
    pub orbit_radius: f32,
    pub size: f32,
    pub state: OrbitState,
}

/// Read-only, plain-data view of one completed frame for a 2D minimap.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MinimapSnapshot {
    pub frame: u64,
    pub ship: ShipMarker,
    pub sun: PlanarPoint,
    /// Same order as the session's body table.
    pub bodies: Vec<BodyMarker>,
}

impl MinimapSnapshot {
    pub fn capture(frame: u64, ship: &ShipState, sun: Vec3f, bodies: &[OrbitBody]) -> Self {
        Self {
            frame,
            ship: ShipMarker { at: ship.position.into(), yaw: ship.yaw() },
            sun: sun.into(),
            bodies: bodies
                .iter()
                .map(|b| BodyMarker {
                    at: b.position().into(),
                    orbit_radius: b.orbit_radius,
                    size: b.size,
                    state: b.state(),
                })
                .collect(),
        }
    }

    pub fn free_count(&self) -> usize {
        self.bodies.iter().filter(|b| b.state == OrbitState::FreeFlying).count()
    }
}
