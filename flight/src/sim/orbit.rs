use serde::{Deserialize, Serialize};

use super::collision::direction_or_up;
use crate::math::Vec3f;
use crate::system::orbit_position;
use crate::{OrbitConfig, OrbitSpec};

/// Orbit membership. The only edge is `Orbiting → FreeFlying`; there is no capture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrbitState {
    Orbiting,
    FreeFlying,
}

/// What a contact did to a body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactOutcome {
    /// First hit: the body left its orbit.
    Released,
    /// The body was already free and took another impulse.
    Juggled,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrbitBody {
    pub orbit_radius: f32,
    pub orbit_angle: f32,
    pub base_orbit_speed: f32,
    pub size: f32,
    state: OrbitState,
    /// Meaningful only while free-flying.
    free_velocity: Vec3f,
    /// World position as of the last completed update.
    position: Vec3f,
    /// Cosmetic self-spin, not part of collision state.
    pub spin_angle: f32,
    pub spin_rate: f32,
}

impl OrbitBody {
    /// A body on its orbit at the spec's starting phase.
    pub fn from_spec(spec: &OrbitSpec, center: Vec3f, height: f32, spin_rate: f32) -> Self {
        Self {
            orbit_radius: spec.radius,
            orbit_angle: spec.phase,
            base_orbit_speed: spec.speed,
            size: spec.size,
            state: OrbitState::Orbiting,
            free_velocity: Vec3f::ZERO,
            position: orbit_position(center, height, spec.radius, spec.phase),
            spin_angle: 0.0,
            spin_rate,
        }
    }

    pub fn state(&self) -> OrbitState {
        self.state
    }

    pub fn is_orbiting(&self) -> bool {
        self.state == OrbitState::Orbiting
    }

    pub fn position(&self) -> Vec3f {
        self.position
    }

    pub fn free_velocity(&self) -> Vec3f {
        self.free_velocity
    }

    /// The single state transition. Releasing an already free body is a logic error.
    fn release(&mut self, velocity: Vec3f) {
        debug_assert_eq!(
            self.state,
            OrbitState::Orbiting,
            "orbit release requested for a body that is already free"
        );
        self.state = OrbitState::FreeFlying;
        self.free_velocity = velocity;
    }

    /// Apply a ship contact. `ship_pos`/`ship_speed` are the ship's post-integration values.
    pub fn on_contact(&mut self, cfg: &OrbitConfig, ship_pos: Vec3f, ship_speed: f32) -> ContactOutcome {
        let impact_dir = direction_or_up(ship_pos, self.position);
        match self.state {
            OrbitState::Orbiting => {
                let kick = ship_speed * cfg.release_speed_factor + cfg.release_min_kick;
                self.release(impact_dir * kick);
                ContactOutcome::Released
            }
            OrbitState::FreeFlying => {
                // Added, not replaced, so a body can be juggled
                let kick = ship_speed * cfg.juggle_speed_factor + cfg.juggle_min_kick;
                self.free_velocity += impact_dir * kick;
                ContactOutcome::Juggled
            }
        }
    }

    /// Advance orbital or free motion by `dt`.
    pub fn advance(&mut self, cfg: &OrbitConfig, center: Vec3f, height: f32, dt: f32) {
        match self.state {
            OrbitState::Orbiting => {
                self.orbit_angle += self.base_orbit_speed * dt;
                self.position = orbit_position(center, height, self.orbit_radius, self.orbit_angle);
            }
            OrbitState::FreeFlying => {
                self.position += self.free_velocity * dt;
                // Per-frame drag, deliberately not scaled by dt
                self.free_velocity *= cfg.free_drag_per_frame;
            }
        }
        self.spin_angle += self.spin_rate * dt;
    }
}
