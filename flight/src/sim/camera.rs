use super::types::{CameraPose, ShipState};
use crate::math::{Vec3f, WORLD_UP};
use crate::CameraConfig;

/// Where the camera wants to be: the configured offset carried into ship space.
pub fn desired_position(cfg: &CameraConfig, ship: &ShipState) -> Vec3f {
    ship.position + ship.orientation * cfg.offset
}

pub fn look_target(cfg: &CameraConfig, ship: &ShipState) -> Vec3f {
    ship.position + WORLD_UP * cfg.look_height
}

/// Blend factor for one frame. `1 − base^dt` keeps the chase identical at any refresh rate.
#[inline]
pub fn smoothing_factor(cfg: &CameraConfig, dt: f32) -> f32 {
    1.0 - cfg.smoothing_base.powf(dt)
}

impl CameraPose {
    /// Camera already sitting at its desired spot.
    pub fn behind(cfg: &CameraConfig, ship: &ShipState) -> Self {
        Self {
            position: desired_position(cfg, ship),
            look_at: look_target(cfg, ship),
        }
    }

    pub fn follow(&mut self, cfg: &CameraConfig, ship: &ShipState, dt: f32) {
        let desired = desired_position(cfg, ship);
        self.position = self.position.lerp(desired, smoothing_factor(cfg, dt));
        self.look_at = look_target(cfg, ship);
    }
}
