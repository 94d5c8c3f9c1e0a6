use serde::{Deserialize, Serialize};

use super::boost::BoostOutput;
use super::types::ShipState;

/// Presentation cues a renderer derives from the flight state. None of these feed back into the simulation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ShipCosmetics {
    /// Engine light intensity.
    pub engine_glow: f32,
    /// Propeller spin (rad/s).
    pub propeller_rate: f32,
    /// Target wing roll (rad). Positive while turning left.
    pub wing_bank: f32,
    /// Target fuselage pitch (rad). Positive while climbing.
    pub fuselage_pitch: f32,
}

const BOOST_GLOW: f32 = 2.0;

impl ShipCosmetics {
    pub fn derive(ship: &ShipState, boost: BoostOutput) -> Self {
        Self {
            engine_glow: if boost.boosting { BOOST_GLOW } else { 0.0 },
            propeller_rate: propeller_rate(ship.speed()),
            wing_bank: (ship.yaw_velocity * 0.25).clamp(-0.45, 0.45),
            fuselage_pitch: (ship.vertical_velocity * 0.04).clamp(-0.25, 0.25),
        }
    }
}

fn propeller_rate(speed: f32) -> f32 {
    if speed > 0.1 {
        (speed * 1.2).clamp(5.0, 25.0)
    } else if speed > 0.01 {
        // idling down
        5.0
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Vec3f;

    #[test]
    fn propeller_bands() {
        assert_eq!(propeller_rate(0.0), 0.0);
        assert_eq!(propeller_rate(0.05), 5.0);
        assert_eq!(propeller_rate(1.0), 5.0);
        assert!((propeller_rate(10.0) - 12.0).abs() < 1e-5);
        assert_eq!(propeller_rate(50.0), 25.0);
    }

    #[test]
    fn glow_tracks_boost_gate() {
        let ship = ShipState::at_rest(Vec3f::ZERO, 0.0);
        let on = BoostOutput { boosting: true, multiplier: 2.6 };
        assert_eq!(ShipCosmetics::derive(&ship, on).engine_glow, 2.0);
        assert_eq!(ShipCosmetics::derive(&ship, BoostOutput::default()).engine_glow, 0.0);
    }

    #[test]
    fn bank_is_clamped() {
        let mut ship = ShipState::at_rest(Vec3f::ZERO, 0.0);
        ship.yaw_velocity = 9.0;
        ship.vertical_velocity = -20.0;
        let c = ShipCosmetics::derive(&ship, BoostOutput::default());
        assert_eq!(c.wing_bank, 0.45);
        assert_eq!(c.fuselage_pitch, -0.25);
    }
}
