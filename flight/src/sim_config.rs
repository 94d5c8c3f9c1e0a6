use serde::{Deserialize, Serialize};
use crate::math::Vec3f;

/// Session-wide tuning, chosen once at start and never branched on per scene.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimConfig {
    /// Upper bound on a single frame step (s). Longer stalls are truncated.
    pub max_dt: f32,
    pub flight: FlightConfig,
    pub boost: BoostConfig,
    pub orbit: OrbitConfig,
    pub collision: CollisionConfig,
    pub camera: CameraConfig,
}

impl Default for SimConfig {
    fn default() -> Self {
        presets::flight_3d()
    }
}

/// How the ship's height is handled.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum AltitudeMode {
    /// Planar flight: Y is forced to `altitude` after every step. Up/down intent is ignored.
    Pinned { altitude: f32 },
    /// Independent vertical channel, not rotated by the hull orientation.
    Vertical {
        /// Vertical acceleration at full input (units/s²).
        thrust: f32,
        /// Per-60Hz-tick damping factor for the vertical rate.
        damping: f32,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlightConfig {
    /// Speed cap without boost (units/s).
    pub max_speed: f32,
    /// Forward acceleration at full input (units/s²).
    pub thrust: f32,
    /// Reverse thrust as a fraction of forward thrust.
    pub reverse_ratio: f32,
    /// Yaw acceleration at full input (rad/s²).
    pub angular_speed: f32,
    // Damping factors are per 60 Hz tick; the integrator raises them to dt×60.
    pub damping: f32,
    pub angular_damping: f32,
    pub altitude: AltitudeMode,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoostConfig {
    /// Thrust and speed-cap multiplier while boosting.
    pub multiplier: f32,
    /// Amount drained per second of boosting.
    pub drain_rate: f32,
    /// Amount restored per second while not boosting.
    pub recharge_rate: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrbitConfig {
    /// First hit: kick = ship_speed × factor + min.
    pub release_speed_factor: f32,
    pub release_min_kick: f32,
    /// Later hits on a free body: added impulse = ship_speed × factor + min.
    pub juggle_speed_factor: f32,
    pub juggle_min_kick: f32,
    /// Multiplier applied to a free body's velocity once per frame (not dt-scaled).
    pub free_drag_per_frame: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CollisionConfig {
    /// Full extents of the hull envelope in ship space (x = span, y = height, z = length).
    pub hull_size: Vec3f,
    /// Body hitbox side = size × body_scale + body_margin.
    pub body_scale: f32,
    pub body_margin: f32,
    /// Distance the ship is pushed out of the sun per overlapping frame.
    pub sun_push_distance: f32,
    /// Velocity impulse along the push direction (units/s², scaled by dt).
    pub sun_push_impulse: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CameraConfig {
    /// Camera offset in ship space (above and behind the hull).
    pub offset: Vec3f,
    /// Fraction of the remaining distance left after one second of smoothing.
    pub smoothing_base: f32,
    /// Look-at point height above the ship origin.
    pub look_height: f32,
}

pub mod presets {
    use super::*;

    fn base(altitude: AltitudeMode) -> SimConfig {
        SimConfig {
            max_dt: 0.05,
            flight: FlightConfig {
                max_speed: 20.0,
                thrust: 30.0,
                reverse_ratio: 0.6,
                angular_speed: std::f32::consts::PI * 2.5,
                damping: 0.96,
                angular_damping: 0.8,
                altitude,
            },
            boost: BoostConfig {
                multiplier: 2.6,
                drain_rate: 0.15,
                recharge_rate: 0.1,
            },
            orbit: OrbitConfig {
                release_speed_factor: 0.5,
                release_min_kick: 3.0,
                juggle_speed_factor: 0.3,
                juggle_min_kick: 2.0,
                free_drag_per_frame: 0.99,
            },
            collision: CollisionConfig {
                // Wingtip to wingtip, keel to fin, nose to nozzles
                hull_size: Vec3f::new(2.8, 1.3, 4.8),
                body_scale: 4.0,
                body_margin: 1.5,
                sun_push_distance: 0.25,
                sun_push_impulse: 10.0,
            },
            camera: CameraConfig {
                offset: Vec3f::new(0.0, 4.0, 10.0),
                smoothing_base: 0.01,
                look_height: 1.0,
            },
        }
    }

    /// Planar dogfight tuning: the ship skims the orbital plane at a fixed height.
    pub fn arcade() -> SimConfig {
        base(AltitudeMode::Pinned { altitude: 0.6 })
    }

    /// Full flight: yaw plus an independent vertical channel.
    pub fn flight_3d() -> SimConfig {
        base(AltitudeMode::Vertical { thrust: 16.0, damping: 0.93 })
    }
}
