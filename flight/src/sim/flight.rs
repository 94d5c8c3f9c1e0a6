use super::boost::BoostOutput;
use super::types::{FrameDebug, Intent, ShipState};
use crate::math::{Quatf, WORLD_UP};
use crate::{AltitudeMode, FlightConfig};

/// Arcade flight step: thrust along the nose, yaw about world up, optional
/// vertical channel, per-tick damping and a hard speed cap.
/// See `step_ship_dbg` for the telemetry variant.
pub fn step_ship(cfg: &FlightConfig, intent: Intent, boost: BoostOutput, ship: &mut ShipState, dt: f32) {
    step_ship_dbg(cfg, intent, boost, ship, dt, None);
}

pub fn step_ship_dbg(
    cfg: &FlightConfig,
    intent: Intent,
    boost: BoostOutput,
    ship: &mut ShipState,
    dt: f32,
    mut dbg: Option<&mut FrameDebug>,
) {
    if dt <= 0.0 {
        return;
    }

    // Reverse is deliberately weaker than forward thrust
    let mut thrust = 0.0;
    if intent.forward {
        thrust += cfg.thrust;
    }
    if intent.back {
        thrust -= cfg.thrust * cfg.reverse_ratio;
    }
    thrust *= boost.multiplier;

    let forward = ship.forward();
    ship.velocity += forward * (thrust * dt);

    ship.yaw_velocity += intent.turn_axis() * cfg.angular_speed * dt;
    let delta_yaw = Quatf::from_axis_angle(WORLD_UP, ship.yaw_velocity * dt);
    ship.orientation = (ship.orientation * delta_yaw).normalize();

    let ticks = dt * 60.0;
    ship.velocity *= cfg.damping.powf(ticks);
    ship.yaw_velocity *= cfg.angular_damping.powf(ticks);

    let speed_limit = speed_limit(cfg, boost);
    ship.velocity = ship.velocity.clamp_length_max(speed_limit);

    ship.position += ship.velocity * dt;
    match cfg.altitude {
        AltitudeMode::Pinned { altitude } => {
            ship.velocity.y = 0.0;
            ship.vertical_velocity = 0.0;
            ship.position.y = altitude;
        }
        AltitudeMode::Vertical { thrust: v_thrust, damping } => {
            ship.vertical_velocity += intent.climb_axis() * v_thrust * dt;
            ship.vertical_velocity *= damping.powf(ticks);
            ship.position.y += ship.vertical_velocity * dt;
        }
    }

    if let Some(d) = dbg.as_mut() {
        d.thrust = thrust;
        d.forward = forward;
        d.speed = ship.speed();
        d.speed_limit = speed_limit;
    }
}

/// Re-applies the planar altitude after anything else has moved the ship.
pub(super) fn pin_altitude(cfg: &FlightConfig, ship: &mut ShipState) {
    if let AltitudeMode::Pinned { altitude } = cfg.altitude {
        ship.position.y = altitude;
        ship.velocity.y = 0.0;
        ship.vertical_velocity = 0.0;
    }
}

/// Speed cap for the current boost gate.
#[inline]
pub fn speed_limit(cfg: &FlightConfig, boost: BoostOutput) -> f32 {
    cfg.max_speed * boost.multiplier
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{presets, Vec3f};

    fn ship() -> ShipState {
        ShipState::at_rest(Vec3f::new(0.0, 0.6, 0.0), 0.0)
    }

    #[test]
    fn forward_thrust_moves_along_negative_z() {
        let cfg = presets::arcade().flight;
        let mut s = ship();
        let intent = Intent { forward: true, ..Intent::IDLE };
        for _ in 0..30 {
            step_ship(&cfg, intent, BoostOutput::default(), &mut s, 1.0 / 60.0);
        }
        assert!(s.position.z < -0.5, "z={}", s.position.z);
        assert!(s.position.x.abs() < 1e-5);
    }

    #[test]
    fn reverse_is_weaker_than_forward() {
        let cfg = presets::arcade().flight;
        let mut fwd = ship();
        let mut back = ship();
        let dt = 1.0 / 60.0;
        for _ in 0..20 {
            step_ship(&cfg, Intent { forward: true, ..Intent::IDLE }, BoostOutput::default(), &mut fwd, dt);
            step_ship(&cfg, Intent { back: true, ..Intent::IDLE }, BoostOutput::default(), &mut back, dt);
        }
        assert!(back.speed() < fwd.speed());
        assert!(back.velocity.z > 0.0);
    }

    #[test]
    fn left_turn_increases_yaw() {
        let cfg = presets::arcade().flight;
        let mut s = ship();
        for _ in 0..10 {
            step_ship(&cfg, Intent { left: true, ..Intent::IDLE }, BoostOutput::default(), &mut s, 1.0 / 60.0);
        }
        assert!(s.yaw() > 0.01, "yaw={}", s.yaw());
        assert!(s.yaw_velocity > 0.0);
    }

    #[test]
    fn pinned_altitude_ignores_climb() {
        let cfg = presets::arcade().flight;
        let mut s = ship();
        s.position.y = 5.0;
        step_ship(&cfg, Intent { up: true, ..Intent::IDLE }, BoostOutput::default(), &mut s, 0.02);
        assert_eq!(s.position.y, 0.6);
        assert_eq!(s.vertical_velocity, 0.0);
    }

    #[test]
    fn pinned_altitude_drops_stray_vertical_velocity() {
        let cfg = presets::arcade().flight;
        let mut s = ship();
        s.velocity = Vec3f::new(0.0, -4.0, -3.0);
        step_ship(&cfg, Intent::IDLE, BoostOutput::default(), &mut s, 1.0 / 60.0);
        assert_eq!(s.velocity.y, 0.0);
        assert!(s.velocity.z < 0.0);
    }

    #[test]
    fn vertical_channel_is_not_rotated_by_heading() {
        let cfg = presets::flight_3d().flight;
        let mut s = ShipState::at_rest(Vec3f::ZERO, 1.1);
        for _ in 0..30 {
            step_ship(&cfg, Intent { up: true, ..Intent::IDLE }, BoostOutput::default(), &mut s, 1.0 / 60.0);
        }
        assert!(s.position.y > 0.1);
        assert_eq!(s.position.x, 0.0);
        assert_eq!(s.position.z, 0.0);
    }

    #[test]
    fn damping_is_frame_rate_independent() {
        let cfg = presets::arcade().flight;
        let mut coarse = ship();
        let mut fine = ship();
        coarse.velocity = Vec3f::new(0.0, 0.0, -10.0);
        fine.velocity = coarse.velocity;
        for _ in 0..30 {
            step_ship(&cfg, Intent::IDLE, BoostOutput::default(), &mut coarse, 1.0 / 30.0);
        }
        for _ in 0..120 {
            step_ship(&cfg, Intent::IDLE, BoostOutput::default(), &mut fine, 1.0 / 120.0);
        }
        assert!((coarse.speed() - fine.speed()).abs() < 1e-3);
    }

    #[test]
    fn zero_dt_is_a_no_op() {
        let cfg = presets::arcade().flight;
        let mut s = ship();
        let before = s;
        step_ship(&cfg, Intent { forward: true, left: true, ..Intent::IDLE }, BoostOutput::default(), &mut s, 0.0);
        assert_eq!(s, before);
    }
}
