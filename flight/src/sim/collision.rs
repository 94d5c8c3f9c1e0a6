use bevy_math::bounding::{Aabb3d, Bounded3d, IntersectsVolume};
use bevy_math::primitives::Cuboid;
use bevy_math::Isometry3d;

use super::types::ShipState;
use crate::math::{Vec3f, WORLD_UP};
use crate::CollisionConfig;

/// World AABB of the hull envelope at the ship's current pose.
/// Rotating the hull grows the box, the same way a scene graph bounds a turned object.
pub fn ship_bounds(cfg: &CollisionConfig, ship: &ShipState) -> Aabb3d {
    Cuboid::from_size(cfg.hull_size).aabb_3d(Isometry3d::new(ship.position, ship.orientation))
}

/// Hitbox of an orbiting body. Inflated beyond the rendered size so grazing passes still count.
pub fn body_bounds(cfg: &CollisionConfig, center: Vec3f, size: f32) -> Aabb3d {
    let side = size * cfg.body_scale + cfg.body_margin;
    Aabb3d::new(center, Vec3f::splat(side * 0.5))
}

pub fn sun_bounds(center: Vec3f, half_extent: f32) -> Aabb3d {
    Aabb3d::new(center, Vec3f::splat(half_extent))
}

#[inline]
pub fn overlaps(a: &Aabb3d, b: &Aabb3d) -> bool {
    a.intersects(b)
}

/// Unit vector from `from` toward `to`; straight up when the points coincide.
#[inline]
pub fn direction_or_up(from: Vec3f, to: Vec3f) -> Vec3f {
    (to - from).try_normalize().unwrap_or(WORLD_UP)
}

/// Direction from the sun to the ship, kept in the XZ plane when the ship is
/// pinned to an altitude. Directly under the sun's centre it backs the ship out
/// along its own tail.
pub fn sun_push_direction(ship: &ShipState, sun: Vec3f, planar: bool) -> Vec3f {
    if !planar {
        return direction_or_up(sun, ship.position);
    }
    let mut flat = ship.position - sun;
    flat.y = 0.0;
    flat.try_normalize().unwrap_or(-ship.forward())
}

/// Soft repulsion out of the sun: a fixed positional nudge plus a velocity
/// impulse along sun→ship. Several frames may pass before the ship is clear.
pub fn push_out_of_sun(cfg: &CollisionConfig, ship: &mut ShipState, sun: Vec3f, dt: f32, planar: bool) {
    let dir = sun_push_direction(ship, sun, planar);
    ship.position += dir * cfg.sun_push_distance;
    ship.velocity += dir * (cfg.sun_push_impulse * dt);
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy_math::bounding::BoundingVolume;
    use crate::{presets, Quatf};

    fn cfg() -> CollisionConfig {
        presets::arcade().collision
    }

    #[test]
    fn body_hitbox_uses_inflated_size() {
        let b = body_bounds(&cfg(), Vec3f::ZERO, 0.5);
        let half = Vec3f::from(b.half_size());
        assert!((half.x - 1.75).abs() < 1e-6, "half={half:?}");
    }

    #[test]
    fn turned_hull_box_is_wider() {
        let mut ship = ShipState::at_rest(Vec3f::ZERO, 0.0);
        let straight = ship_bounds(&cfg(), &ship);
        ship.orientation = Quatf::from_rotation_y(std::f32::consts::FRAC_PI_4);
        let turned = ship_bounds(&cfg(), &ship);
        assert!(turned.half_size().x > straight.half_size().x);
    }

    #[test]
    fn separated_boxes_do_not_overlap() {
        let ship = ShipState::at_rest(Vec3f::ZERO, 0.0);
        let s = ship_bounds(&cfg(), &ship);
        assert!(!overlaps(&s, &body_bounds(&cfg(), Vec3f::new(10.0, 0.0, 0.0), 0.3)));
        assert!(overlaps(&s, &body_bounds(&cfg(), Vec3f::new(2.0, 0.0, 0.0), 0.3)));
    }

    #[test]
    fn push_points_away_from_sun() {
        let mut ship = ShipState::at_rest(Vec3f::new(1.0, 2.0, 0.0), 0.0);
        push_out_of_sun(&cfg(), &mut ship, Vec3f::new(0.0, 2.0, 0.0), 0.05, false);
        assert!((ship.position.x - 1.25).abs() < 1e-6);
        assert!(ship.velocity.x > 0.0);
    }

    #[test]
    fn planar_push_stays_horizontal() {
        let mut ship = ShipState::at_rest(Vec3f::new(1.0, 0.6, 0.0), 0.0);
        push_out_of_sun(&cfg(), &mut ship, Vec3f::new(0.0, 2.0, 0.0), 0.05, true);
        assert!((ship.position - Vec3f::new(1.25, 0.6, 0.0)).length() < 1e-6);
        assert!((ship.velocity - Vec3f::new(0.5, 0.0, 0.0)).length() < 1e-6);
    }

    #[test]
    fn planar_push_under_centre_backs_out_along_tail() {
        let ship = ShipState::at_rest(Vec3f::new(0.0, 0.6, 0.0), std::f32::consts::PI);
        let dir = sun_push_direction(&ship, Vec3f::new(0.0, 2.0, 0.0), true);
        // Facing +Z, so the tail points along −Z
        assert!((dir - Vec3f::NEG_Z).length() < 1e-5, "dir={dir:?}");
    }

    #[test]
    fn coincident_points_push_up() {
        assert_eq!(direction_or_up(Vec3f::ONE, Vec3f::ONE), WORLD_UP);
    }
}
