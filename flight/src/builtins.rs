use crate::{OrbitSpec, SunSpec, SystemSpec, Vec3f};

fn body(radius: f32, size: f32, speed: f32) -> OrbitSpec {
    OrbitSpec { radius, size, speed, phase: 0.0 }
}

/// Eight planets around a sun floating two units above the floor, with the
/// ship parked well outside the outermost orbit and facing the sun.
pub fn classic_system() -> SystemSpec {
    SystemSpec {
        sun: SunSpec {
            position: Vec3f::new(0.0, 2.0, 0.0),
            half_extent: 2.5,
            spin_rate: 0.05,
        },
        orbit_height: 0.5,
        bodies: vec![
            body(3.0, 0.2, 0.5),
            body(5.0, 0.25, 0.4),
            body(7.5, 0.3, 0.3),
            body(10.0, 0.22, 0.25),
            // Ringed giants
            body(14.0, 0.5, 0.18),
            body(17.5, 0.4, 0.14),
            body(21.0, 0.28, 0.1),
            body(24.5, 0.27, 0.08),
        ],
        ship_start: Vec3f::new(0.0, 0.6, -30.0),
        ship_heading: std::f32::consts::PI,
        seed: 0x5EED,
    }
}

/// A single stationary body sitting on the ship's flight line, `distance` ahead of it.
/// Handy for collision scenarios.
pub fn single_body_range(distance: f32, size: f32) -> SystemSpec {
    let mut system = classic_system();
    let radius = -(system.ship_start.z + distance);
    // Phase π/2 puts the body on the −Z axis, where the ship flies toward the sun.
    system.bodies = vec![OrbitSpec {
        radius,
        size,
        speed: 0.0,
        phase: std::f32::consts::FRAC_PI_2,
    }];
    system.ship_start.y = system.sun.position.y + system.orbit_height;
    system
}
