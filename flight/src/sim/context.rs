use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use super::boost::{BoostOutput, BoostResource};
use super::collision::{body_bounds, overlaps, push_out_of_sun, ship_bounds, sun_bounds};
use super::cosmetics::ShipCosmetics;
use super::flight::{pin_altitude, speed_limit, step_ship_dbg};
use super::orbit::{ContactOutcome, OrbitBody};
use super::snapshot::MinimapSnapshot;
use super::types::{CameraPose, FrameDebug, Intent, ShipState};
use crate::math::Vec3f;
use crate::{AltitudeMode, SimConfig, SystemSpec};

/// Range of the cosmetic self-spin assigned to each body at creation (rad/s).
const BODY_SPIN_MIN: f32 = 0.1;
const BODY_SPIN_MAX: f32 = 0.2;

/// The sun. Its collision volume is unknown until its geometry has loaded.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CentralBody {
    pub position: Vec3f,
    pub half_extent: Option<f32>,
    pub spin_angle: f32,
    pub spin_rate: f32,
}

impl CentralBody {
    pub fn resolve_geometry(&mut self, half_extent: f32) {
        self.half_extent = Some(half_extent);
    }

    pub fn is_resolved(&self) -> bool {
        self.half_extent.is_some()
    }
}

/// Everything that carries over between frames. Restoring one reproduces the session exactly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimCheckpoint {
    pub frame: u64,
    pub elapsed: f32,
    pub ship: ShipState,
    pub bodies: Vec<OrbitBody>,
    pub central: CentralBody,
    pub boost: BoostResource,
    pub camera: CameraPose,
    /// Gate of the frame the checkpoint was taken after, so presentation
    /// cues read the same before the first resumed frame.
    pub last_boost: BoostOutput,
}

/// Simulation context owned by the frame driver. One writer, advanced once per display refresh.
#[derive(Debug, Clone)]
pub struct FlightSim {
    config: SimConfig,
    orbit_height: f32,
    frame: u64,
    elapsed: f32,
    pub ship: ShipState,
    pub bodies: Vec<OrbitBody>,
    pub central: CentralBody,
    pub boost: BoostResource,
    pub camera: CameraPose,
    /// Gate from the most recent frame, for renderers and HUDs.
    last_boost: BoostOutput,
}

impl FlightSim {
    /// Fresh session. The sun starts unresolved; call `central.resolve_geometry` when it loads.
    pub fn new(config: SimConfig, system: &SystemSpec) -> Self {
        let mut rng = StdRng::seed_from_u64(system.seed);
        let center = system.sun.position;
        let bodies = system
            .bodies
            .iter()
            .map(|spec| {
                let spin = rng.random_range(BODY_SPIN_MIN..BODY_SPIN_MAX);
                OrbitBody::from_spec(spec, center, system.orbit_height, spin)
            })
            .collect();
        let ship = ShipState::at_rest(system.ship_start, system.ship_heading);
        Self {
            orbit_height: system.orbit_height,
            frame: 0,
            elapsed: 0.0,
            camera: CameraPose::behind(&config.camera, &ship),
            boost: BoostResource::new(&config.boost),
            central: CentralBody {
                position: center,
                half_extent: None,
                spin_angle: 0.0,
                spin_rate: system.sun.spin_rate,
            },
            ship,
            bodies,
            last_boost: BoostOutput::default(),
            config,
        }
    }

    /// Continue a session from a checkpoint. `system` supplies the static orbit-plane height.
    pub fn restore(config: SimConfig, system: &SystemSpec, checkpoint: SimCheckpoint) -> Self {
        Self {
            orbit_height: system.orbit_height,
            frame: checkpoint.frame,
            elapsed: checkpoint.elapsed,
            ship: checkpoint.ship,
            bodies: checkpoint.bodies,
            central: checkpoint.central,
            boost: checkpoint.boost,
            camera: checkpoint.camera,
            last_boost: checkpoint.last_boost,
            config,
        }
    }

    pub fn checkpoint(&self) -> SimCheckpoint {
        SimCheckpoint {
            frame: self.frame,
            elapsed: self.elapsed,
            ship: self.ship,
            bodies: self.bodies.clone(),
            central: self.central,
            boost: self.boost,
            camera: self.camera,
            last_boost: self.last_boost,
        }
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    pub fn last_boost(&self) -> BoostOutput {
        self.last_boost
    }

    /// Boost fill for a HUD bar, in [0, 1].
    pub fn boost_level(&self) -> f32 {
        self.boost.amount()
    }

    pub fn cosmetics(&self) -> ShipCosmetics {
        ShipCosmetics::derive(&self.ship, self.last_boost)
    }

    pub fn snapshot(&self) -> MinimapSnapshot {
        MinimapSnapshot::capture(self.frame, &self.ship, self.central.position, &self.bodies)
    }

    pub fn advance(&mut self, dt: f32, intent: Intent) {
        self.advance_dbg(dt, intent, None);
    }

    /// One frame: boost gate, flight, sun repulsion, body motion and contacts, camera.
    pub fn advance_dbg(&mut self, raw_dt: f32, intent: Intent, mut dbg: Option<&mut FrameDebug>) {
        let dt = raw_dt.min(self.config.max_dt);
        if dt <= 0.0 {
            return;
        }
        let cfg = &self.config;

        // The gate is settled before thrust is computed
        let boost = self.boost.update(intent.boost, cfg.boost.multiplier, dt);
        self.last_boost = boost;

        step_ship_dbg(&cfg.flight, intent, boost, &mut self.ship, dt, dbg.as_deref_mut());

        let mut hull = ship_bounds(&cfg.collision, &self.ship);
        let sun_overlap = self.central.half_extent.map(|half| {
            let hit = overlaps(&hull, &sun_bounds(self.central.position, half));
            if hit {
                let planar = matches!(cfg.flight.altitude, AltitudeMode::Pinned { .. });
                push_out_of_sun(&cfg.collision, &mut self.ship, self.central.position, dt, planar);
                self.ship.velocity = self
                    .ship
                    .velocity
                    .clamp_length_max(speed_limit(&cfg.flight, boost));
                pin_altitude(&cfg.flight, &mut self.ship);
                hull = ship_bounds(&cfg.collision, &self.ship);
            }
            hit
        });

        let ship_pos = self.ship.position;
        let ship_speed = self.ship.speed();
        let mut released = Vec::new();
        let mut juggled = Vec::new();
        for (i, body) in self.bodies.iter_mut().enumerate() {
            // Move first, then test against where the body is now
            body.advance(&cfg.orbit, self.central.position, self.orbit_height, dt);
            if overlaps(&hull, &body_bounds(&cfg.collision, body.position(), body.size)) {
                match body.on_contact(&cfg.orbit, ship_pos, ship_speed) {
                    ContactOutcome::Released => released.push(i),
                    ContactOutcome::Juggled => juggled.push(i),
                }
            }
        }

        self.central.spin_angle += self.central.spin_rate * dt;
        self.camera.follow(&cfg.camera, &self.ship, dt);

        self.frame += 1;
        self.elapsed += dt;

        if let Some(d) = dbg.as_mut() {
            d.frame = self.frame;
            d.raw_dt = raw_dt;
            d.dt = dt;
            d.intent = intent;
            d.boost = boost;
            d.boost_amount = self.boost.amount();
            d.speed = self.ship.speed();
            d.sun_overlap = sun_overlap;
            d.released = released;
            d.juggled = juggled;
        }
    }
}
