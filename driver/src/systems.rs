use bevy_ecs::prelude::*;
use flight::{FlightSim, FrameDebug};
use protocol::{FrameTelemetry, Message};
use tracing::{debug, info, warn};

use crate::input::{KeyBindings, KeyState};
use crate::script::InputScript;

/// The simulation context. Only `advance_sim` writes to it during a frame.
#[derive(Resource, Debug, Clone)]
pub struct SimState(pub FlightSim);

/// Fixed display refresh the driver pretends to run at.
#[derive(Resource, Debug, Clone, Copy)]
pub struct FrameClock {
    pub dt: f32,
}

#[derive(Resource, Debug, Default)]
pub struct ScriptPlayer(pub InputScript);

/// When the sun's geometry "finishes loading".
#[derive(Resource, Debug, Clone, Copy)]
pub struct CentralLoad {
    pub after_frames: u64,
    pub half_extent: f32,
}

#[derive(Resource, Debug, Clone, Copy)]
pub struct TelemetrySettings {
    pub every: u64,
}

/// Most recent published telemetry and its encoded size.
#[derive(Resource, Debug, Default)]
pub struct LatestTelemetry {
    pub telemetry: Option<FrameTelemetry>,
    pub encoded: Vec<u8>,
    pub published: u64,
}

/// Debug record of the last advanced frame, plus running contact totals.
#[derive(Resource, Debug, Default)]
pub struct FrameLog {
    pub last: FrameDebug,
    pub releases: u64,
    pub juggles: u64,
    pub sun_contacts: u64,
}

#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct DriverSet;

pub fn feed_script(sim: Res<SimState>, mut player: ResMut<ScriptPlayer>, mut keys: ResMut<KeyState>) {
    let applied = player.0.feed(sim.0.elapsed(), &mut keys);
    if applied > 0 {
        debug!(applied, t = sim.0.elapsed(), "Script steps applied");
        if player.0.is_finished() {
            info!(frame = sim.0.frame(), "Input script finished");
        }
    }
}

pub fn resolve_central_geometry(mut sim: ResMut<SimState>, load: Res<CentralLoad>) {
    if sim.0.central.is_resolved() || sim.0.frame() < load.after_frames {
        return;
    }
    sim.0.central.resolve_geometry(load.half_extent);
    info!(frame = sim.0.frame(), half_extent = load.half_extent, "Sun geometry resolved");
}

pub fn advance_sim(
    mut sim: ResMut<SimState>,
    clock: Res<FrameClock>,
    keys: Res<KeyState>,
    bindings: Res<KeyBindings>,
    mut log: ResMut<FrameLog>,
) {
    let intent = bindings.reduce(&keys);
    let mut dbg = FrameDebug::default();
    sim.0.advance_dbg(clock.dt, intent, Some(&mut dbg));
    if dbg.frame == 0 {
        warn!(dt = clock.dt, "Frame skipped: non-positive dt");
        return;
    }

    for &i in &dbg.released {
        let body = &sim.0.bodies[i];
        info!(
            frame = dbg.frame,
            body = i,
            orbit_radius = body.orbit_radius,
            kick = body.free_velocity().length(),
            "Body knocked out of orbit"
        );
    }
    for &i in &dbg.juggled {
        debug!(frame = dbg.frame, body = i, "Free body juggled");
    }
    if dbg.sun_overlap == Some(true) {
        log.sun_contacts += 1;
        debug!(frame = dbg.frame, position = ?sim.0.ship.position, "Ship pushed out of the sun");
    }
    log.releases += dbg.released.len() as u64;
    log.juggles += dbg.juggled.len() as u64;
    log.last = dbg;
}

pub fn publish_telemetry(sim: Res<SimState>, settings: Res<TelemetrySettings>, mut latest: ResMut<LatestTelemetry>) {
    let frame = sim.0.frame();
    if settings.every == 0 || frame == 0 || frame % settings.every != 0 {
        return;
    }
    let telemetry = FrameTelemetry::from_sim(&sim.0);
    match protocol::encode(&Message::Telemetry(telemetry.clone())) {
        Ok(bytes) => {
            debug!(
                frame,
                bytes = bytes.len(),
                boost = telemetry.boost_level,
                free = telemetry.minimap.free_count(),
                "Telemetry published"
            );
            latest.encoded = bytes;
            latest.telemetry = Some(telemetry);
            latest.published += 1;
        }
        Err(err) => warn!(%err, frame, "Telemetry encode failed"),
    }
}
