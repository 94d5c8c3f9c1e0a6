use bevy::prelude::*;
use flight::{FlightSim, SimCheckpoint};
use tracing::warn;

pub mod args;
pub mod config;
pub mod input;
pub mod script;
pub mod systems;

pub use args::Args;
pub use config::{load_config, parse_config, Config, Variant};
pub use input::{IntentFlag, KeyBindings, KeyState};
pub use script::{InputScript, ScriptStep};
pub use systems::{
    CentralLoad, DriverSet, FrameClock, FrameLog, LatestTelemetry, ScriptPlayer, SimState,
    TelemetrySettings,
};

/// Driver app for a fresh session.
pub fn build_driver_app(cfg: Config) -> App {
    let sim = FlightSim::new(cfg.sim_config(), &cfg.system_spec());
    build_app_with_sim(cfg, sim)
}

/// Driver app continuing from a checkpoint. Held keys are rebuilt by replaying
/// the script up to the checkpoint's simulated time.
pub fn build_resumed_app(cfg: Config, checkpoint: SimCheckpoint) -> App {
    let sim = FlightSim::restore(cfg.sim_config(), &cfg.system_spec(), checkpoint);
    build_app_with_sim(cfg, sim)
}

fn build_app_with_sim(cfg: Config, sim: FlightSim) -> App {
    let script = InputScript::new(cfg.script.clone());
    for key in script.unbound_keys(&cfg.bindings) {
        warn!(%key, "Script uses a key with no binding; it will do nothing");
    }
    let system = cfg.system_spec();

    let mut app = App::new();
    app.insert_resource(SimState(sim))
        .insert_resource(FrameClock { dt: cfg.frame_dt })
        .insert_resource(ScriptPlayer(script))
        .insert_resource(CentralLoad {
            after_frames: cfg.central_load_frames,
            half_extent: system.sun.half_extent,
        })
        .insert_resource(TelemetrySettings {
            every: cfg.telemetry_every,
        })
        .insert_resource(cfg.bindings.clone())
        .init_resource::<KeyState>()
        .init_resource::<LatestTelemetry>()
        .init_resource::<FrameLog>()
        .insert_resource(cfg)
        .add_systems(
            Update,
            (
                systems::feed_script,
                systems::resolve_central_geometry,
                systems::advance_sim,
                systems::publish_telemetry,
            )
                .chain()
                .in_set(DriverSet),
        );
    app
}

/// Step the app `frames` times.
pub fn run_frames(app: &mut App, frames: u64) {
    for _ in 0..frames {
        app.update();
    }
}
