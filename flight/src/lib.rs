//! Arcade flight core shared by the frame driver and any renderer.
//!
//! This crate intentionally avoids engine and I/O types. It owns the ship's
//! flight model, the orbiting bodies it can knock loose, the boost tank and
//! the chase camera, and exposes plain serializable state for consumers.

pub mod math;
pub use math::{Quatf, Vec3f};
mod system;
pub use system::{orbit_position, OrbitSpec, SunSpec, SystemSpec};

pub mod builtins;

pub mod sim;
pub use sim::{
    BoostOutput, BoostResource, CameraPose, FlightSim, FrameDebug, Intent, MinimapSnapshot,
    OrbitBody, OrbitState, ShipCosmetics, ShipState, SimCheckpoint,
};

mod sim_config;
pub use sim_config::{
    AltitudeMode, BoostConfig, CameraConfig, CollisionConfig, FlightConfig, OrbitConfig, SimConfig,
};
pub use sim_config::presets;
