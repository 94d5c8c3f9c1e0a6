use std::path::Path;

use anyhow::{Context, Result};
use bevy::prelude::Resource;
use flight::{builtins, presets, SimConfig, SystemSpec};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::input::KeyBindings;
use crate::script::ScriptStep;

/// Which flight model the session runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Variant {
    /// Planar flight with the hull pinned to a fixed altitude.
    #[serde(rename = "arcade")]
    Arcade,
    #[default]
    #[serde(rename = "flight_3d")]
    Flight3d,
}

#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub variant: Variant,
    /// Overrides the system's seed for body spin rates.
    pub seed: Option<u64>,
    pub frame_dt: f32,
    pub frames: u64,
    /// Overrides the preset's long-stall clamp.
    pub max_dt: Option<f32>,
    /// Publish telemetry every N frames; 0 turns it off.
    pub telemetry_every: u64,
    /// Frames until the sun's geometry counts as loaded.
    pub central_load_frames: u64,
    pub bindings: KeyBindings,
    pub script: Vec<ScriptStep>,
    /// Replaces the built-in eight-planet system when present.
    pub system: Option<SystemSpec>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            variant: Variant::default(),
            seed: None,
            frame_dt: 1.0 / 60.0,
            frames: 3600,
            max_dt: None,
            telemetry_every: 60,
            central_load_frames: 30,
            bindings: KeyBindings::default(),
            script: Vec::new(),
            system: None,
        }
    }
}

impl Config {
    pub fn sim_config(&self) -> SimConfig {
        let mut sim = match self.variant {
            Variant::Arcade => presets::arcade(),
            Variant::Flight3d => presets::flight_3d(),
        };
        if let Some(max_dt) = self.max_dt {
            sim.max_dt = max_dt;
        }
        sim
    }

    pub fn system_spec(&self) -> SystemSpec {
        let mut system = self.system.clone().unwrap_or_else(builtins::classic_system);
        if let Some(seed) = self.seed {
            system.seed = seed;
        }
        system
    }
}

/// Reads the driver config. A missing file is not an error: defaults are used.
pub fn load_config(path: &Path) -> Result<Config> {
    if !path.exists() {
        warn!(path = %path.display(), "Config file not found, using defaults");
        return Ok(Config::default());
    }
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    parse_config(&text).with_context(|| format!("parsing config {}", path.display()))
}

pub fn parse_config(text: &str) -> Result<Config> {
    Ok(toml::from_str(text)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use flight::AltitudeMode;

    #[test]
    fn empty_file_gives_defaults() {
        assert_eq!(parse_config("").unwrap(), Config::default());
    }

    #[test]
    fn arcade_variant_pins_altitude() {
        let cfg = parse_config("variant = \"arcade\"\nmax_dt = 0.1\n").unwrap();
        let sim = cfg.sim_config();
        assert!(matches!(sim.flight.altitude, AltitudeMode::Pinned { .. }));
        assert_eq!(sim.max_dt, 0.1);
    }

    #[test]
    fn script_and_bindings_parse() {
        let text = r#"
seed = 7

[bindings]
boost = ["Space"]

[[script]]
at_s = 0.0
down = ["KeyW", "Space"]

[[script]]
at_s = 2.5
up = ["Space"]
"#;
        let cfg = parse_config(text).unwrap();
        assert_eq!(cfg.bindings.boost, vec!["Space".to_string()]);
        // Unlisted bindings keep their defaults
        assert_eq!(cfg.bindings.forward, vec!["KeyW".to_string()]);
        assert_eq!(cfg.script.len(), 2);
        assert_eq!(cfg.script[1].up, vec!["Space".to_string()]);
        assert_eq!(cfg.system_spec().seed, 7);
    }

    #[test]
    fn unknown_variant_is_rejected() {
        assert!(parse_config("variant = \"hover\"").is_err());
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let cfg = load_config(Path::new("/definitely/not/here/driver.toml")).unwrap();
        assert_eq!(cfg, Config::default());
    }
}
