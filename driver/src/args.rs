use std::path::PathBuf;

use bevy::prelude::Resource;
use clap::Parser;

#[derive(Parser, Debug, Resource, Clone)]
#[command(name = "orrery-driver")]
#[command(about = "Headless frame driver for the orbiting-system flight sim", long_about = None)]
pub struct Args {
    /// Path to the TOML config
    #[arg(long, default_value = "driver.toml")]
    pub config: PathBuf,
    /// Override the configured number of frames to run
    #[arg(long)]
    pub frames: Option<u64>,
    /// Override the configured frame delta (seconds)
    #[arg(long)]
    pub dt: Option<f32>,
    /// Write a checkpoint here when the run ends
    #[arg(long)]
    pub checkpoint_out: Option<PathBuf>,
    /// Continue from a checkpoint written by an earlier run
    #[arg(long)]
    pub resume: Option<PathBuf>,
}
