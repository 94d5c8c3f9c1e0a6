use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use driver::{build_driver_app, build_resumed_app, load_config, run_frames, Args, FrameLog, SimState};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let mut cfg = load_config(&args.config)?;
    if let Some(frames) = args.frames {
        cfg.frames = frames;
    }
    if let Some(dt) = args.dt {
        cfg.frame_dt = dt;
    }
    info!(?cfg, "Driver config loaded");

    let frames = cfg.frames;
    let mut app = match &args.resume {
        Some(path) => {
            let bytes = std::fs::read(path)
                .with_context(|| format!("reading checkpoint {}", path.display()))?;
            let checkpoint = protocol::decode_checkpoint(&bytes)
                .with_context(|| format!("decoding checkpoint {}", path.display()))?;
            info!(frame = checkpoint.frame, path = %path.display(), "Resuming from checkpoint");
            build_resumed_app(cfg, checkpoint)
        }
        None => build_driver_app(cfg),
    };
    app.insert_resource(args.clone());

    run_frames(&mut app, frames);

    let world = app.world();
    let sim = &world.resource::<SimState>().0;
    let log = world.resource::<FrameLog>();
    info!(
        frame = sim.frame(),
        elapsed = sim.elapsed(),
        free_bodies = sim.snapshot().free_count(),
        releases = log.releases,
        juggles = log.juggles,
        sun_contacts = log.sun_contacts,
        "Run finished"
    );

    if let Some(path) = &args.checkpoint_out {
        let bytes = protocol::encode_checkpoint(&sim.checkpoint())?;
        std::fs::write(path, &bytes)
            .with_context(|| format!("writing checkpoint {}", path.display()))?;
        info!(frame = sim.frame(), bytes = bytes.len(), path = %path.display(), "Checkpoint written");
    }
    Ok(())
}
