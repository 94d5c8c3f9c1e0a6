use flight::{builtins::classic_system, presets, sim::desired_position, FlightSim, Intent, Vec3f};

fn settle(dt: f32, seconds: f32) -> (Vec3f, Vec3f) {
    let cfg = presets::arcade();
    let mut sim = FlightSim::new(cfg.clone(), &classic_system());
    let desired = desired_position(&cfg.camera, &sim.ship);
    sim.camera.position = desired + Vec3f::new(20.0, -3.0, 12.0);
    let frames = (seconds / dt).round() as usize;
    for _ in 0..frames {
        sim.advance(dt, Intent::IDLE);
    }
    (sim.camera.position, desired)
}

#[test]
fn camera_settles_the_same_at_any_frame_rate() {
    let (slow, desired) = settle(1.0 / 30.0, 2.0);
    let (fast, _) = settle(1.0 / 120.0, 2.0);
    let offset_len = presets::arcade().camera.offset.length();

    assert!((slow - desired).length() <= 0.01 * offset_len, "30 Hz camera still {} away", (slow - desired).length());
    assert!((fast - desired).length() <= 0.01 * offset_len, "120 Hz camera still {} away", (fast - desired).length());
    assert!((slow - fast).length() < 1e-3, "runs diverged: {slow:?} vs {fast:?}");
}

#[test]
fn remaining_error_after_one_second_matches_smoothing_base() {
    let start_err = Vec3f::new(20.0, -3.0, 12.0).length();
    for dt in [1.0 / 24.0, 1.0 / 60.0, 1.0 / 144.0] {
        let (pos, desired) = settle(dt, 1.0);
        let ratio = (pos - desired).length() / start_err;
        assert!((ratio - 0.01).abs() < 1e-3, "dt={dt}: ratio {ratio}");
    }
}
