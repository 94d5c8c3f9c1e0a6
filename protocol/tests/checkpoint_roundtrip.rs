use flight::{builtins::classic_system, presets, FlightSim, Intent};
use protocol::{decode, decode_checkpoint, encode, encode_checkpoint, FrameTelemetry, Message};

const DT: f32 = 1.0 / 60.0;

/// Deterministic input pattern that exercises thrust, turns, climb and boost.
fn intent_at(frame: u32) -> Intent {
    Intent {
        forward: frame % 7 != 0,
        back: frame % 29 == 0,
        left: (frame / 40) % 2 == 0,
        right: (frame / 55) % 3 == 0,
        boost: (frame / 90) % 2 == 1,
        up: (frame / 25) % 4 == 1,
        down: (frame / 25) % 4 == 3,
    }
}

#[test]
fn restored_session_continues_bit_identically() {
    let system = classic_system();
    let mut original = FlightSim::new(presets::flight_3d(), &system);
    original.central.resolve_geometry(system.sun.half_extent);

    for f in 0..600 {
        original.advance(DT, intent_at(f));
    }

    let bytes = encode_checkpoint(&original.checkpoint()).unwrap();
    let restored_cp = decode_checkpoint(&bytes).unwrap();
    assert_eq!(restored_cp, original.checkpoint());

    let mut resumed = FlightSim::restore(presets::flight_3d(), &system, restored_cp);
    for f in 600..1200 {
        original.advance(DT, intent_at(f));
        resumed.advance(DT, intent_at(f));
    }

    assert_eq!(resumed.checkpoint(), original.checkpoint());
    assert_eq!(resumed.frame(), 1200);
}

#[test]
fn telemetry_survives_the_wire() {
    let system = classic_system();
    let mut sim = FlightSim::new(presets::arcade(), &system);
    for f in 0..120 {
        sim.advance(DT, intent_at(f));
    }

    let telemetry = FrameTelemetry::from_sim(&sim);
    assert_eq!(telemetry.frame, 120);
    assert_eq!(telemetry.minimap.bodies.len(), system.bodies.len());

    let bytes = encode(&Message::Telemetry(telemetry.clone())).unwrap();
    match decode(&bytes).unwrap() {
        Message::Telemetry(t) => assert_eq!(t, telemetry),
        other => panic!("expected telemetry, got {}", other.kind()),
    }
}
