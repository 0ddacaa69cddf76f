//! Headless Test Drive
//!
//! Runs a scripted drive at a fixed 60 Hz without a window: gear shifts up
//! through the box, an engine-braking downshift, camera mode cycling, hard
//! braking and a reset. Prints telemetry once per simulated second, so the
//! whole dynamics stack can be eyeballed from a terminal.

use glam::Vec3;

use open_road_engine::game::{DriveSession, TuningConfig};
use open_road_engine::input::{DriveKeys, TickInput};

const TICK_RATE: f32 = 60.0;
const DT: f32 = 1.0 / TICK_RATE;

/// One scripted phase: a time window and the input held during it.
struct Phase {
    /// End of the phase, simulated seconds.
    until: f32,
    name: &'static str,
    input: fn(tick: u32) -> TickInput,
}

fn throttle() -> TickInput {
    TickInput {
        drive: DriveKeys { throttle: true, ..DriveKeys::default() },
        ..TickInput::default()
    }
}

fn throttle_shift_up(tick: u32) -> TickInput {
    let mut input = throttle();
    // Tap the shifter on the first tick of the phase only
    input.drive.shift_up = tick == 0;
    input
}

fn throttle_shift_down(tick: u32) -> TickInput {
    let mut input = throttle();
    input.drive.shift_down = tick == 0;
    input
}

const SCRIPT: &[Phase] = &[
    Phase { until: 0.5, name: "first gear", input: |t| {
        let mut input = TickInput::default();
        input.drive.shift_up = t == 0;
        input
    }},
    Phase { until: 3.0, name: "full throttle", input: |_| throttle() },
    Phase { until: 4.0, name: "shift to 2", input: throttle_shift_up },
    Phase { until: 5.5, name: "shift to 3", input: throttle_shift_up },
    Phase { until: 7.0, name: "shift to 4", input: throttle_shift_up },
    // Dropping back to 3 above its band triggers engine braking
    Phase { until: 9.0, name: "downshift to 3", input: throttle_shift_down },
    Phase { until: 9.5, name: "camera: fixed", input: |t| TickInput {
        switch_camera: t == 0,
        ..TickInput::default()
    }},
    Phase { until: 10.0, name: "camera: freecam", input: |t| TickInput {
        switch_camera: t == 0,
        ..TickInput::default()
    }},
    Phase { until: 10.5, name: "camera: chase", input: |t| TickInput {
        switch_camera: t == 0,
        ..TickInput::default()
    }},
    Phase { until: 12.0, name: "hard braking", input: |_| TickInput {
        drive: DriveKeys { brake: true, ..DriveKeys::default() },
        ..TickInput::default()
    }},
    Phase { until: 12.5, name: "reset", input: |t| TickInput {
        reset_vehicle: t == 0,
        ..TickInput::default()
    }},
];

fn main() {
    println!("[TestDrive] Starting headless drive ({TICK_RATE} Hz)");

    let mut session = DriveSession::from_config(&TuningConfig::default());
    session.spawn_vehicle(Vec3::ZERO, 0.0);

    let mut phase_index = 0;
    let mut phase_tick: u32 = 0;
    let mut next_report = 1.0;

    while phase_index < SCRIPT.len() {
        let phase = &SCRIPT[phase_index];
        let input = (phase.input)(phase_tick);
        let frame = session.tick(&input, DT);
        phase_tick += 1;

        if session.elapsed() >= next_report {
            let t = session.telemetry();
            println!(
                "[TestDrive] t={:>4.1}s  gear={:<2} speed={:>6.1} km/h  pos=({:>7.1},{:>6.1})  cam=({:>7.1},{:>5.1},{:>7.1})",
                session.elapsed(),
                t.gear_label,
                t.speed_kmh,
                t.position.x,
                t.position.z,
                frame.position.x,
                frame.position.y,
                frame.position.z,
            );
            next_report += 1.0;
        }

        if session.elapsed() >= phase.until {
            println!("[TestDrive] Phase done: {}", phase.name);
            phase_index += 1;
            phase_tick = 0;
        }
    }

    let t = session.telemetry();
    println!(
        "[TestDrive] Finished after {:.1}s simulated. Final: gear={} speed={:.1} km/h pos=({:.1},{:.1})",
        session.elapsed(),
        t.gear_label,
        t.speed_kmh,
        t.position.x,
        t.position.z,
    );
}
