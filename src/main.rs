//! Pegfall headless demo
//!
//! Drives the simulation without a renderer: loads the built-in boards (or a
//! JSON formation passed as the first argument), fires a spread of shots at
//! each and logs what the physics does. Run with `RUST_LOG=debug` for
//! per-shot detail.

use std::process::ExitCode;

use glam::DVec2;
use pegfall::Formation;
use pegfall::consts::ARENA_WIDTH;
use pegfall::sim::{GameEvent, GameState, TickInput, tick};

/// Hard bound per shot; a ball can in principle bounce on a peg forever
const MAX_TICKS_PER_SHOT: u32 = 100_000;

struct ShotReport {
    ticks: u32,
    pegs_hit: usize,
    predicted_points: usize,
    predicted_bounces: usize,
    landed: bool,
}

/// Aim at `target`, fire, and run the shot to completion
fn run_shot(state: &mut GameState, target: DVec2) -> ShotReport {
    tick(
        state,
        &TickInput {
            aim: Some(target),
            fire: true,
            next_level: false,
        },
    );
    let predicted_points = state.current_shot_path.len();
    let predicted_bounces = state
        .current_shot_path
        .iter()
        .filter(|p| p.is_bounce)
        .count();

    let mut report = ShotReport {
        ticks: 1,
        pegs_hit: 0,
        predicted_points,
        predicted_bounces,
        landed: false,
    };
    while state.ball.is_some() && report.ticks < MAX_TICKS_PER_SHOT {
        for event in tick(state, &TickInput::default()) {
            match event {
                GameEvent::PegHit { .. } => report.pegs_hit += 1,
                GameEvent::BallLost => report.landed = true,
                GameEvent::LevelLoaded { .. } => {}
            }
        }
        report.ticks += 1;
    }
    // A ball can stall bouncing on a peg indefinitely; abandon it so the
    // next shot starts clean
    if state.ball.is_some() {
        state.reset_shot();
    }
    report
}

fn load_board(path: &str) -> Result<Formation, Box<dyn std::error::Error>> {
    let json = std::fs::read_to_string(path)?;
    Ok(Formation::from_json(&json)?)
}

fn main() -> ExitCode {
    env_logger::init();

    let mut state = match std::env::args().nth(1) {
        Some(path) => match load_board(&path) {
            Ok(formation) => GameState::with_formations(vec![formation]),
            Err(err) => {
                log::error!("cannot load formation from {path}: {err}");
                return ExitCode::FAILURE;
            }
        },
        None => GameState::new(),
    };

    let levels = state.formations().len();
    // Aim points spread across the bottom edge
    let targets = [0.25, 0.5, 0.75].map(|t| DVec2::new(ARENA_WIDTH * t, 600.0));

    for _ in 0..levels {
        let name = state.current_formation().name.clone();
        for target in targets {
            let report = run_shot(&mut state, target);
            log::info!(
                "{name}: shot at x={:.0} -> {} peg hits in {} ticks ({}), preview {} points / {} bounces",
                target.x,
                report.pegs_hit,
                report.ticks,
                if report.landed { "landed" } else { "still bouncing" },
                report.predicted_points,
                report.predicted_bounces,
            );
        }
        tick(
            &mut state,
            &TickInput {
                next_level: true,
                ..TickInput::default()
            },
        );
    }

    ExitCode::SUCCESS
}
