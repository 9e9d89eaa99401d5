//! Trajectory prediction
//!
//! Forward-simulates an ephemeral ball through the exact step+resolve
//! routine the live loop uses, recording a polyline of future positions with
//! bounce points tagged. Pure: never touches live game state or peg flags.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use super::launcher::Launcher;
use super::state::{Arena, Ball, Peg};
use super::tick::advance_ball;
use crate::config::PhysicsConfig;

/// Safety bound on collision events per prediction
pub const MAX_PREDICTION_BOUNCES: u32 = 100;
/// Per-axis speed below which the ball counts as at rest
pub const REST_SPEED: f64 = 0.1;

/// One sample of a predicted path
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PathPoint {
    pub pos: DVec2,
    /// A collision was resolved on the step that produced this point
    pub is_bounce: bool,
}

/// Predict the path of a shot fired at `angle` before launching it.
///
/// The ephemeral ball spawns at the launcher's muzzle for that angle with
/// the current tunables, exactly as [`tick`](super::tick::tick) will launch
/// the real one. The loop ends when the ball reaches the pit, exceeds
/// [`MAX_PREDICTION_BOUNCES`], or comes to rest (both velocity components
/// below [`REST_SPEED`] in magnitude); the capped case silently truncates
/// the path.
pub fn predict_trajectory(
    launcher: &Launcher,
    angle: f64,
    speed: f64,
    config: PhysicsConfig,
    pegs: &[Peg],
    arena: &Arena,
) -> Vec<PathPoint> {
    let muzzle = launcher.muzzle_at(angle);
    let mut ball = Ball::new(muzzle);
    ball.set_config(config);
    ball.launch(muzzle, angle, speed);

    let mut path = vec![PathPoint {
        pos: ball.pos,
        is_bounce: false,
    }];
    let mut bounces = 0u32;

    while bounces <= MAX_PREDICTION_BOUNCES && !arena.in_pit(ball.pos) {
        let outcome = advance_ball(&mut ball, pegs, arena);
        if outcome.bounced {
            bounces += 1;
        }
        path.push(PathPoint {
            pos: ball.pos,
            is_bounce: outcome.bounced,
        });
        if ball.vel.x.abs() < REST_SPEED && ball.vel.y.abs() < REST_SPEED {
            break;
        }
    }

    path
}

/// Split a path into polyline strokes at its bounce points, each bounce
/// point shared as the end of one stroke and the start of the next. This is
/// how renderers are expected to draw the preview.
pub fn strokes(path: &[PathPoint]) -> Vec<Vec<DVec2>> {
    let mut strokes = Vec::new();
    let mut current: Vec<DVec2> = Vec::new();
    for point in path {
        current.push(point.pos);
        if point.is_bounce && current.len() > 1 {
            strokes.push(std::mem::take(&mut current));
            current.push(point.pos);
        }
    }
    if current.len() > 1 {
        strokes.push(current);
    }
    strokes
}
