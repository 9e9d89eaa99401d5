//! Per-frame simulation tick
//!
//! `advance_ball` is the single step+resolve routine in the crate: the live
//! loop and the trajectory predictor both go through it, so the drawn
//! preview can never drift from what the ball actually does.

use glam::DVec2;

use super::collision::{FloorMode, ball_peg_collision, ball_wall_collision};
use super::predict::predict_trajectory;
use super::state::{Arena, Ball, GameEvent, GameState, Peg};
use crate::consts::LAUNCH_SPEED;

/// Input for a single tick, produced by the (external) event wiring
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Pointer position in arena coordinates; steers the live launcher, or
    /// the ghost launcher while a ball is in flight
    pub aim: Option<DVec2>,
    /// Fire the launcher (click/tap)
    pub fire: bool,
    /// Cycle to the next formation
    pub next_level: bool,
}

/// What a single `advance_ball` call ran into
#[derive(Debug, Clone, Default)]
pub struct StepOutcome {
    /// Any wall or peg correction was applied this step
    pub bounced: bool,
    /// Indices of pegs that were resolved against, in board order
    pub pegs_hit: Vec<usize>,
}

/// Advance the ball one step and resolve collisions: walls first, then every
/// peg in index order. Wall corrections are applied verbatim; peg corrections
/// go through [`Ball::apply_collision`] and so pick up the ball's
/// `bounce_impulse`. The bottom edge is always the pit here.
pub fn advance_ball(ball: &mut Ball, pegs: &[Peg], arena: &Arena) -> StepOutcome {
    ball.step();

    let mut outcome = StepOutcome::default();
    if let Some(response) = ball_wall_collision(ball, arena, FloorMode::Pit) {
        ball.pos = response.pos;
        ball.vel = response.vel;
        outcome.bounced = true;
    }
    for (index, peg) in pegs.iter().enumerate() {
        if let Some(response) = ball_peg_collision(ball, peg) {
            ball.apply_collision(&response);
            outcome.pegs_hit.push(index);
            outcome.bounced = true;
        }
    }
    outcome
}

/// Advance the toy by one frame
pub fn tick(state: &mut GameState, input: &TickInput) -> Vec<GameEvent> {
    let mut events = Vec::new();

    if input.next_level {
        let next = state.level_index + 1;
        state.load_level(next);
        events.push(GameEvent::LevelLoaded {
            level: state.level_index,
        });
    }

    if let Some(target) = input.aim {
        if state.ball.is_none() {
            state.launcher.aim_at(target);
            state.ghost.hide();
        } else {
            // Ball in play: the pointer lines up the *next* shot
            state.ghost.show();
            state.ghost.aim_at(target);
            state.next_aim = Some(target);
        }
    }

    if input.fire && state.shooting_allowed {
        let angle = state.launcher.angle();
        state.current_shot_path = predict_trajectory(
            &state.launcher,
            angle,
            LAUNCH_SPEED,
            state.config,
            &state.pegs,
            &state.arena,
        );
        let muzzle = state.launcher.muzzle();
        let mut ball = Ball::new(muzzle);
        ball.set_config(state.config);
        ball.launch(muzzle, angle, LAUNCH_SPEED);
        log::debug!("shot fired at {angle:.3} rad from {muzzle}");
        state.ball = Some(ball);
        state.shooting_allowed = false;
    }

    let mut ball_lost = false;
    if let Some(ball) = state.ball.as_mut() {
        let outcome = advance_ball(ball, &state.pegs, &state.arena);
        for index in outcome.pegs_hit {
            let peg = &mut state.pegs[index];
            if !peg.hit {
                peg.hit = true;
                events.push(GameEvent::PegHit { peg: index });
            }
        }
        ball_lost = state.arena.in_pit(ball.pos);
    }
    if ball_lost {
        log::debug!("ball entered the pit");
        events.push(GameEvent::BallLost);
        state.reset_shot();
    }

    // Keep the previews fresh: the pending shot tracks the live launcher;
    // once a ball is away the queued shot tracks the ghost.
    if state.ball.is_none() {
        let angle = state.launcher.angle();
        state.current_shot_path = predict_trajectory(
            &state.launcher,
            angle,
            LAUNCH_SPEED,
            state.config,
            &state.pegs,
            &state.arena,
        );
    } else if state.ghost.visible {
        let angle = state.ghost.angle();
        state.next_shot_path = predict_trajectory(
            &state.ghost,
            angle,
            LAUNCH_SPEED,
            state.config,
            &state.pegs,
            &state.arena,
        );
    }

    events
}
