//! Deterministic simulation module
//!
//! All physics lives here. This module must stay pure and deterministic:
//! - Discrete fixed steps only
//! - No rendering or platform dependencies
//! - One step+resolve routine shared by the live loop and the predictor,
//!   so the trajectory preview is a faithful forecast

pub mod collision;
pub mod launcher;
pub mod predict;
pub mod state;
pub mod tick;

pub use collision::{
    CollisionResponse, FloorMode, MIN_BOUNCE_SPEED, RESTITUTION, WALL_DAMPING,
    ball_peg_collision, ball_wall_collision,
};
pub use launcher::Launcher;
pub use predict::{MAX_PREDICTION_BOUNCES, PathPoint, REST_SPEED, predict_trajectory, strokes};
pub use state::{Arena, Ball, GameEvent, GameState, Peg};
pub use tick::{StepOutcome, TickInput, advance_ball, tick};
