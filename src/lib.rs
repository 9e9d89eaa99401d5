//! Pegfall - a Pachinko-style peg physics toy
//!
//! Core modules:
//! - `sim`: Deterministic simulation (ball kinematics, collisions, trajectory prediction)
//! - `config`: Runtime physics tunables pushed in by the UI layer
//! - `formations`: Named peg boards, built-in or loaded from JSON
//!
//! Rendering, input wiring and frame scheduling live outside this crate; the
//! simulation exposes plain state (positions, radii, hit flags, predicted
//! paths) and an event stream for those collaborators to consume.

pub mod config;
pub mod formations;
pub mod sim;

pub use config::PhysicsConfig;
pub use formations::Formation;

use glam::DVec2;

/// Game configuration constants
pub mod consts {
    /// Arena dimensions
    pub const ARENA_WIDTH: f64 = 800.0;
    pub const ARENA_HEIGHT: f64 = 600.0;
    /// Depth of the pit strip along the bottom edge; a ball below
    /// `ARENA_HEIGHT - PIT_DEPTH` is out of play
    pub const PIT_DEPTH: f64 = 20.0;

    /// Ball defaults
    pub const BALL_RADIUS: f64 = 10.0;
    pub const BALL_MASS: f64 = 1.0;

    /// Peg radius (pegs are immovable; they have no finite mass)
    pub const PEG_RADIUS: f64 = 5.0;

    /// Launcher geometry and fixed launch speed (units/step)
    pub const LAUNCHER_X: f64 = ARENA_WIDTH / 2.0;
    pub const LAUNCHER_Y: f64 = 30.0;
    pub const LAUNCHER_LENGTH: f64 = 50.0;
    pub const LAUNCH_SPEED: f64 = 10.0;
}

/// Angle from `from` toward `to` (radians, `atan2` convention)
#[inline]
pub fn aim_angle(from: DVec2, to: DVec2) -> f64 {
    (to.y - from.y).atan2(to.x - from.x)
}
