//! Simulation entities and game state
//!
//! The ball owns its kinematic state exclusively; pegs are shared read-only
//! by the resolver and the predictor, with only their `hit` flag mutated by
//! the live loop.

use glam::DVec2;

use super::collision::CollisionResponse;
use super::launcher::Launcher;
use super::predict::PathPoint;
use crate::config::PhysicsConfig;
use crate::consts::*;
use crate::formations::{Formation, builtin_formations};

/// The moving ball
#[derive(Debug, Clone)]
pub struct Ball {
    pub pos: DVec2,
    pub vel: DVec2,
    radius: f64,
    mass: f64,
    config: PhysicsConfig,
}

impl Ball {
    pub fn new(pos: DVec2) -> Self {
        Self {
            pos,
            vel: DVec2::ZERO,
            radius: BALL_RADIUS,
            mass: BALL_MASS,
            config: PhysicsConfig::default(),
        }
    }

    #[inline]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    #[inline]
    pub fn mass(&self) -> f64 {
        self.mass
    }

    #[inline]
    pub fn config(&self) -> PhysicsConfig {
        self.config
    }

    pub fn set_config(&mut self, config: PhysicsConfig) {
        self.config = config;
    }

    /// Advance one discrete time step: gravity, then integration, then
    /// friction. Order matters (semi-implicit Euler).
    pub fn step(&mut self) {
        self.vel.y += self.config.gravity;
        self.pos += self.vel;
        self.vel *= self.config.friction;
    }

    /// Reset position and point the velocity along `angle` at `speed`,
    /// overwriting any prior motion.
    pub fn launch(&mut self, pos: DVec2, angle: f64, speed: f64) {
        self.pos = pos;
        self.vel = DVec2::from_angle(angle) * speed;
    }

    /// Apply a resolver-proposed correction from a peg collision. The
    /// proposed velocity is further scaled by this ball's `bounce_impulse`.
    pub fn apply_collision(&mut self, response: &CollisionResponse) {
        self.pos = response.pos;
        self.vel = response.vel * self.config.bounce_impulse;
    }
}

/// A fixed circular peg. Immovable: its mass is infinite and its position
/// never changes after creation.
#[derive(Debug, Clone)]
pub struct Peg {
    pos: DVec2,
    radius: f64,
    /// Set the first time any ball touches this peg. Presentation only; an
    /// already-hit peg still collides.
    pub hit: bool,
}

impl Peg {
    pub fn new(pos: DVec2) -> Self {
        Self {
            pos,
            radius: PEG_RADIUS,
            hit: false,
        }
    }

    #[inline]
    pub fn pos(&self) -> DVec2 {
        self.pos
    }

    #[inline]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Infinite: the impulse denominator sees a zero inverse mass, so the
    /// peg receives no velocity change.
    #[inline]
    pub fn mass(&self) -> f64 {
        f64::INFINITY
    }
}

/// Rectangular play bounds plus the pit strip along the bottom edge
#[derive(Debug, Clone)]
pub struct Arena {
    pub width: f64,
    pub height: f64,
    pub pit_depth: f64,
}

impl Default for Arena {
    fn default() -> Self {
        Self {
            width: ARENA_WIDTH,
            height: ARENA_HEIGHT,
            pit_depth: PIT_DEPTH,
        }
    }
}

impl Arena {
    /// Y coordinate of the pit threshold
    #[inline]
    pub fn pit_line(&self) -> f64 {
        self.height - self.pit_depth
    }

    /// A ball whose center passes this line is out of play
    #[inline]
    pub fn in_pit(&self, pos: DVec2) -> bool {
        pos.y > self.pit_line()
    }
}

/// Boundary events for the level controller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// A peg was struck for the first time
    PegHit { peg: usize },
    /// The ball crossed the pit line and left play
    BallLost,
    /// A formation was (re)loaded
    LevelLoaded { level: usize },
}

/// Complete toy state: board, launchers, in-flight ball, and the shot paths
/// the renderer draws.
#[derive(Debug, Clone)]
pub struct GameState {
    pub arena: Arena,
    /// The live launcher; aims while no ball is in flight
    pub launcher: Launcher,
    /// Translucent launcher used to line up the next shot mid-flight
    pub ghost: Launcher,
    pub pegs: Vec<Peg>,
    pub ball: Option<Ball>,
    /// Tunables applied to every newly launched (or predicted) ball
    pub config: PhysicsConfig,
    pub level_index: usize,
    /// Predicted path of the current (or pending) shot
    pub current_shot_path: Vec<PathPoint>,
    /// Preview path for the queued shot, aimed by the ghost launcher
    pub next_shot_path: Vec<PathPoint>,
    /// Pointer position backing the queued shot's aim
    pub(crate) next_aim: Option<DVec2>,
    /// One ball in play at a time
    pub shooting_allowed: bool,
    formations: Vec<Formation>,
}

impl GameState {
    /// State with the built-in boards, level 0 loaded
    pub fn new() -> Self {
        Self::with_formations(builtin_formations())
    }

    /// State backed by a custom board list (must be non-empty)
    pub fn with_formations(formations: Vec<Formation>) -> Self {
        debug_assert!(!formations.is_empty());
        let pivot = DVec2::new(LAUNCHER_X, LAUNCHER_Y);
        let mut state = Self {
            arena: Arena::default(),
            launcher: Launcher::new(pivot),
            ghost: Launcher::new(pivot),
            pegs: Vec::new(),
            ball: None,
            config: PhysicsConfig::default(),
            level_index: 0,
            current_shot_path: Vec::new(),
            next_shot_path: Vec::new(),
            next_aim: None,
            shooting_allowed: true,
            formations,
        };
        state.load_level(0);
        state
    }

    pub fn formations(&self) -> &[Formation] {
        &self.formations
    }

    pub fn current_formation(&self) -> &Formation {
        &self.formations[self.level_index]
    }

    /// Swap in the board at `index` (wrapping) and reset the shot
    pub fn load_level(&mut self, index: usize) {
        self.level_index = index % self.formations.len();
        self.pegs = self.formations[self.level_index].pegs();
        log::info!(
            "loaded level {}: {} ({} pegs)",
            self.level_index,
            self.formations[self.level_index].name,
            self.pegs.len()
        );
        self.reset_shot();
    }

    /// Discard the in-flight ball and reopen the shot gate. If a queued
    /// preview exists it becomes the current shot: the live launcher takes
    /// over the ghost's aim so the drawn path still matches the barrel.
    pub fn reset_shot(&mut self) {
        self.ball = None;
        self.shooting_allowed = true;
        if self.next_shot_path.is_empty() {
            self.current_shot_path.clear();
        } else {
            self.current_shot_path = std::mem::take(&mut self.next_shot_path);
            if let Some(aim) = self.next_aim {
                self.launcher.aim_at(aim);
            }
        }
        self.next_aim = None;
        self.ghost.hide();
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
