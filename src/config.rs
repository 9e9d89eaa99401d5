//! Runtime physics tunables
//!
//! The UI layer owns sliders for these three values and pushes a fresh
//! `PhysicsConfig` into the simulation on every change. The core never reads
//! a widget; it only ever sees this value object.

use serde::{Deserialize, Serialize};

/// The three user-tunable physics scalars, one copy per body.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PhysicsConfig {
    /// Downward acceleration added to vertical velocity each step, range [0, 1]
    pub gravity: f64,
    /// Multiplicative velocity damping applied after integration, range [0, 1]
    pub friction: f64,
    /// Scale applied to resolver-proposed post-collision velocity, range [0, 2]
    pub bounce_impulse: f64,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            gravity: 0.2,
            friction: 0.99,
            bounce_impulse: 0.8,
        }
    }
}

impl PhysicsConfig {
    pub const GRAVITY_RANGE: (f64, f64) = (0.0, 1.0);
    pub const FRICTION_RANGE: (f64, f64) = (0.0, 1.0);
    pub const BOUNCE_IMPULSE_RANGE: (f64, f64) = (0.0, 2.0);

    /// Copy of this config with every value clamped to its documented range
    pub fn clamped(self) -> Self {
        Self {
            gravity: self.gravity.clamp(Self::GRAVITY_RANGE.0, Self::GRAVITY_RANGE.1),
            friction: self.friction.clamp(Self::FRICTION_RANGE.0, Self::FRICTION_RANGE.1),
            bounce_impulse: self
                .bounce_impulse
                .clamp(Self::BOUNCE_IMPULSE_RANGE.0, Self::BOUNCE_IMPULSE_RANGE.1),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_slider_defaults() {
        let config = PhysicsConfig::default();
        assert_eq!(config.gravity, 0.2);
        assert_eq!(config.friction, 0.99);
        assert_eq!(config.bounce_impulse, 0.8);
    }

    #[test]
    fn test_clamped_enforces_ranges() {
        let config = PhysicsConfig {
            gravity: -0.5,
            friction: 1.7,
            bounce_impulse: 9.0,
        }
        .clamped();
        assert_eq!(config.gravity, 0.0);
        assert_eq!(config.friction, 1.0);
        assert_eq!(config.bounce_impulse, 2.0);
    }

    #[test]
    fn test_clamped_leaves_in_range_values_alone() {
        let config = PhysicsConfig::default();
        assert_eq!(config.clamped(), config);
    }
}
