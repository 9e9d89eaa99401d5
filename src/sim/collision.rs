//! Collision detection and response
//!
//! Pure functions: each check returns either `None` or the corrected
//! position/velocity pair. Nothing here mutates a ball or a peg; the caller
//! applies the result (and is the one who marks pegs as hit).

use glam::DVec2;

use super::state::{Arena, Ball, Peg};

/// Elasticity of ball-peg impacts
pub const RESTITUTION: f64 = 0.8;
/// Post-collision speed floor; keeps the ball from stalling inside a peg
pub const MIN_BOUNCE_SPEED: f64 = 2.0;
/// Per-axis energy loss on wall reflection
pub const WALL_DAMPING: f64 = 0.8;

/// A resolver-proposed corrected state; never applied in place
#[derive(Debug, Clone, PartialEq)]
pub struct CollisionResponse {
    pub pos: DVec2,
    pub vel: DVec2,
}

/// Whether the bottom edge reflects or drops the ball into the pit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FloorMode {
    /// Bottom edge is open; crossing it means "out of play", not "bounce".
    /// Both the live loop and the predictor use this.
    Pit,
    /// Bottom edge reflects like the other three walls
    Solid,
}

/// Circle-circle impulse collision between the ball and an immovable peg.
///
/// Returns the corrected state, or `None` when the circles do not overlap or
/// are already separating (the guard against re-resolving a contact that a
/// previous step corrected).
pub fn ball_peg_collision(ball: &Ball, peg: &Peg) -> Option<CollisionResponse> {
    let delta = ball.pos - peg.pos();
    let distance = delta.length();
    let radius_sum = ball.radius() + peg.radius();

    if distance >= radius_sum {
        return None;
    }

    // Degenerate exact overlap of centers: the normal is undefined, so push
    // straight up, back toward the launcher.
    let normal = if distance > 0.0 {
        delta / distance
    } else {
        DVec2::NEG_Y
    };

    let velocity_along_normal = ball.vel.dot(normal);
    if velocity_along_normal > 0.0 {
        return None;
    }

    // Impulse for an elastic collision against infinite mass: the peg's
    // inverse mass is zero, so it absorbs nothing.
    let impulse = -(1.0 + RESTITUTION) * velocity_along_normal
        / (ball.mass().recip() + peg.mass().recip());
    let vel = ball.vel + impulse * normal / ball.mass();

    // Enforce the minimum bounce speed, preserving direction. A dead stop
    // only happens via the degenerate-overlap path; kick it out along the
    // normal.
    let speed = vel.length();
    let vel = if speed >= MIN_BOUNCE_SPEED {
        vel
    } else if speed > 0.0 {
        vel * (MIN_BOUNCE_SPEED / speed)
    } else {
        normal * MIN_BOUNCE_SPEED
    };

    // Push the ball out of penetration so the pair ends exactly touching
    let overlap = radius_sum - distance;
    Some(CollisionResponse {
        pos: ball.pos + normal * overlap,
        vel,
    })
}

/// Axis-aligned reflection against the arena edges.
///
/// Each violated edge clamps position to the boundary (offset by the ball
/// radius), flips that axis' velocity sign and damps it by [`WALL_DAMPING`].
/// A corner hit resolves both axes cumulatively. The bottom edge only
/// participates under [`FloorMode::Solid`].
pub fn ball_wall_collision(ball: &Ball, arena: &Arena, floor: FloorMode) -> Option<CollisionResponse> {
    let r = ball.radius();
    let mut pos = ball.pos;
    let mut vel = ball.vel;
    let mut collided = false;

    if pos.x - r < 0.0 {
        pos.x = r;
        vel.x = vel.x.abs() * WALL_DAMPING;
        collided = true;
    } else if pos.x + r > arena.width {
        pos.x = arena.width - r;
        vel.x = -vel.x.abs() * WALL_DAMPING;
        collided = true;
    }

    if pos.y - r < 0.0 {
        pos.y = r;
        vel.y = vel.y.abs() * WALL_DAMPING;
        collided = true;
    } else if floor == FloorMode::Solid && pos.y + r > arena.height {
        pos.y = arena.height - r;
        vel.y = -vel.y.abs() * WALL_DAMPING;
        collided = true;
    }

    collided.then_some(CollisionResponse { pos, vel })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn ball_at(pos: DVec2, vel: DVec2) -> Ball {
        let mut ball = Ball::new(pos);
        ball.vel = vel;
        ball
    }

    #[test]
    fn test_no_overlap_is_no_collision() {
        // Radius sum is 15; a 16-unit gap misses even while approaching
        let ball = ball_at(DVec2::new(0.0, -16.0), DVec2::new(0.0, 5.0));
        let peg = Peg::new(DVec2::ZERO);
        assert!(ball_peg_collision(&ball, &peg).is_none());
    }

    #[test]
    fn test_separating_velocities_not_resolved() {
        // Overlapping but moving apart: leave it alone
        let ball = ball_at(DVec2::new(0.0, -14.0), DVec2::new(0.0, -5.0));
        let peg = Peg::new(DVec2::ZERO);
        assert!(ball_peg_collision(&ball, &peg).is_none());
    }

    #[test]
    fn test_head_on_impulse() {
        // Falling at 5 onto a peg 14 units below-center: normal is (0, -1),
        // impulse 1.8 * 5 = 9, so the ball leaves upward at 4 = 0.8 * 5.
        let ball = ball_at(DVec2::new(0.0, -14.0), DVec2::new(0.0, 5.0));
        let peg = Peg::new(DVec2::ZERO);
        let response = ball_peg_collision(&ball, &peg).unwrap();
        assert!((response.vel.y - (-4.0)).abs() < 1e-9);
        assert!(response.vel.x.abs() < 1e-9);
        assert!((response.pos.y - (-15.0)).abs() < 1e-9);
    }

    #[test]
    fn test_separation_is_exact() {
        let ball = ball_at(DVec2::new(3.0, -12.0), DVec2::new(-1.0, 6.0));
        let peg = Peg::new(DVec2::ZERO);
        let response = ball_peg_collision(&ball, &peg).unwrap();
        let distance = (response.pos - peg.pos()).length();
        assert!((distance - (ball.radius() + peg.radius())).abs() < 1e-9);
    }

    #[test]
    fn test_minimum_bounce_speed_is_exactly_met() {
        // Falling at 0.5: post-impulse speed is 0.4, below the floor, so the
        // velocity is rescaled to exactly 2.0 without changing direction.
        let ball = ball_at(DVec2::new(0.0, -14.0), DVec2::new(0.0, 0.5));
        let peg = Peg::new(DVec2::ZERO);
        let response = ball_peg_collision(&ball, &peg).unwrap();
        assert!((response.vel.length() - MIN_BOUNCE_SPEED).abs() < 1e-9);
        assert!(response.vel.y < 0.0);
    }

    #[test]
    fn test_degenerate_overlap_is_finite() {
        // Centers exactly coincide: undefined normal falls back to straight
        // up and the floor kick applies.
        let ball = ball_at(DVec2::new(400.0, 300.0), DVec2::ZERO);
        let peg = Peg::new(DVec2::new(400.0, 300.0));
        let response = ball_peg_collision(&ball, &peg).unwrap();
        assert!(response.pos.is_finite());
        assert!(response.vel.is_finite());
        assert_eq!(response.vel, DVec2::new(0.0, -MIN_BOUNCE_SPEED));
        let distance = (response.pos - peg.pos()).length();
        assert!((distance - (ball.radius() + peg.radius())).abs() < 1e-9);
    }

    #[test]
    fn test_wall_clamp_left() {
        // Ball at (-5, 100) with radius 10 against an 800-wide arena comes
        // back clamped to x = 10 and moving right
        let ball = ball_at(DVec2::new(-5.0, 100.0), DVec2::new(-3.0, 1.0));
        let response = ball_wall_collision(&ball, &Arena::default(), FloorMode::Pit).unwrap();
        assert_eq!(response.pos.x, 10.0);
        assert!(response.vel.x >= 0.0);
        assert!((response.vel.x - 3.0 * WALL_DAMPING).abs() < 1e-9);
        // Untouched axis keeps its velocity
        assert_eq!(response.vel.y, 1.0);
    }

    #[test]
    fn test_wall_right_and_top_corner() {
        let arena = Arena::default();
        let ball = ball_at(DVec2::new(795.0, 5.0), DVec2::new(4.0, -2.0));
        let response = ball_wall_collision(&ball, &arena, FloorMode::Pit).unwrap();
        assert_eq!(response.pos, DVec2::new(790.0, 10.0));
        assert!((response.vel.x - (-3.2)).abs() < 1e-9);
        assert!((response.vel.y - 1.6).abs() < 1e-9);
    }

    #[test]
    fn test_bottom_edge_depends_on_floor_mode() {
        let arena = Arena::default();
        let ball = ball_at(DVec2::new(400.0, 595.0), DVec2::new(0.0, 3.0));
        assert!(ball_wall_collision(&ball, &arena, FloorMode::Pit).is_none());
        let response = ball_wall_collision(&ball, &arena, FloorMode::Solid).unwrap();
        assert_eq!(response.pos.y, 590.0);
        assert!((response.vel.y - (-2.4)).abs() < 1e-9);
    }

    #[test]
    fn test_in_bounds_is_no_collision() {
        let ball = ball_at(DVec2::new(400.0, 300.0), DVec2::new(2.0, 2.0));
        assert!(ball_wall_collision(&ball, &Arena::default(), FloorMode::Solid).is_none());
    }

    proptest! {
        /// Energy along the normal never increases beyond the restitution
        /// bound, except where the speed floor forces an exact rescale.
        #[test]
        fn prop_normal_energy_bounded(
            offset_angle in 0.0..std::f64::consts::TAU,
            gap in 0.1f64..14.9,
            vx in -20.0f64..20.0,
            vy in -20.0f64..20.0,
        ) {
            let peg = Peg::new(DVec2::new(400.0, 300.0));
            let ball = ball_at(
                peg.pos() + DVec2::from_angle(offset_angle) * gap,
                DVec2::new(vx, vy),
            );
            if let Some(response) = ball_peg_collision(&ball, &peg) {
                let normal = (ball.pos - peg.pos()).normalize_or_zero();
                let incoming = ball.vel.dot(normal);
                let outgoing = response.vel.dot(normal);
                // Always leaving the surface (up to rounding noise)
                prop_assert!(outgoing >= -1e-9);
                if response.vel.length() > MIN_BOUNCE_SPEED + 1e-9 {
                    prop_assert!(outgoing <= RESTITUTION * incoming.abs() + 1e-9);
                } else {
                    prop_assert!((response.vel.length() - MIN_BOUNCE_SPEED).abs() < 1e-9);
                }
                // Separation guarantee holds for every resolved contact
                let distance = (response.pos - peg.pos()).length();
                prop_assert!((distance - (ball.radius() + peg.radius())).abs() < 1e-9);
            }
        }
    }
}
