//! The pivoting launcher
//!
//! A fixed pivot with a barrel of fixed length; aiming follows the pointer
//! via `atan2`. The same type doubles as the translucent "ghost" launcher
//! used to line up the next shot while a ball is still in flight — only the
//! visibility flag differs.

use glam::DVec2;

use crate::aim_angle;
use crate::consts::LAUNCHER_LENGTH;

#[derive(Debug, Clone)]
pub struct Launcher {
    pivot: DVec2,
    angle: f64,
    length: f64,
    /// Renderer hint; the ghost launcher is hidden while no ball is in play
    pub visible: bool,
}

impl Launcher {
    pub fn new(pivot: DVec2) -> Self {
        Self {
            pivot,
            angle: 0.0,
            length: LAUNCHER_LENGTH,
            visible: true,
        }
    }

    #[inline]
    pub fn pivot(&self) -> DVec2 {
        self.pivot
    }

    #[inline]
    pub fn angle(&self) -> f64 {
        self.angle
    }

    #[inline]
    pub fn length(&self) -> f64 {
        self.length
    }

    /// Point the barrel at a target (pointer position in arena coordinates)
    pub fn aim_at(&mut self, target: DVec2) {
        self.angle = aim_angle(self.pivot, target);
    }

    /// Barrel tip for the current angle; balls spawn here
    pub fn muzzle(&self) -> DVec2 {
        self.muzzle_at(self.angle)
    }

    /// Barrel tip for an arbitrary angle (used to predict shots that have
    /// not been aimed yet)
    pub fn muzzle_at(&self, angle: f64) -> DVec2 {
        self.pivot + DVec2::from_angle(angle) * self.length
    }

    pub fn show(&mut self) {
        self.visible = true;
    }

    pub fn hide(&mut self) {
        self.visible = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{FRAC_PI_2, PI};

    #[test]
    fn test_aim_at_uses_atan2() {
        let mut launcher = Launcher::new(DVec2::new(400.0, 30.0));
        launcher.aim_at(DVec2::new(400.0, 600.0));
        assert!((launcher.angle() - FRAC_PI_2).abs() < 1e-9);
        launcher.aim_at(DVec2::new(0.0, 30.0));
        assert!((launcher.angle().abs() - PI).abs() < 1e-9);
    }

    #[test]
    fn test_muzzle_sits_at_barrel_length() {
        let mut launcher = Launcher::new(DVec2::new(400.0, 30.0));
        launcher.aim_at(DVec2::new(400.0, 600.0));
        let muzzle = launcher.muzzle();
        assert!((muzzle - DVec2::new(400.0, 80.0)).length() < 1e-9);
        assert!(((muzzle - launcher.pivot()).length() - launcher.length()).abs() < 1e-9);
    }

    #[test]
    fn test_muzzle_at_ignores_current_aim() {
        let launcher = Launcher::new(DVec2::new(400.0, 30.0));
        let muzzle = launcher.muzzle_at(0.0);
        assert!((muzzle - DVec2::new(450.0, 30.0)).length() < 1e-9);
    }
}
