//! Burst particle: a point under constant gravity with linear life decay.

use glam::DVec2;

use super::palette::Color;
use crate::renderer::GlyphSprite;

/// A single particle with physics and rendering state.
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub position: DVec2,
    /// Units per frame.
    pub velocity: DVec2,
    /// Remaining normalized lifetime in [0, 1]. Never increases.
    pub life: f64,
    /// Frames advanced while alive.
    pub age: u32,
    pub size: f64,
    pub color: Color,
}

impl Particle {
    pub fn new(position: DVec2, velocity: DVec2, size: f64, color: Color) -> Self {
        Particle {
            position,
            velocity,
            life: 1.0,
            age: 0,
            size,
            color,
        }
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.life > 0.0
    }

    /// Advance one frame with a unit Euler step. Returns false once dead.
    /// Dead particles are left untouched.
    ///
    /// Life is `1 - age * decay` rather than a running difference, so it
    /// lands exactly on the linear schedule.
    pub fn tick(&mut self, gravity: f64, decay: f64) -> bool {
        if !self.is_active() {
            return false;
        }
        self.position += self.velocity;
        self.velocity.y += gravity;
        self.age += 1;
        self.life = (1.0 - self.age as f64 * decay).max(0.0);
        self.is_active()
    }

    /// Render form: opacity follows remaining life.
    pub fn sprite(&self) -> GlyphSprite {
        GlyphSprite {
            position: self.position,
            size: self.size,
            color: self.color,
            alpha: self.life,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pink() -> Color {
        Color::rgb(255, 105, 180)
    }

    #[test]
    fn particle_starts_full_life() {
        let p = Particle::new(DVec2::ZERO, DVec2::X, 20.0, pink());
        assert_eq!(p.life, 1.0);
        assert!(p.is_active());
    }

    #[test]
    fn tick_moves_before_applying_gravity() {
        let mut p = Particle::new(DVec2::ZERO, DVec2::new(2.0, -1.0), 20.0, pink());
        p.tick(0.5, 0.1);
        assert_eq!(p.position, DVec2::new(2.0, -1.0));
        assert_eq!(p.velocity, DVec2::new(2.0, -0.5));
        p.tick(0.5, 0.1);
        assert_eq!(p.position, DVec2::new(4.0, -1.5));
        assert_eq!(p.velocity, DVec2::new(2.0, 0.0));
    }

    #[test]
    fn life_follows_linear_schedule_exactly() {
        let mut p = Particle::new(DVec2::ZERO, DVec2::X, 20.0, pink());
        for frame in 1..=9u32 {
            p.tick(0.0, 0.1);
            assert_eq!(p.age, frame);
            assert_eq!(p.life, (1.0 - frame as f64 * 0.1).max(0.0));
        }
        // 1 - 10 * 0.1 is exactly zero: dead on frame 10.
        assert!(!p.tick(0.0, 0.1));
        assert_eq!(p.life, 0.0);
        assert_eq!(p.age, 10);
    }

    #[test]
    fn particle_expires_and_clamps_at_zero() {
        let mut p = Particle::new(DVec2::ZERO, DVec2::X, 20.0, pink());
        assert!(!p.tick(0.0, 3.0), "particle should expire");
        assert_eq!(p.life, 0.0);
    }

    #[test]
    fn dead_particle_is_frozen() {
        let mut p = Particle::new(DVec2::ZERO, DVec2::X, 20.0, pink());
        p.tick(1.0, 1.0);
        let snapshot = p.clone();
        assert!(!p.tick(1.0, 1.0));
        assert_eq!(p, snapshot);
    }

    #[test]
    fn sprite_alpha_tracks_life() {
        let mut p = Particle::new(DVec2::new(5.0, 5.0), DVec2::ZERO, 12.0, pink());
        p.tick(0.0, 0.25);
        let s = p.sprite();
        assert_eq!(s.alpha, 0.75);
        assert_eq!(s.size, 12.0);
        assert_eq!(s.color, pink());
    }
}
