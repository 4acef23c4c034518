//! One burst invocation: a fixed particle arena advanced frame by frame.

use std::f64::consts::TAU;

use glam::DVec2;

use super::config::{BurstConfig, MAX_COUNT};
use super::palette;
use super::particle::Particle;
use crate::api::types::{BurstHandle, BurstState};
use crate::core::rng::RandomSource;
use crate::renderer::Surface;

/// A particle set launched from a single origin.
///
/// The set is created in full by [`Burst::new`] and never grows. Each
/// [`Burst::advance`] is one complete frame: update every live particle,
/// draw the survivors, then decide whether another frame is needed.
#[derive(Debug, Clone)]
pub struct Burst {
    handle: BurstHandle,
    state: BurstState,
    particles: Vec<Particle>,
    config: BurstConfig,
    frame: u32,
}

impl Burst {
    /// Lay out `count` particles at `origin`.
    ///
    /// Launch angles are spaced evenly around the circle; speed, size and
    /// color are drawn from `rng` in that order for each particle.
    pub fn new(
        handle: BurstHandle,
        origin: DVec2,
        count: usize,
        config: BurstConfig,
        rng: &mut impl RandomSource,
    ) -> Self {
        let config = config.sanitized();
        if count > MAX_COUNT {
            log::warn!("burst {}: {} particles requested, capping at {}", handle.0, count, MAX_COUNT);
        }
        let count = count.min(MAX_COUNT);
        let mut particles = Vec::with_capacity(count);
        for i in 0..count {
            let angle = TAU * i as f64 / count as f64;
            let speed = config.min_speed + rng.next_f64() * (config.max_speed - config.min_speed);
            let velocity = DVec2::new(
                angle.cos() * speed,
                angle.sin() * speed - config.upward_bias,
            );
            let size = config.min_size + rng.next_f64() * (config.max_size - config.min_size);
            let color = palette::pick(&config.palette, rng);
            particles.push(Particle::new(origin, velocity, size, color));
        }

        Burst {
            handle,
            state: BurstState::Idle,
            particles,
            config,
            frame: 0,
        }
    }

    /// Idle -> Running, or straight to Terminated for an empty set.
    pub fn launch(&mut self) -> BurstState {
        if self.state == BurstState::Idle {
            self.state = if self.particles.iter().any(Particle::is_active) {
                BurstState::Running
            } else {
                BurstState::Terminated
            };
        }
        self.state
    }

    /// Run one frame. A no-op unless running.
    pub fn advance<S: Surface + ?Sized>(&mut self, surface: &mut S) -> BurstState {
        if self.state != BurstState::Running {
            return self.state;
        }

        surface.clear();
        let gravity = self.config.gravity;
        let decay = self.config.decay_per_frame;
        let mut alive = 0usize;
        for p in &mut self.particles {
            if p.tick(gravity, decay) {
                surface.draw(&p.sprite());
                alive += 1;
            }
        }
        self.frame += 1;

        if alive == 0 {
            self.halt();
            surface.clear();
        }
        self.state
    }

    /// Terminate and drop the particle set. Idempotent.
    pub fn halt(&mut self) {
        self.state = BurstState::Terminated;
        self.particles.clear();
        self.particles.shrink_to_fit();
    }

    pub fn handle(&self) -> BurstHandle {
        self.handle
    }

    pub fn state(&self) -> BurstState {
        self.state
    }

    /// Frames run so far.
    pub fn frame(&self) -> u32 {
        self.frame
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn config(&self) -> &BurstConfig {
        &self.config
    }
}
