//! Heart burst: a one-shot, frame-driven particle explosion.
//!
//! This module provides the `BurstEngine` facade a host mounts on one
//! surface, plus the pieces it is built from, which can be used directly.

mod run;
mod config;
mod palette;
mod particle;

pub use run::Burst;
pub use config::{clamp_count, BurstConfig, DEFAULT_COUNT, MAX_COUNT};
pub use palette::{Color, ColorError, DEFAULT_PALETTE};
pub use particle::Particle;

use glam::DVec2;

use crate::api::types::{BurstHandle, BurstState};
use crate::core::rng::{RandomSource, Rng};
use crate::renderer::{FrameRequest, FrameScheduler, Surface};

/// Drives bursts on a single host surface.
///
/// Single-threaded and cooperative: the host calls [`BurstEngine::on_frame`]
/// from the callback it scheduled, and exactly one frame is ever pending.
/// Cancellation is checked at each frame boundary before any work is done.
///
/// A missing surface (`None`) models an environment without a drawing
/// target: every burst is born terminated and nothing is scheduled.
pub struct BurstEngine<S: Surface, F: FrameScheduler, R: RandomSource = Rng> {
    surface: Option<S>,
    scheduler: F,
    rng: R,
    active: Option<Burst>,
    pending: Option<FrameRequest>,
    next_handle: u32,
}

impl<S: Surface, F: FrameScheduler> BurstEngine<S, F, Rng> {
    /// Create an engine with a seeded xorshift source.
    pub fn new(surface: Option<S>, scheduler: F, seed: u64) -> Self {
        Self::with_rng(surface, scheduler, Rng::new(seed))
    }
}

impl<S: Surface, F: FrameScheduler, R: RandomSource> BurstEngine<S, F, R> {
    pub fn with_rng(surface: Option<S>, scheduler: F, rng: R) -> Self {
        if surface.is_none() {
            log::warn!("burst engine: no drawing surface, bursts will be no-ops");
        }
        Self {
            surface,
            scheduler,
            rng,
            active: None,
            pending: None,
            next_handle: 0,
        }
    }

    /// Launch a burst and schedule its first frame. Returns immediately.
    ///
    /// A burst already running on this surface is stopped first. A
    /// non-finite origin falls back to the surface centre; `count == 0`
    /// yields a burst that is terminated before any frame.
    pub fn start(
        &mut self,
        origin: DVec2,
        surface_size: (u32, u32),
        count: usize,
        config: BurstConfig,
    ) -> BurstHandle {
        if let Some(previous) = self.running_handle() {
            self.stop(previous);
        }

        self.next_handle += 1;
        let handle = BurstHandle(self.next_handle);

        let Some(surface) = self.surface.as_mut() else {
            self.active = None;
            return handle;
        };

        let (width, height) = surface_size;
        surface.resize(width, height);
        let origin = if origin.is_finite() {
            origin
        } else {
            DVec2::new(width as f64, height as f64) / 2.0
        };

        let mut burst = Burst::new(handle, origin, count, config, &mut self.rng);
        if burst.launch() == BurstState::Running {
            match self.scheduler.request_frame() {
                Some(request) => self.pending = Some(request),
                None => {
                    log::warn!("burst {}: host cannot schedule frames, dropping", handle.0);
                    burst.halt();
                    surface.clear();
                }
            }
        }

        log::debug!(
            "burst {}: {} particles at ({:.1}, {:.1}), {:?}",
            handle.0,
            burst.particles().len(),
            origin.x,
            origin.y,
            burst.state()
        );
        self.active = Some(burst);
        handle
    }

    /// Host callback for a scheduled frame.
    ///
    /// Returns the burst state after the frame, or `None` when no frame
    /// was pending (a stale callback after `stop`), in which case nothing
    /// is touched.
    pub fn on_frame(&mut self) -> Option<BurstState> {
        self.pending.take()?;
        let burst = self.active.as_mut()?;
        let surface = self.surface.as_mut()?;

        let state = burst.advance(surface);
        match state {
            BurstState::Running => match self.scheduler.request_frame() {
                Some(request) => self.pending = Some(request),
                None => {
                    log::warn!("burst {}: lost frame scheduling, stopping", burst.handle().0);
                    burst.halt();
                    surface.clear();
                }
            },
            _ => log::debug!("burst {}: finished after {} frames", burst.handle().0, burst.frame()),
        }
        Some(burst.state())
    }

    /// Cancel a burst. Safe at any time, any number of times, with any
    /// handle; after it returns no further frame runs for `handle`.
    pub fn stop(&mut self, handle: BurstHandle) {
        let Some(burst) = self.active.as_mut().filter(|b| b.handle() == handle) else {
            return;
        };
        if burst.state() == BurstState::Terminated {
            return;
        }
        if let Some(request) = self.pending.take() {
            self.scheduler.cancel_frame(request);
        }
        burst.halt();
        if let Some(surface) = self.surface.as_mut() {
            surface.clear();
        }
        log::debug!("burst {}: stopped after {} frames", handle.0, burst.frame());
    }

    /// Stop whatever is running. Called when the host view goes away.
    pub fn unmount(&mut self) {
        if let Some(handle) = self.active.as_ref().map(Burst::handle) {
            self.stop(handle);
        }
        self.active = None;
    }

    /// `Idle` for handles never issued, `Terminated` for superseded ones.
    pub fn state(&self, handle: BurstHandle) -> BurstState {
        match &self.active {
            Some(burst) if burst.handle() == handle => burst.state(),
            _ if handle.0 >= 1 && handle.0 <= self.next_handle => BurstState::Terminated,
            _ => BurstState::Idle,
        }
    }

    pub fn is_running(&self) -> bool {
        self.running_handle().is_some()
    }

    pub fn active(&self) -> Option<&Burst> {
        self.active.as_ref()
    }

    pub fn surface(&self) -> Option<&S> {
        self.surface.as_ref()
    }

    pub fn scheduler(&self) -> &F {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut F {
        &mut self.scheduler
    }

    fn running_handle(&self) -> Option<BurstHandle> {
        self.active
            .as_ref()
            .filter(|b| b.state() == BurstState::Running)
            .map(Burst::handle)
    }
}

impl<S: Surface, F: FrameScheduler, R: RandomSource> Drop for BurstEngine<S, F, R> {
    fn drop(&mut self) {
        self.unmount();
    }
}
