//! Collaborator contracts between the burst engine and its host.
//!
//! The engine never talks to a browser directly. A host supplies a
//! [`Surface`] to paint on and a [`FrameScheduler`] that calls
//! `BurstEngine::on_frame` once per display refresh. The web bridge
//! implements both on Canvas2D and `requestAnimationFrame`; tests use
//! [`GlyphBuffer`](super::instance::GlyphBuffer) and a manual scheduler.

use glam::DVec2;

use crate::systems::burst::Color;

/// One particle as the renderer sees it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlyphSprite {
    /// Centre of the glyph in surface coordinates.
    pub position: DVec2,
    /// Glyph size (font pixels on Canvas2D).
    pub size: f64,
    pub color: Color,
    /// Opacity in (0, 1]. Equal to the particle's remaining life.
    pub alpha: f64,
}

/// A 2-D drawing target owned and sized by the host.
pub trait Surface {
    /// Size the backing pixel buffer. Called once when a burst starts.
    fn resize(&mut self, width: u32, height: u32);

    /// Wipe the whole surface.
    fn clear(&mut self);

    /// Paint one glyph.
    fn draw(&mut self, sprite: &GlyphSprite);
}

/// Opaque id of a scheduled frame callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameRequest(pub i32);

/// Per-refresh callback scheduler.
pub trait FrameScheduler {
    /// Ask for one callback at the next refresh.
    /// `None` means the host cannot schedule frames at all.
    fn request_frame(&mut self) -> Option<FrameRequest>;

    /// Revoke a callback that has not fired yet.
    fn cancel_frame(&mut self, request: FrameRequest);
}

impl<S: Surface + ?Sized> Surface for Box<S> {
    fn resize(&mut self, width: u32, height: u32) {
        (**self).resize(width, height)
    }

    fn clear(&mut self) {
        (**self).clear()
    }

    fn draw(&mut self, sprite: &GlyphSprite) {
        (**self).draw(sprite)
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;

    /// Scheduler driven by hand: tests fire the pending request themselves.
    #[derive(Debug, Default)]
    pub struct ManualScheduler {
        next_id: i32,
        pub pending: Option<FrameRequest>,
        pub requested: u32,
        pub cancelled: Vec<FrameRequest>,
        /// Simulate a host without frame scheduling.
        pub unavailable: bool,
    }

    impl ManualScheduler {
        /// A host that refuses every frame request.
        pub fn unavailable() -> Self {
            Self {
                unavailable: true,
                ..Self::default()
            }
        }

        /// Consume the pending request, as the host does right before
        /// invoking the callback. Returns whether one was pending.
        pub fn fire(&mut self) -> bool {
            self.pending.take().is_some()
        }
    }

    impl FrameScheduler for ManualScheduler {
        fn request_frame(&mut self) -> Option<FrameRequest> {
            if self.unavailable {
                return None;
            }
            assert!(self.pending.is_none(), "two frames in flight");
            self.next_id += 1;
            self.requested += 1;
            let request = FrameRequest(self.next_id);
            self.pending = Some(request);
            Some(request)
        }

        fn cancel_frame(&mut self, request: FrameRequest) {
            if self.pending == Some(request) {
                self.pending = None;
            }
            self.cancelled.push(request);
        }
    }
}
