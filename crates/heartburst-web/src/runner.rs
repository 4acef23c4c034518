use glam::DVec2;
use heartburst_engine::extensions::dodge;
use heartburst_engine::{
    BurstEngine, BurstHandle, BurstState, HeartburstConfig, Proposal, Rect, Rng, Stage,
};

use crate::canvas::CanvasSurface;
use crate::scheduler::AnimationFrameScheduler;

/// Fallback when the window size cannot be read.
const FALLBACK_VIEWPORT: (u32, u32) = (800, 600);

/// Owns everything the page talks to: the burst engine on the confetti
/// canvas, the proposal stages and the escaping button's randomness.
///
/// Lives in a `thread_local!` in `lib.rs`, because wasm-bindgen cannot
/// export a struct holding JS closures by value.
pub struct BurstRunner {
    engine: BurstEngine<CanvasSurface, AnimationFrameScheduler>,
    proposal: Proposal,
    config: HeartburstConfig,
    dodge_rng: Rng,
}

impl BurstRunner {
    pub fn new(
        surface: Option<CanvasSurface>,
        scheduler: AnimationFrameScheduler,
        config: HeartburstConfig,
    ) -> Self {
        let seed = if config.seed == 0 {
            (js_sys::Math::random() * u32::MAX as f64) as u64
        } else {
            config.seed
        };
        Self {
            engine: BurstEngine::new(surface, scheduler, seed),
            proposal: Proposal::new(config.celebration_secs),
            dodge_rng: Rng::new(seed.wrapping_add(7919)),
            config,
        }
    }

    /// Start a burst at `origin` on a canvas sized to the viewport.
    pub fn start(&mut self, origin: DVec2, count: usize) -> BurstHandle {
        self.engine
            .start(origin, viewport_size(), count, self.config.burst.clone())
    }

    /// Start a burst at the viewport centre.
    pub fn start_centered(&mut self, count: usize) -> BurstHandle {
        let (w, h) = viewport_size();
        self.start(DVec2::new(w as f64, h as f64) / 2.0, count)
    }

    pub fn stop(&mut self, handle: BurstHandle) {
        self.engine.stop(handle);
    }

    pub fn state(&self, handle: BurstHandle) -> BurstState {
        self.engine.state(handle)
    }

    /// The `requestAnimationFrame` callback body.
    pub fn on_frame(&mut self) {
        self.engine.on_frame();
    }

    /// Answer the question. Returns the sound event id for the JS audio
    /// side to play, or 0 when the answer was already given.
    pub fn confirm(&mut self) -> u32 {
        match self.proposal.confirm() {
            Some(celebration) => {
                self.start_centered(self.config.count);
                celebration.sound.0
            }
            None => 0,
        }
    }

    pub fn tick(&mut self, dt: f32) -> Stage {
        self.proposal.tick(dt)
    }

    pub fn stage(&self) -> Stage {
        self.proposal.stage()
    }

    /// New top-left corner for the escaping button.
    pub fn dodge(&mut self, avoid: Option<Rect>) -> DVec2 {
        let (w, h) = viewport_size();
        dodge::pick_position(
            &self.config.dodge,
            DVec2::new(w as f64, h as f64),
            avoid,
            &mut self.dodge_rng,
        )
    }

    pub fn within_reach(&self, pointer: DVec2, button: &Rect) -> bool {
        dodge::within_reach(&self.config.dodge, pointer, button)
    }

    pub fn unmount(&mut self) {
        self.engine.unmount();
    }
}

fn viewport_size() -> (u32, u32) {
    let Some(window) = web_sys::window() else {
        return FALLBACK_VIEWPORT;
    };
    let read = |value: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>| {
        value.ok().and_then(|v| v.as_f64()).filter(|v| v.is_finite() && *v >= 0.0)
    };
    match (read(window.inner_width()), read(window.inner_height())) {
        (Some(w), Some(h)) => (w as u32, h as u32),
        _ => FALLBACK_VIEWPORT,
    }
}
