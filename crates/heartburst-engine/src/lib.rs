pub mod api;
pub mod core;
pub mod systems;
pub mod renderer;
pub mod extensions;

// Re-export key types at crate root for convenience
pub use api::config::HeartburstConfig;
pub use api::proposal::{Celebration, Proposal, Stage};
pub use api::types::{BurstHandle, BurstState, SoundEvent};
pub use crate::core::rng::{RandomSource, Rng};
pub use renderer::instance::{GlyphBuffer, GlyphInstance};
pub use renderer::traits::{FrameRequest, FrameScheduler, GlyphSprite, Surface};
pub use systems::burst::{
    clamp_count, Burst, BurstConfig, BurstEngine, Color, ColorError, Particle, DEFAULT_COUNT,
    DEFAULT_PALETTE, MAX_COUNT,
};

// Extensions — decoupled optional helpers
pub use extensions::{pick_position, within_reach, DodgeConfig, Rect};
