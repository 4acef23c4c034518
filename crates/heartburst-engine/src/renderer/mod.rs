pub mod instance;
pub mod traits;

// Re-export key types for convenient access
pub use instance::{GlyphBuffer, GlyphInstance};
pub use traits::{FrameRequest, FrameScheduler, GlyphSprite, Surface};

#[cfg(test)]
pub(crate) use traits::testing;
