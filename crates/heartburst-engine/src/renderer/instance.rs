use bytemuck::{Pod, Zeroable};

use super::traits::{GlyphSprite, Surface};

/// Packed glyph for a JS/GPU renderer reading straight from WASM memory.
/// 8 floats = 32 bytes stride.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct GlyphInstance {
    /// X position in surface space.
    pub x: f32,
    /// Y position in surface space.
    pub y: f32,
    /// Glyph size in surface units.
    pub size: f32,
    /// Opacity (0.0 = invisible, 1.0 = opaque).
    pub alpha: f32,
    pub r: f32,
    pub g: f32,
    pub b: f32,
    _pad: f32,
}

impl GlyphInstance {
    pub const FLOATS: usize = 8;
    pub const STRIDE_BYTES: usize = Self::FLOATS * 4;
}

impl From<&GlyphSprite> for GlyphInstance {
    fn from(sprite: &GlyphSprite) -> Self {
        let [r, g, b] = sprite.color.to_unit();
        Self {
            x: sprite.position.x as f32,
            y: sprite.position.y as f32,
            size: sprite.size as f32,
            alpha: sprite.alpha as f32,
            r,
            g,
            b,
            _pad: 0.0,
        }
    }
}

/// In-memory surface holding the glyphs drawn since the last clear.
pub struct GlyphBuffer {
    instances: Vec<GlyphInstance>,
    width: u32,
    height: u32,
    clears: u32,
    draws: u64,
}

impl GlyphBuffer {
    pub fn new() -> Self {
        Self::with_capacity(128)
    }

    pub fn with_capacity(glyphs: usize) -> Self {
        Self {
            instances: Vec::with_capacity(glyphs),
            width: 0,
            height: 0,
            clears: 0,
            draws: 0,
        }
    }

    pub fn instances(&self) -> &[GlyphInstance] {
        &self.instances
    }

    /// Flat float view, `FLOATS` per glyph.
    pub fn as_floats(&self) -> &[f32] {
        bytemuck::cast_slice(&self.instances)
    }

    pub fn glyph_count(&self) -> u32 {
        self.instances.len() as u32
    }

    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Number of `clear` calls so far.
    pub fn clear_count(&self) -> u32 {
        self.clears
    }

    /// Total draws across all frames.
    pub fn draw_count(&self) -> u64 {
        self.draws
    }
}

impl Default for GlyphBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl Surface for GlyphBuffer {
    fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
    }

    fn clear(&mut self) {
        self.instances.clear();
        self.clears += 1;
    }

    fn draw(&mut self, sprite: &GlyphSprite) {
        self.instances.push(GlyphInstance::from(sprite));
        self.draws += 1;
    }
}
