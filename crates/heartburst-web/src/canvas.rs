use heartburst_engine::{GlyphSprite, Surface};
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

/// Glyph painted for every particle.
const HEART: &str = "\u{2665}";

/// Canvas2D drawing surface. Particles are filled heart glyphs whose
/// `globalAlpha` is the particle's remaining life.
pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    /// Look up `<canvas id=canvas_id>` and its 2D context.
    /// `None` when the page has no such canvas or 2D is unsupported.
    pub fn attach(canvas_id: &str) -> Option<Self> {
        let document = web_sys::window()?.document()?;
        let canvas = document
            .get_element_by_id(canvas_id)?
            .dyn_into::<HtmlCanvasElement>()
            .ok()?;
        let ctx = canvas
            .get_context("2d")
            .ok()??
            .dyn_into::<CanvasRenderingContext2d>()
            .ok()?;
        Some(Self { canvas, ctx })
    }
}

impl Surface for CanvasSurface {
    fn resize(&mut self, width: u32, height: u32) {
        self.canvas.set_width(width);
        self.canvas.set_height(height);
    }

    fn clear(&mut self) {
        let w = self.canvas.width() as f64;
        let h = self.canvas.height() as f64;
        self.ctx.clear_rect(0.0, 0.0, w, h);
    }

    fn draw(&mut self, sprite: &GlyphSprite) {
        let ctx = &self.ctx;
        ctx.save();
        ctx.set_global_alpha(sprite.alpha);
        ctx.set_fill_style_str(&sprite.color.to_css());
        ctx.set_font(&format!("{}px Arial", sprite.size));
        ctx.set_text_align("center");
        ctx.set_text_baseline("middle");
        if let Err(err) = ctx.fill_text(HEART, sprite.position.x, sprite.position.y) {
            log::debug!("canvas: fill_text failed: {:?}", err);
        }
        ctx.restore();
    }
}
