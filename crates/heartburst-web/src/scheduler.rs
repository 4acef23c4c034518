use heartburst_engine::{FrameRequest, FrameScheduler};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

/// `requestAnimationFrame` scheduler. Every request re-arms the same
/// closure, so exactly one JS function object lives for the runner.
pub struct AnimationFrameScheduler {
    window: Option<web_sys::Window>,
    callback: Closure<dyn FnMut(f64)>,
}

impl AnimationFrameScheduler {
    pub fn new(callback: Closure<dyn FnMut(f64)>) -> Self {
        Self {
            window: web_sys::window(),
            callback,
        }
    }
}

impl FrameScheduler for AnimationFrameScheduler {
    fn request_frame(&mut self) -> Option<FrameRequest> {
        let window = self.window.as_ref()?;
        match window.request_animation_frame(self.callback.as_ref().unchecked_ref()) {
            Ok(id) => Some(FrameRequest(id)),
            Err(err) => {
                log::warn!("scheduler: requestAnimationFrame failed: {:?}", err);
                None
            }
        }
    }

    fn cancel_frame(&mut self, request: FrameRequest) {
        if let Some(window) = &self.window {
            if let Err(err) = window.cancel_animation_frame(request.0) {
                log::warn!("scheduler: cancelAnimationFrame failed: {:?}", err);
            }
        }
    }
}
