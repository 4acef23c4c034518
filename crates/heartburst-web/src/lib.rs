//! Browser bridge: a `thread_local!` runner plus `#[wasm_bindgen]` free
//! functions the page calls. Every export is a no-op before
//! `heartburst_init` or after `heartburst_unmount`.

pub mod canvas;
pub mod runner;
pub mod scheduler;

pub use canvas::CanvasSurface;
pub use runner::BurstRunner;
pub use scheduler::AnimationFrameScheduler;

use std::cell::RefCell;

use glam::DVec2;
use heartburst_engine::{clamp_count, BurstHandle, BurstState, HeartburstConfig, Rect};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;

thread_local! {
    static RUNNER: RefCell<Option<BurstRunner>> = RefCell::new(None);
}

/// Run `f` on the runner if one is mounted and not already borrowed.
fn with_runner<R>(f: impl FnOnce(&mut BurstRunner) -> R) -> Option<R> {
    RUNNER.with(|cell| {
        let mut borrow = cell.try_borrow_mut().ok()?;
        borrow.as_mut().map(f)
    })
}

fn state_code(state: BurstState) -> u8 {
    match state {
        BurstState::Idle => 0,
        BurstState::Running => 1,
        BurstState::Terminated => 2,
    }
}

/// Mount on `<canvas id=canvas_id>`. `config_json` is an optional
/// settings document; a malformed one is logged and ignored.
#[wasm_bindgen]
pub fn heartburst_init(canvas_id: &str, config_json: Option<String>) {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    let config = match config_json.as_deref() {
        Some(json) => HeartburstConfig::from_json(json).unwrap_or_else(|err| {
            log::warn!("heartburst: bad config ({}), using defaults", err);
            HeartburstConfig::default()
        }),
        None => HeartburstConfig::default(),
    };

    let surface = CanvasSurface::attach(canvas_id);
    if surface.is_none() {
        log::warn!("heartburst: no 2D canvas #{}", canvas_id);
    }
    let callback = Closure::<dyn FnMut(f64)>::new(|_timestamp: f64| {
        with_runner(|r| r.on_frame());
    });
    let runner = BurstRunner::new(surface, AnimationFrameScheduler::new(callback), config);

    // Drop any previous runner outside the borrow; its engine cancels
    // the frame it had pending.
    let previous = RUNNER.with(|cell| cell.borrow_mut().replace(runner));
    drop(previous);
    log::info!("heartburst: initialized");
}

/// Start a burst at (x, y). Returns the handle, or 0 when not mounted.
/// A negative count gives an empty burst; large counts are capped.
#[wasm_bindgen]
pub fn heartburst_start(x: f64, y: f64, count: i32) -> u32 {
    let count = clamp_count(count as i64);
    with_runner(|r| r.start(DVec2::new(x, y), count).0).unwrap_or(0)
}

/// Start a burst at the viewport centre. Count is clamped as in
/// `heartburst_start`.
#[wasm_bindgen]
pub fn heartburst_start_centered(count: i32) -> u32 {
    let count = clamp_count(count as i64);
    with_runner(|r| r.start_centered(count).0).unwrap_or(0)
}

#[wasm_bindgen]
pub fn heartburst_stop(handle: u32) {
    with_runner(|r| r.stop(BurstHandle(handle)));
}

/// 0 = idle, 1 = running, 2 = terminated.
#[wasm_bindgen]
pub fn heartburst_state(handle: u32) -> u8 {
    with_runner(|r| state_code(r.state(BurstHandle(handle)))).unwrap_or(state_code(BurstState::Idle))
}

/// The "yes" button. Returns the sound event id to play (0 = none).
#[wasm_bindgen]
pub fn heartburst_confirm() -> u32 {
    with_runner(|r| r.confirm()).unwrap_or(0)
}

/// Advance stage timers by `dt` seconds. Returns the stage code.
#[wasm_bindgen]
pub fn heartburst_tick(dt: f32) -> u8 {
    with_runner(|r| r.tick(dt) as u8).unwrap_or(0)
}

#[wasm_bindgen]
pub fn heartburst_stage() -> u8 {
    with_runner(|r| r.stage() as u8).unwrap_or(0)
}

/// New `[x, y]` for the escaping button, avoiding the given rect.
/// Pass an empty rect (right <= left) to place it anywhere.
#[wasm_bindgen]
pub fn heartburst_dodge(left: f64, top: f64, right: f64, bottom: f64) -> Vec<f64> {
    let avoid = (right > left && bottom > top)
        .then(|| Rect::new(DVec2::new(left, top), DVec2::new(right, bottom)));
    with_runner(|r| {
        let p = r.dodge(avoid);
        vec![p.x, p.y]
    })
    .unwrap_or_default()
}

/// Whether a pointer at (x, y) is close enough to the button to trigger a dodge.
#[wasm_bindgen]
pub fn heartburst_within_reach(x: f64, y: f64, left: f64, top: f64, right: f64, bottom: f64) -> bool {
    let button = Rect::new(DVec2::new(left, top), DVec2::new(right, bottom));
    with_runner(|r| r.within_reach(DVec2::new(x, y), &button)).unwrap_or(false)
}

/// Tear down: cancel any pending frame and drop the runner.
#[wasm_bindgen]
pub fn heartburst_unmount() {
    let runner = RUNNER.with(|cell| cell.try_borrow_mut().ok().and_then(|mut b| b.take()));
    if let Some(mut runner) = runner {
        runner.unmount();
        log::info!("heartburst: unmounted");
    }
}
