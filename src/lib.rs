#![cfg(target_arch = "wasm32")]
use crate::effects::{generate_starfield, EffectState, SparkleEmitter};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys as web;

mod constants;
mod dom;
mod effects;
mod events;
mod frame;
mod glow;
mod render;
mod timers;

use constants::{SKY_CANVAS_ID, SKY_Z_INDEX, TRAIL_CANVAS_ID, TRAIL_Z_INDEX};

/// Everything one mounted effect owns. Dropping it tears the effect down.
struct CursorSparkle {
    frame_loop: frame::FrameLoop,
    timers: Rc<RefCell<timers::SparkleTimers>>,
    state: Rc<RefCell<EffectState>>,
    glow: glow::AmbientGlow,
    // Both surfaces, with what teardown does to each.
    surfaces: Vec<(web::HtmlCanvasElement, dom::SurfaceRelease)>,
    _pointer: events::pointer::PointerListener,
    _resize: events::resize::ResizeListener,
}

impl CursorSparkle {
    fn mount() -> anyhow::Result<Self> {
        let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
        let document = window
            .document()
            .ok_or_else(|| anyhow::anyhow!("no document"))?;

        let (sky_canvas, sky_created) =
            dom::ensure_overlay_canvas(&document, SKY_CANVAS_ID, SKY_Z_INDEX)?;
        let (trail_canvas, trail_created) =
            dom::ensure_overlay_canvas(&document, TRAIL_CANVAS_ID, TRAIL_Z_INDEX)?;
        let glow = glow::AmbientGlow::mount(&document)?;

        let mut rng = StdRng::from_entropy();
        let stars = generate_starfield(&mut rng);
        let state = Rc::new(RefCell::new(EffectState::new(SparkleEmitter::new(rng))));
        let timers = Rc::new(RefCell::new(timers::SparkleTimers::new()));

        let pointer = events::wire_pointermove(
            &window,
            events::PointerWiring {
                state: state.clone(),
                timers: timers.clone(),
                glow: glow.clone(),
            },
        )?;
        let resize =
            events::wire_resize(&window, vec![trail_canvas.clone(), sky_canvas.clone()])?;

        let frame_ctx = Rc::new(RefCell::new(frame::FrameContext::new(
            state.clone(),
            trail_canvas.clone(),
            sky_canvas.clone(),
            stars,
        )));
        let frame_loop = frame::FrameLoop::start(frame_ctx);

        let surfaces = [(trail_canvas, trail_created), (sky_canvas, sky_created)]
            .into_iter()
            .map(|(c, made)| (c, dom::SurfaceRelease::for_surface(made)))
            .collect();

        log::info!("[mount] cursor effects mounted");
        Ok(Self {
            frame_loop,
            timers,
            state,
            glow,
            surfaces,
            _pointer: pointer,
            _resize: resize,
        })
    }
}

impl Drop for CursorSparkle {
    fn drop(&mut self) {
        self.frame_loop.stop();
        self.timers.borrow_mut().clear();
        if let Ok(mut s) = self.state.try_borrow_mut() {
            s.trail.clear();
            s.sparkles.clear();
        }
        for (canvas, release) in &self.surfaces {
            dom::release_surface(canvas, *release);
        }
        self.glow.unmount();
        log::info!("[mount] cursor effects torn down");
        // Listeners detach when the remaining fields drop.
    }
}

thread_local! {
    static MOUNTED: RefCell<Option<CursorSparkle>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("cursor-sparkle starting");
    mount();
    Ok(())
}

/// Attach the effects to the page. A second call while mounted is a no-op.
#[wasm_bindgen]
pub fn mount() {
    MOUNTED.with(|m| {
        let mut slot = m.borrow_mut();
        if slot.is_some() {
            return;
        }
        match CursorSparkle::mount() {
            Ok(fx) => *slot = Some(fx),
            Err(e) => log::error!("[mount] {:?}", e),
        }
    });
}

/// Detach listeners, stop the redraw loop and cancel pending timers.
#[wasm_bindgen]
pub fn unmount() {
    let mounted = MOUNTED.with(|m| m.borrow_mut().take());
    drop(mounted);
}
