use crate::dom;
use crate::effects::{EffectState, Star};
use crate::render;
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub state: Rc<RefCell<EffectState>>,
    pub trail_canvas: web::HtmlCanvasElement,
    pub sky_canvas: web::HtmlCanvasElement,
    pub stars: Vec<Star>,
    pub mounted_at: Instant,
    missing_ctx_logged: bool,
}

impl FrameContext {
    pub fn new(
        state: Rc<RefCell<EffectState>>,
        trail_canvas: web::HtmlCanvasElement,
        sky_canvas: web::HtmlCanvasElement,
        stars: Vec<Star>,
    ) -> Self {
        Self {
            state,
            trail_canvas,
            sky_canvas,
            stars,
            mounted_at: Instant::now(),
            missing_ctx_logged: false,
        }
    }

    /// One redraw: prune expired trail points, then repaint trail, sparkles
    /// and sky from current state. Never mutates stored points otherwise.
    pub fn frame(&mut self) {
        let now = js_sys::Date::now() as u64;
        let Ok(mut state) = self.state.try_borrow_mut() else {
            return;
        };
        state.prune(now);

        let painted = match dom::context_2d(&self.trail_canvas) {
            Some(ctx) => {
                render::clear(&ctx, &self.trail_canvas);
                render::paint_trail(&ctx, state.trail.points(), now);
                render::paint_sparkles(&ctx, state.sparkles.particles(), now);
                true
            }
            None => false,
        };
        drop(state);
        if !painted {
            self.note_missing_context();
        }

        if let Some(ctx) = dom::context_2d(&self.sky_canvas) {
            let elapsed = self.mounted_at.elapsed().as_secs_f32();
            render::paint_sky(
                &ctx,
                self.sky_canvas.width() as f64,
                self.sky_canvas.height() as f64,
                &self.stars,
                elapsed,
            );
        }
    }

    fn note_missing_context(&mut self) {
        if !self.missing_ctx_logged {
            log::debug!("[frame] trail surface has no 2d context yet; skipping");
            self.missing_ctx_logged = true;
        }
    }
}

type Tick = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// Redraw task re-armed once per display refresh until stopped.
pub struct FrameLoop {
    tick: Tick,
    handle: Rc<Cell<Option<i32>>>,
    running: Rc<Cell<bool>>,
}

impl FrameLoop {
    pub fn start(frame_ctx: Rc<RefCell<FrameContext>>) -> Self {
        let tick: Tick = Rc::new(RefCell::new(None));
        let handle = Rc::new(Cell::new(None::<i32>));
        let running = Rc::new(Cell::new(true));

        let tick_clone = tick.clone();
        let handle_tick = handle.clone();
        let running_tick = running.clone();
        *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            handle_tick.set(None);
            if !running_tick.get() {
                return;
            }
            frame_ctx.borrow_mut().frame();
            handle_tick.set(request_frame(&tick_clone));
        }) as Box<dyn FnMut()>));

        handle.set(request_frame(&tick));
        log::info!("[frame] loop started");
        Self {
            tick,
            handle,
            running,
        }
    }

    /// Cancel the pending frame and release the callback. Safe to call twice.
    pub fn stop(&self) {
        if !self.running.replace(false) {
            return;
        }
        if let (Some(w), Some(h)) = (web::window(), self.handle.take()) {
            _ = w.cancel_animation_frame(h);
        }
        // Breaks the closure's reference back to `tick`.
        self.tick.borrow_mut().take();
        log::info!("[frame] loop stopped");
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        self.stop();
    }
}

fn request_frame(tick: &Tick) -> Option<i32> {
    let w = web::window()?;
    let tick = tick.borrow();
    let cb = tick.as_ref()?;
    w.request_animation_frame(cb.as_ref().unchecked_ref()).ok()
}
