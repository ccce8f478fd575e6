use super::Listener;
use crate::effects::EffectState;
use crate::glow::AmbientGlow;
use crate::timers::SparkleTimers;
use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use web_sys as web;

pub type PointerListener = Listener<dyn FnMut(web::PointerEvent)>;

#[derive(Clone)]
pub struct PointerWiring {
    pub state: Rc<RefCell<EffectState>>,
    pub timers: Rc<RefCell<SparkleTimers>>,
    pub glow: AmbientGlow,
}

/// One window-level `pointermove` handler feeding the glow, the trail gate and
/// the sparkle gate. Runs to completion before the next event or frame.
pub fn wire_pointermove(
    window: &web::Window,
    w: PointerWiring,
) -> anyhow::Result<PointerListener> {
    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let pos = Vec2::new(ev.client_x() as f32, ev.client_y() as f32);
        if !pos.is_finite() {
            return;
        }

        w.glow.follow(pos);

        let now = js_sys::Date::now() as u64;
        let outcome = w.state.borrow_mut().on_pointer_move(pos, now);
        if let Some(ids) = outcome.sparkles {
            SparkleTimers::schedule_removal(&w.timers, Rc::downgrade(&w.state), ids);
        }
    }) as Box<dyn FnMut(_)>);

    Listener::attach(window, "pointermove", closure)
}
