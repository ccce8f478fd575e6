use crate::effects::{EffectState, SparkleIds, SPARKLE_LIFETIME_MS};
use fnv::FnvHashMap;
use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Pending one-shot sparkle removals, keyed by timeout handle.
///
/// A callback cannot drop its own closure while running, so fired handles are
/// parked in `fired` and released on the next schedule or on teardown.
#[derive(Default)]
pub struct SparkleTimers {
    pending: FnvHashMap<i32, Closure<dyn FnMut()>>,
    fired: Vec<i32>,
}

impl SparkleTimers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Remove `ids` from the store `SPARKLE_LIFETIME_MS` from now. The
    /// callback holds the store weakly and does nothing once it is gone.
    pub fn schedule_removal(
        this: &Rc<RefCell<Self>>,
        state: Weak<RefCell<EffectState>>,
        ids: SparkleIds,
    ) {
        let Some(window) = web::window() else {
            return;
        };
        this.borrow_mut().release_fired();

        let handle_slot = Rc::new(Cell::new(None::<i32>));
        let handle_for_cb = handle_slot.clone();
        let timers = Rc::downgrade(this);
        let closure = Closure::wrap(Box::new(move || {
            if let Some(state) = state.upgrade() {
                if let Ok(mut s) = state.try_borrow_mut() {
                    s.sparkles.remove(&ids);
                }
            }
            if let (Some(timers), Some(handle)) = (timers.upgrade(), handle_for_cb.get()) {
                if let Ok(mut t) = timers.try_borrow_mut() {
                    t.fired.push(handle);
                }
            }
        }) as Box<dyn FnMut()>);

        match window.set_timeout_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref(),
            SPARKLE_LIFETIME_MS as i32,
        ) {
            Ok(handle) => {
                handle_slot.set(Some(handle));
                this.borrow_mut().pending.insert(handle, closure);
            }
            Err(e) => log::warn!("[timers] setTimeout failed: {:?}", e),
        }
    }

    fn release_fired(&mut self) {
        for handle in self.fired.drain(..) {
            self.pending.remove(&handle);
        }
    }

    /// Cancel everything still waiting and free every callback.
    pub fn clear(&mut self) {
        self.release_fired();
        if let Some(window) = web::window() {
            for handle in self.pending.keys() {
                window.clear_timeout_with_handle(*handle);
            }
        }
        let n = self.pending.len();
        self.pending.clear();
        if n > 0 {
            log::debug!("[timers] cleared {} pending sparkle removals", n);
        }
    }
}
