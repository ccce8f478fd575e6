pub mod pointer;
pub mod resize;

pub use pointer::{wire_pointermove, PointerWiring};
pub use resize::wire_resize;

use wasm_bindgen::closure::{Closure, WasmClosure};
use wasm_bindgen::JsCast;
use web_sys as web;

/// An attached event listener. Dropping it detaches the callback.
pub struct Listener<F: ?Sized + WasmClosure> {
    target: web::EventTarget,
    kind: &'static str,
    closure: Closure<F>,
}

impl<F: ?Sized + WasmClosure> Listener<F> {
    pub fn attach(
        target: &web::EventTarget,
        kind: &'static str,
        closure: Closure<F>,
    ) -> anyhow::Result<Self> {
        target
            .add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref())
            .map_err(|e| anyhow::anyhow!("add {} listener: {:?}", kind, e))?;
        Ok(Self {
            target: target.clone(),
            kind,
            closure,
        })
    }
}

impl<F: ?Sized + WasmClosure> Drop for Listener<F> {
    fn drop(&mut self) {
        _ = self
            .target
            .remove_event_listener_with_callback(self.kind, self.closure.as_ref().unchecked_ref());
        log::debug!("[events] detached {}", self.kind);
    }
}
