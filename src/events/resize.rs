use super::Listener;
use crate::dom;
use wasm_bindgen::closure::Closure;
use web_sys as web;

pub type ResizeListener = Listener<dyn FnMut()>;

/// Keep every surface sized to the viewport.
pub fn wire_resize(
    window: &web::Window,
    surfaces: Vec<web::HtmlCanvasElement>,
) -> anyhow::Result<ResizeListener> {
    let closure = Closure::wrap(Box::new(move || {
        for canvas in &surfaces {
            dom::sync_surface_to_viewport(canvas);
        }
    }) as Box<dyn FnMut()>);
    Listener::attach(window, "resize", closure)
}
