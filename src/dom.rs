use anyhow::anyhow;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Current viewport size in CSS pixels.
pub fn viewport_size() -> Option<(u32, u32)> {
    let w = web::window()?;
    let width = w.inner_width().ok()?.as_f64()?;
    let height = w.inner_height().ok()?.as_f64()?;
    Some((width.max(1.0) as u32, height.max(1.0) as u32))
}

/// Match the canvas backing store to the viewport. Setting the size clears
/// whatever was drawn; the next frame repaints from live state.
pub fn sync_surface_to_viewport(canvas: &web::HtmlCanvasElement) {
    if let Some((w, h)) = viewport_size() {
        canvas.set_width(w);
        canvas.set_height(h);
    }
}

/// Find `#id` or create it as a `<tag>` appended to `<body>`.
/// The flag reports whether the element was created here.
pub fn ensure_element(
    document: &web::Document,
    id: &str,
    tag: &str,
) -> anyhow::Result<(web::HtmlElement, bool)> {
    let (el, created) = match document.get_element_by_id(id) {
        Some(el) => (el, false),
        None => {
            let el = document
                .create_element(tag)
                .map_err(|e| anyhow!("create <{}>: {:?}", tag, e))?;
            el.set_id(id);
            let body = document.body().ok_or_else(|| anyhow!("no body"))?;
            body.append_child(&el)
                .map_err(|e| anyhow!("append #{}: {:?}", id, e))?;
            (el, true)
        }
    };
    let el = el
        .dyn_into::<web::HtmlElement>()
        .map_err(|e| anyhow!("#{} is not an HtmlElement: {:?}", id, e))?;
    Ok((el, created))
}

/// A fixed, full-viewport canvas that never takes pointer input.
pub fn ensure_overlay_canvas(
    document: &web::Document,
    id: &str,
    z_index: i32,
) -> anyhow::Result<(web::HtmlCanvasElement, bool)> {
    let (el, created) = ensure_element(document, id, "canvas")?;
    let canvas = el
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow!("#{} is not a canvas: {:?}", id, e))?;
    _ = canvas.set_attribute(
        "style",
        &format!(
            "position:fixed;inset:0;width:100vw;height:100vh;pointer-events:none;z-index:{}",
            z_index
        ),
    );
    sync_surface_to_viewport(&canvas);
    Ok((canvas, created))
}

/// 2D context for a surface, or `None` if it cannot be acquired yet.
pub fn context_2d(canvas: &web::HtmlCanvasElement) -> Option<web::CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .ok()
        .flatten()
        .and_then(|ctx| ctx.dyn_into::<web::CanvasRenderingContext2d>().ok())
}

/// What teardown does with a surface: page-provided canvases stay in the
/// document but are wiped, canvases created at mount are wiped and removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SurfaceRelease {
    ClearOnly,
    ClearAndRemove,
}

impl SurfaceRelease {
    pub fn for_surface(created: bool) -> Self {
        if created {
            SurfaceRelease::ClearAndRemove
        } else {
            SurfaceRelease::ClearOnly
        }
    }
}

pub fn release_surface(canvas: &web::HtmlCanvasElement, release: SurfaceRelease) {
    if let Some(ctx) = context_2d(canvas) {
        ctx.clear_rect(0.0, 0.0, canvas.width() as f64, canvas.height() as f64);
    }
    if release == SurfaceRelease::ClearAndRemove {
        canvas.remove();
    }
}
