use web_sys as web;

mod orbs;
mod sky;
mod sparkle;
mod trail;

pub use sky::paint_sky;
pub use sparkle::paint_sparkles;
pub use trail::paint_trail;

#[inline]
pub(crate) fn clear(ctx: &web::CanvasRenderingContext2d, canvas: &web::HtmlCanvasElement) {
    ctx.clear_rect(0.0, 0.0, canvas.width() as f64, canvas.height() as f64);
}

#[inline]
pub(crate) fn rgba(r: u8, g: u8, b: u8, a: f32) -> String {
    format!("rgba({},{},{},{:.3})", r, g, b, a.clamp(0.0, 1.0))
}
