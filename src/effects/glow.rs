// Geometry and styling of the ambient glow that trails the raw pointer.
use glam::Vec2;

pub const GLOW_SIZE_PX: u32 = 220;
pub const GLOW_EASING: &str = "transform 0.15s cubic-bezier(0.22, 1, 0.36, 1)";
pub const GLOW_GRADIENT: &str =
    "radial-gradient(circle, rgba(99,102,241,0.06) 0%, rgba(147,197,253,0.03) 40%, transparent 70%)";

/// CSS transform centering the glow on `pos`, or `None` for unusable input.
#[inline]
pub fn glow_transform(pos: Vec2) -> Option<String> {
    pos.is_finite()
        .then(|| format!("translate({}px, {}px)", pos.x, pos.y))
}

/// Inline style for the glow element: fixed, centered by negative margins,
/// never hit-testable.
pub fn glow_style(z_index: i32) -> String {
    let half = GLOW_SIZE_PX / 2;
    format!(
        "position:fixed;top:0;left:0;pointer-events:none;z-index:{z};\
         width:{s}px;height:{s}px;margin-left:-{h}px;margin-top:-{h}px;border-radius:50%;\
         background:{g};transition:{t};will-change:transform",
        z = z_index,
        s = GLOW_SIZE_PX,
        h = half,
        g = GLOW_GRADIENT,
        t = GLOW_EASING,
    )
}
