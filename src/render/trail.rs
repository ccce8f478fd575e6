use crate::constants::{
    CORE_PASS_BLUR, CORE_SHADOW_ALPHA, CORE_STROKE_ALPHA, GLOW_PASS_BLUR, GLOW_PASS_SHADOW,
    GLOW_PASS_STROKE, GLOW_PASS_WIDTH,
};
use crate::effects::trail::{glow_path, segments, PathCmd, TrailPoint};
use web_sys as web;

use super::rgba;

/// Paint the live trail. Callers prune first; fewer than three points paints
/// nothing.
pub fn paint_trail(ctx: &web::CanvasRenderingContext2d, points: &[TrailPoint], now: u64) {
    if points.len() < crate::effects::MIN_TRAIL_POINTS {
        return;
    }
    glow_pass(ctx, points);
    core_pass(ctx, points, now);
}

fn glow_pass(ctx: &web::CanvasRenderingContext2d, points: &[TrailPoint]) {
    ctx.save();
    ctx.set_line_cap("round");
    ctx.set_line_join("round");
    ctx.set_shadow_color(GLOW_PASS_SHADOW);
    ctx.set_shadow_blur(GLOW_PASS_BLUR);
    ctx.begin_path();
    for cmd in glow_path(points) {
        match cmd {
            PathCmd::MoveTo(p) => ctx.move_to(p.x as f64, p.y as f64),
            PathCmd::QuadTo { ctrl, to } => {
                ctx.quadratic_curve_to(ctrl.x as f64, ctrl.y as f64, to.x as f64, to.y as f64)
            }
            PathCmd::LineTo(p) => ctx.line_to(p.x as f64, p.y as f64),
        }
    }
    ctx.set_line_width(GLOW_PASS_WIDTH);
    ctx.set_stroke_style_str(GLOW_PASS_STROKE);
    ctx.stroke();
    ctx.restore();
}

// Each segment fades by the age of its newer end, so the tail decays first.
fn core_pass(ctx: &web::CanvasRenderingContext2d, points: &[TrailPoint], now: u64) {
    ctx.save();
    ctx.set_line_cap("round");
    ctx.set_shadow_blur(CORE_PASS_BLUR);
    for seg in segments(points, now) {
        let o = seg.style.opacity;
        ctx.set_line_width(seg.style.width as f64);
        ctx.set_shadow_color(&rgba(147, 197, 253, o * CORE_SHADOW_ALPHA));
        ctx.set_stroke_style_str(&rgba(255, 255, 255, o * CORE_STROKE_ALPHA));
        ctx.begin_path();
        ctx.move_to(seg.from.x as f64, seg.from.y as f64);
        ctx.line_to(seg.to.x as f64, seg.to.y as f64);
        ctx.stroke();
    }
    ctx.restore();
}
