use crate::constants::{SKY_WASH_INNER, STAR_HALO};
use crate::effects::sky::{
    nebula_center, star_has_glow, star_look, streak_pose, Star, NEBULA_OPACITY, NEBULA_SIZE,
    NEBULA_STOPS, SHOOTING_STARS, STAR_GLOW_SCALE,
};
use std::f64::consts::TAU;
use web_sys as web;

use super::orbs::{paint_dot_grid, paint_orbs, paint_sweep};
use super::rgba;

/// Repaint the backdrop, back to front: wash, nebula, orbs, dot grid, stars,
/// shooting stars, then the one-shot light sweep.
pub fn paint_sky(
    ctx: &web::CanvasRenderingContext2d,
    width: f64,
    height: f64,
    stars: &[Star],
    elapsed_s: f32,
) {
    ctx.clear_rect(0.0, 0.0, width, height);
    paint_wash(ctx, width, height);
    paint_nebula(ctx, width, height);
    paint_orbs(ctx, width, height, elapsed_s);
    paint_dot_grid(ctx, width, height);

    for star in stars {
        let look = star_look(star, elapsed_s);
        if look.opacity <= 0.0 {
            continue;
        }
        let x = star.pos_pct.x as f64 / 100.0 * width;
        let y = star.pos_pct.y as f64 / 100.0 * height;
        let r = (star.size * look.scale) as f64 / 2.0;

        ctx.save();
        ctx.set_global_alpha(look.opacity as f64);
        if star_has_glow(star) {
            ctx.set_shadow_color(STAR_HALO);
            ctx.set_shadow_blur((star.size * STAR_GLOW_SCALE) as f64);
        }
        ctx.set_fill_style_str(star.tint.css());
        ctx.begin_path();
        _ = ctx.arc(x, y, r, 0.0, TAU);
        ctx.fill();
        ctx.restore();
    }

    for streak in &SHOOTING_STARS {
        let Some(pose) = streak_pose(streak, elapsed_s) else {
            continue;
        };
        if pose.opacity <= 0.0 || pose.stretch <= 0.0 {
            continue;
        }
        let ox = streak.origin_pct.x as f64 / 100.0 * width + pose.offset.x as f64;
        let oy = streak.origin_pct.y as f64 / 100.0 * height + pose.offset.y as f64;
        let len = streak.length as f64 * pose.stretch as f64;
        let x0 = if streak.anchor_right { -len } else { 0.0 };
        let (r, g, b) = streak.tint.rgb();

        ctx.save();
        ctx.set_global_alpha(pose.opacity as f64);
        _ = ctx.translate(ox, oy);
        _ = ctx.rotate((streak.angle_deg as f64).to_radians());
        let grad = ctx.create_linear_gradient(x0, 0.0, x0 + len, 0.0);
        _ = grad.add_color_stop(0.0, &rgba(r, g, b, 0.8));
        _ = grad.add_color_stop(1.0, &rgba(r, g, b, 0.0));
        ctx.set_fill_style_canvas_gradient(&grad);
        ctx.fill_rect(x0, -0.5, len, 1.0);
        ctx.restore();
    }

    paint_sweep(ctx, width, height, elapsed_s);
}

fn paint_wash(ctx: &web::CanvasRenderingContext2d, width: f64, height: f64) {
    let radius = width.max(height) * 0.6;
    if let Ok(grad) = ctx.create_radial_gradient(width / 2.0, 0.0, 0.0, width / 2.0, 0.0, radius) {
        _ = grad.add_color_stop(0.0, SKY_WASH_INNER);
        _ = grad.add_color_stop(1.0, "rgba(15,23,42,0)");
        ctx.set_fill_style_canvas_gradient(&grad);
        ctx.fill_rect(0.0, 0.0, width, height);
    }
}

/// Elliptical radial gradient, squashed from a circle of the ellipse's width.
fn paint_nebula(ctx: &web::CanvasRenderingContext2d, width: f64, height: f64) {
    let c = nebula_center(width as f32, height as f32);
    let rx = NEBULA_SIZE.x as f64 / 2.0;
    let squash = (NEBULA_SIZE.y / NEBULA_SIZE.x) as f64;
    let Ok(grad) = ctx.create_radial_gradient(0.0, 0.0, 0.0, 0.0, 0.0, rx) else {
        return;
    };
    for (offset, (r, g, b, a)) in NEBULA_STOPS {
        _ = grad.add_color_stop(offset, &rgba(r, g, b, a));
    }
    ctx.save();
    ctx.set_global_alpha(NEBULA_OPACITY as f64);
    _ = ctx.translate(c.x as f64, c.y as f64);
    _ = ctx.scale(1.0, squash);
    ctx.set_fill_style_canvas_gradient(&grad);
    ctx.begin_path();
    _ = ctx.arc(0.0, 0.0, rx, 0.0, TAU);
    ctx.fill();
    ctx.restore();
}
