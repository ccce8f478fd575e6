use crate::effects::orbs::{
    dot_grid, orb_center, orb_pose, sweep_pose, DOT_GRID_ALPHA, DOT_GRID_COLOR,
    DOT_GRID_RADIUS, ORBS, SWEEP_COLOR,
};
use std::f64::consts::TAU;
use web_sys as web;

use super::rgba;

// Orbs fade to transparent past this fraction of their radius.
const ORB_SOLID_STOP: f32 = 0.7;

pub(super) fn paint_orbs(
    ctx: &web::CanvasRenderingContext2d,
    width: f64,
    height: f64,
    elapsed_s: f32,
) {
    for orb in &ORBS {
        let pose = orb_pose(orb, elapsed_s);
        let radius = (orb.size * pose.scale / 2.0) as f64;
        if pose.opacity <= 0.0 || radius <= 0.0 {
            continue;
        }
        let c = orb_center(orb, width as f32, height as f32) + pose.offset;
        let (cx, cy) = (c.x as f64, c.y as f64);
        let Ok(grad) = ctx.create_radial_gradient(cx, cy, 0.0, cx, cy, radius) else {
            continue;
        };
        let (r, g, b, a) = orb.inner;
        _ = grad.add_color_stop(0.0, &rgba(r, g, b, a));
        let (r, g, b, a) = orb.outer;
        _ = grad.add_color_stop(ORB_SOLID_STOP, &rgba(r, g, b, a));
        _ = grad.add_color_stop(1.0, &rgba(r, g, b, 0.0));

        ctx.save();
        ctx.set_global_alpha(pose.opacity as f64);
        ctx.set_fill_style_canvas_gradient(&grad);
        ctx.begin_path();
        _ = ctx.arc(cx, cy, radius, 0.0, TAU);
        ctx.fill();
        ctx.restore();
    }
}

pub(super) fn paint_dot_grid(ctx: &web::CanvasRenderingContext2d, width: f64, height: f64) {
    let (r, g, b) = DOT_GRID_COLOR;
    ctx.save();
    ctx.set_global_alpha(DOT_GRID_ALPHA as f64);
    ctx.set_fill_style_str(&rgba(r, g, b, 1.0));
    ctx.begin_path();
    for dot in dot_grid(width as f32, height as f32) {
        let (x, y) = (dot.x as f64, dot.y as f64);
        ctx.move_to(x + DOT_GRID_RADIUS as f64, y);
        _ = ctx.arc(x, y, DOT_GRID_RADIUS as f64, 0.0, TAU);
    }
    ctx.fill();
    ctx.restore();
}

/// Horizontal band through the vertical middle, stretched from the center.
pub(super) fn paint_sweep(
    ctx: &web::CanvasRenderingContext2d,
    width: f64,
    height: f64,
    elapsed_s: f32,
) {
    let Some(pose) = sweep_pose(elapsed_s) else {
        return;
    };
    if pose.opacity <= 0.0 || pose.stretch <= 0.0 {
        return;
    }
    let len = width * pose.stretch as f64;
    let x0 = (width - len) / 2.0;
    let y = height / 2.0;
    let (r, g, b, a) = SWEEP_COLOR;

    ctx.save();
    ctx.set_global_alpha(pose.opacity as f64);
    let grad = ctx.create_linear_gradient(x0, 0.0, x0 + len, 0.0);
    _ = grad.add_color_stop(0.0, &rgba(r, g, b, 0.0));
    _ = grad.add_color_stop(0.5, &rgba(r, g, b, a));
    _ = grad.add_color_stop(1.0, &rgba(r, g, b, 0.0));
    ctx.set_fill_style_canvas_gradient(&grad);
    ctx.fill_rect(x0, y - 0.5, len, 1.0);
    ctx.restore();
}
