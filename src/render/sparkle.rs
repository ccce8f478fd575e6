use crate::constants::{
    SPARKLE_FILL, SPARKLE_INNER_HALO, SPARKLE_INNER_HALO_SCALE, SPARKLE_OUTER_HALO,
    SPARKLE_OUTER_HALO_SCALE,
};
use crate::effects::sparkle::{sparkle_pose, SparkleParticle};
use std::f64::consts::FRAC_PI_2;
use web_sys as web;

/// Draw every live sparkle as a four-point star: two squares a quarter turn
/// apart, each with its own halo.
pub fn paint_sparkles(ctx: &web::CanvasRenderingContext2d, particles: &[SparkleParticle], now: u64) {
    for p in particles {
        let pose = sparkle_pose(p, now);
        if pose.opacity <= 0.0 || pose.scale <= 0.0 {
            continue;
        }
        let size = p.size as f64;
        let half = size / 2.0;

        ctx.save();
        ctx.set_global_alpha(pose.opacity as f64);
        _ = ctx.translate(pose.center.x as f64 + half, pose.center.y as f64 + half);
        _ = ctx.rotate((pose.rotation_deg as f64).to_radians());
        _ = ctx.scale(pose.scale as f64, pose.scale as f64);
        ctx.set_fill_style_str(SPARKLE_FILL);

        ctx.set_shadow_color(SPARKLE_OUTER_HALO);
        ctx.set_shadow_blur(size * SPARKLE_OUTER_HALO_SCALE);
        ctx.fill_rect(-half, -half, size, size);
        ctx.set_shadow_color(SPARKLE_INNER_HALO);
        ctx.set_shadow_blur(size * SPARKLE_INNER_HALO_SCALE);
        ctx.fill_rect(-half, -half, size, size);

        _ = ctx.rotate(FRAC_PI_2);
        ctx.fill_rect(-half, -half, size, size);
        ctx.restore();
    }
}
