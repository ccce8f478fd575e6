// Host-side tests for tuning constants, page wiring constants and the glow
// element styling.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod config {
    include!("../src/effects/config.rs");
}
mod constants {
    include!("../src/constants.rs");
}
mod glow {
    include!("../src/effects/glow.rs");
}

use config::*;
use constants::*;
use glam::Vec2;
use glow::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn timing_constants_are_consistent() {
    assert!(TRAIL_LIFETIME_MS > 0);
    assert!(SPARKLE_THROTTLE_MS > 0);
    // Several batches overlap on screen at any moment.
    assert!(SPARKLE_LIFETIME_MS > SPARKLE_THROTTLE_MS);
    // The fade and the removal timer agree.
    assert_eq!(SPARKLE_ANIM_MS, SPARKLE_LIFETIME_MS);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn gate_and_spawn_constants_are_sane() {
    assert!(TRAIL_SPEED_THRESHOLD > 0.0);
    assert!(SPEED_WINDOW >= 1);
    assert!(MIN_TRAIL_POINTS >= 2);
    assert!(SPARKLE_KEEP > 0);
    assert!(SPARKLE_BATCH_MAX >= 1);
    assert!(SPARKLE_RADIUS_MIN > 0.0 && SPARKLE_RADIUS_SPAN > 0.0);
    assert!(SPARKLE_SIZE_MIN > 0.0);
    // Drift always points up.
    assert!(SPARKLE_DRIFT_Y_MIN + SPARKLE_DRIFT_Y_SPAN < 0.0);
}

#[test]
fn segment_width_spans_two_to_four_and_a_half() {
    assert_eq!(SEGMENT_WIDTH_BASE, 2.0);
    assert_eq!(SEGMENT_WIDTH_BASE + SEGMENT_WIDTH_GAIN, 4.5);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn layers_stack_in_order() {
    assert!(SKY_Z_INDEX < TRAIL_Z_INDEX);
    assert!(TRAIL_Z_INDEX < GLOW_Z_INDEX);
    assert_ne!(TRAIL_CANVAS_ID, SKY_CANVAS_ID);
    assert_ne!(TRAIL_CANVAS_ID, GLOW_ELEMENT_ID);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn sky_sits_behind_page_content() {
    // Canvases are appended after the page's own nodes, so at z-index 0 or
    // above the sky would paint over non-positioned content.
    assert!(SKY_Z_INDEX < 0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn paint_alphas_are_fractions() {
    assert!(CORE_STROKE_ALPHA > 0.0 && CORE_STROKE_ALPHA <= 1.0);
    assert!(CORE_SHADOW_ALPHA > 0.0 && CORE_SHADOW_ALPHA <= 1.0);
    assert!(SPARKLE_OUTER_HALO_SCALE > SPARKLE_INNER_HALO_SCALE);
    assert!(GLOW_PASS_WIDTH > 0.0);
}

#[test]
fn glow_transform_tracks_pointer() {
    assert_eq!(
        glow_transform(Vec2::new(12.5, 40.0)).as_deref(),
        Some("translate(12.5px, 40px)")
    );
    assert_eq!(glow_transform(Vec2::new(f32::NAN, 1.0)), None);
    assert_eq!(glow_transform(Vec2::new(1.0, f32::INFINITY)), None);
}

#[test]
fn glow_style_is_centered_and_inert() {
    let style = glow_style(GLOW_Z_INDEX);
    assert!(style.contains("pointer-events:none"));
    assert!(style.contains("position:fixed"));
    assert!(style.contains("z-index:9999"));
    assert!(style.contains("width:220px"));
    assert!(style.contains("margin-left:-110px"));
    assert!(style.contains("0.15s"));
}
