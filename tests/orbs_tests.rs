// Host-side tests for the hero backdrop: floating orbs, dot grid and light sweep.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod effects {
    pub mod motion {
        include!("../src/effects/motion.rs");
    }
    pub mod orbs {
        include!("../src/effects/orbs.rs");
    }
}

use effects::orbs::*;
use glam::Vec2;

fn close(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-4
}

#[test]
fn orbs_match_layout() {
    let sizes: Vec<f32> = ORBS.iter().map(|o| o.size).collect();
    assert_eq!(sizes, [350.0, 280.0, 200.0, 160.0]);
    let periods: Vec<f32> = ORBS.iter().map(|o| o.period_s).collect();
    assert_eq!(periods, [18.0, 22.0, 20.0, 25.0]);
    let delays: Vec<f32> = ORBS.iter().map(|o| o.delay_s).collect();
    assert_eq!(delays, [0.0, 2.0, 4.0, 1.0]);
    assert_eq!(ORBS[1].pos_pct, Vec2::new(75.0, 60.0));
    // Outer stops are always fainter than the core.
    for orb in &ORBS {
        assert!(orb.outer.3 < orb.inner.3);
    }
}

#[test]
fn orb_starts_on_first_keyframe_during_delay() {
    let orb = &ORBS[2];
    for t in [0.0, 1.0, 3.99] {
        let pose = orb_pose(orb, t);
        assert_eq!(pose.opacity, 0.0);
        assert!(close(pose.scale, 0.6));
        assert_eq!(pose.offset, Vec2::ZERO);
    }
}

#[test]
fn orb_hits_keyframes_on_the_forward_leg() {
    let orb = &ORBS[0];
    // Keyframes sit at quarters of the 18 s leg.
    let pose = orb_pose(orb, 4.5);
    assert!(close(pose.opacity, 0.8));
    assert!(close(pose.scale, 1.0));
    assert!(close(pose.offset.x, 30.0) && close(pose.offset.y, -25.0));

    let pose = orb_pose(orb, 13.5);
    assert!(close(pose.opacity, 0.9));
    assert!(close(pose.scale, 1.05));
    assert!(close(pose.offset.x, 15.0) && close(pose.offset.y, -10.0));

    let pose = orb_pose(orb, 18.0);
    assert!(close(pose.opacity, 0.7));
    assert!(close(pose.offset.x, 0.0) && close(pose.offset.y, 0.0));
}

#[test]
fn orb_retraces_its_path_in_reverse() {
    let orb = &ORBS[1];
    let leg = orb.period_s;
    for frac in [0.1, 0.35, 0.6, 0.85] {
        let fwd = orb_pose(orb, orb.delay_s + frac * leg);
        let back = orb_pose(orb, orb.delay_s + (2.0 - frac) * leg);
        assert!(close(fwd.opacity, back.opacity));
        assert!(close(fwd.scale, back.scale));
        assert!(close(fwd.offset.x, back.offset.x));
        assert!(close(fwd.offset.y, back.offset.y));
    }
    // Two legs in, the orb is back where it began.
    let pose = orb_pose(orb, orb.delay_s + 2.0 * leg);
    assert!(close(pose.opacity, 0.0));
    assert!(close(pose.scale, 0.6));
}

#[test]
fn orb_center_offsets_corner_by_radius() {
    let c = orb_center(&ORBS[0], 1000.0, 800.0);
    assert!(close(c.x, 150.0 + 175.0));
    assert!(close(c.y, 160.0 + 175.0));
}

#[test]
fn dot_grid_covers_viewport_at_tile_centers() {
    let dots: Vec<Vec2> = dot_grid(64.0, 40.0).collect();
    assert_eq!(dots.len(), 4);
    assert_eq!(dots[0], Vec2::new(16.0, 16.0));
    assert_eq!(dots[3], Vec2::new(48.0, 48.0));
    assert_eq!(dot_grid(0.0, 500.0).count(), 0);
    assert!(DOT_GRID_ALPHA > 0.0 && DOT_GRID_ALPHA < 0.1);
}

#[test]
fn sweep_plays_once() {
    assert_eq!(sweep_pose(0.0), None);
    assert_eq!(sweep_pose(SWEEP_DELAY_S - 0.01), None);

    let start = sweep_pose(SWEEP_DELAY_S).unwrap();
    assert_eq!(start.opacity, 0.0);
    assert_eq!(start.stretch, 0.0);

    let mid = sweep_pose(SWEEP_DELAY_S + SWEEP_DURATION_S / 2.0).unwrap();
    assert!(close(mid.opacity, 1.0));
    assert!(close(mid.stretch, 1.0));

    assert_eq!(sweep_pose(SWEEP_DELAY_S + SWEEP_DURATION_S + 0.1), None);
    assert_eq!(sweep_pose(120.0), None);
}
