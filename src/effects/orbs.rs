// Hero backdrop: drifting radial orbs, a faint dot grid and a single light
// sweep across the middle of the viewport shortly after mount.
use super::motion::{ease_in_out, ease_out, once_progress, reversing_progress, sample};
use glam::Vec2;

/// RGBA with alpha in [0, 1].
pub type Rgba = (u8, u8, u8, f32);

pub struct Orb {
    /// Diameter in px.
    pub size: f32,
    /// Top-left corner as a percent of the viewport.
    pub pos_pct: Vec2,
    pub inner: Rgba,
    pub outer: Rgba,
    /// Length of one leg of the back-and-forth loop.
    pub period_s: f32,
    pub delay_s: f32,
}

pub const ORBS: [Orb; 4] = [
    Orb {
        size: 350.0,
        pos_pct: Vec2::new(15.0, 20.0),
        inner: (59, 130, 246, 0.20),
        outer: (37, 99, 235, 0.05),
        period_s: 18.0,
        delay_s: 0.0,
    },
    Orb {
        size: 280.0,
        pos_pct: Vec2::new(75.0, 60.0),
        inner: (45, 212, 191, 0.15),
        outer: (6, 182, 212, 0.05),
        period_s: 22.0,
        delay_s: 2.0,
    },
    Orb {
        size: 200.0,
        pos_pct: Vec2::new(60.0, 15.0),
        inner: (99, 102, 241, 0.15),
        outer: (168, 85, 247, 0.05),
        period_s: 20.0,
        delay_s: 4.0,
    },
    Orb {
        size: 160.0,
        pos_pct: Vec2::new(25.0, 70.0),
        inner: (96, 165, 250, 0.10),
        outer: (45, 212, 191, 0.05),
        period_s: 25.0,
        delay_s: 1.0,
    },
];

pub const ORB_OPACITY: [f32; 5] = [0.0, 0.8, 0.6, 0.9, 0.7];
pub const ORB_SCALE: [f32; 5] = [0.6, 1.0, 0.9, 1.05, 1.0];
pub const ORB_DRIFT_X: [f32; 5] = [0.0, 30.0, -20.0, 15.0, 0.0];
pub const ORB_DRIFT_Y: [f32; 5] = [0.0, -25.0, 15.0, -10.0, 0.0];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbPose {
    pub offset: Vec2,
    pub opacity: f32,
    pub scale: f32,
}

pub fn orb_pose(orb: &Orb, elapsed_s: f32) -> OrbPose {
    let t = reversing_progress(elapsed_s, orb.delay_s, orb.period_s);
    OrbPose {
        offset: Vec2::new(
            sample(&ORB_DRIFT_X, t, ease_in_out),
            sample(&ORB_DRIFT_Y, t, ease_in_out),
        ),
        opacity: sample(&ORB_OPACITY, t, ease_in_out),
        scale: sample(&ORB_SCALE, t, ease_in_out),
    }
}

/// Center of an orb in px for a `width` x `height` viewport, before drift.
pub fn orb_center(orb: &Orb, width: f32, height: f32) -> Vec2 {
    Vec2::new(orb.pos_pct.x / 100.0 * width, orb.pos_pct.y / 100.0 * height)
        + Vec2::splat(orb.size / 2.0)
}

// Dot grid: one dot at the center of every tile
pub const DOT_GRID_SPACING: f32 = 32.0;
pub const DOT_GRID_RADIUS: f32 = 1.0;
pub const DOT_GRID_ALPHA: f32 = 0.03;
pub const DOT_GRID_COLOR: (u8, u8, u8) = (148, 163, 184);

pub fn dot_grid(width: f32, height: f32) -> impl Iterator<Item = Vec2> {
    let cols = (width.max(0.0) / DOT_GRID_SPACING).ceil() as u32;
    let rows = (height.max(0.0) / DOT_GRID_SPACING).ceil() as u32;
    let half = DOT_GRID_SPACING / 2.0;
    (0..rows).flat_map(move |r| {
        (0..cols).map(move |c| {
            Vec2::new(
                half + c as f32 * DOT_GRID_SPACING,
                half + r as f32 * DOT_GRID_SPACING,
            )
        })
    })
}

// Light sweep along the vertical middle, once
pub const SWEEP_DELAY_S: f32 = 0.8;
pub const SWEEP_DURATION_S: f32 = 3.0;
pub const SWEEP_COLOR: Rgba = (59, 130, 246, 0.15);

const SWEEP_OPACITY: [f32; 3] = [0.0, 1.0, 0.0];
const SWEEP_STRETCH: [f32; 3] = [0.0, 1.0, 0.0];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SweepPose {
    pub opacity: f32,
    /// Fraction of the viewport width covered, centered horizontally.
    pub stretch: f32,
}

pub fn sweep_pose(elapsed_s: f32) -> Option<SweepPose> {
    let t = once_progress(elapsed_s, SWEEP_DELAY_S, SWEEP_DURATION_S)?;
    Some(SweepPose {
        opacity: sample(&SWEEP_OPACITY, t, ease_out),
        stretch: sample(&SWEEP_STRETCH, t, ease_out),
    })
}
