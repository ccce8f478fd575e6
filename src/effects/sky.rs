// Night-sky backdrop: a static starfield with twinkling stars and two
// shooting stars on fixed schedules. Positions are viewport percentages.
use super::motion::{ease_in_out, ease_out, looped_progress, sample};
use glam::Vec2;
use rand::Rng;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StarTint {
    White,
    PaleBlue,
    Blue,
}

impl StarTint {
    pub fn css(self) -> &'static str {
        match self {
            StarTint::White => "#ffffff",
            StarTint::PaleBlue => "#bfdbfe",
            StarTint::Blue => "#93c5fd",
        }
    }

    pub fn rgb(self) -> (u8, u8, u8) {
        match self {
            StarTint::White => (255, 255, 255),
            StarTint::PaleBlue => (191, 219, 254),
            StarTint::Blue => (147, 197, 253),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Twinkle {
    pub period_s: f32,
    pub delay_s: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Star {
    /// Percent of viewport width/height, in [0, 100).
    pub pos_pct: Vec2,
    pub size: f32,
    pub opacity: f32,
    pub tint: StarTint,
    /// `None` for steady stars, which fade in once after `delay_s`.
    pub twinkle: Option<Twinkle>,
    pub delay_s: f32,
}

pub struct StarTier {
    pub count: usize,
    pub size: (f32, f32),
    pub opacity: (f32, f32),
    pub twinkle_chance: f32,
    pub period: (f32, f32),
    pub delay_span: f32,
    pub tint_chance: f32,
    pub tint: StarTint,
}

pub const STAR_TIERS: [StarTier; 3] = [
    StarTier {
        count: 120,
        size: (0.5, 0.7),
        opacity: (0.3, 0.5),
        twinkle_chance: 0.5,
        period: (2.0, 4.0),
        delay_span: 6.0,
        tint_chance: 0.0,
        tint: StarTint::White,
    },
    StarTier {
        count: 60,
        size: (1.2, 0.8),
        opacity: (0.4, 0.6),
        twinkle_chance: 0.6,
        period: (2.0, 4.0),
        delay_span: 6.0,
        tint_chance: 0.2,
        tint: StarTint::PaleBlue,
    },
    StarTier {
        count: 20,
        size: (2.0, 1.0),
        opacity: (0.6, 0.4),
        twinkle_chance: 0.7,
        period: (2.5, 3.0),
        delay_span: 5.0,
        tint_chance: 0.3,
        tint: StarTint::Blue,
    },
];

// Steady stars fade in over this long after a random delay in [0, max)
pub const STEADY_FADE_S: f32 = 1.5;
pub const STEADY_DELAY_MAX_S: f32 = 2.0;

// Stars above this size get a soft halo of `size * STAR_GLOW_SCALE`
pub const STAR_GLOW_MIN_SIZE: f32 = 1.5;
pub const STAR_GLOW_SCALE: f32 = 3.0;

const TWINKLE_OPACITY: [f32; 5] = [1.0, 0.2, 1.0, 0.4, 1.0];
const TWINKLE_SCALE: [f32; 5] = [1.0, 0.7, 1.0, 0.85, 1.0];

pub fn generate_starfield<R: Rng>(rng: &mut R) -> Vec<Star> {
    let total = STAR_TIERS.iter().map(|t| t.count).sum();
    let mut stars = Vec::with_capacity(total);
    for tier in &STAR_TIERS {
        for _ in 0..tier.count {
            let pos_pct = Vec2::new(rng.gen::<f32>() * 100.0, rng.gen::<f32>() * 100.0);
            let size = tier.size.0 + rng.gen::<f32>() * tier.size.1;
            let opacity = tier.opacity.0 + rng.gen::<f32>() * tier.opacity.1;
            let twinkle = (rng.gen::<f32>() < tier.twinkle_chance).then(|| Twinkle {
                period_s: tier.period.0 + rng.gen::<f32>() * tier.period.1,
                delay_s: rng.gen::<f32>() * tier.delay_span,
            });
            let tint = if rng.gen::<f32>() < tier.tint_chance {
                tier.tint
            } else {
                StarTint::White
            };
            let delay_s = match twinkle {
                Some(t) => t.delay_s,
                None => rng.gen::<f32>() * STEADY_DELAY_MAX_S,
            };
            stars.push(Star {
                pos_pct,
                size,
                opacity,
                tint,
                twinkle,
                delay_s,
            });
        }
    }
    stars
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StarLook {
    pub opacity: f32,
    pub scale: f32,
}

/// Appearance of a star `elapsed_s` seconds after the sky was mounted.
pub fn star_look(star: &Star, elapsed_s: f32) -> StarLook {
    match star.twinkle {
        Some(tw) => match looped_progress(elapsed_s, tw.delay_s, tw.period_s, 0.0) {
            Some(t) => StarLook {
                opacity: star.opacity * sample(&TWINKLE_OPACITY, t, ease_in_out),
                scale: sample(&TWINKLE_SCALE, t, ease_in_out),
            },
            None => StarLook {
                opacity: star.opacity,
                scale: 1.0,
            },
        },
        None => {
            let t = ((elapsed_s - star.delay_s) / STEADY_FADE_S).clamp(0.0, 1.0);
            StarLook {
                opacity: star.opacity * ease_in_out(t),
                scale: 1.0,
            }
        }
    }
}

#[inline]
pub fn star_has_glow(star: &Star) -> bool {
    star.size > STAR_GLOW_MIN_SIZE
}

/// A streak that crosses the sky on a repeating schedule.
pub struct ShootingStar {
    pub origin_pct: Vec2,
    /// Anchor the streak at its right end instead of its left.
    pub anchor_right: bool,
    pub length: f32,
    pub angle_deg: f32,
    pub offset_x: [f32; 3],
    pub offset_y: [f32; 3],
    pub stretch: [f32; 3],
    pub duration_s: f32,
    pub repeat_gap_s: f32,
    pub delay_s: f32,
    pub tint: StarTint,
}

pub const SHOOTING_STARS: [ShootingStar; 2] = [
    ShootingStar {
        origin_pct: Vec2::new(10.0, 18.0),
        anchor_right: false,
        length: 100.0,
        angle_deg: 25.0,
        offset_x: [0.0, 300.0, 500.0],
        offset_y: [0.0, 120.0, 200.0],
        stretch: [0.0, 1.0, 0.5],
        duration_s: 3.5,
        repeat_gap_s: 8.0,
        delay_s: 3.0,
        tint: StarTint::White,
    },
    ShootingStar {
        origin_pct: Vec2::new(85.0, 35.0),
        anchor_right: true,
        length: 70.0,
        angle_deg: 155.0,
        offset_x: [0.0, -250.0, -400.0],
        offset_y: [0.0, 100.0, 170.0],
        stretch: [0.0, 1.0, 0.3],
        duration_s: 3.0,
        repeat_gap_s: 12.0,
        delay_s: 7.0,
        tint: StarTint::Blue,
    },
];

const STREAK_OPACITY: [f32; 4] = [0.0, 1.0, 1.0, 0.0];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StreakPose {
    /// Pixel offset from the anchor.
    pub offset: Vec2,
    pub opacity: f32,
    /// Horizontal scale applied to `length` along the streak direction.
    pub stretch: f32,
}

/// Pose of a shooting star, or `None` when it is off schedule.
pub fn streak_pose(s: &ShootingStar, elapsed_s: f32) -> Option<StreakPose> {
    let t = looped_progress(elapsed_s, s.delay_s, s.duration_s, s.repeat_gap_s)?;
    Some(StreakPose {
        offset: Vec2::new(
            sample(&s.offset_x, t, ease_out),
            sample(&s.offset_y, t, ease_out),
        ),
        opacity: sample(&STREAK_OPACITY, t, ease_out),
        stretch: sample(&s.stretch, t, ease_out),
    })
}

// Faint nebula: an ellipse centered horizontally, its top a third of the way down
pub const NEBULA_SIZE: Vec2 = Vec2::new(600.0, 400.0);
pub const NEBULA_OPACITY: f32 = 0.04;
pub const NEBULA_STOPS: [(f32, (u8, u8, u8, f32)); 3] = [
    (0.0, (59, 130, 246, 0.5)),
    (0.5, (139, 92, 246, 0.3)),
    (1.0, (139, 92, 246, 0.0)),
];

pub fn nebula_center(width: f32, height: f32) -> Vec2 {
    Vec2::new(width / 2.0, height / 3.0 + NEBULA_SIZE.y / 2.0)
}
