use super::config::{
    SPARKLE_BATCH_MAX, SPARKLE_DRIFT_X_SPAN, SPARKLE_DRIFT_Y_MIN, SPARKLE_DRIFT_Y_SPAN,
    SPARKLE_RADIUS_MIN, SPARKLE_RADIUS_SPAN, SPARKLE_ROTATION_MAX_DEG, SPARKLE_SIZE_MIN,
    SPARKLE_SIZE_SPAN, SPARKLE_THROTTLE_MS, SPEED_WINDOW, TRAIL_SPEED_THRESHOLD,
};
use super::sparkle::{SparkleBatch, SparkleId, SparkleParticle};
use super::trail::{TrailPoint, TrailStore};
use glam::Vec2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use smallvec::SmallVec;
use std::f32::consts::TAU;

/// Smoothed pointer speed estimate driving the trail gate.
#[derive(Debug, Clone)]
pub struct Sampler {
    last_pos: Vec2,
    speeds: SmallVec<[f32; SPEED_WINDOW + 1]>,
}

impl Default for Sampler {
    fn default() -> Self {
        Self {
            last_pos: Vec2::ZERO,
            speeds: SmallVec::new(),
        }
    }
}

impl Sampler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one pointer position and return the smoothed speed, or `None` if
    /// the position is not finite (nothing is updated in that case).
    pub fn record(&mut self, pos: Vec2) -> Option<f32> {
        if !pos.is_finite() {
            return None;
        }
        let dist = self.last_pos.distance(pos);
        self.last_pos = pos;
        self.speeds.push(dist);
        if self.speeds.len() > SPEED_WINDOW {
            self.speeds.remove(0);
        }
        Some(self.average_speed())
    }

    /// Run the speed gate and append a trail point when it passes.
    pub fn on_move(&mut self, pos: Vec2, now: u64, trail: &mut TrailStore) -> bool {
        match self.record(pos) {
            Some(avg) if avg > TRAIL_SPEED_THRESHOLD => {
                trail.append(TrailPoint::new(pos, now));
                true
            }
            _ => false,
        }
    }

    pub fn average_speed(&self) -> f32 {
        if self.speeds.is_empty() {
            return 0.0;
        }
        self.speeds.iter().sum::<f32>() / self.speeds.len() as f32
    }

    pub fn last_pos(&self) -> Vec2 {
        self.last_pos
    }

    pub fn sample_count(&self) -> usize {
        self.speeds.len()
    }
}

/// Throttled sparkle spawner.
#[derive(Debug, Clone)]
pub struct SparkleEmitter {
    last_emission: Option<u64>,
    next_id: u64,
    rng: StdRng,
}

impl SparkleEmitter {
    pub fn new(rng: StdRng) -> Self {
        Self {
            last_emission: None,
            next_id: 0,
            rng,
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    pub fn last_emission(&self) -> Option<u64> {
        self.last_emission
    }

    /// Emit a batch around `pos` unless the previous batch is younger than
    /// `SPARKLE_THROTTLE_MS`.
    pub fn try_emit(&mut self, pos: Vec2, now: u64) -> Option<SparkleBatch> {
        if !pos.is_finite() {
            return None;
        }
        if let Some(last) = self.last_emission {
            if now.saturating_sub(last) < SPARKLE_THROTTLE_MS {
                return None;
            }
        }
        self.last_emission = Some(now);

        let count = 1 + self.rng.gen_range(0..SPARKLE_BATCH_MAX);
        let batch = (0..count)
            .map(|_| {
                let angle = self.rng.gen::<f32>() * TAU;
                let dist = SPARKLE_RADIUS_MIN + self.rng.gen::<f32>() * SPARKLE_RADIUS_SPAN;
                let id = SparkleId(self.next_id);
                self.next_id += 1;
                SparkleParticle {
                    id,
                    pos: pos + Vec2::from_angle(angle) * dist,
                    size: SPARKLE_SIZE_MIN + self.rng.gen::<f32>() * SPARKLE_SIZE_SPAN,
                    rotation_deg: self.rng.gen::<f32>() * SPARKLE_ROTATION_MAX_DEG,
                    drift: Vec2::new(
                        (self.rng.gen::<f32>() - 0.5) * SPARKLE_DRIFT_X_SPAN,
                        SPARKLE_DRIFT_Y_MIN + self.rng.gen::<f32>() * SPARKLE_DRIFT_Y_SPAN,
                    ),
                    born_at: now,
                }
            })
            .collect();
        Some(batch)
    }
}
