use super::config::{
    SPARKLE_ANIM_MS, SPARKLE_BATCH_MAX, SPARKLE_KEEP, SPARKLE_PEAK_OPACITY, SPARKLE_PEAK_SCALE,
    SPARKLE_SPIN_DEG,
};
use super::motion::{ease_out, sample};
use glam::Vec2;
use smallvec::SmallVec;

/// Identity of a sparkle, unique for the lifetime of its emitter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SparkleId(pub u64);

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SparkleParticle {
    pub id: SparkleId,
    pub pos: Vec2,
    pub size: f32,
    pub rotation_deg: f32,
    pub drift: Vec2,
    pub born_at: u64,
}

pub type SparkleBatch = SmallVec<[SparkleParticle; SPARKLE_BATCH_MAX]>;
pub type SparkleIds = SmallVec<[SparkleId; SPARKLE_BATCH_MAX]>;

/// Live sparkles, oldest first.
#[derive(Debug, Default, Clone)]
pub struct SparkleStore {
    particles: Vec<SparkleParticle>,
}

impl SparkleStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keep the newest `SPARKLE_KEEP` particles, then append `batch`.
    pub fn insert_batch(&mut self, batch: &[SparkleParticle]) {
        if self.particles.len() > SPARKLE_KEEP {
            let excess = self.particles.len() - SPARKLE_KEEP;
            self.particles.drain(..excess);
        }
        self.particles.extend_from_slice(batch);
    }

    /// Remove the particles whose id is in `ids`. Ids already trimmed by the
    /// cap are ignored. Returns how many were removed.
    pub fn remove(&mut self, ids: &[SparkleId]) -> usize {
        let before = self.particles.len();
        self.particles.retain(|p| !ids.contains(&p.id));
        before - self.particles.len()
    }

    pub fn contains(&self, id: SparkleId) -> bool {
        self.particles.iter().any(|p| p.id == id)
    }

    pub fn particles(&self) -> &[SparkleParticle] {
        &self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn clear(&mut self) {
        self.particles.clear();
    }
}

/// Where and how a sparkle is drawn at a given instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SparklePose {
    pub center: Vec2,
    pub opacity: f32,
    pub scale: f32,
    pub rotation_deg: f32,
}

const OPACITY_TRACK: [f32; 3] = [0.0, SPARKLE_PEAK_OPACITY, 0.0];
const SCALE_TRACK: [f32; 3] = [0.0, SPARKLE_PEAK_SCALE, 0.0];

/// Animation progress of a particle in [0, 1].
#[inline]
pub fn sparkle_progress(p: &SparkleParticle, now: u64) -> f32 {
    let age = now.saturating_sub(p.born_at) as f32;
    (age / SPARKLE_ANIM_MS as f32).clamp(0.0, 1.0)
}

pub fn sparkle_pose(p: &SparkleParticle, now: u64) -> SparklePose {
    let t = sparkle_progress(p, now);
    let travel = ease_out(t);
    SparklePose {
        center: p.pos + p.drift * travel,
        opacity: sample(&OPACITY_TRACK, t, ease_out),
        scale: sample(&SCALE_TRACK, t, ease_out),
        rotation_deg: p.rotation_deg + SPARKLE_SPIN_DEG * travel,
    }
}
