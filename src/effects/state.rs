use super::sampler::{Sampler, SparkleEmitter};
use super::sparkle::{SparkleIds, SparkleStore};
use super::trail::TrailStore;
use glam::Vec2;

/// What a single pointer move changed.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct MoveOutcome {
    pub trail_point: bool,
    /// Ids of the batch just inserted; the caller owns scheduling their removal.
    pub sparkles: Option<SparkleIds>,
}

/// Trail and sparkle state owned by one mounted effect.
///
/// Pointer moves are the only writer of new points and particles; the frame
/// loop prunes the trail and removal timers drop particles.
#[derive(Debug, Clone)]
pub struct EffectState {
    pub sampler: Sampler,
    pub emitter: SparkleEmitter,
    pub trail: TrailStore,
    pub sparkles: SparkleStore,
}

impl EffectState {
    pub fn new(emitter: SparkleEmitter) -> Self {
        Self {
            sampler: Sampler::new(),
            emitter,
            trail: TrailStore::new(),
            sparkles: SparkleStore::new(),
        }
    }

    pub fn on_pointer_move(&mut self, pos: Vec2, now: u64) -> MoveOutcome {
        if !pos.is_finite() {
            return MoveOutcome::default();
        }
        let trail_point = self.sampler.on_move(pos, now, &mut self.trail);
        let sparkles: Option<SparkleIds> = self.emitter.try_emit(pos, now).map(|batch| {
            self.sparkles.insert_batch(&batch);
            batch.iter().map(|p| p.id).collect()
        });
        MoveOutcome {
            trail_point,
            sparkles,
        }
    }

    /// Frame-time trail maintenance.
    pub fn prune(&mut self, now: u64) {
        self.trail.prune_expired(now);
    }
}
