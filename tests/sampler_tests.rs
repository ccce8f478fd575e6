// Host-side tests for pointer sampling: the speed gate, the sparkle throttle
// and the combined per-move update.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod effects {
    pub mod config {
        include!("../src/effects/config.rs");
    }
    pub mod motion {
        include!("../src/effects/motion.rs");
    }
    pub mod trail {
        include!("../src/effects/trail.rs");
    }
    pub mod sparkle {
        include!("../src/effects/sparkle.rs");
    }
    pub mod sampler {
        include!("../src/effects/sampler.rs");
    }
    pub mod state {
        include!("../src/effects/state.rs");
    }
}

use effects::config::*;
use effects::sampler::*;
use effects::state::*;
use effects::trail::*;
use glam::Vec2;

fn make_state() -> EffectState {
    EffectState::new(SparkleEmitter::seeded(42))
}

#[test]
fn slow_motion_never_records_trail() {
    let mut sampler = Sampler::new();
    let mut trail = TrailStore::new();
    for i in 1..=50u64 {
        let pos = Vec2::new(i as f32 * 30.0, 0.0);
        assert!(!sampler.on_move(pos, i * 16, &mut trail));
    }
    assert!(trail.is_empty());
    assert!(sampler.average_speed() <= TRAIL_SPEED_THRESHOLD);
}

#[test]
fn fast_swipe_records_points_once_average_exceeds_threshold() {
    let mut sampler = Sampler::new();
    let mut trail = TrailStore::new();
    let moves = [((0.0, 0.0), 0u64), ((100.0, 0.0), 10), ((200.0, 0.0), 20)];
    for ((x, y), t) in moves {
        sampler.on_move(Vec2::new(x, y), t, &mut trail);
    }
    let recorded: Vec<(Vec2, u64)> = trail.points().iter().map(|p| (p.pos, p.timestamp)).collect();
    assert_eq!(
        recorded,
        vec![(Vec2::new(100.0, 0.0), 10), (Vec2::new(200.0, 0.0), 20)]
    );
}

#[test]
fn speed_window_keeps_last_four_samples() {
    let mut sampler = Sampler::new();
    for i in 1..=4 {
        sampler.record(Vec2::new(i as f32 * 100.0, 0.0));
    }
    assert_eq!(sampler.sample_count(), SPEED_WINDOW);
    assert!((sampler.average_speed() - 100.0).abs() < 1e-4);

    // Standing still pushes the fast samples out one by one.
    let still = Vec2::new(400.0, 0.0);
    let expected = [75.0, 50.0, 25.0, 0.0];
    for want in expected {
        let avg = sampler.record(still).unwrap();
        assert!((avg - want).abs() < 1e-4, "expected {want}, got {avg}");
        assert_eq!(sampler.sample_count(), SPEED_WINDOW);
    }
}

#[test]
fn previous_position_updates_even_when_gate_fails() {
    let mut sampler = Sampler::new();
    let mut trail = TrailStore::new();
    sampler.on_move(Vec2::new(3.0, 4.0), 0, &mut trail);
    assert_eq!(sampler.last_pos(), Vec2::new(3.0, 4.0));
    assert!((sampler.average_speed() - 5.0).abs() < 1e-5);
    assert!(trail.is_empty());
}

#[test]
fn non_finite_positions_are_ignored() {
    let mut state = make_state();
    state.on_pointer_move(Vec2::new(10.0, 10.0), 0);
    let samples = state.sampler.sample_count();
    let last = state.sampler.last_pos();
    let sparkles = state.sparkles.len();
    let emitted_at = state.emitter.last_emission();

    for bad in [
        Vec2::new(f32::NAN, 0.0),
        Vec2::new(0.0, f32::INFINITY),
        Vec2::new(f32::NEG_INFINITY, f32::NAN),
    ] {
        let outcome = state.on_pointer_move(bad, 1_000);
        assert_eq!(outcome, MoveOutcome::default());
    }

    assert_eq!(state.sampler.sample_count(), samples);
    assert_eq!(state.sampler.last_pos(), last);
    assert_eq!(state.sparkles.len(), sparkles);
    assert_eq!(state.emitter.last_emission(), emitted_at);
    assert!(state.sampler.record(Vec2::new(f32::NAN, 1.0)).is_none());
}

#[test]
fn burst_inside_one_throttle_window_emits_one_batch() {
    let mut state = make_state();
    let mut batches = 0;
    for i in 0..50u64 {
        let now = 1_000 + i / 5; // 50 moves spread over 10 ms
        let pos = Vec2::new(i as f32, i as f32);
        if state.on_pointer_move(pos, now).sparkles.is_some() {
            batches += 1;
        }
    }
    assert_eq!(batches, 1);
}

#[test]
fn batches_are_never_closer_than_throttle() {
    let mut state = make_state();
    let mut emitted = Vec::new();
    for i in 0..300u64 {
        let now = i * 7;
        if state
            .on_pointer_move(Vec2::new(i as f32, 0.0), now)
            .sparkles
            .is_some()
        {
            emitted.push(now);
        }
    }
    assert!(emitted.len() > 1);
    for pair in emitted.windows(2) {
        assert!(pair[1] - pair[0] >= SPARKLE_THROTTLE_MS);
    }
}

#[test]
fn throttle_boundary_is_inclusive() {
    let mut emitter = SparkleEmitter::seeded(7);
    let p = Vec2::new(50.0, 50.0);
    assert!(emitter.try_emit(p, 0).is_some());
    assert!(emitter.try_emit(p, SPARKLE_THROTTLE_MS - 1).is_none());
    assert!(emitter.try_emit(p, SPARKLE_THROTTLE_MS).is_some());
    assert_eq!(emitter.last_emission(), Some(SPARKLE_THROTTLE_MS));
}

#[test]
fn emitted_particles_fall_within_spawn_ranges() {
    let mut emitter = SparkleEmitter::seeded(1234);
    let origin = Vec2::new(400.0, 300.0);
    let mut last_id = None;
    for step in 0..200u64 {
        let now = step * SPARKLE_THROTTLE_MS;
        let batch = emitter.try_emit(origin, now).expect("throttle window elapsed");
        assert!((1..=SPARKLE_BATCH_MAX).contains(&batch.len()));
        for p in &batch {
            let r = p.pos.distance(origin);
            assert!(r >= SPARKLE_RADIUS_MIN - 1e-3, "radius {r} too small");
            assert!(r <= SPARKLE_RADIUS_MIN + SPARKLE_RADIUS_SPAN + 1e-3, "radius {r} too large");
            assert!(p.size >= 2.0 && p.size <= 5.0);
            assert!(p.rotation_deg >= 0.0 && p.rotation_deg <= 180.0);
            assert!(p.drift.x >= -8.0 && p.drift.x <= 8.0);
            assert!(p.drift.y >= -20.0 && p.drift.y <= -6.0);
            assert_eq!(p.born_at, now);
            if let Some(prev) = last_id {
                assert!(p.id > prev, "ids must be unique and increasing");
            }
            last_id = Some(p.id);
        }
    }
}

#[test]
fn both_batch_sizes_occur() {
    let mut emitter = SparkleEmitter::seeded(99);
    let mut sizes = [false; SPARKLE_BATCH_MAX + 1];
    for step in 0..100u64 {
        if let Some(batch) = emitter.try_emit(Vec2::ZERO, step * SPARKLE_THROTTLE_MS) {
            sizes[batch.len()] = true;
        }
    }
    assert!(sizes[1] && sizes[2]);
}

#[test]
fn move_outcome_reports_inserted_ids() {
    let mut state = make_state();
    let outcome = state.on_pointer_move(Vec2::new(20.0, 20.0), 0);
    let ids = outcome.sparkles.expect("first move emits");
    assert_eq!(ids.len(), state.sparkles.len());
    for id in &ids {
        assert!(state.sparkles.contains(*id));
    }
}

#[test]
fn frame_prune_drops_expired_trail() {
    let mut state = make_state();
    for (i, x) in [0.0, 100.0, 200.0, 300.0].iter().enumerate() {
        state.on_pointer_move(Vec2::new(*x, 0.0), i as u64 * 10);
    }
    assert_eq!(state.trail.len(), 3);
    state.prune(20 + TRAIL_LIFETIME_MS);
    assert_eq!(state.trail.len(), 1);
    state.prune(30 + TRAIL_LIFETIME_MS);
    assert!(state.trail.is_empty());
}
