// Keyframe interpolation shared by the sparkle and night-sky animations.
//
// Keyframes are evenly spaced over the normalized progress `t` in [0, 1] and
// the easing curve is applied inside each segment.

/// Easing curve applied to a normalized segment progress.
pub type Ease = fn(f32) -> f32;

#[inline]
pub fn linear(t: f32) -> f32 {
    t.clamp(0.0, 1.0)
}

#[inline]
pub fn ease_out(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    let inv = 1.0 - t;
    1.0 - inv * inv
}

#[inline]
pub fn ease_in_out(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        2.0 * t * t
    } else {
        let u = -2.0 * t + 2.0;
        1.0 - u * u / 2.0
    }
}

#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Sample a keyframe track at progress `t`.
///
/// An empty track samples as 0 and a single keyframe is constant.
pub fn sample(track: &[f32], t: f32, ease: Ease) -> f32 {
    match track {
        [] => 0.0,
        [only] => *only,
        _ => {
            let t = t.clamp(0.0, 1.0);
            let spans = (track.len() - 1) as f32;
            let pos = t * spans;
            let i = (pos.floor() as usize).min(track.len() - 2);
            let local = pos - i as f32;
            lerp(track[i], track[i + 1], ease(local))
        }
    }
}

/// Progress of a looping animation that starts after `delay` and repeats every
/// `duration + gap`. Returns `None` while waiting for the first run or during
/// the gap between runs.
pub fn looped_progress(elapsed: f32, delay: f32, duration: f32, gap: f32) -> Option<f32> {
    if duration <= 0.0 || elapsed < delay {
        return None;
    }
    let cycle = duration + gap.max(0.0);
    let local = (elapsed - delay) % cycle;
    (local <= duration).then(|| local / duration)
}

/// Progress of an animation that plays forward, then backward, forever
/// (`duration` per leg). Holds the first keyframe until `delay` has passed.
pub fn reversing_progress(elapsed: f32, delay: f32, duration: f32) -> f32 {
    if duration <= 0.0 || elapsed <= delay {
        return 0.0;
    }
    let legs = (elapsed - delay) / duration;
    let local = legs.fract();
    if (legs.floor() as u64) % 2 == 0 {
        local
    } else {
        1.0 - local
    }
}

/// Progress of a one-shot animation: `None` before it starts or after it ends.
pub fn once_progress(elapsed: f32, delay: f32, duration: f32) -> Option<f32> {
    if duration <= 0.0 || elapsed < delay {
        return None;
    }
    let t = (elapsed - delay) / duration;
    (t <= 1.0).then_some(t)
}
