use super::config::{
    MIN_TRAIL_POINTS, SEGMENT_WIDTH_BASE, SEGMENT_WIDTH_GAIN, TRAIL_LIFETIME_MS,
};
use glam::Vec2;

/// A recorded cursor position. Never mutated after it is stored.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrailPoint {
    pub pos: Vec2,
    pub timestamp: u64,
}

impl TrailPoint {
    pub fn new(pos: Vec2, timestamp: u64) -> Self {
        Self { pos, timestamp }
    }

    #[inline]
    pub fn age_ms(&self, now: u64) -> u64 {
        now.saturating_sub(self.timestamp)
    }
}

/// Time-ordered trail points. Growth is bounded only by pruning.
#[derive(Debug, Default, Clone)]
pub struct TrailStore {
    points: Vec<TrailPoint>,
}

impl TrailStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, point: TrailPoint) {
        self.points.push(point);
    }

    /// Drop every point stamped before `cutoff`, keeping survivor order.
    pub fn prune_older_than(&mut self, cutoff: u64) {
        self.points.retain(|p| p.timestamp >= cutoff);
    }

    /// Drop every point whose age has reached `TRAIL_LIFETIME_MS`.
    pub fn prune_expired(&mut self, now: u64) {
        self.prune_older_than((now + 1).saturating_sub(TRAIL_LIFETIME_MS));
    }

    pub fn points(&self) -> &[TrailPoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn clear(&mut self) {
        self.points.clear();
    }

    /// Whether there are enough live points to paint this frame.
    pub fn is_drawable(&self) -> bool {
        self.points.len() >= MIN_TRAIL_POINTS
    }
}

/// Normalized age of a point in [0, 1].
#[inline]
pub fn age_fraction(now: u64, timestamp: u64) -> f32 {
    let age = now.saturating_sub(timestamp) as f32;
    (age / TRAIL_LIFETIME_MS as f32).clamp(0.0, 1.0)
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmentStyle {
    pub opacity: f32,
    pub width: f32,
}

/// Core pass stroke for a segment whose newer end has normalized age `age`.
#[inline]
pub fn segment_style(age: f32) -> SegmentStyle {
    let age = if age.is_nan() { 1.0 } else { age.clamp(0.0, 1.0) };
    SegmentStyle {
        opacity: (1.0 - age).max(0.0),
        width: SEGMENT_WIDTH_BASE + (1.0 - age) * SEGMENT_WIDTH_GAIN,
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub from: Vec2,
    pub to: Vec2,
    pub style: SegmentStyle,
}

/// Straight segments between consecutive points, each aged by its newer end.
pub fn segments(points: &[TrailPoint], now: u64) -> impl Iterator<Item = Segment> + '_ {
    points.windows(2).map(move |w| Segment {
        from: w[0].pos,
        to: w[1].pos,
        style: segment_style(age_fraction(now, w[1].timestamp)),
    })
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCmd {
    MoveTo(Vec2),
    QuadTo { ctrl: Vec2, to: Vec2 },
    LineTo(Vec2),
}

/// Smoothed curve through the points for the glow pass.
///
/// Every interior point becomes the control of a quadratic ending at the
/// midpoint to its successor; the path closes with a line to the last point.
pub fn glow_path(points: &[TrailPoint]) -> Vec<PathCmd> {
    let Some(first) = points.first() else {
        return Vec::new();
    };
    let mut cmds = Vec::with_capacity(points.len() + 1);
    cmds.push(PathCmd::MoveTo(first.pos));
    for w in points[1..].windows(2) {
        cmds.push(PathCmd::QuadTo {
            ctrl: w[0].pos,
            to: w[0].pos.lerp(w[1].pos, 0.5),
        });
    }
    if let Some(last) = points.last().filter(|_| points.len() > 1) {
        cmds.push(PathCmd::LineTo(last.pos));
    }
    cmds
}
