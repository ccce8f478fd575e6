/// Cursor trail and sparkle tuning.
///
/// All values are fixed at compile time. Distances are CSS pixels, times are
/// milliseconds on the same wall clock the pointer handler reads.
// Smoothed pixel distance per pointer sample needed before the trail records
pub const TRAIL_SPEED_THRESHOLD: f32 = 35.0;

// Age at which a trail point is fully faded and pruned
pub const TRAIL_LIFETIME_MS: u64 = 350;

// Minimum spacing between sparkle batches
pub const SPARKLE_THROTTLE_MS: u64 = 90;

// Delay between a batch being emitted and its removal from the store
pub const SPARKLE_LIFETIME_MS: u64 = 600;

// Rolling window of pointer-travel samples used for the speed estimate
pub const SPEED_WINDOW: usize = 4;

// Live trail points required before anything is painted
pub const MIN_TRAIL_POINTS: usize = 3;

// Core pass segment width: base + (1 - age) * gain
pub const SEGMENT_WIDTH_BASE: f32 = 2.0;
pub const SEGMENT_WIDTH_GAIN: f32 = 2.5;

// Pre-existing sparkles kept when a new batch arrives (FIFO cap)
pub const SPARKLE_KEEP: usize = 12;

// Batch size is 1 + floor(rand * SPARKLE_BATCH_MAX)
pub const SPARKLE_BATCH_MAX: usize = 2;

// Spawn ring around the pointer
pub const SPARKLE_RADIUS_MIN: f32 = 10.0;
pub const SPARKLE_RADIUS_SPAN: f32 = 24.0;

// Particle size range (px)
pub const SPARKLE_SIZE_MIN: f32 = 2.0;
pub const SPARKLE_SIZE_SPAN: f32 = 3.0;

// Initial rotation in [0, max) degrees
pub const SPARKLE_ROTATION_MAX_DEG: f32 = 180.0;

// Drift applied over the animation; vertical drift always points up
pub const SPARKLE_DRIFT_X_SPAN: f32 = 16.0;
pub const SPARKLE_DRIFT_Y_MIN: f32 = -20.0;
pub const SPARKLE_DRIFT_Y_SPAN: f32 = 14.0;

// The fade runs for the whole logical lifetime so nothing lingers invisibly
pub const SPARKLE_ANIM_MS: u64 = SPARKLE_LIFETIME_MS;
pub const SPARKLE_SPIN_DEG: f32 = 90.0;
pub const SPARKLE_PEAK_OPACITY: f32 = 0.9;
pub const SPARKLE_PEAK_SCALE: f32 = 1.2;
