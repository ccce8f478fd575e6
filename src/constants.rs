/// Page wiring and paint styling for the browser layer.
///
/// Timing and geometry tuning lives in `effects::config`; these values only
/// decide where things are mounted and how they look.
// Element ids (reused when the page already provides them)
pub const TRAIL_CANVAS_ID: &str = "cursor-trail";
pub const SKY_CANVAS_ID: &str = "night-sky";
pub const GLOW_ELEMENT_ID: &str = "cursor-glow";

// Stacking: sky behind the page (negative), trail and glow over it
pub const SKY_Z_INDEX: i32 = -1;
pub const TRAIL_Z_INDEX: i32 = 9998;
pub const GLOW_Z_INDEX: i32 = 9999;

// Glow pass: one wide, faint, blurred curve through all live points
pub const GLOW_PASS_WIDTH: f64 = 6.0;
pub const GLOW_PASS_BLUR: f64 = 18.0;
pub const GLOW_PASS_STROKE: &str = "rgba(255,255,255,0.06)";
pub const GLOW_PASS_SHADOW: &str = "rgba(147,197,253,0.35)";

// Core pass: per-segment stroke alpha = opacity * CORE_STROKE_ALPHA
pub const CORE_PASS_BLUR: f64 = 10.0;
pub const CORE_STROKE_ALPHA: f32 = 0.65;
pub const CORE_SHADOW_ALPHA: f32 = 0.5;

// Sparkle star body and halos
pub const SPARKLE_FILL: &str = "#ffffff";
pub const SPARKLE_INNER_HALO: &str = "rgba(147,197,253,0.6)";
pub const SPARKLE_OUTER_HALO: &str = "rgba(147,197,253,0.2)";
pub const SPARKLE_INNER_HALO_SCALE: f64 = 2.0;
pub const SPARKLE_OUTER_HALO_SCALE: f64 = 4.0;

// Sky
pub const STAR_HALO: &str = "rgba(255,255,255,0.3)";
pub const SKY_WASH_INNER: &str = "rgba(15,23,42,0.3)";
