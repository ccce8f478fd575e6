pub mod config;
pub mod glow;
pub mod motion;
pub mod orbs;
pub mod sampler;
pub mod sky;
pub mod sparkle;
pub mod state;
pub mod trail;

pub use config::*;
pub use sampler::SparkleEmitter;
pub use sky::{generate_starfield, Star};
pub use sparkle::SparkleIds;
pub use state::EffectState;
