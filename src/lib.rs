//! Fire Emitter - a fixed-capacity particle fire effect
//!
//! Core modules:
//! - `sim`: Deterministic particle simulation (emitter, particles, emission)
//! - `renderer`: Render target trait and a CPU quad batcher
//! - `api`: Handle-style create/update/draw/destroy with `last_error()`
//! - `config`: Serializable emitter tuning and presets
//! - `error`: Error types and per-thread diagnostics

pub mod api;
pub mod config;
pub mod error;
pub mod renderer;
pub mod sim;

pub use config::{FireConfig, FirePreset};
pub use error::{Diagnostics, FireError, last_error};
pub use renderer::{QuadBatch, RenderError, RenderTarget};
pub use sim::{Emission, EmissionRoller, FRect, FireEmitter, Particle, Rgba, Step};

/// Simulation constants
pub mod consts {
    /// Size of the particle arena; no emitter may ask for more slots
    pub const MAX_PARTICLES: usize = 256;

    /// Speed lost by a particle on every accepted step
    pub const SPEED_DECAY: f32 = 0.1;

    /// Amount subtracted from each color channel on every accepted step
    pub const COLOR_DECAY: u8 = 5;
}
