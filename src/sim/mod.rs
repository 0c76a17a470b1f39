//! Deterministic particle simulation
//!
//! Everything here is pure and single-threaded:
//! - Time comes from the caller's tick counter only
//! - Emission is chosen by the caller, never rolled internally
//! - Particles are processed in stable slot order
//! - No rendering backend dependencies (drawing goes through `RenderTarget`)

pub mod emission;
pub mod emitter;
pub mod geom;
pub mod particle;

pub use emission::{Emission, EmissionRoller};
pub use emitter::{FireEmitter, Step};
pub use geom::{FRect, Rgba};
pub use particle::Particle;
