//! A single recyclable fire particle
//!
//! Particles are passive slots in the emitter's arena. They only change
//! through `spawn` and `decay`, both driven by `FireEmitter::update`.

use serde::{Deserialize, Serialize};

use super::emission::Emission;
use super::geom::{FRect, Rgba};
use crate::consts::{COLOR_DECAY, SPEED_DECAY};

/// One particle slot
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Particle {
    /// Current screen rect
    pub rect: FRect,
    /// Current color (fades every step)
    pub color: Rgba,
    /// Upward speed in pixels per step
    pub speed: f32,
    /// Whether the particle is alive; stale fields otherwise
    pub active: bool,
}

impl Particle {
    /// An inactive slot parked at `rect`
    pub fn idle(rect: FRect, color: Rgba, speed: f32) -> Self {
        Self {
            rect,
            color,
            speed,
            active: false,
        }
    }

    /// Bring the slot to life at `base`, shifted per `emission`
    pub fn spawn(&mut self, base: FRect, color: Rgba, speed: f32, emission: Emission) {
        self.active = true;
        self.speed = speed;
        self.color = color;
        self.rect = base;
        self.rect.x += emission.x_offset(base.w);
    }

    /// Advance one step: rise, slow down, fade.
    ///
    /// Returns `false` when the particle died on this step.
    pub fn decay(&mut self) -> bool {
        if !self.active {
            return false;
        }

        self.rect.y -= self.speed;
        if self.speed >= SPEED_DECAY {
            self.speed -= SPEED_DECAY;
        }
        self.color.fade(COLOR_DECAY);

        if self.color.a < COLOR_DECAY || self.speed < SPEED_DECAY {
            self.active = false;
        }
        self.active
    }
}
