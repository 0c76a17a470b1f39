//! Fire emitter: a fixed arena of particles fed from a moving base rect
//!
//! One accepted step (see `update`) relocates the base, decays every live
//! particle in slot order and then spawns at most one new particle into the
//! first free slot. Steps are gated on the caller's tick counter so the
//! animation speed doesn't depend on frame rate.

use glam::Vec2;

use super::emission::Emission;
use super::geom::{FRect, Rgba};
use super::particle::Particle;
use crate::consts::MAX_PARTICLES;
use crate::error::{FireError, Result};
use crate::renderer::RenderTarget;

/// Outcome of an `update` call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Not enough ticks elapsed; nothing changed
    Gated,
    /// The step ran. `spawned` is the slot that came alive, if any.
    Advanced { spawned: Option<usize> },
}

impl Step {
    pub fn is_gated(&self) -> bool {
        matches!(self, Step::Gated)
    }
}

/// A single fire effect
#[derive(Debug, Clone)]
pub struct FireEmitter {
    /// Emission origin; x/y follow the caller each accepted step
    base: FRect,
    /// Color of every freshly spawned particle
    base_color: Rgba,
    /// Minimum ticks between accepted steps (<= 0 means every call)
    ticks_per_change: i64,
    /// Initial speed of spawned particles
    default_speed: f32,
    /// Live slot count, <= MAX_PARTICLES
    capacity: usize,
    /// Arena of MAX_PARTICLES slots; only the first `capacity` are used
    particles: Vec<Particle>,
    /// Tick of the last accepted step
    last_change_tick: u64,
}

impl FireEmitter {
    /// Create an emitter with `capacity` inactive particles parked at `base`
    pub fn new(
        base: FRect,
        base_color: Rgba,
        ticks_per_change: i64,
        default_speed: f32,
        capacity: usize,
    ) -> Result<Self> {
        if capacity > MAX_PARTICLES {
            return Err(FireError::CapacityExceeded {
                requested: capacity,
                max: MAX_PARTICLES,
            });
        }

        let mut particles = Vec::new();
        particles
            .try_reserve_exact(MAX_PARTICLES)
            .map_err(|_| FireError::Allocation { capacity })?;
        particles.resize(
            MAX_PARTICLES,
            Particle::idle(base, base_color, default_speed),
        );

        log::debug!(
            "Fire emitter created: capacity={}, ticks_per_change={}, speed={}",
            capacity,
            ticks_per_change,
            default_speed
        );

        Ok(Self {
            base,
            base_color,
            ticks_per_change,
            default_speed,
            capacity,
            particles,
            last_change_tick: 0,
        })
    }

    /// Advance the simulation if the tick gate has elapsed.
    ///
    /// On a gated call neither the base position nor any particle changes.
    pub fn update(&mut self, new_pos: Vec2, current_tick: u64, emission: Emission) -> Step {
        // A clock that runs backwards counts as no time elapsed
        let elapsed = current_tick.saturating_sub(self.last_change_tick);
        if i128::from(elapsed) < i128::from(self.ticks_per_change) {
            return Step::Gated;
        }

        self.last_change_tick = current_tick;
        self.base.set_pos(new_pos);

        let live = &mut self.particles[..self.capacity];
        for particle in live.iter_mut() {
            particle.decay();
        }

        let spawned = if emission.spawns() {
            live.iter().position(|p| !p.active)
        } else {
            None
        };
        if let Some(slot) = spawned {
            live[slot].spawn(self.base, self.base_color, self.default_speed, emission);
        }

        Step::Advanced { spawned }
    }

    /// Draw every active particle, then restore the base color on `target`.
    ///
    /// Stops at the first failing call. Never mutates the emitter.
    pub fn draw<R: RenderTarget + ?Sized>(&self, target: &mut R) -> Result<()> {
        for particle in self.particles().iter().filter(|p| p.active) {
            target.set_draw_color(particle.color)?;
            target.fill_rect(particle.rect)?;
        }
        target.set_draw_color(self.base_color)?;
        Ok(())
    }

    pub fn base(&self) -> FRect {
        self.base
    }

    pub fn base_color(&self) -> Rgba {
        self.base_color
    }

    pub fn ticks_per_change(&self) -> i64 {
        self.ticks_per_change
    }

    pub fn default_speed(&self) -> f32 {
        self.default_speed
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn last_change_tick(&self) -> u64 {
        self.last_change_tick
    }

    /// The live slots, in slot order
    pub fn particles(&self) -> &[Particle] {
        &self.particles[..self.capacity]
    }

    /// Number of particles currently alive
    pub fn active_count(&self) -> usize {
        self.particles().iter().filter(|p| p.active).count()
    }
}
