//! Emitter tuning
//!
//! Stored as JSON so a host can tweak the effect without recompiling.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{FireError, Result};
use crate::sim::{EmissionRoller, FRect, FireEmitter, Rgba};

/// Named tunings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum FirePreset {
    /// Wide, slow, long-lived flames
    #[default]
    Campfire,
    /// Narrow, fast column
    Torch,
    /// Sparse drifting sparks
    Ember,
}

impl FirePreset {
    pub fn as_str(&self) -> &'static str {
        match self {
            FirePreset::Campfire => "Campfire",
            FirePreset::Torch => "Torch",
            FirePreset::Ember => "Ember",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "campfire" | "camp" => Some(FirePreset::Campfire),
            "torch" => Some(FirePreset::Torch),
            "ember" | "embers" => Some(FirePreset::Ember),
            _ => None,
        }
    }
}

/// Everything needed to build an emitter and its emission roller
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FireConfig {
    /// Emission rect (x/y are overwritten by the host every step)
    pub base: FRect,
    /// Color of new particles
    pub color: Rgba,
    /// Ticks between simulation steps
    pub ticks_per_change: i64,
    /// Initial particle speed (pixels per step)
    pub default_speed: f32,
    /// Particle slots (max 256)
    pub capacity: usize,
    /// Roller sparsity; roughly one spawn per `frequency` steps
    #[serde(default = "default_frequency")]
    pub frequency: u32,
}

fn default_frequency() -> u32 {
    20
}

impl Default for FireConfig {
    fn default() -> Self {
        Self {
            base: FRect::new(400.0, 300.0, 16.0, 16.0),
            color: Rgba::new(255, 100, 0, 255),
            ticks_per_change: 10,
            default_speed: 5.0,
            capacity: 32,
            frequency: default_frequency(),
        }
    }
}

impl FireConfig {
    /// Config tuned for a preset
    pub fn from_preset(preset: FirePreset) -> Self {
        let mut config = Self::default();
        config.apply_preset(preset);
        config
    }

    /// Overwrite the tuning fields with the preset's values (base rect kept)
    pub fn apply_preset(&mut self, preset: FirePreset) {
        match preset {
            FirePreset::Campfire => {
                self.base.w = 32.0;
                self.base.h = 16.0;
                self.color = Rgba::new(255, 100, 0, 255);
                self.ticks_per_change = 10;
                self.default_speed = 5.0;
                self.capacity = 64;
                self.frequency = 4;
            }
            FirePreset::Torch => {
                self.base.w = 8.0;
                self.base.h = 8.0;
                self.color = Rgba::new(255, 160, 40, 255);
                self.ticks_per_change = 8;
                self.default_speed = 8.0;
                self.capacity = 48;
                self.frequency = 2;
            }
            FirePreset::Ember => {
                self.base.w = 4.0;
                self.base.h = 4.0;
                self.color = Rgba::new(255, 60, 0, 200);
                self.ticks_per_change = 16;
                self.default_speed = 2.0;
                self.capacity = 16;
                self.frequency = 20;
            }
        }
    }

    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| FireError::Config(e.to_string()))
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| FireError::Config(e.to_string()))
    }

    /// Read a config file
    pub fn read(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)
            .map_err(|e| FireError::Config(format!("{}: {e}", path.display())))?;
        Self::from_json(&json)
    }

    /// Read a config file, falling back to defaults when it's missing or bad
    pub fn load(path: &Path) -> Self {
        match Self::read(path) {
            Ok(config) => {
                log::info!("Loaded fire config from {}", path.display());
                config
            }
            Err(e) => {
                log::info!("Using default fire config ({e})");
                Self::default()
            }
        }
    }

    /// Write the config as pretty JSON
    pub fn save(&self, path: &Path) -> Result<()> {
        let json = self.to_json()?;
        std::fs::write(path, json)
            .map_err(|e| FireError::Config(format!("{}: {e}", path.display())))?;
        log::info!("Fire config saved to {}", path.display());
        Ok(())
    }

    /// Build the emitter described by this config
    pub fn build(&self) -> Result<FireEmitter> {
        FireEmitter::new(
            self.base,
            self.color,
            self.ticks_per_change,
            self.default_speed,
            self.capacity,
        )
    }

    /// Emission roller matching this config's frequency
    pub fn roller(&self, seed: u64) -> EmissionRoller {
        EmissionRoller::new(self.frequency, seed)
    }
}
