//! Rect and color value types shared by particles, emitter and renderer

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Floating-point screen rectangle (top-left origin, y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct FRect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl FRect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// Top-left corner
    #[inline]
    pub fn pos(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    /// Move the top-left corner, keeping the size
    #[inline]
    pub fn set_pos(&mut self, pos: Vec2) {
        self.x = pos.x;
        self.y = pos.y;
    }

    /// Bottom-right corner
    #[inline]
    pub fn max(&self) -> Vec2 {
        Vec2::new(self.x + self.w, self.y + self.h)
    }
}

/// 8-bit RGBA color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Subtract `step` from every channel, stopping at zero
    pub fn fade(&mut self, step: u8) {
        self.r = self.r.saturating_sub(step);
        self.g = self.g.saturating_sub(step);
        self.b = self.b.saturating_sub(step);
        self.a = self.a.saturating_sub(step);
    }

    /// Normalized float channels for vertex upload
    pub fn to_f32_array(self) -> [f32; 4] {
        [
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
            self.a as f32 / 255.0,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fade_saturates_per_channel() {
        let mut c = Rgba::new(255, 100, 3, 5);
        c.fade(5);
        assert_eq!(c, Rgba::new(250, 95, 0, 0));
        c.fade(5);
        assert_eq!(c, Rgba::new(245, 90, 0, 0));
    }

    #[test]
    fn test_set_pos_keeps_size() {
        let mut r = FRect::new(0.0, 0.0, 16.0, 8.0);
        r.set_pos(Vec2::new(5.0, -3.0));
        assert_eq!(r, FRect::new(5.0, -3.0, 16.0, 8.0));
        assert_eq!(r.max(), Vec2::new(21.0, 5.0));
    }

    #[test]
    fn test_color_to_f32() {
        let c = Rgba::new(255, 0, 51, 255).to_f32_array();
        assert_eq!(c[0], 1.0);
        assert_eq!(c[1], 0.0);
        assert!((c[2] - 0.2).abs() < 0.001);
        assert_eq!(c[3], 1.0);
    }
}
