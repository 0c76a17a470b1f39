//! CPU-side rect batcher
//!
//! Turns `fill_rect` calls into triangle-list vertices in the current draw
//! color. The host uploads `as_bytes()` once per frame and clears.

use glam::Vec2;

use super::vertex::Vertex;
use super::{RenderError, RenderTarget};
use crate::sim::{FRect, Rgba};

/// Vertices emitted per filled rect (two triangles)
pub const VERTICES_PER_RECT: usize = 6;

/// Accumulates filled rects as a triangle list
#[derive(Debug, Clone, Default)]
pub struct QuadBatch {
    vertices: Vec<Vertex>,
    draw_color: Rgba,
    /// Optional cap on vertex count; `None` grows freely
    max_vertices: Option<usize>,
}

impl QuadBatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Batch that refuses to hold more than `max_rects` rects
    pub fn with_rect_limit(max_rects: usize) -> Self {
        let max_vertices = max_rects * VERTICES_PER_RECT;
        Self {
            vertices: Vec::with_capacity(max_vertices),
            draw_color: Rgba::default(),
            max_vertices: Some(max_vertices),
        }
    }

    /// Drop all vertices, keeping the draw color
    pub fn clear(&mut self) {
        self.vertices.clear();
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// Number of rects batched so far
    pub fn rect_count(&self) -> usize {
        self.vertices.len() / VERTICES_PER_RECT
    }

    /// Current draw color
    pub fn draw_color(&self) -> Rgba {
        self.draw_color
    }

    /// Raw vertex bytes for buffer upload
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }
}

impl RenderTarget for QuadBatch {
    fn set_draw_color(&mut self, color: Rgba) -> Result<(), RenderError> {
        self.draw_color = color;
        Ok(())
    }

    fn fill_rect(&mut self, rect: FRect) -> Result<(), RenderError> {
        if let Some(limit) = self.max_vertices {
            if self.vertices.len() + VERTICES_PER_RECT > limit {
                return Err(RenderError::BatchFull {
                    limit: limit / VERTICES_PER_RECT,
                });
            }
        }

        let color = self.draw_color.to_f32_array();
        let min = rect.pos();
        let max = rect.max();
        let tr = Vec2::new(max.x, min.y);
        let bl = Vec2::new(min.x, max.y);

        // Two triangles
        self.vertices.push(Vertex::new(min.x, min.y, color));
        self.vertices.push(Vertex::new(tr.x, tr.y, color));
        self.vertices.push(Vertex::new(bl.x, bl.y, color));

        self.vertices.push(Vertex::new(bl.x, bl.y, color));
        self.vertices.push(Vertex::new(tr.x, tr.y, color));
        self.vertices.push(Vertex::new(max.x, max.y, color));
        Ok(())
    }
}
