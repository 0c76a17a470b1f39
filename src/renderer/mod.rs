//! Rendering collaborator
//!
//! The emitter only needs two primitives from a renderer: set the draw
//! color and fill a rect with it. Hosts implement `RenderTarget` over their
//! own backend; `QuadBatch` is a ready-made CPU batcher for GPU upload.

pub mod quad_batch;
pub mod vertex;

pub use quad_batch::{QuadBatch, VERTICES_PER_RECT};
pub use vertex::Vertex;

use thiserror::Error;

use crate::sim::{FRect, Rgba};

/// Failure reported by a render target
#[derive(Debug, Error)]
pub enum RenderError {
    /// The host backend refused the call
    #[error("render backend failed: {0}")]
    Backend(String),

    /// A bounded batch ran out of room
    #[error("quad batch is full ({limit} rects)")]
    BatchFull { limit: usize },
}

/// Minimal immediate-mode 2D target
pub trait RenderTarget {
    /// Set the color used by subsequent fills
    fn set_draw_color(&mut self, color: Rgba) -> Result<(), RenderError>;

    /// Fill `rect` with the current draw color
    fn fill_rect(&mut self, rect: FRect) -> Result<(), RenderError>;
}

impl<T: RenderTarget + ?Sized> RenderTarget for &mut T {
    fn set_draw_color(&mut self, color: Rgba) -> Result<(), RenderError> {
        (**self).set_draw_color(color)
    }

    fn fill_rect(&mut self, rect: FRect) -> Result<(), RenderError> {
        (**self).fill_rect(rect)
    }
}
