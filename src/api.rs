//! Handle-level operations
//!
//! Thin wrappers over `FireEmitter` for hosts that pass emitters and render
//! targets around as optional handles. Absent handles are reported as
//! `InvalidArgument` instead of panicking, and every failure is also
//! recorded for `last_error()` on the calling thread.

use glam::Vec2;

use crate::error::{self, FireError, Result};
use crate::renderer::RenderTarget;
use crate::sim::{Emission, FRect, FireEmitter, Rgba};

pub use crate::error::last_error;

/// Create an emitter, recording the reason on failure
pub fn create_fire(
    base: FRect,
    base_color: Rgba,
    ticks_per_change: i64,
    default_speed: f32,
    capacity: usize,
) -> Result<FireEmitter> {
    FireEmitter::new(base, base_color, ticks_per_change, default_speed, capacity)
        .map_err(error::record)
}

/// Advance `fire` one step (or not, if the tick gate hasn't elapsed)
pub fn update_fire(
    fire: Option<&mut FireEmitter>,
    new_pos: Vec2,
    current_tick: u64,
    emission: Emission,
) -> Result<()> {
    let fire = fire.ok_or_else(|| error::record(FireError::InvalidArgument("fire")))?;
    fire.update(new_pos, current_tick, emission);
    Ok(())
}

/// Draw `fire` onto `target`
pub fn draw_fire(fire: Option<&FireEmitter>, target: Option<&mut dyn RenderTarget>) -> Result<()> {
    let fire = fire.ok_or_else(|| error::record(FireError::InvalidArgument("fire")))?;
    let target =
        target.ok_or_else(|| error::record(FireError::InvalidArgument("render target")))?;
    fire.draw(target).map_err(error::record)
}

/// Release `fire`. Passing `None` is a no-op.
pub fn destroy_fire(fire: Option<FireEmitter>) {
    if let Some(fire) = fire {
        log::debug!(
            "Fire emitter destroyed ({} particles active)",
            fire.active_count()
        );
        drop(fire);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::MAX_PARTICLES;
    use crate::renderer::{QuadBatch, RenderError};

    const BASE: FRect = FRect::new(400.0, 300.0, 16.0, 16.0);
    const COLOR: Rgba = Rgba::new(255, 100, 0, 255);

    struct Broken;

    impl RenderTarget for Broken {
        fn set_draw_color(&mut self, _: Rgba) -> std::result::Result<(), RenderError> {
            Err(RenderError::Backend("no device".into()))
        }

        fn fill_rect(&mut self, _: FRect) -> std::result::Result<(), RenderError> {
            Err(RenderError::Backend("no device".into()))
        }
    }

    #[test]
    fn test_full_cycle() {
        let _ = last_error();
        let mut fire = create_fire(BASE, COLOR, 10, 5.0, 32).unwrap();
        let mut batch = QuadBatch::new();

        for frame in 1..=20u64 {
            update_fire(
                Some(&mut fire),
                Vec2::new(100.0, 100.0),
                frame * 16,
                Emission::Middle,
            )
            .unwrap();
            batch.clear();
            draw_fire(Some(&fire), Some(&mut batch)).unwrap();
        }

        assert_eq!(batch.rect_count(), fire.active_count());
        assert_eq!(batch.draw_color(), COLOR);
        assert_eq!(last_error(), None);
        destroy_fire(Some(fire));
    }

    #[test]
    fn test_update_without_fire() {
        let _ = last_error();
        let err = update_fire(None, Vec2::ZERO, 0, Emission::Middle).unwrap_err();
        assert!(matches!(err, FireError::InvalidArgument("fire")));
        assert_eq!(last_error().as_deref(), Some("Invalid argument: fire."));
        assert_eq!(last_error(), None);
    }

    #[test]
    fn test_draw_without_target() {
        let _ = last_error();
        let fire = create_fire(BASE, COLOR, 10, 5.0, 4).unwrap();
        let err = draw_fire(Some(&fire), None).unwrap_err();
        assert!(matches!(err, FireError::InvalidArgument("render target")));
        assert!(last_error().is_some());

        let mut batch = QuadBatch::new();
        assert!(draw_fire(None, Some(&mut batch)).is_err());
        assert_eq!(last_error().as_deref(), Some("Invalid argument: fire."));
    }

    #[test]
    fn test_draw_backend_failure_is_recorded() {
        let _ = last_error();
        let fire = create_fire(BASE, COLOR, 10, 5.0, 4).unwrap();
        let err = draw_fire(Some(&fire), Some(&mut Broken)).unwrap_err();
        assert!(matches!(err, FireError::Render(RenderError::Backend(_))));
        assert_eq!(
            last_error().as_deref(),
            Some("Failed to draw fire emitter: render backend failed: no device")
        );
    }

    #[test]
    fn test_create_failure_is_recorded() {
        let _ = last_error();
        assert!(create_fire(BASE, COLOR, 10, 5.0, MAX_PARTICLES + 44).is_err());
        assert_eq!(
            last_error().as_deref(),
            Some("Capacity 300 exceeds the maximum of 256 particles.")
        );
    }

    #[test]
    fn test_success_does_not_clear_error() {
        let _ = last_error();
        let _ = update_fire(None, Vec2::ZERO, 0, Emission::None);
        let mut fire = create_fire(BASE, COLOR, 10, 5.0, 4).unwrap();
        update_fire(Some(&mut fire), Vec2::ZERO, 10, Emission::None).unwrap();
        assert_eq!(last_error().as_deref(), Some("Invalid argument: fire."));
    }

    #[test]
    fn test_destroy_none_is_noop() {
        destroy_fire(None);
    }
}
