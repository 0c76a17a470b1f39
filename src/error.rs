//! Error taxonomy and per-thread diagnostics
//!
//! Every fallible operation returns a `FireError`. The handle-level API in
//! `crate::api` additionally records the message so hosts ported from
//! status-code style code can poll `last_error()`.

use std::cell::RefCell;

use thiserror::Error;

use crate::renderer::RenderError;

/// Errors produced by the fire emitter
#[derive(Debug, Error)]
pub enum FireError {
    /// Particle storage could not be reserved
    #[error("Failed to create fire emitter (capacity {capacity}).")]
    Allocation { capacity: usize },

    /// Requested more slots than the fixed arena holds
    #[error("Capacity {requested} exceeds the maximum of {max} particles.")]
    CapacityExceeded { requested: usize, max: usize },

    /// Missing emitter or render target
    #[error("Invalid argument: {0}.")]
    InvalidArgument(&'static str),

    /// The render target rejected a draw call
    #[error("Failed to draw fire emitter: {0}")]
    Render(#[from] RenderError),

    /// Config file could not be read or parsed
    #[error("Invalid fire config: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, FireError>;

/// Last-error slot. Usable as an explicit context object, and backs the
/// thread-local channel behind `last_error()`.
#[derive(Debug, Default, Clone)]
pub struct Diagnostics {
    last: Option<String>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Overwrite the stored message with `err`
    pub fn record(&mut self, err: &FireError) {
        log::warn!("{err}");
        self.last = Some(err.to_string());
    }

    /// Take the stored message, leaving the slot empty
    pub fn take(&mut self) -> Option<String> {
        self.last.take()
    }

    /// Look at the stored message without consuming it
    pub fn peek(&self) -> Option<&str> {
        self.last.as_deref()
    }
}

thread_local! {
    static THREAD_DIAGNOSTICS: RefCell<Diagnostics> = RefCell::new(Diagnostics::new());
}

/// Record `err` on the calling thread and hand it back for `?`/`Err(..)`
pub(crate) fn record(err: FireError) -> FireError {
    THREAD_DIAGNOSTICS.with(|d| d.borrow_mut().record(&err));
    err
}

/// Most recent failure message on this thread since the previous query
pub fn last_error() -> Option<String> {
    THREAD_DIAGNOSTICS.with(|d| d.borrow_mut().take())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diagnostics_take_and_peek() {
        let mut d = Diagnostics::new();
        assert!(d.peek().is_none());

        d.record(&FireError::InvalidArgument("fire"));
        assert_eq!(d.peek(), Some("Invalid argument: fire."));
        assert_eq!(d.take().as_deref(), Some("Invalid argument: fire."));
        assert!(d.take().is_none());
    }

    #[test]
    fn test_record_overwrites() {
        let mut d = Diagnostics::new();
        d.record(&FireError::InvalidArgument("fire"));
        d.record(&FireError::CapacityExceeded {
            requested: 300,
            max: 256,
        });
        assert_eq!(
            d.take().as_deref(),
            Some("Capacity 300 exceeds the maximum of 256 particles.")
        );
    }

    #[test]
    fn test_thread_local_isolation() {
        let _ = last_error();
        let _ = record(FireError::InvalidArgument("fire"));

        let other = std::thread::spawn(|| {
            let none = last_error();
            let _ = record(FireError::InvalidArgument("renderer"));
            (none, last_error())
        })
        .join()
        .unwrap();

        assert_eq!(other.0, None);
        assert_eq!(other.1.as_deref(), Some("Invalid argument: renderer."));
        assert_eq!(last_error().as_deref(), Some("Invalid argument: fire."));
        assert_eq!(last_error(), None);
    }

    #[test]
    fn test_render_error_converts() {
        let err: FireError = RenderError::Backend("device lost".into()).into();
        assert!(matches!(err, FireError::Render(_)));
        assert_eq!(
            err.to_string(),
            "Failed to draw fire emitter: render backend failed: device lost"
        );
    }
}
