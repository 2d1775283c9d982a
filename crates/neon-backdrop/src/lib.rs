//! Vello-powered animated backdrop engine
//!
//! Provides the eight procedural background patterns, the single-run
//! animation scheduler, and the theme controller that rotates through the
//! shuffled theme registry.
//!
//! ## Architecture
//!
//! Each pattern implements [`PatternRenderer`] and redraws the full surface
//! into a shared vello scene once per tick. The [`Scheduler`] guarantees at
//! most one pattern run is active at a time: starting a new pattern cancels
//! the previous run before the new pattern's first frame. The
//! [`ThemeController`] owns the active theme index and drives the scheduler
//! on every advance/retreat.
//!
//! Everything here is single-threaded and frame-driven; the embedding calls
//! `tick` once per display-refresh opportunity.

pub mod controller;
pub mod patterns;
pub mod rng;
pub mod scheduler;

pub use controller::ThemeController;
pub use patterns::PatternRenderer;
pub use rng::Rng;
pub use scheduler::{RunToken, Scheduler};

/// Pixel dimensions of the render target
///
/// Owned by the scheduler and kept equal to the window's inner size; every
/// renderer reads it live each tick so resizes take effect on the next frame
/// without a restart.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Larger of the two dimensions
    pub fn max_dim(&self) -> f64 {
        self.width.max(self.height)
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 1.0,
            height: 1.0,
        }
    }
}
