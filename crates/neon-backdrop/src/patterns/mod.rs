//! Backdrop pattern renderers
//!
//! One module per pattern. Each renderer owns its private run state,
//! advances it by one fixed logical step per tick, then redraws the whole
//! surface. Palette colors and viewport size are read live on every tick;
//! neither is cached at start.

pub mod aurora;
pub mod galaxy;
pub mod matrix;
pub mod orbits;
pub mod particles;
pub mod plasma;
pub mod stars;
pub mod waves;

pub use aurora::Aurora;
pub use galaxy::Galaxy;
pub use matrix::MatrixRain;
pub use orbits::Orbits;
pub use particles::Particles;
pub use plasma::Plasma;
pub use stars::Starfield;
pub use waves::Waves;

use vello::Scene;
use vello::kurbo::{Affine, BezPath, Circle, Point, Stroke};
use vello::peniko::{Brush, Fill};

use neon_theme::{Palette, Pattern};

use crate::{Rng, Viewport};

/// One procedural background animation
///
/// Constructed with fresh run state at start time; superseded runs are
/// simply dropped. `step` advances internal state deterministically from the
/// previous state (no wall-clock delta), `render` redraws the full surface.
pub trait PatternRenderer {
    /// Which pattern this renderer implements
    fn pattern(&self) -> Pattern;

    /// Advance run state by one logical step
    fn step(&mut self, viewport: Viewport);

    /// Redraw the entire surface for the current state
    fn render(&self, scene: &mut Scene, palette: &Palette, viewport: Viewport);
}

/// Construct the renderer for a pattern with fresh run state
pub fn build(pattern: Pattern, viewport: Viewport, rng: Rng) -> Box<dyn PatternRenderer> {
    match pattern {
        Pattern::Stars => Box::new(Starfield::new(viewport, rng)),
        Pattern::Waves => Box::new(Waves::new()),
        Pattern::Orbits => Box::new(Orbits::new()),
        Pattern::Particles => Box::new(Particles::new(viewport, rng)),
        Pattern::Matrix => Box::new(MatrixRain::new(viewport, rng)),
        Pattern::Aurora => Box::new(Aurora::new()),
        Pattern::Galaxy => Box::new(Galaxy::new(viewport, rng)),
        Pattern::Plasma => Box::new(Plasma::new()),
    }
}

/// Convert a palette color to a vello color
pub(crate) fn to_vello(color: neon_theme::Color) -> vello::peniko::Color {
    vello::peniko::Color::from_rgba8(color.r, color.g, color.b, color.a)
}

/// Fill a circle with a layered soft glow around it
///
/// Emulates a blurred drop shadow with three concentric low-alpha rings, the
/// way the rest of the drawing code fakes blur without a filter pipeline.
pub(crate) fn fill_glow_circle(
    scene: &mut Scene,
    center: Point,
    radius: f64,
    color: neon_theme::Color,
    glow_radius: f64,
) {
    if glow_radius > 0.0 {
        let glow_layers = 3;
        for i in (0..glow_layers).rev() {
            let t = (i + 1) as f64 / glow_layers as f64;
            let glow_r = radius + glow_radius * t;
            let glow_alpha = (color.a as f64 * (1.0 - t) * 0.4) as u8;
            if glow_alpha == 0 {
                continue;
            }
            let circle = Circle::new(center, glow_r);
            scene.fill(
                Fill::NonZero,
                Affine::IDENTITY,
                &Brush::Solid(to_vello(color.with_alpha(glow_alpha))),
                None,
                &circle,
            );
        }
    }

    let circle = Circle::new(center, radius);
    scene.fill(
        Fill::NonZero,
        Affine::IDENTITY,
        &Brush::Solid(to_vello(color)),
        None,
        &circle,
    );
}

/// Stroke a path with a wide low-alpha halo underneath the core stroke
pub(crate) fn stroke_glow_path(
    scene: &mut Scene,
    path: &BezPath,
    width: f64,
    color: neon_theme::Color,
    glow_radius: f64,
) {
    if glow_radius > 0.0 {
        let halo = Stroke::new(width + glow_radius);
        let halo_alpha = (color.a as f64 * 0.25) as u8;
        scene.stroke(
            &halo,
            Affine::IDENTITY,
            &Brush::Solid(to_vello(color.with_alpha(halo_alpha))),
            None,
            path,
        );
    }

    let stroke = Stroke::new(width);
    scene.stroke(
        &stroke,
        Affine::IDENTITY,
        &Brush::Solid(to_vello(color)),
        None,
        path,
    );
}
