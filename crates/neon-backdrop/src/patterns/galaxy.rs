//! Galaxy pattern - static pulsing star field with a central nebula
//!
//! Stars keep their positions for the life of the run; only their glow
//! pulses. A radial nebula gradient breathes around the viewport center.

use vello::Scene;
use vello::kurbo::{Affine, Point, Rect};
use vello::peniko::{Brush, ColorStop, Fill, Gradient};

use neon_theme::{Palette, Pattern};

use super::{PatternRenderer, fill_glow_circle, to_vello};
use crate::{Rng, Viewport};

const STAR_COUNT: usize = 120;
const PHASE_STEP: f64 = 0.02;
const NEBULA_ALPHA: u8 = 0x33;

/// One static star; radius doubles as its pulse phase offset
#[derive(Debug, Clone, Copy)]
struct Star {
    x: f64,
    y: f64,
    radius: f64,
}

/// Pulsing galaxy
pub struct Galaxy {
    stars: Vec<Star>,
    t: f64,
}

impl Galaxy {
    pub fn new(viewport: Viewport, mut rng: Rng) -> Self {
        let stars = (0..STAR_COUNT)
            .map(|_| Star {
                x: rng.range(0.0, viewport.width),
                y: rng.range(0.0, viewport.height),
                radius: rng.range(0.4, 2.2),
            })
            .collect();
        Self { stars, t: 0.0 }
    }

    #[cfg(test)]
    pub(crate) fn positions(&self) -> Vec<(f64, f64)> {
        self.stars.iter().map(|s| (s.x, s.y)).collect()
    }
}

impl PatternRenderer for Galaxy {
    fn pattern(&self) -> Pattern {
        Pattern::Galaxy
    }

    fn step(&mut self, _viewport: Viewport) {
        self.t += PHASE_STEP;
    }

    fn render(&self, scene: &mut Scene, palette: &Palette, viewport: Viewport) {
        // Stars pulse by modulating their glow radius, not their position.
        for star in &self.stars {
            let glow = 10.0 + (self.t + star.radius).sin() * 6.0;
            fill_glow_circle(
                scene,
                Point::new(star.x, star.y),
                star.radius,
                palette.c1,
                glow,
            );
        }

        // Breathing nebula centered on the viewport.
        let center = Point::new(viewport.width * 0.5, viewport.height * 0.5);
        let inner = (50.0 + self.t.sin() * 40.0).max(0.0) as f32;
        let outer = (viewport.max_dim() * 0.6) as f32;
        let nebula = Gradient::new_two_point_radial(center, inner, center, outer).with_stops([
            ColorStop {
                offset: 0.0,
                color: to_vello(palette.c2.with_alpha(NEBULA_ALPHA)).into(),
            },
            ColorStop {
                offset: 1.0,
                color: to_vello(palette.c2.with_alpha(0)).into(),
            },
        ]);
        scene.fill(
            Fill::NonZero,
            Affine::IDENTITY,
            &Brush::Gradient(nebula),
            None,
            &Rect::new(0.0, 0.0, viewport.width, viewport.height),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn viewport() -> Viewport {
        Viewport::new(800.0, 600.0)
    }

    #[test]
    fn test_star_count() {
        let galaxy = Galaxy::new(viewport(), Rng::new(1));
        assert_eq!(galaxy.stars.len(), STAR_COUNT);
    }

    #[test]
    fn test_stars_do_not_move() {
        let mut galaxy = Galaxy::new(viewport(), Rng::new(2));
        let before = galaxy.positions();
        for _ in 0..100 {
            galaxy.step(viewport());
        }
        assert_eq!(galaxy.positions(), before);
    }

    #[test]
    fn test_seeded_state_reproduces() {
        let a = Galaxy::new(viewport(), Rng::new(3));
        let b = Galaxy::new(viewport(), Rng::new(3));
        assert_eq!(a.positions(), b.positions());
    }
}
