//! Star field pattern - point stars falling downward
//!
//! Each star falls at its own speed and wraps back to the top edge when it
//! exits the bottom. Only the primary palette color is used.

use vello::Scene;
use vello::kurbo::Point;

use neon_theme::{Palette, Pattern};

use super::{PatternRenderer, fill_glow_circle};
use crate::{Rng, Viewport};

const STAR_COUNT: usize = 180;
const GLOW_RADIUS: f64 = 10.0;

/// One falling star
#[derive(Debug, Clone, Copy)]
struct Star {
    x: f64,
    y: f64,
    radius: f64,
    speed: f64,
}

/// Falling star field
pub struct Starfield {
    stars: Vec<Star>,
}

impl Starfield {
    /// Allocate stars with randomized positions and speeds
    pub fn new(viewport: Viewport, mut rng: Rng) -> Self {
        let stars = (0..STAR_COUNT)
            .map(|_| Star {
                x: rng.range(0.0, viewport.width),
                y: rng.range(0.0, viewport.height),
                radius: rng.range(0.3, 1.9),
                speed: rng.range(0.2, 0.9),
            })
            .collect();
        Self { stars }
    }

    #[cfg(test)]
    pub(crate) fn positions(&self) -> Vec<(f64, f64)> {
        self.stars.iter().map(|s| (s.x, s.y)).collect()
    }

    #[cfg(test)]
    pub(crate) fn set_star(&mut self, index: usize, y: f64, speed: f64) {
        self.stars[index].y = y;
        self.stars[index].speed = speed;
    }
}

impl PatternRenderer for Starfield {
    fn pattern(&self) -> Pattern {
        Pattern::Stars
    }

    fn step(&mut self, viewport: Viewport) {
        for star in &mut self.stars {
            star.y += star.speed;
            if star.y > viewport.height {
                star.y = 0.0;
            }
        }
    }

    fn render(&self, scene: &mut Scene, palette: &Palette, _viewport: Viewport) {
        for star in &self.stars {
            fill_glow_circle(
                scene,
                Point::new(star.x, star.y),
                star.radius,
                palette.c1,
                GLOW_RADIUS,
            );
        }
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
        let field = Starfield::new(viewport(), Rng::new(1));
        assert_eq!(field.stars.len(), STAR_COUNT);
    }

    #[test]
    fn test_stars_start_inside_viewport() {
        let field = Starfield::new(viewport(), Rng::new(1));
        for star in &field.stars {
            assert!((0.0..800.0).contains(&star.x));
            assert!((0.0..600.0).contains(&star.y));
        }
    }

    #[test]
    fn test_star_falls_by_its_speed() {
        let mut field = Starfield::new(viewport(), Rng::new(2));
        field.set_star(0, 100.0, 0.5);
        field.step(viewport());
        assert_eq!(field.stars[0].y, 100.5);
    }

    #[test]
    fn test_star_wraps_to_top_past_bottom_edge() {
        let mut field = Starfield::new(viewport(), Rng::new(3));
        field.set_star(0, 599.9, 0.5);
        field.step(viewport());
        assert_eq!(field.stars[0].y, 0.0);
    }

    #[test]
    fn test_resize_does_not_reset_positions() {
        let mut field = Starfield::new(viewport(), Rng::new(4));
        field.step(viewport());
        let before = field.positions();

        // Step once with a different viewport; x positions must survive and
        // y positions advance normally.
        field.step(Viewport::new(1920.0, 1080.0));
        let after = field.positions();
        for ((x0, _), (x1, _)) in before.iter().zip(after.iter()) {
            assert_eq!(x0, x1);
        }
    }

    #[test]
    fn test_fresh_state_differs_between_seeds() {
        let a = Starfield::new(viewport(), Rng::new(5));
        let b = Starfield::new(viewport(), Rng::new(6));
        assert_ne!(a.positions(), b.positions());
    }
}
