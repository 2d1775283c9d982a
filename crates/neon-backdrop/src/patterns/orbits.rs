//! Orbit pattern - concentric rings around an off-center point
//!
//! Each ring carries one marker orbiting at a layer-dependent angular
//! offset. Ring and marker colors alternate between the palette colors.

use vello::Scene;
use vello::kurbo::{BezPath, Circle, Point, Shape};

use neon_theme::{Palette, Pattern};

use super::{PatternRenderer, fill_glow_circle, stroke_glow_path};
use crate::Viewport;

const RINGS: [f64; 4] = [80.0, 140.0, 220.0, 300.0];
const PHASE_STEP: f64 = 0.02;
const ANGULAR_SPEED: f64 = 0.6;
const RING_WIDTH: f64 = 1.2;
const MARKER_RADIUS: f64 = 4.0;
const RING_GLOW: f64 = 10.0;
const MARKER_GLOW: f64 = 16.0;

/// Orbiting ring system
pub struct Orbits {
    t: f64,
}

impl Orbits {
    pub fn new() -> Self {
        Self { t: 0.0 }
    }

    /// Marker position on a ring for the current phase
    fn marker(&self, center: Point, radius: f64, ring: usize) -> Point {
        let angle = self.t * ANGULAR_SPEED + ring as f64;
        Point::new(
            center.x + angle.cos() * radius,
            center.y + angle.sin() * radius,
        )
    }
}

impl Default for Orbits {
    fn default() -> Self {
        Self::new()
    }
}

impl PatternRenderer for Orbits {
    fn pattern(&self) -> Pattern {
        Pattern::Orbits
    }

    fn step(&mut self, _viewport: Viewport) {
        self.t += PHASE_STEP;
    }

    fn render(&self, scene: &mut Scene, palette: &Palette, viewport: Viewport) {
        let center = Point::new(viewport.width * 0.8, viewport.height * 0.25);

        for (i, &radius) in RINGS.iter().enumerate() {
            let ring_color = if i % 2 == 1 { palette.c1 } else { palette.c2 };
            let marker_color = if i % 2 == 1 { palette.c2 } else { palette.c1 };

            let mut ring_path = BezPath::new();
            ring_path.extend(Circle::new(center, radius).path_elements(0.1));
            stroke_glow_path(scene, &ring_path, RING_WIDTH, ring_color, RING_GLOW);

            let marker = self.marker(center, radius, i);
            fill_glow_circle(scene, marker, MARKER_RADIUS, marker_color, MARKER_GLOW);
        }
    }
}
