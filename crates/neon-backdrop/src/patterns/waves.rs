//! Wave pattern - stacked sine curves with advancing phase
//!
//! Six layers on a common baseline, each with more amplitude and a slightly
//! higher frequency than the one before. Layer colors alternate between the
//! two palette colors.

use vello::Scene;
use vello::kurbo::{BezPath, Point};

use neon_theme::{Palette, Pattern};

use super::{PatternRenderer, stroke_glow_path};
use crate::Viewport;

const LAYERS: usize = 6;
const PHASE_STEP: f64 = 0.03;
const SAMPLE_STEP: f64 = 6.0;
const LINE_WIDTH: f64 = 2.0;
const GLOW_RADIUS: f64 = 12.0;

/// Sine wave stack
pub struct Waves {
    /// Phase accumulator, advances one fixed step per tick
    t: f64,
}

impl Waves {
    pub fn new() -> Self {
        Self { t: 0.0 }
    }

    #[cfg(test)]
    pub(crate) fn phase(&self) -> f64 {
        self.t
    }
}

impl Default for Waves {
    fn default() -> Self {
        Self::new()
    }
}

impl PatternRenderer for Waves {
    fn pattern(&self) -> Pattern {
        Pattern::Waves
    }

    fn step(&mut self, _viewport: Viewport) {
        self.t += PHASE_STEP;
    }

    fn render(&self, scene: &mut Scene, palette: &Palette, viewport: Viewport) {
        let w = viewport.width;
        let baseline = viewport.height * 0.7;

        for i in 0..LAYERS {
            let amp = 18.0 + i as f64 * 12.0;
            let freq = 0.004 + i as f64 * 0.0013;

            let mut path = BezPath::new();
            path.move_to(Point::new(0.0, baseline));
            let mut x = 0.0;
            while x <= w {
                let y = baseline + (x * freq + self.t + i as f64).sin() * amp;
                path.line_to(Point::new(x, y));
                x += SAMPLE_STEP;
            }

            let color = if i % 2 == 1 { palette.c1 } else { palette.c2 };
            stroke_glow_path(scene, &path, LINE_WIDTH, color, GLOW_RADIUS);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phase_starts_at_zero() {
        assert_eq!(Waves::new().phase(), 0.0);
    }

    #[test]
    fn test_phase_advances_linearly() {
        let mut waves = Waves::new();
        let viewport = Viewport::new(640.0, 480.0);
        for _ in 0..10 {
            waves.step(viewport);
        }
        assert!((waves.phase() - 0.3).abs() < 1e-12);
    }

    #[test]
    fn test_render_is_viewport_independent_of_state() {
        // Rendering must not mutate the phase; only step does.
        let mut waves = Waves::new();
        waves.step(Viewport::new(640.0, 480.0));
        let before = waves.phase();
        let mut scene = Scene::new();
        waves.render(&mut scene, &Palette::default(), Viewport::new(640.0, 480.0));
        assert_eq!(waves.phase(), before);
    }
}
