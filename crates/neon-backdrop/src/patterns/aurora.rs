//! Aurora pattern - radial gradient wash plus sine ribbons
//!
//! A full-surface radial wash between the two palette colors, overlaid with
//! three horizontal ribbons whose phase offsets drift together.

use vello::Scene;
use vello::kurbo::{Affine, BezPath, Point, Rect};
use vello::peniko::{Brush, ColorStop, Fill, Gradient};

use neon_theme::{Palette, Pattern};

use super::{PatternRenderer, stroke_glow_path, to_vello};
use crate::Viewport;

const RIBBONS: usize = 3;
const PHASE_STEP: f64 = 0.02;
const SAMPLE_STEP: f64 = 8.0;
const LINE_WIDTH: f64 = 2.0;
const GLOW_RADIUS: f64 = 14.0;
const WASH_ALPHA_INNER: u8 = 0x33;
const WASH_ALPHA_OUTER: u8 = 0x11;

/// Aurora wash and ribbons
pub struct Aurora {
    t: f64,
}

impl Aurora {
    pub fn new() -> Self {
        Self { t: 0.0 }
    }
}

impl Default for Aurora {
    fn default() -> Self {
        Self::new()
    }
}

impl PatternRenderer for Aurora {
    fn pattern(&self) -> Pattern {
        Pattern::Aurora
    }

    fn step(&mut self, _viewport: Viewport) {
        self.t += PHASE_STEP;
    }

    fn render(&self, scene: &mut Scene, palette: &Palette, viewport: Viewport) {
        let w = viewport.width;
        let h = viewport.height;

        // Background wash: a two-point radial from the upper-left toward the
        // lower-right, primary color fading into the secondary.
        let wash = Gradient::new_two_point_radial(
            Point::new(w * 0.3, h * 0.2),
            0.0,
            Point::new(w * 0.7, h * 0.8),
            viewport.max_dim() as f32,
        )
        .with_stops([
            ColorStop {
                offset: 0.0,
                color: to_vello(palette.c1.with_alpha(WASH_ALPHA_INNER)).into(),
            },
            ColorStop {
                offset: 1.0,
                color: to_vello(palette.c2.with_alpha(WASH_ALPHA_OUTER)).into(),
            },
        ]);
        scene.fill(
            Fill::NonZero,
            Affine::IDENTITY,
            &Brush::Gradient(wash),
            None,
            &Rect::new(0.0, 0.0, w, h),
        );

        // Ribbons: horizontal sine bands drifting around 0.3 h.
        for i in 0..RIBBONS {
            let base_y = h * 0.3 + (self.t + i as f64).sin() * h * 0.1;

            let mut path = BezPath::new();
            path.move_to(Point::new(0.0, base_y));
            let mut x = 0.0;
            while x < w {
                let y = base_y + (x * 0.004 + self.t + i as f64).sin() * 20.0;
                path.line_to(Point::new(x, y));
                x += SAMPLE_STEP;
            }

            let color = if i % 2 == 1 { palette.c1 } else { palette.c2 };
            stroke_glow_path(scene, &path, LINE_WIDTH, color, GLOW_RADIUS);
        }
    }
}
