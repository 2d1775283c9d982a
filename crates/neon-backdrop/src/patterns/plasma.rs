//! Plasma pattern - procedural full-surface color field
//!
//! The field is computed at half resolution (every other row and column)
//! from three phase-shifted sine terms and alpha-blended over the previous
//! frame's content. The ghosting this produces is an intentional visual
//! property; it lives in an accumulation buffer in run state because the
//! scene itself is rebuilt every tick.

use std::sync::Arc;

use vello::Scene;
use vello::kurbo::Affine;
use vello::peniko::{Blob, ImageAlphaType, ImageBrush, ImageData, ImageFormat};

use neon_theme::{Palette, Pattern};

use super::PatternRenderer;
use crate::Viewport;

const PHASE_STEP: f64 = 0.03;
/// Alpha of each new field layer blended over the accumulated frame
const FIELD_ALPHA: f64 = 35.0 / 255.0;

/// Plasma color field with ghosting accumulator
pub struct Plasma {
    t: f64,
    /// Accumulated RGBA frame at half resolution
    buf: Vec<u8>,
    buf_w: u32,
    buf_h: u32,
}

impl Plasma {
    pub fn new() -> Self {
        Self {
            t: 0.0,
            buf: Vec::new(),
            buf_w: 0,
            buf_h: 0,
        }
    }

    /// Resize the accumulator to half the viewport, dropping the ghost
    ///
    /// Phase is preserved; only the accumulated pixels restart from
    /// transparent when the surface size changes.
    fn ensure_buffer(&mut self, viewport: Viewport) {
        let w = ((viewport.width / 2.0).ceil() as u32).max(1);
        let h = ((viewport.height / 2.0).ceil() as u32).max(1);
        if (w, h) != (self.buf_w, self.buf_h) {
            self.buf = vec![0; (w * h * 4) as usize];
            self.buf_w = w;
            self.buf_h = h;
        }
    }

    /// Field value at a full-resolution coordinate, in [-1, 1]
    fn field(&self, x: f64, y: f64) -> f64 {
        ((x * 0.01 + self.t).sin() + (y * 0.013 - self.t).sin() + ((x + y) * 0.008).sin()) / 3.0
    }

    #[cfg(test)]
    pub(crate) fn buffer_size(&self) -> (u32, u32) {
        (self.buf_w, self.buf_h)
    }

    #[cfg(test)]
    pub(crate) fn phase(&self) -> f64 {
        self.t
    }

    #[cfg(test)]
    pub(crate) fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        let i = ((y * self.buf_w + x) * 4) as usize;
        [self.buf[i], self.buf[i + 1], self.buf[i + 2], self.buf[i + 3]]
    }
}

impl Default for Plasma {
    fn default() -> Self {
        Self::new()
    }
}

impl PatternRenderer for Plasma {
    fn pattern(&self) -> Pattern {
        Pattern::Plasma
    }

    fn step(&mut self, viewport: Viewport) {
        self.ensure_buffer(viewport);

        for iy in 0..self.buf_h {
            for ix in 0..self.buf_w {
                // Sample at the even full-resolution coordinates, matching
                // the every-other-row/column stride of the original.
                let v = self.field(ix as f64 * 2.0, iy as f64 * 2.0);
                let s = v * 0.5 + 0.5;
                let r = (50.0 + 205.0 * s) as f64;
                let g = (50.0 + 205.0 * (1.0 - s)) as f64;
                let b = 200.0;

                let i = ((iy * self.buf_w + ix) * 4) as usize;
                let blend = |src: f64, dst: u8| -> u8 {
                    (src * FIELD_ALPHA + dst as f64 * (1.0 - FIELD_ALPHA)).round() as u8
                };
                self.buf[i] = blend(r, self.buf[i]);
                self.buf[i + 1] = blend(g, self.buf[i + 1]);
                self.buf[i + 2] = blend(b, self.buf[i + 2]);
                self.buf[i + 3] = blend(255.0, self.buf[i + 3]);
            }
        }

        self.t += PHASE_STEP;
    }

    fn render(&self, scene: &mut Scene, _palette: &Palette, _viewport: Viewport) {
        if self.buf.is_empty() {
            return;
        }

        let image = ImageData {
            data: Blob::new(Arc::new(self.buf.clone())),
            format: ImageFormat::Rgba8,
            alpha_type: ImageAlphaType::Alpha,
            width: self.buf_w,
            height: self.buf_h,
        };
        let brush = ImageBrush::new(image);

        // Half-resolution buffer scaled back up to the full surface.
        scene.draw_image(&brush, Affine::scale(2.0));
    }
}
