//! Matrix pattern - falling glyph columns with a trailing ghost
//!
//! Fixed-width columns each carry one falling glyph per tick. The original
//! achieved its ghosting by blending a low-opacity fill over the previous
//! frame; the scene here is rebuilt from scratch every tick, so each column
//! keeps a short trail of recently drawn glyphs whose alpha decays by the
//! same 8% per tick. Once a column is past the bottom edge it resets to the
//! top at random.

use vello::Scene;
use vello::kurbo::{Affine, BezPath, Point, Stroke};
use vello::peniko::Brush;

use neon_theme::{Palette, Pattern};

use super::{PatternRenderer, to_vello};
use crate::{Rng, Viewport};

const COLUMN_WIDTH: f64 = 16.0;
const ROW_HEIGHT: f64 = 16.0;
const GLYPH_WIDTH: f64 = 10.0;
const GLYPH_HEIGHT: f64 = 13.0;
/// Per-tick brightness retained by old glyphs (1 - the 0.08 trailing fill)
const TRAIL_DECAY: f64 = 0.92;
const TRAIL_LEN: usize = 28;
/// Reset probability once the head is past the bottom edge
const RESET_CHANCE: f64 = 0.025;

/// A glyph left behind by a column head
#[derive(Debug, Clone, Copy)]
struct TrailGlyph {
    row: f64,
    seed: u32,
    /// Ticks since this glyph was the head
    age: u32,
}

/// One falling column
#[derive(Debug, Clone)]
struct Column {
    /// Head position in rows; can run past the bottom edge
    row: f64,
    trail: Vec<TrailGlyph>,
}

/// Falling code rain
pub struct MatrixRain {
    columns: Vec<Column>,
    rng: Rng,
}

impl MatrixRain {
    pub fn new(viewport: Viewport, mut rng: Rng) -> Self {
        let count = (viewport.width / COLUMN_WIDTH).floor().max(1.0) as usize;
        // Heads seed across [0, height) in row units, so most columns start
        // well past the bottom edge and trickle in through random resets
        // instead of appearing as a solid on-screen wall.
        let columns = (0..count)
            .map(|_| Column {
                row: rng.range(0.0, viewport.height),
                trail: Vec::with_capacity(TRAIL_LEN),
            })
            .collect();
        Self { columns, rng }
    }

    /// Draw one glyph as a seeded geometric shape
    ///
    /// The original drew katakana characters; without a text stack the same
    /// flicker reads fine with simple stroke shapes picked by seed.
    fn glyph_path(center: Point, seed: u32) -> BezPath {
        let mut path = BezPath::new();
        let w = GLYPH_WIDTH * 0.7;
        let h = GLYPH_HEIGHT * 0.8;
        let x = center.x - w / 2.0;
        let y = center.y - h / 2.0;

        match hash(seed) % 8 {
            0 => {
                path.move_to(Point::new(x + w * 0.2, y));
                path.line_to(Point::new(x + w * 0.2, y + h));
                path.move_to(Point::new(x + w * 0.8, y));
                path.line_to(Point::new(x + w * 0.8, y + h));
            }
            1 => {
                path.move_to(Point::new(x, y));
                path.line_to(Point::new(x + w, y));
                path.line_to(Point::new(x + w, y + h));
                path.line_to(Point::new(x, y + h));
                path.close_path();
            }
            2 => {
                path.move_to(Point::new(x + w / 2.0, y));
                path.line_to(Point::new(x + w / 2.0, y + h));
                path.move_to(Point::new(x, y + h / 2.0));
                path.line_to(Point::new(x + w, y + h / 2.0));
            }
            3 => {
                path.move_to(Point::new(x + w / 2.0, y));
                path.line_to(Point::new(x + w, y + h));
                path.line_to(Point::new(x, y + h));
                path.close_path();
            }
            4 => {
                path.move_to(Point::new(x, y));
                path.line_to(Point::new(x + w, y));
                path.move_to(Point::new(x, y + h / 2.0));
                path.line_to(Point::new(x + w, y + h / 2.0));
                path.move_to(Point::new(x, y + h));
                path.line_to(Point::new(x + w, y + h));
            }
            5 => {
                path.move_to(Point::new(x, y));
                path.line_to(Point::new(x, y + h));
                path.line_to(Point::new(x + w, y + h));
            }
            6 => {
                path.move_to(Point::new(x, y));
                path.line_to(Point::new(x + w, y + h));
                path.move_to(Point::new(x + w, y));
                path.line_to(Point::new(x, y + h));
            }
            _ => {
                path.move_to(Point::new(x, y + h * 0.3));
                path.line_to(Point::new(x + w, y + h * 0.3));
                path.move_to(Point::new(x + w * 0.5, y + h * 0.3));
                path.line_to(Point::new(x + w * 0.3, y + h));
            }
        }
        path
    }

    #[cfg(test)]
    pub(crate) fn column_rows(&self) -> Vec<f64> {
        self.columns.iter().map(|c| c.row).collect()
    }
}

impl PatternRenderer for MatrixRain {
    fn pattern(&self) -> Pattern {
        Pattern::Matrix
    }

    fn step(&mut self, viewport: Viewport) {
        for column in &mut self.columns {
            // Age the trail and drop entries that have faded out.
            for glyph in &mut column.trail {
                glyph.age += 1;
            }
            column.trail.retain(|g| (g.age as usize) < TRAIL_LEN);

            // The head leaves a freshly randomized glyph behind every tick.
            let seed = self.rng.next_u64() as u32;
            if column.trail.len() == TRAIL_LEN {
                column.trail.remove(0);
            }
            column.trail.push(TrailGlyph {
                row: column.row,
                seed,
                age: 0,
            });

            // Past the bottom edge the column resets to the top at random;
            // otherwise (and until the dice land) it keeps advancing.
            let y = column.row * ROW_HEIGHT;
            if y > viewport.height && self.rng.next_f64() < RESET_CHANCE {
                column.row = 0.0;
            } else {
                column.row += 1.0;
            }
        }
    }

    fn render(&self, scene: &mut Scene, palette: &Palette, viewport: Viewport) {
        let stroke = Stroke::new(1.5);

        for (i, column) in self.columns.iter().enumerate() {
            let x = i as f64 * COLUMN_WIDTH + COLUMN_WIDTH / 2.0;

            for glyph in &column.trail {
                let y = glyph.row * ROW_HEIGHT;
                if y < -ROW_HEIGHT || y > viewport.height + ROW_HEIGHT {
                    continue;
                }

                let brightness = TRAIL_DECAY.powi(glyph.age as i32);
                let alpha = (palette.c1.a as f64 * brightness) as u8;
                if alpha < 5 {
                    continue;
                }

                let path = Self::glyph_path(Point::new(x, y), glyph.seed);
                scene.stroke(
                    &stroke,
                    Affine::IDENTITY,
                    &Brush::Solid(to_vello(palette.c1.with_alpha(alpha))),
                    None,
                    &path,
                );
            }
        }
    }
}

/// Murmur-style hash for glyph shape selection
fn hash(mut h: u32) -> u32 {
    h ^= h >> 16;
    h = h.wrapping_mul(0x85ebca6b);
    h ^= h >> 13;
    h = h.wrapping_mul(0xc2b2ae35);
    h ^= h >> 16;
    h
}

#[cfg(test)]
mod tests {
    use super::*;

    fn viewport() -> Viewport {
        Viewport::new(320.0, 240.0)
    }

    #[test]
    fn test_column_count_follows_width() {
        let rain = MatrixRain::new(viewport(), Rng::new(1));
        assert_eq!(rain.columns.len(), 20); // 320 / 16
    }

    #[test]
    fn test_columns_seed_across_full_height_in_rows() {
        let rain = MatrixRain::new(viewport(), Rng::new(1));
        let on_screen_rows = viewport().height / ROW_HEIGHT; // 15
        for &row in &rain.column_rows() {
            assert!((0.0..viewport().height).contains(&row));
        }
        // The seed range runs in row units to the pixel height, so the bulk
        // of the columns start below the visible row range and trickle in.
        let max = rain
            .column_rows()
            .into_iter()
            .fold(f64::MIN, f64::max);
        assert!(max > on_screen_rows, "no column seeded past the bottom edge");
    }

    #[test]
    fn test_columns_advance_one_row_per_tick() {
        let mut rain = MatrixRain::new(viewport(), Rng::new(2));
        let before = rain.column_rows();
        rain.step(viewport());
        let after = rain.column_rows();
        for (b, a) in before.iter().zip(after.iter()) {
            // Each column either advanced one row or reset to the top.
            assert!(*a == b + 1.0 || *a == 0.0);
        }
    }

    #[test]
    fn test_on_screen_column_never_resets() {
        let mut rain = MatrixRain::new(viewport(), Rng::new(3));
        rain.columns[0].row = 2.0;
        rain.step(viewport());
        assert_eq!(rain.columns[0].row, 3.0);
    }

    #[test]
    fn test_past_bottom_column_eventually_resets() {
        let mut rain = MatrixRain::new(viewport(), Rng::new(4));
        rain.columns[0].row = 100.0; // y = 1600, well past 240
        let mut reset = false;
        for _ in 0..2000 {
            rain.step(viewport());
            if rain.columns[0].row < 100.0 {
                reset = true;
                break;
            }
        }
        assert!(reset, "column past the bottom edge must reset eventually");
    }

    #[test]
    fn test_trail_is_bounded() {
        let mut rain = MatrixRain::new(viewport(), Rng::new(5));
        for _ in 0..100 {
            rain.step(viewport());
        }
        for column in &rain.columns {
            assert!(column.trail.len() <= TRAIL_LEN);
        }
    }

    #[test]
    fn test_glyph_paths_are_nonempty() {
        for seed in 0..64 {
            let path = MatrixRain::glyph_path(Point::new(8.0, 8.0), seed);
            assert!(path.elements().len() >= 2);
        }
    }
}
