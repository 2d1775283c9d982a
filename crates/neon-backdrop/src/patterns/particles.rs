//! Particle pattern - drifting points reflecting off the viewport edges

use vello::Scene;
use vello::kurbo::Point;

use neon_theme::{Palette, Pattern};

use super::{PatternRenderer, fill_glow_circle};
use crate::{Rng, Viewport};

const PARTICLE_COUNT: usize = 130;
const PARTICLE_RADIUS: f64 = 2.0;
const GLOW_RADIUS: f64 = 10.0;

/// One particle with constant velocity
#[derive(Debug, Clone, Copy)]
struct Particle {
    x: f64,
    y: f64,
    vx: f64,
    vy: f64,
}

/// Bouncing particle field
pub struct Particles {
    particles: Vec<Particle>,
}

impl Particles {
    pub fn new(viewport: Viewport, mut rng: Rng) -> Self {
        let particles = (0..PARTICLE_COUNT)
            .map(|_| Particle {
                x: rng.range(0.0, viewport.width),
                y: rng.range(0.0, viewport.height),
                vx: rng.range(-0.45, 0.45),
                vy: rng.range(-0.45, 0.45),
            })
            .collect();
        Self { particles }
    }

    #[cfg(test)]
    pub(crate) fn set_particle(&mut self, index: usize, x: f64, y: f64, vx: f64, vy: f64) {
        self.particles[index] = Particle { x, y, vx, vy };
    }

    #[cfg(test)]
    pub(crate) fn particle(&self, index: usize) -> (f64, f64, f64, f64) {
        let p = self.particles[index];
        (p.x, p.y, p.vx, p.vy)
    }
}

impl PatternRenderer for Particles {
    fn pattern(&self) -> Pattern {
        Pattern::Particles
    }

    fn step(&mut self, viewport: Viewport) {
        for p in &mut self.particles {
            p.x += p.vx;
            p.y += p.vy;

            // Reflect off all four edges, clamping back inside so a particle
            // never leaves [0, width] x [0, height].
            if p.x < 0.0 {
                p.x = -p.x;
                p.vx = -p.vx;
            } else if p.x > viewport.width {
                p.x = 2.0 * viewport.width - p.x;
                p.vx = -p.vx;
            }
            if p.y < 0.0 {
                p.y = -p.y;
                p.vy = -p.vy;
            } else if p.y > viewport.height {
                p.y = 2.0 * viewport.height - p.y;
                p.vy = -p.vy;
            }
        }
    }

    fn render(&self, scene: &mut Scene, palette: &Palette, _viewport: Viewport) {
        for p in &self.particles {
            fill_glow_circle(
                scene,
                Point::new(p.x, p.y),
                PARTICLE_RADIUS,
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
        Viewport::new(400.0, 300.0)
    }

    #[test]
    fn test_particle_count() {
        let field = Particles::new(viewport(), Rng::new(1));
        assert_eq!(field.particles.len(), PARTICLE_COUNT);
    }

    #[test]
    fn test_velocity_range() {
        let field = Particles::new(viewport(), Rng::new(1));
        for p in &field.particles {
            assert!(p.vx.abs() <= 0.45);
            assert!(p.vy.abs() <= 0.45);
        }
    }

    #[test]
    fn test_right_edge_reflection_negates_vx() {
        let mut field = Particles::new(viewport(), Rng::new(2));
        field.set_particle(0, 399.9, 150.0, 0.4, 0.0);
        field.step(viewport());
        let (x, _, vx, _) = field.particle(0);
        assert!(vx < 0.0, "vx must be negated after crossing the boundary");
        assert!((0.0..=400.0).contains(&x));
    }

    #[test]
    fn test_left_edge_reflection() {
        let mut field = Particles::new(viewport(), Rng::new(3));
        field.set_particle(0, 0.1, 150.0, -0.4, 0.0);
        field.step(viewport());
        let (x, _, vx, _) = field.particle(0);
        assert!(vx > 0.0);
        assert!((0.0..=400.0).contains(&x));
    }

    #[test]
    fn test_particles_never_leave_bounds() {
        let mut field = Particles::new(viewport(), Rng::new(4));
        for _ in 0..2000 {
            field.step(viewport());
        }
        for p in &field.particles {
            assert!((0.0..=400.0).contains(&p.x));
            assert!((0.0..=300.0).contains(&p.y));
        }
    }

    #[test]
    fn test_interior_particle_keeps_velocity() {
        let mut field = Particles::new(viewport(), Rng::new(5));
        field.set_particle(0, 200.0, 150.0, 0.3, -0.2);
        field.step(viewport());
        let (x, y, vx, vy) = field.particle(0);
        assert_eq!((x, y), (200.3, 149.8));
        assert_eq!((vx, vy), (0.3, -0.2));
    }
}
