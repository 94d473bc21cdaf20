//! The particle field: a set of particles sized to the viewport.

use chromafield_core::{Point, Viewport};
use rand::rngs::StdRng;

use crate::particle::{Particle, connection_alpha, particle_count};
use crate::surface::Surface;

/// Stroke width of connection lines, in pixels.
const CONNECTION_WIDTH: f64 = 0.5;

/// All particles of the background plus the inputs that drive them.
#[derive(Debug)]
pub struct ParticleField {
    particles: Vec<Particle>,
    viewport: Viewport,
    /// Last known pointer position; `None` until the pointer first moves.
    pointer: Option<Point>,
    rng: StdRng,
}

impl ParticleField {
    /// Create a field filling `viewport` with randomly placed particles.
    pub fn new(viewport: Viewport, rng: StdRng) -> Self {
        let mut field = Self {
            particles: Vec::new(),
            viewport,
            pointer: None,
            rng,
        };
        field.resize(viewport);
        field
    }

    /// Create a field from an explicit set of particles.
    pub fn with_particles(viewport: Viewport, particles: Vec<Particle>, rng: StdRng) -> Self {
        Self {
            particles,
            viewport,
            pointer: None,
            rng,
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn pointer(&self) -> Option<Point> {
        self.pointer
    }

    /// Discard every particle and repopulate for the new `viewport`.
    pub fn resize(&mut self, viewport: Viewport) {
        let count = particle_count(viewport);
        self.viewport = viewport;
        self.particles = (0..count)
            .map(|_| Particle::random(viewport, &mut self.rng))
            .collect();
        tracing::debug!(
            width = viewport.width,
            height = viewport.height,
            count,
            "rebuilt particle field"
        );
    }

    /// Record the latest pointer position.
    pub fn pointer_moved(&mut self, position: Point) {
        self.pointer = Some(position);
    }

    /// Advance every particle one frame and draw the result.
    ///
    /// Particles are moved and drawn in order, so a particle's connections
    /// are measured against neighbours that may or may not have moved yet
    /// this frame. Connections are found by checking every pair.
    pub fn render_frame<S: Surface>(&mut self, surface: &mut S) {
        surface.clear();

        for i in 0..self.particles.len() {
            self.particles[i].advance(self.pointer);

            let particle = &self.particles[i];
            surface.fill_circle(
                particle.position,
                particle.size,
                particle.color,
                particle.opacity,
            );

            for (j, other) in self.particles.iter().enumerate() {
                if i == j {
                    continue;
                }
                let distance = particle.position.distance(other.position);
                if let Some(alpha) = connection_alpha(distance) {
                    surface.stroke_line(
                        particle.position,
                        other.position,
                        particle.color,
                        alpha,
                        CONNECTION_WIDTH,
                    );
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colors::PARTICLE_COLORS;
    use crate::surface::{DrawCommand, DrawList};
    use rand::SeedableRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(7)
    }

    fn resting(x: f64, y: f64) -> Particle {
        Particle::new(Point::new(x, y), PARTICLE_COLORS[3], 4.0, 0.5)
    }

    #[test]
    fn new_field_fills_viewport() {
        let field = ParticleField::new(Viewport::new(1000.0, 1000.0), rng());
        assert_eq!(field.particles().len(), 200);
        assert_eq!(field.pointer(), None);
    }

    #[test]
    fn resize_replaces_particles() {
        let mut field = ParticleField::new(Viewport::new(800.0, 600.0), rng());
        let before = field.particles().to_vec();
        assert_eq!(before.len(), 96);

        field.resize(Viewport::new(1600.0, 1200.0));
        assert_eq!(field.particles().len(), 384);
        assert_eq!(field.viewport(), Viewport::new(1600.0, 1200.0));
        assert!(
            field.particles()[..96] != before[..],
            "old particles must not be kept"
        );
    }

    #[test]
    fn resize_to_nothing_empties_field() {
        let mut field = ParticleField::new(Viewport::new(800.0, 600.0), rng());
        field.resize(Viewport::new(0.0, 0.0));
        assert!(field.particles().is_empty());

        let mut list = DrawList::new();
        field.render_frame(&mut list);
        assert!(list.is_empty());
    }

    #[test]
    fn frame_draws_one_circle_per_particle() {
        let mut field = ParticleField::new(Viewport::new(400.0, 300.0), rng());
        let mut list = DrawList::new();
        field.render_frame(&mut list);
        assert_eq!(list.circles().count(), field.particles().len());

        for (command, particle) in list.circles().zip(field.particles()) {
            assert_eq!(
                command,
                &DrawCommand::Circle {
                    center: particle.position,
                    radius: particle.size,
                    color: particle.color,
                    alpha: particle.opacity,
                }
            );
        }
    }

    #[test]
    fn connects_only_close_pairs() {
        // a-b are 60 apart, b-c 99 apart, a-c 159 apart, d is isolated.
        let particles = vec![
            resting(100.0, 100.0),
            resting(160.0, 100.0),
            resting(259.0, 100.0),
            resting(900.0, 900.0),
        ];
        let mut field =
            ParticleField::with_particles(Viewport::new(1000.0, 1000.0), particles, rng());
        let mut list = DrawList::new();
        field.render_frame(&mut list);

        // Each close pair is drawn once from either end.
        let lines: Vec<_> = list.lines().collect();
        assert_eq!(lines.len(), 4);
        for line in lines {
            let DrawCommand::Line {
                from,
                to,
                alpha,
                width,
                ..
            } = line
            else {
                unreachable!()
            };
            let distance = from.distance(*to);
            assert!(distance < 100.0);
            assert!((alpha - (1.0 - distance / 100.0) * 0.3).abs() < 1e-12);
            assert!(*alpha >= 0.0);
            assert_eq!(*width, 0.5);
        }
    }

    #[test]
    fn lines_use_first_particle_color() {
        let mut a = resting(0.0, 0.0);
        a.color = PARTICLE_COLORS[0];
        let mut b = resting(10.0, 0.0);
        b.color = PARTICLE_COLORS[1];
        let mut field =
            ParticleField::with_particles(Viewport::new(100.0, 100.0), vec![a, b], rng());
        let mut list = DrawList::new();
        field.render_frame(&mut list);

        let colors: Vec<_> = list
            .lines()
            .map(|line| match line {
                DrawCommand::Line { color, .. } => *color,
                DrawCommand::Circle { .. } => unreachable!(),
            })
            .collect();
        assert_eq!(colors, vec![PARTICLE_COLORS[0], PARTICLE_COLORS[1]]);
    }

    #[test]
    fn frame_starts_from_a_clear_surface() {
        let mut field = ParticleField::new(Viewport::new(200.0, 200.0), rng());
        let mut list = DrawList::new();
        field.render_frame(&mut list);
        field.render_frame(&mut list);
        assert_eq!(list.circles().count(), field.particles().len());
    }

    #[test]
    fn pointer_pushes_nearby_particles_away() {
        let mut field = ParticleField::with_particles(
            Viewport::new(1000.0, 1000.0),
            vec![resting(550.0, 500.0), resting(900.0, 900.0)],
            rng(),
        );
        let pointer = Point::new(500.0, 500.0);
        field.pointer_moved(pointer);
        let mut list = DrawList::new();
        field.render_frame(&mut list);

        let near = &field.particles()[0];
        assert!((near.position.x - 553.75).abs() < 1e-9);
        assert_eq!(near.position.y, 500.0);
        let far = &field.particles()[1];
        assert_eq!(far.position, far.base);
    }
}
