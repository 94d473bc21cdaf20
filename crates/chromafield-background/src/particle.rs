//! Particle state and the per-frame motion rules.

use chromafield_core::{Point, Rgb, Viewport};
use rand::Rng;
use rand::seq::SliceRandom;

use crate::colors::PARTICLE_COLORS;

/// Viewport area (px²) per particle.
pub const DENSITY_DIVISOR: f64 = 5000.0;
/// Pointer distance (px) inside which particles are pushed away.
pub const REPEL_RADIUS: f64 = 200.0;
/// Maximum displacement (px per frame) applied by the pointer.
pub const REPEL_STRENGTH: f64 = 5.0;
/// Fraction of the remaining distance to rest covered each frame.
pub const EASING_FACTOR: f64 = 0.05;
/// Distance (px) inside which two particles are joined by a line.
pub const CONNECTION_RADIUS: f64 = 100.0;
/// Opacity of a connection between two coincident particles.
const CONNECTION_MAX_ALPHA: f64 = 0.3;

const MIN_SIZE: f64 = 2.0;
const MAX_SIZE: f64 = 6.0;
const MIN_OPACITY: f64 = 0.2;
const MAX_OPACITY: f64 = 0.6;

/// A single dot of the background.
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    /// Where the particle is drawn this frame.
    pub position: Point,
    /// Resting place the particle drifts back to.
    pub base: Point,
    pub color: Rgb,
    /// Radius in pixels.
    pub size: f64,
    pub opacity: f64,
}

impl Particle {
    /// A particle resting at `position`.
    pub fn new(position: Point, color: Rgb, size: f64, opacity: f64) -> Self {
        Self {
            position,
            base: position,
            color,
            size,
            opacity,
        }
    }

    /// A particle at a uniformly random spot inside `viewport`, which must
    /// not be empty.
    pub fn random<R: Rng + ?Sized>(viewport: Viewport, rng: &mut R) -> Self {
        let position = Point::new(
            rng.gen_range(0.0..viewport.width),
            rng.gen_range(0.0..viewport.height),
        );
        let color = *PARTICLE_COLORS
            .choose(rng)
            .unwrap_or(&PARTICLE_COLORS[0]);
        Self::new(
            position,
            color,
            rng.gen_range(MIN_SIZE..MAX_SIZE),
            rng.gen_range(MIN_OPACITY..MAX_OPACITY),
        )
    }

    /// Move one frame: away from the pointer when it is close, otherwise
    /// back toward rest.
    pub fn advance(&mut self, pointer: Option<Point>) {
        match pointer.and_then(|pointer| repel_displacement(self.position, pointer)) {
            Some(offset) => self.position += offset,
            None => self.ease_to_base(),
        }
    }

    /// Close [`EASING_FACTOR`] of the gap to the resting place.
    pub fn ease_to_base(&mut self) {
        self.position += (self.base - self.position).scale(EASING_FACTOR);
    }
}

/// Number of particles for a viewport: one per [`DENSITY_DIVISOR`] px².
pub fn particle_count(viewport: Viewport) -> usize {
    if viewport.is_empty() {
        return 0;
    }
    (viewport.area() / DENSITY_DIVISOR).floor() as usize
}

/// Offset the pointer applies to a particle at `position` this frame.
///
/// Returns `None` when the pointer is outside [`REPEL_RADIUS`], in which case
/// the particle eases home instead. A pointer exactly on top of the particle
/// has no direction to push in and yields a zero offset.
pub fn repel_displacement(position: Point, pointer: Point) -> Option<Point> {
    let delta = pointer - position;
    let distance = delta.length();
    if distance.is_nan() || distance >= REPEL_RADIUS {
        return None;
    }
    if distance == 0.0 {
        return Some(Point::ORIGIN);
    }
    let force = (REPEL_RADIUS - distance) / REPEL_RADIUS;
    Some(delta.scale(-force * REPEL_STRENGTH / distance))
}

/// Opacity of the line joining two particles `distance` apart, or `None`
/// when they are too far apart to be connected.
pub fn connection_alpha(distance: f64) -> Option<f64> {
    if distance < CONNECTION_RADIUS {
        Some(((1.0 - distance / CONNECTION_RADIUS) * CONNECTION_MAX_ALPHA).max(0.0))
    } else {
        None
    }
}
