//! Interactive particle background for chromafield.
//!
//! A full-screen field of colored dots that scatter away from the mouse
//! pointer and drift back to rest, joined by faint lines when close to each
//! other. The field is simulated in virtual pixels, recorded into a
//! [`DrawList`] each frame and painted onto a terminal canvas behind the rest
//! of the UI.

mod canvas;
mod color;
mod colors;
mod field;
mod particle;
mod state;
mod surface;

pub use canvas::ParticleCanvas;
pub use colors::PARTICLE_COLORS;
pub use field::ParticleField;
pub use particle::{
    CONNECTION_RADIUS, DENSITY_DIVISOR, EASING_FACTOR, Particle, REPEL_RADIUS, REPEL_STRENGTH,
    connection_alpha, particle_count, repel_displacement,
};
pub use state::Animator;
pub use surface::{DrawCommand, DrawList, Surface};
