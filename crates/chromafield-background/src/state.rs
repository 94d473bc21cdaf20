//! Background animation state management.

use chromafield_core::{Point, Viewport};
use rand::rngs::StdRng;
use ratatui::Frame;

use crate::canvas::ParticleCanvas;
use crate::field::ParticleField;
use crate::surface::{DrawList, Surface};

/// Lifecycle wrapper around a [`ParticleField`].
///
/// Mounting starts listening for pointer and resize input; tearing down
/// stops it and drops the particles. When mounted without a usable surface
/// the animator still listens (so teardown has something to release) but
/// never builds a field or draws anything.
#[derive(Debug)]
pub struct Animator {
    /// `None` when no surface was available at mount time, or after teardown.
    field: Option<ParticleField>,
    /// Whether input listeners are attached.
    listening: bool,
    /// Reused between frames.
    draw_list: DrawList,
    /// Last known terminal width, in cells.
    last_width: u16,
    /// Last known terminal height, in cells.
    last_height: u16,
}

impl Animator {
    /// Mount onto a surface of the given size, or onto nothing.
    pub fn mount(viewport: Option<Viewport>, rng: StdRng) -> Self {
        let field = match viewport {
            Some(viewport) if !viewport.is_empty() => Some(ParticleField::new(viewport, rng)),
            _ => {
                tracing::warn!("no drawing surface available, particle background disabled");
                None
            }
        };
        tracing::info!(
            particles = field.as_ref().map_or(0, |f| f.particles().len()),
            "mounted particle background"
        );
        Self {
            field,
            listening: true,
            draw_list: DrawList::new(),
            last_width: 0,
            last_height: 0,
        }
    }

    /// Mount onto a terminal of `columns` x `rows` cells.
    pub fn mount_cells(columns: u16, rows: u16, rng: StdRng) -> Self {
        let mut animator = Self::mount(Some(Viewport::from_cells(columns, rows)), rng);
        animator.last_width = columns;
        animator.last_height = rows;
        animator
    }

    /// Whether input listeners are still attached.
    pub fn is_mounted(&self) -> bool {
        self.listening
    }

    /// The live field, if any.
    pub fn field(&self) -> Option<&ParticleField> {
        self.field.as_ref()
    }

    pub fn particle_count(&self) -> usize {
        self.field.as_ref().map_or(0, |field| field.particles().len())
    }

    /// Pointer moved to `position` (virtual pixels).
    pub fn on_pointer_move(&mut self, position: Point) {
        if !self.listening {
            return;
        }
        if let Some(field) = self.field.as_mut() {
            field.pointer_moved(position);
        }
    }

    /// Surface resized to `viewport`; rebuilds the whole particle set.
    pub fn on_resize(&mut self, viewport: Viewport) {
        if !self.listening {
            return;
        }
        if let Some(field) = self.field.as_mut() {
            field.resize(viewport);
        }
    }

    /// Terminal resized to `columns` x `rows` cells.
    pub fn on_resize_cells(&mut self, columns: u16, rows: u16) {
        if !self.listening {
            return;
        }
        self.last_width = columns;
        self.last_height = rows;
        self.on_resize(Viewport::from_cells(columns, rows));
    }

    /// Advance and draw one frame onto `surface`.
    ///
    /// Returns `false` without touching the surface when there is nothing
    /// to animate.
    pub fn frame<S: Surface>(&mut self, surface: &mut S) -> bool {
        if !self.listening {
            return false;
        }
        match self.field.as_mut() {
            Some(field) => {
                field.render_frame(surface);
                true
            }
            None => false,
        }
    }

    /// Advance one frame and paint it behind everything else in `frame`.
    pub fn render(&mut self, frame: &mut Frame) {
        let area = frame.area();

        // Resize events can be missed while the terminal is busy; treat any
        // size change seen at draw time as one.
        if self.listening && (area.width != self.last_width || area.height != self.last_height) {
            self.on_resize_cells(area.width, area.height);
        }

        let mut draw_list = std::mem::take(&mut self.draw_list);
        if self.frame(&mut draw_list) {
            if let Some(field) = &self.field {
                frame.render_widget(ParticleCanvas::new(&draw_list, field.viewport()), area);
            }
        }
        self.draw_list = draw_list;
    }

    /// Stop listening and release the particles. Idempotent.
    pub fn teardown(&mut self) {
        if !self.listening {
            return;
        }
        self.listening = false;
        self.field = None;
        self.draw_list = DrawList::new();
        tracing::info!("particle background torn down");
    }
}
