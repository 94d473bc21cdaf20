//! Terminal widget painting a recorded frame.

use chromafield_core::{Point, Rgb, Viewport};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    symbols::Marker,
    widgets::{
        Widget,
        canvas::{Canvas, Context, Line as CanvasLine, Points},
    },
};

use crate::color::{DEFAULT_BACKDROP, shade};
use crate::surface::{DrawCommand, DrawList};

/// Sampling step (px) used to fill circles with canvas dots.
const FILL_STEP: f64 = 1.0;

/// Paints a [`DrawList`] onto a Braille canvas covering the widget area.
///
/// The list is expressed in virtual pixels with y growing downward; the
/// canvas is bounded to `viewport` so one virtual pixel maps to the same
/// screen distance everywhere. Line widths below one dot cannot be honored
/// and every line is drawn one dot wide.
#[derive(Debug, Clone, Copy)]
pub struct ParticleCanvas<'a> {
    list: &'a DrawList,
    viewport: Viewport,
    backdrop: Rgb,
}

impl<'a> ParticleCanvas<'a> {
    pub fn new(list: &'a DrawList, viewport: Viewport) -> Self {
        Self {
            list,
            viewport,
            backdrop: DEFAULT_BACKDROP,
        }
    }

    /// Color translucent shapes are blended against.
    pub fn backdrop(mut self, backdrop: Rgb) -> Self {
        self.backdrop = backdrop;
        self
    }

    /// Lines go down before circles so a connection crossing a particle's
    /// cell does not overwrite the particle's color.
    fn paint(&self, ctx: &mut Context<'_>) {
        for command in self.list.commands() {
            if let DrawCommand::Line {
                from,
                to,
                color,
                alpha,
                ..
            } = *command
            {
                let (x1, y1) = self.to_canvas(from);
                let (x2, y2) = self.to_canvas(to);
                ctx.draw(&CanvasLine::new(
                    x1,
                    y1,
                    x2,
                    y2,
                    shade(color, alpha, self.backdrop),
                ));
            }
        }
        for command in self.list.commands() {
            if let DrawCommand::Circle {
                center,
                radius,
                color,
                alpha,
            } = *command
            {
                let coords = self.disc(center, radius);
                ctx.draw(&Points {
                    coords: &coords,
                    color: shade(color, alpha, self.backdrop),
                });
            }
        }
    }

    /// Canvas coordinates (y up) of a virtual pixel position (y down).
    fn to_canvas(&self, point: Point) -> (f64, f64) {
        (point.x, self.viewport.height - point.y)
    }

    /// Sample points covering a filled circle.
    fn disc(&self, center: Point, radius: f64) -> Vec<(f64, f64)> {
        let mut coords = vec![self.to_canvas(center)];
        let steps = (radius / FILL_STEP).floor() as i32;
        for iy in -steps..=steps {
            for ix in -steps..=steps {
                if ix == 0 && iy == 0 {
                    continue;
                }
                let offset = Point::new(ix as f64 * FILL_STEP, iy as f64 * FILL_STEP);
                if offset.length() <= radius {
                    coords.push(self.to_canvas(center + offset));
                }
            }
        }
        coords
    }
}

impl Widget for ParticleCanvas<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if self.viewport.is_empty() || area.is_empty() {
            return;
        }
        Canvas::default()
            .marker(Marker::Braille)
            .x_bounds([0.0, self.viewport.width])
            .y_bounds([0.0, self.viewport.height])
            .paint(|ctx| self.paint(ctx))
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::Surface;

    fn painted_cells(buf: &Buffer) -> usize {
        buf.content()
            .iter()
            .filter(|cell| cell.symbol() != " " && cell.symbol() != "\u{2800}")
            .count()
    }

    #[test]
    fn empty_list_paints_nothing() {
        let list = DrawList::new();
        let area = Rect::new(0, 0, 10, 5);
        let mut buf = Buffer::empty(area);
        ParticleCanvas::new(&list, Viewport::from_cells(10, 5)).render(area, &mut buf);
        assert_eq!(painted_cells(&buf), 0);
    }

    #[test]
    fn circle_lands_in_its_cell() {
        let mut list = DrawList::new();
        // Center of cell (2, 1) in virtual pixels.
        list.fill_circle(Point::from_cell(2, 1), 2.0, Rgb::new(255, 0, 0), 1.0);

        let area = Rect::new(0, 0, 10, 5);
        let mut buf = Buffer::empty(area);
        ParticleCanvas::new(&list, Viewport::from_cells(10, 5)).render(area, &mut buf);

        let cell = &buf[(2, 1)];
        assert_ne!(cell.symbol(), " ");
        assert_eq!(cell.fg, ratatui::style::Color::Rgb(255, 0, 0));
        assert_eq!(buf[(8, 4)].symbol(), " ");
    }

    #[test]
    fn line_spans_cells() {
        let mut list = DrawList::new();
        list.stroke_line(
            Point::from_cell(0, 2),
            Point::from_cell(9, 2),
            Rgb::new(200, 200, 200),
            0.5,
            0.5,
        );

        let area = Rect::new(0, 0, 10, 5);
        let mut buf = Buffer::empty(area);
        ParticleCanvas::new(&list, Viewport::from_cells(10, 5)).render(area, &mut buf);

        assert!(painted_cells(&buf) >= 9);
        assert_eq!(buf[(5, 2)].fg, ratatui::style::Color::Rgb(100, 100, 100));
    }

    #[test]
    fn circles_stay_on_top_of_lines() {
        let mut list = DrawList::new();
        list.fill_circle(Point::from_cell(5, 2), 3.0, Rgb::new(255, 0, 0), 1.0);
        list.stroke_line(
            Point::from_cell(0, 2),
            Point::from_cell(9, 2),
            Rgb::new(200, 200, 200),
            0.5,
            0.5,
        );

        let area = Rect::new(0, 0, 10, 5);
        let mut buf = Buffer::empty(area);
        ParticleCanvas::new(&list, Viewport::from_cells(10, 5)).render(area, &mut buf);

        assert_eq!(buf[(5, 2)].fg, ratatui::style::Color::Rgb(255, 0, 0));
        assert_eq!(buf[(2, 2)].fg, ratatui::style::Color::Rgb(100, 100, 100));
    }

    #[test]
    fn disc_covers_radius() {
        let list = DrawList::new();
        let canvas = ParticleCanvas::new(&list, Viewport::new(100.0, 100.0));
        let coords = canvas.disc(Point::new(50.0, 50.0), 2.0);
        // Lattice points within radius 2 of the origin.
        assert_eq!(coords.len(), 13);
        assert!(coords.contains(&(50.0, 50.0)));
        assert!(coords.contains(&(52.0, 50.0)));
        assert!(coords.contains(&(50.0, 48.0)));
    }
}
