//! Drawing surface abstraction.

use chromafield_core::{Point, Rgb};

/// Something the particle field can draw on.
pub trait Surface {
    /// Erase everything drawn so far.
    fn clear(&mut self);

    /// Fill a circle of `radius` around `center`.
    fn fill_circle(&mut self, center: Point, radius: f64, color: Rgb, alpha: f64);

    /// Stroke a straight line of the given `width`.
    fn stroke_line(&mut self, from: Point, to: Point, color: Rgb, alpha: f64, width: f64);
}

/// One recorded drawing operation.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Circle {
        center: Point,
        radius: f64,
        color: Rgb,
        alpha: f64,
    },
    Line {
        from: Point,
        to: Point,
        color: Rgb,
        alpha: f64,
        width: f64,
    },
}

/// A [`Surface`] that records what is drawn on it.
///
/// A frame is recorded first and painted afterwards, which keeps the field's
/// mutable update out of the terminal's paint callback.
#[derive(Debug, Clone, Default)]
pub struct DrawList {
    commands: Vec<DrawCommand>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Recorded circles, in drawing order.
    pub fn circles(&self) -> impl Iterator<Item = &DrawCommand> {
        self.commands
            .iter()
            .filter(|command| matches!(command, DrawCommand::Circle { .. }))
    }

    /// Recorded lines, in drawing order.
    pub fn lines(&self) -> impl Iterator<Item = &DrawCommand> {
        self.commands
            .iter()
            .filter(|command| matches!(command, DrawCommand::Line { .. }))
    }
}

impl Surface for DrawList {
    fn clear(&mut self) {
        self.commands.clear();
    }

    fn fill_circle(&mut self, center: Point, radius: f64, color: Rgb, alpha: f64) {
        self.commands.push(DrawCommand::Circle {
            center,
            radius,
            color,
            alpha,
        });
    }

    fn stroke_line(&mut self, from: Point, to: Point, color: Rgb, alpha: f64, width: f64) {
        self.commands.push(DrawCommand::Line {
            from,
            to,
            color,
            alpha,
            width,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_in_order_and_clears() {
        let mut list = DrawList::new();
        list.fill_circle(Point::new(1.0, 1.0), 2.0, Rgb::WHITE, 0.5);
        list.stroke_line(Point::ORIGIN, Point::new(3.0, 4.0), Rgb::BLACK, 0.1, 0.5);
        list.fill_circle(Point::new(2.0, 2.0), 3.0, Rgb::WHITE, 0.4);

        assert_eq!(list.len(), 3);
        assert_eq!(list.circles().count(), 2);
        assert_eq!(list.lines().count(), 1);
        assert!(matches!(list.commands()[1], DrawCommand::Line { .. }));

        list.clear();
        assert!(list.is_empty());
    }
}
