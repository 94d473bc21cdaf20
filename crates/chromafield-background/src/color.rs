//! Color utility functions for painting translucent particles.

use chromafield_core::Rgb;
use ratatui::style::Color;

/// Backdrop translucent shapes are composited against by default.
pub const DEFAULT_BACKDROP: Rgb = Rgb::BLACK;

/// Terminal color for `color` drawn at `alpha` over `backdrop`.
pub fn shade(color: Rgb, alpha: f64, backdrop: Rgb) -> Color {
    color.blend_over(backdrop, alpha).into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shade_dims_toward_backdrop() {
        assert_eq!(
            shade(Rgb::new(255, 0, 100), 0.2, DEFAULT_BACKDROP),
            Color::Rgb(51, 0, 20)
        );
        assert_eq!(
            shade(Rgb::new(0, 0, 0), 0.5, Rgb::WHITE),
            Color::Rgb(128, 128, 128)
        );
    }
}
