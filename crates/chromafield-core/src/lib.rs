//! Core types for the chromafield palette viewer.
//!
//! Shared between the particle background, the configuration loader and the
//! terminal application: colors, the virtual pixel geometry the background
//! animates in, and the palette model returned by the generation service.

mod color;
mod geometry;
mod palette;

pub use color::{ColorError, Rgb};
pub use geometry::{CELL_HEIGHT_PX, CELL_WIDTH_PX, Point, Viewport};
pub use palette::{ContrastCheck, ExportFormat, Palette, PaletteColor, PaletteError, slugify};
