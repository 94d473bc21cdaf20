//! Color constants for the particle background.

use chromafield_core::Rgb;

/// Colors particles are drawn from, grouped by hue.
pub const PARTICLE_COLORS: [Rgb; 32] = [
    // Pinks & magentas
    Rgb::from_u32(0xFF1493),
    Rgb::from_u32(0xFF69B4),
    Rgb::from_u32(0xFF00FF),
    Rgb::from_u32(0xC71585),
    Rgb::from_u32(0xE91E63),
    // Reds & oranges
    Rgb::from_u32(0xFF4500),
    Rgb::from_u32(0xFF6347),
    Rgb::from_u32(0xFF8C00),
    Rgb::from_u32(0xFF5722),
    Rgb::from_u32(0xF44336),
    // Yellows & golds
    Rgb::from_u32(0xFFD700),
    Rgb::from_u32(0xFFEB3B),
    Rgb::from_u32(0xFFC107),
    Rgb::from_u32(0xF9A825),
    // Greens
    Rgb::from_u32(0x7FFF00),
    Rgb::from_u32(0x00FA9A),
    Rgb::from_u32(0xADFF2F),
    Rgb::from_u32(0x32CD32),
    Rgb::from_u32(0x4CAF50),
    // Cyans & teals
    Rgb::from_u32(0x00FFFF),
    Rgb::from_u32(0x00CED1),
    Rgb::from_u32(0x00BCD4),
    Rgb::from_u32(0x26C6DA),
    // Blues
    Rgb::from_u32(0x1E90FF),
    Rgb::from_u32(0x00BFFF),
    Rgb::from_u32(0x2196F3),
    Rgb::from_u32(0x448AFF),
    // Purples & violets
    Rgb::from_u32(0x9370DB),
    Rgb::from_u32(0xDA70D6),
    Rgb::from_u32(0xBA68C8),
    Rgb::from_u32(0x9C27B0),
    Rgb::from_u32(0xE040FB),
];
