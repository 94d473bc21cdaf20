//! Palette model as returned by the palette generation service, plus the
//! CSS and JSON exports offered to the user.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::color::{ColorError, Rgb};

/// Errors raised while loading or exporting a palette.
#[derive(Debug, Error)]
pub enum PaletteError {
    #[error(transparent)]
    Color(#[from] ColorError),
    #[error("malformed palette JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// A single palette entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaletteColor {
    /// Hex code, e.g. `#FF5733`.
    pub hex: String,
    pub rgb: Rgb,
    /// Name suggested by the service, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl PaletteColor {
    /// Build an entry from a hex code, deriving the `rgb` field.
    pub fn from_hex(hex: &str, name: Option<&str>) -> Result<Self, ColorError> {
        let rgb = Rgb::from_hex(hex)?;
        Ok(Self {
            hex: rgb.to_hex(),
            rgb,
            name: name.map(str::to_string),
        })
    }

    /// Variable name used in the CSS export: the slugged color name, or
    /// `color-N` (1-based) when the entry has no usable name.
    pub fn css_variable(&self, index: usize) -> String {
        self.name
            .as_deref()
            .map(slugify)
            .filter(|slug| !slug.is_empty())
            .unwrap_or_else(|| format!("color-{}", index + 1))
    }
}

/// WCAG contrast information computed by the service for a color pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ContrastCheck {
    pub ratio: f64,
    pub aa_normal: bool,
    pub aa_large: bool,
    pub aaa_normal: bool,
    pub aaa_large: bool,
}

impl ContrastCheck {
    /// Highest WCAG level passed for normal-size text.
    pub fn grade(&self) -> &'static str {
        if self.aaa_normal {
            "AAA"
        } else if self.aa_normal {
            "AA"
        } else if self.aa_large {
            "AA Large"
        } else {
            "Fail"
        }
    }
}

/// A generated palette.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Palette {
    pub colors: Vec<PaletteColor>,
    /// The prompt the palette was generated from.
    pub theme: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mood: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contrast_info: Option<Vec<ContrastCheck>>,
}

impl Palette {
    /// Parse a palette from the service's JSON representation.
    ///
    /// Every `hex` field is validated.
    pub fn from_json(json: &str) -> Result<Self, PaletteError> {
        let palette: Palette = serde_json::from_str(json)?;
        for color in &palette.colors {
            Rgb::from_hex(&color.hex)?;
        }
        Ok(palette)
    }

    /// Load a palette from a JSON file.
    pub fn load(path: &Path) -> Result<Self, PaletteError> {
        let json = fs::read_to_string(path).map_err(|source| PaletteError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// Colors as CSS custom properties in a `:root` block.
    pub fn to_css(&self) -> String {
        let vars: Vec<String> = self
            .colors
            .iter()
            .enumerate()
            .map(|(i, color)| format!("  --{}: {};", color.css_variable(i), color.hex))
            .collect();
        format!(":root {{\n{}\n}}", vars.join("\n"))
    }

    /// Colors as pretty-printed JSON (2-space indent).
    pub fn to_json(&self) -> Result<String, PaletteError> {
        Ok(serde_json::to_string_pretty(&self.colors)?)
    }

    /// File name for an export of this palette, e.g. `ocean-sunset-palette.css`.
    pub fn export_file_name(&self, format: ExportFormat) -> String {
        format!("{}-palette.{}", slugify(&self.theme), format.extension())
    }

    /// Write an export into `dir`, returning the path written.
    pub fn export(&self, dir: &Path, format: ExportFormat) -> Result<PathBuf, PaletteError> {
        let contents = match format {
            ExportFormat::Css => self.to_css(),
            ExportFormat::Json => self.to_json()?,
        };
        let path = dir.join(self.export_file_name(format));
        fs::write(&path, contents).map_err(|source| PaletteError::Io {
            path: path.clone(),
            source,
        })?;
        Ok(path)
    }
}

/// Export formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    /// CSS custom properties.
    Css,
    /// JSON array of colors.
    Json,
}

impl ExportFormat {
    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Css => "css",
            ExportFormat::Json => "json",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ExportFormat::Css => "CSS variables",
            ExportFormat::Json => "JSON",
        }
    }
}

/// Lowercase `text` and replace each run of whitespace with a single `-`.
pub fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    let mut in_whitespace = false;
    for ch in text.chars().flat_map(char::to_lowercase) {
        if ch.is_whitespace() {
            if !in_whitespace {
                slug.push('-');
            }
            in_whitespace = true;
        } else {
            slug.push(ch);
            in_whitespace = false;
        }
    }
    slug
}
