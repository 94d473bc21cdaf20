//! Palette panel drawn over the particle background.

use chromafield_core::{Palette, PaletteColor, Rgb};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Clear, Paragraph, Widget},
};

/// Width of one color card, in cells.
const CARD_WIDTH: u16 = 20;
/// Height of one color card, in cells.
const CARD_HEIGHT: u16 = 5;
const MIN_PANEL_WIDTH: u16 = 48;

/// Centered panel showing the loaded palette as color cards, with an
/// optional WCAG contrast readout and a status line.
#[derive(Debug, Clone, Copy)]
pub struct PaletteOverlay<'a> {
    palette: Option<&'a Palette>,
    show_contrast: bool,
    status: Option<&'a str>,
}

impl<'a> PaletteOverlay<'a> {
    pub fn new(palette: Option<&'a Palette>) -> Self {
        Self {
            palette,
            show_contrast: false,
            status: None,
        }
    }

    pub fn show_contrast(mut self, show: bool) -> Self {
        self.show_contrast = show;
        self
    }

    pub fn status(mut self, status: Option<&'a str>) -> Self {
        self.status = status;
        self
    }

    fn contrast_visible(&self) -> bool {
        self.show_contrast
            && self
                .palette
                .and_then(|p| p.contrast_info.as_ref())
                .is_some_and(|info| !info.is_empty())
    }

    /// Size of the panel including its border.
    fn panel_size(&self) -> (u16, u16) {
        let Some(palette) = self.palette else {
            return (MIN_PANEL_WIDTH, 5);
        };
        let cards = u16::try_from(palette.colors.len()).unwrap_or(u16::MAX);
        let width = cards
            .saturating_mul(CARD_WIDTH)
            .saturating_add(2)
            .max(MIN_PANEL_WIDTH);
        let mut height = 2 + 1 + CARD_HEIGHT + 1;
        if self.contrast_visible() {
            height += 1;
        }
        (width, height)
    }

    fn render_palette(&self, palette: &Palette, area: Rect, buf: &mut Buffer) {
        let mut constraints = vec![
            Constraint::Length(1),
            Constraint::Length(CARD_HEIGHT),
        ];
        if self.contrast_visible() {
            constraints.push(Constraint::Length(1));
        }
        constraints.push(Constraint::Length(1));
        let rows = Layout::vertical(constraints).split(area);

        // Cards that do not fit the panel are counted in the title instead.
        let visible = palette
            .colors
            .len()
            .min(usize::from(area.width / CARD_WIDTH).max(1));
        let hidden = palette.colors.len() - visible;

        let mut title = vec![Span::from(palette.theme.as_str()).bold()];
        if let Some(mood) = &palette.mood {
            title.push(" · ".dark_gray());
            title.push(Span::from(mood.as_str()).italic());
        }
        if hidden > 0 {
            title.push(Span::from(format!(" (+{hidden} more)")).dark_gray());
        }
        Line::from(title).centered().render(rows[0], buf);

        if visible > 0 {
            let cards = Layout::horizontal(vec![Constraint::Fill(1); visible]).split(rows[1]);
            for (color, card) in palette.colors.iter().zip(cards.iter()) {
                color_card(color).render(*card, buf);
            }
        }

        let mut next = 2;
        if self.contrast_visible() {
            if let Some(info) = &palette.contrast_info {
                let spans: Vec<Span> = info
                    .iter()
                    .enumerate()
                    .flat_map(|(i, check)| {
                        let grade = check.grade();
                        let grade_style = if check.aa_normal {
                            Style::new().green()
                        } else if check.aa_large {
                            Style::new().yellow()
                        } else {
                            Style::new().red()
                        };
                        [
                            Span::from(format!("{}-{} ", i + 1, i + 2)).dark_gray(),
                            Span::from(format!("{:.2}:1 ", check.ratio)),
                            Span::styled(grade, grade_style),
                            Span::raw("  "),
                        ]
                    })
                    .collect();
                Line::from(spans).centered().render(rows[next], buf);
            }
            next += 1;
        }

        if let Some(status) = self.status {
            Line::from(status.dark_gray()).centered().render(rows[next], buf);
        }
    }
}

/// A swatch filled with `color`, labelled in a contrasting text color.
fn color_card(color: &PaletteColor) -> Paragraph<'_> {
    let swatch = Rgb::from_hex(&color.hex).unwrap_or(color.rgb);
    let text = swatch.contrasting_text();
    let lines = vec![
        Line::from(""),
        Line::from(color.name.as_deref().unwrap_or("").bold()),
        Line::from(color.hex.as_str()),
        Line::from(format!(
            "RGB({}, {}, {})",
            color.rgb.r, color.rgb.g, color.rgb.b
        )),
    ];
    Paragraph::new(lines)
        .alignment(Alignment::Center)
        .style(Style::new().bg(swatch.into()).fg(text.into()))
}

impl Widget for PaletteOverlay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let (width, height) = self.panel_size();
        let panel = centered(area, width, height);
        if panel.is_empty() {
            return;
        }

        Clear.render(panel, buf);
        let block = Block::bordered().title(" chromafield ".bold());
        let inner = block.inner(panel);
        block.render(panel, buf);

        match self.palette {
            Some(palette) => self.render_palette(palette, inner, buf),
            None => {
                let rows = Layout::vertical([Constraint::Length(1), Constraint::Length(1)])
                    .split(inner);
                Line::from("No palette loaded.").centered().render(rows[0], buf);
                Line::from("Pass --palette <file.json> to display one.".dark_gray())
                    .centered()
                    .render(rows[1], buf);
            }
        }
    }
}

/// A `width` x `height` rectangle centered in `area`, clipped to it.
fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}
