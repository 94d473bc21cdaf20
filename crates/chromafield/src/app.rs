//! Application state, frame loop and input handling.

use std::path::PathBuf;
use std::time::{Duration, Instant};

use chromafield_background::Animator;
use chromafield_config::Config;
use chromafield_core::{ExportFormat, Palette, Point};
use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEvent, MouseEventKind,
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use ratatui::{
    DefaultTerminal, Frame,
    layout::{Constraint, Layout},
    style::Stylize,
    text::Line,
};

use crate::mouse::MouseCapture;
use crate::overlay::PaletteOverlay;

/// The main application which holds the state and logic of the application.
#[derive(Debug)]
pub struct App {
    /// Is the application running?
    running: bool,
    /// Particle background, mounted for the lifetime of [`App::run`].
    background: Option<Animator>,
    /// Palette shown in the overlay.
    palette: Option<Palette>,
    /// Show the palette overlay.
    show_overlay: bool,
    /// Show the contrast readout inside the overlay.
    show_contrast: bool,
    /// Feedback from the last action.
    status: Option<String>,
    frame_interval: Duration,
    seed: Option<u32>,
    export_dir: PathBuf,
}

impl App {
    /// Construct a new instance of [`App`].
    pub fn new(config: &Config, palette: Option<Palette>) -> Self {
        Self {
            running: false,
            background: None,
            palette,
            show_overlay: config.show_overlay,
            show_contrast: false,
            status: None,
            frame_interval: config.frame_interval(),
            seed: config.seed,
            export_dir: config.export_dir.clone(),
        }
    }

    fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(u64::from(seed)),
            None => StdRng::from_entropy(),
        }
    }

    /// Mount the background onto a terminal of the given size, if known.
    fn mount_background(&mut self, size: Option<(u16, u16)>) {
        let animator = match size {
            Some((columns, rows)) => Animator::mount_cells(columns, rows, self.rng()),
            None => Animator::mount(None, self.rng()),
        };
        self.background = Some(animator);
    }

    fn teardown_background(&mut self) {
        if let Some(background) = self.background.as_mut() {
            background.teardown();
        }
        self.background = None;
    }

    /// Run the application's main loop.
    pub fn run(mut self, mut terminal: DefaultTerminal) -> color_eyre::Result<()> {
        let _mouse = match MouseCapture::acquire() {
            Ok(capture) => Some(capture),
            Err(err) => {
                tracing::warn!(%err, "mouse capture unavailable, background will not react");
                None
            }
        };

        let size = match terminal.size() {
            Ok(size) => Some((size.width, size.height)),
            Err(err) => {
                tracing::warn!(%err, "could not query terminal size");
                None
            }
        };
        self.mount_background(size);

        let result = self.frame_loop(&mut terminal);
        self.teardown_background();
        result
    }

    /// Draw a frame every `frame_interval`, handling input in between.
    fn frame_loop(&mut self, terminal: &mut DefaultTerminal) -> color_eyre::Result<()> {
        self.running = true;
        let mut next_frame = Instant::now();
        while self.running {
            if Instant::now() >= next_frame {
                terminal.draw(|frame| self.render(frame))?;
                next_frame = Instant::now() + self.frame_interval;
            }
            let timeout = next_frame.saturating_duration_since(Instant::now());
            if event::poll(timeout)? {
                self.handle_event(event::read()?);
            }
        }
        Ok(())
    }

    /// Renders the user interface.
    fn render(&mut self, frame: &mut Frame) {
        if let Some(background) = self.background.as_mut() {
            background.render(frame);
        }

        let chunks = Layout::vertical([Constraint::Fill(1), Constraint::Length(1)])
            .split(frame.area());

        if self.show_overlay {
            let overlay = PaletteOverlay::new(self.palette.as_ref())
                .show_contrast(self.show_contrast)
                .status(self.status.as_deref());
            frame.render_widget(overlay, chunks[0]);
        }

        let help = Line::from(vec![
            "q".bold(),
            " quit  ".dark_gray(),
            "p".bold(),
            " palette  ".dark_gray(),
            "a".bold(),
            " contrast  ".dark_gray(),
            "c".bold(),
            " export css  ".dark_gray(),
            "j".bold(),
            " export json".dark_gray(),
        ])
        .centered();
        frame.render_widget(help, chunks[1]);
    }

    /// Dispatch a terminal event.
    fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => self.on_key_event(key),
            Event::Mouse(mouse) => self.on_mouse_event(mouse),
            Event::Resize(columns, rows) => {
                if let Some(background) = self.background.as_mut() {
                    background.on_resize_cells(columns, rows);
                }
            }
            _ => {}
        }
    }

    /// Handles the key events and updates the state of [`App`].
    fn on_key_event(&mut self, key: KeyEvent) {
        match (key.modifiers, key.code) {
            (_, KeyCode::Esc | KeyCode::Char('q'))
            | (KeyModifiers::CONTROL, KeyCode::Char('c') | KeyCode::Char('C')) => self.quit(),
            (_, KeyCode::Char('p')) => self.show_overlay = !self.show_overlay,
            (_, KeyCode::Char('a')) => self.show_contrast = !self.show_contrast,
            (_, KeyCode::Char('c')) => self.export(ExportFormat::Css),
            (_, KeyCode::Char('j')) => self.export(ExportFormat::Json),
            _ => {}
        }
    }

    /// Feed pointer motion to the background. Overlay widgets never consume it.
    fn on_mouse_event(&mut self, mouse: MouseEvent) {
        if matches!(mouse.kind, MouseEventKind::Moved | MouseEventKind::Drag(_)) {
            if let Some(background) = self.background.as_mut() {
                background.on_pointer_move(Point::from_cell(mouse.column, mouse.row));
            }
        }
    }

    /// Write the palette in `format` to the export directory.
    fn export(&mut self, format: ExportFormat) {
        let Some(palette) = &self.palette else {
            self.status = Some("Nothing to export: no palette loaded".to_string());
            return;
        };
        self.status = Some(match palette.export(&self.export_dir, format) {
            Ok(path) => {
                tracing::info!(path = %path.display(), format = format.label(), "exported palette");
                format!("Exported {} to {}", format.label(), path.display())
            }
            Err(err) => {
                tracing::error!(%err, "palette export failed");
                format!("Export failed: {err}")
            }
        });
        self.show_overlay = true;
    }

    /// Set running to false to quit the application.
    fn quit(&mut self) {
        self.running = false;
    }
}
