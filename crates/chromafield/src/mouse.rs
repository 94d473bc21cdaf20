//! Terminal mouse capture, held for as long as the background listens.

use std::io::{self, Write, stdout};

use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
};

/// Enables mouse reporting on creation and disables it again when dropped,
/// on every exit path including errors and panics.
#[derive(Debug)]
pub struct MouseCapture<W: Write = io::Stdout> {
    writer: W,
}

impl MouseCapture {
    /// Capture mouse events on stdout.
    pub fn acquire() -> io::Result<Self> {
        Self::acquire_on(stdout())
    }
}

impl<W: Write> MouseCapture<W> {
    /// Capture mouse events on `writer`.
    pub fn acquire_on(mut writer: W) -> io::Result<Self> {
        execute!(writer, EnableMouseCapture)?;
        tracing::debug!("mouse capture enabled");
        Ok(Self { writer })
    }

    #[cfg(test)]
    fn writer(&self) -> &W {
        &self.writer
    }
}

impl<W: Write> Drop for MouseCapture<W> {
    fn drop(&mut self) {
        if let Err(err) = execute!(self.writer, DisableMouseCapture) {
            tracing::warn!(%err, "failed to disable mouse capture");
        } else {
            tracing::debug!("mouse capture disabled");
        }
    }
}
