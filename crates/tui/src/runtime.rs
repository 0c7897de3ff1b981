//! Terminal display surface.

use std::io::stdout;

use ratatui::DefaultTerminal;
use ratatui::crossterm::event::{
	self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind,
};
use ratatui::crossterm::execute;
use tracepick_core::{
	DisplaySurface, Entry, EntryFilter, Picker, PickerOutcome, PickerView, SurfaceError,
	SurfaceEvent,
};

use crate::App;
use crate::config::UiLabels;
use crate::style::StyleConfig;

/// Run `picker` full-screen until the user confirms or cancels.
pub fn run<F: EntryFilter>(
	picker: &mut Picker<F>,
	labels: UiLabels,
	style: StyleConfig,
) -> Result<PickerOutcome, SurfaceError> {
	let mut surface = TerminalSurface::new(labels, style);
	picker.drive(&mut surface)
}

/// A [`DisplaySurface`] that owns the terminal while the picker runs.
///
/// The terminal is switched to the alternate screen on the first refresh and
/// restored when the surface is dropped.
pub struct TerminalSurface<'a> {
	app: App<'a>,
	terminal: Option<DefaultTerminal>,
}

impl<'a> TerminalSurface<'a> {
	#[must_use]
	pub fn new(labels: UiLabels, style: StyleConfig) -> Self {
		Self {
			app: App::new(labels, style),
			terminal: None,
		}
	}

	fn draw(&mut self) -> Result<(), SurfaceError> {
		let Self { app, terminal } = self;
		if terminal.is_none() {
			*terminal = Some(enter_terminal()?);
		}
		if let Some(terminal) = terminal {
			terminal.draw(|frame| app.draw(frame))?;
		}
		Ok(())
	}
}

fn enter_terminal() -> Result<DefaultTerminal, SurfaceError> {
	let terminal = ratatui::try_init()?;
	let terminal = set_up_or_restore(
		terminal,
		|terminal| {
			terminal.clear()?;
			execute!(stdout(), EnableMouseCapture)?;
			Ok(())
		},
		ratatui::restore,
	)?;
	tracing::debug!("terminal surface entered");
	Ok(terminal)
}

/// Finish preparing an initialised terminal. Raw mode and the alternate
/// screen are already active here, so a failed step must undo them before
/// the error reaches the caller.
fn set_up_or_restore<T>(
	mut terminal: T,
	set_up: impl FnOnce(&mut T) -> Result<(), SurfaceError>,
	restore: impl FnOnce(),
) -> Result<T, SurfaceError> {
	match set_up(&mut terminal) {
		Ok(()) => Ok(terminal),
		Err(err) => {
			restore();
			tracing::debug!(error = %err, "terminal set-up failed, restored");
			Err(err)
		}
	}
}

impl DisplaySurface for TerminalSurface<'_> {
	fn set_rows(&mut self, rows: &[Entry]) {
		self.app.set_rows(rows);
	}

	fn refresh(&mut self, view: &PickerView<'_>) -> Result<(), SurfaceError> {
		self.app.apply_view(view);
		self.draw()
	}

	fn next_event(&mut self) -> Result<SurfaceEvent, SurfaceError> {
		loop {
			let surface_event = match event::read()? {
				Event::Key(key) if key.kind == KeyEventKind::Press => self.app.handle_key(key),
				Event::Mouse(mouse) => self.app.handle_mouse(mouse),
				_ => None,
			};
			if let Some(surface_event) = surface_event {
				return Ok(surface_event);
			}
			// Cursor moves and resizes change nothing the picker tracks.
			self.draw()?;
		}
	}
}

impl Drop for TerminalSurface<'_> {
	fn drop(&mut self) {
		if self.terminal.take().is_some() {
			if let Err(err) = execute!(stdout(), DisableMouseCapture) {
				tracing::warn!(error = %err, "failed to disable mouse capture");
			}
			ratatui::restore();
			tracing::debug!("terminal surface restored");
		}
	}
}
