use ratatui::crossterm::event::{
	KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use tracepick_core::SurfaceEvent;

use super::App;

impl App<'_> {
	/// Translate a key press into the event the picker should see, if any.
	pub fn handle_key(&mut self, key: KeyEvent) -> Option<SurfaceEvent> {
		match key.code {
			KeyCode::Esc => Some(SurfaceEvent::Cancel),
			KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
				Some(SurfaceEvent::Cancel)
			}
			KeyCode::Enter => Some(SurfaceEvent::Confirm),
			KeyCode::Up => self.step(-1),
			KeyCode::Down => self.step(1),
			KeyCode::PageUp => self.step(-self.page()),
			KeyCode::PageDown => self.step(self.page()),
			KeyCode::Home if self.visible_len() > 0 => Some(SurfaceEvent::RowSelected(0)),
			KeyCode::End if self.visible_len() > 0 => {
				Some(SurfaceEvent::RowSelected(self.visible_len() - 1))
			}
			_ => {
				if self.search_input.input(key) {
					Some(SurfaceEvent::QueryChanged(self.search_input.text().to_string()))
				} else {
					None
				}
			}
		}
	}

	/// Translate a mouse action over the results into a selection.
	pub fn handle_mouse(&mut self, mouse: MouseEvent) -> Option<SurfaceEvent> {
		match mouse.kind {
			MouseEventKind::Down(MouseButton::Left) => self
				.results
				.row_at(mouse.column, mouse.row)
				.map(SurfaceEvent::RowSelected),
			MouseEventKind::ScrollUp if self.results.contains(mouse.column, mouse.row) => {
				self.step(-1)
			}
			MouseEventKind::ScrollDown if self.results.contains(mouse.column, mouse.row) => {
				self.step(1)
			}
			_ => None,
		}
	}

	/// Ask the picker to move the selection; clamping is its call.
	fn step(&self, delta: isize) -> Option<SurfaceEvent> {
		(self.visible_len() > 0).then_some(SurfaceEvent::MoveSelection(delta))
	}

	fn page(&self) -> isize {
		isize::try_from(self.results.viewport_rows().max(1)).unwrap_or(1)
	}
}
