/// Textual configuration used when rendering the picker.
#[derive(Debug, Clone)]
pub struct UiLabels {
	/// Title drawn on the border of the results table.
	pub title: String,
	/// Placeholder shown while the filter input is empty.
	pub filter_placeholder: String,
	/// Header of the identifier column.
	pub id_header: String,
	/// Header of the name column.
	pub name_header: String,
	/// Message shown in place of rows when nothing is visible.
	pub empty_message: String,
	/// Key hints rendered in the footer.
	pub hint: String,
}

impl Default for UiLabels {
	fn default() -> Self {
		Self {
			title: "Select a component".to_string(),
			filter_placeholder: "Type to filter by ID or name".to_string(),
			id_header: "Global ID".to_string(),
			name_header: "Component Name".to_string(),
			empty_message: "No results".to_string(),
			hint: "↑/↓ select · Enter confirm · Esc cancel".to_string(),
		}
	}
}
