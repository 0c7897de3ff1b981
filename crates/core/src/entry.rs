use serde::{Deserialize, Serialize};

/// One selectable trace target.
///
/// The `id` is opaque and unique within a listing; the `name` is what users
/// read and may repeat.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Entry {
	id: String,
	name: String,
}

impl Entry {
	/// Build an entry from its identifier and display name.
	#[must_use]
	pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
		Self {
			id: id.into(),
			name: name.into(),
		}
	}

	#[must_use]
	pub fn id(&self) -> &str {
		&self.id
	}

	#[must_use]
	pub fn name(&self) -> &str {
		&self.name
	}
}
