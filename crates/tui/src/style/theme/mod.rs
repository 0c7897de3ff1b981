mod builtins;
mod types;

pub use builtins::default_theme;
pub use types::{Theme, ThemeRegistration};

/// Return the built-in themes bundled with the picker.
#[must_use]
pub fn builtin_themes() -> Vec<ThemeRegistration> {
	builtins::registrations()
}

/// Look up a theme by name or alias, ignoring case and surrounding spaces.
#[must_use]
pub fn by_name(name: &str) -> Option<Theme> {
	let wanted = normalize_name(name);
	builtin_themes()
		.into_iter()
		.find(|registration| {
			normalize_name(&registration.name) == wanted
				|| registration
					.aliases
					.iter()
					.any(|alias| normalize_name(alias) == wanted)
		})
		.map(|registration| registration.theme)
}

/// Canonical names of every built-in theme.
#[must_use]
pub fn names() -> Vec<String> {
	builtin_themes()
		.into_iter()
		.map(|registration| registration.name)
		.collect()
}

fn normalize_name(name: &str) -> String {
	name.trim().to_ascii_lowercase().replace('_', "-")
}

impl Default for Theme {
	fn default() -> Self {
		default_theme()
	}
}
