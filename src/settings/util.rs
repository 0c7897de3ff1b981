use std::path::{Path, PathBuf};

/// Trim a label, treating a blank value as unset.
pub(super) fn sanitize_label(value: Option<String>) -> Option<String> {
	value
		.map(|label| label.trim().to_string())
		.filter(|label| !label.is_empty())
}

/// Expand a leading `~` to `home`. Other paths are returned unchanged.
pub(super) fn expand_home(path: &Path, home: Option<&Path>) -> PathBuf {
	let Some(home) = home else {
		return path.to_path_buf();
	};
	match path.strip_prefix("~") {
		Ok(rest) => home.join(rest),
		Err(_) => path.to_path_buf(),
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn labels_are_trimmed_and_blank_ones_dropped() {
		assert_eq!(sanitize_label(Some("  Node ".into())), Some("Node".into()));
		assert_eq!(sanitize_label(Some("   ".into())), None);
		assert_eq!(sanitize_label(None), None);
	}

	#[test]
	fn home_prefix_is_expanded() {
		let home = Path::new("/home/dev");
		assert_eq!(
			expand_home(Path::new("~/targets.json"), Some(home)),
			PathBuf::from("/home/dev/targets.json")
		);
		assert_eq!(expand_home(Path::new("~"), Some(home)), PathBuf::from("/home/dev"));
		assert_eq!(
			expand_home(Path::new("/srv/targets.json"), Some(home)),
			PathBuf::from("/srv/targets.json")
		);
		assert_eq!(
			expand_home(Path::new("~/targets.json"), None),
			PathBuf::from("~/targets.json")
		);
	}
}
