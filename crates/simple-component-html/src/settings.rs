//! Component defaults.
//!
//! With the `settings` feature, defaults can be read from a TOML document:
//!
//! ```toml
//! default_tag = "div"
//! default_closed = true
//! line_separator = "\n"
//! ```
//!
//! Every key is optional; missing keys fall back to [`ComponentSettings::default`].

use crate::error::{ComponentError, Result};

/// Tag used when no tag is given.
pub const DEFAULT_TAG: &str = "comp";

/// Separator placed between content lines and around the content block.
pub const DEFAULT_LINE_SEPARATOR: &str = "\n";

/// Defaults applied to newly constructed components.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "settings", derive(serde::Deserialize), serde(default))]
pub struct ComponentSettings {
	/// Tag of a component built with [`Component::with_settings`](crate::Component::with_settings)
	pub default_tag: String,
	/// Whether such a component renders its closing tag
	pub default_closed: bool,
	/// Line separator used when joining and rendering content
	pub line_separator: String,
}

impl Default for ComponentSettings {
	fn default() -> Self {
		Self {
			default_tag: DEFAULT_TAG.to_string(),
			default_closed: true,
			line_separator: DEFAULT_LINE_SEPARATOR.to_string(),
		}
	}
}

impl ComponentSettings {
	/// Builder method for the default tag
	pub fn default_tag(mut self, tag: impl Into<String>) -> Self {
		self.default_tag = tag.into();
		self
	}

	/// Builder method for the default closed flag
	pub fn default_closed(mut self, closed: bool) -> Self {
		self.default_closed = closed;
		self
	}

	/// Builder method for the line separator
	pub fn line_separator(mut self, separator: impl Into<String>) -> Self {
		self.line_separator = separator.into();
		self
	}

	/// Checks that the default tag is usable.
	pub fn validate(&self) -> Result<()> {
		if self.default_tag.trim().is_empty() {
			return Err(ComponentError::InvalidTag(
				"The default tag of the settings is empty".to_string(),
			));
		}
		Ok(())
	}
}

#[cfg(feature = "settings")]
mod loading {
	use std::fs;
	use std::path::Path;

	use thiserror::Error;

	use super::ComponentSettings;
	use crate::error::ComponentError;

	/// Error raised while loading [`ComponentSettings`]
	#[non_exhaustive]
	#[derive(Debug, Error)]
	pub enum SettingsError {
		#[error("I/O error: {0}")]
		Io(#[from] std::io::Error),

		#[error("TOML error: {0}")]
		Toml(#[from] toml::de::Error),

		#[error("Invalid settings: {0}")]
		Invalid(#[from] ComponentError),
	}

	impl ComponentSettings {
		/// Parses settings from a TOML string and validates them.
		///
		/// # Examples
		///
		/// ```
		/// use simple_component_html::ComponentSettings;
		///
		/// let settings = ComponentSettings::from_toml_str("default_tag = \"div\"").unwrap();
		/// assert_eq!(settings.default_tag, "div");
		/// assert!(settings.default_closed);
		/// ```
		pub fn from_toml_str(content: &str) -> Result<Self, SettingsError> {
			let settings: ComponentSettings = toml::from_str(content)?;
			settings.validate()?;
			Ok(settings)
		}

		/// Loads settings from a TOML file.
		///
		/// A missing file is not an error: defaults are returned instead.
		pub fn from_file(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
			let path = path.as_ref();
			if !path.exists() {
				tracing::debug!(path = %path.display(), "settings file not found, using defaults");
				return Ok(Self::default());
			}

			let content = fs::read_to_string(path)?;
			let settings = Self::from_toml_str(&content)?;
			tracing::debug!(path = %path.display(), tag = %settings.default_tag, "loaded component settings");
			Ok(settings)
		}
	}
}

#[cfg(feature = "settings")]
pub use loading::SettingsError;
