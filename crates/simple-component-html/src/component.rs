//! The HTML component builder.
//!
//! A [`Component`] is a tag, an ordered attribute map, an escaped content
//! buffer and a flag telling whether the closing tag is rendered.
//!
//! ## Example
//!
//! ```
//! use simple_component_html::Component;
//!
//! let mut card = Component::new("div")?;
//! card.set_id("main")?
//!     .add_class("card")?
//!     .add_content("Hello")
//!     .add_content("World");
//!
//! assert_eq!(
//!     card.render(),
//!     "<div id=\"main\" class=\"card\">\nHello\nWorld\n</div>"
//! );
//! # Ok::<(), simple_component_html::ComponentError>(())
//! ```

use std::fmt;

use crate::attributes::{AttributeValidator, Attributes};
use crate::error::{ComponentError, Result};
use crate::escape::html_escape;
use crate::settings::{ComponentSettings, DEFAULT_LINE_SEPARATOR, DEFAULT_TAG};

const DATA_PREFIX: &str = "data-";
const ARIA_PREFIX: &str = "aria-";

/// Programmatically built HTML element.
///
/// Mutators return `&mut Self` (or `Result<&mut Self>` when they can fail)
/// so calls can be chained. A failing call leaves the component unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Component {
	tag: String,
	closed: bool,
	attributes: Attributes,
	contents: String,
	line_separator: String,
}

impl Default for Component {
	fn default() -> Self {
		Self {
			tag: DEFAULT_TAG.to_string(),
			closed: true,
			attributes: Attributes::new(),
			contents: String::new(),
			line_separator: DEFAULT_LINE_SEPARATOR.to_string(),
		}
	}
}

impl Component {
	/// Creates a closed component with the given tag.
	pub fn new(tag: &str) -> Result<Self> {
		let mut component = Self::default();
		component.set_tag(tag)?;
		Ok(component)
	}

	/// Creates a component that renders only its opening tag (e.g. `img`).
	pub fn void(tag: &str) -> Result<Self> {
		let mut component = Self::new(tag)?;
		component.closed = false;
		Ok(component)
	}

	/// Creates a component from the given defaults.
	pub fn with_settings(settings: &ComponentSettings) -> Result<Self> {
		let mut component = Self::new(&settings.default_tag)?;
		component.closed = settings.default_closed;
		component.line_separator = settings.line_separator.clone();
		Ok(component)
	}

	/// Returns the tag.
	pub fn tag(&self) -> &str {
		&self.tag
	}

	/// Sets the tag after trimming it.
	///
	/// # Errors
	///
	/// Returns [`ComponentError::InvalidTag`] when the trimmed tag is empty.
	pub fn set_tag(&mut self, tag: &str) -> Result<&mut Self> {
		let tag = tag.trim();
		if tag.is_empty() {
			tracing::debug!(current = %self.tag, "rejected empty tag");
			return Err(ComponentError::InvalidTag(
				"The tag of this component is empty".to_string(),
			));
		}
		self.tag = tag.to_string();
		Ok(self)
	}

	/// Returns `true` if the closing tag and content are rendered.
	pub fn is_closed(&self) -> bool {
		self.closed
	}

	/// Sets whether the closing tag and content are rendered.
	pub fn set_closed(&mut self, closed: bool) -> &mut Self {
		self.closed = closed;
		self
	}

	// Attributes

	/// Adds or overwrites an attribute.
	///
	/// Key and value are trimmed. An empty value makes a valueless attribute,
	/// rendered as the bare key.
	///
	/// # Errors
	///
	/// Returns [`ComponentError::InvalidAttributeKey`] when the trimmed key is empty.
	pub fn add_attribute(&mut self, key: &str, value: &str) -> Result<&mut Self> {
		let (key, value) = AttributeValidator::validate(key, value)?;
		self.attributes.insert(key, value);
		Ok(self)
	}

	/// Adds or overwrites a valueless attribute such as `disabled`.
	pub fn add_bare_attribute(&mut self, key: &str) -> Result<&mut Self> {
		self.add_attribute(key, "")
	}

	/// Alias of [`add_attribute`](Self::add_attribute).
	pub fn set_attribute(&mut self, key: &str, value: &str) -> Result<&mut Self> {
		self.add_attribute(key, value)
	}

	/// Adds several attributes at once.
	///
	/// Every entry is validated before any is applied: if one is invalid the
	/// component keeps its previous attributes.
	pub fn add_attributes<I, K, V>(&mut self, attributes: I) -> Result<&mut Self>
	where
		I: IntoIterator<Item = (K, V)>,
		K: AsRef<str>,
		V: AsRef<str>,
	{
		let staged = AttributeValidator::validate_all(attributes).inspect_err(|err| {
			tracing::debug!(tag = %self.tag, error = %err, "attribute batch rejected");
		})?;
		self.attributes.extend(staged);
		Ok(self)
	}

	/// Replaces all attributes with the given ones.
	///
	/// # Errors
	///
	/// Returns [`ComponentError::InvalidAttributeSet`] wrapping the first
	/// validation failure; the current attributes are left untouched.
	pub fn set_attributes<I, K, V>(&mut self, attributes: I) -> Result<&mut Self>
	where
		I: IntoIterator<Item = (K, V)>,
		K: AsRef<str>,
		V: AsRef<str>,
	{
		let staged = AttributeValidator::validate_all(attributes)
			.map_err(|err| ComponentError::InvalidAttributeSet(Box::new(err)))?;
		self.attributes.clear();
		self.attributes.extend(staged);
		Ok(self)
	}

	/// Removes every attribute.
	pub fn reset_attributes(&mut self) -> &mut Self {
		self.attributes.clear();
		self
	}

	/// Removes an attribute, returning its value if it was set.
	pub fn remove_attribute(&mut self, key: &str) -> Option<String> {
		self.attributes.remove(key)
	}

	/// Returns an attribute value; `Some("")` for a valueless attribute.
	pub fn get_attribute(&self, key: &str) -> Option<&str> {
		self.attributes.get(key)
	}

	/// Returns `true` if the attribute is set.
	pub fn attribute_exists(&self, key: &str) -> bool {
		self.attributes.contains(key)
	}

	/// Returns the attribute map.
	pub fn attributes(&self) -> &Attributes {
		&self.attributes
	}

	// Content

	/// Appends a line of content.
	///
	/// The text is trimmed and HTML-escaped. Blank input is ignored.
	pub fn add_content(&mut self, content: &str) -> &mut Self {
		let content = content.trim();
		if content.is_empty() {
			return self;
		}
		if !self.contents.is_empty() {
			self.contents.push_str(&self.line_separator);
		}
		self.contents.push_str(&html_escape(content));
		self
	}

	/// Appends several lines of content in order.
	pub fn add_contents<I, S>(&mut self, contents: I) -> &mut Self
	where
		I: IntoIterator<Item = S>,
		S: AsRef<str>,
	{
		for content in contents {
			self.add_content(content.as_ref());
		}
		self
	}

	/// Returns the escaped content buffer.
	pub fn contents(&self) -> &str {
		&self.contents
	}

	/// Empties the content buffer.
	pub fn clear_contents(&mut self) -> &mut Self {
		self.contents.clear();
		self
	}

	// Rendering

	/// Renders the attribute list, see [`Attributes::render`].
	pub fn render_attributes(&self) -> String {
		self.attributes.render()
	}

	/// Renders the component as HTML.
	///
	/// A closed component with content puts the content on its own lines:
	///
	/// ```text
	/// <div>
	/// Line 1
	/// Line 2
	/// </div>
	/// ```
	///
	/// A component that is not closed renders only its opening tag and never
	/// its content.
	pub fn render(&self) -> String {
		tracing::trace!(tag = %self.tag, attributes = self.attributes.len(), closed = self.closed, "rendering component");

		let mut html = String::with_capacity(self.tag.len() * 2 + self.contents.len() + 8);
		html.push('<');
		html.push_str(&self.tag);

		let attributes = self.render_attributes();
		if !attributes.is_empty() {
			html.push(' ');
			html.push_str(&attributes);
		}
		html.push('>');

		if self.closed {
			if !self.contents.is_empty() {
				html.push_str(&self.line_separator);
				html.push_str(&self.contents);
				html.push_str(&self.line_separator);
			}
			html.push_str("</");
			html.push_str(&self.tag);
			html.push('>');
		}

		html
	}

	// Id and class helpers

	/// Sets the `id` attribute.
	pub fn set_id(&mut self, id: &str) -> Result<&mut Self> {
		self.set_attribute("id", id)
	}

	/// Returns the `id` attribute.
	pub fn id(&self) -> Option<&str> {
		self.get_attribute("id")
	}

	/// Overwrites the `class` attribute.
	pub fn set_class(&mut self, class: &str) -> Result<&mut Self> {
		self.set_attribute("class", class)
	}

	/// Appends class tokens that are not already present.
	///
	/// The input may hold several whitespace-separated tokens, which makes it
	/// convenient to pass the output of a BEM helper directly.
	///
	/// # Errors
	///
	/// Returns [`ComponentError::InvalidAttributeValue`] when the input holds
	/// no token.
	pub fn add_class(&mut self, class: &str) -> Result<&mut Self> {
		if class.trim().is_empty() {
			tracing::debug!(tag = %self.tag, "rejected empty class");
			return Err(ComponentError::InvalidAttributeValue(
				"A class cannot be empty".to_string(),
			));
		}

		let mut tokens: Vec<&str> = self.class().map(class_tokens).unwrap_or_default();
		for token in class.split_whitespace() {
			if !tokens.contains(&token) {
				tokens.push(token);
			}
		}
		let updated = tokens.join(" ");
		self.set_attribute("class", &updated)
	}

	/// Returns the `class` attribute.
	pub fn class(&self) -> Option<&str> {
		self.get_attribute("class")
	}

	/// Returns `true` if `class` is one of the class tokens.
	pub fn has_class(&self, class: &str) -> bool {
		let class = class.trim();
		if class.is_empty() {
			return false;
		}
		self.class()
			.is_some_and(|current| class_tokens(current).contains(&class))
	}

	/// Removes a class token.
	///
	/// The `class` attribute itself is removed once no token is left.
	pub fn remove_class(&mut self, class: &str) -> &mut Self {
		let class = class.trim();
		let Some(current) = self.class().filter(|_| !class.is_empty()) else {
			return self;
		};

		let updated = class_tokens(current)
			.into_iter()
			.filter(|token| *token != class)
			.collect::<Vec<_>>()
			.join(" ");

		if updated.is_empty() {
			self.attributes.remove("class");
		} else {
			self.attributes.insert("class".to_string(), updated);
		}
		self
	}

	// data-* and aria-* helpers

	/// Sets a `data-*` attribute; `name` is given without the prefix.
	///
	/// # Errors
	///
	/// Returns [`ComponentError::InvalidData`] when the trimmed name or value
	/// is empty.
	pub fn set_data(&mut self, name: &str, value: &str) -> Result<&mut Self> {
		let (name, value) = AttributeValidator::normalize(name, value);
		if let Some(empty) = empty_part(&name, &value) {
			tracing::debug!(tag = %self.tag, name = %name, "rejected data attribute");
			return Err(ComponentError::InvalidData(format!(
				"A data {empty} cannot be empty"
			)));
		}
		self.set_attribute(&format!("{DATA_PREFIX}{name}"), &value)
	}

	/// Returns a `data-*` attribute; `None` for an empty name.
	pub fn data(&self, name: &str) -> Option<&str> {
		prefixed(DATA_PREFIX, name).and_then(|key| self.get_attribute(&key))
	}

	/// Removes a `data-*` attribute, returning its value.
	pub fn remove_data(&mut self, name: &str) -> Option<String> {
		prefixed(DATA_PREFIX, name).and_then(|key| self.remove_attribute(&key))
	}

	/// Sets an `aria-*` attribute; `name` is given without the prefix.
	///
	/// # Errors
	///
	/// Returns [`ComponentError::InvalidAria`] when the trimmed name or value
	/// is empty.
	pub fn set_aria(&mut self, name: &str, value: &str) -> Result<&mut Self> {
		let (name, value) = AttributeValidator::normalize(name, value);
		if let Some(empty) = empty_part(&name, &value) {
			tracing::debug!(tag = %self.tag, name = %name, "rejected aria attribute");
			return Err(ComponentError::InvalidAria(format!(
				"An aria {empty} cannot be empty"
			)));
		}
		self.set_attribute(&format!("{ARIA_PREFIX}{name}"), &value)
	}

	/// Returns an `aria-*` attribute; `None` for an empty name.
	pub fn aria(&self, name: &str) -> Option<&str> {
		prefixed(ARIA_PREFIX, name).and_then(|key| self.get_attribute(&key))
	}

	/// Removes an `aria-*` attribute, returning its value.
	pub fn remove_aria(&mut self, name: &str) -> Option<String> {
		prefixed(ARIA_PREFIX, name).and_then(|key| self.remove_attribute(&key))
	}
}

impl fmt::Display for Component {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.render())
	}
}

fn class_tokens(class: &str) -> Vec<&str> {
	class.split_whitespace().collect()
}

fn empty_part(name: &str, value: &str) -> Option<&'static str> {
	if name.is_empty() {
		Some("name")
	} else if value.is_empty() {
		Some("value")
	} else {
		None
	}
}

fn prefixed(prefix: &str, name: &str) -> Option<String> {
	let name = name.trim();
	(!name.is_empty()).then(|| format!("{prefix}{name}"))
}
