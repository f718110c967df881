//! Attribute validation and the ordered attribute map.
//!
//! Every key/value pair that reaches an [`Attributes`] map has gone through
//! [`AttributeValidator`], so rendering never has to re-check anything.

use indexmap::IndexMap;

use crate::error::{ComponentError, Result};
use crate::escape::html_escape;

/// Validates and normalizes attribute key/value pairs.
pub struct AttributeValidator;

impl AttributeValidator {
	/// Trims surrounding whitespace from both key and value.
	pub fn normalize(key: &str, value: &str) -> (String, String) {
		(key.trim().to_string(), value.trim().to_string())
	}

	/// Normalizes a pair and checks the key is not empty.
	///
	/// An empty value is accepted: it marks a valueless attribute such as
	/// `disabled`.
	///
	/// # Examples
	///
	/// ```
	/// use simple_component_html::AttributeValidator;
	///
	/// let (key, value) = AttributeValidator::validate("  id ", " 21 ").unwrap();
	/// assert_eq!((key.as_str(), value.as_str()), ("id", "21"));
	/// assert!(AttributeValidator::validate("   ", "x").is_err());
	/// ```
	pub fn validate(key: &str, value: &str) -> Result<(String, String)> {
		let (key, value) = Self::normalize(key, value);
		if key.is_empty() {
			tracing::debug!(value = %value, "rejected attribute with empty key");
			return Err(ComponentError::InvalidAttributeKey(
				"Attribute key cannot be empty".to_string(),
			));
		}
		Ok((key, value))
	}

	/// Validates every entry into a staging list.
	///
	/// The first invalid entry aborts the whole batch, so callers can merge
	/// the result knowing that either all or none of the entries apply.
	pub fn validate_all<I, K, V>(entries: I) -> Result<Vec<(String, String)>>
	where
		I: IntoIterator<Item = (K, V)>,
		K: AsRef<str>,
		V: AsRef<str>,
	{
		entries
			.into_iter()
			.map(|(key, value)| Self::validate(key.as_ref(), value.as_ref()))
			.collect()
	}
}

/// Ordered attribute map.
///
/// Insertion order is rendering order. Overwriting a key keeps its position;
/// removing and re-adding it moves it to the end.
#[derive(Debug, Clone, Default)]
pub struct Attributes {
	entries: IndexMap<String, String>,
}

// Order-sensitive, unlike `IndexMap`'s own equality.
impl PartialEq for Attributes {
	fn eq(&self, other: &Self) -> bool {
		self.entries.iter().eq(other.entries.iter())
	}
}

impl Eq for Attributes {}

impl Attributes {
	/// Creates an empty attribute map.
	pub fn new() -> Self {
		Self::default()
	}

	/// Number of attributes.
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	/// Returns `true` when no attribute is set.
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// Returns the value for `key`; an empty string means a valueless attribute.
	pub fn get(&self, key: &str) -> Option<&str> {
		self.entries.get(key.trim()).map(String::as_str)
	}

	/// Returns `true` if `key` is set.
	pub fn contains(&self, key: &str) -> bool {
		self.entries.contains_key(key.trim())
	}

	/// Iterates over `(key, value)` pairs in rendering order.
	pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
		self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
	}

	/// Renders `key` or `key="value"` pairs, space-separated.
	///
	/// Values are HTML-escaped. An empty map renders as an empty string.
	pub fn render(&self) -> String {
		let mut output = String::new();
		for (key, value) in &self.entries {
			if !output.is_empty() {
				output.push(' ');
			}
			output.push_str(key);
			if !value.is_empty() {
				output.push_str("=\"");
				output.push_str(&html_escape(value));
				output.push('"');
			}
		}
		output
	}

	// Callers are expected to have validated the pair already.
	pub(crate) fn insert(&mut self, key: String, value: String) {
		self.entries.insert(key, value);
	}

	pub(crate) fn extend(&mut self, validated: Vec<(String, String)>) {
		self.entries.extend(validated);
	}

	pub(crate) fn remove(&mut self, key: &str) -> Option<String> {
		self.entries.shift_remove(key.trim())
	}

	pub(crate) fn clear(&mut self) {
		self.entries.clear();
	}
}

impl<'a> IntoIterator for &'a Attributes {
	type Item = (&'a String, &'a String);
	type IntoIter = indexmap::map::Iter<'a, String, String>;

	fn into_iter(self) -> Self::IntoIter {
		self.entries.iter()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_normalize_trims_key_and_value() {
		let (key, value) = AttributeValidator::normalize("   id  ", "  21 ");
		assert_eq!(key, "id");
		assert_eq!(value, "21");
	}

	#[rstest]
	#[case("")]
	#[case("   ")]
	#[case("\t\n")]
	fn test_validate_rejects_blank_key(#[case] key: &str) {
		let result = AttributeValidator::validate(key, "value");
		assert_eq!(
			result,
			Err(ComponentError::InvalidAttributeKey(
				"Attribute key cannot be empty".to_string()
			))
		);
	}

	#[rstest]
	fn test_validate_accepts_empty_value() {
		let (key, value) = AttributeValidator::validate("disabled", "   ").unwrap();
		assert_eq!(key, "disabled");
		assert_eq!(value, "");
	}

	#[rstest]
	fn test_validate_all_stops_on_first_invalid_entry() {
		let result = AttributeValidator::validate_all([("id", "12"), (" ", "x"), ("class", "a")]);
		assert!(matches!(
			result,
			Err(ComponentError::InvalidAttributeKey(_))
		));
	}

	#[rstest]
	fn test_render_keeps_insertion_order_on_overwrite() {
		let mut attrs = Attributes::new();
		attrs.insert("id".into(), "10".into());
		attrs.insert("class".into(), "round".into());
		attrs.insert("disabled".into(), String::new());
		attrs.insert("id".into(), "11".into());

		assert_eq!(attrs.render(), r#"id="11" class="round" disabled"#);
	}

	#[rstest]
	fn test_remove_then_insert_moves_to_end() {
		let mut attrs = Attributes::new();
		attrs.insert("id".into(), "1".into());
		attrs.insert("class".into(), "a".into());

		assert_eq!(attrs.remove("id"), Some("1".to_string()));
		attrs.insert("id".into(), "2".into());

		let keys: Vec<&str> = attrs.iter().map(|(k, _)| k).collect();
		assert_eq!(keys, vec!["class", "id"]);
	}

	#[rstest]
	fn test_render_escapes_values() {
		let mut attrs = Attributes::new();
		attrs.insert("onclick".into(), "alert(\"XSS\")".into());
		assert_eq!(attrs.render(), r#"onclick="alert(&quot;XSS&quot;)""#);
	}

	#[rstest]
	fn test_render_empty_map() {
		assert_eq!(Attributes::new().render(), "");
	}
}
