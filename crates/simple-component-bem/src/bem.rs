//! Classic BEM class generation.
//!
//! A BEM class list starts with the base class (`block` or `block__element`)
//! followed by one `base--modifier` class per modifier, in input order.
//!
//! See the [BEM documentation](https://getbem.com/introduction/).

use serde_json::Value;

use crate::error::{BemError, Result};
use crate::value::string_modifiers;

/// Empty modifier list, for calls that need none.
pub const NO_MODIFIERS: [&str; 0] = [];

/// Generates BEM class strings.
pub struct BemHelper;

impl BemHelper {
	/// Generates a space-separated BEM class string.
	///
	/// Block, element and modifiers are trimmed before use.
	///
	/// # Errors
	///
	/// - [`BemError::InvalidBlock`] if the block is empty
	/// - [`BemError::InvalidElement`] if the element is given but empty
	/// - [`BemError::InvalidModifier`] if any modifier is empty
	///
	/// # Examples
	///
	/// ```
	/// use simple_component_bem::BemHelper;
	///
	/// assert_eq!(
	///     BemHelper::generate("btn", Some("label"), ["large", "primary"]).unwrap(),
	///     "btn__label btn__label--large btn__label--primary"
	/// );
	/// ```
	pub fn generate<I>(block: &str, element: Option<&str>, modifiers: I) -> Result<String>
	where
		I: IntoIterator,
		I::Item: AsRef<str>,
	{
		let block = block.trim();
		if block.is_empty() {
			return Err(BemError::InvalidBlock);
		}

		let element = match element.map(str::trim) {
			Some("") => return Err(BemError::InvalidElement),
			element => element,
		};

		let modifiers: Vec<I::Item> = modifiers.into_iter().collect();
		let modifiers: Vec<&str> = modifiers.iter().map(|m| m.as_ref().trim()).collect();
		if modifiers.iter().any(|m| m.is_empty()) {
			return Err(BemError::InvalidModifier);
		}

		let base = match element {
			Some(element) => format!("{block}__{element}"),
			None => block.to_string(),
		};

		let mut classes = Vec::with_capacity(modifiers.len() + 1);
		for modifier in &modifiers {
			classes.push(format!("{base}--{modifier}"));
		}
		classes.insert(0, base);

		Ok(classes.join(" "))
	}

	/// Same as [`generate`](Self::generate), for modifiers of unknown type.
	///
	/// Every modifier must be a JSON string; this is checked before anything
	/// else.
	///
	/// # Errors
	///
	/// [`BemError::InvalidModifierType`] naming the first non-string type,
	/// then the errors of [`generate`](Self::generate).
	pub fn generate_from_values(
		block: &str,
		element: Option<&str>,
		modifiers: &[Value],
	) -> Result<String> {
		let modifiers =
			string_modifiers(modifiers).map_err(|found| BemError::InvalidModifierType { found })?;
		Self::generate(block, element, modifiers)
	}
}

/// Fluent BEM class builder.
///
/// ```
/// use simple_component_bem::Bem;
///
/// let classes = Bem::block("card").element("title").modifier("large").build()?;
/// assert_eq!(classes, "card__title card__title--large");
/// # Ok::<(), simple_component_bem::BemError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Bem {
	block: String,
	element: Option<String>,
	modifiers: Vec<String>,
}

impl Bem {
	/// Starts a class list for `block`.
	pub fn block(block: impl Into<String>) -> Self {
		Self {
			block: block.into(),
			..Self::default()
		}
	}

	/// Sets the element.
	pub fn element(mut self, element: impl Into<String>) -> Self {
		self.element = Some(element.into());
		self
	}

	/// Appends a modifier.
	pub fn modifier(mut self, modifier: impl Into<String>) -> Self {
		self.modifiers.push(modifier.into());
		self
	}

	/// Appends several modifiers.
	pub fn modifiers<I, S>(mut self, modifiers: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		self.modifiers.extend(modifiers.into_iter().map(Into::into));
		self
	}

	/// Generates the class string, see [`BemHelper::generate`].
	pub fn build(&self) -> Result<String> {
		BemHelper::generate(&self.block, self.element.as_deref(), &self.modifiers)
	}
}
