//! Contextual BEM (BEMX) class generation.
//!
//! BEMX lets a block pick up context from its parent without touching the
//! parent's own classes:
//!
//! - the child keeps its plain BEM classes (`btn btn--primary`);
//! - the parent contributes `parent__child` plus one
//!   `parent__child--modifier` per parent modifier.
//!
//! ```text
//! menu-item (expanded)
//! └── btn (primary)
//!
//! btn btn--primary menu-item__btn menu-item__btn--expanded
//! ```
//!
//! There is no element level in BEMX: any block can be nested in any other.

use serde_json::Value;

use crate::bem::BemHelper;
use crate::error::{BemError, BemxError};
use crate::value::string_modifiers;

/// Generates BEMX class strings.
pub struct BemxHelper;

impl BemxHelper {
	/// Generates the child's BEM classes followed by its parent-context classes.
	///
	/// Parent parameters are validated first, then the child classes are
	/// generated with [`BemHelper`]. Parent modifiers are ignored when no
	/// parent is given.
	///
	/// # Errors
	///
	/// - [`BemxError::InvalidParent`] if the parent is given but empty
	/// - [`BemxError::InvalidParentModifier`] if a parent modifier is empty
	/// - [`BemxError::Bem`] wrapping any child generation failure
	///
	/// # Examples
	///
	/// ```
	/// use simple_component_bem::BemxHelper;
	///
	/// assert_eq!(
	///     BemxHelper::generate("btn", Some("menu-item"), ["primary"], ["expanded"]).unwrap(),
	///     "btn btn--primary menu-item__btn menu-item__btn--expanded"
	/// );
	/// ```
	pub fn generate<I, J>(
		block: &str,
		parent: Option<&str>,
		modifiers: I,
		parent_modifiers: J,
	) -> Result<String, BemxError>
	where
		I: IntoIterator,
		I::Item: AsRef<str>,
		J: IntoIterator,
		J::Item: AsRef<str>,
	{
		let parent_modifiers: Vec<J::Item> = parent_modifiers.into_iter().collect();
		let parent_modifiers: Vec<&str> = parent_modifiers.iter().map(|m| m.as_ref()).collect();

		Self::compose(block, parent, &parent_modifiers, || {
			BemHelper::generate(block, None, modifiers)
		})
	}

	/// Same as [`generate`](Self::generate), for modifiers of unknown type.
	///
	/// Parent modifiers are type-checked first and fail with
	/// [`BemxError::InvalidModifierType`]; a non-string child modifier fails
	/// inside [`BemxError::Bem`].
	pub fn generate_from_values(
		block: &str,
		parent: Option<&str>,
		modifiers: &[Value],
		parent_modifiers: &[Value],
	) -> Result<String, BemxError> {
		let parent_modifiers = string_modifiers(parent_modifiers)
			.map_err(|found| BemxError::InvalidModifierType { found })?;

		Self::compose(block, parent, &parent_modifiers, || {
			BemHelper::generate_from_values(block, None, modifiers)
		})
	}

	fn compose<F>(
		block: &str,
		parent: Option<&str>,
		parent_modifiers: &[&str],
		child: F,
	) -> Result<String, BemxError>
	where
		F: FnOnce() -> Result<String, BemError>,
	{
		let (parent, parent_modifiers) = Self::validate_parent(parent, parent_modifiers)?;

		let child = child().map_err(|err| {
			tracing::debug!(block = %block, error = %err, "BEM generation failed for BEMX child");
			BemxError::from(err)
		})?;

		let Some(parent) = parent else {
			return Ok(child);
		};

		let base = format!("{parent}__{}", block.trim());
		let mut classes = Vec::with_capacity(parent_modifiers.len() + 2);
		for modifier in &parent_modifiers {
			classes.push(format!("{base}--{modifier}"));
		}
		classes.insert(0, base);
		classes.insert(0, child);

		Ok(classes.join(" "))
	}

	fn validate_parent<'a>(
		parent: Option<&'a str>,
		parent_modifiers: &[&'a str],
	) -> Result<(Option<&'a str>, Vec<&'a str>), BemxError> {
		let parent = match parent.map(str::trim) {
			Some("") => return Err(BemxError::InvalidParent),
			parent => parent,
		};

		let parent_modifiers: Vec<&str> = parent_modifiers.iter().map(|m| m.trim()).collect();
		if parent_modifiers.iter().any(|m| m.is_empty()) {
			return Err(BemxError::InvalidParentModifier);
		}

		Ok((parent, parent_modifiers))
	}
}

/// Fluent BEMX class builder.
///
/// ```
/// use simple_component_bem::Bemx;
///
/// let classes = Bemx::block("label").parent("user-card").parent_modifier("name").build()?;
/// assert_eq!(classes, "label user-card__label user-card__label--name");
/// # Ok::<(), simple_component_bem::BemxError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Bemx {
	block: String,
	modifiers: Vec<String>,
	parent: Option<String>,
	parent_modifiers: Vec<String>,
}

impl Bemx {
	/// Starts a class list for the child `block`.
	pub fn block(block: impl Into<String>) -> Self {
		Self {
			block: block.into(),
			..Self::default()
		}
	}

	/// Appends a child modifier.
	pub fn modifier(mut self, modifier: impl Into<String>) -> Self {
		self.modifiers.push(modifier.into());
		self
	}

	/// Appends several child modifiers.
	pub fn modifiers<I, S>(mut self, modifiers: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		self.modifiers.extend(modifiers.into_iter().map(Into::into));
		self
	}

	/// Sets the parent block.
	pub fn parent(mut self, parent: impl Into<String>) -> Self {
		self.parent = Some(parent.into());
		self
	}

	/// Appends a parent modifier.
	pub fn parent_modifier(mut self, modifier: impl Into<String>) -> Self {
		self.parent_modifiers.push(modifier.into());
		self
	}

	/// Appends several parent modifiers.
	pub fn parent_modifiers<I, S>(mut self, modifiers: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		self.parent_modifiers
			.extend(modifiers.into_iter().map(Into::into));
		self
	}

	/// Generates the class string, see [`BemxHelper::generate`].
	pub fn build(&self) -> Result<String, BemxError> {
		BemxHelper::generate(
			&self.block,
			self.parent.as_deref(),
			&self.modifiers,
			&self.parent_modifiers,
		)
	}
}
