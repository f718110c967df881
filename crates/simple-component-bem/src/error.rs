//! Error types for BEM and BEMX class generation

use thiserror::Error;

/// Error raised by [`BemHelper`](crate::BemHelper)
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BemError {
	/// Block is empty after trimming
	#[error("[BEM] Invalid block name: cannot be empty.")]
	InvalidBlock,

	/// Element was given but is empty after trimming
	#[error("[BEM] Invalid element name: cannot be empty if present.")]
	InvalidElement,

	/// A modifier is empty after trimming
	#[error("[BEM] Invalid modifier: cannot be empty.")]
	InvalidModifier,

	/// A dynamic modifier is not a string
	#[error("[BEM] Invalid modifier type: expected string, got {found}.")]
	InvalidModifierType {
		/// JSON type name of the offending value
		found: &'static str,
	},
}

/// Error raised by [`BemxHelper`](crate::BemxHelper)
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BemxError {
	/// Parent block was given but is empty after trimming
	#[error("[BEMX] Invalid parent block name: cannot be empty if present.")]
	InvalidParent,

	/// A parent modifier is empty after trimming
	#[error("[BEMX] Invalid modifier: cannot be empty.")]
	InvalidParentModifier,

	/// A dynamic parent modifier is not a string
	#[error("[BEMX] Invalid modifier type: expected string, got {found}.")]
	InvalidModifierType {
		/// JSON type name of the offending value
		found: &'static str,
	},

	/// Child class generation failed
	#[error("[BEMX] {0}")]
	Bem(#[from] BemError),
}

/// Result type for BEM operations
pub type Result<T> = std::result::Result<T, BemError>;

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use std::error::Error as _;

	#[rstest]
	fn test_bemx_wraps_bem_message() {
		let err = BemxError::from(BemError::InvalidBlock);

		assert_eq!(
			err.to_string(),
			"[BEMX] [BEM] Invalid block name: cannot be empty."
		);
		assert_eq!(
			err.source().map(|s| s.to_string()),
			Some("[BEM] Invalid block name: cannot be empty.".to_string())
		);
	}

	#[rstest]
	fn test_modifier_type_message_names_found_type() {
		let err = BemError::InvalidModifierType { found: "array" };
		assert_eq!(
			err.to_string(),
			"[BEM] Invalid modifier type: expected string, got array."
		);
	}
}
