//! Error types for simple-component-html

use thiserror::Error;

/// Error type for component operations
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ComponentError {
	/// Tag is empty after trimming
	#[error("{0}")]
	InvalidTag(String),

	/// Attribute key is empty after trimming
	#[error("{0}")]
	InvalidAttributeKey(String),

	/// Attribute value rejected by a helper (e.g. an empty class)
	#[error("{0}")]
	InvalidAttributeValue(String),

	/// Replacing the whole attribute map failed
	#[error("Failed to set attributes : {0}")]
	InvalidAttributeSet(#[source] Box<ComponentError>),

	/// `data-*` name or value is empty
	#[error("{0}")]
	InvalidData(String),

	/// `aria-*` name or value is empty
	#[error("{0}")]
	InvalidAria(String),
}

/// Result type for component operations
pub type Result<T> = std::result::Result<T, ComponentError>;
