//! # simple-component
//!
//! Build HTML fragments programmatically and name them with BEM.
//!
//! This facade crate re-exports:
//!
//! - [`html`] - the [`Component`] builder: tag, ordered attributes, escaped
//!   content, open/closed state, rendering
//! - [`bem`] - [`BemHelper`] for classic BEM class strings and [`BemxHelper`]
//!   for contextual (parent-aware) class strings
//!
//! ## Feature Flags
//!
//! - `full` (default) - everything below
//! - `minimal` - component builder only
//! - `html` - component builder
//! - `bem` - BEM / BEMX helpers
//! - `settings` - TOML-backed [`ComponentSettings`]
//!
//! ## Quick Example
//!
//! ```
//! use simple_component::prelude::*;
//!
//! let mut label = Component::new("label")?;
//! label
//!     .add_class(&BemxHelper::generate("label", Some("user-card"), NO_MODIFIERS, ["name"])?)?
//!     .add_content("Akido");
//!
//! assert_eq!(
//!     label.render(),
//!     "<label class=\"label user-card__label user-card__label--name\">\nAkido\n</label>"
//! );
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#[cfg(feature = "bem")]
pub mod bem;
#[cfg(feature = "html")]
pub mod html;

#[cfg(feature = "html")]
pub use simple_component_html::{
	AttributeValidator, Attributes, Component, ComponentError, ComponentSettings,
};

#[cfg(feature = "settings")]
pub use simple_component_html::SettingsError;

#[cfg(feature = "bem")]
pub use simple_component_bem::{
	Bem, BemError, BemHelper, Bemx, BemxError, BemxHelper, NO_MODIFIERS,
};

/// Commonly used types
pub mod prelude {
	#[cfg(feature = "html")]
	pub use crate::{Component, ComponentError, ComponentSettings};

	#[cfg(feature = "bem")]
	pub use crate::{Bem, BemError, BemHelper, Bemx, BemxError, BemxHelper, NO_MODIFIERS};
}
