//! # simple-component-html
//!
//! Programmatic HTML element builder.
//!
//! ## Overview
//!
//! A [`Component`] holds a tag, an ordered attribute map, an escaped content
//! buffer and a closed flag, and renders itself to an HTML string. Every
//! mutation validates its input first and leaves the component unchanged on
//! failure.
//!
//! ## Example
//!
//! ```
//! use simple_component_html::Component;
//!
//! let mut label = Component::new("label")?;
//! label
//!     .add_class("user-card__label")?
//!     .set_data("user", "42")?
//!     .add_content("Tom & Jerry");
//!
//! assert_eq!(
//!     label.render(),
//!     "<label class=\"user-card__label\" data-user=\"42\">\nTom &amp; Jerry\n</label>"
//! );
//! # Ok::<(), simple_component_html::ComponentError>(())
//! ```
//!
//! ## Feature Flags
//!
//! - `settings` (default) - load [`ComponentSettings`] from TOML

pub mod attributes;
pub mod component;
pub mod error;
pub mod escape;
pub mod settings;

pub use attributes::{AttributeValidator, Attributes};
pub use component::Component;
pub use error::{ComponentError, Result};
pub use escape::html_escape;
#[cfg(feature = "settings")]
pub use settings::SettingsError;
pub use settings::{ComponentSettings, DEFAULT_LINE_SEPARATOR, DEFAULT_TAG};
