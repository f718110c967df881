//! HTML component builder
//!
//! This module provides access to simple-component-html.
//!
//! ## Example
//!
//! ```rust
//! use simple_component::html::Component;
//!
//! let mut link = Component::new("a")?;
//! link.set_attribute("href", "/docs")?.add_content("Docs");
//!
//! assert_eq!(link.to_string(), "<a href=\"/docs\">\nDocs\n</a>");
//! # Ok::<(), simple_component::html::ComponentError>(())
//! ```

// Re-export all simple-component-html functionality
pub use simple_component_html::*;
