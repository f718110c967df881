//! BEM and BEMX class name generation
//!
//! This module provides access to simple-component-bem.
//!
//! ## Example
//!
//! ```rust
//! use simple_component::bem::Bemx;
//!
//! let classes = Bemx::block("btn")
//!     .modifier("primary")
//!     .parent("menu-item")
//!     .parent_modifier("expanded")
//!     .build()?;
//!
//! assert_eq!(classes, "btn btn--primary menu-item__btn menu-item__btn--expanded");
//! # Ok::<(), simple_component::bem::BemxError>(())
//! ```

// Re-export all simple-component-bem functionality
pub use simple_component_bem::*;
