//! # simple-component-bem
//!
//! BEM (Block-Element-Modifier) and contextual BEMX class name generation.
//!
//! ## Example
//!
//! ```
//! use simple_component_bem::{BemHelper, BemxHelper, NO_MODIFIERS};
//!
//! // Classic BEM
//! assert_eq!(BemHelper::generate("btn", None, ["primary"])?, "btn btn--primary");
//!
//! // BEMX: the child block takes context from its parent
//! assert_eq!(
//!     BemxHelper::generate("btn", Some("menu-item"), ["primary"], NO_MODIFIERS)?,
//!     "btn btn--primary menu-item__btn"
//! );
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod bem;
pub mod bemx;
pub mod error;
mod value;

pub use bem::{Bem, BemHelper, NO_MODIFIERS};
pub use bemx::{Bemx, BemxHelper};
pub use error::{BemError, BemxError, Result};
