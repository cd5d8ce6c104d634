//! Surface Config - selector-based presentation attribute resolver
//!
//! Resolves three presentation attributes (`provider`, `color`,
//! `parameter`) from two optional selectors: a language (locale code) and
//! a property (named surface such as `frontpage` or `search`). A static
//! layered override table supplies the values; the most specific layer
//! that defines an attribute wins, and builtin defaults make every query
//! total.

pub mod defaults;
pub mod resolver;
pub mod selector;
pub mod table;

pub use defaults::DefaultAttributes;
pub use resolver::{Attribute, ResolvedAttributes, Resolver};
pub use selector::{SelectorError, Selectors};
pub use table::{OverrideLayer, OverrideTable};
