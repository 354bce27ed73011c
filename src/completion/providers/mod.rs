//! Built-in completion providers, one per language family.
//! Pools are never shared across languages.

pub mod css;
pub mod html;
pub mod script;
