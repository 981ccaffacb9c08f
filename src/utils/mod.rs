//! Shared helpers: HTML escaping, output writing, pluralization.

pub mod html;
mod plural;
pub mod write;

pub use plural::{plural_count, plural_s};
