//! `citypages-core` — reference data shared by every layer.
//!
//! This crate contains **pure domain** types (no IO, no HTTP, no storage): the
//! product and location records the site is generated from, and the slug rules
//! that turn their names into URL path segments.

pub mod entity;
pub mod error;
pub mod reference;
pub mod slug;

pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use reference::{DEFAULT_TEMPLATE, Location, Product};
pub use slug::slugify;
