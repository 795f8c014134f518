//! `catalog-core` — shared building blocks for the product catalog.
//!
//! Identifiers, the domain error model and lenient text parsing live here;
//! no IO, no HTTP.

pub mod entity;
pub mod error;
pub mod id;
pub mod text;

pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use id::ProductId;
