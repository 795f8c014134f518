//! Products domain module.
//!
//! Business rules for the product catalog, implemented as plain in-memory
//! logic (no IO, no HTTP, no locking). Callers that share a [`Catalog`]
//! between threads are responsible for serialising access to it.

pub mod catalog;
pub mod product;

pub use catalog::Catalog;
pub use product::{Attributes, Product, validate_new};
