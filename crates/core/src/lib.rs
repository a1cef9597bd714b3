//! `ecosprout-core`: shared building blocks for the catalog crates.
//!
//! This crate contains **pure domain** primitives (no IO, no HTTP, no storage).

pub mod entity;
pub mod error;
pub mod id;
pub mod value_object;

pub use entity::{Entity, ensure_unique_ids};
pub use error::{DomainError, DomainResult};
pub use id::{MemberId, PostId, ProductId, Slug, UserId};
pub use value_object::ValueObject;
