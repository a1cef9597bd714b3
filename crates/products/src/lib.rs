//! Products domain module.
//!
//! Catalog records for the packaging product line. Records are immutable value
//! data (no IO, no HTTP, no storage).

pub mod price;
pub mod product;

pub use price::Price;
pub use product::{
    Category, DimensionUnit, Dimensions, Product, Sustainability, SustainabilityBadge,
};
pub use ecosprout_core::ProductId;
