//! Value object trait: equality by value, not identity.
//!
//! Prices, dimensions, author bylines and social links are value objects:
//! two instances with the same attributes are interchangeable.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**. To "modify" one,
/// build a new one.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
