//! Entity trait: identity within a collection.

use std::collections::HashSet;

use crate::error::{DomainError, DomainResult};

/// Entity marker + minimal interface.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug + core::fmt::Display;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;
}

/// Check that every entity in `items` has a distinct id.
///
/// `collection` names the collection in the error message.
pub fn ensure_unique_ids<E: Entity>(collection: &str, items: &[E]) -> DomainResult<()> {
    let mut seen = HashSet::with_capacity(items.len());
    for item in items {
        if !seen.insert(item.id()) {
            return Err(DomainError::invariant(format!(
                "duplicate id '{}' in {collection}",
                item.id()
            )));
        }
    }
    Ok(())
}
