//! View-side filter engine.
//!
//! Turns a full collection plus the visitor's criteria (search term and one
//! category-or-tag selector) into the view a listing page renders. Filtering
//! is a pure function of its inputs; nothing is retained between calls.

pub mod blog;
pub mod engine;
pub mod products;

pub use blog::{blog_tags, tag_label};
pub use engine::{Facet, FilterCriteria, Filterable, FilteredView, Selector, apply};
