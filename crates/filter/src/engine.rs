use core::str::FromStr;

use serde::{Serialize, Serializer};

/// Query-string value of the "no restriction" selector.
pub const ALL: &str = "all";

/// Value a listing can be narrowed by (product category, blog tag).
pub trait Facet: Clone + PartialEq {
    /// Value as it appears in URLs and selector menus.
    fn key(&self) -> String;

    /// Value as shown to visitors.
    fn label(&self) -> String;
}

/// Category-or-tag selector. `All` applies no restriction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selector<K> {
    All,
    Only(K),
}

impl<K> Default for Selector<K> {
    fn default() -> Self {
        Selector::All
    }
}

impl<K> Selector<K> {
    pub fn is_all(&self) -> bool {
        matches!(self, Selector::All)
    }

    pub fn as_only(&self) -> Option<&K> {
        match self {
            Selector::All => None,
            Selector::Only(k) => Some(k),
        }
    }
}

impl<K: FromStr> Selector<K> {
    /// Read a selector from a query value. Missing, `all`, blank or
    /// unrecognized values select everything.
    pub fn from_query(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            None | Some("") | Some(ALL) => Selector::All,
            Some(value) => value.parse().map(Selector::Only).unwrap_or(Selector::All),
        }
    }
}

impl<K: Facet> Selector<K> {
    pub fn key(&self) -> String {
        match self {
            Selector::All => ALL.to_string(),
            Selector::Only(k) => k.key(),
        }
    }
}

impl<K: Facet> Serialize for Selector<K> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.key())
    }
}

/// The visitor's current criteria for one listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterCriteria<K: Facet> {
    pub search: String,
    pub selector: Selector<K>,
}

impl<K: Facet> Default for FilterCriteria<K> {
    fn default() -> Self {
        Self {
            search: String::new(),
            selector: Selector::All,
        }
    }
}

impl<K: Facet> FilterCriteria<K> {
    pub fn new(search: impl Into<String>, selector: Selector<K>) -> Self {
        Self {
            search: search.into(),
            selector,
        }
    }

    /// Search term with surrounding whitespace removed.
    pub fn term(&self) -> &str {
        self.search.trim()
    }

    /// No search and no explicit selector: the page shows its featured
    /// section.
    pub fn is_default_view(&self) -> bool {
        self.term().is_empty() && self.selector.is_all()
    }
}

/// A record a listing page can filter.
pub trait Filterable: Clone {
    type Key: Facet;

    /// Whether the record falls under the given category/tag.
    fn in_facet(&self, key: &Self::Key) -> bool;

    /// Fields searched by free text, in any order.
    fn search_fields(&self) -> Vec<&str>;

    fn is_featured(&self) -> bool;

    /// Case-insensitive substring match against any search field.
    /// `needle` must already be lowercased.
    fn matches_term(&self, needle: &str) -> bool {
        self.search_fields()
            .into_iter()
            .any(|field| field.to_lowercase().contains(needle))
    }
}

/// Result of filtering a collection: what the listing page renders.
///
/// In the default view featured records get their own leading section and
/// `regular` holds the rest. Otherwise `featured` is empty and `regular` holds
/// every match, so each match is listed exactly once.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FilteredView<T> {
    pub featured: Vec<T>,
    pub regular: Vec<T>,
    pub default_view: bool,
}

impl<T> FilteredView<T> {
    pub fn total(&self) -> usize {
        self.featured.len() + self.regular.len()
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    /// All matches in display order.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.featured.iter().chain(self.regular.iter())
    }

    pub fn into_matches(self) -> Vec<T> {
        let mut all = self.featured;
        all.extend(self.regular);
        all
    }

    /// Result line shown above a listing, e.g.
    /// `Showing 2 products in Boxes matching "eco"`.
    pub fn summary<K: Facet>(&self, noun: &str, criteria: &FilterCriteria<K>) -> String {
        let total = self.total();
        let mut line = format!(
            "Showing {total} {noun}{}",
            if total == 1 { "" } else { "s" }
        );
        if let Selector::Only(key) = &criteria.selector {
            line.push_str(&format!(" in {}", key.label()));
        }
        if !criteria.term().is_empty() {
            line.push_str(&format!(" matching \"{}\"", criteria.term()));
        }
        line
    }
}

/// Filter `items` by `criteria`.
///
/// 1. A non-`All` selector keeps records in that category/tag.
/// 2. A non-blank search term keeps records where the term is a
///    case-insensitive substring of any search field.
/// 3. The survivors are partitioned for display (see [`FilteredView`]).
///
/// Collection order is preserved within each section.
pub fn apply<T: Filterable>(items: &[T], criteria: &FilterCriteria<T::Key>) -> FilteredView<T> {
    let needle = criteria.term().to_lowercase();

    let matches = items
        .iter()
        .filter(|item| match &criteria.selector {
            Selector::All => true,
            Selector::Only(key) => item.in_facet(key),
        })
        .filter(|item| needle.is_empty() || item.matches_term(&needle));

    let default_view = criteria.is_default_view();
    let (featured, regular) = if default_view {
        matches.cloned().partition(|item| item.is_featured())
    } else {
        (Vec::new(), matches.cloned().collect())
    };

    FilteredView {
        featured,
        regular,
        default_view,
    }
}
