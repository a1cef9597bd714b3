//! Blog listing: filter by tag, search title, excerpt, body and author.

use std::collections::BTreeSet;

use ecosprout_content::BlogPost;

use crate::engine::{Facet, Filterable};

impl Facet for String {
    fn key(&self) -> String {
        self.clone()
    }

    fn label(&self) -> String {
        tag_label(self)
    }
}

impl Filterable for BlogPost {
    type Key = String;

    fn in_facet(&self, tag: &String) -> bool {
        self.has_tag(tag)
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.title.as_str(),
            self.excerpt.as_str(),
            self.content.as_str(),
            self.author.name.as_str(),
        ]
    }

    fn is_featured(&self) -> bool {
        self.featured
    }
}

/// Distinct tags across `posts`, sorted. Feeds the tag selector.
pub fn blog_tags(posts: &[BlogPost]) -> Vec<String> {
    posts
        .iter()
        .flat_map(|post| post.tags.iter().cloned())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Display form of a tag: first letter upper-cased.
pub fn tag_label(tag: &str) -> String {
    let mut chars = tag.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use ecosprout_store::{ContentStore, InMemoryContentStore};

    use super::*;
    use crate::engine::{FilterCriteria, Selector, apply};

    fn seeded() -> Vec<BlogPost> {
        InMemoryContentStore::seeded().list_blog_posts()
    }

    fn titles(view: crate::FilteredView<BlogPost>) -> Vec<String> {
        view.into_matches().into_iter().map(|p| p.title).collect()
    }

    #[test]
    fn tags_are_distinct_and_sorted() {
        let tags = blog_tags(&seeded());
        assert_eq!(tags.len(), 12);
        assert_eq!(tags.first().map(String::as_str), Some("biodegradable"));
        assert!(tags.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn tag_filter_requires_exact_tag() {
        let view = apply(&seeded(), &FilterCriteria::new("", Selector::Only("science".to_string())));
        assert_eq!(titles(view), vec!["The Science Behind Compostable Packaging Materials"]);

        let view = apply(&seeded(), &FilterCriteria::new("", Selector::Only("Science".to_string())));
        assert!(view.is_empty());
    }

    #[test]
    fn search_reaches_body_text() {
        let view = apply(&seeded(), &FilterCriteria::new("seaweed", Selector::All));
        assert_eq!(view.total(), 2);
    }

    #[test]
    fn search_reaches_author_name() {
        let view = apply(&seeded(), &FilterCriteria::new("mike thompson", Selector::All));
        assert_eq!(
            titles(view),
            vec!["How to Choose the Right Biodegradable Packaging for Your Business"]
        );
    }

    #[test]
    fn featured_section_only_in_default_view() {
        let view = apply(&seeded(), &FilterCriteria::default());
        assert_eq!(view.featured.len(), 2);
        assert_eq!(view.regular.len(), 1);

        let criteria = FilterCriteria::new("", Selector::Only("sustainability".to_string()));
        let view = apply(&seeded(), &criteria);
        assert!(view.featured.is_empty());
        assert_eq!(view.regular.len(), 1);
        assert_eq!(view.summary("article", &criteria), "Showing 1 article in Sustainability");
    }

    #[test]
    fn tag_label_capitalizes_first_letter() {
        assert_eq!(tag_label("circular-economy"), "Circular-economy");
        assert_eq!(tag_label(""), "");
    }
}
