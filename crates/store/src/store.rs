use std::collections::HashSet;
use std::sync::Arc;

use ecosprout_content::{BlogPost, TeamMember};
use ecosprout_core::{DomainError, DomainResult, ProductId, Slug, ensure_unique_ids};
use ecosprout_products::Product;

use crate::seed;

/// Read-only lookups over the content collections.
///
/// Point lookups return `None` for unknown keys; that is a valid result, not a
/// failure.
pub trait ContentStore: Send + Sync {
    fn list_products(&self) -> Vec<Product>;
    fn get_product(&self, id: &ProductId) -> Option<Product>;
    fn list_blog_posts(&self) -> Vec<BlogPost>;
    fn get_blog_post_by_slug(&self, slug: &str) -> Option<BlogPost>;
    fn list_team_members(&self) -> Vec<TeamMember>;
}

impl<S> ContentStore for Arc<S>
where
    S: ContentStore + ?Sized,
{
    fn list_products(&self) -> Vec<Product> {
        (**self).list_products()
    }

    fn get_product(&self, id: &ProductId) -> Option<Product> {
        (**self).get_product(id)
    }

    fn list_blog_posts(&self) -> Vec<BlogPost> {
        (**self).list_blog_posts()
    }

    fn get_blog_post_by_slug(&self, slug: &str) -> Option<BlogPost> {
        (**self).get_blog_post_by_slug(slug)
    }

    fn list_team_members(&self) -> Vec<TeamMember> {
        (**self).list_team_members()
    }
}

/// In-memory store over fixed collections.
#[derive(Debug, Clone)]
pub struct InMemoryContentStore {
    products: Vec<Product>,
    posts: Vec<BlogPost>,
    members: Vec<TeamMember>,
}

impl InMemoryContentStore {
    /// Build a store, checking id uniqueness per collection and slug
    /// uniqueness among posts.
    pub fn from_parts(
        products: Vec<Product>,
        posts: Vec<BlogPost>,
        members: Vec<TeamMember>,
    ) -> DomainResult<Self> {
        ensure_unique_ids("products", &products)?;
        ensure_unique_ids("blog posts", &posts)?;
        ensure_unique_ids("team members", &members)?;
        ensure_unique_slugs(&posts)?;

        Ok(Self {
            products,
            posts,
            members,
        })
    }

    /// The EcoSprout demo dataset.
    ///
    /// # Panics
    ///
    /// Only if the compiled-in seed data breaks its own invariants, which the
    /// tests in this module rule out.
    pub fn seeded() -> Self {
        let posts = seed::blog_posts().expect("seed blog posts are well-formed");
        let store = Self::from_parts(seed::products(), posts, seed::team_members())
            .expect("seed collections have unique ids and slugs");

        tracing::debug!(
            products = store.products.len(),
            posts = store.posts.len(),
            members = store.members.len(),
            "content store seeded"
        );
        store
    }

    pub fn empty() -> Self {
        Self {
            products: Vec::new(),
            posts: Vec::new(),
            members: Vec::new(),
        }
    }
}

impl Default for InMemoryContentStore {
    fn default() -> Self {
        Self::seeded()
    }
}

/// Check slug uniqueness across a post collection.
pub fn ensure_unique_slugs(posts: &[BlogPost]) -> DomainResult<()> {
    let mut seen: HashSet<&Slug> = HashSet::with_capacity(posts.len());
    for post in posts {
        if !seen.insert(&post.slug) {
            return Err(DomainError::invariant(format!(
                "duplicate slug '{}' in blog posts",
                post.slug
            )));
        }
    }
    Ok(())
}

impl ContentStore for InMemoryContentStore {
    fn list_products(&self) -> Vec<Product> {
        self.products.clone()
    }

    fn get_product(&self, id: &ProductId) -> Option<Product> {
        self.products.iter().find(|p| &p.id == id).cloned()
    }

    fn list_blog_posts(&self) -> Vec<BlogPost> {
        self.posts.clone()
    }

    fn get_blog_post_by_slug(&self, slug: &str) -> Option<BlogPost> {
        self.posts.iter().find(|p| p.slug.as_str() == slug).cloned()
    }

    fn list_team_members(&self) -> Vec<TeamMember> {
        self.members.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ecosprout_products::Category;

    #[test]
    fn seeded_collections_have_expected_sizes() {
        let store = InMemoryContentStore::seeded();
        assert_eq!(store.list_products().len(), 4);
        assert_eq!(store.list_blog_posts().len(), 3);
        assert_eq!(store.list_team_members().len(), 4);
    }

    #[test]
    fn list_preserves_insertion_order() {
        let store = InMemoryContentStore::seeded();
        let names: Vec<String> = store.list_products().into_iter().map(|p| p.name).collect();
        assert_eq!(
            names,
            vec![
                "EcoBox Premium",
                "Compostable Food Containers",
                "Recycled Paper Bags",
                "Beeswax Food Wraps"
            ]
        );
    }

    #[test]
    fn get_product_returns_the_exact_record() {
        let store = InMemoryContentStore::seeded();
        let product = store.get_product(&ProductId::new("1")).unwrap();
        assert_eq!(product.name, "EcoBox Premium");
        assert_eq!(product.category, Category::Boxes);
        assert_eq!(product.price.cents(), 299);
        assert_eq!(Some(product), store.list_products().into_iter().next());
    }

    #[test]
    fn unknown_product_is_absent() {
        let store = InMemoryContentStore::seeded();
        assert!(store.get_product(&ProductId::new("999")).is_none());
    }

    #[test]
    fn blog_post_lookup_is_by_slug() {
        let store = InMemoryContentStore::seeded();
        let post = store
            .get_blog_post_by_slug("science-compostable-packaging-materials")
            .unwrap();
        assert_eq!(post.author.name, "Dr. Emma Wilson");
        assert!(store.get_blog_post_by_slug("3").is_none());
        assert!(store.get_blog_post_by_slug("no-such-post").is_none());
    }

    #[test]
    fn duplicate_product_id_is_rejected() {
        let mut products = seed::products();
        products[1].id = products[0].id.clone();

        let err = InMemoryContentStore::from_parts(products, Vec::new(), Vec::new()).unwrap_err();
        assert!(matches!(err, DomainError::InvariantViolation(_)));
    }

    #[test]
    fn duplicate_slug_is_rejected() {
        let mut posts = seed::blog_posts().unwrap();
        posts[2].slug = posts[0].slug.clone();

        let err = InMemoryContentStore::from_parts(Vec::new(), posts, Vec::new()).unwrap_err();
        match err {
            DomainError::InvariantViolation(msg) => assert!(msg.contains("slug")),
            _ => panic!("Expected InvariantViolation for duplicate slug"),
        }
    }

    #[test]
    fn empty_store_answers_empty() {
        let store = InMemoryContentStore::empty();
        assert!(store.list_products().is_empty());
        assert!(store.get_product(&ProductId::new("1")).is_none());
    }

    #[test]
    fn shared_store_delegates_through_arc() {
        let store: Arc<dyn ContentStore> = Arc::new(InMemoryContentStore::seeded());
        assert_eq!(store.list_team_members().len(), 4);
    }
}
