//! Product listing: filter by category, search name, description and features.

use ecosprout_products::{Category, Product};

use crate::engine::{Facet, Filterable};

impl Facet for Category {
    fn key(&self) -> String {
        self.as_str().to_string()
    }

    fn label(&self) -> String {
        Category::label(self).to_string()
    }
}

impl Filterable for Product {
    type Key = Category;

    fn in_facet(&self, key: &Category) -> bool {
        &self.category == key
    }

    fn search_fields(&self) -> Vec<&str> {
        let mut fields = Vec::with_capacity(2 + self.features.len());
        fields.push(self.name.as_str());
        fields.push(self.description.as_str());
        fields.extend(self.features.iter().map(String::as_str));
        fields
    }

    fn is_featured(&self) -> bool {
        self.featured
    }
}

#[cfg(test)]
mod tests {
    use ecosprout_core::ProductId;
    use ecosprout_products::{Price, Sustainability};
    use ecosprout_store::{ContentStore, InMemoryContentStore};
    use proptest::prelude::*;

    use super::*;
    use crate::engine::{FilterCriteria, Selector, apply};

    fn seeded() -> Vec<Product> {
        InMemoryContentStore::seeded().list_products()
    }

    fn names(products: impl IntoIterator<Item = Product>) -> Vec<String> {
        products.into_iter().map(|p| p.name).collect()
    }

    #[test]
    fn compost_search_finds_compostable_products() {
        let view = apply(&seeded(), &FilterCriteria::new("compost", Selector::All));
        let found = names(view.into_matches());

        assert!(found.contains(&"Compostable Food Containers".to_string()));
        assert!(found.contains(&"Beeswax Food Wraps".to_string()));
        assert!(!found.contains(&"Recycled Paper Bags".to_string()));
    }

    #[test]
    fn boxes_category_is_exactly_ecobox() {
        let view = apply(&seeded(), &FilterCriteria::new("", Selector::Only(Category::Boxes)));
        assert_eq!(names(view.into_matches()), vec!["EcoBox Premium"]);
    }

    #[test]
    fn search_reaches_feature_list() {
        let view = apply(&seeded(), &FilterCriteria::new("twisted handles", Selector::All));
        assert_eq!(names(view.into_matches()), vec!["Recycled Paper Bags"]);
    }

    #[test]
    fn default_view_features_three_seeded_products() {
        let view = apply(&seeded(), &FilterCriteria::default());
        assert_eq!(
            names(view.featured.clone()),
            vec!["EcoBox Premium", "Compostable Food Containers", "Beeswax Food Wraps"]
        );
        assert_eq!(names(view.regular), vec!["Recycled Paper Bags"]);
    }

    #[test]
    fn no_match_gives_empty_summary() {
        let criteria = FilterCriteria::new("styrofoam", Selector::Only(Category::Bags));
        let view = apply(&seeded(), &criteria);
        assert!(view.is_empty());
        assert_eq!(
            view.summary("product", &criteria),
            "Showing 0 products in Bags matching \"styrofoam\""
        );
    }

    fn arb_category() -> impl Strategy<Value = Category> {
        prop::sample::select(Category::ALL.to_vec())
    }

    fn arb_product() -> impl Strategy<Value = Product> {
        (
            "[a-e]{1,3}",
            "[a-eA-E ]{0,12}",
            "[a-eA-E ]{0,12}",
            prop::collection::vec("[a-e]{0,6}", 0..3),
            arb_category(),
            any::<bool>(),
        )
            .prop_map(|(id, name, description, features, category, featured)| Product {
                id: ProductId::new(id),
                name,
                description,
                short_description: String::new(),
                price: Price::from_cents(100),
                images: Vec::new(),
                category,
                features,
                sustainability: Sustainability::default(),
                dimensions: None,
                in_stock: true,
                featured,
            })
    }

    fn arb_criteria() -> impl Strategy<Value = FilterCriteria<Category>> {
        (
            "[a-eA-E]{0,2}",
            prop::option::of(arb_category()),
        )
            .prop_map(|(search, category)| {
                let selector = category.map(Selector::Only).unwrap_or(Selector::All);
                FilterCriteria::new(search, selector)
            })
    }

    fn matches(product: &Product, criteria: &FilterCriteria<Category>) -> bool {
        let in_category = criteria
            .selector
            .as_only()
            .is_none_or(|c| &product.category == c);
        let needle = criteria.term().to_lowercase();
        in_category && (needle.is_empty() || product.matches_term(&needle))
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 500,
            ..ProptestConfig::default()
        })]

        /// Property: filtering twice with the same criteria changes nothing.
        #[test]
        fn filtering_is_idempotent(
            products in prop::collection::vec(arb_product(), 0..12),
            criteria in arb_criteria()
        ) {
            let once = apply(&products, &criteria);
            let twice = apply(&once.clone().into_matches(), &criteria);
            prop_assert_eq!(once, twice);
        }

        /// Property: no selector and no term returns the collection unchanged.
        #[test]
        fn unrestricted_view_is_the_whole_collection(
            products in prop::collection::vec(arb_product(), 0..12)
        ) {
            let view = apply(&products, &FilterCriteria::default());
            prop_assert_eq!(view.total(), products.len());

            let featured: Vec<Product> = products.iter().filter(|p| p.featured).cloned().collect();
            let regular: Vec<Product> = products.iter().filter(|p| !p.featured).cloned().collect();
            prop_assert_eq!(view.featured, featured);
            prop_assert_eq!(view.regular, regular);
        }

        /// Property: every matching record appears exactly once, nothing else appears.
        #[test]
        fn each_match_appears_exactly_once(
            products in prop::collection::vec(arb_product(), 0..12),
            criteria in arb_criteria()
        ) {
            let view = apply(&products, &criteria);
            let expected: Vec<&Product> = products.iter().filter(|p| matches(p, &criteria)).collect();
            prop_assert_eq!(view.total(), expected.len());
            for item in view.iter() {
                prop_assert!(matches(item, &criteria));
            }
            if !criteria.is_default_view() {
                let listed: Vec<&Product> = view.iter().collect();
                prop_assert_eq!(listed, expected);
            }
        }
    }
}
