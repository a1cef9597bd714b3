//! Client-side route table.

use reqwest::Url;

use ecosprout_contact::InquiryType;
use ecosprout_core::ProductId;
use ecosprout_filter::{Facet, Selector};
use ecosprout_products::Category;

const ORIGIN: &str = "http://ecosprout.local/";

/// A page the site can show, with the parameters it was opened with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    Products { category: Selector<Category> },
    ProductDetails { id: ProductId },
    Blog { tag: Selector<String> },
    BlogPost { slug: String },
    /// `team_anchor` is set for `/about#team`.
    About { team_anchor: bool },
    Contact { inquiry: InquiryType },
    NotFound { path: String },
}

impl Route {
    /// Resolve an in-site link (`/path?query#fragment`).
    ///
    /// Unknown category or inquiry values fall back to `All` / general. Blog
    /// tags are kept as given; the blog page drops one no post carries once
    /// it has loaded. Any path the site has no page for resolves to
    /// [`Route::NotFound`].
    pub fn parse(link: &str) -> Route {
        let not_found = || Route::NotFound {
            path: link.to_string(),
        };

        let Ok(url) = Url::parse(ORIGIN).and_then(|origin| origin.join(link)) else {
            return not_found();
        };

        let query = |name: &str| {
            url.query_pairs()
                .find(|(key, _)| key == name)
                .map(|(_, value)| value.into_owned())
        };

        // Ids and slugs are opaque; match on the decoded segments.
        let decoded: Result<Vec<String>, _> = url
            .path_segments()
            .into_iter()
            .flatten()
            .filter(|s| !s.is_empty())
            .map(|s| urlencoding::decode(s).map(|s| s.into_owned()))
            .collect();
        let Ok(decoded) = decoded else {
            return not_found();
        };
        let segments: Vec<&str> = decoded.iter().map(String::as_str).collect();

        match segments.as_slice() {
            [] => Route::Home,
            ["products"] => Route::Products {
                category: Selector::from_query(query("category").as_deref()),
            },
            ["products", id] => Route::ProductDetails {
                id: ProductId::new(*id),
            },
            ["blog"] => Route::Blog {
                tag: Selector::from_query(query("tag").as_deref()),
            },
            ["blog", slug] => Route::BlogPost {
                slug: slug.to_string(),
            },
            ["about"] => Route::About {
                team_anchor: url.fragment() == Some("team"),
            },
            ["contact"] => Route::Contact {
                inquiry: query("type")
                    .and_then(|raw| raw.parse().ok())
                    .unwrap_or_default(),
            },
            _ => not_found(),
        }
    }

    /// Canonical link for this route.
    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::Products { category } => with_query("/products", "category", category),
            Route::ProductDetails { id } => {
                format!("/products/{}", urlencoding::encode(id.as_str()))
            }
            Route::Blog { tag } => with_query("/blog", "tag", tag),
            Route::BlogPost { slug } => format!("/blog/{}", urlencoding::encode(slug)),
            Route::About { team_anchor: false } => "/about".to_string(),
            Route::About { team_anchor: true } => "/about#team".to_string(),
            Route::Contact {
                inquiry: InquiryType::General,
            } => "/contact".to_string(),
            Route::Contact { inquiry } => format!("/contact?type={}", inquiry.as_str()),
            Route::NotFound { path } => path.clone(),
        }
    }
}

fn with_query<K: Facet>(path: &str, name: &str, selector: &Selector<K>) -> String {
    let Some(key) = selector.as_only().map(Facet::key) else {
        return path.to_string();
    };

    match Url::parse(ORIGIN).and_then(|origin| origin.join(path)) {
        Ok(mut url) => {
            url.query_pairs_mut().append_pair(name, &key);
            match url.query() {
                Some(query) => format!("{path}?{query}"),
                None => path.to_string(),
            }
        }
        Err(_) => format!("{path}?{name}={key}"),
    }
}

impl core::fmt::Display for Route {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_every_page() {
        assert_eq!(Route::parse("/"), Route::Home);
        assert_eq!(
            Route::parse("/products"),
            Route::Products {
                category: Selector::All
            }
        );
        assert_eq!(
            Route::parse("/products?category=boxes"),
            Route::Products {
                category: Selector::Only(Category::Boxes)
            }
        );
        assert_eq!(
            Route::parse("/products/3"),
            Route::ProductDetails {
                id: ProductId::new("3")
            }
        );
        assert_eq!(
            Route::parse("/blog?tag=composting"),
            Route::Blog {
                tag: Selector::Only("composting".to_string())
            }
        );
        assert_eq!(
            Route::parse("/blog/future-sustainable-packaging-2024"),
            Route::BlogPost {
                slug: "future-sustainable-packaging-2024".to_string()
            }
        );
        assert_eq!(Route::parse("/about"), Route::About { team_anchor: false });
        assert_eq!(Route::parse("/about#team"), Route::About { team_anchor: true });
        assert_eq!(
            Route::parse("/contact?type=quote"),
            Route::Contact {
                inquiry: InquiryType::Quote
            }
        );
    }

    #[test]
    fn unknown_query_values_fall_back() {
        assert_eq!(
            Route::parse("/products?category=crates"),
            Route::Products {
                category: Selector::All
            }
        );
        assert_eq!(
            Route::parse("/products?category=all"),
            Route::Products {
                category: Selector::All
            }
        );
        assert_eq!(
            Route::parse("/contact?type=complaint"),
            Route::Contact {
                inquiry: InquiryType::General
            }
        );
    }

    #[test]
    fn trailing_slashes_are_ignored() {
        assert_eq!(Route::parse("/about/"), Route::About { team_anchor: false });
    }

    #[test]
    fn anything_else_is_not_found() {
        for link in ["/admin", "/products/1/reviews", "/blog/a/b", "/team"] {
            assert_eq!(
                Route::parse(link),
                Route::NotFound {
                    path: link.to_string()
                }
            );
        }
    }

    #[test]
    fn encoded_ids_are_decoded_and_survive_a_round_trip() {
        assert_eq!(
            Route::parse("/products/eco%20box"),
            Route::ProductDetails {
                id: ProductId::new("eco box")
            }
        );

        for id in ["eco box", "öko-tüte", "a/b", "50%"] {
            let route = Route::ProductDetails {
                id: ProductId::new(id),
            };
            assert_eq!(Route::parse(&route.path()), route, "{id}");
        }

        let post = Route::BlogPost {
            slug: "café-notes".to_string(),
        };
        assert_eq!(post.path(), "/blog/caf%C3%A9-notes");
        assert_eq!(Route::parse(&post.path()), post);
    }

    #[test]
    fn undecodable_segments_are_not_found() {
        assert!(matches!(
            Route::parse("/products/%FF%FE"),
            Route::NotFound { .. }
        ));
    }

    #[test]
    fn canonical_paths_parse_back() {
        for link in [
            "/",
            "/products",
            "/products?category=wrapping",
            "/products/2",
            "/blog",
            "/blog?tag=sustainability",
            "/blog/compost-101",
            "/about",
            "/about#team",
            "/contact",
            "/contact?type=partnership",
        ] {
            let route = Route::parse(link);
            assert_eq!(route.path(), link);
            assert_eq!(Route::parse(&route.path()), route);
        }
    }
}
