//! `ecosprout-site`: what each page of the site shows, minus the markup.
//!
//! Resolves links to [`Route`]s, mounts the matching [`Page`] and loads it
//! through the data access facade.

pub mod pages;
pub mod routes;

use ecosprout_client::{ApiClient, Cancelled, RequestScope};

pub use pages::{
    AboutPage, BlogPage, BlogPostPage, ContactPage, FacetOption, Loadable, Notice, NoticeKind,
    Page, ProductDetailsPage, ProductsPage,
};
pub use routes::Route;

/// Resolve `link`, mount its page and load it to completion.
pub async fn open(client: &ApiClient, link: &str) -> Result<(Route, Page), Cancelled> {
    let route = Route::parse(link);
    let scope = RequestScope::new(route.path());
    tracing::debug!(route = %route, "mounting page");

    let mut page = Page::mount(&route);
    page.load(client, scope.handle()).await?;
    Ok((route, page))
}
