//! Page view state.
//!
//! Each page owns the data it fetched and everything it derives from it (the
//! filtered listing, the result line, the form notice). Nothing is shared
//! between pages: opening the same listing twice fetches twice.
//!
//! Loads run under a [`ScopeHandle`]. When the owning view goes away its
//! [`RequestScope`](ecosprout_client::RequestScope) is cancelled, the request is
//! abandoned and the page is left untouched.

use serde::Serialize;

use ecosprout_client::{ApiClient, Cancelled, Fetched, ScopeHandle};
use ecosprout_contact::{ContactSubmission, InquiryType};
use ecosprout_content::{BlogPost, TeamMember};
use ecosprout_core::ProductId;
use ecosprout_filter::{Facet, FilterCriteria, FilteredView, Selector, apply, blog_tags};
use ecosprout_products::{Category, Product, SustainabilityBadge};

use crate::routes::Route;

/// Data a page is waiting for or has received.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", content = "content", rename_all = "lowercase")]
pub enum Loadable<T> {
    Loading,
    Ready(Fetched<T>),
}

impl<T> Loadable<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, Loadable::Loading)
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            Loadable::Loading => None,
            Loadable::Ready(fetched) => Some(fetched.data()),
        }
    }
}

/// One entry of a category/tag dropdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FacetOption {
    pub value: String,
    pub label: String,
}

impl FacetOption {
    fn all(label: &str) -> Self {
        Self {
            value: ecosprout_filter::engine::ALL.to_string(),
            label: label.to_string(),
        }
    }

    fn of<K: Facet>(key: &K) -> Self {
        Self {
            value: key.key(),
            label: key.label(),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Listings
// ─────────────────────────────────────────────────────────────────────────────

const CATEGORY_MENU: [Category; 4] = [
    Category::Boxes,
    Category::Bags,
    Category::Containers,
    Category::Wrapping,
];

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductsPage {
    criteria: FilterCriteria<Category>,
    products: Loadable<Vec<Product>>,
    view: Option<FilteredView<Product>>,
    summary: Option<String>,
}

impl ProductsPage {
    pub fn new(category: Selector<Category>) -> Self {
        Self {
            criteria: FilterCriteria::new("", category),
            products: Loadable::Loading,
            view: None,
            summary: None,
        }
    }

    pub async fn load(&mut self, client: &ApiClient, scope: ScopeHandle) -> Result<(), Cancelled> {
        let fetched = scope.run(client.get_products()).await?;
        self.products = Loadable::Ready(fetched);
        self.refresh();
        Ok(())
    }

    pub fn set_search(&mut self, term: impl Into<String>) {
        self.criteria.search = term.into();
        self.refresh();
    }

    pub fn set_category(&mut self, category: Selector<Category>) {
        self.criteria.selector = category;
        self.refresh();
    }

    pub fn criteria(&self) -> &FilterCriteria<Category> {
        &self.criteria
    }

    pub fn products(&self) -> &Loadable<Vec<Product>> {
        &self.products
    }

    /// `None` while loading.
    pub fn view(&self) -> Option<&FilteredView<Product>> {
        self.view.as_ref()
    }

    pub fn summary(&self) -> Option<&str> {
        self.summary.as_deref()
    }

    pub fn categories() -> Vec<FacetOption> {
        std::iter::once(FacetOption::all("All Products"))
            .chain(CATEGORY_MENU.iter().map(FacetOption::of))
            .collect()
    }

    fn refresh(&mut self) {
        if let Some(products) = self.products.data() {
            let view = apply(products, &self.criteria);
            self.summary = Some(view.summary("product", &self.criteria));
            self.view = Some(view);
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPage {
    criteria: FilterCriteria<String>,
    posts: Loadable<Vec<BlogPost>>,
    tags: Vec<FacetOption>,
    view: Option<FilteredView<BlogPost>>,
    summary: Option<String>,
}

impl BlogPage {
    pub fn new(tag: Selector<String>) -> Self {
        Self {
            criteria: FilterCriteria::new("", tag),
            posts: Loadable::Loading,
            tags: vec![FacetOption::all("All Topics")],
            view: None,
            summary: None,
        }
    }

    pub async fn load(&mut self, client: &ApiClient, scope: ScopeHandle) -> Result<(), Cancelled> {
        let fetched = scope.run(client.get_blog_posts()).await?;
        let tags = blog_tags(fetched.data());

        // A tag no post carries is not in the menu; show everything instead.
        if let Selector::Only(tag) = &self.criteria.selector {
            if !tags.contains(tag) {
                tracing::debug!(tag = %tag, "unknown blog tag; selecting all");
                self.criteria.selector = Selector::All;
            }
        }

        self.tags = std::iter::once(FacetOption::all("All Topics"))
            .chain(tags.iter().map(FacetOption::of))
            .collect();
        self.posts = Loadable::Ready(fetched);
        self.refresh();
        Ok(())
    }

    pub fn set_search(&mut self, term: impl Into<String>) {
        self.criteria.search = term.into();
        self.refresh();
    }

    pub fn set_tag(&mut self, tag: Selector<String>) {
        self.criteria.selector = tag;
        self.refresh();
    }

    pub fn criteria(&self) -> &FilterCriteria<String> {
        &self.criteria
    }

    pub fn posts(&self) -> &Loadable<Vec<BlogPost>> {
        &self.posts
    }

    /// Tag dropdown, `all` first, then every tag in use.
    pub fn tags(&self) -> &[FacetOption] {
        &self.tags
    }

    pub fn view(&self) -> Option<&FilteredView<BlogPost>> {
        self.view.as_ref()
    }

    pub fn summary(&self) -> Option<&str> {
        self.summary.as_deref()
    }

    fn refresh(&mut self) {
        if let Some(posts) = self.posts.data() {
            let view = apply(posts, &self.criteria);
            self.summary = Some(view.summary("article", &self.criteria));
            self.view = Some(view);
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Detail pages
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDetailsPage {
    id: ProductId,
    product: Loadable<Option<Product>>,
    badges: Vec<SustainabilityBadge>,
    selected_image: usize,
    quantity: u32,
}

impl ProductDetailsPage {
    pub fn new(id: ProductId) -> Self {
        Self {
            id,
            product: Loadable::Loading,
            badges: Vec::new(),
            selected_image: 0,
            quantity: 1,
        }
    }

    pub async fn load(&mut self, client: &ApiClient, scope: ScopeHandle) -> Result<(), Cancelled> {
        let fetched = scope.run(client.get_product(&self.id)).await?;
        self.badges = fetched
            .data()
            .as_ref()
            .map(Product::sustainability_badges)
            .unwrap_or_default();
        self.product = Loadable::Ready(fetched);
        self.selected_image = 0;
        Ok(())
    }

    pub fn product(&self) -> Option<&Product> {
        self.product.data().and_then(Option::as_ref)
    }

    /// Loaded, and there is no such product.
    pub fn is_not_found(&self) -> bool {
        matches!(self.product.data(), Some(None))
    }

    pub fn is_loading(&self) -> bool {
        self.product.is_loading()
    }

    pub fn badges(&self) -> &[SustainabilityBadge] {
        &self.badges
    }

    pub fn selected_image(&self) -> usize {
        self.selected_image
    }

    /// Image shown in the main slot.
    pub fn main_image(&self) -> Option<&str> {
        self.product()
            .and_then(|p| p.images.get(self.selected_image))
            .map(String::as_str)
    }

    /// Pick a gallery thumbnail. Out-of-range indexes are ignored.
    pub fn select_image(&mut self, index: usize) {
        let count = self.product().map_or(0, |p| p.images.len());
        if index < count {
            self.selected_image = index;
        }
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn increment_quantity(&mut self) {
        self.quantity = self.quantity.saturating_add(1);
    }

    /// Never goes below one.
    pub fn decrement_quantity(&mut self) {
        self.quantity = self.quantity.saturating_sub(1).max(1);
    }

    pub fn set_quantity(&mut self, quantity: u32) {
        self.quantity = quantity.max(1);
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPostPage {
    slug: String,
    post: Loadable<Option<BlogPost>>,
}

impl BlogPostPage {
    pub fn new(slug: impl Into<String>) -> Self {
        Self {
            slug: slug.into(),
            post: Loadable::Loading,
        }
    }

    pub async fn load(&mut self, client: &ApiClient, scope: ScopeHandle) -> Result<(), Cancelled> {
        self.post = Loadable::Ready(scope.run(client.get_blog_post(&self.slug)).await?);
        Ok(())
    }

    pub fn post(&self) -> Option<&BlogPost> {
        self.post.data().and_then(Option::as_ref)
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self.post.data(), Some(None))
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AboutPage {
    /// Scroll to the team section once loaded.
    pub team_anchor: bool,
    team: Loadable<Vec<TeamMember>>,
}

impl AboutPage {
    pub fn new(team_anchor: bool) -> Self {
        Self {
            team_anchor,
            team: Loadable::Loading,
        }
    }

    pub async fn load(&mut self, client: &ApiClient, scope: ScopeHandle) -> Result<(), Cancelled> {
        self.team = Loadable::Ready(scope.run(client.get_team_members()).await?);
        Ok(())
    }

    pub fn team(&self) -> &Loadable<Vec<TeamMember>> {
        &self.team
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Contact form
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeKind {
    Success,
    Destructive,
}

/// Toast raised by the contact form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub title: String,
    pub description: String,
    pub kind: NoticeKind,
}

impl Notice {
    fn success(title: &str, description: impl Into<String>) -> Self {
        Self {
            title: title.to_string(),
            description: description.into(),
            kind: NoticeKind::Success,
        }
    }

    fn destructive(title: &str, description: &str) -> Self {
        Self {
            title: title.to_string(),
            description: description.to_string(),
            kind: NoticeKind::Destructive,
        }
    }

    pub fn missing_information() -> Self {
        Self::destructive("Missing Information", "Please fill in all required fields.")
    }

    pub fn invalid_email() -> Self {
        Self::destructive("Invalid Email", "Please enter a valid email address.")
    }

    pub fn send_failed() -> Self {
        Self::destructive("Error", "Failed to send message. Please try again.")
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactPage {
    /// Form contents, edited in place by the view.
    pub form: ContactSubmission,
    submitting: bool,
    notice: Option<Notice>,
}

impl ContactPage {
    pub fn new(inquiry: InquiryType) -> Self {
        Self {
            form: ContactSubmission {
                inquiry_type: inquiry,
                ..ContactSubmission::default()
            },
            submitting: false,
            notice: None,
        }
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    /// Validate and send the form.
    ///
    /// An incomplete form raises a notice and sends nothing. A successful send
    /// clears the form; a failed one keeps it so the visitor can retry.
    pub async fn submit(&mut self, client: &ApiClient, scope: ScopeHandle) -> Result<(), Cancelled> {
        if !self.form.missing_fields().is_empty() {
            self.notice = Some(Notice::missing_information());
            return Ok(());
        }
        let submission = match self.form.clone().validate() {
            Ok(submission) => submission,
            Err(e) => {
                tracing::debug!(error = %e, "contact form rejected");
                self.notice = Some(Notice::invalid_email());
                return Ok(());
            }
        };

        self.submitting = true;
        self.notice = None;
        let sent = scope.run(client.submit_contact_form(&submission)).await;
        self.submitting = false;

        let response = sent?.into_inner();
        if response.success {
            self.notice = Some(Notice::success("Message Sent!", response.message));
            self.form = ContactSubmission::default();
        } else {
            tracing::warn!(reply = %response.message, "contact submission refused");
            self.notice = Some(Notice::send_failed());
        }
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Router outlet
// ─────────────────────────────────────────────────────────────────────────────

/// The page mounted for a [`Route`].
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "page", rename_all = "camelCase")]
pub enum Page {
    Home,
    Products(ProductsPage),
    ProductDetails(ProductDetailsPage),
    Blog(BlogPage),
    BlogPost(BlogPostPage),
    About(AboutPage),
    Contact(ContactPage),
    NotFound { path: String },
}

impl Page {
    pub fn mount(route: &Route) -> Page {
        match route {
            Route::Home => Page::Home,
            Route::Products { category } => Page::Products(ProductsPage::new(category.clone())),
            Route::ProductDetails { id } => Page::ProductDetails(ProductDetailsPage::new(id.clone())),
            Route::Blog { tag } => Page::Blog(BlogPage::new(tag.clone())),
            Route::BlogPost { slug } => Page::BlogPost(BlogPostPage::new(slug.clone())),
            Route::About { team_anchor } => Page::About(AboutPage::new(*team_anchor)),
            Route::Contact { inquiry } => Page::Contact(ContactPage::new(*inquiry)),
            Route::NotFound { path } => Page::NotFound { path: path.clone() },
        }
    }

    /// Fetch whatever the page shows. Pages without remote data return at once.
    pub async fn load(&mut self, client: &ApiClient, scope: ScopeHandle) -> Result<(), Cancelled> {
        match self {
            Page::Products(page) => page.load(client, scope).await,
            Page::ProductDetails(page) => page.load(client, scope).await,
            Page::Blog(page) => page.load(client, scope).await,
            Page::BlogPost(page) => page.load(client, scope).await,
            Page::About(page) => page.load(client, scope).await,
            Page::Home | Page::Contact(_) | Page::NotFound { .. } => Ok(()),
        }
    }
}
