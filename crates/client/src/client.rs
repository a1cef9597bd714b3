//! The data access facade.

use std::sync::Arc;

use reqwest::{Method, Url, header};
use serde::Serialize;
use serde::de::DeserializeOwned;
use uuid::Uuid;

use ecosprout_contact::{ApiResponse, ValidatedSubmission};
use ecosprout_content::{BlogPost, TeamMember};
use ecosprout_core::{ProductId, ensure_unique_ids};
use ecosprout_products::Product;
use ecosprout_store::{ContentStore, ensure_unique_slugs};

use crate::config::ClientConfig;
use crate::error::{ConfigError, RemoteError};
use crate::fetched::Fetched;

/// Remote-first content client with local fallback.
///
/// Reads try `GET {base}/...`; on any failure (transport, non-2xx, payload that
/// does not decode or breaks a collection invariant) they wait out the
/// configured fallback delay and answer from the local store instead. Reads
/// never return an error.
///
/// Construct one per application and share it; there is no global instance.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    config: ClientConfig,
    store: Arc<dyn ContentStore>,
}

impl core::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.config.base_url().as_str())
            .finish_non_exhaustive()
    }
}

impl ApiClient {
    pub fn new(config: ClientConfig, store: Arc<dyn ContentStore>) -> Result<Self, ConfigError> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()?;

        Ok(Self {
            http,
            config,
            store,
        })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub async fn get_products(&self) -> Fetched<Vec<Product>> {
        let remote = self
            .get::<Vec<Product>>(&["products"])
            .await
            .and_then(|products| {
                ensure_unique_ids("products", &products)
                    .map_err(|e| RemoteError::Invariant(e.to_string()))?;
                Ok(products)
            });

        self.settle("get_products", remote, |store| store.list_products())
            .await
    }

    pub async fn get_product(&self, id: &ProductId) -> Fetched<Option<Product>> {
        let remote = self
            .get::<Product>(&["products", id.as_str()])
            .await
            .and_then(|product| {
                if &product.id == id {
                    Ok(Some(product))
                } else {
                    Err(RemoteError::Invariant(format!(
                        "asked for product '{id}', got '{}'",
                        product.id
                    )))
                }
            });

        self.settle("get_product", remote, |store| store.get_product(id))
            .await
    }

    pub async fn get_blog_posts(&self) -> Fetched<Vec<BlogPost>> {
        let remote = self
            .get::<Vec<BlogPost>>(&["blog"])
            .await
            .and_then(|posts| {
                ensure_unique_ids("blog posts", &posts)
                    .and_then(|_| ensure_unique_slugs(&posts))
                    .map_err(|e| RemoteError::Invariant(e.to_string()))?;
                Ok(posts)
            });

        self.settle("get_blog_posts", remote, |store| store.list_blog_posts())
            .await
    }

    pub async fn get_blog_post(&self, slug: &str) -> Fetched<Option<BlogPost>> {
        let remote = self
            .get::<BlogPost>(&["blog", slug])
            .await
            .and_then(|post| {
                if post.slug.as_str() == slug {
                    Ok(Some(post))
                } else {
                    Err(RemoteError::Invariant(format!(
                        "asked for post '{slug}', got '{}'",
                        post.slug
                    )))
                }
            });

        self.settle("get_blog_post", remote, |store| {
            store.get_blog_post_by_slug(slug)
        })
        .await
    }

    pub async fn get_team_members(&self) -> Fetched<Vec<TeamMember>> {
        let remote = self
            .get::<Vec<TeamMember>>(&["team"])
            .await
            .and_then(|members| {
                ensure_unique_ids("team members", &members)
                    .map_err(|e| RemoteError::Invariant(e.to_string()))?;
                Ok(members)
            });

        self.settle("get_team_members", remote, |store| store.list_team_members())
            .await
    }

    /// Send a validated contact submission.
    ///
    /// Demo behavior: when the remote cannot be reached (or answers non-2xx or
    /// garbage) a success acknowledgement is synthesized locally after the
    /// fallback delay. A remote that answers `success: false` is passed through
    /// as-is; callers treat that as a failed submission. Whatever the remote
    /// echoes in `data` is kept as raw JSON.
    pub async fn submit_contact_form(
        &self,
        submission: &ValidatedSubmission,
    ) -> Fetched<ApiResponse<serde_json::Value>> {
        let remote = self
            .request::<ApiResponse<serde_json::Value>, _>(Method::POST, &["contact"], Some(submission))
            .await;

        match remote {
            Ok(data) => Fetched::Live { data },
            Err(reason) => {
                tracing::warn!(
                    operation = "submit_contact_form",
                    %reason,
                    "contact endpoint unavailable; synthesizing demo acknowledgement"
                );
                tokio::time::sleep(self.config.fallback_delay()).await;
                Fetched::Fallback {
                    data: ApiResponse::demo_acknowledgement(),
                    reason,
                }
            }
        }
    }

    async fn settle<T>(
        &self,
        operation: &'static str,
        remote: Result<T, RemoteError>,
        local: impl FnOnce(&dyn ContentStore) -> T,
    ) -> Fetched<T> {
        match remote {
            Ok(data) => Fetched::Live { data },
            Err(reason) => {
                tracing::warn!(operation, %reason, "remote fetch failed; serving local content");
                tokio::time::sleep(self.config.fallback_delay()).await;
                Fetched::Fallback {
                    data: local(self.store.as_ref()),
                    reason,
                }
            }
        }
    }

    async fn get<T: DeserializeOwned>(&self, segments: &[&str]) -> Result<T, RemoteError> {
        self.request::<T, ()>(Method::GET, segments, None).await
    }

    async fn request<T, B>(
        &self,
        method: Method,
        segments: &[&str],
        body: Option<&B>,
    ) -> Result<T, RemoteError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let url: Url = self.config.endpoint(segments);
        let request_id = Uuid::now_v7();
        tracing::debug!(%request_id, %method, %url, "remote request");

        let mut req = self
            .http
            .request(method, url)
            .header(header::CONTENT_TYPE, "application/json");
        if let Some(body) = body {
            req = req.json(body);
        }

        let resp = req.send().await?;
        let status = resp.status();
        if !status.is_success() {
            tracing::debug!(%request_id, status = status.as_u16(), "remote answered non-success");
            return Err(RemoteError::Status(status.as_u16()));
        }

        let bytes = resp.bytes().await?;
        let data = serde_json::from_slice(&bytes).map_err(|e| RemoteError::Decode(e.to_string()))?;
        tracing::debug!(%request_id, "remote request succeeded");
        Ok(data)
    }
}
