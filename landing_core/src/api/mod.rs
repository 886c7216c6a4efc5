//! The landing REST API seam.
//!
//! [`LandingApi`] is what every flow depends on; [`HttpLandingApi`] is the
//! reqwest implementation used in the browser (reqwest runs on `fetch` there).

mod http;

pub use http::{HttpLandingApi, SESSION_HEADER};

use tracing::warn;

use crate::error::LandingError;
use crate::model::{ClickEvent, EmailSource, ExitIntentCopy, JoinResponse, LandingPage};

/// Read-mostly landing endpoints.
///
/// Futures are not required to be `Send`: everything runs on the UI thread.
#[allow(async_fn_in_trait)]
pub trait LandingApi {
    /// `GET /page`, honoring the conditional cache.
    async fn fetch_page(&self) -> Result<LandingPage, LandingError>;

    /// `GET /exit-intent`
    async fn fetch_exit_intent(&self) -> Result<ExitIntentCopy, LandingError>;

    /// `POST /join`
    async fn join(&self, email: &str, source: EmailSource) -> Result<JoinResponse, LandingError>;

    /// `POST /cta-click`
    async fn track_click(&self, click: &ClickEvent) -> Result<(), LandingError>;
}

/// Last page body and the `ETag` it came with.
#[derive(Debug, Clone, Default)]
pub struct PageCache {
    etag: Option<String>,
    page: Option<LandingPage>,
}

impl PageCache {
    /// Value for `If-None-Match`, only when a body is held to fall back on.
    pub fn etag(&self) -> Option<&str> {
        self.page.as_ref().and(self.etag.as_deref())
    }

    /// Remember a fresh 200 response.
    pub fn store(&mut self, etag: Option<String>, page: &LandingPage) {
        if let Some(held) = self.page.as_ref().filter(|held| page.version < held.version) {
            warn!(
                held = held.version,
                received = page.version,
                "landing page version went backwards"
            );
        }
        self.etag = etag.or_else(|| (!page.etag.is_empty()).then(|| page.etag.clone()));
        self.page = Some(page.clone());
    }

    /// Resolve a `304 Not Modified`.
    pub fn not_modified(&self) -> Result<LandingPage, LandingError> {
        self.page.clone().ok_or(LandingError::NotModified)
    }
}
