//! Page-level state: the landing view-model and its load status.

use tracing::{debug, error};

use crate::api::LandingApi;
use crate::error::LandingError;
use crate::model::{ExitIntentCopy, LandingPage};

#[derive(Debug, Clone, PartialEq)]
pub enum PageState {
    Loading,
    Ready(Box<LandingPage>),
    /// Terminal for this page lifetime; the visitor has to reload
    Failed(LandingError),
}

/// Holds the landing payload fetched once per page load.
#[derive(Debug, Clone, PartialEq)]
pub struct LandingStore {
    state: PageState,
    requested: bool,
}

impl Default for LandingStore {
    fn default() -> Self {
        Self::new()
    }
}

impl LandingStore {
    pub fn new() -> Self {
        Self {
            state: PageState::Loading,
            requested: false,
        }
    }

    /// Claim the single initial fetch. Only the first call returns true.
    pub fn begin_fetch(&mut self) -> bool {
        !std::mem::replace(&mut self.requested, true)
    }

    /// Record the outcome of the initial fetch. Later results are ignored.
    pub fn apply(&mut self, result: Result<LandingPage, LandingError>) {
        if !matches!(self.state, PageState::Loading) {
            debug!("landing result ignored: store already settled");
            return;
        }
        self.state = match result {
            Ok(page) => {
                debug!(version = page.version, "landing page ready");
                PageState::Ready(Box::new(page))
            }
            Err(err) => {
                error!(error = %err, "landing page failed to load");
                PageState::Failed(err)
            }
        };
    }

    /// Fetch and apply in one go; a no-op after the first call.
    pub async fn load<A: LandingApi + ?Sized>(&mut self, api: &A) -> &PageState {
        if self.begin_fetch() {
            let result = api.fetch_page().await;
            self.apply(result);
        }
        &self.state
    }

    pub fn state(&self) -> &PageState {
        &self.state
    }

    pub fn error(&self) -> Option<&LandingError> {
        match &self.state {
            PageState::Failed(err) => Some(err),
            _ => None,
        }
    }

    pub fn data(&self) -> Option<&LandingPage> {
        match &self.state {
            PageState::Ready(page) => Some(page),
            _ => None,
        }
    }

    /// Exit-intent copy bundled with the payload, if any.
    pub fn exit_intent(&self) -> Option<&ExitIntentCopy> {
        self.data().and_then(|page| page.exit_intent.as_ref())
    }
}
