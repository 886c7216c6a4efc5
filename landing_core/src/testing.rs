//! In-crate fakes shared by unit tests.

use std::cell::{Cell, RefCell};

use crate::api::LandingApi;
use crate::error::LandingError;
use crate::exit_intent::ModalHost;
use crate::model::{
    ClickEvent, Cta, CtaAction, EmailSource, ExitIntentCopy, Hero, JoinResponse, LandingPage,
    TeaserSection,
};

pub fn copy(can_show_now: bool) -> ExitIntentCopy {
    ExitIntentCopy {
        headline: "Before you go".into(),
        body: Some("Get first look at new local campaigns.".into()),
        cta_label: "Keep me posted".into(),
        cta_action: CtaAction::OpenSignup,
        cta_url: None,
        image_url: None,
        can_show_now,
    }
}

pub fn page(version: u64, exit_intent: Option<ExitIntentCopy>) -> LandingPage {
    LandingPage {
        locale: "en-US".into(),
        version,
        etag: format!("\"v{version}\""),
        hero: Hero {
            headline: "Fund local dreams".into(),
            subheadline: None,
            primary_cta: Cta {
                label: "Join".into(),
                action: CtaAction::OpenSignup,
                url: None,
            },
            secondary_cta: None,
            bg_image_url: None,
        },
        teaser: TeaserSection::default(),
        testimonials: Vec::new(),
        disclaimers_html: None,
        exit_intent,
    }
}

/// Scripted [`LandingApi`] that records what it was asked.
pub struct FakeApi {
    page: Result<LandingPage, LandingError>,
    exit_intent: Result<ExitIntentCopy, LandingError>,
    join: Result<JoinResponse, LandingError>,
    click: Result<(), LandingError>,
    yield_on_fetch: bool,
    page_calls: Cell<usize>,
    exit_intent_calls: Cell<usize>,
    joins: RefCell<Vec<(String, EmailSource)>>,
    clicks: RefCell<Vec<ClickEvent>>,
}

impl Default for FakeApi {
    fn default() -> Self {
        Self {
            page: Err(LandingError::Status {
                endpoint: "page",
                status: 404,
            }),
            exit_intent: Err(LandingError::Status {
                endpoint: "exit-intent",
                status: 404,
            }),
            join: Ok(JoinResponse {
                ok: true,
                message: String::new(),
            }),
            click: Ok(()),
            yield_on_fetch: false,
            page_calls: Cell::new(0),
            exit_intent_calls: Cell::new(0),
            joins: RefCell::new(Vec::new()),
            clicks: RefCell::new(Vec::new()),
        }
    }
}

impl FakeApi {
    pub fn with_page(mut self, page: Result<LandingPage, LandingError>) -> Self {
        self.page = page;
        self
    }

    pub fn with_exit_intent(mut self, copy: Result<ExitIntentCopy, LandingError>) -> Self {
        self.exit_intent = copy;
        self
    }

    /// Suspend once inside `fetch_exit_intent` so concurrent callers interleave.
    pub fn yielding(mut self) -> Self {
        self.yield_on_fetch = true;
        self
    }

    pub fn with_join(mut self, response: Result<JoinResponse, LandingError>) -> Self {
        self.join = response;
        self
    }

    pub fn with_click(mut self, result: Result<(), LandingError>) -> Self {
        self.click = result;
        self
    }

    pub fn page_calls(&self) -> usize {
        self.page_calls.get()
    }

    pub fn exit_intent_calls(&self) -> usize {
        self.exit_intent_calls.get()
    }

    pub fn joins(&self) -> Vec<(String, EmailSource)> {
        self.joins.borrow().clone()
    }

    pub fn clicks(&self) -> Vec<ClickEvent> {
        self.clicks.borrow().clone()
    }
}

impl LandingApi for FakeApi {
    async fn fetch_page(&self) -> Result<LandingPage, LandingError> {
        self.page_calls.set(self.page_calls.get() + 1);
        self.page.clone()
    }

    async fn fetch_exit_intent(&self) -> Result<ExitIntentCopy, LandingError> {
        self.exit_intent_calls.set(self.exit_intent_calls.get() + 1);
        if self.yield_on_fetch {
            tokio::task::yield_now().await;
        }
        self.exit_intent.clone()
    }

    async fn join(&self, email: &str, source: EmailSource) -> Result<JoinResponse, LandingError> {
        self.joins.borrow_mut().push((email.to_owned(), source));
        self.join.clone()
    }

    async fn track_click(&self, click: &ClickEvent) -> Result<(), LandingError> {
        self.clicks.borrow_mut().push(click.clone());
        self.click.clone()
    }
}

/// [`ModalHost`] that keeps a fake `overflow` style and counts calls.
#[derive(Default)]
pub struct RecordingHost {
    overflow: RefCell<String>,
    presented: RefCell<Option<ExitIntentCopy>>,
    present_calls: Cell<usize>,
    dismiss_calls: Cell<usize>,
    focus_calls: Cell<usize>,
}

impl RecordingHost {
    pub fn with_overflow(overflow: &str) -> Self {
        Self {
            overflow: RefCell::new(overflow.to_owned()),
            ..Self::default()
        }
    }

    pub fn overflow(&self) -> String {
        self.overflow.borrow().clone()
    }

    pub fn presented(&self) -> Option<ExitIntentCopy> {
        self.presented.borrow().clone()
    }

    pub fn present_calls(&self) -> usize {
        self.present_calls.get()
    }

    pub fn dismiss_calls(&self) -> usize {
        self.dismiss_calls.get()
    }

    pub fn focus_calls(&self) -> usize {
        self.focus_calls.get()
    }
}

impl ModalHost for RecordingHost {
    fn present(&self, copy: &ExitIntentCopy) {
        self.present_calls.set(self.present_calls.get() + 1);
        *self.presented.borrow_mut() = Some(copy.clone());
    }

    fn dismiss(&self) {
        self.dismiss_calls.set(self.dismiss_calls.get() + 1);
        *self.presented.borrow_mut() = None;
    }

    fn suspend_scroll(&self) -> String {
        self.overflow.replace("hidden".to_owned())
    }

    fn restore_scroll(&self, previous: &str) {
        *self.overflow.borrow_mut() = previous.to_owned();
    }

    fn focus_primary(&self) {
        self.focus_calls.set(self.focus_calls.get() + 1);
    }
}
