//! Shared handles for the page, provided once at mount.

use std::rc::Rc;

use leptos::html::Div;
use leptos::prelude::*;
use leptos::task::spawn_local;
use lendcommunity_core::model::{ClickEvent, ExitIntentCopy};
use lendcommunity_core::session::SessionId;
use lendcommunity_core::{
    CaptureGate, CloseReason, ExitIntentFlow, HttpLandingApi, LandingConfig, tracking,
};

use crate::browser::{self, BrowserModalHost, BrowserSessionStore};

pub type Flow = ExitIntentFlow<HttpLandingApi, Rc<BrowserSessionStore>, BrowserModalHost>;

/// `Copy` handles to the API client, the exit-intent flow and the modal.
///
/// The `Rc`s live in local arena storage so views and handlers only ever
/// capture plain keys.
#[derive(Clone, Copy)]
pub struct LandingContext {
    pub config: StoredValue<LandingConfig>,
    pub api: StoredValue<Rc<HttpLandingApi>, LocalStorage>,
    pub flow: StoredValue<Rc<Flow>, LocalStorage>,
    pub modal_copy: RwSignal<Option<ExitIntentCopy>>,
    pub dialog: NodeRef<Div>,
}

impl LandingContext {
    /// Build the client, session state and exit-intent flow for this page.
    pub fn new(config: LandingConfig) -> Self {
        let config = config.resolve_origin(&browser::origin());
        let store = Rc::new(BrowserSessionStore::open());
        let session_id = SessionId::load_or_create(store.as_ref(), || {
            SessionId::mint(browser::now_ms(), browser::random_unit())
        });
        let api = Rc::new(HttpLandingApi::new(
            &config,
            session_id,
            browser::attribution(),
        ));

        let host = BrowserModalHost {
            copy: RwSignal::new(None),
            dialog: NodeRef::new(),
        };
        let flow = Rc::new(ExitIntentFlow::new(
            Rc::clone(&api),
            CaptureGate::new(store),
            host,
        ));

        Self {
            config: StoredValue::new(config),
            api: StoredValue::new_local(api),
            flow: StoredValue::new_local(flow),
            modal_copy: host.copy,
            dialog: host.dialog,
        }
    }

    pub fn provide(self) {
        provide_context(self);
    }

    pub fn api(&self) -> Rc<HttpLandingApi> {
        self.api.get_value()
    }

    pub fn flow(&self) -> Rc<Flow> {
        self.flow.get_value()
    }

    /// Fire-and-forget click tracking.
    pub fn track(&self, click: ClickEvent) {
        tracking::dispatch(self.api(), click, spawn_local);
    }

    /// Counter change from the exit-intent detector.
    pub fn trigger(&self, count: u64) {
        let flow = self.flow();
        spawn_local(async move {
            flow.on_trigger(count).await;
        });
    }

    /// Open the modal outside the detector (teaser unlock).
    pub fn open_exit_intent(&self) {
        let flow = self.flow();
        spawn_local(async move {
            flow.open().await;
        });
    }

    pub fn close_exit_intent(&self, reason: CloseReason) {
        self.flow().close(reason);
    }
}

pub fn use_landing() -> LandingContext {
    expect_context::<LandingContext>()
}
