//! Browser plumbing behind the core's seams: session storage, the modal host,
//! page configuration, attribution and navigation helpers.

use leptos::html::Div;
use leptos::prelude::*;
use lendcommunity_core::exit_intent::{FOCUSABLE_SELECTOR, FocusCandidate, tab_stops};
use lendcommunity_core::join::Attribution;
use lendcommunity_core::model::ExitIntentCopy;
use lendcommunity_core::{LandingConfig, LandingError, MemorySessionStore, ModalHost, SessionStore};
use tracing::warn;
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, ScrollBehavior, ScrollIntoViewOptions, UrlSearchParams};

const CONFIG_META: &str = r#"meta[name="landing-config"]"#;

/// `sessionStorage`, or an in-memory map when the browser refuses access
/// (privacy modes, sandboxed iframes).
pub enum BrowserSessionStore {
    Session(web_sys::Storage),
    Memory(MemorySessionStore),
}

impl BrowserSessionStore {
    pub fn open() -> Self {
        match window().session_storage() {
            Ok(Some(storage)) => Self::Session(storage),
            _ => {
                warn!("sessionStorage unavailable; session state will not survive a reload");
                Self::Memory(MemorySessionStore::new())
            }
        }
    }
}

impl SessionStore for BrowserSessionStore {
    fn get(&self, key: &str) -> Option<String> {
        match self {
            Self::Session(storage) => storage.get_item(key).ok().flatten(),
            Self::Memory(memory) => memory.get(key),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), LandingError> {
        match self {
            Self::Session(storage) => storage
                .set_item(key, value)
                .map_err(|err| LandingError::Storage(format!("{err:?}"))),
            Self::Memory(memory) => memory.set(key, value),
        }
    }
}

/// Renders the modal through a signal and drives body scroll and focus.
#[derive(Clone, Copy)]
pub struct BrowserModalHost {
    pub copy: RwSignal<Option<ExitIntentCopy>>,
    pub dialog: NodeRef<Div>,
}

impl ModalHost for BrowserModalHost {
    fn present(&self, copy: &ExitIntentCopy) {
        self.copy.set(Some(copy.clone()));
    }

    fn dismiss(&self) {
        self.copy.set(None);
    }

    fn suspend_scroll(&self) -> String {
        let Some(body) = document().body() else {
            return String::new();
        };
        let style = body.style();
        let previous = style.get_property_value("overflow").unwrap_or_default();
        if let Err(err) = style.set_property("overflow", "hidden") {
            warn!(error = ?err, "could not lock page scroll");
        }
        previous
    }

    fn restore_scroll(&self, previous: &str) {
        let Some(body) = document().body() else {
            return;
        };
        let style = body.style();
        let restored = if previous.is_empty() {
            style.remove_property("overflow").map(|_| ())
        } else {
            style.set_property("overflow", previous)
        };
        if let Err(err) = restored {
            warn!(error = ?err, "could not restore page scroll");
        }
    }

    fn focus_primary(&self) {
        // The dialog mounts on the next render pass.
        let dialog = self.dialog;
        request_animation_frame(move || {
            if let Some(first) = focusables(&dialog).first() {
                focus(first);
            }
        });
    }
}

/// Tab stops inside the dialog, in document order.
pub fn focusables(dialog: &NodeRef<Div>) -> Vec<HtmlElement> {
    let Some(root) = dialog.get_untracked() else {
        return Vec::new();
    };
    let Ok(nodes) = root.query_selector_all(FOCUSABLE_SELECTOR) else {
        return Vec::new();
    };
    let elements: Vec<HtmlElement> = (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .collect();
    // `disabled` toggles while the dialog is open, so re-check it per keypress.
    tab_stops(elements, |el: &HtmlElement| FocusCandidate {
        disabled: el.has_attribute("disabled"),
        tab_index: el.tab_index(),
    })
}

pub fn focus(element: &HtmlElement) {
    if let Err(err) = element.focus() {
        warn!(error = ?err, "could not move focus inside the dialog");
    }
}

/// Index of the focused element among `elements`, if focus is inside.
pub fn focused_index(elements: &[HtmlElement]) -> Option<usize> {
    let active = document().active_element()?;
    elements
        .iter()
        .position(|el| el.is_same_node(Some(active.unchecked_ref())))
}

/// Configuration from `<meta name="landing-config">`.
///
/// Returns the defaults plus the parse error when the tag is malformed, so
/// the caller can report it once logging is up.
pub fn read_config() -> (LandingConfig, Option<LandingError>) {
    let raw = document()
        .query_selector(CONFIG_META)
        .ok()
        .flatten()
        .and_then(|meta| meta.get_attribute("content"));

    let Some(raw) = raw else {
        return (LandingConfig::default(), None);
    };
    match LandingConfig::from_json(&raw) {
        Ok(config) => (config, None),
        Err(err) => (LandingConfig::default(), Some(err)),
    }
}

pub fn origin() -> String {
    window().location().origin().unwrap_or_default()
}

/// UTM parameters of the current URL plus `document.referrer`.
pub fn attribution() -> Attribution {
    let search = window().location().search().unwrap_or_default();
    let pairs: Vec<(&str, String)> = match UrlSearchParams::new_with_str(&search) {
        Ok(params) => ["utm_source", "utm_medium", "utm_campaign"]
            .into_iter()
            .filter_map(|key| params.get(key).map(|value| (key, value)))
            .collect(),
        Err(_) => Vec::new(),
    };
    let referrer = document().referrer();
    Attribution::from_pairs(pairs, Some(referrer.as_str()))
}

pub fn now_ms() -> f64 {
    js_sys::Date::now()
}

pub fn random_unit() -> f64 {
    js_sys::Math::random()
}

pub fn scroll_to(id: &str) {
    let Some(target) = document().get_element_by_id(id) else {
        warn!(id, "scroll target missing");
        return;
    };
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    target.scroll_into_view_with_scroll_into_view_options(&options);
}

pub fn navigate(url: &str) {
    if let Err(err) = window().location().set_href(url) {
        warn!(url, error = ?err, "navigation failed");
    }
}
