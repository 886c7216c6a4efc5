// LendCommunity Landing Page, Leptos 0.8 Edition
// Developed by The LendCommunity Team (c)2025

mod browser;
mod context;
mod pages;
mod sections;
mod telemetry;

use leptos::prelude::*;
use tracing::{info, warn};

use context::LandingContext;
use pages::LandingPage;
use sections::ExitIntentModal;

fn main() {
    console_error_panic_hook::set_once();

    let (config, config_error) = browser::read_config();
    telemetry::init(&config.log_level);
    if let Some(err) = config_error {
        warn!(error = %err, "landing-config ignored, using defaults");
    }
    info!(locale = %config.locale, api_base = %config.api_base, "landing page starting");

    leptos::mount::mount_to_body(move || {
        LandingContext::new(config).provide();
        view! { <App/> }
    });
}

#[component]
fn App() -> impl IntoView {
    view! {
        <LandingPage />
        <ExitIntentModal />
    }
}
