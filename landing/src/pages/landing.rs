// Landing page - one fetch, then every section renders over the view-model
use std::cell::RefCell;

use leptos::ev;
use leptos::prelude::*;
use leptos::task::spawn_local;
use lendcommunity_core::model;
use lendcommunity_core::{ExitIntentDetector, LandingApi, LandingStore, PageState, PointerExit};
use tracing::debug;
use web_sys::MouseEvent;

use crate::browser;
use crate::context::{LandingContext, use_landing};
use crate::sections::{
    FounderCta, Footer, Header, Hero, HowItWorks, ImpactMetrics, TeaserGrid, Testimonials, WhyUs,
};

#[component]
pub fn LandingPage() -> impl IntoView {
    let ctx = use_landing();
    let store = RwSignal::new(LandingStore::new());

    if store.try_update(LandingStore::begin_fetch).unwrap_or(false) {
        let api = ctx.api();
        let flow = ctx.flow();
        spawn_local(async move {
            let result = api.fetch_page().await;
            let bundled = store.try_update(|store| {
                store.apply(result);
                store.exit_intent().cloned()
            });
            if let Some(copy) = bundled {
                flow.seed_copy(copy);
            }
        });
    }

    watch_exit_intent(ctx);

    move || {
        store.with(|store| match store.state() {
            PageState::Loading => view! { <LoadingSkeleton /> }.into_any(),
            PageState::Failed(_) => view! { <LoadError /> }.into_any(),
            PageState::Ready(page) => view! { <LandingContent page=(**page).clone() /> }.into_any(),
        })
    }
}

/// Feed window `mouseout` events to the detector for the lifetime of the page.
fn watch_exit_intent(ctx: LandingContext) {
    let settings = ctx.config.with_value(|config| config.exit_intent.clone());
    let detector = RefCell::new(ExitIntentDetector::new(&settings, browser::now_ms()));

    let handle = window_event_listener(ev::mouseout, move |event: MouseEvent| {
        let exit = PointerExit {
            client_y: f64::from(event.client_y()),
            leaves_window: event.related_target().is_none(),
            at_ms: browser::now_ms(),
        };
        let observed = detector.borrow_mut().observe(&exit);
        if let Some(count) = observed {
            debug!(count, "pointer left through the top");
            ctx.trigger(count);
        }
    });
    on_cleanup(move || handle.remove());
}

#[component]
fn LandingContent(page: model::LandingPage) -> impl IntoView {
    let model::LandingPage {
        hero,
        teaser,
        testimonials,
        disclaimers_html,
        ..
    } = page;

    view! {
        <div class="landing-page">
            <Header />
            <main id="main-content">
                <section id="hero">
                    <Hero hero=hero />
                </section>
                <ImpactMetrics />
                <HowItWorks />
                {(!teaser.is_empty()).then(|| view! { <TeaserGrid teaser=teaser /> })}
                {(!testimonials.is_empty())
                    .then(|| view! { <Testimonials testimonials=testimonials /> })}
                <WhyUs />
                <FounderCta />
            </main>
            <Footer disclaimers_html=disclaimers_html />
        </div>
    }
}

#[component]
fn LoadingSkeleton() -> impl IntoView {
    view! {
        <div class="landing-page">
            <div class="landing-page__loading" aria-busy="true">
                <div class="skeleton skeleton--hero"></div>
                <div class="container">
                    <div class="skeleton skeleton--grid">
                        <div class="skeleton-card"></div>
                        <div class="skeleton-card"></div>
                        <div class="skeleton-card"></div>
                    </div>
                </div>
            </div>
        </div>
    }
}

/// Terminal for this page load; there is no retry.
#[component]
fn LoadError() -> impl IntoView {
    view! {
        <div class="landing-page">
            <div class="container">
                <div class="landing-page__error" role="alert">
                    <h1>"We'll be back shortly"</h1>
                    <p>"Please check back soon."</p>
                </div>
            </div>
        </div>
    }
}
