use leptos::prelude::*;
use lendcommunity_core::model::ClickEvent;

use crate::browser::navigate;
use crate::context::use_landing;

const STATS: &[(&str, &str)] = &[
    ("48hrs", "Average approval time"),
    ("85%", "Success rate"),
    ("$12K", "Average raised"),
];

#[component]
pub fn FounderCta() -> impl IntoView {
    let ctx = use_landing();
    let on_launch = move |_| {
        ctx.track(ClickEvent::new(
            "founder_cta",
            "Launch Your Campaign",
            "launch_campaign",
        ));
        navigate("/launch");
    };

    view! {
        <section class="founder-cta" aria-labelledby="founder-cta-title">
            <div class="founder-cta__overlay">
                <div class="founder-cta__content">
                    <span class="section-badge section-badge--light">"🚀 For Founders"</span>
                    <h2 id="founder-cta-title" class="founder-cta__title">
                        "Ready to Launch Your Startup?"
                    </h2>
                    <p class="founder-cta__subtitle">
                        "Get the funding you need from people who believe in you. "
                        "Join 50+ Southeast Asian founders who've raised capital through our platform."
                    </p>
                    <button class="founder-cta__button" on:click=on_launch>
                        "🚀 Launch Your Campaign"
                    </button>
                    <div class="founder-cta__stats">
                        {STATS
                            .iter()
                            .map(|&(value, label)| {
                                view! {
                                    <div class="founder-cta__stat">
                                        <div class="founder-cta__stat-value">{value}</div>
                                        <div class="founder-cta__stat-label">{label}</div>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </section>
    }
}
