use leptos::prelude::*;

use crate::browser::scroll_to;

const LINKS: &[(&str, &str)] = &[
    ("how-it-works", "How it Works"),
    ("impact", "Impact"),
    ("why-lendcommunity", "Why Us"),
];

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="header" role="banner">
            <nav class="header__nav" aria-label="Main navigation">
                <div class="header__logo">
                    <a href="/" aria-label="LendCommunity Home">
                        <span class="header__logo-text">"LendCommunity"</span>
                    </a>
                </div>
                <div class="header__links">
                    {LINKS
                        .iter()
                        .map(|&(id, label)| {
                            view! {
                                <button class="header__link" on:click=move |_| scroll_to(id)>
                                    {label}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
                <div class="header__cta">
                    <button class="btn btn-primary" on:click=|_| scroll_to("hero")>
                        "Join Now"
                    </button>
                </div>
            </nav>
        </header>
    }
}
