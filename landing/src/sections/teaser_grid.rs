use leptos::prelude::*;
use lendcommunity_core::format::{percent_funded, usd_from_cents};
use lendcommunity_core::model::{ClickEvent, StartupCard, TeaserSection};

use crate::context::use_landing;

/// Startup teaser cards; everything past `mask_after` sits behind a signup mask.
#[component]
pub fn TeaserGrid(teaser: TeaserSection) -> impl IntoView {
    let cards = teaser
        .cards()
        .map(|(card, masked)| view! { <TeaserCard card=card.clone() masked=masked /> })
        .collect_view();

    view! {
        <section class="teaser-grid" aria-labelledby="teaser-title">
            {teaser
                .title
                .map(|title| view! { <h2 id="teaser-title" class="teaser-grid__title">{title}</h2> })}
            <div class="teaser-grid__items">{cards}</div>
        </section>
    }
}

#[component]
fn TeaserCard(card: StartupCard, masked: bool) -> impl IntoView {
    let width = format!("width: {}%", card.progress_width());
    let funded = percent_funded(card.percent_funded);
    let amounts = format!(
        "{} / {}",
        usd_from_cents(card.raised_cents),
        usd_from_cents(card.goal_cents)
    );
    let aria = if masked {
        "Locked startup - join to view".to_owned()
    } else {
        card.name.clone()
    };
    let StartupCard {
        name,
        tagline,
        logo_url,
        cover_url,
        percent_funded: percent,
        ..
    } = card;

    view! {
        <div
            class=if masked { "teaser-card teaser-card--masked" } else { "teaser-card" }
            aria-label=aria
        >
            {masked.then(|| view! { <UnlockMask /> })}
            {cover_url
                .map(|url| {
                    view! {
                        <div
                            class="teaser-card__cover"
                            style=format!("background-image: url({url})")
                            role="img"
                            aria-label=format!("{name} cover image")
                        ></div>
                    }
                })}
            <div class="teaser-card__content">
                {logo_url
                    .map(|url| {
                        view! { <img src=url alt=format!("{name} logo") class="teaser-card__logo" /> }
                    })}
                <h3 class="teaser-card__name">{name.clone()}</h3>
                {tagline.map(|text| view! { <p class="teaser-card__tagline">{text}</p> })}
                <div class="teaser-card__progress">
                    <div class="teaser-card__progress-bar">
                        <div
                            class="teaser-card__progress-fill"
                            style=width
                            role="progressbar"
                            aria-valuenow=percent.to_string()
                            aria-valuemin="0"
                            aria-valuemax="100"
                            aria-label=funded.clone()
                        ></div>
                    </div>
                    <div class="teaser-card__stats">
                        <span class="teaser-card__funded">{funded}</span>
                        <span class="teaser-card__amounts">{amounts}</span>
                    </div>
                </div>
            </div>
        </div>
    }
}

/// Tracks the click and offers the exit-intent signup, gate permitting.
#[component]
fn UnlockMask() -> impl IntoView {
    let ctx = use_landing();
    let on_unlock = move |_| {
        ctx.track(ClickEvent::new(
            "teaser_mask",
            "Join to view more",
            "open_signup",
        ));
        ctx.open_exit_intent();
    };

    view! {
        <button class="teaser-card__mask" aria-label="Unlock more startups" on:click=on_unlock>
            <p class="teaser-card__mask-text">"Unlock More Startups"</p>
            <p class="teaser-card__mask-cta">"Join Free →"</p>
        </button>
    }
}
