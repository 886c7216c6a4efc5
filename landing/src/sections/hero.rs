use leptos::prelude::*;
use lendcommunity_core::model::{ClickEvent, Cta, CtaTarget, EmailSource, Hero as HeroModel};

use super::EmailJoinForm;
use crate::browser::{navigate, scroll_to};
use crate::context::use_landing;

#[component]
pub fn Hero(hero: HeroModel) -> impl IntoView {
    let HeroModel {
        headline,
        subheadline,
        primary_cta,
        secondary_cta,
        bg_image_url,
    } = hero;

    let style = bg_image_url
        .map(|url| format!("background-image: url({url})"))
        .unwrap_or_default();

    view! {
        <div class="hero" style=style aria-labelledby="hero-headline">
            <div class="hero__overlay">
                <div class="hero__content">
                    <h1 id="hero-headline" class="hero__headline">{headline}</h1>
                    {subheadline.map(|text| view! { <p class="hero__subheadline">{text}</p> })}
                    <div class="hero__ctas">
                        <CtaButton cta=primary_cta placement="hero.primary" variant="btn btn-primary" />
                        {secondary_cta
                            .map(|cta| {
                                view! {
                                    <CtaButton cta=cta placement="hero.secondary" variant="btn btn-secondary" />
                                }
                            })}
                    </div>
                    <EmailJoinForm source=EmailSource::Hero />
                </div>
            </div>
        </div>
    }
}

#[component]
fn CtaButton(cta: Cta, placement: &'static str, variant: &'static str) -> impl IntoView {
    let ctx = use_landing();
    let label = cta.label.clone();
    let aria_label = label.clone();
    let on_click = move |_| {
        ctx.track(ClickEvent::new(placement, cta.label.clone(), cta.action.as_str()));
        match cta.target() {
            CtaTarget::Signup => scroll_to("email-join"),
            CtaTarget::Navigate(url) => navigate(url),
            CtaTarget::Inert => {}
        }
    };

    view! {
        <button class=variant aria-label=aria_label on:click=on_click>
            {label}
        </button>
    }
}
