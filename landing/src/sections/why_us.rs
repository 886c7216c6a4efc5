use leptos::prelude::*;

#[component]
pub fn WhyUs() -> impl IntoView {
    view! {
        <section class="why-section" id="why-lendcommunity" aria-labelledby="why-title">
            <h2 id="why-title" class="why-section__title">"Why LendCommunity?"</h2>
            <div class="why-section__grid">
                <Reason
                    icon="🎯"
                    title="Local Focus"
                    description="Support Southeast Asian entrepreneurs in Virginia. Your investment stays in the community."
                />
                <Reason
                    icon="✓"
                    title="Regulatory Compliance"
                    description="SEC-compliant platform. All campaigns vetted. Full transparency and legal protection."
                />
                <Reason
                    icon="⭐"
                    title="Curated Deals"
                    description="Hand-picked startups with growth potential. Expert due diligence on every opportunity."
                />
            </div>
        </section>
    }
}

#[component]
fn Reason(icon: &'static str, title: &'static str, description: &'static str) -> impl IntoView {
    view! {
        <div class="why-card">
            <div class="why-card__icon" aria-hidden="true">{icon}</div>
            <h3 class="why-card__title">{title}</h3>
            <p class="why-card__description">{description}</p>
        </div>
    }
}
