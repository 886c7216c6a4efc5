use leptos::prelude::*;

const STEPS: &[(&str, &str)] = &[
    (
        "Join the Community",
        "Sign up free. Connect with local investors and founders in Virginia.",
    ),
    (
        "Browse Opportunities",
        "Explore vetted startups. Review business plans, financials, and team backgrounds.",
    ),
    (
        "Invest Securely",
        "Fund startups you believe in. Track progress and returns through your dashboard.",
    ),
    (
        "Watch Growth",
        "Get updates from founders. See your investment fuel community success.",
    ),
];

#[component]
pub fn HowItWorks() -> impl IntoView {
    view! {
        <section class="how-it-works" id="how-it-works" aria-labelledby="how-title">
            <h2 id="how-title" class="how-it-works__title">"How it Works"</h2>
            <div class="how-it-works__timeline">
                {STEPS
                    .iter()
                    .enumerate()
                    .map(|(index, &(title, description))| {
                        view! {
                            <div class="timeline-step">
                                <div class="timeline-step__number">{index + 1}</div>
                                <div class="timeline-step__content">
                                    <h3 class="timeline-step__title">{title}</h3>
                                    <p class="timeline-step__description">{description}</p>
                                </div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
