use leptos::prelude::*;

struct Metric {
    value: &'static str,
    label: &'static str,
    icon: &'static str,
    color: &'static str,
}

const METRICS: &[Metric] = &[
    Metric { value: "$250K+", label: "Total Funded", icon: "💵", color: "teal" },
    Metric { value: "52", label: "Active Campaigns", icon: "🚀", color: "orange" },
    Metric { value: "200+", label: "Community Members", icon: "👥", color: "blue" },
    Metric { value: "85%", label: "Success Rate", icon: "📈", color: "purple" },
];

#[component]
pub fn ImpactMetrics() -> impl IntoView {
    view! {
        <section class="impact-metrics" id="impact" aria-labelledby="impact-title">
            <div class="impact-metrics__grid">
                {METRICS
                    .iter()
                    .map(|metric| {
                        view! {
                            <div class="impact-metric">
                                <div class=format!("impact-metric__icon impact-metric__icon--{}", metric.color)>
                                    {metric.icon}
                                </div>
                                <div class="impact-metric__value">{metric.value}</div>
                                <div class="impact-metric__label">{metric.label}</div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
            <div class="impact-metrics__cta">
                <span class="section-badge">"🎯 Top Performing Campaigns"</span>
                <h2 id="impact-title" class="impact-metrics__title">
                    "Help Local Founders Succeed"
                </h2>
            </div>
        </section>
    }
}
