use leptos::prelude::*;
use lendcommunity_core::model::Testimonial;

#[component]
pub fn Testimonials(testimonials: Vec<Testimonial>) -> impl IntoView {
    view! {
        <section class="testimonials" aria-labelledby="testimonials-title">
            <span class="section-badge">"💬 Community Stories"</span>
            <h2 id="testimonials-title" class="testimonials__title">
                "Real People. Real Success."
            </h2>
            <p class="testimonials__subtitle">
                "Hear from founders and backers who are building something special together."
            </p>
            <div class="testimonials__grid">
                {testimonials
                    .into_iter()
                    .map(|testimonial| view! { <Quote testimonial=testimonial /> })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
fn Quote(testimonial: Testimonial) -> impl IntoView {
    let Testimonial {
        author_name,
        author_title,
        quote,
        avatar_url,
    } = testimonial;

    view! {
        <blockquote class="testimonial">
            <div class="testimonial__quote-icon">"❝"</div>
            <p class="testimonial__quote">{format!("\"{quote}\"")}</p>
            <footer class="testimonial__author">
                {avatar_url
                    .map(|url| {
                        view! {
                            <img
                                src=url
                                alt=format!("{author_name}'s avatar")
                                class="testimonial__avatar"
                            />
                        }
                    })}
                <div class="testimonial__author-info">
                    <cite class="testimonial__name">{author_name.clone()}</cite>
                    {author_title
                        .map(|title| view! { <span class="testimonial__title">{title}</span> })}
                </div>
            </footer>
        </blockquote>
    }
}
