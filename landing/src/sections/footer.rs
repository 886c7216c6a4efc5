use leptos::prelude::*;

const PLATFORM: &[(&str, &str)] = &[
    ("/browse", "Browse Startups"),
    ("/launch", "Launch Your Startup"),
    ("/how-it-works", "How It Works"),
];

const COMMUNITY: &[(&str, &str)] = &[
    ("/about", "About Us"),
    ("/stories", "Success Stories"),
    ("/contact", "Contact"),
];

/// Site footer. `disclaimers_html` is trusted markup from the landing API.
#[component]
pub fn Footer(disclaimers_html: Option<String>) -> impl IntoView {
    let year = js_sys::Date::new_0().get_full_year();

    view! {
        <footer class="footer" role="contentinfo">
            <div class="footer__container">
                <div class="footer__brand">
                    <div class="footer__logo">
                        <div class="footer__logo-icon">"❤️"</div>
                        <div class="footer__logo-text">
                            <strong>"LendCommunity"</strong>
                            <span>"Fund Local Dreams"</span>
                        </div>
                    </div>
                    <p class="footer__tagline">
                        "Empowering Southeast Asian entrepreneurs in Virginia through community-driven crowdfunding."
                    </p>
                </div>
                <div class="footer__links">
                    <LinkColumn title="Platform" links=PLATFORM />
                    <LinkColumn title="Community" links=COMMUNITY />
                </div>
            </div>
            {disclaimers_html
                .filter(|html| !html.trim().is_empty())
                .map(|html| {
                    view! {
                        <div class="footer__disclaimers">
                            <div inner_html=html></div>
                        </div>
                    }
                })}
            <div class="footer__bottom">
                <p class="footer__copyright">
                    {format!("© {year} LendCommunity. Built with ❤️ for Southeast Asian entrepreneurs.")}
                </p>
            </div>
        </footer>
    }
}

#[component]
fn LinkColumn(title: &'static str, links: &'static [(&'static str, &'static str)]) -> impl IntoView {
    view! {
        <div class="footer__column">
            <h3 class="footer__column-title">{title}</h3>
            <ul class="footer__link-list">
                {links
                    .iter()
                    .map(|&(href, label)| {
                        view! {
                            <li>
                                <a href=href class="footer__link">{label}</a>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </div>
    }
}
