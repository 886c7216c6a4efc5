// Landing page sections
// Developed by The LendCommunity Team (c)2025

mod email_join_form;
mod exit_intent_modal;
mod footer;
mod founder_cta;
mod header;
mod hero;
mod how_it_works;
mod impact;
mod teaser_grid;
mod testimonials;
mod why_us;

pub use email_join_form::EmailJoinForm;
pub use exit_intent_modal::ExitIntentModal;
pub use footer::Footer;
pub use founder_cta::FounderCta;
pub use header::Header;
pub use hero::Hero;
pub use how_it_works::HowItWorks;
pub use impact::ImpactMetrics;
pub use teaser_grid::TeaserGrid;
pub use testimonials::Testimonials;
pub use why_us::WhyUs;
