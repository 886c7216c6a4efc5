//! View-models served by `/landing/v1/*`.
//!
//! Optional fields are `Option`s on purpose: the backend omits them freely and
//! every rendering site has to decide what an absent value means.

use serde::{Deserialize, Serialize};

/// What a call-to-action does when activated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CtaAction {
    OpenSignup,
    OpenBrowse,
    CustomUrl,
}

impl CtaAction {
    /// Wire label, also used as the tracked click action.
    pub fn as_str(&self) -> &'static str {
        match self {
            CtaAction::OpenSignup => "open_signup",
            CtaAction::OpenBrowse => "open_browse",
            CtaAction::CustomUrl => "custom_url",
        }
    }
}

/// Where a CTA leads once its action and URL are combined.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CtaTarget<'a> {
    /// Scroll to the signup form
    Signup,
    /// Navigate the window
    Navigate(&'a str),
    /// Nothing to do
    Inert,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cta {
    pub label: String,
    pub action: CtaAction,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl Cta {
    pub fn target(&self) -> CtaTarget<'_> {
        match (self.action, self.url.as_deref()) {
            (CtaAction::OpenSignup, _) => CtaTarget::Signup,
            (_, Some(url)) if !url.is_empty() => CtaTarget::Navigate(url),
            (CtaAction::OpenBrowse, _) => CtaTarget::Navigate("/browse"),
            (CtaAction::CustomUrl, _) => CtaTarget::Inert,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hero {
    pub headline: String,
    #[serde(default)]
    pub subheadline: Option<String>,
    pub primary_cta: Cta,
    #[serde(default)]
    pub secondary_cta: Option<Cta>,
    #[serde(default)]
    pub bg_image_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Testimonial {
    pub author_name: String,
    #[serde(default)]
    pub author_title: Option<String>,
    pub quote: String,
    #[serde(default)]
    pub avatar_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StartupCard {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub tagline: Option<String>,
    pub raised_cents: i64,
    pub goal_cents: i64,
    pub percent_funded: f64,
    #[serde(default)]
    pub logo_url: Option<String>,
    #[serde(default)]
    pub cover_url: Option<String>,
}

impl StartupCard {
    /// Width of the progress bar, clamped to `0..=100`.
    pub fn progress_width(&self) -> f64 {
        if self.percent_funded.is_nan() {
            return 0.0;
        }
        self.percent_funded.clamp(0.0, 100.0)
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TeaserSection {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub items: Vec<StartupCard>,
    #[serde(default)]
    pub mask_after: usize,
}

impl TeaserSection {
    /// Cards paired with whether they sit behind the signup mask.
    pub fn cards(&self) -> impl Iterator<Item = (&StartupCard, bool)> + '_ {
        self.items
            .iter()
            .enumerate()
            .map(move |(index, card)| (card, index >= self.mask_after))
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Copy for the exit-intent modal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExitIntentCopy {
    pub headline: String,
    #[serde(default)]
    pub body: Option<String>,
    pub cta_label: String,
    pub cta_action: CtaAction,
    #[serde(default)]
    pub cta_url: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    /// Server-side eligibility; the modal never opens while this is false
    #[serde(default)]
    pub can_show_now: bool,
}

/// The full landing view-model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LandingPage {
    pub locale: String,
    /// Monotonic content version
    pub version: u64,
    #[serde(default)]
    pub etag: String,
    pub hero: Hero,
    #[serde(default)]
    pub teaser: TeaserSection,
    #[serde(default)]
    pub testimonials: Vec<Testimonial>,
    #[serde(default)]
    pub disclaimers_html: Option<String>,
    #[serde(default)]
    pub exit_intent: Option<ExitIntentCopy>,
}

/// Which form produced a signup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmailSource {
    Hero,
    ExitIntent,
    Footer,
}

impl EmailSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            EmailSource::Hero => "hero",
            EmailSource::ExitIntent => "exit_intent",
            EmailSource::Footer => "footer",
        }
    }
}

/// Body of `POST /landing/v1/join`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JoinRequest {
    pub email: String,
    pub locale: String,
    pub source: EmailSource,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub utm_source: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub utm_medium: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub utm_campaign: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub referrer_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JoinResponse {
    pub ok: bool,
    #[serde(default)]
    pub message: String,
}

/// A tracked CTA activation, before session context is attached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClickEvent {
    pub placement: String,
    pub label: String,
    pub action: String,
}

impl ClickEvent {
    pub fn new(
        placement: impl Into<String>,
        label: impl Into<String>,
        action: impl Into<String>,
    ) -> Self {
        Self {
            placement: placement.into(),
            label: label.into(),
            action: action.into(),
        }
    }
}

/// Body of `POST /landing/v1/cta-click`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CtaClickRequest {
    pub placement: String,
    pub label: String,
    pub action: String,
    pub locale: String,
    pub session_id: String,
}
