//! Email join form: validation, attribution and submission.

use std::fmt;
use std::sync::OnceLock;

use regex::Regex;
use tracing::{info, warn};

use crate::api::LandingApi;
use crate::error::JoinError;
use crate::model::{EmailSource, JoinResponse};

fn regex(pattern: &str) -> Regex {
    Regex::new(pattern).expect("valid regex literal")
}

fn regex_email_shape() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| regex(r"^[^\s@]+@[^\s@]+\.[^\s@]+$"))
}

/// Why the form refused to submit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JoinRejection {
    /// The hidden honeypot input was filled in
    Honeypot,
    Empty,
    Malformed,
}

impl JoinRejection {
    /// Inline message; bots get no feedback.
    pub fn user_message(&self) -> Option<&'static str> {
        match self {
            JoinRejection::Honeypot => None,
            JoinRejection::Empty => Some("Email is required"),
            JoinRejection::Malformed => Some("Please enter a valid email address"),
        }
    }
}

impl fmt::Display for JoinRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.user_message().unwrap_or("submission dropped"))
    }
}

pub fn is_valid_email(email: &str) -> bool {
    regex_email_shape().is_match(email)
}

/// Check a submission in the order the form reports problems.
///
/// Returns the trimmed address on success.
pub fn validate_submission<'a>(email: &'a str, honeypot: &str) -> Result<&'a str, JoinRejection> {
    if !honeypot.is_empty() {
        return Err(JoinRejection::Honeypot);
    }
    let email = email.trim();
    if email.is_empty() {
        return Err(JoinRejection::Empty);
    }
    if !is_valid_email(email) {
        return Err(JoinRejection::Malformed);
    }
    Ok(email)
}

/// Marketing attribution attached to signups.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attribution {
    pub utm_source: Option<String>,
    pub utm_medium: Option<String>,
    pub utm_campaign: Option<String>,
    pub referrer_url: Option<String>,
}

impl Attribution {
    /// Build from decoded query pairs and the document referrer; blanks are dropped.
    pub fn from_pairs<I, K, V>(pairs: I, referrer: Option<&str>) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut attribution = Attribution {
            referrer_url: non_empty(referrer.map(str::to_owned)),
            ..Attribution::default()
        };
        for (key, value) in pairs {
            let slot = match key.as_ref() {
                "utm_source" => &mut attribution.utm_source,
                "utm_medium" => &mut attribution.utm_medium,
                "utm_campaign" => &mut attribution.utm_campaign,
                _ => continue,
            };
            // First occurrence wins, as URLSearchParams.get does.
            if slot.is_none() {
                *slot = non_empty(Some(value.into()));
            }
        }
        attribution
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Send a validated address to `/join`.
///
/// A 2xx answer with `ok = false` is a rejection, not a success.
pub async fn submit_join<A: LandingApi + ?Sized>(
    api: &A,
    email: &str,
    source: EmailSource,
) -> Result<JoinResponse, JoinError> {
    let response = api.join(email, source).await.map_err(|err| {
        warn!(source = source.as_str(), error = %err, "join request failed");
        JoinError::Failed(err)
    })?;
    if !response.ok {
        info!(source = source.as_str(), message = %response.message, "join declined");
        return Err(JoinError::Rejected(response.message));
    }
    info!(source = source.as_str(), "join accepted");
    Ok(response)
}
