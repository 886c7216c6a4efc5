//! Runtime configuration for the landing page.
//!
//! The browser binary embeds the JSON in a `<meta name="landing-config">` tag;
//! every field is optional and falls back to the defaults below.

use serde::{Deserialize, Serialize};

use crate::error::LandingError;

/// Top-level landing configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LandingConfig {
    /// Base of the REST API, absolute or relative to the page origin
    pub api_base: String,
    /// Locale sent with every request
    pub locale: String,
    /// `EnvFilter` directive for the console subscriber
    pub log_level: String,
    pub exit_intent: ExitIntentConfig,
}

/// Tuning for the exit-intent detector.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExitIntentConfig {
    /// Pointer must leave within this many pixels of the viewport top
    pub top_threshold_px: f64,
    /// Minimum time on page before a trigger counts
    pub min_dwell_ms: u64,
}

impl Default for LandingConfig {
    fn default() -> Self {
        Self {
            api_base: "/landing/v1".to_owned(),
            locale: "en-US".to_owned(),
            log_level: "info".to_owned(),
            exit_intent: ExitIntentConfig::default(),
        }
    }
}

impl Default for ExitIntentConfig {
    fn default() -> Self {
        Self {
            top_threshold_px: 10.0,
            min_dwell_ms: 3000,
        }
    }
}

impl LandingConfig {
    /// Parse and validate a JSON document.
    pub fn from_json(raw: &str) -> Result<Self, LandingError> {
        let config: LandingConfig =
            serde_json::from_str(raw).map_err(|e| LandingError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), LandingError> {
        if self.locale.trim().is_empty() {
            return Err(LandingError::Config("locale must not be empty".into()));
        }
        if self.api_base.trim().is_empty() {
            return Err(LandingError::Config("api_base must not be empty".into()));
        }
        if !self.exit_intent.top_threshold_px.is_finite() || self.exit_intent.top_threshold_px < 0.0
        {
            return Err(LandingError::Config(format!(
                "exit_intent.top_threshold_px must be a non-negative number, got {}",
                self.exit_intent.top_threshold_px
            )));
        }
        Ok(())
    }

    /// Make a relative `api_base` absolute against the page origin.
    ///
    /// reqwest needs absolute URLs, even when it runs on top of `fetch`.
    pub fn resolve_origin(mut self, origin: &str) -> Self {
        if self.api_base.starts_with('/') {
            self.api_base = format!("{}{}", origin.trim_end_matches('/'), self.api_base);
        }
        self.api_base = self.api_base.trim_end_matches('/').to_owned();
        self
    }
}
