//! Shared test utilities for the landing API integration tests.

#![allow(dead_code)]

pub mod mock_backend;

use lendcommunity_core::join::Attribution;
use lendcommunity_core::{HttpLandingApi, LandingConfig, SessionId};

pub const SESSION: &str = "sess_1700000000000_k3x9a1z";

/// Client pointed at a mock backend base URL.
pub fn client(base_url: &str, attribution: Attribution) -> HttpLandingApi {
    client_with_locale(base_url, "en-US", attribution)
}

pub fn client_with_locale(
    base_url: &str,
    locale: &str,
    attribution: Attribution,
) -> HttpLandingApi {
    let config = LandingConfig {
        locale: locale.to_owned(),
        ..LandingConfig::default()
    }
    .resolve_origin(base_url);
    let session_id = SessionId::load_or_create(
        &lendcommunity_core::MemorySessionStore::new(),
        || SESSION.to_owned(),
    );
    HttpLandingApi::new(&config, session_id, attribution)
}

pub fn landing_json(version: u64) -> String {
    serde_json::json!({
        "locale": "en-US",
        "version": version,
        "etag": format!("\"v{version}\""),
        "hero": {
            "headline": "Fund the founders next door",
            "subheadline": "Back local startups from $25.",
            "primary_cta": {"label": "Join free", "action": "open_signup"},
            "secondary_cta": {"label": "Browse", "action": "open_browse", "url": "/browse"}
        },
        "teaser": {
            "title": "Campaigns near you",
            "mask_after": 1,
            "items": [
                {"id": "pho-88", "name": "Pho 88", "raised_cents": 1200000, "goal_cents": 2000000, "percent_funded": 60.0},
                {"id": "lotus-tea", "name": "Lotus Tea", "raised_cents": 450000, "goal_cents": 500000, "percent_funded": 90.0}
            ]
        },
        "testimonials": [
            {"author_name": "Linh", "quote": "We opened our second location."}
        ],
        "exit_intent": {
            "headline": "Before you go",
            "cta_label": "Keep me posted",
            "cta_action": "open_signup",
            "can_show_now": false
        }
    })
    .to_string()
}

pub fn exit_intent_json(can_show_now: bool) -> String {
    serde_json::json!({
        "headline": "Don't miss the next launch",
        "body": "New campaigns open every week.",
        "cta_label": "Notify me",
        "cta_action": "open_signup",
        "can_show_now": can_show_now
    })
    .to_string()
}
