//! HttpLandingApi against a mock landing backend.

mod common;

use common::mock_backend::{MockBackend, MockResponse};
use common::{SESSION, client, client_with_locale, exit_intent_json, landing_json};
use lendcommunity_core::join::{Attribution, submit_join};
use lendcommunity_core::model::{ClickEvent, EmailSource};
use lendcommunity_core::{JoinError, LandingApi, LandingError};
use pretty_assertions::assert_eq;

#[tokio::test]
async fn page_request_carries_session_and_locale() {
    let backend = MockBackend::start().await;
    backend.enqueue(MockResponse::json(&landing_json(3))).await;
    let api = client(&backend.base_url(), Attribution::default());

    let page = api.fetch_page().await.expect("page loads");
    assert_eq!(page.version, 3);
    assert_eq!(page.teaser.items.len(), 2);
    assert_eq!(page.exit_intent.map(|copy| copy.can_show_now), Some(false));

    let requests = backend.captured_requests().await;
    assert_eq!(requests.len(), 1);
    let request = &requests[0];
    assert_eq!(request.method, "GET");
    assert_eq!(request.path, "/landing/v1/page");
    assert_eq!(request.query.as_deref(), Some("locale=en-US"));
    assert_eq!(request.header("x-session-id"), Some(SESSION));
    assert_eq!(request.header("if-none-match"), None);
}

#[tokio::test]
async fn locale_is_form_encoded_in_the_query() {
    let backend = MockBackend::start().await;
    backend.enqueue(MockResponse::json(&exit_intent_json(true))).await;
    let api = client_with_locale(&backend.base_url(), "en US&debug=1", Attribution::default());

    api.fetch_exit_intent().await.expect("copy loads");

    let requests = backend.captured_requests().await;
    assert_eq!(requests[0].path, "/landing/v1/exit-intent");
    // Reserved characters stay inside the single `locale` value.
    assert_eq!(requests[0].query.as_deref(), Some("locale=en+US%26debug%3D1"));
}

#[tokio::test]
async fn etag_is_revalidated_and_304_serves_cached_page() {
    let backend = MockBackend::start().await;
    backend
        .enqueue(MockResponse::json(&landing_json(3)).with_header("etag", "\"page-3\""))
        .await;
    backend.enqueue(MockResponse::status(304)).await;
    let api = client(&backend.base_url(), Attribution::default());

    let first = api.fetch_page().await.expect("first fetch");
    let second = api.fetch_page().await.expect("revalidated fetch");
    assert_eq!(first, second);

    let requests = backend.captured_requests().await;
    assert_eq!(requests.len(), 2);
    assert_eq!(requests[1].header("if-none-match"), Some("\"page-3\""));
}

#[tokio::test]
async fn body_etag_is_used_when_header_is_missing() {
    let backend = MockBackend::start().await;
    backend.enqueue(MockResponse::json(&landing_json(9))).await;
    backend.enqueue(MockResponse::status(304)).await;
    let api = client(&backend.base_url(), Attribution::default());

    api.fetch_page().await.expect("first fetch");
    api.fetch_page().await.expect("revalidated fetch");

    let requests = backend.captured_requests().await;
    assert_eq!(requests[1].header("if-none-match"), Some("\"v9\""));
}

#[tokio::test]
async fn not_modified_without_cached_page_is_an_error() {
    let backend = MockBackend::start().await;
    backend.enqueue(MockResponse::status(304)).await;
    let api = client(&backend.base_url(), Attribution::default());

    let err = api.fetch_page().await.unwrap_err();
    assert_eq!(err, LandingError::NotModified);
}

#[tokio::test]
async fn exit_intent_server_error_maps_to_status() {
    let backend = MockBackend::start().await;
    backend.enqueue(MockResponse::status(500)).await;
    let api = client(&backend.base_url(), Attribution::default());

    let err = api.fetch_exit_intent().await.unwrap_err();
    assert_eq!(
        err,
        LandingError::Status {
            endpoint: "exit-intent",
            status: 500
        }
    );

    let requests = backend.captured_requests().await;
    assert_eq!(requests[0].path, "/landing/v1/exit-intent");
    assert_eq!(requests[0].query.as_deref(), Some("locale=en-US"));
}

#[tokio::test]
async fn exit_intent_copy_decodes() {
    let backend = MockBackend::start().await;
    backend.enqueue(MockResponse::json(&exit_intent_json(true))).await;
    let api = client(&backend.base_url(), Attribution::default());

    let copy = api.fetch_exit_intent().await.expect("copy loads");
    assert!(copy.can_show_now);
    assert_eq!(copy.cta_label, "Notify me");
}

#[tokio::test]
async fn join_posts_email_source_and_attribution() {
    let backend = MockBackend::start().await;
    backend
        .enqueue(MockResponse::json(r#"{"ok": true, "message": "Thanks!"}"#))
        .await;
    let attribution = Attribution::from_pairs(
        [("utm_source", "newsletter"), ("utm_campaign", "fall-launch")],
        Some("https://news.example/post"),
    );
    let api = client(&backend.base_url(), attribution);

    let response = submit_join(&api, "ana@example.com", EmailSource::ExitIntent)
        .await
        .expect("join accepted");
    assert_eq!(response.message, "Thanks!");

    let requests = backend.captured_requests().await;
    let request = &requests[0];
    assert_eq!(request.method, "POST");
    assert_eq!(request.path, "/landing/v1/join");
    assert_eq!(request.header("content-type"), Some("application/json"));
    assert_eq!(request.header("x-session-id"), Some(SESSION));
    assert_eq!(
        request.json(),
        serde_json::json!({
            "email": "ana@example.com",
            "locale": "en-US",
            "source": "exit_intent",
            "utm_source": "newsletter",
            "utm_campaign": "fall-launch",
            "referrer_url": "https://news.example/post"
        })
    );
}

#[tokio::test]
async fn join_rejection_carries_server_message() {
    let backend = MockBackend::start().await;
    backend
        .enqueue(MockResponse::json(
            r#"{"ok": false, "message": "This address is already on the list."}"#,
        ))
        .await;
    let api = client(&backend.base_url(), Attribution::default());

    let err = submit_join(&api, "ana@example.com", EmailSource::Hero)
        .await
        .unwrap_err();
    assert_eq!(
        err.user_message().as_deref(),
        Some("This address is already on the list.")
    );
}

#[tokio::test]
async fn join_transport_status_is_generic_failure() {
    let backend = MockBackend::start().await;
    backend.enqueue(MockResponse::status(503)).await;
    let api = client(&backend.base_url(), Attribution::default());

    let err = submit_join(&api, "ana@example.com", EmailSource::Hero)
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        JoinError::Failed(LandingError::Status { status: 503, .. })
    ));
    assert_eq!(
        err.user_message().as_deref(),
        Some("Something went wrong. Please try again.")
    );
}

#[tokio::test]
async fn cta_click_posts_session_context() {
    let backend = MockBackend::start().await;
    backend.enqueue(MockResponse::status(204)).await;
    let api = client(&backend.base_url(), Attribution::default());

    api.track_click(&ClickEvent::new("hero.primary", "Join free", "open_signup"))
        .await
        .expect("click accepted");

    let requests = backend.captured_requests().await;
    assert_eq!(requests[0].path, "/landing/v1/cta-click");
    assert_eq!(
        requests[0].json(),
        serde_json::json!({
            "placement": "hero.primary",
            "label": "Join free",
            "action": "open_signup",
            "locale": "en-US",
            "session_id": SESSION
        })
    );
}

#[tokio::test]
async fn malformed_page_body_is_a_decode_error() {
    let backend = MockBackend::start().await;
    backend.enqueue(MockResponse::json(r#"{"locale": "en-US"}"#)).await;
    let api = client(&backend.base_url(), Attribution::default());

    let err = api.fetch_page().await.unwrap_err();
    assert!(matches!(err, LandingError::Decode { endpoint: "page", .. }));
}
