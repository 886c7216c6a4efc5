use std::cell::RefCell;

use reqwest::header::{CONTENT_TYPE, ETAG, IF_NONE_MATCH};
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use tracing::debug;

use super::{LandingApi, PageCache};
use crate::config::LandingConfig;
use crate::error::LandingError;
use crate::join::Attribution;
use crate::model::{
    ClickEvent, CtaClickRequest, EmailSource, ExitIntentCopy, JoinRequest, JoinResponse,
    LandingPage,
};
use crate::session::SessionId;

/// Header carrying the session token on every request.
pub const SESSION_HEADER: &str = "X-Session-ID";

/// reqwest-backed [`LandingApi`].
///
/// Holds the per-session request context (locale, session id, attribution)
/// and the conditional page cache.
#[derive(Debug)]
pub struct HttpLandingApi {
    client: Client,
    base: String,
    locale: String,
    session_id: SessionId,
    attribution: Attribution,
    cache: RefCell<PageCache>,
}

impl HttpLandingApi {
    /// `config.api_base` must already be absolute (see [`LandingConfig::resolve_origin`]).
    pub fn new(config: &LandingConfig, session_id: SessionId, attribution: Attribution) -> Self {
        Self {
            client: Client::new(),
            base: config.api_base.trim_end_matches('/').to_owned(),
            locale: config.locale.clone(),
            session_id,
            attribution,
            cache: RefCell::new(PageCache::default()),
        }
    }

    fn get(&self, path: &str) -> RequestBuilder {
        self.client
            .get(format!("{}/{}", self.base, path))
            .query(&[("locale", self.locale.as_str())])
            .header(SESSION_HEADER, self.session_id.as_str())
    }

    fn post(&self, path: &str) -> RequestBuilder {
        self.client
            .post(format!("{}/{}", self.base, path))
            .header(CONTENT_TYPE, "application/json")
            .header(SESSION_HEADER, self.session_id.as_str())
    }
}

async fn send(endpoint: &'static str, request: RequestBuilder) -> Result<Response, LandingError> {
    request
        .send()
        .await
        .map_err(|err| LandingError::transport(endpoint, err))
}

fn ensure_success(endpoint: &'static str, response: &Response) -> Result<(), LandingError> {
    let status = response.status();
    if status.is_success() {
        Ok(())
    } else {
        Err(LandingError::Status {
            endpoint,
            status: status.as_u16(),
        })
    }
}

async fn decode<T: DeserializeOwned>(
    endpoint: &'static str,
    response: Response,
) -> Result<T, LandingError> {
    let body = response
        .text()
        .await
        .map_err(|err| LandingError::transport(endpoint, err))?;
    serde_json::from_str(&body).map_err(|err| LandingError::decode(endpoint, err))
}

impl LandingApi for HttpLandingApi {
    async fn fetch_page(&self) -> Result<LandingPage, LandingError> {
        const ENDPOINT: &str = "page";

        let mut request = self.get(ENDPOINT);
        let etag = self.cache.borrow().etag().map(str::to_owned);
        if let Some(etag) = etag {
            request = request.header(IF_NONE_MATCH, etag);
        }

        let response = send(ENDPOINT, request).await?;
        if response.status() == StatusCode::NOT_MODIFIED {
            debug!("landing page not modified");
            return self.cache.borrow().not_modified();
        }
        ensure_success(ENDPOINT, &response)?;

        let etag = response
            .headers()
            .get(ETAG)
            .and_then(|value| value.to_str().ok())
            .map(str::to_owned);
        let page: LandingPage = decode(ENDPOINT, response).await?;
        debug!(version = page.version, locale = %page.locale, "landing page fetched");
        self.cache.borrow_mut().store(etag, &page);
        Ok(page)
    }

    async fn fetch_exit_intent(&self) -> Result<ExitIntentCopy, LandingError> {
        const ENDPOINT: &str = "exit-intent";

        let response = send(ENDPOINT, self.get(ENDPOINT)).await?;
        ensure_success(ENDPOINT, &response)?;
        decode(ENDPOINT, response).await
    }

    async fn join(&self, email: &str, source: EmailSource) -> Result<JoinResponse, LandingError> {
        const ENDPOINT: &str = "join";

        let body = JoinRequest {
            email: email.to_owned(),
            locale: self.locale.clone(),
            source,
            utm_source: self.attribution.utm_source.clone(),
            utm_medium: self.attribution.utm_medium.clone(),
            utm_campaign: self.attribution.utm_campaign.clone(),
            referrer_url: self.attribution.referrer_url.clone(),
        };
        let response = send(ENDPOINT, self.post(ENDPOINT).json(&body)).await?;
        ensure_success(ENDPOINT, &response)?;
        decode(ENDPOINT, response).await
    }

    async fn track_click(&self, click: &ClickEvent) -> Result<(), LandingError> {
        const ENDPOINT: &str = "cta-click";

        let body = CtaClickRequest {
            placement: click.placement.clone(),
            label: click.label.clone(),
            action: click.action.clone(),
            locale: self.locale.clone(),
            session_id: self.session_id.as_str().to_owned(),
        };
        let response = send(ENDPOINT, self.post(ENDPOINT).json(&body)).await?;
        ensure_success(ENDPOINT, &response)
    }
}
