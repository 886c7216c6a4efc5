//! Fire-and-forget CTA click tracking.
//!
//! Callers never see the outcome: the request runs as a detached task and a
//! failure only shows up in the logs.

use std::future::Future;
use std::pin::Pin;
use std::rc::Rc;

use tracing::{debug, warn};

use crate::api::LandingApi;
use crate::model::ClickEvent;

/// A detached, single-threaded task.
pub type LocalTask = Pin<Box<dyn Future<Output = ()>>>;

/// Send one click, swallowing any failure.
pub async fn track<A: LandingApi + ?Sized>(api: &A, click: ClickEvent) {
    match api.track_click(&click).await {
        Ok(()) => debug!(placement = %click.placement, "cta click tracked"),
        Err(err) => warn!(placement = %click.placement, error = %err, "cta click not tracked"),
    }
}

/// Hand a tracking request to `spawn` (e.g. `leptos::task::spawn_local`).
pub fn dispatch<A>(api: Rc<A>, click: ClickEvent, spawn: impl FnOnce(LocalTask))
where
    A: LandingApi + 'static,
{
    spawn(Box::pin(async move { track(api.as_ref(), click).await }));
}
