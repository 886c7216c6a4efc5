use tracing::{debug, warn};

use crate::api::LandingApi;
use crate::model::ExitIntentCopy;

/// Make sure exit-intent copy is available and current.
///
/// Copy that is already eligible is returned as-is without touching the
/// network. Otherwise fresh copy is fetched; the caller stores whatever comes
/// back. Failures are logged and read as `None`, i.e. "do not show".
pub async fn resolve<A: LandingApi + ?Sized>(
    api: &A,
    current: Option<&ExitIntentCopy>,
) -> Option<ExitIntentCopy> {
    if let Some(copy) = current.filter(|copy| copy.can_show_now) {
        return Some(copy.clone());
    }

    match api.fetch_exit_intent().await {
        Ok(copy) => {
            debug!(can_show_now = copy.can_show_now, "exit-intent copy refreshed");
            Some(copy)
        }
        Err(err) => {
            warn!(error = %err, "exit-intent copy unavailable");
            None
        }
    }
}
