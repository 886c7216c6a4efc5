use std::cell::RefCell;
use std::rc::Rc;

use tracing::{debug, info};

use super::modal::{CloseReason, ModalController, ModalHost};
use super::resolver::resolve;
use crate::api::LandingApi;
use crate::error::JoinError;
use crate::join::submit_join;
use crate::model::{EmailSource, ExitIntentCopy, JoinResponse};
use crate::session::{CaptureGate, SessionStore};

/// Ties trigger counts, the capture gate, the resolver and the modal together.
///
/// Single-threaded by construction (`Rc`/`RefCell`); no borrow is held across
/// an `.await`, so overlapping triggers interleave safely and the last resolved
/// copy wins.
pub struct ExitIntentFlow<A, S, H> {
    api: Rc<A>,
    gate: CaptureGate<S>,
    host: H,
    copy: RefCell<Option<ExitIntentCopy>>,
    modal: RefCell<ModalController>,
}

impl<A, S, H> ExitIntentFlow<A, S, H>
where
    A: LandingApi,
    S: SessionStore,
    H: ModalHost,
{
    pub fn new(api: Rc<A>, gate: CaptureGate<S>, host: H) -> Self {
        Self {
            api,
            gate,
            host,
            copy: RefCell::new(None),
            modal: RefCell::new(ModalController::new()),
        }
    }

    /// Adopt copy bundled with the landing payload.
    pub fn seed_copy(&self, copy: Option<ExitIntentCopy>) {
        *self.copy.borrow_mut() = copy;
    }

    pub fn copy(&self) -> Option<ExitIntentCopy> {
        self.copy.borrow().clone()
    }

    pub fn is_visible(&self) -> bool {
        self.modal.borrow().is_visible()
    }

    pub fn is_captured(&self) -> bool {
        self.gate.is_captured()
    }

    /// React to a detector count. Repeated counts are ignored.
    pub async fn on_trigger(&self, count: u64) -> bool {
        if !self.modal.borrow_mut().accept_trigger(count) {
            return false;
        }
        self.open().await
    }

    /// Try to show the modal: gate open, copy resolved and eligible.
    pub async fn open(&self) -> bool {
        if self.gate.is_captured() {
            debug!("exit intent suppressed: already captured this session");
            return false;
        }
        if self.is_visible() {
            return false;
        }

        let current = self.copy();
        let resolved = resolve(self.api.as_ref(), current.as_ref()).await;
        if let Some(fresh) = &resolved {
            *self.copy.borrow_mut() = Some(fresh.clone());
        }

        let can_show = resolved.as_ref().is_some_and(|copy| copy.can_show_now);
        info!(can_show_now = can_show, "exit intent triggered");

        // Re-read the gate: a submission may have landed while resolving.
        self.modal
            .borrow_mut()
            .show(self.gate.is_captured(), resolved.as_ref(), &self.host)
    }

    pub fn close(&self, reason: CloseReason) -> bool {
        self.modal.borrow_mut().close(reason, &self.host)
    }

    /// Submit an address from inside the modal.
    ///
    /// On success the gate closes for the session, `on_tracked` runs with the
    /// current copy (click tracking), and the modal hides.
    pub async fn submit(
        &self,
        email: &str,
        on_tracked: impl FnOnce(&ExitIntentCopy),
    ) -> Result<JoinResponse, JoinError> {
        let response = submit_join(self.api.as_ref(), email, EmailSource::ExitIntent).await?;
        self.gate.mark_captured();
        if let Some(copy) = self.copy() {
            on_tracked(&copy);
        }
        self.close(CloseReason::Submitted);
        Ok(response)
    }
}
