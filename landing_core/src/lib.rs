//! # lendcommunity-core
//!
//! Platform-neutral core of the LendCommunity landing page.
//!
//! The browser crate owns rendering and DOM plumbing; everything with state
//! or policy lives here so it can be tested natively:
//!
//! - [`model`] - view-models returned by `/landing/v1/*`
//! - [`api`] - the [`api::LandingApi`] seam and its reqwest implementation
//! - [`session`] - session-scoped storage, session id and the capture gate
//! - [`exit_intent`] - detector, resolver, modal controller and the flow tying them together
//! - [`store`] - page-level load state
//! - [`join`] - email form validation and submission
//! - [`tracking`] - fire-and-forget CTA click dispatch
//!
//! ## Exit-intent in one picture
//!
//! ```text
//! pointer-out ──> ExitIntentDetector ──(counter)──> ExitIntentFlow::on_trigger
//!                                                     │  CaptureGate open?
//!                                                     │  resolve(copy) -> can_show_now?
//!                                                     └─> ModalController::show
//! ```
//!
//! ---
//!
//! Developed by The LendCommunity Team (c)2025

pub mod api;
pub mod config;
pub mod error;
pub mod exit_intent;
pub mod format;
pub mod join;
pub mod model;
pub mod session;
pub mod store;
pub mod tracking;

#[cfg(test)]
mod testing;

pub use api::{HttpLandingApi, LandingApi};
pub use config::{ExitIntentConfig, LandingConfig};
pub use error::{JoinError, LandingError};
pub use exit_intent::{
    CloseReason, ExitIntentDetector, ExitIntentFlow, ModalController, ModalHost, ModalState,
    PointerExit,
};
pub use session::{CaptureGate, MemorySessionStore, SessionId, SessionStore};
pub use store::{LandingStore, PageState};
