//! Exit-intent: detection, eligibility and modal presentation.
//!
//! Detection knows nothing about policy. The detector only counts qualifying
//! pointer exits; [`ExitIntentFlow`] decides whether a new count opens the
//! modal (capture gate closed? copy eligible?).

mod detector;
mod flow;
mod modal;
mod resolver;

pub use detector::{DwellClock, ExitIntentDetector, PointerExit};
pub use flow::ExitIntentFlow;
pub use modal::{
    CloseReason, FOCUSABLE_SELECTOR, FocusCandidate, KeyOutcome, ModalController, ModalHost,
    ModalKey, ModalState, handle_key, tab_stops,
};
pub use resolver::resolve;
