use std::rc::Rc;

use tracing::debug;

use crate::model::ExitIntentCopy;

/// Candidate elements for the focus trap; narrowed further by [`tab_stops`].
pub const FOCUSABLE_SELECTOR: &str = "button:not([disabled]), [href], \
     input:not([disabled]):not([tabindex=\"-1\"]), select:not([disabled]), \
     textarea:not([disabled]), [tabindex]:not([tabindex=\"-1\"])";

/// What the trap needs to know about one candidate element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FocusCandidate {
    pub disabled: bool,
    pub tab_index: i32,
}

impl FocusCandidate {
    /// Reachable with Tab: enabled and not pulled out of the tab order.
    pub fn is_tabbable(&self) -> bool {
        !self.disabled && self.tab_index >= 0
    }
}

/// Keep only the elements the browser will actually tab to, in order.
///
/// Disabled controls and `tabindex="-1"` fields (the honeypot) are skipped so
/// the first and last stops are ones Tab can land on.
pub fn tab_stops<T>(elements: Vec<T>, candidate: impl Fn(&T) -> FocusCandidate) -> Vec<T> {
    elements
        .into_iter()
        .filter(|element| candidate(element).is_tabbable())
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModalState {
    #[default]
    Hidden,
    Visible,
}

/// How a visible modal was dismissed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseReason {
    CloseButton,
    Backdrop,
    Escape,
    Submitted,
}

impl CloseReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            CloseReason::CloseButton => "close_button",
            CloseReason::Backdrop => "backdrop",
            CloseReason::Escape => "escape",
            CloseReason::Submitted => "submitted",
        }
    }
}

/// Side effects the controller needs from whatever renders the modal.
pub trait ModalHost {
    /// Render the modal with this copy.
    fn present(&self, copy: &ExitIntentCopy);
    /// Remove the modal.
    fn dismiss(&self);
    /// Suspend page scroll, returning the previous setting.
    fn suspend_scroll(&self) -> String;
    /// Put back exactly what [`ModalHost::suspend_scroll`] returned.
    fn restore_scroll(&self, previous: &str);
    /// Move keyboard focus to the modal's first actionable control.
    fn focus_primary(&self);
}

impl<T: ModalHost + ?Sized> ModalHost for Rc<T> {
    fn present(&self, copy: &ExitIntentCopy) {
        (**self).present(copy)
    }

    fn dismiss(&self) {
        (**self).dismiss()
    }

    fn suspend_scroll(&self) -> String {
        (**self).suspend_scroll()
    }

    fn restore_scroll(&self, previous: &str) {
        (**self).restore_scroll(previous)
    }

    fn focus_primary(&self) {
        (**self).focus_primary()
    }
}

/// `Hidden`/`Visible` state machine for the exit-intent modal.
#[derive(Debug, Default)]
pub struct ModalController {
    state: ModalState,
    last_trigger: u64,
    saved_scroll: Option<String>,
}

impl ModalController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> ModalState {
        self.state
    }

    pub fn is_visible(&self) -> bool {
        self.state == ModalState::Visible
    }

    /// Record a detector count; true only when it moved past the last one seen.
    pub fn accept_trigger(&mut self, count: u64) -> bool {
        if count <= self.last_trigger {
            return false;
        }
        self.last_trigger = count;
        true
    }

    /// `Hidden -> Visible` when the gate is open and the copy is eligible.
    pub fn show(
        &mut self,
        captured: bool,
        copy: Option<&ExitIntentCopy>,
        host: &impl ModalHost,
    ) -> bool {
        if self.is_visible() || captured {
            return false;
        }
        let Some(copy) = copy.filter(|copy| copy.can_show_now) else {
            return false;
        };

        self.saved_scroll = Some(host.suspend_scroll());
        host.present(copy);
        host.focus_primary();
        self.state = ModalState::Visible;
        debug!("exit-intent modal shown");
        true
    }

    /// `Visible -> Hidden`; a no-op while hidden.
    pub fn close(&mut self, reason: CloseReason, host: &impl ModalHost) -> bool {
        if !self.is_visible() {
            return false;
        }
        if let Some(previous) = self.saved_scroll.take() {
            host.restore_scroll(&previous);
        }
        host.dismiss();
        self.state = ModalState::Hidden;
        debug!(reason = reason.as_str(), "exit-intent modal closed");
        true
    }
}

/// Keys the modal cares about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalKey {
    Escape,
    Tab { shift: bool },
    Other,
}

impl ModalKey {
    /// Map a `KeyboardEvent.key` value.
    pub fn from_key(key: &str, shift: bool) -> Self {
        match key {
            "Escape" | "Esc" => ModalKey::Escape,
            "Tab" => ModalKey::Tab { shift },
            _ => ModalKey::Other,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    Close,
    /// Prevent the default and focus this index
    MoveFocus(usize),
    /// Let the browser handle it
    Pass,
}

/// Focus-trap decision for one key press.
///
/// `focused` is the index of the active element among the modal's focusable
/// elements, `None` when focus is outside the modal.
pub fn handle_key(key: ModalKey, focused: Option<usize>, count: usize) -> KeyOutcome {
    match key {
        ModalKey::Escape => KeyOutcome::Close,
        ModalKey::Other => KeyOutcome::Pass,
        ModalKey::Tab { .. } if count == 0 => KeyOutcome::Pass,
        ModalKey::Tab { shift } => {
            let last = count - 1;
            match (focused, shift) {
                (None, false) => KeyOutcome::MoveFocus(0),
                (None, true) => KeyOutcome::MoveFocus(last),
                (Some(0), true) => KeyOutcome::MoveFocus(last),
                (Some(i), false) if i >= last => KeyOutcome::MoveFocus(0),
                _ => KeyOutcome::Pass,
            }
        }
    }
}
