use leptos::ev;
use leptos::prelude::*;
use lendcommunity_core::exit_intent::{KeyOutcome, ModalKey, handle_key};
use lendcommunity_core::model::{EmailSource, ExitIntentCopy};
use lendcommunity_core::CloseReason;
use web_sys::{KeyboardEvent, MouseEvent};

use super::EmailJoinForm;
use crate::browser::{focus, focusables, focused_index};
use crate::context::use_landing;

/// Mounted while the flow presents copy; the flow owns every open/close.
#[component]
pub fn ExitIntentModal() -> impl IntoView {
    let ctx = use_landing();
    move || {
        ctx.modal_copy
            .get()
            .map(|copy| view! { <Dialog copy=copy /> })
    }
}

#[component]
fn Dialog(copy: ExitIntentCopy) -> impl IntoView {
    let ctx = use_landing();
    let dialog = ctx.dialog;

    let keys = window_event_listener(ev::keydown, move |event: KeyboardEvent| {
        let elements = focusables(&dialog);
        let key = ModalKey::from_key(&event.key(), event.shift_key());
        match handle_key(key, focused_index(&elements), elements.len()) {
            KeyOutcome::Close => {
                event.prevent_default();
                ctx.close_exit_intent(CloseReason::Escape);
            }
            KeyOutcome::MoveFocus(index) => {
                event.prevent_default();
                if let Some(element) = elements.get(index) {
                    focus(element);
                }
            }
            KeyOutcome::Pass => {}
        }
    });
    on_cleanup(move || keys.remove());

    let on_backdrop = move |event: MouseEvent| {
        // Only clicks on the backdrop itself, not bubbled from the content.
        if event.target() == event.current_target() {
            ctx.close_exit_intent(CloseReason::Backdrop);
        }
    };

    let ExitIntentCopy {
        headline,
        body,
        cta_label,
        image_url,
        ..
    } = copy;

    view! {
        <div
            class="exit-intent-modal__backdrop"
            role="dialog"
            aria-modal="true"
            aria-labelledby="exit-intent-headline"
            on:click=on_backdrop
        >
            <div class="exit-intent-modal" node_ref=dialog>
                <button
                    class="exit-intent-modal__close"
                    aria-label="Close"
                    on:click=move |_| ctx.close_exit_intent(CloseReason::CloseButton)
                >
                    "×"
                </button>
                {image_url
                    .map(|url| {
                        view! {
                            <div class="exit-intent-modal__image">
                                <img src=url alt="" />
                            </div>
                        }
                    })}
                <div class="exit-intent-modal__content">
                    <h2 id="exit-intent-headline" class="exit-intent-modal__headline">
                        {headline}
                    </h2>
                    {body.map(|text| view! { <p class="exit-intent-modal__body">{text}</p> })}
                    <EmailJoinForm source=EmailSource::ExitIntent submit_label=cta_label />
                </div>
            </div>
        </div>
    }
}
