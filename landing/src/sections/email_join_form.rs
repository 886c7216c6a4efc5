use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;
use lendcommunity_core::join::{submit_join, validate_submission};
use lendcommunity_core::model::{ClickEvent, EmailSource};
use tracing::debug;

use crate::context::use_landing;

/// Email signup with inline validation and a honeypot field.
///
/// The exit-intent placement submits through the flow so a success closes
/// the capture gate; every other placement posts directly.
#[component]
pub fn EmailJoinForm(
    source: EmailSource,
    #[prop(optional)] submit_label: Option<String>,
) -> impl IntoView {
    let ctx = use_landing();
    let email = RwSignal::new(String::new());
    let honeypot = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let submitting = RwSignal::new(false);
    let joined = RwSignal::new(false);

    let submit_label = submit_label.unwrap_or_else(|| "Join Community".to_owned());
    let input_id = format!("email-{}", source.as_str());
    let error_id = format!("email-error-{}", source.as_str());
    let form_id = (source == EmailSource::Hero).then_some("email-join");

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();

        let checked = email.with_untracked(|value| {
            validate_submission(value, &honeypot.get_untracked()).map(str::to_owned)
        });
        let address = match checked {
            Ok(address) => address,
            Err(rejection) => {
                match rejection.user_message() {
                    Some(message) => error.set(Some(message.to_owned())),
                    None => debug!(source = source.as_str(), "join dropped: honeypot filled"),
                }
                return;
            }
        };

        error.set(None);
        submitting.set(true);
        spawn_local(async move {
            let outcome = match source {
                EmailSource::ExitIntent => {
                    let flow = ctx.flow();
                    flow.submit(&address, |copy| {
                        ctx.track(ClickEvent::new(
                            "exit_intent",
                            copy.cta_label.clone(),
                            copy.cta_action.as_str(),
                        ));
                    })
                    .await
                }
                _ => {
                    let api = ctx.api();
                    submit_join(api.as_ref(), &address, source).await
                }
            };

            // A successful exit-intent join unmounts this form with the modal.
            let _ = submitting.try_set(false);
            match outcome {
                Ok(_) => {
                    let _ = email.try_set(String::new());
                    let _ = joined.try_set(true);
                }
                Err(err) => {
                    let _ = error.try_set(err.user_message());
                }
            }
        });
    };

    view! {
        <Show when=move || !joined.get() fallback=|| view! { <JoinSuccess /> }>
            <form class="email-join-form" id=form_id on:submit=on_submit novalidate=true>
                <div class="email-join-form__field">
                    <label for=input_id.clone() class="visually-hidden">
                        "Email address"
                    </label>
                    <input
                        id=input_id.clone()
                        type="email"
                        placeholder="Enter your email"
                        class=move || {
                            if error.with(Option::is_some) {
                                "email-join-form__input email-join-form__input--error"
                            } else {
                                "email-join-form__input"
                            }
                        }
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                        disabled=move || submitting.get()
                        aria-invalid=move || error.with(Option::is_some).to_string()
                        aria-describedby=error_id.clone()
                    />
                    <input
                        type="text"
                        class="email-join-form__honeypot"
                        tabindex="-1"
                        autocomplete="off"
                        aria-hidden="true"
                        prop:value=move || honeypot.get()
                        on:input=move |ev| honeypot.set(event_target_value(&ev))
                    />
                </div>
                {
                    let error_id = error_id.clone();
                    move || {
                        error
                            .get()
                            .map(|message| {
                                view! {
                                    <p
                                        id=error_id.clone()
                                        class="email-join-form__error"
                                        role="alert"
                                        aria-live="polite"
                                    >
                                        {message}
                                    </p>
                                }
                            })
                    }
                }
                <button
                    type="submit"
                    class="btn btn-primary"
                    disabled=move || submitting.get() || email.with(String::is_empty)
                >
                    {
                        let label = submit_label.clone();
                        move || if submitting.get() { "Joining...".to_owned() } else { label.clone() }
                    }
                </button>
            </form>
        </Show>
    }
}

#[component]
fn JoinSuccess() -> impl IntoView {
    view! {
        <div class="email-join-form__success" role="status" aria-live="polite">
            <p class="email-join-form__success-text">
                "Success! Check your inbox for next steps."
            </p>
        </div>
    }
}
