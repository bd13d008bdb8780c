//! Password reset request form.

use crate::api::SecureDocClient;
use crate::components::alert::{Alert, AlertKind};
use crate::routes::MainRoute;
use crate::validation::{ValidationError, validate_email};
use shared::models::EmailAddress;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(ResetPasswordPage)]
pub fn reset_password_page() -> Html {
    let email = use_state(String::new);
    let email_error = use_state(|| None::<ValidationError>);
    let outcome = use_state(|| None::<Result<String, String>>);
    let loading = use_state(|| false);

    if SecureDocClient::shared().session().is_logged_in() {
        return html! { <Redirect<MainRoute> to={MainRoute::Documents} /> };
    }

    let onsubmit = {
        let email = email.clone();
        let email_error = email_error.clone();
        let outcome = outcome.clone();
        let loading = loading.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();

            let check = validate_email(&email);
            email_error.set(check.err());
            if check.is_err() {
                return;
            }

            loading.set(true);
            outcome.set(None);
            let request = EmailAddress {
                email: (*email).clone(),
            };
            let outcome = outcome.clone();
            let loading = loading.clone();
            spawn_local(async move {
                match SecureDocClient::shared().reset_password(&request).await {
                    Ok(envelope) => outcome.set(Some(Ok(envelope.message))),
                    Err(err) => outcome.set(Some(Err(err.message().to_string()))),
                }
                loading.set(false);
            });
        })
    };

    let on_email_change = {
        let email = email.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                email.set(input.value());
            }
        })
    };

    let banner = match outcome.as_ref() {
        Some(Ok(message)) => {
            let message = if message.is_empty() {
                "If the address exists, a reset link is on its way.".to_string()
            } else {
                message.clone()
            };
            html! { <Alert kind={AlertKind::Success} {message} /> }
        }
        Some(Err(message)) => html! { <Alert kind={AlertKind::Error} message={message.clone()} /> },
        None => html! {},
    };

    html! {
        <div class="flex items-center justify-center min-h-screen bg-base-200">
            <div class="card w-full max-w-md shadow-lg bg-base-100">
                <form class="card-body" onsubmit={onsubmit}>
                    <h2 class="card-title text-2xl">{"Reset password"}</h2>
                    { banner }
                    <div class="form-control">
                        <label class="label" for="email">
                            <span class="label-text">{"Email"}</span>
                        </label>
                        <input
                            id="email"
                            class="input input-bordered"
                            type="email"
                            value={(*email).clone()}
                            oninput={on_email_change}
                        />
                        if let Some(err) = *email_error {
                            <span class="label-text-alt text-error">{err.message()}</span>
                        }
                    </div>
                    <div class="form-control mt-6">
                        <button class="btn btn-primary" type="submit" disabled={*loading}>
                            {if *loading { "Sending..." } else { "Send reset link" }}
                        </button>
                    </div>
                    <div class="text-sm mt-2">
                        <Link<MainRoute> to={MainRoute::Login}>{"Back to sign in"}</Link<MainRoute>>
                    </div>
                </form>
            </div>
        </div>
    }
}
