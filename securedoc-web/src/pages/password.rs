//! Password tab: change the password while logged in.

use crate::api::SecureDocClient;
use crate::components::alert::{Alert, AlertKind};
use crate::validation::{ValidationError, validate_new_password, validate_password};
use shared::models::UpdatePassword;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[function_component(PasswordPage)]
pub fn password_page() -> Html {
    let current = use_state(String::new);
    let new_password = use_state(String::new);
    let confirm_password = use_state(String::new);
    let field_error = use_state(|| None::<ValidationError>);
    let outcome = use_state(|| None::<Result<String, String>>);
    let saving = use_state(|| false);

    let onsubmit = {
        let current = current.clone();
        let new_password = new_password.clone();
        let confirm_password = confirm_password.clone();
        let field_error = field_error.clone();
        let outcome = outcome.clone();
        let saving = saving.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();

            let check = validate_password(&current)
                .and_then(|()| validate_new_password(&new_password, &confirm_password));
            field_error.set(check.err());
            if check.is_err() {
                return;
            }

            saving.set(true);
            outcome.set(None);
            let request = UpdatePassword {
                password: (*current).clone(),
                new_password: (*new_password).clone(),
                confirm_new_password: (*confirm_password).clone(),
            };
            let current = current.clone();
            let new_password = new_password.clone();
            let confirm_password = confirm_password.clone();
            let outcome = outcome.clone();
            let saving = saving.clone();
            spawn_local(async move {
                match SecureDocClient::shared().update_password(&request).await {
                    Ok(envelope) => {
                        current.set(String::new());
                        new_password.set(String::new());
                        confirm_password.set(String::new());
                        outcome.set(Some(Ok(if envelope.message.is_empty() {
                            "Password updated.".to_string()
                        } else {
                            envelope.message
                        })));
                    }
                    Err(err) => outcome.set(Some(Err(err.message().to_string()))),
                }
                saving.set(false);
            });
        })
    };

    let password_input = |id: &'static str, label: &'static str, handle: &UseStateHandle<String>| {
        let handle = handle.clone();
        let value = (*handle).clone();
        let oninput = Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                handle.set(input.value());
            }
        });
        html! {
            <div class="form-control">
                <label class="label" for={id}>
                    <span class="label-text">{label}</span>
                </label>
                <input {id} class="input input-bordered" type="password" {value} {oninput} />
            </div>
        }
    };

    let dismiss = {
        let outcome = outcome.clone();
        Callback::from(move |()| outcome.set(None))
    };
    let banner = match outcome.as_ref() {
        Some(Ok(message)) => html! {
            <Alert kind={AlertKind::Success} message={message.clone()} on_dismiss={dismiss} />
        },
        Some(Err(message)) => html! {
            <Alert kind={AlertKind::Error} message={message.clone()} on_dismiss={dismiss} />
        },
        None => html! {},
    };

    html! {
        <section class="password">
            <h1 class="text-2xl font-bold">{"Password"}</h1>
            { banner }
            <form onsubmit={onsubmit}>
                { password_input("current-password", "Current password", &current) }
                { password_input("new-password", "New password", &new_password) }
                { password_input("confirm-password", "Confirm new password", &confirm_password) }
                if let Some(err) = *field_error {
                    <span class="label-text-alt text-error">{err.message()}</span>
                }
                <div class="form-control mt-6">
                    <button class="btn btn-primary" type="submit" disabled={*saving}>
                        {if *saving { "Updating..." } else { "Update password" }}
                    </button>
                </div>
            </form>
        </section>
    }
}
