//! Password reset completion page, reached from the email link.
//!
//! The reset key is verified once on mount; only a verified key reveals the
//! new-password form, bound to the account the service resolved the key to.

use crate::api::SecureDocClient;
use crate::components::alert::{Alert, AlertKind};
use crate::components::loading::Loading;
use crate::routes::MainRoute;
use crate::validation::{ValidationError, validate_new_password};
use serde::Deserialize;
use shared::models::UpdateNewPassword;
use uuid::Uuid;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
struct VerifyQuery {
    key: Option<String>,
}

enum KeyState {
    MissingKey,
    Pending,
    Verified { user_id: Uuid },
    Rejected(String),
}

#[function_component(VerifyPasswordPage)]
pub fn verify_password_page() -> Html {
    let location = use_location().expect("location");
    let key = location
        .query::<VerifyQuery>()
        .ok()
        .and_then(|query| query.key);

    let key_state = use_state(|| {
        if key.is_some() {
            KeyState::Pending
        } else {
            KeyState::MissingKey
        }
    });
    let new_password = use_state(String::new);
    let confirm_password = use_state(String::new);
    let password_error = use_state(|| None::<ValidationError>);
    let outcome = use_state(|| None::<Result<String, String>>);
    let loading = use_state(|| false);

    {
        let key_state = key_state.clone();
        use_effect_with(key, move |key| {
            if let Some(key) = key.clone() {
                spawn_local(async move {
                    match SecureDocClient::shared().verify_password(&key).await {
                        Ok(envelope) => match envelope.data.map(|data| data.user) {
                            Some(user) => key_state.set(KeyState::Verified {
                                user_id: user.user_id,
                            }),
                            None => key_state.set(KeyState::Rejected(
                                "Reset link could not be verified".to_string(),
                            )),
                        },
                        Err(err) => key_state.set(KeyState::Rejected(err.message().to_string())),
                    }
                });
            }
        });
    }

    let onsubmit = {
        let key_state = key_state.clone();
        let new_password = new_password.clone();
        let confirm_password = confirm_password.clone();
        let password_error = password_error.clone();
        let outcome = outcome.clone();
        let loading = loading.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();

            let KeyState::Verified { user_id } = &*key_state else {
                return;
            };
            let user_id = *user_id;

            let check = validate_new_password(&new_password, &confirm_password);
            password_error.set(check.err());
            if check.is_err() {
                return;
            }

            loading.set(true);
            outcome.set(None);
            let request = UpdateNewPassword {
                user_id,
                new_password: (*new_password).clone(),
                confirm_new_password: (*confirm_password).clone(),
            };
            let new_password = new_password.clone();
            let confirm_password = confirm_password.clone();
            let outcome = outcome.clone();
            let loading = loading.clone();
            spawn_local(async move {
                match SecureDocClient::shared().do_reset_password(&request).await {
                    Ok(envelope) => {
                        new_password.set(String::new());
                        confirm_password.set(String::new());
                        outcome.set(Some(Ok(if envelope.message.is_empty() {
                            "Your password has been updated.".to_string()
                        } else {
                            envelope.message
                        })));
                    }
                    Err(err) => outcome.set(Some(Err(err.message().to_string()))),
                }
                loading.set(false);
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

    let banner = match outcome.as_ref() {
        Some(Ok(message)) => html! {
            <>
                <Alert kind={AlertKind::Success} message={message.clone()} />
                <Link<MainRoute> classes="btn btn-primary mt-4" to={MainRoute::Login}>
                    {"Sign in"}
                </Link<MainRoute>>
            </>
        },
        Some(Err(message)) => html! { <Alert kind={AlertKind::Error} message={message.clone()} /> },
        None => html! {},
    };

    let body = match &*key_state {
        KeyState::MissingKey => html! {
            <>
                <h2 class="card-title text-2xl">{"Invalid link"}</h2>
                <p>{"This reset link is incomplete. Use the link from your email."}</p>
            </>
        },
        KeyState::Pending => html! { <Loading /> },
        KeyState::Rejected(message) => html! {
            <>
                <h2 class="card-title text-2xl">{"Link rejected"}</h2>
                <div class="alert alert-error"><span>{message.clone()}</span></div>
                <Link<MainRoute> to={MainRoute::ResetPassword}>{"Request a new link"}</Link<MainRoute>>
            </>
        },
        KeyState::Verified { .. } => html! {
            <form onsubmit={onsubmit}>
                <h2 class="card-title text-2xl">{"Choose a new password"}</h2>
                { banner }
                { password_input("new-password", "New password", &new_password) }
                { password_input("confirm-password", "Confirm new password", &confirm_password) }
                if let Some(err) = *password_error {
                    <span class="label-text-alt text-error">{err.message()}</span>
                }
                <div class="form-control mt-6">
                    <button class="btn btn-primary" type="submit" disabled={*loading}>
                        {if *loading { "Saving..." } else { "Save password" }}
                    </button>
                </div>
            </form>
        },
    };

    html! {
        <div class="flex items-center justify-center min-h-screen bg-base-200">
            <div class="card w-full max-w-md shadow-lg bg-base-100">
                <div class="card-body">{ body }</div>
            </div>
        </div>
    }
}
