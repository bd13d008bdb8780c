//! Account registration form.

use crate::api::SecureDocClient;
use crate::components::alert::{Alert, AlertKind};
use crate::routes::MainRoute;
use crate::validation::{ValidationError, validate_email, validate_name, validate_password};
use shared::models::RegisterRequest;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Default, Clone, PartialEq)]
struct FieldErrors {
    first_name: Option<ValidationError>,
    last_name: Option<ValidationError>,
    email: Option<ValidationError>,
    password: Option<ValidationError>,
}

impl FieldErrors {
    fn any(&self) -> bool {
        self.first_name.is_some()
            || self.last_name.is_some()
            || self.email.is_some()
            || self.password.is_some()
    }
}

#[function_component(RegisterPage)]
pub fn register_page() -> Html {
    let first_name = use_state(String::new);
    let last_name = use_state(String::new);
    let email = use_state(String::new);
    let password = use_state(String::new);
    let field_errors = use_state(FieldErrors::default);
    let outcome = use_state(|| None::<Result<String, String>>);
    let loading = use_state(|| false);

    let onsubmit = {
        let first_name = first_name.clone();
        let last_name = last_name.clone();
        let email = email.clone();
        let password = password.clone();
        let field_errors = field_errors.clone();
        let outcome = outcome.clone();
        let loading = loading.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();

            let errors = FieldErrors {
                first_name: validate_name(&first_name).err(),
                last_name: validate_name(&last_name).err(),
                email: validate_email(&email).err(),
                password: validate_password(&password).err(),
            };
            let blocked = errors.any();
            field_errors.set(errors);
            if blocked {
                return;
            }

            loading.set(true);
            outcome.set(None);
            let request = RegisterRequest {
                first_name: (*first_name).clone(),
                last_name: (*last_name).clone(),
                email: (*email).clone(),
                password: (*password).clone(),
            };
            let first_name = first_name.clone();
            let last_name = last_name.clone();
            let email = email.clone();
            let password = password.clone();
            let outcome = outcome.clone();
            let loading = loading.clone();
            spawn_local(async move {
                match SecureDocClient::shared().register(&request).await {
                    Ok(envelope) => {
                        // Successful registration clears the form for the
                        // next entry and leaves the confirmation visible.
                        first_name.set(String::new());
                        last_name.set(String::new());
                        email.set(String::new());
                        password.set(String::new());
                        outcome.set(Some(Ok(envelope.message)));
                    }
                    Err(err) => outcome.set(Some(Err(err.message().to_string()))),
                }
                loading.set(false);
            });
        })
    };

    let text_input = |id: &'static str,
                      label: &'static str,
                      kind: &'static str,
                      handle: &UseStateHandle<String>,
                      error: Option<ValidationError>| {
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
                <input {id} class="input input-bordered" type={kind} {value} {oninput} />
                if let Some(err) = error {
                    <span class="label-text-alt text-error">{err.message()}</span>
                }
            </div>
        }
    };

    let banner = match outcome.as_ref() {
        Some(Ok(message)) => {
            let message = if message.is_empty() {
                "Account created. Check your email to activate it.".to_string()
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
                    <h2 class="card-title text-2xl">{"Create an account"}</h2>
                    { banner }
                    { text_input("first-name", "First name", "text", &first_name, field_errors.first_name) }
                    { text_input("last-name", "Last name", "text", &last_name, field_errors.last_name) }
                    { text_input("email", "Email", "email", &email, field_errors.email) }
                    { text_input("password", "Password", "password", &password, field_errors.password) }
                    <div class="form-control mt-6">
                        <button class="btn btn-primary" type="submit" disabled={*loading}>
                            {if *loading { "Creating..." } else { "Create account" }}
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
