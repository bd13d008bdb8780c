//! Login screen: credentials, then an optional one-time code.

use crate::api::SecureDocClient;
use crate::models::login_flow::{
    LoginFlowEvent, LoginFlowState, NavCommand, Transition, advance,
};
use crate::models::navigation::NavigationIntent;
use crate::routes::{MainRoute, resolve_intent};
use crate::validation::{ValidationError, validate_code_digit, validate_email, validate_password};
use shared::models::{LoginRequest, QrCodeRequest};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

const CODE_DIGITS: usize = 6;

#[function_component(LoginPage)]
pub fn login_page() -> Html {
    let email = use_state(String::new);
    let password = use_state(String::new);
    let email_error = use_state(|| None::<ValidationError>);
    let password_error = use_state(|| None::<ValidationError>);
    let digits = use_state(|| vec![String::new(); CODE_DIGITS]);
    let flow = use_state(|| LoginFlowState::Anonymous);
    let error = use_state(|| None::<String>);
    let navigator = use_navigator().expect("navigator");
    let location = use_location().expect("location");

    let client = SecureDocClient::shared();
    // A completed login renders the intended destination instead of the form.
    if client.session().is_logged_in() {
        let target = resolve_intent(location.state::<NavigationIntent>().as_deref());
        return html! { <Redirect<MainRoute> to={target} /> };
    }

    // Applies one transition: state first, then the session flag, then the
    // redirect, so the destination route sees the flag already set.
    let apply = {
        let flow = flow.clone();
        let error = error.clone();
        let navigator = navigator.clone();
        let target = resolve_intent(location.state::<NavigationIntent>().as_deref());
        Callback::from(move |transition: Transition| {
            flow.set(transition.state);
            error.set(transition.error);
            if let Some(NavCommand::RedirectToIntent) = transition.command {
                SecureDocClient::shared().session().set_logged_in(true);
                navigator.push(&target);
            }
        })
    };

    let on_submit_credentials = {
        let email = email.clone();
        let password = password.clone();
        let email_error = email_error.clone();
        let password_error = password_error.clone();
        let flow = flow.clone();
        let apply = apply.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();

            let email_check = validate_email(&email);
            let password_check = validate_password(&password);
            email_error.set(email_check.err());
            password_error.set(password_check.err());
            if email_check.is_err() || password_check.is_err() {
                return;
            }

            let pending = advance(&flow, LoginFlowEvent::SubmitCredentials);
            let pending_state = pending.state.clone();
            apply.emit(pending);

            let request = LoginRequest {
                email: (*email).clone(),
                password: (*password).clone(),
            };
            let apply = apply.clone();
            spawn_local(async move {
                let event = match SecureDocClient::shared().login(&request).await {
                    Ok(envelope) => match envelope.data.map(|data| data.user) {
                        Some(user) => LoginFlowEvent::PrimaryAccepted {
                            mfa: user.mfa,
                            user_id: user.user_id,
                        },
                        None => LoginFlowEvent::PrimaryRejected(
                            "Login response missing account details".to_string(),
                        ),
                    },
                    Err(err) => LoginFlowEvent::PrimaryRejected(err.message().to_string()),
                };
                apply.emit(advance(&pending_state, event));
            });
        })
    };

    let on_submit_code = {
        let digits = digits.clone();
        let flow = flow.clone();
        let apply = apply.clone();
        let error = error.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();

            if digits.iter().any(|digit| validate_code_digit(digit).is_err()) {
                error.set(Some(ValidationError::InvalidCodeDigit.message().to_string()));
                return;
            }

            let LoginFlowState::SecondFactorRequired { user_id } = &*flow else {
                return;
            };
            let user_id = *user_id;
            let pending = advance(&flow, LoginFlowEvent::SubmitCode);
            let pending_state = pending.state.clone();
            apply.emit(pending);

            let request = QrCodeRequest {
                user_id,
                qr_code: digits.concat(),
            };
            let apply = apply.clone();
            spawn_local(async move {
                let event = match SecureDocClient::shared().verify_qr_code(&request).await {
                    Ok(_) => LoginFlowEvent::CodeAccepted,
                    Err(err) => LoginFlowEvent::CodeRejected(err.message().to_string()),
                };
                apply.emit(advance(&pending_state, event));
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

    let on_password_change = {
        let password = password.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                password.set(input.value());
            }
        })
    };

    let on_digit_change = |index: usize| {
        let digits = digits.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                let mut next = (*digits).clone();
                next[index] = input.value();
                digits.set(next);
            }
        })
    };

    let busy = matches!(
        *flow,
        LoginFlowState::PrimaryPending | LoginFlowState::VerifyPending { .. }
    );
    let banner = error.as_ref().map(|message| {
        html! {
            <div class="alert alert-error">
                <span>{message.clone()}</span>
            </div>
        }
    });

    let body = match &*flow {
        LoginFlowState::Anonymous | LoginFlowState::PrimaryPending => html! {
            <form class="card-body" onsubmit={on_submit_credentials}>
                <h2 class="card-title text-2xl">{"Sign in"}</h2>
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
                <div class="form-control">
                    <label class="label" for="password">
                        <span class="label-text">{"Password"}</span>
                    </label>
                    <input
                        id="password"
                        class="input input-bordered"
                        type="password"
                        value={(*password).clone()}
                        oninput={on_password_change}
                    />
                    if let Some(err) = *password_error {
                        <span class="label-text-alt text-error">{err.message()}</span>
                    }
                </div>
                <div class="form-control mt-6">
                    <button class="btn btn-primary" type="submit" disabled={busy}>
                        {if busy { "Signing in..." } else { "Sign in" }}
                    </button>
                </div>
                <div class="flex justify-between text-sm mt-2">
                    <Link<MainRoute> to={MainRoute::Register}>{"Create an account"}</Link<MainRoute>>
                    <Link<MainRoute> to={MainRoute::ResetPassword}>{"Forgot password?"}</Link<MainRoute>>
                </div>
            </form>
        },
        LoginFlowState::SecondFactorRequired { .. } | LoginFlowState::VerifyPending { .. } => {
            html! {
                <form class="card-body" onsubmit={on_submit_code}>
                    <h2 class="card-title text-2xl">{"Enter verification code"}</h2>
                    { banner }
                    <p>{"Enter the 6-digit code from your authenticator app."}</p>
                    <div class="flex gap-2 justify-center">
                        { for (0..CODE_DIGITS).map(|index| html! {
                            <input
                                class="input input-bordered w-12 text-center"
                                type="text"
                                maxlength="1"
                                inputmode="numeric"
                                value={digits[index].clone()}
                                oninput={on_digit_change(index)}
                            />
                        }) }
                    </div>
                    <div class="form-control mt-6">
                        <button class="btn btn-primary" type="submit" disabled={busy}>
                            {if busy { "Verifying..." } else { "Verify" }}
                        </button>
                    </div>
                </form>
            }
        }
        LoginFlowState::Authenticated => html! {},
    };

    html! {
        <div class="flex items-center justify-center min-h-screen bg-base-200">
            <div class="card w-full max-w-md shadow-lg bg-base-100">
                { body }
            </div>
        </div>
    }
}
