//! Authorization tab: role selection.

use crate::api::SecureDocClient;
use crate::components::alert::{Alert, AlertKind};
use crate::components::loading::Loading;
use shared::models::{Role, RoleRequest, User};
use std::str::FromStr;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

const ROLES: [Role; 4] = [Role::User, Role::Manager, Role::Admin, Role::SuperAdmin];

#[function_component(AuthorizationPage)]
pub fn authorization_page() -> Html {
    let user = use_state(|| None::<Result<User, String>>);
    let outcome = use_state(|| None::<Result<String, String>>);
    let busy = use_state(|| false);

    {
        let user = user.clone();
        use_effect_with((), move |()| {
            spawn_local(async move {
                let result = SecureDocClient::shared()
                    .current_user()
                    .await
                    .map_err(|err| err.message().to_string());
                user.set(Some(result));
            });
        });
    }

    let on_role_change = {
        let user = user.clone();
        let outcome = outcome.clone();
        let busy = busy.clone();
        Callback::from(move |event: Event| {
            let Some(input) = event.target_dyn_into::<HtmlInputElement>() else {
                return;
            };
            let Ok(role) = Role::from_str(&input.value()) else {
                return;
            };

            busy.set(true);
            outcome.set(None);
            let user = user.clone();
            let outcome = outcome.clone();
            let busy = busy.clone();
            spawn_local(async move {
                let request = RoleRequest { role };
                match SecureDocClient::shared().update_role(&request).await {
                    Ok(_) => match SecureDocClient::shared().current_user().await {
                        Ok(loaded) => {
                            user.set(Some(Ok(loaded)));
                            outcome.set(Some(Ok("Role updated.".to_string())));
                        }
                        Err(err) => outcome.set(Some(Err(err.message().to_string()))),
                    },
                    Err(err) => outcome.set(Some(Err(err.message().to_string()))),
                }
                busy.set(false);
            });
        })
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

    match user.as_ref() {
        None => html! { <Loading /> },
        Some(Err(message)) => html! {
            <Alert kind={AlertKind::Error} message={message.clone()} />
        },
        Some(Ok(loaded)) => html! {
            <section class="authorization">
                <h1 class="text-2xl font-bold">{"Authorization"}</h1>
                { banner }
                <div class="form-control">
                    { for ROLES.iter().map(|role| html! {
                        <label class="label cursor-pointer">
                            <span class="label-text">{role.as_str()}</span>
                            <input
                                type="radio"
                                name="role"
                                class="radio"
                                value={role.as_str()}
                                checked={loaded.role == *role}
                                onchange={on_role_change.clone()}
                                disabled={*busy}
                            />
                        </label>
                    }) }
                </div>
                <p class="text-sm opacity-70">
                    {format!("Authorities: {}", loaded.authorities)}
                </p>
            </section>
        },
    }
}
