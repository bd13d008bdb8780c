//! Settings tab: account status toggles.

use crate::api::SecureDocClient;
use crate::components::alert::{Alert, AlertKind};
use crate::components::loading::Loading;
use shared::models::{ApiError, ResponseEnvelope, User};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

type ToggleFuture =
    std::pin::Pin<Box<dyn std::future::Future<Output = Result<ResponseEnvelope<()>, ApiError>>>>;

#[function_component(SettingsPage)]
pub fn settings_page() -> Html {
    let user = use_state(|| None::<Result<User, String>>);
    let error = use_state(|| None::<String>);
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

    // Each toggle runs its mutation, then re-reads the profile so the
    // rendered state always comes from the service.
    let toggle = |run: fn(SecureDocClient) -> ToggleFuture| {
        let user = user.clone();
        let error = error.clone();
        let busy = busy.clone();
        Callback::from(move |_: Event| {
            if *busy {
                return;
            }
            busy.set(true);
            error.set(None);
            let user = user.clone();
            let error = error.clone();
            let busy = busy.clone();
            spawn_local(async move {
                match run(SecureDocClient::shared()).await {
                    Ok(_) => match SecureDocClient::shared().current_user().await {
                        Ok(loaded) => user.set(Some(Ok(loaded))),
                        Err(err) => error.set(Some(err.message().to_string())),
                    },
                    Err(err) => error.set(Some(err.message().to_string())),
                }
                busy.set(false);
            });
        })
    };

    let row = |label: &'static str, checked: bool, onchange: Callback<Event>| {
        html! {
            <label class="label cursor-pointer">
                <span class="label-text">{label}</span>
                <input type="checkbox" class="toggle" {checked} {onchange} disabled={*busy} />
            </label>
        }
    };

    match user.as_ref() {
        None => html! { <Loading /> },
        Some(Err(message)) => html! {
            <Alert kind={AlertKind::Error} message={message.clone()} />
        },
        Some(Ok(loaded)) => html! {
            <section class="settings">
                <h1 class="text-2xl font-bold">{"Settings"}</h1>
                if let Some(message) = &*error {
                    <Alert kind={AlertKind::Error} message={message.clone()} />
                }
                <div class="form-control">
                    { row("Account expired", !loaded.account_non_expired,
                        toggle(|client| Box::pin(async move { client.toggle_account_expired().await }))) }
                    { row("Account locked", !loaded.account_non_locked,
                        toggle(|client| Box::pin(async move { client.toggle_account_locked().await }))) }
                    { row("Account enabled", loaded.enabled,
                        toggle(|client| Box::pin(async move { client.toggle_account_enabled().await }))) }
                    { row("Credentials expired", !loaded.credentials_non_expired,
                        toggle(|client| Box::pin(async move { client.toggle_credentials_expired().await }))) }
                </div>
            </section>
        },
    }
}
