//! Authentication tab: enable or disable the second factor.

use crate::api::SecureDocClient;
use crate::components::alert::{Alert, AlertKind};
use crate::components::loading::Loading;
use shared::models::{ApiError, ResponseEnvelope, User, UserData};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

type MfaFuture = std::pin::Pin<
    Box<dyn std::future::Future<Output = Result<ResponseEnvelope<UserData>, ApiError>>>,
>;

#[function_component(AuthenticationPage)]
pub fn authentication_page() -> Html {
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

    let run = |call: fn(SecureDocClient) -> MfaFuture| {
        let user = user.clone();
        let error = error.clone();
        let busy = busy.clone();
        Callback::from(move |_: MouseEvent| {
            if *busy {
                return;
            }
            busy.set(true);
            error.set(None);
            let user = user.clone();
            let error = error.clone();
            let busy = busy.clone();
            spawn_local(async move {
                match call(SecureDocClient::shared()).await {
                    // The enrolment response carries the QR code URI, so the
                    // updated record is taken from it directly.
                    Ok(envelope) => {
                        if let Some(data) = envelope.data {
                            user.set(Some(Ok(data.user)));
                        }
                    }
                    Err(err) => error.set(Some(err.message().to_string())),
                }
                busy.set(false);
            });
        })
    };

    match user.as_ref() {
        None => html! { <Loading /> },
        Some(Err(message)) => html! {
            <Alert kind={AlertKind::Error} message={message.clone()} />
        },
        Some(Ok(loaded)) => html! {
            <section class="authentication">
                <h1 class="text-2xl font-bold">{"Authentication"}</h1>
                if let Some(message) = &*error {
                    <Alert kind={AlertKind::Error} message={message.clone()} />
                }
                if loaded.mfa {
                    <p>{"Two-factor authentication is enabled."}</p>
                    if let Some(uri) = &loaded.qr_code_image_uri {
                        <p>{"Scan this code with your authenticator app:"}</p>
                        <img class="w-48" src={uri.clone()} alt="MFA enrolment QR code" />
                    }
                    <button
                        class="btn btn-warning mt-4"
                        onclick={run(|client| Box::pin(async move { client.disable_mfa().await }))}
                        disabled={*busy}
                    >
                        {"Disable two-factor"}
                    </button>
                } else {
                    <p>{"Two-factor authentication is disabled."}</p>
                    <button
                        class="btn btn-primary mt-4"
                        onclick={run(|client| Box::pin(async move { client.enable_mfa().await }))}
                        disabled={*busy}
                    >
                        {"Enable two-factor"}
                    </button>
                }
            </section>
        },
    }
}
