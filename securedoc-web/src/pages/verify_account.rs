//! Account activation landing page, reached from the email link.

use crate::api::SecureDocClient;
use crate::components::loading::Loading;
use crate::routes::MainRoute;
use serde::Deserialize;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
struct VerifyQuery {
    key: Option<String>,
}

enum VerifyState {
    MissingKey,
    Pending,
    Done(Result<String, String>),
}

#[function_component(VerifyAccountPage)]
pub fn verify_account_page() -> Html {
    let location = use_location().expect("location");
    let key = location
        .query::<VerifyQuery>()
        .ok()
        .and_then(|query| query.key);

    let state = use_state(|| {
        if key.is_some() {
            VerifyState::Pending
        } else {
            VerifyState::MissingKey
        }
    });

    // The key is checked exactly once, on mount. A missing key never reaches
    // the network.
    {
        let state = state.clone();
        use_effect_with(key, move |key| {
            if let Some(key) = key.clone() {
                spawn_local(async move {
                    let result = match SecureDocClient::shared().verify_account(&key).await {
                        Ok(envelope) => Ok(if envelope.message.is_empty() {
                            "Your account has been activated.".to_string()
                        } else {
                            envelope.message
                        }),
                        Err(err) => Err(err.message().to_string()),
                    };
                    state.set(VerifyState::Done(result));
                });
            }
        });
    }

    let body = match &*state {
        VerifyState::MissingKey => html! {
            <>
                <h2 class="card-title text-2xl">{"Invalid link"}</h2>
                <p>{"This activation link is incomplete. Use the link from your email."}</p>
            </>
        },
        VerifyState::Pending => html! { <Loading /> },
        VerifyState::Done(Ok(message)) => html! {
            <>
                <h2 class="card-title text-2xl">{"Account verified"}</h2>
                <p>{message.clone()}</p>
                <Link<MainRoute> classes="btn btn-primary mt-4" to={MainRoute::Login}>
                    {"Sign in"}
                </Link<MainRoute>>
            </>
        },
        VerifyState::Done(Err(message)) => html! {
            <>
                <h2 class="card-title text-2xl">{"Verification failed"}</h2>
                <div class="alert alert-error"><span>{message.clone()}</span></div>
            </>
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
