//! Role gate for administrator-only routes.

use crate::api::SecureDocClient;
use crate::components::loading::Loading;
use crate::routes::MainRoute;
use shared::models::{ApiError, User};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Debug, Clone, PartialEq, Properties)]
pub struct RestrictedProps {
    pub children: Children,
}

/// Renders its children only for users holding an administrator role.
///
/// The role comes from the cached profile fetch, so passing the gate does not
/// cost an extra round trip when the profile is fresh. Non-admins get an
/// access-denied view rather than a redirect, matching the optimistic nature
/// of client-side gating.
#[function_component(Restricted)]
pub fn restricted(props: &RestrictedProps) -> Html {
    let profile = use_state(|| Option::<Result<User, ApiError>>::None);

    {
        let profile = profile.clone();
        use_effect_with((), move |()| {
            spawn_local(async move {
                let result = SecureDocClient::shared().current_user().await;
                profile.set(Some(result));
            });
        });
    }

    match profile.as_ref() {
        None => html! { <Loading /> },
        Some(Ok(user)) if user.role.is_admin() => html! { <>{ props.children.clone() }</> },
        Some(_) => html! {
            <section class="access-denied">
                <h1>{ "Access denied" }</h1>
                <p>{ "You do not have permission to view this page." }</p>
                <Link<MainRoute> to={MainRoute::Documents}>{ "Back to documents" }</Link<MainRoute>>
            </section>
        },
    }
}
