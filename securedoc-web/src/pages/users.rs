//! Administrator view over every account known to the service.

use crate::api::SecureDocClient;
use crate::components::alert::{Alert, AlertKind};
use crate::components::loading::Loading;
use shared::models::User;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

#[function_component(UsersPage)]
pub fn users_page() -> Html {
    let users = use_state(|| None::<Result<Vec<User>, String>>);

    {
        let users = users.clone();
        use_effect_with((), move |()| {
            spawn_local(async move {
                let result = match SecureDocClient::shared().get_users().await {
                    Ok(envelope) => Ok(envelope
                        .data
                        .map(|data| data.users)
                        .unwrap_or_default()),
                    Err(err) => Err(err.message().to_string()),
                };
                users.set(Some(result));
            });
        });
    }

    match users.as_ref() {
        None => html! { <Loading /> },
        Some(Err(message)) => html! {
            <Alert kind={AlertKind::Error} message={message.clone()} />
        },
        Some(Ok(users)) => html! {
            <section class="users">
                <h1 class="text-2xl font-bold">{"Users"}</h1>
                <table class="table">
                    <thead>
                        <tr>
                            <th>{"Name"}</th>
                            <th>{"Email"}</th>
                            <th>{"Role"}</th>
                            <th>{"Status"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        { for users.iter().map(user_row) }
                    </tbody>
                </table>
            </section>
        },
    }
}

fn user_row(user: &User) -> Html {
    let status = if !user.enabled {
        "Disabled"
    } else if !user.account_non_locked {
        "Locked"
    } else {
        "Active"
    };
    html! {
        <tr key={user.user_id.to_string()}>
            <td>{format!("{} {}", user.first_name, user.last_name)}</td>
            <td>{user.email.clone()}</td>
            <td>{user.role.to_string()}</td>
            <td>{status}</td>
        </tr>
    }
}
