//! Application chrome shared by every gated screen.

use crate::api::SecureDocClient;
use crate::routes::{AccountRoute, MainRoute};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    fn log(s: &str);
}

#[derive(Debug, Clone, PartialEq, Properties)]
pub struct LayoutProps {
    pub children: Children,
}

/// Navbar, content area and footer wrapped around gated pages.
#[function_component(Layout)]
pub fn layout(props: &LayoutProps) -> Html {
    let navigator = use_navigator().expect("navigator");

    let on_logout = Callback::from(move |_: MouseEvent| {
        let navigator = navigator.clone();
        spawn_local(async move {
            // The visitor leaves either way; a failed logout still drops the
            // local flag so the login screen does not bounce them back.
            if let Err(err) = SecureDocClient::shared().logout().await {
                log(&format!("logout failed: {err}"));
                SecureDocClient::shared().session().clear();
            }
            navigator.push(&MainRoute::Login);
        });
    });

    html! {
        <div class="app-shell">
            <nav class="navbar">
                <Link<MainRoute> classes="brand" to={MainRoute::Documents}>
                    { "SecureDoc" }
                </Link<MainRoute>>
                <ul class="nav-links">
                    <li><Link<MainRoute> to={MainRoute::Documents}>{ "Documents" }</Link<MainRoute>></li>
                    <li><Link<MainRoute> to={MainRoute::Users}>{ "Users" }</Link<MainRoute>></li>
                    <li><Link<AccountRoute> to={AccountRoute::Profile}>{ "Account" }</Link<AccountRoute>></li>
                </ul>
                <button class="logout" onclick={on_logout}>{ "Logout" }</button>
            </nav>
            <main class="content">
                { props.children.clone() }
            </main>
            <footer class="footer">
                <span>{ "SecureDoc" }</span>
            </footer>
        </div>
    }
}
