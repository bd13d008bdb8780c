//! Document overview, the default landing screen after login.

use crate::routes::MainRoute;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(DocumentsPage)]
pub fn documents_page() -> Html {
    html! {
        <section class="documents">
            <h1 class="text-2xl font-bold">{"Documents"}</h1>
            <p>{"Select a document to view its details."}</p>
            <ul class="menu">
                <li>
                    <Link<MainRoute> to={MainRoute::Document { id: "getting-started".to_string() }}>
                        {"Getting started"}
                    </Link<MainRoute>>
                </li>
            </ul>
        </section>
    }
}
