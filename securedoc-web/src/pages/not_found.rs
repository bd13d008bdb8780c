//! Catch-all for unrecognized paths.

use crate::routes::MainRoute;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(NotFoundPage)]
pub fn not_found_page() -> Html {
    html! {
        <div class="flex flex-col items-center justify-center min-h-screen gap-4">
            <h1 class="text-4xl font-bold">{"404"}</h1>
            <p>{"The page you are looking for does not exist."}</p>
            <Link<MainRoute> classes="btn btn-primary" to={MainRoute::Documents}>
                {"Go to documents"}
            </Link<MainRoute>>
        </div>
    }
}
