//! Single document view.

use crate::routes::MainRoute;
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Debug, Clone, PartialEq, Properties)]
pub struct DocumentPageProps {
    pub id: String,
}

#[function_component(DocumentPage)]
pub fn document_page(props: &DocumentPageProps) -> Html {
    html! {
        <section class="document">
            <h1 class="text-2xl font-bold">{format!("Document {}", props.id)}</h1>
            <Link<MainRoute> to={MainRoute::Documents}>{"Back to documents"}</Link<MainRoute>>
        </section>
    }
}
