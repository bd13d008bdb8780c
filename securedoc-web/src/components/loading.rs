use yew::{Html, function_component, html};

#[function_component(Loading)]
pub fn loading() -> Html {
    html! {
        <div class="flex flex-col items-center justify-center h-full">
            <div class="flex items-center gap-2">
                <span class="loading loading-spinner"></span>
                <span>{"Loading"}</span>
            </div>
        </div>
    }
}
