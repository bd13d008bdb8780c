use yew::prelude::*;

/// Visual style of an [`Alert`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertKind {
    Error,
    Success,
}

impl AlertKind {
    fn class(self) -> &'static str {
        match self {
            Self::Error => "alert alert-error",
            Self::Success => "alert alert-success",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Properties)]
pub struct AlertProps {
    pub kind: AlertKind,
    pub message: String,
    #[prop_or_default]
    pub on_dismiss: Option<Callback<()>>,
}

/// Inline banner for operation outcomes.
#[function_component(Alert)]
pub fn alert(props: &AlertProps) -> Html {
    let dismiss = props.on_dismiss.clone().map(|on_dismiss| {
        let onclick = Callback::from(move |_: MouseEvent| on_dismiss.emit(()));
        html! { <button class="alert-dismiss" {onclick}>{ "\u{d7}" }</button> }
    });

    html! {
        <div class={props.kind.class()} role="alert">
            <span>{ &props.message }</span>
            { dismiss }
        </div>
    }
}
