//! Session gate for routes that require a logged-in user.

use crate::api::SecureDocClient;
use crate::models::navigation::NavigationIntent;
use crate::routes::MainRoute;
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Debug, Clone, PartialEq, Properties)]
pub struct ProtectedRouteProps {
    pub children: Children,
}

/// Renders its children only when the session flag says a login has
/// completed. Otherwise redirects to the login screen, remembering the
/// requested path so a successful login can return there.
#[function_component(ProtectedRoute)]
pub fn protected_route(props: &ProtectedRouteProps) -> Html {
    let logged_in = SecureDocClient::shared().session().is_logged_in();
    let navigator = use_navigator().expect("navigator");
    let location = use_location().expect("location");

    use_effect_with(logged_in, move |logged_in| {
        if !*logged_in {
            navigator.push_with_state(
                &MainRoute::Login,
                NavigationIntent {
                    from: location.path().to_string(),
                },
            );
        }
    });

    if logged_in {
        html! { <>{ props.children.clone() }</> }
    } else {
        html! {}
    }
}
