//! Route table and guard wiring.
//!
//! Public screens render directly; the document and account trees render
//! inside the session gate, and the user list additionally inside the role
//! gate.

use crate::containers::layout::Layout;
use crate::containers::protected::ProtectedRoute;
use crate::containers::restricted::Restricted;
use crate::models::navigation::NavigationIntent;
use crate::pages::{
    AuthenticationPage, AuthorizationPage, DocumentPage, DocumentsPage, LoginPage, NotFoundPage,
    PasswordPage, ProfilePage, RegisterPage, ResetPasswordPage, SettingsPage, UsersPage,
    VerifyAccountPage, VerifyPasswordPage,
};
use strum::{EnumIter, IntoEnumIterator};
use yew::prelude::*;
use yew_router::prelude::*;

/// The main routes.
#[derive(Debug, Clone, PartialEq, Routable)]
pub enum MainRoute {
    #[at("/")]
    Home,
    #[at("/login")]
    Login,
    #[at("/register")]
    Register,
    #[at("/resetpassword")]
    ResetPassword,
    #[at("/user/verify/account")]
    VerifyAccount,
    #[at("/user/verify/password")]
    VerifyPassword,
    #[at("/documents")]
    Documents,
    #[at("/documents/:id")]
    Document { id: String },
    #[at("/users")]
    Users,
    #[at("/user")]
    AccountRoot,
    #[at("/user/*")]
    Account,
    #[not_found]
    #[at("/404")]
    NotFound,
}

/// The account settings routes, nested under `/user`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Routable, EnumIter)]
pub enum AccountRoute {
    #[at("/user/profile")]
    Profile,
    #[at("/user/password")]
    Password,
    #[at("/user/settings")]
    Settings,
    #[at("/user/authorization")]
    Authorization,
    #[at("/user/authentication")]
    Authentication,
    #[not_found]
    #[at("/user/404")]
    NotFound,
}

impl AccountRoute {
    /// Tab label shown in the account navigation.
    pub fn label(self) -> &'static str {
        match self {
            Self::Profile => "Profile",
            Self::Password => "Password",
            Self::Settings => "Settings",
            Self::Authorization => "Authorization",
            Self::Authentication => "Authentication",
            Self::NotFound => "Not Found",
        }
    }
}

/// Resolves a remembered navigation intent into a route, falling back to the
/// default landing route when the intent is absent or unrecognizable.
///
/// `recognize` resolves unknown paths to the catch-all variant rather than
/// `None`, so that variant is filtered out here; a login must never land on
/// the 404 page.
pub fn resolve_intent(intent: Option<&NavigationIntent>) -> MainRoute {
    intent
        .and_then(|intent| MainRoute::recognize(&intent.from))
        .filter(|route| *route != MainRoute::NotFound)
        .unwrap_or(MainRoute::Documents)
}

/// Switch function for the main routes.
pub fn switch(route: MainRoute) -> Html {
    match route {
        MainRoute::Home => html! { <Redirect<MainRoute> to={MainRoute::Documents} /> },
        MainRoute::Login => html! { <LoginPage /> },
        MainRoute::Register => html! { <RegisterPage /> },
        MainRoute::ResetPassword => html! { <ResetPasswordPage /> },
        MainRoute::VerifyAccount => html! { <VerifyAccountPage /> },
        MainRoute::VerifyPassword => html! { <VerifyPasswordPage /> },
        MainRoute::Documents => html! {
            <ProtectedRoute><Layout><DocumentsPage /></Layout></ProtectedRoute>
        },
        MainRoute::Document { id } => html! {
            <ProtectedRoute><Layout><DocumentPage {id} /></Layout></ProtectedRoute>
        },
        MainRoute::Users => html! {
            <ProtectedRoute><Layout><Restricted><UsersPage /></Restricted></Layout></ProtectedRoute>
        },
        MainRoute::AccountRoot | MainRoute::Account => html! {
            <ProtectedRoute><Layout><Switch<AccountRoute> render={switch_account} /></Layout></ProtectedRoute>
        },
        MainRoute::NotFound => html! { <NotFoundPage /> },
    }
}

/// Switch function for the account settings routes.
fn switch_account(route: AccountRoute) -> Html {
    let page = match route {
        AccountRoute::Profile => html! { <ProfilePage /> },
        AccountRoute::Password => html! { <PasswordPage /> },
        AccountRoute::Settings => html! { <SettingsPage /> },
        AccountRoute::Authorization => html! { <AuthorizationPage /> },
        AccountRoute::Authentication => html! { <AuthenticationPage /> },
        AccountRoute::NotFound => {
            return html! { <Redirect<MainRoute> to={MainRoute::NotFound} /> };
        }
    };

    let tabs = AccountRoute::iter()
        .filter(|tab| *tab != AccountRoute::NotFound)
        .map(|tab| {
            let classes = if tab == route { "tab tab-active" } else { "tab" };
            html! {
                <Link<AccountRoute> {classes} to={tab}>{ tab.label() }</Link<AccountRoute>>
            }
        });

    html! {
        <>
            <div class="tabs tabs-bordered">{ for tabs }</div>
            { page }
        </>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognizes_public_routes() {
        assert_eq!(MainRoute::recognize("/login"), Some(MainRoute::Login));
        assert_eq!(MainRoute::recognize("/register"), Some(MainRoute::Register));
        assert_eq!(
            MainRoute::recognize("/resetpassword"),
            Some(MainRoute::ResetPassword)
        );
    }

    #[test]
    fn recognizes_verification_routes_over_account_wildcard() {
        assert_eq!(
            MainRoute::recognize("/user/verify/account"),
            Some(MainRoute::VerifyAccount)
        );
        assert_eq!(
            MainRoute::recognize("/user/verify/password"),
            Some(MainRoute::VerifyPassword)
        );
    }

    #[test]
    fn recognizes_document_routes() {
        assert_eq!(MainRoute::recognize("/documents"), Some(MainRoute::Documents));
        assert_eq!(
            MainRoute::recognize("/documents/42"),
            Some(MainRoute::Document {
                id: "42".to_string()
            })
        );
    }

    #[test]
    fn recognizes_account_routes() {
        assert_eq!(
            AccountRoute::recognize("/user/profile"),
            Some(AccountRoute::Profile)
        );
        assert_eq!(
            AccountRoute::recognize("/user/authentication"),
            Some(AccountRoute::Authentication)
        );
    }

    #[test]
    fn intent_resolves_to_requested_path() {
        let intent = NavigationIntent {
            from: "/documents/42".to_string(),
        };
        assert_eq!(
            resolve_intent(Some(&intent)),
            MainRoute::Document {
                id: "42".to_string()
            }
        );
    }

    #[test]
    fn missing_intent_falls_back_to_documents() {
        assert_eq!(resolve_intent(None), MainRoute::Documents);
    }

    #[test]
    fn unrecognizable_intent_falls_back_to_documents() {
        for from in ["not-a-path", "/no/such/route", "/404"] {
            let intent = NavigationIntent {
                from: from.to_string(),
            };
            assert_eq!(resolve_intent(Some(&intent)), MainRoute::Documents);
        }
    }

    #[test]
    fn account_routes_have_labels() {
        for route in AccountRoute::iter() {
            assert!(!route.label().is_empty());
        }
    }
}
