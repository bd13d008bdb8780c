mod authentication;
mod authorization;
mod document;
mod documents;
mod login;
mod not_found;
mod password;
mod profile;
mod register;
mod reset_password;
mod settings;
mod users;
mod verify_account;
mod verify_password;

pub use authentication::AuthenticationPage;
pub use authorization::AuthorizationPage;
pub use document::DocumentPage;
pub use documents::DocumentsPage;
pub use login::LoginPage;
pub use not_found::NotFoundPage;
pub use password::PasswordPage;
pub use profile::ProfilePage;
pub use register::RegisterPage;
pub use reset_password::ResetPasswordPage;
pub use settings::SettingsPage;
pub use users::UsersPage;
pub use verify_account::VerifyAccountPage;
pub use verify_password::VerifyPasswordPage;
