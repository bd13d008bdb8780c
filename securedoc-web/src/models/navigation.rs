//! Navigation intent carried across the login detour.

/// The location a visitor tried to reach before being redirected to login.
///
/// Carried as transient router state, never persisted. Consumed once by the
/// login screen to send the visitor back after a successful flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationIntent {
    /// Path of the originally requested location.
    pub from: String,
}
