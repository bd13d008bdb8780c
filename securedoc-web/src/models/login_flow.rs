//! Login flow state machine.
//!
//! The login screen drives this machine instead of branching on ad-hoc
//! booleans. `advance` is a pure transition function: the component applies
//! the returned state, surfaces the returned error, and consumes the
//! navigation command at most once. The session flag is written by the
//! caller exactly when a redirect command is emitted, before navigating, so
//! the flag is visible to the next route render.

use uuid::Uuid;

/// States of the login flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginFlowState {
    /// No submission in progress.
    Anonymous,
    /// Credentials submitted, waiting on the primary check.
    PrimaryPending,
    /// Primary check passed but the account requires a one-time code.
    SecondFactorRequired { user_id: Uuid },
    /// One-time code submitted, waiting on verification.
    VerifyPending { user_id: Uuid },
    /// Login complete; the redirect command has been emitted.
    Authenticated,
}

/// Events fed into the machine by the login screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginFlowEvent {
    /// Valid credentials were submitted.
    SubmitCredentials,
    /// The primary check succeeded.
    PrimaryAccepted { mfa: bool, user_id: Uuid },
    /// The primary check failed with a message for the banner.
    PrimaryRejected(String),
    /// A complete one-time code was submitted.
    SubmitCode,
    /// The one-time code was accepted.
    CodeAccepted,
    /// The one-time code was rejected; entered digits are kept.
    CodeRejected(String),
}

/// Navigation side effect emitted by a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavCommand {
    /// Redirect to the remembered navigation intent, or the default landing
    /// route when none was recorded.
    RedirectToIntent,
}

/// Result of applying one event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub state: LoginFlowState,
    pub command: Option<NavCommand>,
    pub error: Option<String>,
}

impl Transition {
    fn stay(state: LoginFlowState) -> Self {
        Self {
            state,
            command: None,
            error: None,
        }
    }
}

/// Pure transition function. Event/state pairs that cannot occur in a
/// legitimate flow leave the state unchanged.
pub fn advance(state: &LoginFlowState, event: LoginFlowEvent) -> Transition {
    match (state, event) {
        (LoginFlowState::Anonymous, LoginFlowEvent::SubmitCredentials) => {
            Transition::stay(LoginFlowState::PrimaryPending)
        }
        (LoginFlowState::PrimaryPending, LoginFlowEvent::PrimaryAccepted { mfa, user_id }) => {
            if mfa {
                Transition::stay(LoginFlowState::SecondFactorRequired { user_id })
            } else {
                Transition {
                    state: LoginFlowState::Authenticated,
                    command: Some(NavCommand::RedirectToIntent),
                    error: None,
                }
            }
        }
        (LoginFlowState::PrimaryPending, LoginFlowEvent::PrimaryRejected(message)) => Transition {
            state: LoginFlowState::Anonymous,
            command: None,
            error: Some(message),
        },
        (LoginFlowState::SecondFactorRequired { user_id }, LoginFlowEvent::SubmitCode) => {
            Transition::stay(LoginFlowState::VerifyPending { user_id: *user_id })
        }
        (LoginFlowState::VerifyPending { .. }, LoginFlowEvent::CodeAccepted) => Transition {
            state: LoginFlowState::Authenticated,
            command: Some(NavCommand::RedirectToIntent),
            error: None,
        },
        (LoginFlowState::VerifyPending { user_id }, LoginFlowEvent::CodeRejected(message)) => {
            Transition {
                state: LoginFlowState::SecondFactorRequired { user_id: *user_id },
                command: None,
                error: Some(message),
            }
        }
        (state, _) => Transition::stay(state.clone()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user_id() -> Uuid {
        Uuid::nil()
    }

    #[test]
    fn submit_moves_to_primary_pending() {
        let transition = advance(&LoginFlowState::Anonymous, LoginFlowEvent::SubmitCredentials);
        assert_eq!(transition.state, LoginFlowState::PrimaryPending);
        assert!(transition.command.is_none());
        assert!(transition.error.is_none());
    }

    #[test]
    fn primary_success_without_mfa_redirects_once() {
        let transition = advance(
            &LoginFlowState::PrimaryPending,
            LoginFlowEvent::PrimaryAccepted {
                mfa: false,
                user_id: user_id(),
            },
        );
        assert_eq!(transition.state, LoginFlowState::Authenticated);
        assert_eq!(transition.command, Some(NavCommand::RedirectToIntent));
    }

    #[test]
    fn primary_success_with_mfa_requires_code_and_does_not_redirect() {
        let transition = advance(
            &LoginFlowState::PrimaryPending,
            LoginFlowEvent::PrimaryAccepted {
                mfa: true,
                user_id: user_id(),
            },
        );
        assert_eq!(
            transition.state,
            LoginFlowState::SecondFactorRequired { user_id: user_id() }
        );
        assert!(transition.command.is_none());
    }

    #[test]
    fn primary_failure_returns_to_anonymous_with_error() {
        let transition = advance(
            &LoginFlowState::PrimaryPending,
            LoginFlowEvent::PrimaryRejected("Invalid credentials".to_string()),
        );
        assert_eq!(transition.state, LoginFlowState::Anonymous);
        assert!(transition.command.is_none());
        assert_eq!(transition.error.as_deref(), Some("Invalid credentials"));
    }

    #[test]
    fn code_accepted_redirects_once() {
        let transition = advance(
            &LoginFlowState::VerifyPending { user_id: user_id() },
            LoginFlowEvent::CodeAccepted,
        );
        assert_eq!(transition.state, LoginFlowState::Authenticated);
        assert_eq!(transition.command, Some(NavCommand::RedirectToIntent));
    }

    #[test]
    fn code_rejected_keeps_second_factor_state() {
        let transition = advance(
            &LoginFlowState::VerifyPending { user_id: user_id() },
            LoginFlowEvent::CodeRejected("Invalid code".to_string()),
        );
        assert_eq!(
            transition.state,
            LoginFlowState::SecondFactorRequired { user_id: user_id() }
        );
        assert!(transition.command.is_none());
        assert_eq!(transition.error.as_deref(), Some("Invalid code"));
    }

    #[test]
    fn pending_states_never_emit_commands() {
        let states = [
            LoginFlowState::PrimaryPending,
            LoginFlowState::VerifyPending { user_id: user_id() },
        ];
        for state in states {
            let transition = advance(&state, LoginFlowEvent::SubmitCredentials);
            assert!(transition.command.is_none());
        }
    }

    #[test]
    fn out_of_order_events_leave_state_unchanged() {
        let transition = advance(&LoginFlowState::Anonymous, LoginFlowEvent::CodeAccepted);
        assert_eq!(transition.state, LoginFlowState::Anonymous);
        assert!(transition.command.is_none());

        let transition = advance(
            &LoginFlowState::Authenticated,
            LoginFlowEvent::PrimaryAccepted {
                mfa: false,
                user_id: user_id(),
            },
        );
        assert_eq!(transition.state, LoginFlowState::Authenticated);
        assert!(
            transition.command.is_none(),
            "a second redirect must never be emitted"
        );
    }

    #[test]
    fn full_mfa_flow_emits_exactly_one_redirect() {
        let mut state = LoginFlowState::Anonymous;
        let mut redirects = 0;
        let events = [
            LoginFlowEvent::SubmitCredentials,
            LoginFlowEvent::PrimaryAccepted {
                mfa: true,
                user_id: user_id(),
            },
            LoginFlowEvent::SubmitCode,
            LoginFlowEvent::CodeRejected("Invalid code".to_string()),
            LoginFlowEvent::SubmitCode,
            LoginFlowEvent::CodeAccepted,
        ];
        for event in events {
            let transition = advance(&state, event);
            if transition.command.is_some() {
                redirects += 1;
            }
            state = transition.state;
        }
        assert_eq!(state, LoginFlowState::Authenticated);
        assert_eq!(redirects, 1);
    }
}
