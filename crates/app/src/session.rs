use dioxus::prelude::*;
use shared_types::AuthUser;

/// Lifecycle of the authenticated session.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum SessionPhase {
    /// Initial state while the persisted credential is checked.
    #[default]
    Bootstrapping,
    Unauthenticated,
    Authenticated(AuthUser),
}

/// Outcome of an auth request (bootstrap profile fetch or login).
#[derive(Debug, Clone, PartialEq)]
pub enum SessionOutcome {
    SignedIn(AuthUser),
    SignedOut,
}

/// Pure session state machine.
///
/// Every async auth call takes a ticket from [`begin`]; [`apply`] only
/// accepts the outcome carrying the most recently issued ticket, so a slow
/// response can never clobber a newer intent.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SessionMachine {
    phase: SessionPhase,
    issued: u64,
}

impl SessionMachine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> &SessionPhase {
        &self.phase
    }

    /// Issue a ticket for an auth request about to start.
    pub fn begin(&mut self) -> u64 {
        self.issued += 1;
        self.issued
    }

    /// Apply a request outcome. Returns false (and changes nothing) when the
    /// ticket is stale.
    pub fn apply(&mut self, ticket: u64, outcome: SessionOutcome) -> bool {
        if ticket != self.issued {
            return false;
        }
        self.phase = match outcome {
            SessionOutcome::SignedIn(user) => SessionPhase::Authenticated(user),
            SessionOutcome::SignedOut => SessionPhase::Unauthenticated,
        };
        true
    }

    /// Synchronous sign-out (logout button). Invalidates in-flight tickets.
    pub fn sign_out(&mut self) {
        self.issued += 1;
        self.phase = SessionPhase::Unauthenticated;
    }
}

/// Global session state provided as context.
#[derive(Clone, Copy)]
pub struct SessionState {
    machine: Signal<SessionMachine>,
}

impl SessionState {
    pub fn new() -> Self {
        Self {
            machine: Signal::new(SessionMachine::new()),
        }
    }

    pub fn phase(&self) -> SessionPhase {
        self.machine.read().phase().clone()
    }

    pub fn begin_request(&mut self) -> u64 {
        self.machine.write().begin()
    }

    pub fn apply(&mut self, ticket: u64, outcome: SessionOutcome) -> bool {
        self.machine.write().apply(ticket, outcome)
    }

    pub fn sign_out(&mut self) {
        self.machine.write().sign_out();
    }
}

/// Hook to access session state.
pub fn use_session() -> SessionState {
    use_context::<SessionState>()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(role: &str) -> AuthUser {
        AuthUser {
            id: 1,
            email: "ana@clinic.test".into(),
            first_name: "Ana".into(),
            last_name: "Gomez".into(),
            role: role.into(),
            phone: None,
        }
    }

    #[test]
    fn starts_bootstrapping() {
        let machine = SessionMachine::new();
        assert_eq!(*machine.phase(), SessionPhase::Bootstrapping);
    }

    #[test]
    fn bootstrap_without_credential_signs_out() {
        let mut machine = SessionMachine::new();
        let ticket = machine.begin();
        assert!(machine.apply(ticket, SessionOutcome::SignedOut));
        assert_eq!(*machine.phase(), SessionPhase::Unauthenticated);
    }

    #[test]
    fn bootstrap_with_profile_authenticates() {
        let mut machine = SessionMachine::new();
        let ticket = machine.begin();
        assert!(machine.apply(ticket, SessionOutcome::SignedIn(user("PATIENT"))));
        match machine.phase() {
            SessionPhase::Authenticated(u) => assert_eq!(u.role, "PATIENT"),
            other => panic!("unexpected phase {other:?}"),
        }
    }

    #[test]
    fn stale_ticket_is_ignored() {
        let mut machine = SessionMachine::new();
        let first = machine.begin();
        let second = machine.begin();

        // The slow first response arrives after a newer request was issued.
        assert!(!machine.apply(first, SessionOutcome::SignedIn(user("ADMIN"))));
        assert_eq!(*machine.phase(), SessionPhase::Bootstrapping);

        assert!(machine.apply(second, SessionOutcome::SignedOut));
        assert_eq!(*machine.phase(), SessionPhase::Unauthenticated);
    }

    #[test]
    fn login_after_failed_login_still_applies() {
        let mut machine = SessionMachine::new();
        let boot = machine.begin();
        machine.apply(boot, SessionOutcome::SignedOut);

        // Failed login leaves the phase unchanged.
        let attempt = machine.begin();
        assert!(machine.apply(attempt, SessionOutcome::SignedOut));
        assert_eq!(*machine.phase(), SessionPhase::Unauthenticated);

        let retry = machine.begin();
        assert!(machine.apply(retry, SessionOutcome::SignedIn(user("DENTIST"))));
        assert!(matches!(machine.phase(), SessionPhase::Authenticated(_)));
    }

    #[test]
    fn sign_out_invalidates_inflight_requests() {
        let mut machine = SessionMachine::new();
        let boot = machine.begin();
        machine.apply(boot, SessionOutcome::SignedIn(user("ADMIN")));

        let slow = machine.begin();
        machine.sign_out();
        assert_eq!(*machine.phase(), SessionPhase::Unauthenticated);

        // The response of the pre-logout request lands on a dead ticket.
        assert!(!machine.apply(slow, SessionOutcome::SignedIn(user("ADMIN"))));
        assert_eq!(*machine.phase(), SessionPhase::Unauthenticated);
    }
}
