//! Submit state machine shared by the login and registration pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages hand a snapshot of their form to `SubmitController::submit`. The
//! controller validates, guards against overlapping submissions, performs the
//! request, then applies side effects through injected collaborators:
//! `Notifier` (alert slot), `TokenStore` (login token) and `Navigator`.
//!
//! STATES
//! ======
//! `Idle -> Submitting -> Idle`. The phase lives in a `PhaseCell` so the page
//! can render a spinner from the same value the controller uses as its lock.
//! The guard returns the phase to `Idle` on every exit path, including a
//! dropped future.

#[cfg(test)]
#[path = "submit_test.rs"]
mod submit_test;

use std::cell::Cell;

use leptos::prelude::*;

use crate::net::auth_api::AuthClient;
use crate::net::http::{HttpTransport, RequestError};
use crate::state::credential::{CredentialForm, ValidationErrors, validate};
use crate::state::notification::{Notification, Notifier};
use crate::util::navigate::Navigator;
use crate::util::token_store::TokenStore;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmitPhase {
    #[default]
    Idle,
    Submitting,
}

/// Storage for the current submit phase.
pub trait PhaseCell {
    fn phase(&self) -> SubmitPhase;
    fn set_phase(&self, phase: SubmitPhase);
}

impl PhaseCell for Cell<SubmitPhase> {
    fn phase(&self) -> SubmitPhase {
        self.get()
    }

    fn set_phase(&self, phase: SubmitPhase) {
        self.set(phase);
    }
}

impl PhaseCell for RwSignal<SubmitPhase> {
    fn phase(&self) -> SubmitPhase {
        self.get_untracked()
    }

    fn set_phase(&self, phase: SubmitPhase) {
        self.set(phase);
    }
}

/// Holds the phase at `Submitting` until dropped.
struct PhaseGuard<'a, P: PhaseCell> {
    cell: &'a P,
}

impl<'a, P: PhaseCell> PhaseGuard<'a, P> {
    fn acquire(cell: &'a P) -> Option<Self> {
        if cell.phase() == SubmitPhase::Submitting {
            return None;
        }
        cell.set_phase(SubmitPhase::Submitting);
        Some(Self { cell })
    }
}

impl<P: PhaseCell> Drop for PhaseGuard<'_, P> {
    fn drop(&mut self) {
        self.cell.set_phase(SubmitPhase::Idle);
    }
}

/// What happened to one submit trigger.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Required fields were blank; nothing was sent.
    Invalid(ValidationErrors),
    /// Another submission is still in flight; nothing was sent.
    Busy,
    Succeeded,
    Failed(RequestError),
}

pub struct SubmitController<T, N, S, V, P = Cell<SubmitPhase>> {
    client: AuthClient<T>,
    notifier: N,
    tokens: S,
    navigator: V,
    phase: P,
}

impl<T, N, S, V, P> SubmitController<T, N, S, V, P>
where
    T: HttpTransport,
    N: Notifier,
    S: TokenStore,
    V: Navigator,
    P: PhaseCell,
{
    pub fn new(client: AuthClient<T>, notifier: N, tokens: S, navigator: V, phase: P) -> Self {
        Self { client, notifier, tokens, navigator, phase }
    }

    pub fn phase(&self) -> SubmitPhase {
        self.phase.phase()
    }

    /// Run one submission of `form` through validation, request and side effects.
    pub async fn submit<F: CredentialForm>(&self, form: &F) -> SubmitOutcome {
        if self.phase() == SubmitPhase::Submitting {
            leptos::logging::log!("{} submit ignored: request already in flight", F::ENDPOINT.path());
            return SubmitOutcome::Busy;
        }

        let errors = validate(form);
        if !errors.is_empty() {
            return SubmitOutcome::Invalid(errors);
        }

        let Some(_guard) = PhaseGuard::acquire(&self.phase) else {
            return SubmitOutcome::Busy;
        };

        let endpoint = F::ENDPOINT;
        match self.client.submit(form).await {
            Ok(success) => {
                if let Some(token) = success.token.as_deref() {
                    self.tokens.save_token(token);
                }
                self.notifier.show(Notification::success(endpoint.success_message()));
                self.navigator.navigate(endpoint.success_route());
                SubmitOutcome::Succeeded
            }
            Err(err) => {
                leptos::logging::error!("{} request failed: {err}", endpoint.path());
                self.notifier.show(Notification::failure(endpoint.failure_message()));
                SubmitOutcome::Failed(err)
            }
        }
    }
}
