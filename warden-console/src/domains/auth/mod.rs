//! Auth domain
//!
//! Holds the operator the console acts for. The actor is resolved once at
//! startup and handed to permission checks explicitly.

pub mod messages;
pub mod permissions;
pub mod update;

use std::sync::Arc;

use warden_model::Actor;

use crate::infrastructure::services::session::SessionService;

#[derive(Debug, Clone, Default, PartialEq)]
pub enum ActorStatus {
    #[default]
    Resolving,
    SignedIn(Actor),
    SignedOut,
    Failed(String),
}

pub struct AuthDomainState {
    pub status: ActorStatus,
    pub session_service: Arc<dyn SessionService>,
}

impl AuthDomainState {
    pub fn new(session_service: Arc<dyn SessionService>) -> Self {
        Self {
            status: ActorStatus::Resolving,
            session_service,
        }
    }

    pub fn actor(&self) -> Option<&Actor> {
        match &self.status {
            ActorStatus::SignedIn(actor) => Some(actor),
            _ => None,
        }
    }
}

impl std::fmt::Debug for AuthDomainState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthDomainState")
            .field("status", &self.status)
            .finish_non_exhaustive()
    }
}

#[derive(Debug)]
pub struct AuthDomain {
    pub state: AuthDomainState,
}

impl AuthDomain {
    pub fn new(state: AuthDomainState) -> Self {
        Self { state }
    }
}
