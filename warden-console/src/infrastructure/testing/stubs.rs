use std::collections::VecDeque;
use std::sync::Arc;

use anyhow::{Result, anyhow};
use async_trait::async_trait;
use chrono::Utc;
use parking_lot::RwLock;
use uuid::Uuid;
use warden_model::{Actor, User, UserDraft, UserId, roles};

use crate::infrastructure::services::session::SessionService;
use crate::infrastructure::services::user_management::UserAdminService;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StubCall {
    List,
    Create,
    Delete,
}

#[derive(Debug, Default)]
struct InnerUserState {
    users: Vec<User>,
    failures: VecDeque<(StubCall, String)>,
    created: Vec<UserDraft>,
    deleted: Vec<UserId>,
}

impl InnerUserState {
    fn take_failure(&mut self, call: StubCall) -> Option<String> {
        let index = self.failures.iter().position(|(c, _)| *c == call)?;
        self.failures.remove(index).map(|(_, message)| message)
    }
}

/// User store kept in memory; ids are assigned like a server would.
#[derive(Debug, Clone, Default)]
pub struct InMemoryUserAdminService {
    inner: Arc<RwLock<InnerUserState>>,
}

impl InMemoryUserAdminService {
    pub fn new(users: Vec<User>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(InnerUserState {
                users,
                ..InnerUserState::default()
            })),
        }
    }

    pub fn seeded() -> Self {
        Self::new(sample_users())
    }

    /// Make the next call of the given kind fail with `message`.
    pub fn fail_next(&self, call: StubCall, message: impl Into<String>) {
        self.inner.write().failures.push_back((call, message.into()));
    }

    pub fn users(&self) -> Vec<User> {
        self.inner.read().users.clone()
    }

    pub fn created_drafts(&self) -> Vec<UserDraft> {
        self.inner.read().created.clone()
    }

    pub fn deleted_ids(&self) -> Vec<UserId> {
        self.inner.read().deleted.clone()
    }
}

#[async_trait]
impl UserAdminService for InMemoryUserAdminService {
    async fn list_users(&self) -> Result<Vec<User>> {
        let mut inner = self.inner.write();
        if let Some(message) = inner.take_failure(StubCall::List) {
            return Err(anyhow!(message));
        }
        Ok(inner.users.clone())
    }

    async fn create_user(&self, draft: UserDraft) -> Result<User> {
        let mut inner = self.inner.write();
        inner.created.push(draft.clone());
        if let Some(message) = inner.take_failure(StubCall::Create) {
            return Err(anyhow!(message));
        }

        let mut user = User::from_draft(UserId::new(Uuid::now_v7().to_string()), draft);
        user.created_at = Some(Utc::now());
        inner.users.push(user.clone());
        Ok(user)
    }

    async fn delete_user(&self, user_id: UserId) -> Result<()> {
        let mut inner = self.inner.write();
        inner.deleted.push(user_id.clone());
        if let Some(message) = inner.take_failure(StubCall::Delete) {
            return Err(anyhow!(message));
        }

        let before = inner.users.len();
        inner.users.retain(|user| user.id != user_id);
        if inner.users.len() == before {
            return Err(anyhow!("User {} not found", user_id));
        }
        Ok(())
    }
}

/// Session stub returning a fixed actor (or none).
#[derive(Debug, Clone)]
pub struct StubSessionService {
    actor: Option<Actor>,
}

impl StubSessionService {
    pub fn new(actor: Option<Actor>) -> Self {
        Self { actor }
    }
}

impl Default for StubSessionService {
    fn default() -> Self {
        Self::new(Some(sample_admin()))
    }
}

#[async_trait]
impl SessionService for StubSessionService {
    async fn current_actor(&self) -> Result<Option<Actor>> {
        Ok(self.actor.clone())
    }
}

pub fn sample_admin() -> Actor {
    Actor::new("admin-1", "demo_admin").with_role(roles::ADMIN)
}

pub fn sample_users() -> Vec<User> {
    [
        ("1", "Ann Carter", "ann@example.com", roles::ADMIN),
        ("2", "Bo Lindqvist", "bo@example.com", roles::MANAGER),
        ("3", "Cy Okafor", "cy@example.com", roles::USER),
    ]
    .into_iter()
    .map(|(id, name, email, role)| {
        let mut user = User::new(id, name);
        user.email = Some(email.to_string());
        user.role = Some(role.to_string());
        user
    })
    .collect()
}
