use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;
use warden_model::{User, UserDraft, UserId};

use crate::infrastructure::api_client::ApiClient;
use crate::infrastructure::constants::routes::v1;

/// Remote operations behind the admin users screen.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserAdminService: Send + Sync {
    async fn list_users(&self) -> Result<Vec<User>>;
    /// Returns the user as stored by the server, with its assigned id.
    async fn create_user(&self, draft: UserDraft) -> Result<User>;
    async fn delete_user(&self, user_id: UserId) -> Result<()>;
}

#[derive(Debug, Clone)]
pub struct UserAdminApiAdapter {
    client: Arc<ApiClient>,
}

impl UserAdminApiAdapter {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl UserAdminService for UserAdminApiAdapter {
    async fn list_users(&self) -> Result<Vec<User>> {
        self.client.get(v1::admin::USERS).await
    }

    async fn create_user(&self, draft: UserDraft) -> Result<User> {
        self.client.post(v1::admin::USERS, &draft).await
    }

    async fn delete_user(&self, user_id: UserId) -> Result<()> {
        let url = self.client.item_url(v1::admin::USERS, user_id.as_str())?;
        self.client.delete(&url).await
    }
}
