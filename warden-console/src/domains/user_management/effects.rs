//! Remote calls issued by the user management update handler.
//!
//! Each function performs one service call and folds the outcome into the
//! message that carries it back to the update loop. Errors are flattened to
//! their display text.

use std::sync::Arc;

use warden_model::{UserDraft, UserId};

use super::messages::Message;
use super::state::LocalKey;
use crate::infrastructure::services::user_management::UserAdminService;

pub async fn load_users(service: Arc<dyn UserAdminService>) -> Message {
    let result = service.list_users().await.map_err(|e| e.to_string());
    Message::UsersLoaded(result)
}

pub async fn create_user(
    service: Arc<dyn UserAdminService>,
    key: LocalKey,
    draft: UserDraft,
) -> Message {
    let result = service.create_user(draft).await.map_err(|e| e.to_string());
    Message::UserCreated(key, result)
}

pub async fn remove_user(service: Arc<dyn UserAdminService>, user_id: UserId) -> Message {
    let result = service
        .delete_user(user_id.clone())
        .await
        .map_err(|e| e.to_string());
    Message::UserRemoved(user_id, result)
}

pub async fn remove_orphan(service: Arc<dyn UserAdminService>, user_id: UserId) -> Message {
    let result = service
        .delete_user(user_id.clone())
        .await
        .map_err(|e| e.to_string());
    Message::OrphanRemoved(user_id, result)
}
