use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;
use warden_model::Actor;

use crate::infrastructure::api_client::{ApiClient, ApiError};
use crate::infrastructure::constants::routes::v1;

/// Resolves the operator the console acts on behalf of.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SessionService: Send + Sync {
    /// `Ok(None)` when no operator is signed in.
    async fn current_actor(&self) -> Result<Option<Actor>>;
}

#[derive(Debug, Clone)]
pub struct SessionApiAdapter {
    client: Arc<ApiClient>,
}

impl SessionApiAdapter {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl SessionService for SessionApiAdapter {
    async fn current_actor(&self) -> Result<Option<Actor>> {
        match self.client.get::<Actor>(v1::session::ME).await {
            Ok(actor) => Ok(Some(actor)),
            Err(err)
                if err
                    .downcast_ref::<ApiError>()
                    .is_some_and(ApiError::is_unauthorized) =>
            {
                Ok(None)
            }
            Err(err) => Err(err),
        }
    }
}
