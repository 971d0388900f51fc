use std::sync::Arc;

use anyhow::Result;
use iced::Task;

use crate::app::AppConfig;
use crate::common::messages::DomainMessage;
use crate::domains::auth::messages::Message as AuthMessage;
use crate::infrastructure::api_client::ApiClient;
use crate::infrastructure::services::session::SessionApiAdapter;
use crate::infrastructure::services::user_management::UserAdminApiAdapter;
use crate::infrastructure::testing::{InMemoryUserAdminService, StubSessionService};
use crate::state::{Services, State};

/// Wire the services the configuration asks for.
pub fn build_services(config: &AppConfig) -> Result<Services> {
    if config.use_test_stubs() {
        log::info!("Using in-memory stub services");
        return Ok(Services {
            session: Arc::new(StubSessionService::default()),
            user_admin: Arc::new(InMemoryUserAdminService::seeded()),
        });
    }

    let client = Arc::new(ApiClient::from_config(config)?);
    Ok(Services {
        session: Arc::new(SessionApiAdapter::new(Arc::clone(&client))),
        user_admin: Arc::new(UserAdminApiAdapter::new(client)),
    })
}

/// Boot logic for the running application, returning the initial state and
/// the task that resolves the operator.
pub fn runtime_boot(config: Arc<AppConfig>, services: Services) -> (State, Task<DomainMessage>) {
    log::info!("[Boot] Starting console against {}", config.server_url());
    let state = State::new(config, services);
    (state, Task::done(DomainMessage::from(AuthMessage::ResolveActor)))
}
