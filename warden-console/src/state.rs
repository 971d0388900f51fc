use std::sync::Arc;

use crate::app::AppConfig;
use crate::domains::Domains;
use crate::domains::auth::{AuthDomain, AuthDomainState};
use crate::domains::user_management::UserManagementDomain;
use crate::infrastructure::services::session::SessionService;
use crate::infrastructure::services::user_management::UserAdminService;

/// Service handles the domains are wired with.
#[derive(Clone)]
pub struct Services {
    pub session: Arc<dyn SessionService>,
    pub user_admin: Arc<dyn UserAdminService>,
}

impl std::fmt::Debug for Services {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Services").finish_non_exhaustive()
    }
}

#[derive(Debug)]
pub struct State {
    pub config: Arc<AppConfig>,
    pub domains: Domains,
}

impl State {
    pub fn new(config: Arc<AppConfig>, services: Services) -> Self {
        Self {
            config,
            domains: Domains {
                auth: AuthDomain::new(AuthDomainState::new(services.session)),
                user_management: UserManagementDomain::new(services.user_admin),
            },
        }
    }
}
