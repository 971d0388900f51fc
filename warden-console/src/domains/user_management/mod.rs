//! User management domain
//!
//! State and logic behind the admin users screen: the user list, the
//! add/edit modal, and the calls to the user-management service.

pub mod effects;
pub mod messages;
pub mod state;
pub mod update;

use std::sync::Arc;

use self::state::UserManagementState;
use crate::infrastructure::services::user_management::UserAdminService;

pub struct UserManagementDomain {
    pub state: UserManagementState,
    pub user_admin_service: Arc<dyn UserAdminService>,
}

impl UserManagementDomain {
    pub fn new(user_admin_service: Arc<dyn UserAdminService>) -> Self {
        Self {
            state: UserManagementState::new(),
            user_admin_service,
        }
    }
}

impl std::fmt::Debug for UserManagementDomain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserManagementDomain")
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}
