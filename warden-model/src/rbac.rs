//! Role-based access control for user administration
//!
//! Operators are assigned roles, and roles carry a default set of
//! permissions. Individual permissions can be granted or denied per actor,
//! and an explicit entry always wins over the role defaults.
//!
//! ## Example
//!
//! ```
//! use warden_model::rbac::{Actor, permissions, roles};
//!
//! let actor = Actor::new("1", "ann").with_role(roles::MANAGER);
//! assert!(actor.has_permission(permissions::USERS_CREATE));
//! assert!(!actor.has_permission(permissions::USERS_DELETE));
//! ```

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::ids::UserId;

/// Well-known role names
pub mod roles {
    pub const USER: &str = "user";
    pub const MANAGER: &str = "manager";
    pub const ADMIN: &str = "admin";
}

/// Well-known permission constants
pub mod permissions {
    pub const USERS_READ: &str = "users:read";
    pub const USERS_CREATE: &str = "users:create";
    pub const USERS_UPDATE: &str = "users:update";
    pub const USERS_DELETE: &str = "users:delete";
}

/// Default permissions carried by a role.
pub fn role_grants(role: &str) -> &'static [&'static str] {
    use permissions::*;

    match role {
        roles::ADMIN => &[USERS_READ, USERS_CREATE, USERS_UPDATE, USERS_DELETE],
        roles::MANAGER => &[USERS_READ, USERS_CREATE, USERS_UPDATE],
        _ => &[],
    }
}

/// The authenticated operator whose permissions gate the console.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Actor {
    pub user_id: UserId,
    pub username: String,
    /// Role names assigned to the operator
    #[serde(default)]
    pub roles: Vec<String>,
    /// Explicit per-actor overrides (name -> granted)
    #[serde(default)]
    pub permissions: HashMap<String, bool>,
}

impl Actor {
    pub fn new(user_id: impl Into<UserId>, username: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            username: username.into(),
            roles: Vec::new(),
            permissions: HashMap::new(),
        }
    }

    pub fn with_role(mut self, role: impl Into<String>) -> Self {
        self.roles.push(role.into());
        self
    }

    pub fn with_permission(mut self, permission: impl Into<String>, granted: bool) -> Self {
        self.permissions.insert(permission.into(), granted);
        self
    }

    /// Check if the actor has a specific role
    pub fn has_role(&self, role_name: &str) -> bool {
        self.roles.iter().any(|r| r == role_name)
    }

    /// Check if the actor holds a permission, either explicitly or through
    /// one of its roles. Explicit denials override role grants.
    pub fn has_permission(&self, permission: &str) -> bool {
        if let Some(&granted) = self.permissions.get(permission) {
            return granted;
        }

        self.roles
            .iter()
            .any(|role| role_grants(role).contains(&permission))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn admin_role_grants_all_user_permissions() {
        let actor = Actor::new("1", "root").with_role(roles::ADMIN);
        for permission in role_grants(roles::ADMIN) {
            assert!(actor.has_permission(permission));
        }
    }

    #[test]
    fn plain_user_role_grants_nothing() {
        let actor = Actor::new("2", "bob").with_role(roles::USER);
        assert!(!actor.has_permission(permissions::USERS_READ));
    }

    #[test]
    fn explicit_denial_overrides_role() {
        let actor = Actor::new("3", "mgr")
            .with_role(roles::MANAGER)
            .with_permission(permissions::USERS_UPDATE, false);

        assert!(actor.has_permission(permissions::USERS_CREATE));
        assert!(!actor.has_permission(permissions::USERS_UPDATE));
    }

    #[test]
    fn explicit_grant_without_role() {
        let actor = Actor::new("4", "aud").with_permission(permissions::USERS_READ, true);
        assert!(actor.has_permission(permissions::USERS_READ));
        assert!(!actor.has_permission(permissions::USERS_DELETE));
    }
}
