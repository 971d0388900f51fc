//! Permission helper for RBAC checks
//!
//! Keeps the per-affordance permission logic for the admin users screen in
//! one place. A checker is built from the current actor each time it is
//! needed; nothing is cached between renders.

use warden_model::{Actor, permissions, roles};

/// Permission checker for the current actor
#[derive(Debug, Clone, Copy)]
pub struct PermissionChecker<'a> {
    actor: Option<&'a Actor>,
}

impl<'a> PermissionChecker<'a> {
    pub fn new(actor: Option<&'a Actor>) -> Self {
        Self { actor }
    }

    /// Check if the actor has a specific permission
    pub fn has_permission(&self, permission: &str) -> bool {
        self.actor
            .map(|a| a.has_permission(permission))
            .unwrap_or(false)
    }

    /// Check if the actor has the admin role
    pub fn is_admin(&self) -> bool {
        self.actor
            .map(|a| a.has_role(roles::ADMIN))
            .unwrap_or(false)
    }

    /// Read access to the user list; gates the whole screen
    pub fn can_get_users(&self) -> bool {
        self.has_permission(permissions::USERS_READ) || self.is_admin()
    }

    pub fn can_add_user(&self) -> bool {
        self.has_permission(permissions::USERS_CREATE)
    }

    pub fn can_edit_user(&self) -> bool {
        self.has_permission(permissions::USERS_UPDATE)
    }

    pub fn can_remove_user(&self) -> bool {
        self.has_permission(permissions::USERS_DELETE)
    }

    /// Snapshot of the four admin-screen checks
    pub fn user_admin_capabilities(&self) -> UserAdminCapabilities {
        UserAdminCapabilities {
            can_get_users: self.can_get_users(),
            can_add_user: self.can_add_user(),
            can_edit_user: self.can_edit_user(),
            can_remove_user: self.can_remove_user(),
        }
    }
}

/// Evaluated once per render or update from the current actor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UserAdminCapabilities {
    pub can_get_users: bool,
    pub can_add_user: bool,
    pub can_edit_user: bool,
    pub can_remove_user: bool,
}

/// Extension trait for State to easily check permissions
pub trait StatePermissionExt {
    /// Get a permission checker for the current actor
    fn permission_checker(&self) -> PermissionChecker<'_>;
}

impl StatePermissionExt for crate::state::State {
    fn permission_checker(&self) -> PermissionChecker<'_> {
        PermissionChecker::new(self.domains.auth.state.actor())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_actor_has_no_permissions() {
        let checker = PermissionChecker::new(None);
        assert!(!checker.can_get_users());
        assert!(!checker.can_add_user());
        assert!(!checker.can_edit_user());
        assert!(!checker.can_remove_user());
        assert!(!checker.is_admin());
    }

    #[test]
    fn manager_cannot_remove() {
        let actor = Actor::new("m", "manager").with_role(roles::MANAGER);
        let checker = PermissionChecker::new(Some(&actor));
        assert!(checker.can_get_users());
        assert!(checker.can_add_user());
        assert!(checker.can_edit_user());
        assert!(!checker.can_remove_user());
    }

    #[test]
    fn admin_reads_even_when_read_is_denied() {
        let actor = Actor::new("a", "root")
            .with_role(roles::ADMIN)
            .with_permission(permissions::USERS_READ, false);
        let checker = PermissionChecker::new(Some(&actor));
        assert!(checker.can_get_users());
    }

    #[test]
    fn checks_are_independent() {
        let actor = Actor::new("x", "deleter")
            .with_permission(permissions::USERS_READ, true)
            .with_permission(permissions::USERS_DELETE, true);
        let checker = PermissionChecker::new(Some(&actor));
        assert!(checker.can_remove_user());
        assert!(!checker.can_add_user());
        assert!(!checker.can_edit_user());
    }
}
