pub mod auth;
pub mod ui;
pub mod user_management;

use self::auth::AuthDomain;
use self::user_management::UserManagementDomain;

#[derive(Debug)]
pub struct Domains {
    pub auth: AuthDomain,
    pub user_management: UserManagementDomain,
}
